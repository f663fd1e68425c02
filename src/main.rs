mod api;
mod components;
mod config;
mod error;
mod format;
mod ledger;
mod models;
mod notify;
mod session;
mod store;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("starting dashboard against {}", config::FinanceConfig::default().api_base_url);

    yew::Renderer::<components::App>::new().render();
}
