mod app;
mod footer;
mod icons;
mod navbar;
mod settings_page;
mod stat_card;
mod transaction_form;
mod transaction_list;
mod transaction_view;

pub use app::App;
