use std::rc::Rc;

use yew::prelude::*;

use super::footer::Footer;
use super::navbar::{Navbar, Page};
use super::settings_page::SettingsPage;
use super::transaction_view::{Presentation, TransactionView};
use crate::api::HttpFinanceApi;
use crate::config::{load_settings, AppSettings, FinanceConfig};
use crate::notify::{Toast, ToastAction, Toaster, Toasts};
use crate::session::{self, Session, LOGIN_ROUTE};

#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(Session::load);
    let settings = use_state(load_settings);
    let active_page = use_state(|| Page::Dashboard);
    let toasts = use_reducer(Toasts::default);

    let api = use_memo(
        |session: &Option<Session>| {
            session
                .clone()
                .map(|s| Rc::new(HttpFinanceApi::new(FinanceConfig::default(), s)))
        },
        (*session).clone(),
    );

    let (Some(session), Some(api)) = (&*session, (*api).clone()) else {
        return html! { <LoginRequired /> };
    };

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };
    let on_logout = Callback::from(|_: ()| session::log_out());
    let notify = {
        let toasts = toasts.dispatcher();
        Callback::from(move |toast: Toast| toasts.dispatch(ToastAction::Push(toast)))
    };
    let on_dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let content = match *active_page {
        Page::Dashboard => html! {
            <TransactionView api={api} presentation={Presentation::from_settings(&settings)} notify={notify} />
        },
        Page::Settings => html! { <SettingsPage /> },
    };

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings.clone()}>
            <div class="min-h-screen flex flex-col bg-gray-50">
                <Navbar
                    username={session.display_name().to_string()}
                    active_page={*active_page}
                    on_select={on_select}
                    on_logout={on_logout}
                />
                <main class="flex-1">
                    { content }
                </main>
                <Footer />
            </div>
            <Toaster toasts={toasts.items.clone()} on_dismiss={on_dismiss} />
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}

#[function_component(LoginRequired)]
fn login_required() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="w-full max-w-md bg-white border rounded-2xl shadow-lg p-8 text-center">
                <h1 class="text-2xl font-bold">{"You are signed out"}</h1>
                <p class="text-sm text-gray-500 mt-2">{"Sign in to see your transactions."}</p>
                <a href={LOGIN_ROUTE} class="inline-block mt-6 bg-black text-white px-6 py-2 rounded-full font-semibold">
                    {"Go to login"}
                </a>
            </div>
        </div>
    }
}
