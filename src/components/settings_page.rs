use yew::prelude::*;

use crate::config::{save_settings, AppSettings, FormStyle};

const CURRENCIES: [(&str, &str); 5] = [
    ("USD", "USD ($)"),
    ("EUR", "EUR (€)"),
    ("GBP", "GBP (£)"),
    ("JPY", "JPY (¥)"),
    ("PHP", "PHP (₱)"),
];

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let Some(settings) = settings else {
        return html! {};
    };

    let apply = {
        let settings = settings.clone();
        move |next: AppSettings| {
            save_settings(&next);
            log::info!("settings updated: {:?}", next);
            settings.set(next);
        }
    };

    let on_currency_change = {
        let settings = settings.clone();
        let apply = apply.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            apply(settings.with_currency(&input.value()));
        })
    };

    let on_style_change = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            apply(AppSettings {
                form_style: FormStyle::from_code(&input.value()),
                ..(*settings).clone()
            });
        })
    };

    html! {
        <div class="p-6 max-w-4xl mx-auto">
            <h1 class="text-2xl font-bold pb-4 border-b">{"Settings"}</h1>
            <div class="pt-5 grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="bg-white rounded-lg p-6 border">
                    <label class="block text-sm font-medium mb-2">{"Currency"}</label>
                    <select onchange={on_currency_change} class="w-full px-4 py-2 border rounded-lg">
                        { for CURRENCIES.iter().map(|(code, label)| html! {
                            <option value={*code} selected={settings.currency_code == *code}>{ *label }</option>
                        }) }
                    </select>
                    <p class="text-xs text-gray-500 mt-2">{"Used for every amount on the dashboard."}</p>
                </div>

                <div class="bg-white rounded-lg p-6 border">
                    <label class="block text-sm font-medium mb-2">{"Add-transaction form"}</label>
                    <select onchange={on_style_change} class="w-full px-4 py-2 border rounded-lg">
                        { for FormStyle::ALL.into_iter().map(|style| html! {
                            <option value={style.code()} selected={settings.form_style == style}>{ style.label() }</option>
                        }) }
                    </select>
                    <p class="text-xs text-gray-500 mt-2">{"Show the form inline, in a dialog or in a side drawer."}</p>
                </div>
            </div>
        </div>
    }
}
