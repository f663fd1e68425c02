use chrono::NaiveDate;
use yew::prelude::*;

use crate::config::FormStyle;
use crate::models::{Draft, TransactionType};

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub draft: Draft,
    pub saving: bool,
    pub on_change: Callback<Draft>,
    pub on_submit: Callback<()>,
}

fn edit_with(
    draft: &Draft,
    on_change: &Callback<Draft>,
    apply: fn(&mut Draft, String),
) -> impl Fn(String) + 'static {
    let draft = draft.clone();
    let on_change = on_change.clone();
    move |value: String| {
        let mut next = draft.clone();
        apply(&mut next, value);
        on_change.emit(next);
    }
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let on_amount = {
        let edit = edit_with(&props.draft, &props.on_change, |d, v| d.amount = v);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_description = {
        let edit = edit_with(&props.draft, &props.on_change, |d, v| d.description = v);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    // A cleared date input keeps the previous date.
    let on_date = {
        let edit = edit_with(&props.draft, &props.on_change, |d, v| {
            if let Ok(date) = NaiveDate::parse_from_str(&v, "%Y-%m-%d") {
                d.date = date;
            }
        });
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_kind = {
        let edit = edit_with(&props.draft, &props.on_change, |d, v| {
            if let Some(kind) = TransactionType::from_option(&v) {
                d.kind = kind;
            }
        });
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            edit(select.value());
        })
    };
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let kind_class = match props.draft.kind {
        TransactionType::Income => "w-full p-2 border rounded border-green-500 bg-green-100 text-green-800",
        TransactionType::Expense => "w-full p-2 border rounded border-red-500 bg-red-100 text-red-800",
    };

    html! {
        <form class="flex flex-col gap-4" onsubmit={on_submit}>
            <input type="number" min="0" step="0.01" placeholder="Amount" value={props.draft.amount.clone()} oninput={on_amount} class="w-full p-2 border rounded border-green-500" />
            <select class={kind_class} onchange={on_kind}>
                { for [TransactionType::Income, TransactionType::Expense].into_iter().map(|kind| html! {
                    <option value={kind.as_str()} selected={kind == props.draft.kind}>{ kind.label() }</option>
                }) }
            </select>
            <input type="date" value={props.draft.date.format("%Y-%m-%d").to_string()} onchange={on_date} class="w-full p-2 border rounded border-purple-500" />
            <input placeholder="Description" value={props.draft.description.clone()} oninput={on_description} class="w-full p-2 border rounded border-orange-500" />
            <button type="submit" class="self-center w-2/5 bg-black text-white rounded-full py-2 hover:bg-white hover:text-black hover:border-2 hover:border-black" disabled={props.saving}>
                { if props.saving { "Saving..." } else { "Add Transaction" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormFrameProps {
    pub style: FormStyle,
    pub open: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Places the form according to the configured presentation. The inline
/// card ignores `open` and is always shown.
#[function_component(FormFrame)]
pub fn form_frame(props: &FormFrameProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let title = html! {
        <h2 class="text-xl font-bold text-center text-gray-700 mb-4">{"Add Transaction"}</h2>
    };

    match props.style {
        FormStyle::Inline => html! {
            <div class="w-full max-w-[600px] bg-white rounded-lg shadow-xl p-6">
                { title }
                { for props.children.iter() }
            </div>
        },
        _ if !props.open => html! {},
        FormStyle::Modal => html! {
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/50">
                <div class="w-full max-w-md bg-white rounded-lg shadow-xl p-6 relative">
                    <button class="absolute top-3 right-3 text-sm font-bold" aria-label="Close" onclick={on_close}>{"✕"}</button>
                    { title }
                    { for props.children.iter() }
                </div>
            </div>
        },
        FormStyle::Drawer => html! {
            <div class="fixed inset-0 z-40 flex justify-end bg-black/30">
                <div class="h-full w-full max-w-sm bg-white shadow-xl p-6 flex flex-col">
                    <button class="self-end text-sm font-bold mb-2" aria-label="Close" onclick={on_close}>{"✕"}</button>
                    { title }
                    { for props.children.iter() }
                </div>
            </div>
        },
    }
}
