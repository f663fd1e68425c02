use yew::prelude::*;

use super::icons::icon_trash;
use crate::format::{format_amount_text, format_date};
use crate::ledger::{KindFilter, ListFilter};
use crate::models::{Transaction, TransactionType};

fn row_class(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "p-4 rounded-md shadow-md w-full bg-green-100 text-green-800",
        TransactionType::Expense => "p-4 rounded-md shadow-md w-full bg-red-100 text-red-800",
    }
}

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
    pub currency_symbol: String,
    pub deleting: bool,
    pub on_delete: Callback<i64>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    if props.transactions.is_empty() {
        return html! {
            <p class="text-sm text-gray-500 text-center">{"No transactions to show."}</p>
        };
    }

    html! {
        <div class="flex flex-col gap-4">
            { for props.transactions.iter().map(|tx| {
                let on_delete = props.on_delete.clone();
                let id = tx.id;
                html! {
                    <div key={tx.id} class={row_class(tx.kind)}>
                        <div class="flex justify-between items-center">
                            <div>
                                <p class="font-bold">{ format!("{} - {}", format_amount_text(&tx.amount, &props.currency_symbol), tx.kind) }</p>
                                <p class="text-sm">{ &tx.description }</p>
                                <p class="text-sm text-gray-500">{ format_date(tx.date) }</p>
                            </div>
                            <button
                                class="p-2 rounded bg-red-500 text-white hover:bg-red-600"
                                aria-label="Delete transaction"
                                disabled={props.deleting}
                                onclick={Callback::from(move |_| on_delete.emit(id))}
                            >
                                { icon_trash() }
                            </button>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter: ListFilter,
    pub on_change: Callback<ListFilter>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let options = [
        ("All", KindFilter::All),
        ("Income", KindFilter::Only(TransactionType::Income)),
        ("Expense", KindFilter::Only(TransactionType::Expense)),
    ];

    let on_search = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(ListFilter {
                search: input.value(),
                ..filter.clone()
            });
        })
    };

    let on_clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(ListFilter::default()))
    };

    html! {
        <div class="flex flex-wrap items-center gap-2 mb-4">
            { for options.into_iter().map(|(label, kind)| {
                let class_name = if kind == props.filter.kind {
                    "px-3 py-1 rounded-full text-xs font-bold bg-black text-white"
                } else {
                    "px-3 py-1 rounded-full text-xs font-bold bg-gray-100 text-gray-700"
                };
                let filter = props.filter.clone();
                let on_change = props.on_change.clone();
                html! {
                    <button type="button" class={class_name} onclick={Callback::from(move |_| on_change.emit(ListFilter { kind, ..filter.clone() }))}>
                        { label }
                    </button>
                }
            }) }
            <input placeholder="Search descriptions" value={props.filter.search.clone()} oninput={on_search} class="flex-1 min-w-[160px] p-2 border rounded text-sm" />
            if props.filter.is_active() {
                <button type="button" class="px-3 py-1 rounded-full text-xs font-bold text-gray-500 hover:text-black" onclick={on_clear}>
                    {"Clear"}
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecentActivityProps {
    pub transactions: Vec<Transaction>,
    pub currency_symbol: String,
}

#[function_component(RecentActivity)]
pub fn recent_activity(props: &RecentActivityProps) -> Html {
    html! {
        <div class="bg-white rounded-[10px] border p-6 w-full">
            <h3 class="font-bold text-lg text-gray-800 mb-3">{"Recent Activity"}</h3>
            if props.transactions.is_empty() {
                <p class="text-sm text-gray-500">{"Nothing recorded yet."}</p>
            } else {
                <ul class="divide-y">
                    { for props.transactions.iter().map(|tx| {
                        let sign = if tx.is_income() { "+" } else { "-" };
                        html! {
                            <li key={tx.id} class="py-2 flex justify-between text-sm">
                                <span class="text-gray-700">{ &tx.description }</span>
                                <span class={if tx.is_income() { "text-green-700" } else { "text-red-700" }}>
                                    { format!("{} {}", sign, format_amount_text(&tx.amount, &props.currency_symbol)) }
                                </span>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
