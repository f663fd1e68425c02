use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::icons::icon_plus;
use super::stat_card::{StatCard, StatIcon};
use super::transaction_form::{FormFrame, TransactionForm};
use super::transaction_list::{FilterBar, RecentActivity, TransactionList};
use crate::api::HttpFinanceApi;
use crate::config::{AppSettings, FormStyle};
use crate::format::format_currency;
use crate::ledger::{self, ListFilter};
use crate::notify::Toast;
use crate::store::{
    self, Action, DraftAction, DraftState, Op, OpStatus, TransactionState, ViewSink,
};

/// Presentation knobs for the dashboard. The same view serves every layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    pub form_style: FormStyle,
    pub currency_symbol: String,
    pub recent_count: usize,
}

impl Presentation {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            form_style: settings.form_style,
            currency_symbol: settings.currency_symbol.clone(),
            recent_count: 5,
        }
    }
}

struct HookSink {
    state: UseReducerDispatcher<TransactionState>,
    notify: Callback<Toast>,
}

impl ViewSink for HookSink {
    fn dispatch(&self, action: Action) {
        self.state.dispatch(action);
    }

    fn notify(&self, toast: Toast) {
        self.notify.emit(toast);
    }
}

#[derive(Properties, PartialEq)]
pub struct TransactionViewProps {
    pub api: Rc<HttpFinanceApi>,
    pub presentation: Presentation,
    pub notify: Callback<Toast>,
}

#[function_component(TransactionView)]
pub fn transaction_view(props: &TransactionViewProps) -> Html {
    let state = use_reducer(TransactionState::default);
    let draft = use_reducer(DraftState::default);
    let filter = use_state(ListFilter::default);
    let form_open = use_state(|| false);

    let sink = {
        let dispatcher = state.dispatcher();
        let notify = props.notify.clone();
        move || HookSink {
            state: dispatcher.clone(),
            notify: notify.clone(),
        }
    };

    {
        let api = props.api.clone();
        let sink = sink();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    store::refresh(api.as_ref(), &sink).await;
                });
                || ()
            },
            (),
        );
    }

    let on_draft_change = {
        let draft = draft.dispatcher();
        Callback::from(move |next| draft.dispatch(DraftAction::Edit(next)))
    };

    let on_submit = {
        let api = props.api.clone();
        let submitted = draft.draft.clone();
        let draft = draft.dispatcher();
        let form_open = form_open.clone();
        let sink = sink.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let submitted = submitted.clone();
            let draft = draft.clone();
            let form_open = form_open.clone();
            let sink = sink();
            spawn_local(async move {
                if store::create_transaction(api.as_ref(), &submitted, &sink).await {
                    draft.dispatch(DraftAction::ClearIfUnchanged(submitted));
                    form_open.set(false);
                }
            });
        })
    };

    let on_delete = {
        let api = props.api.clone();
        let sink = sink.clone();
        Callback::from(move |id: i64| {
            let api = api.clone();
            let sink = sink();
            spawn_local(async move {
                store::delete_transaction(api.as_ref(), id, &sink).await;
            });
        })
    };

    let on_open_form = {
        let form_open = form_open.clone();
        Callback::from(move |_| form_open.set(true))
    };
    let on_close_form = {
        let form_open = form_open.clone();
        Callback::from(move |_: ()| form_open.set(false))
    };
    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: ListFilter| filter.set(next))
    };

    let presentation = &props.presentation;
    let symbol = presentation.currency_symbol.clone();
    let totals = state.totals;
    let visible: Vec<_> = ledger::filter_transactions(&state.transactions, &filter)
        .into_iter()
        .cloned()
        .collect();
    let recent = ledger::recent(&state.transactions, presentation.recent_count).to_vec();
    let first_load = state.fetch == OpStatus::Loading && state.transactions.is_empty();

    html! {
        <>
            <section class="bg-gradient-to-r from-[#1a1a1d] to-[#0C0F15] text-white py-20 text-center">
                <h1 class="text-4xl font-bold mb-4">{"Total Control of Your Finances"}</h1>
                <p class="text-xl mb-4">{"Manage, analyze, and optimize your finances efficiently."}</p>
                <div class="inline-block mt-4 p-4 text-2xl font-bold font-mono border-[3px] border-[#00FFFF] rounded-[40px] bg-white/10">
                    {"Current Balance: "}
                    <span class="text-[#FFD700]">{ format_currency(totals.balance, &symbol) }</span>
                </div>
            </section>

            <div class="w-full p-8 flex flex-col items-center gap-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 w-full max-w-[900px]">
                    <StatCard title="Total Income" amount={totals.income} icon={StatIcon::UpRight} currency_symbol={symbol.clone()} />
                    <StatCard title="Total Expenses" amount={totals.expense} icon={StatIcon::CreditCard} currency_symbol={symbol.clone()} />
                    <StatCard title="Current Balance" amount={totals.balance} icon={StatIcon::Wallet} currency_symbol={symbol.clone()} />
                </div>

                if presentation.form_style != FormStyle::Inline {
                    <button onclick={on_open_form} class="flex items-center gap-2 bg-black text-white px-4 py-2 rounded-full font-bold text-sm hover:opacity-90">
                        { icon_plus() }
                        {"Add Transaction"}
                    </button>
                }

                <FormFrame style={presentation.form_style} open={*form_open} on_close={on_close_form}>
                    <TransactionForm
                        draft={draft.draft.clone()}
                        saving={state.status(Op::Create) == OpStatus::Loading}
                        on_change={on_draft_change}
                        on_submit={on_submit}
                    />
                </FormFrame>

                <div class="w-full max-w-[600px]">
                    <RecentActivity transactions={recent} currency_symbol={symbol.clone()} />
                </div>

                <div class="w-full max-w-[600px]">
                    <h2 class="text-2xl font-bold text-center text-gray-700 mb-4">{"Transactions"}</h2>
                    <FilterBar filter={(*filter).clone()} on_change={on_filter_change} />
                    if first_load {
                        <p class="text-sm text-gray-500 text-center">{"Loading transactions..."}</p>
                    } else {
                        <TransactionList
                            transactions={visible}
                            currency_symbol={symbol.clone()}
                            deleting={state.status(Op::Delete) == OpStatus::Loading}
                            on_delete={on_delete}
                        />
                    }
                </div>
            </div>
        </>
    }
}
