use rust_decimal::Decimal;
use yew::prelude::*;

use super::icons::{icon_arrow_up_right, icon_credit_card, icon_wallet};
use crate::format::format_currency;

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    UpRight,
    CreditCard,
    Wallet,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: Decimal,
    pub icon: StatIcon,
    pub currency_symbol: String,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-[10px] shadow-sm border flex justify-between items-start">
            <div>
                <p class="text-gray-500 text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 class="text-2xl font-bold text-gray-800 tracking-tight">{ format_currency(props.amount, &props.currency_symbol) }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::UpRight => icon_arrow_up_right(),
                        StatIcon::CreditCard => icon_credit_card(),
                        StatIcon::Wallet => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}
