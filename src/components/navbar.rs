use yew::prelude::*;

use super::icons::{icon_layout_grid, icon_log_out, icon_settings};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Dashboard,
    Settings,
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        label: "Dashboard",
        page: Page::Dashboard,
        icon: icon_layout_grid,
    },
    NavItem {
        label: "Settings",
        page: Page::Settings,
        icon: icon_settings,
    },
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub username: String,
    pub active_page: Page,
    pub on_select: Callback<Page>,
    pub on_logout: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <header class="bg-[#0C0F15] text-white h-16 flex items-center justify-between px-6">
            <span class="text-2xl font-black tracking-tight">{"Spendee"}</span>
            <nav class="flex items-center gap-2">
                { for NAV_ITEMS.iter().map(|item| {
                    let class_name = if item.page == props.active_page {
                        "flex items-center gap-2 px-4 py-2 rounded-full text-sm font-medium bg-white text-black"
                    } else {
                        "flex items-center gap-2 px-4 py-2 rounded-full text-sm font-medium text-slate-300 hover:bg-white/10"
                    };
                    let on_select = props.on_select.clone();
                    let page = item.page;

                    html! {
                        <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                            { (item.icon)() }
                            <span>{ item.label }</span>
                        </button>
                    }
                }) }
            </nav>
            <div class="flex items-center gap-4">
                <span class="text-sm text-slate-300">{ format!("Hi, {}", props.username) }</span>
                <button onclick={on_logout} class="flex items-center gap-2 px-4 py-2 rounded-full hover:bg-white/10 text-sm font-medium">
                    { icon_log_out() }
                    <span>{"Log Out"}</span>
                </button>
            </div>
        </header>
    }
}
