use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-black text-white py-6 mt-10">
            <div class="max-w-[1200px] mx-auto px-4 flex flex-col md:flex-row justify-between items-center gap-2">
                <p>{"© 2025 Spendee. All rights reserved."}</p>
                <div class="flex gap-4">
                    <a href="#" class="text-white">{"Privacy Policy"}</a>
                    <a href="#" class="text-white">{"Terms of Service"}</a>
                </div>
            </div>
        </footer>
    }
}
