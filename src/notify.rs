//! Transient toast notifications.

use std::rc::Rc;
use std::time::Duration;

use yew::prelude::*;

pub const TOAST_DURATION: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    fn new(level: ToastLevel, title: &str) -> Self {
        Self {
            id: 0,
            level,
            title: title.to_string(),
            description: None,
        }
    }

    pub fn success(title: &str) -> Self {
        Self::new(ToastLevel::Success, title)
    }

    pub fn warning(title: &str) -> Self {
        Self::new(ToastLevel::Warning, title)
    }

    pub fn error(title: &str) -> Self {
        Self::new(ToastLevel::Error, title)
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u32,
    pub items: Vec<Toast>,
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(mut toast) => {
                next.next_id = next.next_id.wrapping_add(1);
                toast.id = next.next_id;
                next.items.push(toast);
            }
            ToastAction::Dismiss(id) => next.items.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            { for props.toasts.iter().map(|toast| html! {
                <ToastCard key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    yew::platform::time::sleep(TOAST_DURATION).await;
                    on_dismiss.emit(id);
                });
                || ()
            },
            id,
        );
    }

    let class_name = match props.toast.level {
        ToastLevel::Success => "bg-green-100 text-green-800 border-green-500",
        ToastLevel::Warning => "bg-orange-100 text-orange-800 border-orange-500",
        ToastLevel::Error => "bg-red-100 text-red-800 border-red-500",
    };

    let on_close = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("rounded-lg", "border-l-4", "shadow-md", "px-4", "py-3", "flex", "justify-between", "items-start", class_name)}>
            <div>
                <p class="text-sm font-bold">{ &props.toast.title }</p>
                if let Some(description) = &props.toast.description {
                    <p class="text-xs mt-1">{ description }</p>
                }
            </div>
            <button class="text-xs font-bold ml-3" aria-label="Close" onclick={on_close}>{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_toasts_get_distinct_ids() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(Toast::success("a")))
            .reduce(ToastAction::Push(Toast::error("b")));
        let ids: Vec<u32> = toasts.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let toasts = Rc::new(Toasts::default())
            .reduce(ToastAction::Push(Toast::warning("a").with_description("first")))
            .reduce(ToastAction::Push(Toast::error("b")))
            .reduce(ToastAction::Dismiss(1));
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].title, "b");
    }
}
