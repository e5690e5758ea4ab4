//! Leptos Toast Notifications
//!
//! Ephemeral status messages for Leptos apps.
//! Toasts stack in a corner and dismiss themselves after a short delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Severity of a toast, mapped to a CSS class by the `Toaster`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
            ToastLevel::Info => "toast-info",
            ToastLevel::Warning => "toast-warning",
        }
    }
}

/// A single queued toast
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Toast state signals
#[derive(Clone, Copy)]
pub struct Toasts {
    pub items_read: ReadSignal<Vec<Toast>>,
    pub items_write: WriteSignal<Vec<Toast>>,
    /// Monotonic id source so keyed rows never collide
    pub next_id_read: ReadSignal<u32>,
    pub next_id_write: WriteSignal<u32>,
}

/// How long a toast stays on screen
const DISMISS_AFTER_MS: u32 = 2000;

pub fn create_toasts() -> Toasts {
    let (items_read, items_write) = signal(Vec::<Toast>::new());
    let (next_id_read, next_id_write) = signal(0u32);
    Toasts {
        items_read,
        items_write,
        next_id_read,
        next_id_write,
    }
}

/// Fetch the `Toasts` provided by the application root
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Queue a toast without scheduling dismissal. Returns the new toast's id.
pub fn insert_toast(toasts: &Toasts, level: ToastLevel, message: impl Into<String>) -> u32 {
    let id = toasts.next_id_read.get_untracked();
    toasts.next_id_write.set(id + 1);
    toasts.items_write.update(|items| {
        items.push(Toast {
            id,
            level,
            message: message.into(),
        });
    });
    id
}

/// Remove a toast by id
pub fn dismiss_toast(toasts: &Toasts, id: u32) {
    toasts.items_write.update(|items| items.retain(|t| t.id != id));
}

/// Queue a toast and schedule its dismissal
pub fn show_toast(toasts: Toasts, level: ToastLevel, message: impl Into<String>) {
    let id = insert_toast(&toasts, level, message);
    spawn_local(async move {
        TimeoutFuture::new(DISMISS_AFTER_MS).await;
        dismiss_toast(&toasts, id);
    });
}

pub fn toast_success(toasts: Toasts, message: impl Into<String>) {
    show_toast(toasts, ToastLevel::Success, message);
}

pub fn toast_error(toasts: Toasts, message: impl Into<String>) {
    show_toast(toasts, ToastLevel::Error, message);
}

pub fn toast_info(toasts: Toasts, message: impl Into<String>) {
    show_toast(toasts, ToastLevel::Info, message);
}

pub fn toast_warning(toasts: Toasts, message: impl Into<String>) {
    show_toast(toasts, ToastLevel::Warning, message);
}

/// Renders the toast stack. Clicking a toast dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.items_read.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.level.css_class());
                    view! {
                        <div class=class on:click=move |_| dismiss_toast(&toasts, id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_distinct_ids() {
        let toasts = create_toasts();
        let a = insert_toast(&toasts, ToastLevel::Success, "first");
        let b = insert_toast(&toasts, ToastLevel::Error, "second");
        assert_ne!(a, b);
        assert_eq!(toasts.items_read.get_untracked().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let toasts = create_toasts();
        let a = insert_toast(&toasts, ToastLevel::Info, "keep");
        let b = insert_toast(&toasts, ToastLevel::Info, "drop");
        dismiss_toast(&toasts, b);
        let items = toasts.items_read.get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, a);
        assert_eq!(items[0].message, "keep");
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let toasts = create_toasts();
        insert_toast(&toasts, ToastLevel::Warning, "still here");
        dismiss_toast(&toasts, 999);
        assert_eq!(toasts.items_read.get_untracked().len(), 1);
    }

    #[test]
    fn levels_map_to_css_classes() {
        assert_eq!(ToastLevel::Success.css_class(), "toast-success");
        assert_eq!(ToastLevel::Error.css_class(), "toast-error");
        assert_eq!(ToastLevel::Info.css_class(), "toast-info");
        assert_eq!(ToastLevel::Warning.css_class(), "toast-warning");
    }
}
