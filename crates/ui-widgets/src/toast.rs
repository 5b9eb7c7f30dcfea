//! Toast Notifications
//!
//! App-wide toast queue provided via context. Every request failure is
//! reported here; toasts auto-dismiss after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast info",
            ToastLevel::Success => "toast success",
            ToastLevel::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Toast queue handle, Copy so handlers can move it freely
#[derive(Clone, Copy)]
pub struct ToastStore {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl ToastStore {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                level,
                message: message.into(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

/// Create the toast store and provide it to all children
pub fn provide_toasts() -> ToastStore {
    let store = ToastStore::new();
    provide_context(store);
    store
}

pub fn use_toasts() -> ToastStore {
    expect_context::<ToastStore>()
}

/// Toast overlay, mounted once near the app root
#[component]
pub fn Toasts() -> impl IntoView {
    let store = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.css_class()>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button class="toast-dismiss" on:click=move |_| store.dismiss(id)>
                                "×"
                            </button>
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
    fn test_level_css_classes() {
        assert_eq!(ToastLevel::Info.css_class(), "toast info");
        assert_eq!(ToastLevel::Success.css_class(), "toast success");
        assert_eq!(ToastLevel::Error.css_class(), "toast error");
    }
}
