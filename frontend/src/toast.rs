//! 轻量提示消息 (toast)

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    current: RwSignal<Option<Toast>>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), true);
    }

    fn show(&self, message: String, is_error: bool) {
        let toast = Toast { message, is_error };
        self.current.set(Some(toast.clone()));

        // 只清除仍在显示的同一条消息
        let current = self.current;
        Timeout::new(DISMISS_AFTER_MS, move || {
            if current.get_untracked().as_ref() == Some(&toast) {
                current.set(None);
            }
        })
        .forget();
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();

    move || {
        toast.current.get().map(|t| {
            let class = if t.is_error {
                "alert alert-error"
            } else {
                "alert alert-success"
            };
            view! {
                <div class="toast toast-end z-50">
                    <div class=class>
                        <span>{t.message}</span>
                    </div>
                </div>
            }
        })
    }
}
