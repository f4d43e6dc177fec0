//! ==============================================================================
//! toasts.rs - toast notifications
//! ==============================================================================
//!
//! `Toasts` is provided once by the app and fetched with `use_toasts()`.
//! error toasts raised for failed requests stay until closed, everything
//! flagged `auto_dismiss` goes away after `TOAST_DISMISS_MS`.
//!
//! ==============================================================================

use std::time::Duration;

use leptos::prelude::*;
use shared::{Appearance, ToastQueue};

use crate::config::TOAST_DISMISS_MS;

#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    /// create the queue and put it in context
    pub fn provide() -> Self {
        let toasts = Toasts(RwSignal::new(ToastQueue::default()));
        provide_context(toasts);
        toasts
    }

    pub fn error(&self, message: impl Into<String>, auto_dismiss: bool) {
        self.push(message.into(), Appearance::Error, auto_dismiss);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), Appearance::Success, true);
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|queue| queue.dismiss(id));
    }

    fn push(&self, message: String, appearance: Appearance, auto_dismiss: bool) {
        let Some(id) = self.0.try_update(|queue| queue.push(message, appearance, auto_dismiss)) else {
            return;
        };

        if auto_dismiss {
            let toasts = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(Duration::from_millis(TOAST_DISMISS_MS)).await;
                toasts.dismiss(id);
            });
        }
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            {move || toasts.0.with(|queue| {
                queue.toasts().iter().map(|toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.appearance.class() role="alert">
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }).collect::<Vec<_>>()
            })}
        </div>
    }
}
