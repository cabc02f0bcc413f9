//! Transient error notifications.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::TOAST_TIMEOUT_MS;

stylance::import_crate_style!(css, "src/components/toast.module.css");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Queue of visible toasts.
#[derive(Clone, Copy)]
pub struct ToastState {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show `message` until dismissed or the timeout passes.
    pub fn push(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                message: message.into(),
            })
        });

        let state = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            state.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toasts(state: ToastState) -> impl IntoView {
    view! {
        <div class=css::toasts role="status" aria-live="polite">
            <For
                each=move || state.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=css::toast>
                            <span class=css::message>{toast.message}</span>
                            <button
                                class=css::dismiss
                                on:click=move |_| state.dismiss(id)
                                title="Dismiss"
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
