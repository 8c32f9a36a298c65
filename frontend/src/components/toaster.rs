//! Toast notifications.
//!
//! [`Toasts`] is provided once by the app and pushed to from anywhere below
//! it. [`Toaster`] renders the queue and dismisses entries on click or
//! after [`TOAST_DURATION_MS`].

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::{Notification, Toast, ToastId, ToastQueue, TOAST_DURATION_MS};

/// Handle to the shared toast queue.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    /// Creates the queue and provides it as context.
    pub fn provide() -> Self {
        let toasts = Self(create_rw_signal(ToastQueue::default()));
        provide_context(toasts);
        toasts
    }

    /// Handle provided by an ancestor. Panics if none was provided.
    pub fn expect() -> Self {
        expect_context::<Toasts>()
    }

    /// Shows a notification and schedules its dismissal.
    pub fn push(&self, notification: Notification) {
        let queue = self.0;
        let Some(id) = queue.try_update(|q| q.push(notification)) else {
            return;
        };

        Timeout::new(TOAST_DURATION_MS, move || {
            queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: ToastId) {
        self.0.update(|q| q.dismiss(id));
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = Toasts::expect();

    view! {
        <div class="toaster" role="region" aria-live="polite">
            <For
                each=move || toasts.0.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |Toast { id, notification }| {
                    let class_name = notification.severity.css_class();
                    view! {
                        <div class=class_name role="status">
                            <div class="toast-body">
                                <div class="toast-title">{notification.title}</div>
                                <div class="toast-description">{notification.description}</div>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
