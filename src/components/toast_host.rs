//! Notification surface: a fixed stack of transient toasts.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// Renders the toast queue. Each toast dismisses on click, and in the
/// browser also auto-dismisses a few seconds after it appears.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;

                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
                        toasts.update(|state| state.dismiss(id));
                    });

                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.update(|state| state.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
