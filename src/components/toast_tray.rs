//! Overlay tray rendering the shared toast queue.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Fixed-position tray; each toast dismisses on click.
#[component]
pub fn ToastTray() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-tray">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let dismiss_id = toast.id.clone();
                        view! {
                            <button
                                class=format!("toast toast--{}", toast.level.class_suffix())
                                title="Dismiss"
                                on:click=move |_| {
                                    toasts.update(|t| t.dismiss(&dismiss_id));
                                }
                            >
                                <span class="toast__message">{toast.message}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
