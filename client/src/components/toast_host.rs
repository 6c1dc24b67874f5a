//! Fixed-position stack rendering the toast queue.

use leptos::prelude::*;

use crate::state::toasts::ToastState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        let class = format!("toast {}", toast.notice.level.css_class());
                        view! {
                            <div class=class role="status">
                                <span class="toast__message">{toast.notice.message}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Cerrar"
                                    on:click=move |_| toasts.update(|s| s.dismiss(&id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
