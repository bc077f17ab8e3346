//! Renders queued toasts in a fixed corner stack.

use leptos::prelude::*;

use crate::state::toast::{Severity, ToastEntry, ToastState};

fn toast_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "toast",
        Severity::Error => "toast toast--destructive",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|state| state.entries().to_vec())
                key=|entry| entry.id
                children=move |entry: ToastEntry| {
                    let id = entry.id;
                    view! {
                        <div class=toast_class(entry.toast.severity)>
                            <div class="toast__title">{entry.toast.title}</div>
                            <div class="toast__message">{entry.toast.message}</div>
                            <button
                                class="toast__close"
                                type="button"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
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
