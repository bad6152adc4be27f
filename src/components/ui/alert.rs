//! Alert banners toggled by the forms. Messages must be safe to render and
//! should never include credential material.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Success,
    Info,
}

/// Renders a styled alert banner that stays in the DOM and is shown or hidden
/// through `display`, so page scripts can still find it by id.
#[component]
pub fn Alert(
    id: &'static str,
    kind: AlertKind,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] message: String,
) -> impl IntoView {
    let class = match kind {
        AlertKind::Success => {
            "alert rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
        }
        AlertKind::Info => {
            "alert rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
        }
    };

    view! {
        <div
            id=id
            class=class
            role="alert"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            {message}
        </div>
    }
}
