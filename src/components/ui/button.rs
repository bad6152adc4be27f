use leptos::prelude::*;

/// Form submit button that locks while a ceremony is in flight.
#[component]
pub fn SubmitButton(
    label: &'static str,
    pending_label: &'static str,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            class:cursor-not-allowed=move || pending.get()
            class:opacity-70=move || pending.get()
            disabled=move || pending.get()
        >
            {move || if pending.get() { pending_label } else { label }}
        </button>
    }
}
