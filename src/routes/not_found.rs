use crate::app_lib::config::{DEFAULT_LOGIN_URL, DEFAULT_REGISTER_URL};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</h1>
            <div class="flex flex-col sm:flex-row items-center justify-center gap-4 text-sm font-medium">
                <A href=DEFAULT_REGISTER_URL>"Register a security key"</A>
                <A href=DEFAULT_LOGIN_URL>"Sign in"</A>
            </div>
        </div>
    }
}
