use leptos::prelude::*;

/// Centered card shared by the register and login pages.
#[component]
pub fn FormLayout(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
            <div class="w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)] backdrop-blur sm:p-8">
                <div class="space-y-2">
                    <p class="text-[11px] font-semibold uppercase tracking-[0.2em] text-slate-400">
                        "WebAuthn"
                    </p>
                    <h1 class="text-2xl font-semibold text-slate-900">{title}</h1>
                    <p class="text-sm text-slate-500">{subtitle}</p>
                </div>
                <div class="mt-6 space-y-6">{children()}</div>
            </div>
        </div>
    }
}
