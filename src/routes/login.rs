use crate::app_lib::{AppConfig, AppError, config::page_location};
use crate::components::{Alert, AlertKind, FormLayout, SubmitButton, show_error_dialog};
use crate::features::webauthn::{ceremony::BrowserCeremony, flow, types::AlertState};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::error;

#[component]
pub fn LoginPage() -> impl IntoView {
    let endpoints = AppConfig::load().login_endpoints(page_location().as_deref());
    let action_url = endpoints.action.clone();
    let (username, set_username) = signal(String::new());
    let (alert, set_alert) = signal(AlertState::Hidden);

    let login_action = Action::new_local(move |username: &String| {
        let username = username.clone();
        let endpoints = endpoints.clone();
        async move {
            flow::login(&BrowserCeremony, &endpoints, &username, move |state| {
                set_alert.set(state)
            })
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            report_failure(&err);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        login_action.dispatch(username.get_untracked());
    };

    view! {
        <FormLayout title="Sign in" subtitle="Use the authenticator registered for your username.">
            <form id="login" action=action_url method="post" on:submit=on_submit>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="login-username">
                        "Username"
                    </label>
                    <input
                        id="login-username"
                        name="username"
                        type="text"
                        autocomplete="username webauthn"
                        class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <SubmitButton
                    label="Sign in"
                    pending_label="Waiting for authenticator..."
                    pending=login_action.pending()
                />
            </form>
            <Alert
                id="touch-alert"
                kind=AlertKind::Info
                visible=Signal::derive(move || alert.get().touch_visible())
                message="Touch your authenticator to continue."
            />
            <Alert
                id="login-success-alert"
                kind=AlertKind::Success
                visible=Signal::derive(move || alert.get().login_success_visible())
                message="Login success."
            />
        </FormLayout>
    }
}

fn report_failure(err: &AppError) {
    error!(%err, "Login failed");
    show_error_dialog(err);
}
