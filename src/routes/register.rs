use crate::app_lib::{AppConfig, AppError, config::page_location};
use crate::components::{Alert, AlertKind, FormLayout, SubmitButton, show_error_dialog};
use crate::features::webauthn::{
    ceremony::BrowserCeremony,
    flow,
    types::{AlertState, AuthenticatorAttachment},
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::error;

#[derive(Clone)]
struct RegisterInput {
    username: String,
    attachment: AuthenticatorAttachment,
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let endpoints = AppConfig::load().register_endpoints(page_location().as_deref());
    let action_url = endpoints.action.clone();
    let (username, set_username) = signal(String::new());
    let (attachment, set_attachment) = signal(AuthenticatorAttachment::default());
    let (alert, set_alert) = signal(AlertState::Hidden);

    let register_action = Action::new_local(move |input: &RegisterInput| {
        let input = input.clone();
        let endpoints = endpoints.clone();
        async move {
            flow::register(
                &BrowserCeremony,
                &endpoints,
                &input.username,
                input.attachment,
                move |state| set_alert.set(state),
            )
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = register_action.value().get() {
            report_failure(&err);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        register_action.dispatch(RegisterInput {
            username: username.get_untracked(),
            attachment: attachment.get_untracked(),
        });
    };

    view! {
        <FormLayout
            title="Register a security key"
            subtitle="Choose a username and the kind of authenticator to enroll."
        >
            <form id="register" action=action_url method="post" on:submit=on_submit>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="register-username">
                        "Username"
                    </label>
                    <input
                        id="register-username"
                        name="username"
                        type="text"
                        autocomplete="username webauthn"
                        class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-slate-700" for="register-type">
                        "Authenticator"
                    </label>
                    <select
                        id="register-type"
                        name="type"
                        class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900"
                        on:change=move |event| {
                            set_attachment.set(AuthenticatorAttachment::from_form_value(&event_target_value(&event)));
                        }
                    >
                        <option value={AuthenticatorAttachment::CrossPlatform.as_str()} selected>
                            "Security key"
                        </option>
                        <option value={AuthenticatorAttachment::Platform.as_str()}>
                            "This device"
                        </option>
                    </select>
                </div>
                <SubmitButton
                    label="Register"
                    pending_label="Waiting for authenticator..."
                    pending=register_action.pending()
                />
            </form>
            <Alert
                id="touch-alert"
                kind=AlertKind::Info
                visible=Signal::derive(move || alert.get().touch_visible())
                message="Touch your authenticator to continue."
            />
            <Alert
                id="register-success-alert"
                kind=AlertKind::Success
                visible=Signal::derive(move || alert.get().register_success_visible())
                message="Registration completed. You can now log in with this authenticator."
            />
        </FormLayout>
    }
}

fn report_failure(err: &AppError) {
    error!(%err, "Registration failed");
    show_error_dialog(err);
}
