//! Registration and login sequences behind the two forms.
//!
//! Each flow validates the username, asks the relying party for a challenge,
//! shows the touch alert, lets the authenticator answer and posts the answer
//! back. The first failing step ends the flow; the caller surfaces the error.

use super::{
    ceremony::Ceremony,
    types::{AlertState, AuthenticatorAttachment, LoginRequest, RegisterRequest},
};
use crate::app_lib::{AppError, config::FormEndpoints};
use tracing::{debug, info};

pub(crate) async fn register<C: Ceremony>(
    ceremony: &C,
    endpoints: &FormEndpoints,
    username: &str,
    attachment: AuthenticatorAttachment,
    set_alert: impl Fn(AlertState),
) -> Result<(), AppError> {
    let request = RegisterRequest::from_form(username, attachment)?;

    let options = ceremony
        .creation_options(&endpoints.action, &request)
        .await?;
    debug!(?options, "Options for creating credential");

    set_alert(AlertState::Touch);
    let credential = ceremony.create_credential(&options).await?;
    credential.validate()?;
    debug!(?credential, "Credential");

    ceremony.send_response(&endpoints.response, &credential).await?;
    set_alert(AlertState::RegisterSuccess);
    debug!(user = %request.name, "Registered credential");
    info!("Registration completed");

    Ok(())
}

pub(crate) async fn login<C: Ceremony>(
    ceremony: &C,
    endpoints: &FormEndpoints,
    username: &str,
    set_alert: impl Fn(AlertState),
) -> Result<(), AppError> {
    let request = LoginRequest::from_form(username)?;

    let options = ceremony.request_options(&endpoints.action, &request).await?;
    debug!(?options, "Options for getting assertion");

    set_alert(AlertState::Touch);
    let credential = ceremony.get_assertion(&options).await?;
    credential.validate()?;
    debug!(?credential, "Assertion");

    ceremony.send_response(&endpoints.response, &credential).await?;
    set_alert(AlertState::LoginSuccess);
    debug!(user = %request.name, "Asserted credential");
    info!("Login success");

    Ok(())
}
