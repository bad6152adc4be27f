//! The side-effecting steps of a WebAuthn ceremony: talking to the relying
//! party and to the platform authenticator. Flows are written against this
//! trait so they run the same way in the browser and in tests.

use super::{
    credential::PublicKeyCredentialJson,
    options::{CreationOptions, RequestOptions},
    types::{LoginRequest, RegisterRequest},
};
use crate::app_lib::AppError;

pub(crate) trait Ceremony {
    /// Posts the registration form and decodes the creation options.
    async fn creation_options(
        &self,
        url: &str,
        request: &RegisterRequest,
    ) -> Result<CreationOptions, AppError>;

    /// Posts the login form and decodes the request options.
    async fn request_options(
        &self,
        url: &str,
        request: &LoginRequest,
    ) -> Result<RequestOptions, AppError>;

    async fn create_credential(
        &self,
        options: &CreationOptions,
    ) -> Result<PublicKeyCredentialJson, AppError>;

    async fn get_assertion(
        &self,
        options: &RequestOptions,
    ) -> Result<PublicKeyCredentialJson, AppError>;

    /// Posts the credential to the response endpoint.
    async fn send_response(
        &self,
        url: &str,
        credential: &PublicKeyCredentialJson,
    ) -> Result<(), AppError>;
}

/// Which platform call failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CeremonyKind {
    Registration,
    Login,
}

/// Maps a rejected `navigator.credentials` promise to the message shown to
/// the user. `detail` is the debug rendering of the DOM exception.
pub(crate) fn authenticator_error(kind: CeremonyKind, detail: &str) -> AppError {
    if kind == CeremonyKind::Registration && detail.contains("InvalidStateError") {
        AppError::Authenticator("This authenticator is already registered.".to_string())
    } else if detail.contains("NotAllowedError") {
        AppError::Authenticator("Operation timed out or was cancelled.".to_string())
    } else {
        let action = match kind {
            CeremonyKind::Registration => "registration",
            CeremonyKind::Login => "login",
        };
        AppError::Authenticator(format!("Authenticator {action} failed: {detail}"))
    }
}

/// `navigator.credentials` plus `fetch` with cookies.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserCeremony;

#[cfg(target_arch = "wasm32")]
impl Ceremony for BrowserCeremony {
    async fn creation_options(
        &self,
        url: &str,
        request: &RegisterRequest,
    ) -> Result<CreationOptions, AppError> {
        let challenge = super::client::register_challenge(url, request).await?;
        CreationOptions::from_json(&challenge)
    }

    async fn request_options(
        &self,
        url: &str,
        request: &LoginRequest,
    ) -> Result<RequestOptions, AppError> {
        let challenge = super::client::login_challenge(url, request).await?;
        RequestOptions::from_json(&challenge)
    }

    async fn create_credential(
        &self,
        options: &CreationOptions,
    ) -> Result<PublicKeyCredentialJson, AppError> {
        super::browser::create_credential(options).await
    }

    async fn get_assertion(
        &self,
        options: &RequestOptions,
    ) -> Result<PublicKeyCredentialJson, AppError> {
        super::browser::get_assertion(options).await
    }

    async fn send_response(
        &self,
        url: &str,
        credential: &PublicKeyCredentialJson,
    ) -> Result<(), AppError> {
        super::client::send_response(url, credential).await
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, CeremonyKind, authenticator_error};

    #[test]
    fn invalid_state_means_already_registered() {
        let err = authenticator_error(
            CeremonyKind::Registration,
            "JsValue(InvalidStateError: The user attempted to register an authenticator that contains one of the credentials already registered)",
        );
        assert_eq!(
            err,
            AppError::Authenticator("This authenticator is already registered.".to_string())
        );
    }

    #[test]
    fn not_allowed_means_cancelled_for_both_ceremonies() {
        let detail = "JsValue(NotAllowedError: The operation either timed out or was not allowed)";
        for kind in [CeremonyKind::Registration, CeremonyKind::Login] {
            assert_eq!(
                authenticator_error(kind, detail).to_string(),
                "Operation timed out or was cancelled."
            );
        }
    }

    #[test]
    fn other_failures_keep_the_detail() {
        let err = authenticator_error(CeremonyKind::Login, "JsValue(InvalidStateError: busy)");
        assert_eq!(
            err.to_string(),
            "Authenticator login failed: JsValue(InvalidStateError: busy)"
        );

        let err = authenticator_error(CeremonyKind::Registration, "JsValue(SecurityError: bad rp)");
        assert!(err.to_string().starts_with("Authenticator registration failed:"));
    }
}
