//! Client helpers for the relying party's WebAuthn endpoints.

use super::{
    credential::PublicKeyCredentialJson,
    types::{LoginRequest, RegisterRequest},
};
use crate::app_lib::{AppError, post_json_with_credentials, post_json_with_credentials_response};
use serde_json::Value;

/// Request credential creation options for a new registration.
pub async fn register_challenge(url: &str, request: &RegisterRequest) -> Result<Value, AppError> {
    post_json_with_credentials_response(url, request).await
}

/// Request an assertion challenge for login.
pub async fn login_challenge(url: &str, request: &LoginRequest) -> Result<Value, AppError> {
    post_json_with_credentials_response(url, request).await
}

/// Submit the authenticator's answer. The relying party replies with an empty body.
pub async fn send_response(url: &str, credential: &PublicKeyCredentialJson) -> Result<(), AppError> {
    post_json_with_credentials(url, credential).await
}
