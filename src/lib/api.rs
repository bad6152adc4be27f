//! HTTP helpers for the relying party's JSON endpoints. Every call is a
//! `POST` with a JSON body and includes cookies, since the relying party keeps
//! the pending challenge in its session. The helpers do not store secrets;
//! callers must avoid logging credential material above `debug`.

use super::errors::AppError;
use gloo_net::http::{Request, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::RequestCredentials;

/// Posts JSON with cookies and parses a JSON response.
pub async fn post_json_with_credentials_response<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_json_with_credentials(url, body).await?;
    handle_json_response(response).await
}

/// Posts JSON with cookies and ignores the response body.
pub async fn post_json_with_credentials<B: Serialize>(
    url: &str,
    body: &B,
) -> Result<(), AppError> {
    let response = send_json_with_credentials(url, body).await?;
    handle_empty_response(response)
}

async fn send_json_with_credentials<B: Serialize>(
    url: &str,
    body: &B,
) -> Result<Response, AppError> {
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    let request = Request::post(url)
        .header("Content-Type", "application/json")
        .credentials(RequestCredentials::Include)
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    request.send().await.map_err(map_request_error)
}

/// Maps transport failures into user-facing `AppError` variants.
fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Parses JSON responses and converts non-OK statuses into status-text errors.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(AppError::from_status(
            response.status(),
            &response.status_text(),
        ))
    }
}

fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(AppError::from_status(
            response.status(),
            &response.status_text(),
        ))
    }
}
