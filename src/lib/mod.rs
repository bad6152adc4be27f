//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! ## Relying-party endpoints
//!
//! Both forms talk to the same relying party, which keeps the pending
//! challenge in its session cookie:
//!
//! Each form posts to its action, which is the page's own path and query
//! (domain prefix and `client_id` included) unless configured explicitly.
//!
//! 1. **Register:** `POST {action}` with `{name, displayName, type}` returns
//!    credential creation options.
//! 2. **Login:** `POST {action}` with `{name}` returns credential request options.
//! 3. **Response:** `POST {response_url}` with the credential JSON finishes either
//!    ceremony. Unless configured explicitly, the response URL is the form
//!    action with `/webauthn/register` or `/webauthn/login` replaced by
//!    `/webauthn/response`; an action without either segment is reused as is.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes, dead_code)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{post_json_with_credentials, post_json_with_credentials_response};
pub(crate) use config::AppConfig;
pub(crate) use errors::AppError;
