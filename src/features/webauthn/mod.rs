//! WebAuthn registration and login against a remote relying party. The relying
//! party issues challenges and verifies answers; this module only moves data
//! between the forms, the HTTP endpoints and `navigator.credentials`. It never
//! inspects or verifies credential material and must not log it above `debug`.
//!
//! Flow Overview: Register posts `{name, displayName, type}`, creates a
//! credential and posts the attestation. Login posts `{name}`, gets an
//! assertion and posts it. Both finish at the response endpoint.

#[cfg(target_arch = "wasm32")]
mod browser;
pub(crate) mod ceremony;
#[cfg(target_arch = "wasm32")]
mod client;
pub(crate) mod credential;
pub(crate) mod flow;
pub(crate) mod options;
pub(crate) mod types;
