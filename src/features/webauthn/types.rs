//! Form payloads posted to the challenge endpoints and the alert state the
//! forms render.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

pub const MISSING_REGISTER_NAME: &str = "DisplayName or username is missing!";
pub const MISSING_LOGIN_NAME: &str = "Username is missing!";

/// Authenticator attachment picked in the registration form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthenticatorAttachment {
    #[default]
    CrossPlatform,
    Platform,
}

impl AuthenticatorAttachment {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthenticatorAttachment::CrossPlatform => "cross-platform",
            AuthenticatorAttachment::Platform => "platform",
        }
    }

    /// Parses a `<select>` value; unknown values fall back to cross-platform.
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "platform" => AuthenticatorAttachment::Platform,
            _ => AuthenticatorAttachment::CrossPlatform,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub attachment: AuthenticatorAttachment,
}

impl RegisterRequest {
    /// Validates the form input. The display name mirrors the username.
    pub fn from_form(username: &str, attachment: AuthenticatorAttachment) -> Result<Self, AppError> {
        let name = username.trim();
        if name.is_empty() {
            return Err(AppError::Validation(MISSING_REGISTER_NAME.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            display_name: name.to_string(),
            attachment,
        })
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub name: String,
}

impl LoginRequest {
    pub fn from_form(username: &str) -> Result<Self, AppError> {
        let name = username.trim();
        if name.is_empty() {
            return Err(AppError::Validation(MISSING_LOGIN_NAME.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }
}

/// Which alert banner is visible. At most one is shown at a time; moving to a
/// new state hides the previous banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertState {
    #[default]
    Hidden,
    /// Waiting for the user to touch the authenticator.
    Touch,
    RegisterSuccess,
    LoginSuccess,
}

impl AlertState {
    pub fn touch_visible(self) -> bool {
        self == AlertState::Touch
    }

    pub fn register_success_visible(self) -> bool {
        self == AlertState::RegisterSuccess
    }

    pub fn login_success_visible(self) -> bool {
        self == AlertState::LoginSuccess
    }
}
