use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Form input rejected before any request was made.
    Validation(String),
    Config(String),
    Network(String),
    Http {
        status: u16,
        status_text: String,
    },
    Parse(String),
    Serialization(String),
    /// The platform authenticator refused or failed the ceremony.
    Authenticator(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Http { status_text, .. } => {
                write!(formatter, "Server responded with error: {status_text}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
            AppError::Authenticator(message) => write!(formatter, "{message}"),
        }
    }
}

impl AppError {
    /// Builds the error surfaced for a non-OK response. Browsers leave the
    /// status text empty over HTTP/2, so fall back to the numeric status.
    pub fn from_status(status: u16, status_text: &str) -> Self {
        let trimmed = status_text.trim();
        let status_text = if trimmed.is_empty() {
            status.to_string()
        } else {
            trimmed.to_string()
        };
        AppError::Http {
            status,
            status_text,
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_error_carries_status_text() {
        let err = AppError::Http {
            status: 403,
            status_text: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "Server responded with error: Forbidden");
    }

    #[test]
    fn from_status_falls_back_to_numeric_status() {
        assert_eq!(
            AppError::from_status(502, "  ").to_string(),
            "Server responded with error: 502"
        );
        assert_eq!(
            AppError::from_status(400, "Bad Request"),
            AppError::Http {
                status: 400,
                status_text: "Bad Request".to_string(),
            }
        );
    }

    #[test]
    fn validation_error_is_shown_verbatim() {
        let err = AppError::Validation("Username is missing!".to_string());
        assert_eq!(err.to_string(), "Username is missing!");
    }
}
