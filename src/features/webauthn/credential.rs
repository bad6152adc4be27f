//! JSON form of a `PublicKeyCredential`, as posted to the response endpoint.
//! Binary fields are base64url without padding.

use crate::app_lib::AppError;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

pub const PUBLIC_KEY_TYPE: &str = "public-key";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialJson {
    pub id: String,
    pub raw_id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub response: AuthenticatorResponseJson,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AuthenticatorResponseJson {
    Attestation(AttestationResponseJson),
    Assertion(AssertionResponseJson),
}

/// Result of `navigator.credentials.create`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttestationResponseJson {
    pub attestation_object: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
}

/// Result of `navigator.credentials.get`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResponseJson {
    pub authenticator_data: String,
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub signature: String,
    pub user_handle: Option<String>,
}

impl PublicKeyCredentialJson {
    /// Rejects credentials the relying party would refuse outright: empty ids
    /// or a type other than `public-key`.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id.is_empty() || self.raw_id.is_empty() {
            return Err(AppError::Authenticator(
                "Authenticator returned a credential without an id.".to_string(),
            ));
        }
        if self.type_ != PUBLIC_KEY_TYPE {
            return Err(AppError::Authenticator(format!(
                "Unsupported credential type: {}",
                self.type_
            )));
        }
        Ok(())
    }
}

pub fn encode_base64(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attestation() -> PublicKeyCredentialJson {
        PublicKeyCredentialJson {
            id: "AQID".to_string(),
            raw_id: encode_base64(&[1, 2, 3]),
            type_: PUBLIC_KEY_TYPE.to_string(),
            response: AuthenticatorResponseJson::Attestation(AttestationResponseJson {
                attestation_object: encode_base64(b"attestation"),
                client_data_json: encode_base64(b"{}"),
            }),
        }
    }

    #[test]
    fn attestation_uses_webauthn_field_names() {
        let json = serde_json::to_value(attestation()).expect("Failed to serialize");
        assert_eq!(
            json,
            json!({
                "id": "AQID",
                "rawId": "AQID",
                "type": "public-key",
                "response": {
                    "attestationObject": "YXR0ZXN0YXRpb24",
                    "clientDataJSON": "e30",
                }
            })
        );
    }

    #[test]
    fn assertion_serializes_missing_user_handle_as_null() {
        let credential = PublicKeyCredentialJson {
            response: AuthenticatorResponseJson::Assertion(AssertionResponseJson {
                authenticator_data: "YXV0aA".to_string(),
                client_data_json: "e30".to_string(),
                signature: "c2ln".to_string(),
                user_handle: None,
            }),
            ..attestation()
        };

        let json = serde_json::to_value(&credential).expect("Failed to serialize");
        assert_eq!(json["response"]["signature"], "c2ln");
        assert!(json["response"]["userHandle"].is_null());
        assert!(json["response"].get("attestationObject").is_none());
    }

    #[test]
    fn validate_accepts_public_key_credentials() {
        assert_eq!(attestation().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_other_types_and_empty_ids() {
        let wrong_type = PublicKeyCredentialJson {
            type_: "password".to_string(),
            ..attestation()
        };
        assert!(matches!(
            wrong_type.validate(),
            Err(AppError::Authenticator(_))
        ));

        let no_raw_id = PublicKeyCredentialJson {
            raw_id: String::new(),
            ..attestation()
        };
        assert!(no_raw_id.validate().is_err());
    }
}
