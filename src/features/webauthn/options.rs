//! Typed view of the relying party's challenge JSON.
//!
//! The server sends binary fields (challenge, user id, credential ids) as
//! base64url strings. They are decoded here into bytes so the browser bridge
//! only has to copy them into `Uint8Array`s. The options may arrive bare or
//! wrapped as `{"publicKey": {...}}`.

use crate::app_lib::AppError;
use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD},
};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Options for `navigator.credentials.create`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreationOptions {
    #[serde(deserialize_with = "deserialize_base64")]
    pub challenge: Vec<u8>,
    pub rp: RelyingParty,
    pub user: UserEntity,
    #[serde(default)]
    pub pub_key_cred_params: Vec<CredentialParameter>,
    pub timeout: Option<u64>,
    pub attestation: Option<String>,
    pub authenticator_selection: Option<AuthenticatorSelection>,
    #[serde(default)]
    pub exclude_credentials: Vec<CredentialDescriptor>,
    pub extensions: Option<Value>,
}

/// Options for `navigator.credentials.get`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    #[serde(deserialize_with = "deserialize_base64")]
    pub challenge: Vec<u8>,
    pub timeout: Option<u64>,
    pub rp_id: Option<String>,
    #[serde(default)]
    pub allow_credentials: Vec<CredentialDescriptor>,
    pub user_verification: Option<String>,
    pub extensions: Option<Value>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RelyingParty {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    #[serde(deserialize_with = "deserialize_base64")]
    pub id: Vec<u8>,
    pub name: String,
    pub display_name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CredentialParameter {
    #[serde(rename = "type")]
    pub type_: String,
    pub alg: i64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelection {
    pub authenticator_attachment: Option<String>,
    pub require_resident_key: Option<bool>,
    pub resident_key: Option<String>,
    pub user_verification: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CredentialDescriptor {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(deserialize_with = "deserialize_base64")]
    pub id: Vec<u8>,
    #[serde(default)]
    pub transports: Vec<String>,
}

impl CreationOptions {
    pub fn from_json(challenge: &Value) -> Result<Self, AppError> {
        parse_options(challenge)
    }
}

impl RequestOptions {
    pub fn from_json(challenge: &Value) -> Result<Self, AppError> {
        parse_options(challenge)
    }
}

fn parse_options<T: DeserializeOwned>(challenge: &Value) -> Result<T, AppError> {
    let pk_options = challenge.get("publicKey").unwrap_or(challenge);
    if pk_options.get("challenge").and_then(Value::as_str).is_none() {
        return Err(AppError::Parse("Missing challenge".to_string()));
    }
    T::deserialize(pk_options)
        .map_err(|err| AppError::Parse(format!("Invalid credential options: {err}")))
}

/// Decodes base64, trying URL-safe unpadded first since that is what
/// relying parties emit for WebAuthn.
pub fn decode_base64(b64: &str) -> Result<Vec<u8>, AppError> {
    URL_SAFE_NO_PAD
        .decode(b64)
        .or_else(|_| URL_SAFE.decode(b64))
        .or_else(|_| STANDARD.decode(b64))
        .map_err(|err| AppError::Parse(format!("Invalid base64: {err}")))
}

fn deserialize_base64<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = String::deserialize(deserializer)?;
    decode_base64(&encoded).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn creation_json() -> Value {
        json!({
            "rp": { "name": "Gravitee.io AM", "id": "auth.example.com" },
            "user": { "id": "dXNlci0x", "name": "alice", "displayName": "alice" },
            "challenge": "AAEC_w",
            "pubKeyCredParams": [
                { "type": "public-key", "alg": -7 },
                { "type": "public-key", "alg": -257 }
            ],
            "timeout": 60000,
            "attestation": "none",
            "authenticatorSelection": {
                "authenticatorAttachment": "cross-platform",
                "requireResidentKey": false,
                "userVerification": "preferred"
            },
            "excludeCredentials": [
                { "type": "public-key", "id": "AQID", "transports": ["usb", "nfc"] }
            ]
        })
    }

    #[test]
    fn creation_options_decode_binary_fields() {
        let options = CreationOptions::from_json(&creation_json()).unwrap();

        assert_eq!(options.challenge, vec![0x00, 0x01, 0x02, 0xff]);
        assert_eq!(options.user.id, b"user-1".to_vec());
        assert_eq!(options.user.display_name, "alice");
        assert_eq!(options.rp.id.as_deref(), Some("auth.example.com"));
        assert_eq!(options.pub_key_cred_params.len(), 2);
        assert_eq!(options.pub_key_cred_params[1].alg, -257);
        assert_eq!(options.timeout, Some(60_000));
        assert_eq!(options.exclude_credentials[0].id, vec![1, 2, 3]);
        assert_eq!(options.exclude_credentials[0].transports, vec!["usb", "nfc"]);
        assert_eq!(
            options
                .authenticator_selection
                .and_then(|selection| selection.user_verification),
            Some("preferred".to_string())
        );
    }

    #[test]
    fn creation_options_accept_public_key_wrapper() {
        let wrapped = json!({ "publicKey": creation_json() });
        let bare = CreationOptions::from_json(&creation_json()).unwrap();
        assert_eq!(CreationOptions::from_json(&wrapped).unwrap(), bare);
    }

    #[test]
    fn request_options_default_empty_allow_list() {
        let options = RequestOptions::from_json(&json!({
            "challenge": "c2lnbi1tZQ",
            "rpId": "auth.example.com",
            "userVerification": "required"
        }))
        .unwrap();

        assert_eq!(options.challenge, b"sign-me".to_vec());
        assert!(options.allow_credentials.is_empty());
        assert_eq!(options.user_verification.as_deref(), Some("required"));
    }

    #[test]
    fn missing_challenge_is_rejected() {
        let err = RequestOptions::from_json(&json!({ "rpId": "auth.example.com" })).unwrap_err();
        assert_eq!(err, AppError::Parse("Missing challenge".to_string()));
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let mut challenge = creation_json();
        challenge["user"]["id"] = json!("not base64!");
        let err = CreationOptions::from_json(&challenge).unwrap_err();
        assert!(matches!(err, AppError::Parse(message) if message.contains("Invalid base64")));
    }

    #[test]
    fn decode_base64_accepts_padded_and_standard_alphabets() {
        assert_eq!(decode_base64("AAEC_w").unwrap(), vec![0, 1, 2, 255]);
        assert_eq!(decode_base64("AAEC_w==").unwrap(), vec![0, 1, 2, 255]);
        assert_eq!(decode_base64("AAEC/w==").unwrap(), vec![0, 1, 2, 255]);
    }
}
