//! Bridge to the browser's `navigator.credentials` API via `web_sys`.
//!
//! Typed options are copied into plain JS objects (byte fields become
//! `Uint8Array`s), the platform dialog runs, and the binary response is
//! encoded back to base64url for the relying party.

use super::{
    ceremony::{CeremonyKind, authenticator_error},
    credential::{
        AssertionResponseJson, AttestationResponseJson, AuthenticatorResponseJson,
        PublicKeyCredentialJson, encode_base64,
    },
    options::{CreationOptions, CredentialDescriptor, RequestOptions},
};
use crate::app_lib::AppError;
use js_sys::{Array, ArrayBuffer, Object, Reflect, Uint8Array};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AuthenticatorAssertionResponse, AuthenticatorAttestationResponse, CredentialCreationOptions,
    CredentialRequestOptions, CredentialsContainer, PublicKeyCredential,
};

/// Runs `navigator.credentials.create` for a new registration.
pub async fn create_credential(
    options: &CreationOptions,
) -> Result<PublicKeyCredentialJson, AppError> {
    let credentials = credentials_container()?;
    let js_options = creation_options_to_js(options)?;
    let create_options = wrap_public_key(&js_options)?.unchecked_into::<CredentialCreationOptions>();

    let promise = credentials
        .create_with_options(&create_options)
        .map_err(|e| AppError::Authenticator(format!("WebAuthn create failed: {e:?}")))?;

    let result = JsFuture::from(promise).await.map_err(|e| {
        authenticator_error(CeremonyKind::Registration, &format!("{e:?}"))
    })?;

    let credential = into_public_key_credential(result)?;
    let response = credential
        .response()
        .dyn_into::<AuthenticatorAttestationResponse>()
        .map_err(|_| AppError::Authenticator("Invalid response type".into()))?;

    Ok(PublicKeyCredentialJson {
        id: credential.id(),
        raw_id: encode_arraybuffer_to_base64(&credential.raw_id()),
        type_: credential.type_(),
        response: AuthenticatorResponseJson::Attestation(AttestationResponseJson {
            attestation_object: encode_arraybuffer_to_base64(&response.attestation_object()),
            client_data_json: encode_arraybuffer_to_base64(&response.client_data_json()),
        }),
    })
}

/// Runs `navigator.credentials.get` for a login.
pub async fn get_assertion(options: &RequestOptions) -> Result<PublicKeyCredentialJson, AppError> {
    let credentials = credentials_container()?;
    let js_options = request_options_to_js(options)?;
    let get_options = wrap_public_key(&js_options)?.unchecked_into::<CredentialRequestOptions>();

    let promise = credentials
        .get_with_options(&get_options)
        .map_err(|e| AppError::Authenticator(format!("WebAuthn get failed: {e:?}")))?;

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| authenticator_error(CeremonyKind::Login, &format!("{e:?}")))?;

    let credential = into_public_key_credential(result)?;
    let response = credential
        .response()
        .dyn_into::<AuthenticatorAssertionResponse>()
        .map_err(|_| AppError::Authenticator("Invalid response type".into()))?;

    Ok(PublicKeyCredentialJson {
        id: credential.id(),
        raw_id: encode_arraybuffer_to_base64(&credential.raw_id()),
        type_: credential.type_(),
        response: AuthenticatorResponseJson::Assertion(AssertionResponseJson {
            authenticator_data: encode_arraybuffer_to_base64(&response.authenticator_data()),
            client_data_json: encode_arraybuffer_to_base64(&response.client_data_json()),
            signature: encode_arraybuffer_to_base64(&response.signature()),
            user_handle: response
                .user_handle()
                .map(|handle| encode_arraybuffer_to_base64(&handle)),
        }),
    })
}

fn credentials_container() -> Result<CredentialsContainer, AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::Config("Window not found".into()))?;
    Ok(window.navigator().credentials())
}

fn into_public_key_credential(result: JsValue) -> Result<PublicKeyCredential, AppError> {
    result
        .dyn_into::<PublicKeyCredential>()
        .map_err(|_| AppError::Authenticator("Invalid credential type".into()))
}

#[allow(clippy::cast_precision_loss)]
fn creation_options_to_js(options: &CreationOptions) -> Result<Object, AppError> {
    let js_options = Object::new();
    set(&js_options, "challenge", &bytes_to_uint8array(&options.challenge))?;

    let js_rp = Object::new();
    set(&js_rp, "name", &options.rp.name.as_str().into())?;
    if let Some(id) = &options.rp.id {
        set(&js_rp, "id", &id.as_str().into())?;
    }
    set(&js_options, "rp", &js_rp)?;

    let js_user = Object::new();
    set(&js_user, "id", &bytes_to_uint8array(&options.user.id))?;
    set(&js_user, "name", &options.user.name.as_str().into())?;
    set(&js_user, "displayName", &options.user.display_name.as_str().into())?;
    set(&js_options, "user", &js_user)?;

    let js_params = Array::new();
    for param in &options.pub_key_cred_params {
        let js_param = Object::new();
        set(&js_param, "type", &param.type_.as_str().into())?;
        set(&js_param, "alg", &(param.alg as f64).into())?;
        js_params.push(&js_param);
    }
    set(&js_options, "pubKeyCredParams", &js_params)?;

    if let Some(timeout) = options.timeout {
        set(&js_options, "timeout", &(timeout as f64).into())?;
    }
    if let Some(attestation) = &options.attestation {
        set(&js_options, "attestation", &attestation.as_str().into())?;
    }

    if let Some(selection) = &options.authenticator_selection {
        let js_selection = Object::new();
        if let Some(attachment) = &selection.authenticator_attachment {
            set(&js_selection, "authenticatorAttachment", &attachment.as_str().into())?;
        }
        if let Some(require_resident_key) = selection.require_resident_key {
            set(&js_selection, "requireResidentKey", &require_resident_key.into())?;
        }
        if let Some(resident_key) = &selection.resident_key {
            set(&js_selection, "residentKey", &resident_key.as_str().into())?;
        }
        if let Some(user_verification) = &selection.user_verification {
            set(&js_selection, "userVerification", &user_verification.as_str().into())?;
        }
        set(&js_options, "authenticatorSelection", &js_selection)?;
    }

    if !options.exclude_credentials.is_empty() {
        set(
            &js_options,
            "excludeCredentials",
            &descriptors_to_js(&options.exclude_credentials)?,
        )?;
    }
    if let Some(extensions) = &options.extensions {
        set(&js_options, "extensions", &extensions_to_js(extensions)?)?;
    }

    Ok(js_options)
}

#[allow(clippy::cast_precision_loss)]
fn request_options_to_js(options: &RequestOptions) -> Result<Object, AppError> {
    let js_options = Object::new();
    set(&js_options, "challenge", &bytes_to_uint8array(&options.challenge))?;

    if let Some(timeout) = options.timeout {
        set(&js_options, "timeout", &(timeout as f64).into())?;
    }
    if let Some(rp_id) = &options.rp_id {
        set(&js_options, "rpId", &rp_id.as_str().into())?;
    }
    if !options.allow_credentials.is_empty() {
        set(
            &js_options,
            "allowCredentials",
            &descriptors_to_js(&options.allow_credentials)?,
        )?;
    }
    if let Some(uv) = &options.user_verification {
        set(&js_options, "userVerification", &uv.as_str().into())?;
    }
    if let Some(extensions) = &options.extensions {
        set(&js_options, "extensions", &extensions_to_js(extensions)?)?;
    }

    Ok(js_options)
}

fn descriptors_to_js(descriptors: &[CredentialDescriptor]) -> Result<Array, AppError> {
    let js_descriptors = Array::new();
    for descriptor in descriptors {
        let js_cred = Object::new();
        set(&js_cred, "type", &descriptor.type_.as_str().into())?;
        set(&js_cred, "id", &bytes_to_uint8array(&descriptor.id))?;
        if !descriptor.transports.is_empty() {
            let js_transports = Array::new();
            for transport in &descriptor.transports {
                js_transports.push(&transport.as_str().into());
            }
            set(&js_cred, "transports", &js_transports)?;
        }
        js_descriptors.push(&js_cred);
    }
    Ok(js_descriptors)
}

/// Extensions are passed through as plain JSON objects.
fn extensions_to_js(extensions: &Value) -> Result<JsValue, AppError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    extensions
        .serialize(&serializer)
        .map_err(|err| AppError::Serialization(format!("Invalid extensions: {err}")))
}

fn wrap_public_key(js_options: &Object) -> Result<Object, AppError> {
    let wrapper = Object::new();
    set(&wrapper, "publicKey", js_options)?;
    Ok(wrapper)
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), AppError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|_| AppError::Config(format!("Failed to set {key}")))
}

fn bytes_to_uint8array(bytes: &[u8]) -> Uint8Array {
    Uint8Array::from(bytes)
}

fn encode_arraybuffer_to_base64(buffer: &ArrayBuffer) -> String {
    encode_base64(&Uint8Array::new(buffer).to_vec())
}
