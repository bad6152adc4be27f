//! Build-time endpoint configuration with an optional runtime override. The
//! runtime config is read from `window.WEBAUTHN_CONFIG` (if present) so the
//! relying party can serve the same bundle under different paths without a
//! rebuild. When no form action is configured the page's own URL is used, as
//! the relying party renders each form with its request URI as the action.
//! Configuration values are public; do not store secrets here.

pub const DEFAULT_REGISTER_URL: &str = "/webauthn/register";
pub const DEFAULT_LOGIN_URL: &str = "/webauthn/login";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const RESPONSE_SEGMENT: &str = "/webauthn/response";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Explicit registration action; the page location is used when unset.
    pub register_url: Option<String>,
    /// Explicit login action; the page location is used when unset.
    pub login_url: Option<String>,
    /// Explicit response endpoint; derived from the form action when unset.
    pub response_url: Option<String>,
    pub log_level: String,
}

/// Where one form posts its challenge request and its credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormEndpoints {
    pub action: String,
    pub response: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            register_url: None,
            login_url: None,
            response_url: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        let build_time = RuntimeConfig {
            register_url: option_env!("WEBAUTHN_REGISTER_URL").and_then(normalize_runtime_value),
            login_url: option_env!("WEBAUTHN_LOGIN_URL").and_then(normalize_runtime_value),
            response_url: option_env!("WEBAUTHN_RESPONSE_URL").and_then(normalize_runtime_value),
            log_level: option_env!("WEBAUTHN_LOG_LEVEL").and_then(normalize_runtime_value),
        };
        apply_runtime_overrides(&mut config, build_time);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Endpoints for the registration form rendered at `location`.
    pub fn register_endpoints(&self, location: Option<&str>) -> FormEndpoints {
        self.endpoints(self.register_url.as_deref(), location, DEFAULT_REGISTER_URL)
    }

    /// Endpoints for the login form rendered at `location`.
    pub fn login_endpoints(&self, location: Option<&str>) -> FormEndpoints {
        self.endpoints(self.login_url.as_deref(), location, DEFAULT_LOGIN_URL)
    }

    fn endpoints(
        &self,
        configured: Option<&str>,
        location: Option<&str>,
        segment: &str,
    ) -> FormEndpoints {
        let action = configured
            .or(location.and_then(|value| {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }))
            .unwrap_or(segment)
            .to_string();
        let response = self
            .response_url
            .clone()
            .unwrap_or_else(|| derive_response_url(&action, segment));

        FormEndpoints { action, response }
    }
}

/// Replaces the first `segment` in `action` with the response segment. An
/// action without the segment is returned unchanged.
pub fn derive_response_url(action: &str, segment: &str) -> String {
    action.replacen(segment, RESPONSE_SEGMENT, 1)
}

/// Path and query of the current page.
#[cfg(target_arch = "wasm32")]
pub fn page_location() -> Option<String> {
    let location = web_sys::window()?.location();
    let pathname = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some(format!("{pathname}{search}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_location() -> Option<String> {
    None
}

#[derive(Default)]
struct RuntimeConfig {
    register_url: Option<String>,
    login_url: Option<String>,
    response_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.register_url {
        config.register_url = Some(value);
    }
    if let Some(value) = runtime.login_url {
        config.login_url = Some(value);
    }
    if let Some(value) = runtime.response_url {
        config.response_url = Some(value);
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("WEBAUTHN_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        register_url: read_runtime_value(&object, "register_url"),
        login_url: read_runtime_value(&object, "login_url"),
        response_url: read_runtime_value(&object, "response_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, FormEndpoints, RuntimeConfig, apply_runtime_overrides, derive_response_url,
        normalize_runtime_value,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  /auth/webauthn/login "),
            Some("/auth/webauthn/login".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            register_url: normalize_runtime_value(""),
            login_url: normalize_runtime_value("  "),
            response_url: normalize_runtime_value(""),
            log_level: normalize_runtime_value(" "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            register_url: normalize_runtime_value("/acme/webauthn/register"),
            login_url: normalize_runtime_value("/acme/webauthn/login"),
            response_url: normalize_runtime_value("https://idp.example/webauthn/response"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.register_url.as_deref(), Some("/acme/webauthn/register"));
        assert_eq!(config.login_url.as_deref(), Some("/acme/webauthn/login"));
        assert_eq!(
            config.response_url.as_deref(),
            Some("https://idp.example/webauthn/response")
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn page_location_is_the_default_action() {
        let config = AppConfig::default();

        assert_eq!(
            config.register_endpoints(Some("/acme/webauthn/register?client_id=app")),
            FormEndpoints {
                action: "/acme/webauthn/register?client_id=app".to_string(),
                response: "/acme/webauthn/response?client_id=app".to_string(),
            }
        );
        assert_eq!(
            config.login_endpoints(Some("/acme/webauthn/login?client_id=app")),
            FormEndpoints {
                action: "/acme/webauthn/login?client_id=app".to_string(),
                response: "/acme/webauthn/response?client_id=app".to_string(),
            }
        );
    }

    #[test]
    fn fixed_paths_are_used_without_location() {
        let config = AppConfig::default();

        assert_eq!(
            config.register_endpoints(None),
            FormEndpoints {
                action: "/webauthn/register".to_string(),
                response: "/webauthn/response".to_string(),
            }
        );
        assert_eq!(config.login_endpoints(Some("  ")).action, "/webauthn/login");
    }

    #[test]
    fn configured_action_wins_over_location() {
        let config = AppConfig {
            register_url: Some("https://idp.example/acme/webauthn/register".to_string()),
            ..AppConfig::default()
        };

        let endpoints = config.register_endpoints(Some("/other/webauthn/register"));
        assert_eq!(endpoints.action, "https://idp.example/acme/webauthn/register");
        assert_eq!(endpoints.response, "https://idp.example/acme/webauthn/response");
    }

    #[test]
    fn explicit_response_url_wins() {
        let config = AppConfig {
            register_url: Some("/custom/enroll".to_string()),
            response_url: Some("/custom/finish".to_string()),
            ..AppConfig::default()
        };

        assert_eq!(config.register_endpoints(None).response, "/custom/finish");
    }

    #[test]
    fn derive_response_url_keeps_unknown_action() {
        assert_eq!(
            derive_response_url("/custom/enroll", "/webauthn/register"),
            "/custom/enroll"
        );
    }

    #[test]
    fn derive_response_url_replaces_only_first_segment() {
        assert_eq!(
            derive_response_url("/webauthn/login/webauthn/login", "/webauthn/login"),
            "/webauthn/response/webauthn/login"
        );
    }
}
