//! Build-time configuration for the simulated backend with an optional runtime
//! override. The runtime config is read from `window.WINDOWFIX_CONFIG` (if
//! present) so static deployments can change latencies or the session key
//! without rebuilding. Configuration values are public; do not store secrets here.

/// Latency of the simulated login and signup calls.
pub const DEFAULT_AUTH_LATENCY_MS: u32 = 1_500;
/// Latency of the simulated OTP send, resend and verify calls.
pub const DEFAULT_OTP_LATENCY_MS: u32 = 2_000;
/// Latency of the simulated contact submission.
pub const DEFAULT_CONTACT_LATENCY_MS: u32 = 2_000;
/// How long the contact success notice stays visible.
pub const DEFAULT_NOTICE_DISMISS_MS: u32 = 5_000;
/// Local storage key holding the serialized user.
pub const DEFAULT_SESSION_KEY: &str = "user";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub auth_latency_ms: u32,
    pub otp_latency_ms: u32,
    pub contact_latency_ms: u32,
    pub notice_dismiss_ms: u32,
    pub session_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_latency_ms: DEFAULT_AUTH_LATENCY_MS,
            otp_latency_ms: DEFAULT_OTP_LATENCY_MS,
            contact_latency_ms: DEFAULT_CONTACT_LATENCY_MS,
            notice_dismiss_ms: DEFAULT_NOTICE_DISMISS_MS,
            session_key: DEFAULT_SESSION_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            auth_latency_ms: parse_millis(option_env!("WINDOWFIX_AUTH_LATENCY_MS"))
                .unwrap_or(defaults.auth_latency_ms),
            otp_latency_ms: parse_millis(option_env!("WINDOWFIX_OTP_LATENCY_MS"))
                .unwrap_or(defaults.otp_latency_ms),
            contact_latency_ms: parse_millis(option_env!("WINDOWFIX_CONTACT_LATENCY_MS"))
                .unwrap_or(defaults.contact_latency_ms),
            notice_dismiss_ms: parse_millis(option_env!("WINDOWFIX_NOTICE_DISMISS_MS"))
                .unwrap_or(defaults.notice_dismiss_ms),
            session_key: option_env!("WINDOWFIX_SESSION_KEY")
                .and_then(normalize_runtime_value)
                .unwrap_or(defaults.session_key),
            log_level: option_env!("WINDOWFIX_LOG_LEVEL")
                .and_then(normalize_runtime_value)
                .unwrap_or(defaults.log_level),
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    auth_latency_ms: Option<u32>,
    otp_latency_ms: Option<u32>,
    contact_latency_ms: Option<u32>,
    notice_dismiss_ms: Option<u32>,
    session_key: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.auth_latency_ms {
        config.auth_latency_ms = value;
    }
    if let Some(value) = runtime.otp_latency_ms {
        config.otp_latency_ms = value;
    }
    if let Some(value) = runtime.contact_latency_ms {
        config.contact_latency_ms = value;
    }
    if let Some(value) = runtime.notice_dismiss_ms {
        config.notice_dismiss_ms = value;
    }
    if let Some(value) = runtime.session_key {
        config.session_key = value;
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
    let config = Reflect::get(&window, &JsValue::from_str("WINDOWFIX_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        auth_latency_ms: read_runtime_millis(&object, "auth_latency_ms"),
        otp_latency_ms: read_runtime_millis(&object, "otp_latency_ms"),
        contact_latency_ms: read_runtime_millis(&object, "contact_latency_ms"),
        notice_dismiss_ms: read_runtime_millis(&object, "notice_dismiss_ms"),
        session_key: read_runtime_value(&object, "session_key"),
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

/// Accepts either a JS number or a numeric string.
#[cfg(target_arch = "wasm32")]
fn read_runtime_millis(object: &js_sys::Object, key: &str) -> Option<u32> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    if let Some(number) = value.as_f64() {
        return (number.is_finite() && number >= 0.0 && number <= f64::from(u32::MAX))
            .then(|| number as u32);
    }
    parse_millis(value.as_string().as_deref())
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_millis(value: Option<&str>) -> Option<u32> {
    normalize_runtime_value(value?)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        apply_runtime_overrides, normalize_runtime_value, parse_millis, AppConfig, RuntimeConfig,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  windowfix_user "),
            Some("windowfix_user".to_string())
        );
    }

    #[test]
    fn parse_millis_rejects_garbage() {
        assert_eq!(parse_millis(None), None);
        assert_eq!(parse_millis(Some("")), None);
        assert_eq!(parse_millis(Some("fast")), None);
        assert_eq!(parse_millis(Some("-5")), None);
        assert_eq!(parse_millis(Some(" 250 ")), Some(250));
    }

    #[test]
    fn defaults_match_reference_latencies() {
        let config = AppConfig::default();
        assert_eq!(config.auth_latency_ms, 1_500);
        assert_eq!(config.otp_latency_ms, 2_000);
        assert_eq!(config.contact_latency_ms, 2_000);
        assert_eq!(config.notice_dismiss_ms, 5_000);
        assert_eq!(config.session_key, "user");
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            session_key: normalize_runtime_value("  "),
            otp_latency_ms: parse_millis(Some("")),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            auth_latency_ms: Some(0),
            otp_latency_ms: Some(10),
            contact_latency_ms: Some(20),
            notice_dismiss_ms: Some(30),
            session_key: normalize_runtime_value("portal_user"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.auth_latency_ms, 0);
        assert_eq!(config.otp_latency_ms, 10);
        assert_eq!(config.contact_latency_ms, 20);
        assert_eq!(config.notice_dismiss_ms, 30);
        assert_eq!(config.session_key, "portal_user");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn load_on_host_uses_build_values() {
        let config = AppConfig::load();
        assert!(!config.session_key.is_empty());
    }
}
