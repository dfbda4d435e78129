use crate::error::ConfigurationError;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_url: String,
    pub text_model: String,
    pub image_model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn from_env(api_key: Option<String>) -> Result<Self, ConfigurationError> {
        Self::from_lookup(api_key, |key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. An explicit
    /// `api_key` takes precedence over `GEMINI_API_KEY`, then `API_KEY`.
    pub fn from_lookup<F>(api_key: Option<String>, lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = api_key
            .or_else(|| lookup("GEMINI_API_KEY"))
            .or_else(|| lookup("API_KEY"))
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigurationError::MissingApiKey)?;

        let api_url = lookup("GEMINI_API_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let text_model = lookup("GEMINI_TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string());
        let image_model = lookup("GEMINI_IMAGE_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string());

        let temperature = match lookup("GEMINI_TEMPERATURE") {
            Some(value) => value.trim().parse::<f32>().map_err(|_| ConfigurationError::InvalidValue {
                key: "GEMINI_TEMPERATURE".to_string(),
                value,
            })?,
            None => 0.7,
        };

        let timeout_secs = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| ConfigurationError::InvalidValue {
                key: "GEMINI_TIMEOUT_SECS".to_string(),
                value,
            })?,
            None => 60,
        };

        Ok(Self {
            api_key,
            api_url,
            text_model,
            image_model,
            temperature,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let err = ProviderConfig::from_lookup(None, lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingApiKey);

        let err = ProviderConfig::from_lookup(None, lookup_from(&[("API_KEY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingApiKey);
    }

    #[test]
    fn defaults_apply() {
        let config = ProviderConfig::from_lookup(None, lookup_from(&[("API_KEY", "k")])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn explicit_key_beats_environment() {
        let vars = [("GEMINI_API_KEY", "env"), ("API_KEY", "fallback")];
        let config = ProviderConfig::from_lookup(Some("flag".into()), lookup_from(&vars)).unwrap();
        assert_eq!(config.api_key, "flag");

        let config = ProviderConfig::from_lookup(None, lookup_from(&vars)).unwrap();
        assert_eq!(config.api_key, "env");
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let vars = [("API_KEY", "k"), ("GEMINI_TIMEOUT_SECS", "soon")];
        let err = ProviderConfig::from_lookup(None, lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { ref key, .. } if key == "GEMINI_TIMEOUT_SECS"));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_url() {
        let vars = [("API_KEY", "k"), ("GEMINI_API_URL", "http://localhost:8080/v1/")];
        let config = ProviderConfig::from_lookup(None, lookup_from(&vars)).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/v1");
    }
}
