//! Generator configuration.

use crate::error::Error;
use crate::Result;
use std::env;
use std::time::Duration;
use url::Url;

/// Default base URL of the generation API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Configuration for [`ContentGenerator`](crate::ContentGenerator).
///
/// Defaults are production-friendly and env-overridable:
/// - `GEMINI_API_KEY` supplies the API key
/// - `UCLOUD_HTTP_TIMEOUT_SECS` overrides the request timeout (default 30)
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let timeout_secs = env::var("UCLOUD_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        Self {
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            api_key: env::var("GEMINI_API_KEY").ok(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL (primarily for testing with mock servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the `generateContent` endpoint for the configured model.
    pub(crate) fn generate_url(&self) -> Result<Url> {
        let raw = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        Url::parse(&raw)
            .map_err(|e| Error::configuration(format!("invalid endpoint URL {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_interpolates_model() {
        let config = GeneratorConfig::new()
            .with_base_url("https://example.com/v1beta/")
            .with_model("gemini-2.5-flash");
        assert_eq!(
            config.generate_url().unwrap().as_str(),
            "https://example.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn invalid_base_url_is_a_configuration_error() {
        let config = GeneratorConfig::new().with_base_url("not a url");
        assert!(matches!(
            config.generate_url(),
            Err(Error::Configuration { .. })
        ));
    }
}
