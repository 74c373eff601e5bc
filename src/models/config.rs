//! Configuration model loaded from external sources.
//!
//! Settings come from an optional YAML file overlaid with `CV_SCORING_*`
//! environment variables (`__` separates nesting, e.g.
//! `CV_SCORING_SERVICE__MODEL`). The service credential is kept apart in
//! [`ApiKey`] and handed to the client explicitly.

use std::env;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::crawlers::DEFAULT_USER_AGENT;

/// Environment variable holding the evaluation service credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
const ENV_PREFIX: &str = "CV_SCORING";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(&'static str),

    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Secret credential for the evaluation service. Never printed.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Accepts a credential, rejecting missing or blank values.
    pub fn new(value: Option<String>) -> ConfigResult<Self> {
        match value {
            Some(key) if !key.trim().is_empty() => Ok(Self(key)),
            _ => Err(ConfigError::MissingApiKey(API_KEY_VAR)),
        }
    }

    /// Reads the credential from [`API_KEY_VAR`].
    pub fn from_env() -> ConfigResult<Self> {
        Self::new(env::var(API_KEY_VAR).ok())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Page download settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    /// `0` disables the timeout.
    pub request_timeout_secs: u64,
}

impl FetchConfig {
    pub fn timeout(&self) -> Option<Duration> {
        timeout_from_secs(self.request_timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Evaluation service settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// `0` disables the timeout.
    pub request_timeout_secs: u64,
}

impl ServiceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        timeout_from_secs(self.request_timeout_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1000,
            temperature: 0.0,
            request_timeout_secs: 120,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
/// Settings shared by the fetcher and the evaluation client.
pub struct AppConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

impl AppConfig {
    /// Loads the YAML file at `path` if it exists, then applies environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }
        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_or_blank_key_is_rejected() {
        assert!(matches!(
            ApiKey::new(None),
            Err(ConfigError::MissingApiKey(API_KEY_VAR))
        ));
        assert!(ApiKey::new(Some("   ".into())).is_err());
        assert_eq!(ApiKey::new(Some("sk-test".into())).unwrap().expose(), "sk-test");
    }

    #[test]
    fn api_key_is_redacted_in_debug_output() {
        let key = ApiKey::new(Some("sk-secret".into())).unwrap();
        assert!(!format!("{key:?}").contains("sk-secret"));
    }

    #[test]
    fn defaults_apply_without_file() {
        let config = AppConfig::load(Some(Path::new("does-not-exist.yaml"))).unwrap();

        assert_eq!(config.service.model, "gpt-4o-mini");
        assert_eq!(config.service.max_tokens, 1000);
        assert_eq!(config.service.temperature, 0.0);
        assert_eq!(config.fetch.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "service:\n  model: gpt-4o\n  max_tokens: 500\nfetch:\n  request_timeout_secs: 0"
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.service.model, "gpt-4o");
        assert_eq!(config.service.max_tokens, 500);
        assert_eq!(config.service.base_url, "https://api.openai.com/v1");
        assert_eq!(config.fetch.timeout(), None);
        assert_eq!(config.service.timeout(), Some(Duration::from_secs(120)));
    }
}
