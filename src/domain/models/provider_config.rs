use std::fmt;
use std::time::Duration;

use crate::domain::DomainError;

pub const API_KEY_VAR: &str = "PERPLEXITY_API_KEY";
pub const BASE_URL_VAR: &str = "PERPLEXITY_BASE_URL";
pub const MODEL_VAR: &str = "PERPLEXITY_MODEL";
pub const TIMEOUT_VAR: &str = "PERPLEXITY_TIMEOUT_SECS";

/// Value shipped in the sample `.env`; treated the same as an absent key.
pub const PLACEHOLDER_API_KEY: &str = "your_perplexity_api_key_here";

pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";
pub const DEFAULT_MODEL: &str = "sonar";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Read-once settings for the completion provider.
///
/// Built at startup and shared by reference for the lifetime of the process.
/// A config without a usable API key is *unconfigured*: the gateway answers
/// with a notice and never contacts the provider.
#[derive(Clone)]
pub struct ProviderConfig {
    api_key: Option<String>,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl ProviderConfig {
    /// Blank keys and the placeholder key are normalized to `None`.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY);

        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Construct from process environment variables:
    ///
    /// | Variable                  | Default                     |
    /// |---------------------------|-----------------------------|
    /// | `PERPLEXITY_API_KEY`      | unset (unconfigured)        |
    /// | `PERPLEXITY_BASE_URL`     | `https://api.perplexity.ai` |
    /// | `PERPLEXITY_MODEL`        | `sonar`                     |
    /// | `PERPLEXITY_TIMEOUT_SECS` | `60`                        |
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`] but resolves variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(lookup(API_KEY_VAR));

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }

        if let Some(model) = lookup(MODEL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_model(model.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                DomainError::configuration(format!(
                    "{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            if secs == 0 {
                return Err(DomainError::configuration(format!(
                    "{TIMEOUT_VAR} must be greater than zero"
                )));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::unconfigured()
    }
}

// Hand-written so the key never reaches logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
