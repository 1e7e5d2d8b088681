use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROVIDER_TIMEOUT_SECS, DEFAULT_PUBLIC_BASE_URL,
    MAX_PROVIDER_TIMEOUT_SECS,
};

use serde::Deserialize;

/// External identity provider connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the provider's auth API (e.g. https://proj.example.co/auth/v1)
    pub base_url: String,
    /// Publishable API key sent with every provider request
    pub api_key: String,
    /// Per-request timeout for provider calls
    pub timeout_secs: u64,
    /// Public base URL of this portal, used to build callback redirects
    pub public_base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
            public_base_url: String::from(DEFAULT_PUBLIC_BASE_URL),
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::provider(
                "provider.base_url must be an http(s) URL",
            ));
        }

        if self.api_key.is_empty() {
            return Err(ConfigError::provider("provider.api_key is required"));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_PROVIDER_TIMEOUT_SECS {
            return Err(ConfigError::provider(format!(
                "provider.timeout_secs must be 1-{}, got {}",
                MAX_PROVIDER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !self.public_base_url.starts_with("http://")
            && !self.public_base_url.starts_with("https://")
        {
            return Err(ConfigError::provider(
                "provider.public_base_url must be an http(s) URL",
            ));
        }

        Ok(())
    }
}
