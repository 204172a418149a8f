use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::http::RetryPolicy;
use crate::log::mask_string;

pub const MAINNET_BASE_URL: &str = "https://pay.xrocket.tg";
pub const TESTNET_BASE_URL: &str = "https://pay.testnet.xrocket.tg";

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 250;
pub const DEFAULT_USER_AGENT: &str = concat!("xrocket-pay/", env!("CARGO_PKG_VERSION"));

/// Which fixed deployment of the API to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    #[default]
    Mainnet,
    Testnet,
}

impl ApiEnvironment {
    pub fn base_url(&self) -> &'static str {
        match self {
            ApiEnvironment::Mainnet => MAINNET_BASE_URL,
            ApiEnvironment::Testnet => TESTNET_BASE_URL,
        }
    }
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_key: String,
    pub environment: ApiEnvironment,
    /// Overrides the environment's base URL when set.
    pub base_url: Option<String>,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub backoff_base_ms: u64,
    pub max_backoff_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            environment: ApiEnvironment::Mainnet,
            base_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
            max_backoff_ms: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &mask_string(&self.api_key))
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_retries", &self.max_retries)
            .field("backoff_base_ms", &self.backoff_base_ms)
            .field("max_backoff_ms", &self.max_backoff_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn testnet(mut self) -> Self {
        self.environment = ApiEnvironment::Testnet;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base_ms = base.as_millis() as u64;
        self
    }

    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff_ms = Some(max_backoff.as_millis() as u64);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The effective base URL with any trailing slash removed.
    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        let policy = RetryPolicy::new(self.max_retries, Duration::from_millis(self.backoff_base_ms));
        match self.max_backoff_ms {
            Some(max) => policy.with_max_delay(Duration::from_millis(max)),
            None => policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_public_api() {
        let config = ClientConfig::new("key");
        assert_eq!(config.base_url(), MAINNET_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn testnet_and_override_select_base_url() {
        assert_eq!(ClientConfig::new("key").testnet().base_url(), TESTNET_BASE_URL);
        let config = ClientConfig::new("key")
            .testnet()
            .with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn backoff_cap_reaches_policy() {
        let config = ClientConfig::new("key")
            .with_backoff_base(Duration::from_millis(100))
            .with_max_backoff(Duration::from_millis(150));
        let policy = config.retry_policy();
        assert_eq!(policy.delay_for(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for(1), Duration::from_millis(150));
    }

    #[test]
    fn debug_masks_api_key() {
        let config = ClientConfig::new("7a26b4dafc47f0d7869c67d52");
        let printed = format!("{config:?}");
        assert!(!printed.contains("7a26b4dafc47f0d7869c67d52"));
    }
}
