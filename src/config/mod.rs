//! Client configuration: defaults, builder setters and the layered loader.

mod defaults;
mod loader;

pub use defaults::{
    ApiEnvironment, ClientConfig, DEFAULT_BACKOFF_BASE_MS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT,
    MAINNET_BASE_URL, TESTNET_BASE_URL,
};
pub use loader::{ENV_PREFIX, load_configuration, load_configuration_from};
