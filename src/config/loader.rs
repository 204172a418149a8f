use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, Map};
use log::{info, trace};

use super::defaults::ClientConfig;

pub const ENV_PREFIX: &str = "XROCKET";

/// Loads a [`ClientConfig`] from an optional TOML file layered under
/// `XROCKET_*` environment variables.
///
/// Keys not set by either source keep their defaults.
pub fn load_configuration(path: Option<&Path>) -> Result<ClientConfig> {
    load_configuration_from(path, None)
}

/// Like [`load_configuration`], reading variables from `env` instead of the
/// process environment when given.
pub fn load_configuration_from(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<ClientConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        let filename = path.to_str().context("Invalid config file path")?;
        builder = builder.add_source(config::File::with_name(filename));
        info!(path:% = path.display(); "Loading client configuration");
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    let cfg = builder.build().context("Could not build client config")?;
    trace!("Client configuration sources merged");

    cfg.try_deserialize().context("Invalid client configuration")
}
