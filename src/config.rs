//! # Registry Configuration
//!
//! Layered configuration for the scheme registry: built-in defaults, then an
//! optional file, then `SCHEME_REGISTRY_*` environment variables.

use crate::error::Result;
use ::config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;

/// Prefix for environment overrides, e.g. `SCHEME_REGISTRY_STRICT=false`
pub const ENV_PREFIX: &str = "SCHEME_REGISTRY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Strictness used by [`SchemeRegistry::find`](crate::registry::SchemeRegistry::find)
    pub strict: bool,
    /// Default filter directive when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON log lines instead of the human-readable format
    pub log_json: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict: true,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl RegistryConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Defaults, then `path` if it exists, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`load`](Self::load) but reads overrides from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("strict", defaults.strict)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
