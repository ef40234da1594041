use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::aws::{get_machine_type_info, InstanceTypeInfo};
use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub aws: AwsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AwsConfig {
    /// Instance type used when a caller doesn't name one
    pub default_instance_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aws: AwsConfig {
                default_instance_type: "t2.micro".to_string(),
            },
        }
    }
}

impl Config {
    /// Load the config and check its default instance type against the catalog.
    ///
    /// Search order: `path`, then `.machinetypes.toml` in the current
    /// directory, then `<config dir>/machinetypes/config.toml`. A missing file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
            toml::from_str::<Config>(&content)
                .with_context(|| format!("Failed to parse config: {}", config_path.display()))?
        } else {
            if path.is_some() {
                warn!(
                    path = %config_path.display(),
                    "config file not found, using defaults"
                );
            }
            Config::default()
        };

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", config_path.display()))?;
        Ok(config)
    }

    /// Check that the default instance type names a catalog entry.
    ///
    /// An unknown type surfaces as `CatalogError::InstanceTypeNotFound`.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.aws.default_instance_type.trim().is_empty() {
            return Err(ConfigError::MissingField("aws.default_instance_type".to_string()).into());
        }
        get_machine_type_info(&self.aws.default_instance_type)?;
        Ok(())
    }

    /// Look up `requested`, falling back to the configured default.
    pub fn resolve_instance_type(
        &self,
        requested: Option<&str>,
    ) -> crate::error::Result<&'static InstanceTypeInfo> {
        get_machine_type_info(requested.unwrap_or(&self.aws.default_instance_type))
    }
}

fn default_config_path() -> PathBuf {
    let local = PathBuf::from(".machinetypes.toml");
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|d| d.join("machinetypes").join("config.toml"))
        .unwrap_or(local)
}
