//! Configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate. Each
//! sub-module represents a logical configuration section. Every field has a
//! default, so an empty source yields a usable configuration.

pub mod logging;
pub mod paging;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::paging::PagingConfig;

use crate::error::ContractError;

/// Root configuration.
///
/// Top-level deserialization target for the merged TOML files
/// (default.toml + environment overlay) and `NDB__*` environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractsConfig {
    /// Paging defaults applied by query executors.
    pub paging: PagingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl ContractsConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `NDB__`, e.g.
    /// `NDB__PAGING__DEFAULT_PAGE_SIZE=50`.
    pub fn load(env: &str) -> Result<Self, ContractError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(environment())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse configuration from TOML text, without files or environment.
    pub fn from_toml_str(text: &str) -> Result<Self, ContractError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// `NDB__SECTION__KEY` environment variables.
fn environment() -> config::Environment {
    config::Environment::with_prefix("NDB")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
