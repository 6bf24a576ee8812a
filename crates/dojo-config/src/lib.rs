//! # dojo-config
//!
//! Layered configuration loading for the dojo tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOJO_*` prefix, `__` as separator)
//! 2. Project-level `.dojo/config.toml`
//! 3. User-level `~/.config/dojo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DOJO_SERVER__PORT` -> `server.port`,
//! `DOJO_REWRITE__SCHEMA_PATH` -> `rewrite.schema_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dojo_config::DojoConfig;
//!
//! let config = DojoConfig::load_with_dotenv().expect("config");
//! println!("serving on {}", config.server.bind_addr());
//! ```

mod error;
mod rewrite;
mod server;

pub use error::ConfigError;
pub use rewrite::RewriteConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".dojo/config.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "DOJO_";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DojoConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub rewrite: RewriteConfig,
}

impl DojoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dojo").join("config.toml"))
    }
}
