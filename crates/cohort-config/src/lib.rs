//! # cohort-config
//!
//! Layered configuration loading for the cohort tools API using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COHORT_TOOLS_*` prefix, `__` as separator)
//! 2. An explicit `--config` file, if given
//! 3. Project-level `./cohort-tools.toml`
//! 4. User-level `~/.config/cohort-tools/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COHORT_TOOLS_SERVER__PORT` -> `server.port`,
//! `COHORT_TOOLS_DATABASE__URL` -> `database.url`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cohort_config::AppConfig;
//!
//! let config = AppConfig::load_with_dotenv(None).expect("config");
//! println!("listening on port {}", config.server.port);
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "COHORT_TOOLS_";

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "cohort-tools.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`load_with_dotenv`](Self::load_with_dotenv)
    /// for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed or a value has
    /// the wrong type.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(explicit).extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file from the command line
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Render the effective configuration as TOML.
    ///
    /// The database auth token is masked.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Render` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let mut shown = self.clone();
        if !shown.database.auth_token.is_empty() {
            shown.database.auth_token = "********".into();
        }
        Ok(toml::to_string_pretty(&shown)?)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cohort-tools").join("config.toml"))
    }
}
