//! # veloz-config
//!
//! Layered configuration loading for Veloz using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VELOZ_*` prefix, `__` as separator)
//! 2. Project-level `.veloz/config.toml`
//! 3. User-level `~/.config/veloz/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VELOZ_API__BASE_URL` -> `api.base_url`,
//! `VELOZ_SESSION__STORAGE_KEY` -> `session.storage_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use veloz_config::VelozConfig;
//!
//! let config = VelozConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.root_url());
//! ```

mod api;
mod auth;
mod error;
mod general;
mod session;

pub use api::{ApiConfig, ApiMode};
pub use auth::{AuthConfig, AuthSource, StaticUser};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VelozConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VelozConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".veloz/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VELOZ_").split("__"))
    }

    /// Cross-section checks run after extraction.
    ///
    /// # Errors
    ///
    /// Returns the first invalid section's [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("veloz").join("config.toml"))
    }
}
