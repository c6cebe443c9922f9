//! # veloz-api
//!
//! Persistence collaborators for Veloz.
//!
//! - [`ApiClient`]: the backend HTTP API (`/api/ordenes/`, `/api/clientes/`)
//! - [`HttpAuthenticator`]: the backend login endpoint (`/api/login/`)
//! - [`MemoryStore`]: an in-process store seeded with demo fixtures
//! - [`SettingsStore`]: dashboard settings kept in a local JSON file
//!
//! Both record stores implement [`veloz_core::store::RecordStore`] for orders
//! and clients, so views never know which one they talk to.

pub mod fixtures;

mod clients;
mod error;
mod http;
mod login;
mod memory;
mod orders;
mod settings;

pub use error::ApiError;
pub use login::HttpAuthenticator;
pub use memory::MemoryStore;
pub use settings::SettingsStore;

use std::time::Duration;

use veloz_config::ApiConfig;

const USER_AGENT: &str = concat!("veloz/", env!("CARGO_PKG_VERSION"));

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the dashboard backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.root_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/ordenes/`.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
