//! Login source configuration.
//!
//! The `api` source needs a backend whose login response carries a numeric
//! user `id`; order ownership is keyed on it. Backends that answer with only
//! `usuario` and `role` cannot be used that way. Select the static source and
//! list the users instead:
//!
//! ```toml
//! [auth]
//! source = "static"
//!
//! [[auth.users]]
//! username = "Karen"
//! password = "..."
//! id = 2
//! role = "WORKER"
//! permissions = ["orders.view_assigned", "orders.update_status"]
//! ```

use serde::{Deserialize, Serialize};
use veloz_core::enums::Role;
use veloz_core::PermissionSet;

use crate::ConfigError;

/// Which collaborator authenticates a login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthSource {
    /// `POST /api/login/` on the configured backend.
    #[default]
    Api,
    /// The `users` directory below.
    Static,
}

/// One entry of the static credential directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StaticUser {
    pub username: String,
    pub password: String,
    pub id: u64,
    #[serde(default)]
    pub display_name: String,
    pub role: Role,
    #[serde(default)]
    pub permissions: PermissionSet,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub source: AuthSource,

    #[serde(default)]
    pub users: Vec<StaticUser>,
}

impl AuthConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the static source is selected
    /// with an empty directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source == AuthSource::Static && self.users.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "auth.users".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_source_is_default() {
        let config = AuthConfig::default();
        assert_eq!(config.source, AuthSource::Api);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn static_source_needs_users() {
        let config = AuthConfig {
            source: AuthSource::Static,
            users: Vec::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { section }) if section == "auth.users"
        ));
    }
}
