//! Session record storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_storage_key() -> String {
    "mveloz_user".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the session record. Empty means `~/.veloz`.
    #[serde(default)]
    pub dir: String,

    /// Fixed key the identity record is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            storage_key: default_storage_key(),
        }
    }
}

impl SessionConfig {
    /// Resolve the storage directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no directory is configured
    /// and the home directory cannot be determined.
    pub fn resolve_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.dir.is_empty() {
            return Ok(PathBuf::from(&self.dir));
        }
        dirs::home_dir()
            .map(|home| home.join(".veloz"))
            .ok_or_else(|| ConfigError::NotConfigured {
                section: "session.dir".into(),
            })
    }
}
