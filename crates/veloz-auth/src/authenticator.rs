//! Login sources.
//!
//! An [`Authenticator`] turns a username and password into an [`Identity`].
//! Two sources exist: the static directory from configuration (below) and the
//! backend's login endpoint (`veloz_api::HttpAuthenticator`).

use async_trait::async_trait;
use veloz_config::StaticUser;
use veloz_core::Identity;

use crate::error::AuthError;

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify credentials and return the identity they belong to.
    async fn authenticate(&self, username: &str, password: &str) -> Result<Identity, AuthError>;
}

/// Credential entries loaded from `[[auth.users]]`.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    users: Vec<StaticUser>,
}

impl StaticDirectory {
    #[must_use]
    pub fn new(users: Vec<StaticUser>) -> Self {
        Self { users }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl Authenticator for StaticDirectory {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let user = self
            .users
            .iter()
            .find(|user| user.username == username && user.password == password)
            .ok_or_else(|| AuthError::InvalidCredentials("unknown user or wrong password".into()))?;

        let display_name = if user.display_name.is_empty() {
            user.username.clone()
        } else {
            user.display_name.clone()
        };
        Ok(Identity::new(
            user.id,
            display_name,
            user.role,
            user.permissions.clone(),
        ))
    }
}
