//! # veloz-auth
//!
//! Login sources and the persisted session record for Veloz.
//!
//! The session holds exactly one [`Identity`]. It is written by [`login`],
//! read back by [`Session::restore`] at startup, and discarded by [`logout`].

pub mod authenticator;
pub mod error;
pub mod session_store;

pub use authenticator::{Authenticator, StaticDirectory};
pub use error::AuthError;
pub use session_store::SessionStore;

use veloz_core::Identity;

/// The authenticated context handed to every protected command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    identity: Identity,
}

impl Session {
    #[must_use]
    pub const fn new(identity: Identity) -> Self {
        Self { identity }
    }

    /// Rebuild the session from the stored record.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` when no usable record exists.
    pub fn restore(store: &SessionStore) -> Result<Self, AuthError> {
        store.load().map(Self::new).ok_or(AuthError::NotAuthenticated)
    }

    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Authenticate and persist the resulting identity, replacing any previous one.
///
/// The username is trimmed; the password is taken as given.
///
/// # Errors
///
/// Returns `AuthError::EmptyCredentials` before contacting the source when
/// either value is empty, otherwise whatever the source or the store reports.
pub async fn login(
    authenticator: &dyn Authenticator,
    store: &SessionStore,
    username: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::EmptyCredentials);
    }

    let identity = authenticator.authenticate(username, password).await?;
    store.store(&identity)?;
    tracing::info!(id = identity.id, role = %identity.role, "logged in");
    Ok(identity)
}

/// Discard the stored identity.
///
/// # Errors
///
/// Returns `AuthError::SessionStore` if the record cannot be removed.
pub fn logout(store: &SessionStore) -> Result<(), AuthError> {
    store.clear()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use veloz_core::PermissionSet;
    use veloz_core::enums::Role;

    use super::*;

    #[derive(Default)]
    struct CountingAuthenticator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Authenticator for CountingAuthenticator {
        async fn authenticate(&self, username: &str, _password: &str) -> Result<Identity, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Identity::new(9, username, Role::Admin, PermissionSet::new()))
        }
    }

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::new(tmp.path(), "mveloz_user");
        (tmp, store)
    }

    #[tokio::test]
    async fn login_stores_identity_and_restores_session() {
        let (_tmp, store) = temp_store();
        let auth = CountingAuthenticator::default();

        let identity = login(&auth, &store, "  admin ", "pw").await.unwrap();
        assert_eq!(identity.display_name, "admin");

        let session = Session::restore(&store).unwrap();
        assert_eq!(session.identity(), &identity);
    }

    #[tokio::test]
    async fn empty_credentials_never_reach_the_source() {
        let (_tmp, store) = temp_store();
        let auth = CountingAuthenticator::default();

        let err = login(&auth, &store, "   ", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::EmptyCredentials));
        let err = login(&auth, &store, "admin", "").await.unwrap_err();
        assert!(matches!(err, AuthError::EmptyCredentials));

        assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn failed_login_keeps_previous_session() {
        let (_tmp, store) = temp_store();
        let good = CountingAuthenticator::default();
        login(&good, &store, "admin", "pw").await.unwrap();

        let directory = StaticDirectory::default();
        assert!(login(&directory, &store, "karen", "pw").await.is_err());
        assert_eq!(Session::restore(&store).unwrap().identity().display_name, "admin");
    }

    #[test]
    fn restore_without_record_is_not_authenticated() {
        let (_tmp, store) = temp_store();
        assert!(matches!(
            Session::restore(&store),
            Err(AuthError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn logout_discards_the_record() {
        let (_tmp, store) = temp_store();
        login(&CountingAuthenticator::default(), &store, "admin", "pw")
            .await
            .unwrap();
        logout(&store).unwrap();
        assert!(Session::restore(&store).is_err());
    }
}
