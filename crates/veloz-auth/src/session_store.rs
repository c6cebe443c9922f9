use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use veloz_config::SessionConfig;
use veloz_core::Identity;

use crate::error::AuthError;

/// The persisted record may be the identity itself or wrapped as
/// `{ "user": { ... } }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Wrapped { user: Identity },
    Bare(Identity),
}

impl StoredRecord {
    fn into_identity(self) -> Identity {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

/// File-backed holder of the single current identity record.
///
/// The record lives at `<dir>/<storage_key>.json`. On unix the directory is
/// created 0700 and the file written 0600.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
    storage_key: String,
}

impl SessionStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, storage_key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            storage_key: storage_key.into(),
        }
    }

    /// Build the store from the `[session]` config section.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the directory cannot be resolved.
    pub fn from_config(config: &SessionConfig) -> Result<Self, AuthError> {
        let dir = config
            .resolve_dir()
            .map_err(|e| AuthError::SessionStore(e.to_string()))?;
        Ok(Self::new(dir, config.storage_key.clone()))
    }

    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.storage_key))
    }

    /// Read the current identity, if any.
    ///
    /// A missing file is `None`. An unreadable or corrupt file is also `None`
    /// and is logged; it is never repaired into a default identity.
    #[must_use]
    pub fn load(&self) -> Option<Identity> {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "unreadable session record");
                return None;
            }
        };
        match serde_json::from_str::<StoredRecord>(&raw) {
            Ok(record) => Some(record.into_identity()),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "corrupt session record ignored");
                None
            }
        }
    }

    /// Replace the stored record with `identity`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the directory or file cannot be written.
    pub fn store(&self, identity: &Identity) -> Result<(), AuthError> {
        ensure_private_dir(&self.dir)?;
        let path = self.path();
        let json = serde_json::to_string_pretty(identity)
            .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;
        fs::write(&path, json)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::SessionStore(format!("chmod {}: {e}", path.display())))?;
        }

        tracing::debug!(id = identity.id, path = %path.display(), "session stored");
        Ok(())
    }

    /// Discard the stored record. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::SessionStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }
}

fn ensure_private_dir(dir: &Path) -> Result<(), AuthError> {
    fs::create_dir_all(dir)
        .map_err(|e| AuthError::SessionStore(format!("mkdir {}: {e}", dir.display())))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700)) {
            tracing::warn!("failed to chmod 0700 {}: {e}", dir.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use veloz_core::enums::Role;
    use veloz_core::{Permission, PermissionSet};

    use super::*;

    fn karen() -> Identity {
        Identity::new(
            2,
            "Karen",
            Role::Worker,
            [Permission::OrdersViewAssigned, Permission::OrdersUpdateStatus]
                .into_iter()
                .collect(),
        )
    }

    #[test]
    fn path_uses_storage_key() {
        let store = SessionStore::new("/tmp/veloz", "mveloz_user");
        assert_eq!(store.path(), PathBuf::from("/tmp/veloz/mveloz_user.json"));
    }

    #[test]
    fn store_load_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::new(tmp.path().join("session"), "mveloz_user");

        assert!(store.load().is_none());
        store.store(&karen()).expect("store");
        assert_eq!(store.load(), Some(karen()));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(store.path())
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        store.clear().expect("clear");
        assert!(store.load().is_none());
        store.clear().expect("clearing twice is fine");
    }

    #[test]
    fn store_replaces_previous_identity() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::new(tmp.path(), "mveloz_user");
        store.store(&karen()).expect("store");

        let admin = Identity::new(1, "Admin", Role::Admin, PermissionSet::new());
        store.store(&admin).expect("store");
        assert_eq!(store.load(), Some(admin));
    }

    #[test]
    fn load_accepts_wrapped_record() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::new(tmp.path(), "mveloz_user");
        fs::write(
            store.path(),
            r#"{"user": {"id": 2, "name": "Karen", "role": "WORKER",
                "permissions": ["orders.view_assigned", "orders.update_status"]}}"#,
        )
        .expect("write");
        assert_eq!(store.load(), Some(karen()));
    }

    #[test]
    fn corrupt_record_loads_as_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::new(tmp.path(), "mveloz_user");
        fs::write(store.path(), "{not json").expect("write");
        assert!(store.load().is_none());

        fs::write(store.path(), r#"{"user": {"name": "no id"}}"#).expect("write");
        assert!(store.load().is_none());
    }
}
