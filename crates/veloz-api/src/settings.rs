//! Dashboard settings kept as local JSON.
//!
//! Profile and notification choices live in one file per identity. Company
//! details are shared by every identity and live in `company.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use veloz_core::Identity;
use veloz_core::entities::{Company, Settings};

use crate::error::ApiError;

/// Reads and writes `<dir>/settings-<id>.json` and `<dir>/company.json`.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path_for(&self, identity: &Identity) -> PathBuf {
        self.dir.join(format!("settings-{}.json", identity.id))
    }

    #[must_use]
    pub fn company_path(&self) -> PathBuf {
        self.dir.join("company.json")
    }

    /// Saved settings for `identity`, or its defaults when none are saved.
    ///
    /// The shared company details override any copy in the identity's file.
    /// A corrupt file is logged and treated as absent.
    #[must_use]
    pub fn load(&self, identity: &Identity) -> Settings {
        let mut settings: Settings = read_json(&self.path_for(identity))
            .unwrap_or_else(|| Settings::defaults_for(identity));
        if let Some(company) = read_json::<Company>(&self.company_path()) {
            settings.company = company;
        }
        settings
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the file cannot be written.
    pub fn save(&self, identity: &Identity, settings: &Settings) -> Result<(), ApiError> {
        self.write_json(&self.path_for(identity), settings)
    }

    /// Replace the company details every identity sees.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the file cannot be written.
    pub fn save_company(&self, company: &Company) -> Result<(), ApiError> {
        self.write_json(&self.company_path(), company)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), ApiError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| ApiError::Storage(format!("mkdir {}: {e}", self.dir.display())))?;
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| ApiError::Parse(format!("serialize {}: {e}", path.display())))?;
        fs::write(path, json)
            .map_err(|e| ApiError::Storage(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .map_err(|e| ApiError::Storage(format!("chmod {}: {e}", path.display())))?;
        }
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw)
        .inspect_err(|error| {
            tracing::warn!(path = %path.display(), %error, "corrupt settings file ignored");
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use veloz_core::PermissionSet;
    use veloz_core::enums::Role;

    use super::*;

    fn worker() -> Identity {
        Identity::new(2, "Karen", Role::Worker, PermissionSet::new())
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SettingsStore::new(tmp.path());
        assert_eq!(store.load(&worker()), Settings::defaults_for(&worker()));
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SettingsStore::new(tmp.path().join("nested"));
        let mut settings = Settings::defaults_for(&worker());
        settings.profile.phone = "+51 911 222 333".into();
        settings.notifications.push = false;

        store.save(&worker(), &settings).unwrap();
        assert_eq!(store.load(&worker()), settings);
        assert!(store.path_for(&worker()).ends_with("settings-2.json"));
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SettingsStore::new(tmp.path());
        fs::write(store.path_for(&worker()), "[]").unwrap();
        assert_eq!(store.load(&worker()), Settings::defaults_for(&worker()));
    }

    #[test]
    fn company_is_shared_across_identities() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SettingsStore::new(tmp.path());
        let admin = Identity::new(1, "Administrador", Role::Admin, PermissionSet::new());
        let company = Company {
            website: "mveloz.pe".into(),
            ..Company::default()
        };

        store.save_company(&company).unwrap();
        assert_eq!(store.load(&worker()).company, company);
        assert_eq!(store.load(&admin).company, company);
        assert!(store.company_path().ends_with("company.json"));
        assert!(!store.path_for(&worker()).exists());
    }
}
