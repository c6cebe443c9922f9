//! Settings tabs, profile, company and password forms, notification toggles.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use veloz_core::entities::{Company, NotificationPrefs, Profile};
use veloz_core::enums::Role;
use veloz_core::permission::filter_by_permission;
use veloz_core::{CoreError, Identity, Permission};

use crate::error::ValidationError;
use crate::form::{Draft, FieldSpec, FormController, FormValues};

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsTab {
    Profile,
    Company,
    Security,
    Notifications,
    System,
}

impl SettingsTab {
    pub const ALL: [Self; 5] = [
        Self::Profile,
        Self::Company,
        Self::Security,
        Self::Notifications,
        Self::System,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Company => "company",
            Self::Security => "security",
            Self::Notifications => "notifications",
            Self::System => "system",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Mi Perfil",
            Self::Company => "Empresa",
            Self::Security => "Seguridad",
            Self::Notifications => "Notificaciones",
            Self::System => "Sistema",
        }
    }

    /// Permission needed to see the tab.
    #[must_use]
    pub const fn gate(self) -> Option<Permission> {
        match self {
            Self::System => Some(Permission::ConfigSystem),
            _ => None,
        }
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tabs the identity may open, in display order.
#[must_use]
pub fn visible_tabs(identity: &Identity) -> Vec<SettingsTab> {
    filter_by_permission(identity, &SettingsTab::ALL, |tab| tab.gate())
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

impl Draft for Profile {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Nombre").required(),
        FieldSpec::text("email", "Email").required(),
        FieldSpec::text("phone", "Teléfono"),
        FieldSpec::text("position", "Cargo"),
    ];

    fn from_values(values: &FormValues) -> Result<Self, ValidationError> {
        Ok(Self {
            name: values.string("name"),
            email: values.string("email"),
            phone: values.string("phone"),
            position: values.string("position"),
        })
    }
}

impl Draft for Company {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Nombre de la empresa")
            .required()
            .gated(Permission::ConfigEditAll),
        FieldSpec::text("ruc", "RUC")
            .required()
            .gated(Permission::ConfigEditAll),
        FieldSpec::text("address", "Dirección").gated(Permission::ConfigEditAll),
        FieldSpec::text("phone", "Teléfono").gated(Permission::ConfigEditAll),
        FieldSpec::text("email", "Email").gated(Permission::ConfigEditAll),
        FieldSpec::text("website", "Sitio web").gated(Permission::ConfigEditAll),
    ];

    fn from_values(values: &FormValues) -> Result<Self, ValidationError> {
        Ok(Self {
            name: values.string("name"),
            ruc: values.string("ruc"),
            address: values.string("address"),
            phone: values.string("phone"),
            email: values.string("email"),
            website: values.string("website"),
        })
    }
}

/// Profile form seeded with the saved profile.
#[must_use]
pub fn profile_form(profile: &Profile) -> FormController<Profile> {
    let mut values = FormValues::default();
    values.set("name", profile.name.as_str());
    values.set("email", profile.email.as_str());
    values.set("phone", profile.phone.as_str());
    values.set("position", profile.position.as_str());
    FormController::with_values(values)
}

/// Company form seeded with the saved company details.
#[must_use]
pub fn company_form(company: &Company) -> FormController<Company> {
    let mut values = FormValues::default();
    values.set("name", company.name.as_str());
    values.set("ruc", company.ruc.as_str());
    values.set("address", company.address.as_str());
    values.set("phone", company.phone.as_str());
    values.set("email", company.email.as_str());
    values.set("website", company.website.as_str());
    FormController::with_values(values)
}

/// Shortest new password the security tab accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A password change entered on the security tab.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("current", &"***")
            .field("new", &"***")
            .finish()
    }
}

impl Draft for PasswordChange {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("current_password", "Contraseña actual").required(),
        FieldSpec::text("new_password", "Nueva contraseña").required(),
        FieldSpec::text("confirm_password", "Confirmar nueva contraseña").required(),
    ];

    /// Passwords are compared and measured as typed, not trimmed.
    fn from_values(values: &FormValues) -> Result<Self, ValidationError> {
        let new = values.get("new_password");
        if new != values.get("confirm_password") {
            return Err(ValidationError::Mismatch {
                field: "confirm_password",
                other: "new_password",
            });
        }
        if new.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::TooShort {
                field: "new_password",
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(Self {
            current: values.get("current_password").to_string(),
            new: new.to_string(),
        })
    }
}

/// Empty password form; cleared again after every accepted change.
#[must_use]
pub fn password_form() -> FormController<PasswordChange> {
    FormController::new()
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKey {
    OrderEmails,
    ClientEmails,
    SmsAlerts,
    Push,
}

impl NotificationKey {
    pub const ALL: [Self; 4] = [Self::OrderEmails, Self::ClientEmails, Self::SmsAlerts, Self::Push];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderEmails => "order_emails",
            Self::ClientEmails => "client_emails",
            Self::SmsAlerts => "sms_alerts",
            Self::Push => "push",
        }
    }

    #[must_use]
    pub const fn get(self, prefs: &NotificationPrefs) -> bool {
        match self {
            Self::OrderEmails => prefs.order_emails,
            Self::ClientEmails => prefs.client_emails,
            Self::SmsAlerts => prefs.sms_alerts,
            Self::Push => prefs.push,
        }
    }
}

impl fmt::Display for NotificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKey {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value.trim())
            .ok_or_else(|| CoreError::InvalidValue {
                field: "notification".into(),
                value: value.to_string(),
            })
    }
}

/// Turn one notification preference on or off.
///
/// # Errors
///
/// Returns [`CoreError::RoleDenied`] when a WORKER touches client emails;
/// `prefs` is left unchanged.
pub fn set_notification(
    identity: &Identity,
    prefs: &mut NotificationPrefs,
    key: NotificationKey,
    enabled: bool,
) -> Result<(), CoreError> {
    if key == NotificationKey::ClientEmails && identity.role == Role::Worker {
        return Err(CoreError::RoleDenied {
            role: identity.role,
            action: "change client email notifications".into(),
        });
    }
    let slot = match key {
        NotificationKey::OrderEmails => &mut prefs.order_emails,
        NotificationKey::ClientEmails => &mut prefs.client_emails,
        NotificationKey::SmsAlerts => &mut prefs.sms_alerts,
        NotificationKey::Push => &mut prefs.push,
    };
    *slot = enabled;
    Ok(())
}
