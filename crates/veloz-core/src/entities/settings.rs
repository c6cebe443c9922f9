use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::identity::Identity;

/// Personal details shown on the profile tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
}

/// Company details shown on the company tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub ruc: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl Default for Company {
    fn default() -> Self {
        Self {
            name: "MVeloz Transportes".into(),
            ruc: "20123456789".into(),
            address: "Av. Principal 123, Lima".into(),
            phone: "+51 01 234 5678".into(),
            email: "contacto@mveloz.com".into(),
            website: "www.mveloz.com".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub order_emails: bool,
    pub client_emails: bool,
    pub sms_alerts: bool,
    pub push: bool,
}

/// Locally persisted dashboard settings for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub profile: Profile,
    #[serde(default)]
    pub company: Company,
    pub notifications: NotificationPrefs,
    /// When the security tab last accepted a password change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_changed_at: Option<DateTime<Utc>>,
}

impl Settings {
    /// Initial settings for an identity that has never saved any.
    #[must_use]
    pub fn defaults_for(identity: &Identity) -> Self {
        let (email, position) = match identity.role {
            Role::Admin => ("admin@mveloz.com", "Administrador"),
            Role::Worker => ("trabajador@mveloz.com", "Trabajador"),
        };
        Self {
            profile: Profile {
                name: identity.display_name.clone(),
                email: email.into(),
                phone: "+51 999 888 777".into(),
                position: position.into(),
            },
            company: Company::default(),
            notifications: NotificationPrefs {
                order_emails: true,
                client_emails: identity.is_admin(),
                sms_alerts: true,
                push: true,
            },
            password_changed_at: None,
        }
    }
}
