use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::permission::PermissionSet;

/// The authenticated user held for the lifetime of a session.
///
/// Produced by `veloz-auth` at login, persisted as the single session record,
/// and passed explicitly to every view. The permission set never changes while
/// the session lives; a new login replaces the whole identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: u64,
    #[serde(rename = "name", alias = "displayName", alias = "display_name")]
    pub display_name: String,
    pub role: Role,
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Identity {
    #[must_use]
    pub fn new(
        id: u64,
        display_name: impl Into<String>,
        role: Role,
        permissions: PermissionSet,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            role,
            permissions,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::permission::Permission;

    #[test]
    fn reads_the_dashboard_record_shape() {
        let json = r#"{
            "id": 2,
            "name": "Karen",
            "role": "WORKER",
            "permissions": ["orders.view_assigned", "orders.update_status"]
        }"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.id, 2);
        assert_eq!(identity.display_name, "Karen");
        assert_eq!(identity.role, Role::Worker);
        assert!(identity.permissions.contains(Permission::OrdersUpdateStatus));
        assert!(!identity.is_admin());
    }

    #[test]
    fn missing_permissions_means_none() {
        let identity: Identity =
            serde_json::from_str(r#"{"id": 1, "name": "Admin", "role": "ADMIN"}"#).unwrap();
        assert!(identity.permissions.is_empty());
        assert!(identity.is_admin());
    }

    #[test]
    fn writes_name_key() {
        let identity = Identity::new(1, "Admin", Role::Admin, PermissionSet::new());
        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["name"], "Admin");
        assert!(value.get("display_name").is_none());
    }
}
