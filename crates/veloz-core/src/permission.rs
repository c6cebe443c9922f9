//! Typed permission keys and the permission evaluator.
//!
//! Every capability the dashboard gates is a [`Permission`] variant with a
//! canonical dotted key (e.g. `orders.view_amounts`). Membership is
//! exact-match only: there is no hierarchy, no wildcard, and no case
//! normalization of keys.
//!
//! ```
//! use veloz_core::enums::Role;
//! use veloz_core::identity::Identity;
//! use veloz_core::permission::{has_permission, Permission, PermissionSet};
//!
//! let worker = Identity::new(2, "Karen", Role::Worker,
//!     PermissionSet::from_iter([Permission::OrdersUpdateStatus]));
//! assert!(has_permission(&worker, Permission::OrdersUpdateStatus));
//! assert!(!has_permission(&worker, Permission::OrdersViewAmounts));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;
use crate::identity::Identity;

// ---------------------------------------------------------------------------
// Permission
// ---------------------------------------------------------------------------

/// A capability gating one UI action or one data field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    OrdersCreate,
    OrdersEdit,
    OrdersDelete,
    OrdersViewAll,
    OrdersViewAmounts,
    OrdersAssignWorker,
    OrdersGenerateInvoice,
    OrdersViewAssigned,
    OrdersUpdateStatus,
    ConfigEditAll,
    ConfigManageUsers,
    ConfigSystem,
}

impl Permission {
    /// Every known permission, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::OrdersCreate,
        Self::OrdersEdit,
        Self::OrdersDelete,
        Self::OrdersViewAll,
        Self::OrdersViewAmounts,
        Self::OrdersAssignWorker,
        Self::OrdersGenerateInvoice,
        Self::OrdersViewAssigned,
        Self::OrdersUpdateStatus,
        Self::ConfigEditAll,
        Self::ConfigManageUsers,
        Self::ConfigSystem,
    ];

    /// Return the canonical key string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrdersCreate => "orders.create",
            Self::OrdersEdit => "orders.edit",
            Self::OrdersDelete => "orders.delete",
            Self::OrdersViewAll => "orders.view_all",
            Self::OrdersViewAmounts => "orders.view_amounts",
            Self::OrdersAssignWorker => "orders.assign_worker",
            Self::OrdersGenerateInvoice => "orders.generate_invoice",
            Self::OrdersViewAssigned => "orders.view_assigned",
            Self::OrdersUpdateStatus => "orders.update_status",
            Self::ConfigEditAll => "config.edit_all",
            Self::ConfigManageUsers => "config.manage_users",
            Self::ConfigSystem => "config.system",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|permission| permission.as_str() == key)
            .ok_or_else(|| CoreError::UnknownPermission(key.to_string()))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// PermissionSet
// ---------------------------------------------------------------------------

/// The set of capabilities held by one identity.
///
/// Backed by a hash set so membership checks do not scan. Serializes as a
/// sorted list of keys. Deserialization drops keys it does not recognize and
/// logs each one, so a typo in a persisted record never grants or maps to a
/// different capability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(HashSet<Permission>);

impl PermissionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in canonical (declaration) order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Permission> {
        let mut keys: Vec<Permission> = self.0.iter().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Parse raw keys, splitting them into known permissions and the
    /// unrecognized remainder.
    pub fn parse_keys<I, S>(keys: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        let mut unknown = Vec::new();
        for key in keys {
            match key.as_ref().parse::<Permission>() {
                Ok(permission) => {
                    set.insert(permission);
                }
                Err(_) => unknown.push(key.as_ref().to_string()),
            }
        }
        (Self(set), unknown)
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for PermissionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

impl<'de> Deserialize<'de> for PermissionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keys = Vec::<String>::deserialize(deserializer)?;
        let (set, unknown) = Self::parse_keys(&keys);
        for key in unknown {
            tracing::warn!(%key, "ignoring unknown permission key");
        }
        Ok(set)
    }
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// True iff `permission` is an element of the identity's permission set.
#[must_use]
pub fn has_permission(identity: &Identity, permission: Permission) -> bool {
    identity.permissions.contains(permission)
}

/// Raw-key variant of [`has_permission`]. Unknown keys are never held.
#[must_use]
pub fn has_permission_key(identity: &Identity, key: &str) -> bool {
    key.parse::<Permission>()
        .is_ok_and(|permission| has_permission(identity, permission))
}

/// Keep the items whose gate the identity holds.
///
/// Items with no gate (`None`) are always kept. Items whose gate is not held
/// are omitted; nothing is signaled for them.
pub fn filter_by_permission<T, F>(identity: &Identity, items: &[T], gate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<Permission>,
{
    items
        .iter()
        .filter(|item| gate(item).is_none_or(|permission| has_permission(identity, permission)))
        .cloned()
        .collect()
}

/// Guard for a gated action.
///
/// # Errors
///
/// Returns [`CoreError::PermissionDenied`] when the identity lacks `permission`.
pub fn require_permission(identity: &Identity, permission: Permission) -> Result<(), CoreError> {
    if has_permission(identity, permission) {
        Ok(())
    } else {
        Err(CoreError::PermissionDenied { permission })
    }
}
