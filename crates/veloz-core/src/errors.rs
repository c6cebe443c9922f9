//! Cross-cutting error types for Veloz.
//!
//! Domain-specific errors (e.g., `AuthError`, `ApiError`) are defined in
//! their respective crates. A unified error is deferred to `veloz-cli` where
//! all crate errors converge through `anyhow`.

use thiserror::Error;

use crate::enums::Role;
use crate::permission::Permission;

/// Errors that can be raised by any Veloz crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The identity does not hold the permission an action requires.
    #[error("Permission denied: '{permission}' is required")]
    PermissionDenied { permission: Permission },

    /// A permission key string does not name any known capability.
    #[error("Unknown permission key: '{0}'")]
    UnknownPermission(String),

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// The action is reserved for other roles.
    #[error("Role '{role}' may not {action}")]
    RoleDenied { role: Role, action: String },

    /// A string did not parse into one of the known enum values.
    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: String, value: String },
}
