//! Roles, status enums, payment enums, and dashboard sections.
//!
//! Enums carried on the wire serialize with the backend's Spanish labels
//! (e.g. `"En Tránsito"`), which are also what `as_str()` returns. Status enums
//! with state machines provide `allowed_next_states()` to enforce valid
//! transitions at the application layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

fn parse_label<T: Copy>(
    all: &[T],
    label: fn(T) -> &'static str,
    field: &str,
    value: &str,
) -> Result<T, CoreError> {
    all.iter()
        .copied()
        .find(|candidate| label(*candidate).eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| CoreError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Sees every record regardless of ownership.
    Admin,
    /// Sees only the records assigned to them.
    Worker,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Worker => "WORKER",
        }
    }

    /// Human label shown next to the display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Worker => "Trabajador",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label(&[Self::Admin, Self::Worker], Self::as_str, "role", value)
    }
}

// ---------------------------------------------------------------------------
// OrderStatus
// ---------------------------------------------------------------------------

/// Status of a transport order.
///
/// ```text
/// Pendiente → En Tránsito → Completada
///                         → Cancelada
/// Pendiente → Cancelada
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "En Tránsito")]
    InTransit,
    #[serde(rename = "Completada")]
    Completed,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InTransit,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::InTransit, Self::Cancelled],
            Self::InTransit => &[Self::Completed, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InTransit => "En Tránsito",
            Self::Completed => "Completada",
            Self::Cancelled => "Cancelada",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::as_str, "order status", value)
    }
}

// ---------------------------------------------------------------------------
// PaymentStatus
// ---------------------------------------------------------------------------

/// Whether an order has been paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Pagado")]
    Paid,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Paid => "Pagado",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaymentMethod
// ---------------------------------------------------------------------------

/// How an order is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Efectivo")]
    Cash,
    #[serde(rename = "Transferencia")]
    Transfer,
    #[serde(rename = "Cheque")]
    Check,
    #[serde(rename = "Tarjeta")]
    Card,
    #[serde(rename = "Credito")]
    Credit,
}

impl PaymentMethod {
    pub const ALL: [Self; 5] = [
        Self::Cash,
        Self::Transfer,
        Self::Check,
        Self::Card,
        Self::Credit,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Efectivo",
            Self::Transfer => "Transferencia",
            Self::Check => "Cheque",
            Self::Card => "Tarjeta",
            Self::Credit => "Credito",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::as_str, "payment method", value)
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// Logical dashboard section. The only routing signal the core needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Clients,
    Orders,
    Settings,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Clients, Self::Orders, Self::Settings];

    /// Fixed route path of the section.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Clients => "/dashboard/clientes",
            Self::Orders => "/dashboard/ordenes",
            Self::Settings => "/dashboard/configuracion",
        }
    }

    /// Resolve a route path. Unknown paths fall back to the dashboard.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|section| section.path() == trimmed)
            .unwrap_or(Self::Dashboard)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Clients => "clients",
            Self::Orders => "orders",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn order_status_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::InTransit));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::InTransit.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::Completed.allowed_next_states().is_empty());
        assert!(OrderStatus::Cancelled.allowed_next_states().is_empty());
    }

    #[test]
    fn order_status_uses_backend_labels_on_the_wire() {
        let json = serde_json::to_string(&OrderStatus::InTransit).unwrap();
        assert_eq!(json, "\"En Tránsito\"");
        let parsed: OrderStatus = serde_json::from_str("\"Completada\"").unwrap();
        assert_eq!(parsed, OrderStatus::Completed);
    }

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Worker).unwrap(), "\"WORKER\"");
        let parsed: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[rstest]
    #[case("efectivo", PaymentMethod::Cash)]
    #[case("Transferencia", PaymentMethod::Transfer)]
    #[case(" Credito ", PaymentMethod::Credit)]
    fn payment_method_parses_labels(#[case] input: &str, #[case] expected: PaymentMethod) {
        assert_eq!(input.parse::<PaymentMethod>(), Ok(expected));
    }

    #[test]
    fn payment_method_rejects_unknown_label() {
        assert!("Bitcoin".parse::<PaymentMethod>().is_err());
    }

    #[rstest]
    #[case("/dashboard", Section::Dashboard)]
    #[case("/dashboard/clientes", Section::Clients)]
    #[case("/dashboard/ordenes/", Section::Orders)]
    #[case("/dashboard/configuracion", Section::Settings)]
    #[case("/somewhere/else", Section::Dashboard)]
    #[case("", Section::Dashboard)]
    fn section_resolves_paths(#[case] path: &str, #[case] expected: Section) {
        assert_eq!(Section::from_path(path), expected);
    }
}
