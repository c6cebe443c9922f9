//! Orders: owner-scoped records with amount redaction.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use veloz_core::entities::{NewOrder, Order};
use veloz_core::enums::{OrderStatus, PaymentMethod, PaymentStatus, Role};
use veloz_core::permission::has_permission;
use veloz_core::{Identity, Permission};

use crate::error::ValidationError;
use crate::form::{Draft, FieldSpec, FormValues};
use crate::record::{Ownership, Record};

/// An order as one identity may see it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub id: u64,
    pub created_on: NaiveDate,
    pub sender_name: String,
    pub recipient_name: String,
    pub origin: String,
    pub destination: String,
    pub status: OrderStatus,
    pub cargo_detail: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_worker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for Order {
    type View = OrderView;

    const ENTITY: &'static str = "order";
    const OWNERSHIP: Ownership = Ownership::Owned;
    const REDACTIONS: &'static [(&'static str, Permission)] = &[
        ("total_amount", Permission::OrdersViewAmounts),
        ("payment_status", Permission::OrdersViewAmounts),
    ];
    const DELETE_PERMISSION: Option<Permission> = Some(Permission::OrdersDelete);

    fn id(&self) -> u64 {
        self.id
    }

    fn owner(&self) -> Option<u64> {
        self.assigned_worker_id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![
            self.sender_name.as_str(),
            self.recipient_name.as_str(),
            self.origin.as_str(),
            self.destination.as_str(),
            self.status.as_str(),
        ]
    }

    fn project(&self, identity: &Identity) -> OrderView {
        OrderView {
            id: self.id,
            created_on: self.created_on,
            sender_name: self.sender_name.clone(),
            recipient_name: self.recipient_name.clone(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            status: self.status,
            cargo_detail: self.cargo_detail.clone(),
            payment_method: self.payment_method,
            payment_status: Self::reveals(identity, "payment_status").then_some(self.payment_status),
            total_amount: Self::reveals(identity, "total_amount").then_some(self.total_amount),
            assigned_worker: self.assigned_worker.clone(),
            notes: self.notes.clone(),
        }
    }
}

const PAYMENT_METHODS: &[&str] = &["Efectivo", "Transferencia", "Cheque", "Tarjeta", "Credito"];

impl Draft for NewOrder {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("sender_tax_id", "RUC remitente"),
        FieldSpec::text("sender_name", "Razón social remitente").required(),
        FieldSpec::text("sender_phone", "Celular remitente"),
        FieldSpec::text("recipient_tax_id", "RUC destinatario"),
        FieldSpec::text("recipient_name", "Razón social destinatario").required(),
        FieldSpec::text("recipient_phone", "Celular destinatario"),
        FieldSpec::text("origin", "Lugar de origen").required(),
        FieldSpec::text("destination", "Lugar de destino").required(),
        FieldSpec::text("cargo_detail", "Detalle de carga").required(),
        FieldSpec::choice("payment_method", "Forma de pago", PAYMENT_METHODS, "Efectivo"),
        FieldSpec::amount("total_amount", "Importe total").required(),
        FieldSpec::text("assigned_worker_id", "Trabajador asignado")
            .gated(Permission::OrdersAssignWorker),
    ];

    const CREATE_PERMISSION: Option<Permission> = Some(Permission::OrdersCreate);

    fn from_values(values: &FormValues) -> Result<Self, ValidationError> {
        Ok(Self {
            sender_tax_id: values.string("sender_tax_id"),
            sender_name: values.string("sender_name"),
            sender_phone: values.string("sender_phone"),
            recipient_tax_id: values.string("recipient_tax_id"),
            recipient_name: values.string("recipient_name"),
            recipient_phone: values.string("recipient_phone"),
            origin: values.string("origin"),
            destination: values.string("destination"),
            cargo_detail: values.string("cargo_detail"),
            payment_method: values.parsed("payment_method")?.unwrap_or_default(),
            total_amount: values.amount("total_amount")?,
            assigned_worker_id: values.parsed("assigned_worker_id")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Row actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderAction {
    View,
    Edit,
    Delete,
    UpdateStatus,
}

impl OrderAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::UpdateStatus => "update_status",
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions offered on one order row.
///
/// Status updates are a WORKER action and only make sense while the order
/// can still move (`Pendiente`, `En Tránsito`).
#[must_use]
pub fn available_actions(identity: &Identity, order: &Order) -> Vec<OrderAction> {
    let mut actions = vec![OrderAction::View];
    if has_permission(identity, Permission::OrdersEdit) {
        actions.push(OrderAction::Edit);
    }
    if has_permission(identity, Permission::OrdersDelete) {
        actions.push(OrderAction::Delete);
    }
    if identity.role == Role::Worker
        && has_permission(identity, Permission::OrdersUpdateStatus)
        && !order.status.allowed_next_states().is_empty()
    {
        actions.push(OrderAction::UpdateStatus);
    }
    actions
}
