use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{OrderStatus, PaymentMethod, PaymentStatus};

/// A transport order. `assigned_worker_id` is the owner reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    #[serde(rename = "fecha_creacion", alias = "fechaCreacion")]
    pub created_on: NaiveDate,
    #[serde(rename = "remitente_razon", alias = "remitenteRazon")]
    pub sender_name: String,
    #[serde(rename = "destinatario_razon", alias = "destinatarioRazon")]
    pub recipient_name: String,
    #[serde(rename = "lugar_origen", alias = "lugarOrigen")]
    pub origin: String,
    #[serde(rename = "lugar_destino", alias = "lugarDestino")]
    pub destination: String,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    #[serde(rename = "detalle_carga", alias = "detalleCarga")]
    pub cargo_detail: String,
    #[serde(rename = "forma_pago", alias = "formaPago")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "estado_pago", alias = "estadoPago")]
    pub payment_status: PaymentStatus,
    #[serde(rename = "importe_total", alias = "importeTotal")]
    pub total_amount: f64,
    #[serde(
        rename = "trabajador_asignado",
        alias = "trabajadorAsignado",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_worker: Option<String>,
    #[serde(
        rename = "trabajador_id",
        alias = "trabajadorId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_worker_id: Option<u64>,
    #[serde(
        rename = "notas",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub notes: Option<String>,
}

/// Create payload for an order. Id, creation date, and both statuses are
/// assigned by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    #[serde(rename = "remitente_ruc", alias = "remitenteRuc", default)]
    pub sender_tax_id: String,
    #[serde(rename = "remitente_razon", alias = "remitenteRazon")]
    pub sender_name: String,
    #[serde(rename = "remitente_celular", alias = "remitenteCelular", default)]
    pub sender_phone: String,
    #[serde(rename = "destinatario_ruc", alias = "destinatarioRuc", default)]
    pub recipient_tax_id: String,
    #[serde(rename = "destinatario_razon", alias = "destinatarioRazon")]
    pub recipient_name: String,
    #[serde(rename = "destinatario_celular", alias = "destinatarioCelular", default)]
    pub recipient_phone: String,
    #[serde(rename = "lugar_origen", alias = "lugarOrigen")]
    pub origin: String,
    #[serde(rename = "lugar_destino", alias = "lugarDestino")]
    pub destination: String,
    #[serde(rename = "detalle_carga", alias = "detalleCarga")]
    pub cargo_detail: String,
    #[serde(rename = "forma_pago", alias = "formaPago", default)]
    pub payment_method: PaymentMethod,
    #[serde(rename = "importe_total", alias = "importeTotal")]
    pub total_amount: f64,
    #[serde(
        rename = "trabajador_id",
        alias = "trabajadorId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_worker_id: Option<u64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}
