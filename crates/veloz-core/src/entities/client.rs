use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer company. Clients carry no owner reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: u64,
    #[serde(rename = "razon_social", alias = "razonSocial")]
    pub business_name: String,
    #[serde(rename = "ruc_dni", alias = "ruc", default)]
    pub tax_id: String,
    #[serde(rename = "nombre_contacto", alias = "nombreContacto")]
    pub contact_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "celular")]
    pub mobile: String,
    #[serde(rename = "telefono_fijo", alias = "telefono", default)]
    pub landline: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "ciudad", default)]
    pub city: String,
    #[serde(rename = "codigo_postal", alias = "codigoPostal", default)]
    pub postal_code: String,
    #[serde(rename = "fecha_registro", alias = "fechaRegistro")]
    pub registered_on: NaiveDate,
}

/// Create payload for a client. Id and registration date are assigned by the
/// persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    #[serde(rename = "razon_social", alias = "razonSocial")]
    pub business_name: String,
    #[serde(rename = "ruc_dni", alias = "ruc", default)]
    pub tax_id: String,
    #[serde(rename = "nombre_contacto", alias = "nombreContacto")]
    pub contact_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "celular")]
    pub mobile: String,
    #[serde(rename = "telefono_fijo", alias = "telefono", default)]
    pub landline: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "ciudad", default)]
    pub city: String,
    #[serde(rename = "codigo_postal", alias = "codigoPostal", default)]
    pub postal_code: String,
}
