//! Clients: shared records, searchable by name, contact, and mobile number.

use chrono::NaiveDate;
use serde::Serialize;
use veloz_core::Identity;
use veloz_core::entities::{Client, NewClient};

use crate::error::ValidationError;
use crate::form::{Draft, FieldSpec, FormValues};
use crate::record::{Ownership, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientView {
    pub id: u64,
    pub business_name: String,
    pub contact_name: String,
    pub mobile: String,
    pub address: String,
    pub city: String,
    pub registered_on: NaiveDate,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tax_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub landline: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
}

impl Record for Client {
    type View = ClientView;

    const ENTITY: &'static str = "client";
    const OWNERSHIP: Ownership = Ownership::Shared;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.business_name.as_str(), self.contact_name.as_str()]
    }

    fn search_literals(&self) -> Vec<String> {
        vec![self.mobile.clone()]
    }

    fn project(&self, _identity: &Identity) -> ClientView {
        ClientView {
            id: self.id,
            business_name: self.business_name.clone(),
            contact_name: self.contact_name.clone(),
            mobile: self.mobile.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            registered_on: self.registered_on,
            tax_id: self.tax_id.clone(),
            email: self.email.clone(),
            landline: self.landline.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}

impl Draft for NewClient {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("business_name", "Razón social").required(),
        FieldSpec::text("tax_id", "RUC / DNI"),
        FieldSpec::text("contact_name", "Nombre de contacto").required(),
        FieldSpec::text("email", "Email"),
        FieldSpec::text("mobile", "Celular").required(),
        FieldSpec::text("landline", "Teléfono fijo"),
        FieldSpec::text("address", "Dirección").required(),
        FieldSpec::text("city", "Ciudad"),
        FieldSpec::text("postal_code", "Código postal"),
    ];

    fn from_values(values: &FormValues) -> Result<Self, ValidationError> {
        Ok(Self {
            business_name: values.string("business_name"),
            tax_id: values.string("tax_id"),
            contact_name: values.string("contact_name"),
            email: values.string("email"),
            mobile: values.string("mobile"),
            landline: values.string("landline"),
            address: values.string("address"),
            city: values.string("city"),
            postal_code: values.string("postal_code"),
        })
    }
}
