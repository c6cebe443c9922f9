//! In-process record store used in demo mode and in tests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Local;
use veloz_core::entities::{Client, NewClient, NewOrder, Order};
use veloz_core::enums::{OrderStatus, PaymentStatus};
use veloz_core::store::RecordStore;

use crate::{error::ApiError, fixtures};

/// A `Vec`-backed store. New records get `max(id) + 1`.
#[derive(Debug)]
pub struct MemoryStore<R> {
    records: Mutex<Vec<R>>,
}

impl<R: Clone> MemoryStore<R> {
    #[must_use]
    pub const fn new(records: Vec<R>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<R>>, ApiError> {
        self.records
            .lock()
            .map_err(|_| ApiError::Storage("memory store lock poisoned".into()))
    }

    fn snapshot(&self) -> Result<Vec<R>, ApiError> {
        Ok(self.lock()?.clone())
    }

    fn insert_with(&self, id_of: fn(&R) -> u64, build: impl FnOnce(u64) -> R) -> Result<R, ApiError> {
        let mut records = self.lock()?;
        let next = records.iter().map(id_of).max().unwrap_or(0) + 1;
        let record = build(next);
        records.push(record.clone());
        Ok(record)
    }

    fn remove(&self, entity: &'static str, id_of: fn(&R) -> u64, id: u64) -> Result<(), ApiError> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|record| id_of(record) != id);
        if records.len() == before {
            return Err(ApiError::NotFound { entity, id });
        }
        Ok(())
    }
}

impl MemoryStore<Order> {
    /// Store seeded with the demo orders.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(fixtures::orders())
    }
}

impl MemoryStore<Client> {
    /// Store seeded with the demo clients.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(fixtures::clients())
    }
}

#[async_trait]
impl RecordStore<Order> for MemoryStore<Order> {
    type Draft = NewOrder;
    type Error = ApiError;

    async fn list(&self) -> Result<Vec<Order>, ApiError> {
        self.snapshot()
    }

    async fn create(&self, draft: &NewOrder) -> Result<Order, ApiError> {
        let order = self.insert_with(|o| o.id, |id| Order {
            id,
            created_on: Local::now().date_naive(),
            sender_name: draft.sender_name.clone(),
            recipient_name: draft.recipient_name.clone(),
            origin: draft.origin.clone(),
            destination: draft.destination.clone(),
            status: OrderStatus::Pending,
            cargo_detail: draft.cargo_detail.clone(),
            payment_method: draft.payment_method,
            payment_status: PaymentStatus::Pending,
            total_amount: draft.total_amount,
            assigned_worker: None,
            assigned_worker_id: draft.assigned_worker_id,
            notes: None,
        })?;
        tracing::debug!(id = order.id, "order created in memory");
        Ok(order)
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.remove("order", |o| o.id, id)
    }
}

#[async_trait]
impl RecordStore<Client> for MemoryStore<Client> {
    type Draft = NewClient;
    type Error = ApiError;

    async fn list(&self) -> Result<Vec<Client>, ApiError> {
        self.snapshot()
    }

    async fn create(&self, draft: &NewClient) -> Result<Client, ApiError> {
        let client = self.insert_with(|c| c.id, |id| Client {
            id,
            business_name: draft.business_name.clone(),
            tax_id: draft.tax_id.clone(),
            contact_name: draft.contact_name.clone(),
            email: draft.email.clone(),
            mobile: draft.mobile.clone(),
            landline: draft.landline.clone(),
            address: draft.address.clone(),
            city: draft.city.clone(),
            postal_code: draft.postal_code.clone(),
            registered_on: Local::now().date_naive(),
        })?;
        tracing::debug!(id = client.id, "client created in memory");
        Ok(client)
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.remove("client", |c| c.id, id)
    }
}
