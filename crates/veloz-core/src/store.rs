//! The external persistence collaborator.
//!
//! Records are owned by whatever implements [`RecordStore`]; views only mirror
//! them for as long as they render. `veloz-api` provides the HTTP and
//! in-memory implementations.

use async_trait::async_trait;

/// List/create/delete access to one record collection.
#[async_trait]
pub trait RecordStore<R>: Send + Sync
where
    R: Send + Sync,
{
    /// Payload accepted by [`create`](Self::create).
    type Draft: Send + Sync;

    /// Transport or API failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the whole collection.
    async fn list(&self) -> Result<Vec<R>, Self::Error>;

    /// Persist a new record and return it with server-assigned fields filled in.
    async fn create(&self, draft: &Self::Draft) -> Result<R, Self::Error>;

    /// Delete the record with the given id.
    async fn delete(&self, id: u64) -> Result<(), Self::Error>;
}
