//! Client routes: `GET/POST /api/clientes/`, `DELETE /api/clientes/{id}/`.

use async_trait::async_trait;
use veloz_core::entities::{Client, NewClient};
use veloz_core::store::RecordStore;

use crate::{ApiClient, error::ApiError};

pub(crate) const CLIENTS_PATH: &str = "/api/clientes/";

#[async_trait]
impl RecordStore<Client> for ApiClient {
    type Draft = NewClient;
    type Error = ApiError;

    async fn list(&self) -> Result<Vec<Client>, ApiError> {
        self.get_collection(CLIENTS_PATH).await
    }

    async fn create(&self, draft: &NewClient) -> Result<Client, ApiError> {
        self.post_record(CLIENTS_PATH, draft).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.delete_record(CLIENTS_PATH, id).await
    }
}
