//! Order routes: `GET/POST /api/ordenes/`, `DELETE /api/ordenes/{id}/`.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use veloz_core::entities::{NewOrder, Order};
use veloz_core::store::RecordStore;

use crate::{ApiClient, error::ApiError, http::check_response};

pub(crate) const ORDERS_PATH: &str = "/api/ordenes/";

impl ApiClient {
    pub(crate) async fn get_collection<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("{path}: {e}")))
    }

    pub(crate) async fn post_record<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let resp = check_response(self.http.post(&url).json(body).send().await?).await?;
        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Parse(format!("{path}: {e}")))
    }

    pub(crate) async fn delete_record(&self, path: &str, id: u64) -> Result<(), ApiError> {
        let url = format!("{}{id}/", self.url(path));
        tracing::debug!(%url, "DELETE");
        check_response(self.http.delete(&url).send().await?).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore<Order> for ApiClient {
    type Draft = NewOrder;
    type Error = ApiError;

    async fn list(&self) -> Result<Vec<Order>, ApiError> {
        self.get_collection(ORDERS_PATH).await
    }

    async fn create(&self, draft: &NewOrder) -> Result<Order, ApiError> {
        self.post_record(ORDERS_PATH, draft).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.delete_record(ORDERS_PATH, id).await
    }
}
