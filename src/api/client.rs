use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::page::Page;
use crate::api::query::{DeviceQuery, RecordQuery};
use crate::domain::{
    Device, DeviceId, DevicePayload, DeviceSummary, Document, DocumentId, DocumentPayload,
    MaintenanceId, MaintenancePayload, MaintenanceRecord, Statistics,
};

/// Thin async wrapper over the inventory REST endpoints.
///
/// One call is one HTTP request: no retries, no caching, no timeout
/// override. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        let http = Client::builder().build().map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- Devices ---------------------------------------------------------

    pub async fn list_devices(&self, query: &DeviceQuery) -> Result<Page<DeviceSummary>, ApiError> {
        let url = self.endpoint("devices/", &query.pairs())?;
        self.fetch(Method::GET, url, None::<&()>).await
    }

    pub async fn get_device(&self, id: DeviceId) -> Result<Device, ApiError> {
        let url = self.endpoint(&format!("devices/{id}/"), &[])?;
        self.fetch(Method::GET, url, None::<&()>).await
    }

    pub async fn create_device(&self, payload: &DevicePayload) -> Result<Device, ApiError> {
        let url = self.endpoint("devices/", &[])?;
        self.fetch(Method::POST, url, Some(payload)).await
    }

    pub async fn update_device(
        &self,
        id: DeviceId,
        payload: &DevicePayload,
    ) -> Result<Device, ApiError> {
        let url = self.endpoint(&format!("devices/{id}/"), &[])?;
        self.fetch(Method::PUT, url, Some(payload)).await
    }

    pub async fn delete_device(&self, id: DeviceId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("devices/{id}/"), &[])?;
        self.execute(Method::DELETE, url, None::<&()>).await.map(drop)
    }

    pub async fn device_statistics(&self) -> Result<Statistics, ApiError> {
        let url = self.endpoint("devices/statistics/", &[])?;
        self.fetch(Method::GET, url, None::<&()>).await
    }

    // -- Maintenance records ---------------------------------------------

    pub async fn list_maintenance(
        &self,
        query: &RecordQuery,
    ) -> Result<Page<MaintenanceRecord>, ApiError> {
        let url = self.endpoint("maintenance/", &query.pairs())?;
        self.fetch(Method::GET, url, None::<&()>).await
    }

    pub async fn get_maintenance(&self, id: MaintenanceId) -> Result<MaintenanceRecord, ApiError> {
        let url = self.endpoint(&format!("maintenance/{id}/"), &[])?;
        self.fetch(Method::GET, url, None::<&()>).await
    }

    pub async fn create_maintenance(
        &self,
        payload: &MaintenancePayload,
    ) -> Result<MaintenanceRecord, ApiError> {
        let url = self.endpoint("maintenance/", &[])?;
        self.fetch(Method::POST, url, Some(payload)).await
    }

    pub async fn update_maintenance(
        &self,
        id: MaintenanceId,
        payload: &MaintenancePayload,
    ) -> Result<MaintenanceRecord, ApiError> {
        let url = self.endpoint(&format!("maintenance/{id}/"), &[])?;
        self.fetch(Method::PUT, url, Some(payload)).await
    }

    pub async fn delete_maintenance(&self, id: MaintenanceId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("maintenance/{id}/"), &[])?;
        self.execute(Method::DELETE, url, None::<&()>).await.map(drop)
    }

    // -- Documents -------------------------------------------------------

    pub async fn list_documents(&self, query: &RecordQuery) -> Result<Page<Document>, ApiError> {
        let url = self.endpoint("documents/", &query.pairs())?;
        self.fetch(Method::GET, url, None::<&()>).await
    }

    pub async fn get_document(&self, id: DocumentId) -> Result<Document, ApiError> {
        let url = self.endpoint(&format!("documents/{id}/"), &[])?;
        self.fetch(Method::GET, url, None::<&()>).await
    }

    pub async fn create_document(&self, payload: &DocumentPayload) -> Result<Document, ApiError> {
        let url = self.endpoint("documents/", &[])?;
        self.fetch(Method::POST, url, Some(payload)).await
    }

    pub async fn update_document(
        &self,
        id: DocumentId,
        payload: &DocumentPayload,
    ) -> Result<Document, ApiError> {
        let url = self.endpoint(&format!("documents/{id}/"), &[])?;
        self.fetch(Method::PUT, url, Some(payload)).await
    }

    pub async fn delete_document(&self, id: DocumentId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("documents/{id}/"), &[])?;
        self.execute(Method::DELETE, url, None::<&()>).await.map(drop)
    }

    // -- Plumbing --------------------------------------------------------

    fn endpoint(&self, path: &str, pairs: &[(&'static str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    async fn fetch<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = self.execute(method, url, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn execute<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, %url, "API request");

        let mut builder = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "API request got no response");
            ApiError::Network(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::Network)?;

        if !status.is_success() {
            let payload = serde_json::from_slice::<Value>(&bytes).ok();
            tracing::warn!(%method, %url, status = status.as_u16(), "API request rejected");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                payload,
            });
        }

        tracing::debug!(%method, %url, status = status.as_u16(), "API request finished");
        Ok(bytes.to_vec())
    }
}
