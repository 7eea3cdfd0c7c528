//! HTTP access to the mock cloud API

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::domain::resources::{ResourceRef, ResourceStatus};
use crate::errors::SdkError;

/// Everything the reconciler needs from the cloud.
#[async_trait]
pub trait CloudApi: Send + Sync {
    /// Raw log text. Fails with [`SdkError::FetchFailure`] on a non-success response.
    async fn fetch_logs(&self) -> Result<String, SdkError>;

    /// Fails with [`SdkError::BadStatus`] unless the status is `ok` or `notfound`.
    async fn fetch_resource_status(
        &self,
        reference: &ResourceRef,
    ) -> Result<ResourceStatus, SdkError>;
}

#[derive(Debug, Clone)]
pub struct HttpCloudApi {
    /// Base URL without trailing slash (e.g. http://localhost:8000)
    base_url: String,
    client: Client,
}

impl HttpCloudApi {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn logs_url(&self) -> String {
        format!("{}/logs", self.base_url)
    }

    /// The id goes in verbatim, including any trailing noise scraped with it.
    pub fn resource_url(&self, reference: &ResourceRef) -> String {
        format!("{}/{}/{}", self.base_url, reference.kind, reference.id)
    }
}

#[async_trait]
impl CloudApi for HttpCloudApi {
    async fn fetch_logs(&self) -> Result<String, SdkError> {
        let response = self.client.get(self.logs_url()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SdkError::FetchFailure {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.text().await?)
    }

    async fn fetch_resource_status(
        &self,
        reference: &ResourceRef,
    ) -> Result<ResourceStatus, SdkError> {
        let response = self.client.get(self.resource_url(reference)).send().await?;
        debug!(
            resource = %reference,
            http_status = response.status().as_u16(),
            "resource status response"
        );

        // The HTTP status is not consulted; the body alone decides.
        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        let status = payload.get("status").and_then(Value::as_str);

        status
            .and_then(ResourceStatus::parse)
            .ok_or_else(|| SdkError::bad_status(reference, status))
    }
}
