use crate::domain::model::{Capability, IntervalRecord, PermissionGrants, RecordKind, TimeRange};
use crate::domain::ports::{ConfigProvider, HealthProvider};
use crate::utils::error::{HealthError, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Serialize;

const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Serialize)]
struct PermissionRequest<'a> {
    permissions: &'a [Capability],
}

/// reqwest-backed client for the health-data service.
#[derive(Debug, Clone)]
pub struct HttpHealthProvider {
    base_url: String,
    client: Client,
}

impl HttpHealthProvider {
    /// Builds the client from the configured service URL. Constructed once
    /// at startup and passed to whoever needs the provider.
    pub fn connect<C: ConfigProvider>(config: &C) -> Self {
        Self {
            base_url: config.service_url().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn error_for(response: reqwest::Response) -> HealthError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        HealthError::ProviderError { status, message }
    }
}

fn query_time(t: NaiveDateTime) -> String {
    t.format(QUERY_TIME_FORMAT).to_string()
}

#[async_trait]
impl HealthProvider for HttpHealthProvider {
    async fn request_permissions(&self, capabilities: &[Capability]) -> Result<PermissionGrants> {
        let url = format!("{}/v1/permissions/request", self.base_url);
        tracing::debug!("Requesting permissions at: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&PermissionRequest {
                permissions: capabilities,
            })
            .send()
            .await?;

        tracing::debug!("Permission response status: {}", response.status());
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let body = response.text().await?;
        let grants: PermissionGrants = serde_json::from_str(&body)?;
        Ok(grants)
    }

    async fn read_records(
        &self,
        kind: RecordKind,
        range: &TimeRange,
    ) -> Result<Vec<IntervalRecord>> {
        let url = format!("{}/v1/records", self.base_url);
        tracing::debug!("Reading {} records at: {}", kind.as_str(), url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("type", kind.as_str().to_string()),
                ("start", query_time(range.start)),
                ("end", query_time(range.end)),
            ])
            .send()
            .await?;

        tracing::debug!("Record response status: {}", response.status());
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let body = response.text().await?;
        let records: Vec<IntervalRecord> = serde_json::from_str(&body)?;
        Ok(records)
    }
}
