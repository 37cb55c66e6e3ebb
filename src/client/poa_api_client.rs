//! # POA API Client
//!
//! HTTP client for the backend that owns all durable POA state. Provides
//! event listing plus the execution/finalization mutation endpoints, with
//! multipart evidence upload.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use std::time::Duration;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::error::{ClientError, ClientResult};
use crate::constants::system::USER_AGENT_PREFIX;
use crate::models::{Event, EvidenceFile, ExecutionRecord, FinalizationRecord};

/// Header carrying the per-request correlation id, echoed back by the
/// backend in its audit log
const CORRELATION_ID_HEADER: &str = "X-Correlation-Id";

/// Fresh v4 correlation id for one request
fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Configuration for the POA API client
#[derive(Debug, Clone)]
pub struct PoaApiConfig {
    /// Base URL for the backend API (e.g., "<http://poa-backend:3000>")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Optional API key sent with every request
    pub api_key: Option<String>,
    /// Header name carrying the API key
    pub api_key_header: String,
}

impl Default for PoaApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_ms: 30000,
            api_key: None,
            api_key_header: "X-API-Key".to_string(),
        }
    }
}

impl From<&crate::config::PoaConfig> for PoaApiConfig {
    fn from(config: &crate::config::PoaConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout_ms: config.request_timeout_ms,
            api_key: config.api_key.clone(),
            api_key_header: config.api_key_header.clone(),
        }
    }
}

/// HTTP client for backend API operations
pub struct PoaApiClient {
    client: Client,
    base_url: Url,
    config: PoaApiConfig,
}

impl std::fmt::Debug for PoaApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoaApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout_ms", &self.config.timeout_ms)
            .field("auth_enabled", &self.config.api_key.is_some())
            .finish()
    }
}

impl PoaApiClient {
    /// Create a new API client with the given configuration
    pub fn new(config: PoaApiConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::config_error(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let mut client_builder = Client::builder().timeout(timeout).user_agent(format!(
            "{}/{}",
            USER_AGENT_PREFIX,
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(ref api_key) = config.api_key {
            let mut default_headers = reqwest::header::HeaderMap::new();
            default_headers.insert(
                reqwest::header::HeaderName::from_bytes(config.api_key_header.as_bytes())
                    .map_err(|e| {
                        ClientError::config_error(format!("Invalid API key header name: {e}"))
                    })?,
                api_key
                    .parse()
                    .map_err(|e| ClientError::config_error(format!("Invalid API key: {e}")))?,
            );
            client_builder = client_builder.default_headers(default_headers);
        }

        let client = client_builder
            .build()
            .map_err(|e| ClientError::config_error(format!("Failed to create HTTP client: {e}")))?;

        info!(
            "Created PoaApiClient for base_url: {}, timeout: {}ms",
            base_url, config.timeout_ms
        );

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// List the events of a POA with embedded dates, financings,
    /// responsibles, and approvals
    pub async fn list_events(&self, poa_id: i64) -> ClientResult<Vec<Event>> {
        let mut url = self.join("/events")?;
        url.query_pairs_mut()
            .append_pair("poa", &poa_id.to_string());

        debug!("Listing events from: {}", url);

        let response = self.request(Method::GET, url).send().await?;
        let status = response.status();
        if status.is_success() {
            let events: Vec<Event> = response.json().await?;
            info!("Retrieved {} events for poa {}", events.len(), poa_id);
            Ok(events)
        } else {
            Err(self.rejection("Event list request", response).await)
        }
    }

    /// Submit an execution record with its expense evidence.
    ///
    /// One atomic mutation: per-date execution starts, the full
    /// replacement financing set, and the evidence files.
    pub async fn create_execution(
        &self,
        record: &ExecutionRecord,
        evidence: &[EvidenceFile],
    ) -> ClientResult<()> {
        let url = self.join("/event-executions")?;
        debug!(
            event_id = record.event_id,
            dates = record.event_dates_with_execution.len(),
            "Creating execution at: {url}"
        );

        let form = Self::record_form(record, evidence)?;
        let response = self.request(Method::POST, url).multipart(form).send().await?;
        self.expect_success("Execution create", response).await
    }

    /// Replace an existing execution record wholesale (full-overwrite)
    pub async fn update_execution(
        &self,
        event_id: i64,
        record: &ExecutionRecord,
        evidence: &[EvidenceFile],
    ) -> ClientResult<()> {
        let url = self.join(&format!("/event-executions/{event_id}"))?;
        debug!(event_id, "Updating execution at: {url}");

        let form = Self::record_form(record, evidence)?;
        let response = self.request(Method::PUT, url).multipart(form).send().await?;
        self.expect_success("Execution update", response).await
    }

    /// Roll the named dates of an executing event back to planned
    pub async fn revert_execution(&self, event_id: i64, date_ids: &[i64]) -> ClientResult<()> {
        let url = self.join(&format!("/event-executions/{event_id}/revert"))?;
        debug!(event_id, ?date_ids, "Reverting execution at: {url}");

        let body = serde_json::json!({ "eventDateIds": date_ids });
        let response = self.request(Method::POST, url).json(&body).send().await?;
        self.expect_success("Execution revert", response).await
    }

    /// Submit a finalization record with its completion evidence
    pub async fn create_finalization(
        &self,
        record: &FinalizationRecord,
        evidence: &[EvidenceFile],
    ) -> ClientResult<()> {
        let url = self.join("/event-finalizations")?;
        debug!(
            event_id = record.event_id,
            event_date_id = record.event_date_id,
            "Creating finalization at: {url}"
        );

        let form = Self::record_form(record, evidence)?;
        let response = self.request(Method::POST, url).multipart(form).send().await?;
        self.expect_success("Finalization create", response).await
    }

    /// Replace an existing finalization record (full-overwrite)
    pub async fn update_finalization(
        &self,
        event_id: i64,
        record: &FinalizationRecord,
        evidence: &[EvidenceFile],
    ) -> ClientResult<()> {
        let url = self.join(&format!("/event-finalizations/{event_id}"))?;
        debug!(event_id, "Updating finalization at: {url}");

        let form = Self::record_form(record, evidence)?;
        let response = self.request(Method::PUT, url).multipart(form).send().await?;
        self.expect_success("Finalization update", response).await
    }

    /// Reopen a finished date back to executing
    pub async fn restore_finalization(&self, event_id: i64, date_id: i64) -> ClientResult<()> {
        let url = self.join(&format!("/event-finalizations/{event_id}/restore"))?;
        debug!(event_id, date_id, "Restoring finalization at: {url}");

        let body = serde_json::json!({ "eventDateId": date_id });
        let response = self.request(Method::POST, url).json(&body).send().await?;
        self.expect_success("Finalization restore", response).await
    }

    /// Check the health of the backend service
    pub async fn health_check(&self) -> ClientResult<()> {
        let url = self.join("/health")?;
        debug!("Performing backend health check: {}", url);

        let response = self.request(Method::GET, url).send().await?;
        self.expect_success("Health check", response).await
    }

    /// Get the base URL of the backend API
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Get the configured timeout in milliseconds
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.config.timeout_ms
    }

    /// Start a request with a fresh correlation id attached
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let correlation_id = new_correlation_id();
        debug!(%correlation_id, "Correlated {} {}", method, url);
        self.client
            .request(method, url)
            .header(CORRELATION_ID_HEADER, correlation_id)
    }

    fn join(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::config_error(format!("Invalid URL path '{path}': {e}")))
    }

    /// Build the multipart form for a record mutation: a JSON `data` part
    /// plus one `files` part per evidence attachment
    fn record_form<T: serde::Serialize>(
        record: &T,
        evidence: &[EvidenceFile],
    ) -> ClientResult<Form> {
        let data = serde_json::to_string(record)?;
        let mut form = Form::new().part(
            "data",
            Part::text(data).mime_str("application/json")?,
        );

        for file in evidence {
            form = form.part(
                "files",
                Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.content_type)?,
            );
        }

        Ok(form)
    }

    async fn expect_success(
        &self,
        operation: &str,
        response: reqwest::Response,
    ) -> ClientResult<()> {
        let status = response.status();
        if status.is_success() {
            info!("{} succeeded", operation);
            Ok(())
        } else {
            Err(self.rejection(operation, response).await)
        }
    }

    async fn rejection(&self, operation: &str, response: reqwest::Response) -> ClientError {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        error!("{} failed: {} - {}", operation, status, error_text);
        ClientError::backend_rejected(status.as_u16(), error_text)
    }
}
