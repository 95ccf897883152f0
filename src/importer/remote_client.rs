// ==========================================
// Pre-sale Unit Inventory - Remote Create-Many Client
// ==========================================
// Responsibility: the single HTTP call of the pipeline, plus
// classification of non-2xx error bodies into typed hard failures
// Contract: POST {base}/projects/{id}/units/bulk with
// {projectId, units}; 2xx responses carry an ImportReport
// ==========================================

use crate::config::ImportConfig;
use crate::domain::unit::{BulkCreateRequest, BulkUnitRow, ImportReport};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::unit_importer_trait::BulkCreateClient;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

/// Error body shape of the remote API on non-2xx responses.
///
/// Every field is optional; the server is free to answer with an empty
/// or foreign body and classification still works off the status code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub status_code: Option<u16>,
    pub code: Option<String>,
}

pub struct HttpBulkCreateClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBulkCreateClient {
    pub fn new(config: &ImportConfig) -> ImportResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ImportError::from)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl BulkCreateClient for HttpBulkCreateClient {
    async fn create_units(
        &self,
        project_id: &str,
        units: &[BulkUnitRow],
    ) -> ImportResult<ImportReport> {
        let url = format!("{}/projects/{}/units/bulk", self.base_url, project_id);
        let body = BulkCreateRequest {
            project_id: project_id.to_string(),
            units: units.to_vec(),
        };

        debug!(url = %url, units = units.len(), "submitting bulk create request");
        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<ImportReport>()
                .await
                .map_err(|e| ImportError::InvalidResponse(e.to_string()))
        } else {
            let error_body = response.json::<ApiErrorBody>().await.unwrap_or_default();
            Err(classify_failure(status, error_body))
        }
    }
}

/// Map a non-2xx response to a hard-failure variant.
///
/// The classification drives nothing but the surfaced message; hard
/// failures are never retried automatically.
pub fn classify_failure(status: StatusCode, body: ApiErrorBody) -> ImportError {
    let message = body
        .message
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    match (status, body.code.as_deref()) {
        (_, Some("RATE_LIMIT_EXCEEDED")) => ImportError::RateLimited(message),
        (StatusCode::TOO_MANY_REQUESTS, _) => ImportError::RateLimited(message),
        (StatusCode::PAYLOAD_TOO_LARGE, _) => ImportError::PayloadTooLarge(message),
        (StatusCode::BAD_REQUEST, _) => ImportError::RemoteValidation(message),
        _ => ImportError::Server {
            status: status.as_u16(),
            message,
        },
    }
}
