//! HTTP client for the investigation server.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::{debug, warn};
use vigil_common::{CaptureId, InvestigationId};

use crate::models::{AnalysisReport, CaptureRecord, UploadReply};
use crate::InvestigationError;

/// Server operations the drill-down and live screen depend on.
#[async_trait]
pub trait InvestigationApi: Send + Sync {
    /// Captures for one investigation, newest first.
    async fn list_captures(
        &self,
        investigation: InvestigationId,
    ) -> Result<Vec<CaptureRecord>, InvestigationError>;

    /// Run face analysis on one stored capture.
    async fn analyze_capture(&self, capture: CaptureId) -> Result<AnalysisReport, InvestigationError>;

    /// Store a JPEG snapshot and return the URL it was saved under.
    async fn upload_capture(
        &self,
        investigation: InvestigationId,
        jpeg: &[u8],
    ) -> Result<String, InvestigationError>;
}

/// Encode a JPEG as the data URL the capture endpoint expects.
pub fn snapshot_data_url(jpeg: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", BASE64.encode(jpeg))
}

pub struct InvestigationClient {
    base_url: String,
    http: reqwest::Client,
}

impl InvestigationClient {
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, InvestigationError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| InvestigationError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub(crate) fn captures_url(&self, investigation: InvestigationId) -> String {
        format!("{}/investigation/{investigation}/captures", self.base_url)
    }

    pub(crate) fn analyze_url(&self, capture: CaptureId) -> String {
        format!("{}/capture/{capture}/analyze", self.base_url)
    }

    pub(crate) fn upload_url(&self, investigation: InvestigationId) -> String {
        format!("{}/investigation/{investigation}/capture", self.base_url)
    }

    async fn read_body(response: reqwest::Response) -> Result<(u16, String), InvestigationError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| InvestigationError::Network(e.to_string()))?;
        Ok((status, body))
    }
}

#[async_trait]
impl InvestigationApi for InvestigationClient {
    async fn list_captures(
        &self,
        investigation: InvestigationId,
    ) -> Result<Vec<CaptureRecord>, InvestigationError> {
        let url = self.captures_url(investigation);
        debug!(%url, "listing captures");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| InvestigationError::Network(e.to_string()))?;
        let (status, body) = Self::read_body(response).await?;
        if !(200..300).contains(&status) {
            return Err(InvestigationError::Status { status, body });
        }
        serde_json::from_str(&body).map_err(|e| InvestigationError::Parse(e.to_string()))
    }

    async fn analyze_capture(&self, capture: CaptureId) -> Result<AnalysisReport, InvestigationError> {
        let url = self.analyze_url(capture);
        debug!(%url, "analyzing capture");

        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| InvestigationError::Network(e.to_string()))?;
        let (status, body) = Self::read_body(response).await?;

        // Failures carry an `error` body alongside 404/500; prefer its text.
        let parsed = AnalysisReport::from_body(&body);
        if (200..300).contains(&status) {
            return parsed;
        }
        warn!(capture = %capture, status, "analysis failed");
        match parsed {
            Err(err @ InvestigationError::Server(_)) => Err(err),
            _ => Err(InvestigationError::Status { status, body }),
        }
    }

    async fn upload_capture(
        &self,
        investigation: InvestigationId,
        jpeg: &[u8],
    ) -> Result<String, InvestigationError> {
        let url = self.upload_url(investigation);
        debug!(%url, size = jpeg.len(), "uploading capture");

        let payload = serde_json::json!({ "image_data": snapshot_data_url(jpeg) });
        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| InvestigationError::Network(e.to_string()))?;
        let (status, body) = Self::read_body(response).await?;

        let reply: UploadReply = serde_json::from_str(&body).map_err(|e| {
            if (200..300).contains(&status) {
                InvestigationError::Parse(e.to_string())
            } else {
                InvestigationError::Status {
                    status,
                    body: body.clone(),
                }
            }
        })?;
        reply.into_result()
    }
}
