//! Wire shapes returned by the investigation server.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use vigil_common::CaptureId;

use crate::InvestigationError;

/// One saved snapshot, as listed by `GET /investigation/{id}/captures`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRecord {
    pub id: CaptureId,
    pub url: String,
    #[serde(with = "capture_timestamp")]
    pub timestamp: NaiveDateTime,
}

mod capture_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Crowd-level figures for one analyzed capture.
///
/// The server sends an empty object when no faces were found, so every
/// field defaults. Scores arrive pre-formatted as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupStats {
    pub total_faces: u32,
    pub male_count: u32,
    pub female_count: u32,
    pub panic_score: String,
}

/// One detected face.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceRecord {
    /// `data:image/...;base64,` URL of the cropped face.
    pub crop_base64: String,
    pub gender: String,
    pub age_range: String,
    pub emotion_label: String,
    pub vulnerability: String,
    pub fear_score: String,
    pub panic_score: String,
}

/// Result of `POST /capture/{id}/analyze`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub group_stats: GroupStats,
    #[serde(default)]
    pub faces: Vec<FaceRecord>,
}

impl AnalysisReport {
    /// Parse an analysis body. A body carrying `error` is a failure even
    /// when the status code said otherwise.
    pub fn from_body(body: &str) -> Result<Self, InvestigationError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| InvestigationError::Parse(e.to_string()))?;
        if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
            return Err(InvestigationError::Server(error.to_string()));
        }
        serde_json::from_value(value).map_err(|e| InvestigationError::Parse(e.to_string()))
    }

    pub fn face(&self, index: usize) -> Option<&FaceRecord> {
        self.faces.get(index)
    }
}

/// Result of `POST /investigation/{id}/capture`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadReply {
    /// The stored image's URL, or the server's reason for refusing it.
    pub fn into_result(self) -> Result<String, InvestigationError> {
        match (self.success, self.image_url) {
            (true, Some(url)) => Ok(url),
            _ => Err(InvestigationError::Server(
                self.error
                    .unwrap_or_else(|| "capture was not saved".to_string()),
            )),
        }
    }
}
