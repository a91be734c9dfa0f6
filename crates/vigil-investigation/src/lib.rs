//! Investigation data for the Vigil client.
//!
//! Covers the parts of the field workflow that talk to the investigation
//! server or the drone, plus the pure view models the UI renders:
//! - capture listing, analysis and snapshot upload (`client`)
//! - the live-screen thumbnail strip (`strip`)
//! - confirmation dialogs raised by card buttons (`confirm`)
//! - report drill-down panel content (`report`)
//! - the drone speaker (`speaker`)

pub mod client;
pub mod confirm;
pub mod models;
pub mod report;
pub mod speaker;
pub mod strip;

pub use client::{snapshot_data_url, InvestigationApi, InvestigationClient};
pub use confirm::{card_outcome, CardOutcome, ConfirmationRequest, Tone};
pub use models::{AnalysisReport, CaptureRecord, FaceRecord, GroupStats, UploadReply};
pub use report::{CapturesView, GroupView, PersonView, Placeholder};
pub use speaker::{status_text, SpeakerClient, SPEAKER_CONNECT_ERROR};
pub use strip::CaptureStrip;

#[derive(Debug, thiserror::Error)]
pub enum InvestigationError {
    /// The request never produced a usable HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a failure status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The server reported a failure in the response body.
    #[error("{0}")]
    Server(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<InvestigationError> for vigil_common::VigilError {
    fn from(err: InvestigationError) -> Self {
        match err {
            InvestigationError::Network(msg) => vigil_common::VigilError::Network(msg),
            other => vigil_common::VigilError::Investigation(other.to_string()),
        }
    }
}
