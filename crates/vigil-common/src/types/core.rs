use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of dialog panels the application mounts.
///
/// Panels are templates: showing or hiding one never disposes its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKey {
    NewInvestigation,
    EditInvestigation,
    Confirmation,
    DroneSpeaker,
    Assistant,
    Captures,
    GroupAnalysis,
    PersonDetails,
}

impl PanelKey {
    pub const ALL: &'static [PanelKey] = &[
        PanelKey::NewInvestigation,
        PanelKey::EditInvestigation,
        PanelKey::Confirmation,
        PanelKey::DroneSpeaker,
        PanelKey::Assistant,
        PanelKey::Captures,
        PanelKey::GroupAnalysis,
        PanelKey::PersonDetails,
    ];

    /// Id of the overlay element that hosts this panel.
    pub fn element_id(&self) -> &'static str {
        match self {
            PanelKey::NewInvestigation => "new-investigation-modal-overlay",
            PanelKey::EditInvestigation => "edit-investigation-modal-overlay",
            PanelKey::Confirmation => "confirmation-modal-overlay",
            PanelKey::DroneSpeaker => "drone-speaker-modal-overlay",
            PanelKey::Assistant => "ai-assistant-modal-overlay",
            PanelKey::Captures => "captures-modal-overlay",
            PanelKey::GroupAnalysis => "group-analysis-modal-overlay",
            PanelKey::PersonDetails => "person-details-modal-overlay",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.element_id() == id)
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestigationId(pub u32);

impl fmt::Display for InvestigationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptureId(pub u32);

impl fmt::Display for CaptureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestigationStatus {
    Live,
    Pending,
    Completed,
}

impl InvestigationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestigationStatus::Live => "Live",
            InvestigationStatus::Pending => "Pending",
            InvestigationStatus::Completed => "Completed",
        }
    }
}

impl FromStr for InvestigationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Live" => Ok(InvestigationStatus::Live),
            "Pending" => Ok(InvestigationStatus::Pending),
            "Completed" => Ok(InvestigationStatus::Completed),
            other => Err(format!("unknown investigation status: {other}")),
        }
    }
}

impl fmt::Display for InvestigationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The data attributes a rendered investigation card carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRef {
    pub id: InvestigationId,
    pub title: String,
    pub status: InvestigationStatus,
    /// Anchor used to link to the card on the investigations page.
    pub timestamp: String,
}
