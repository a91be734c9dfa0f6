use serde::{Deserialize, Serialize};

use super::ClickTarget;
use crate::types::{CaptureId, CardRef, InvestigationId, PanelKey};

/// Every user interaction the client reacts to.
///
/// Click handlers translate "what was clicked" into one of these values;
/// the app dispatcher matches on it to route to the panel stack, the voice
/// assistant or the investigation client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiAction {
    // -- Panels --
    OpenPanel(PanelKey),
    CloseControl(PanelKey),
    PanelClick { panel: PanelKey, target: ClickTarget },

    // -- Reports drill-down --
    OpenCaptures(InvestigationId),
    AnalyzeCapture(CaptureId),
    InspectFace(usize),

    // -- Investigation cards --
    Card { card: CardRef, action: CardAction },

    // -- Live screen --
    CaptureSnapshot(InvestigationId),

    // -- AI / Voice --
    ToggleAssistant,

    // -- Noop --
    None,
}

/// Buttons on an investigation card or on the live screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardAction {
    /// Click on a dashboard card body; behaviour depends on its status.
    Open,
    Start,
    Continue,
    Edit,
    Delete,
    Pause,
    Complete,
    CloseLiveScreen,
}
