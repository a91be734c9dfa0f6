use super::{CardAction, UiAction};
use crate::types::PanelKey;

impl UiAction {
    /// Human-readable label for menus and logs.
    pub fn label(&self) -> &'static str {
        match self {
            UiAction::OpenPanel(PanelKey::NewInvestigation) => "New Investigation",
            UiAction::OpenPanel(PanelKey::DroneSpeaker) => "Drone Speaker",
            UiAction::OpenPanel(PanelKey::Assistant) => "AI Assistant",
            UiAction::OpenPanel(_) => "Open Panel",
            UiAction::CloseControl(_) => "Close Panel",
            UiAction::PanelClick { .. } => "Panel Click",
            UiAction::OpenCaptures(_) => "View Captures",
            UiAction::AnalyzeCapture(_) => "Analyze Capture",
            UiAction::InspectFace(_) => "Person Details",
            UiAction::Card { action, .. } => action.label(),
            UiAction::CaptureSnapshot(_) => "Capture",
            UiAction::ToggleAssistant => "Toggle Listening",
            UiAction::None => "None",
        }
    }

}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Open => "Open Investigation",
            CardAction::Start => "Start Investigation",
            CardAction::Continue => "Continue Investigation",
            CardAction::Edit => "Edit Investigation",
            CardAction::Delete => "Delete Investigation",
            CardAction::Pause => "Pause Investigation",
            CardAction::Complete => "Complete Investigation",
            CardAction::CloseLiveScreen => "Close Live Screen",
        }
    }

    /// Parse the `data-action` attribute of a card button.
    pub fn from_data_action(value: &str) -> Option<Self> {
        match value {
            "start" => Some(CardAction::Start),
            "continue" => Some(CardAction::Continue),
            "edit" => Some(CardAction::Edit),
            "delete" => Some(CardAction::Delete),
            "pause" => Some(CardAction::Pause),
            "complete" => Some(CardAction::Complete),
            _ => None,
        }
    }
}
