use serde::{Deserialize, Serialize};

mod action_enum;
mod dispatch;

pub use action_enum::*;

/// Which part of a panel a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickTarget {
    /// The dimmed background around the dialog.
    Overlay,
    /// Anywhere inside the dialog body.
    Content,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CaptureId, CardRef, InvestigationId, InvestigationStatus, PanelKey};

    #[test]
    fn action_labels() {
        assert_eq!(UiAction::OpenPanel(PanelKey::Assistant).label(), "AI Assistant");
        assert_eq!(UiAction::ToggleAssistant.label(), "Toggle Listening");
        let card = UiAction::Card {
            card: CardRef {
                id: InvestigationId(1),
                title: "Flood sweep".into(),
                status: InvestigationStatus::Pending,
                timestamp: String::new(),
            },
            action: CardAction::Pause,
        };
        assert_eq!(card.label(), "Pause Investigation");
    }

    #[test]
    fn card_action_labels() {
        assert_eq!(CardAction::Start.label(), "Start Investigation");
        assert_eq!(CardAction::Delete.label(), "Delete Investigation");
        assert_eq!(CardAction::CloseLiveScreen.label(), "Close Live Screen");
    }

    #[test]
    fn card_action_parses_data_attribute() {
        assert_eq!(CardAction::from_data_action("edit"), Some(CardAction::Edit));
        assert_eq!(CardAction::from_data_action("continue"), Some(CardAction::Continue));
        assert_eq!(CardAction::from_data_action("archive"), None);
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            UiAction::OpenPanel(PanelKey::DroneSpeaker),
            UiAction::PanelClick {
                panel: PanelKey::GroupAnalysis,
                target: ClickTarget::Overlay,
            },
            UiAction::OpenCaptures(InvestigationId(3)),
            UiAction::AnalyzeCapture(CaptureId(9)),
            UiAction::InspectFace(2),
            UiAction::Card {
                card: CardRef {
                    id: InvestigationId(1),
                    title: "Flood sector 4".into(),
                    status: InvestigationStatus::Pending,
                    timestamp: "20240101120000".into(),
                },
                action: CardAction::Continue,
            },
            UiAction::ToggleAssistant,
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: UiAction = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }
}
