//! What each investigation-card button asks the user.

use serde::Serialize;
use vigil_common::{CardAction, CardRef, InvestigationStatus};

/// Colour of the confirm button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Danger,
}

/// Contents of the confirmation dialog. Confirming submits a form to
/// `form_action` with the optional hidden fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationRequest {
    pub title: String,
    /// May contain inline markup around the investigation title.
    pub message: String,
    pub confirm_label: String,
    pub tone: Tone,
    pub form_action: String,
    pub new_status: Option<InvestigationStatus>,
    pub go_live: bool,
}

impl ConfirmationRequest {
    /// Hidden form fields, in submission order.
    pub fn hidden_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(status) = self.new_status {
            fields.push(("new_status", status.to_string()));
        }
        if self.go_live {
            fields.push(("go_live", "true".to_string()));
        }
        fields
    }
}

/// What a card button leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CardOutcome {
    Confirm(ConfirmationRequest),
    /// Persistent notice; may contain a link.
    Notice(String),
    /// Open the edit form, which submits to `form_action`.
    Edit { form_action: String },
}

pub fn card_outcome(card: &CardRef, action: CardAction) -> CardOutcome {
    let id = card.id;
    let title = &card.title;
    let update_status = format!("/investigation/{id}/update_status");

    match action {
        CardAction::Open => match card.status {
            InvestigationStatus::Live => open_live(title, update_status, true),
            InvestigationStatus::Pending => open_live(title, update_status, false),
            InvestigationStatus::Completed => CardOutcome::Notice(format!(
                "This investigation is complete. You can <a href=\"/investigations#{}\">view or delete it</a>.",
                card.timestamp
            )),
        },
        CardAction::Start => open_live(title, update_status, true),
        CardAction::Continue => open_live(title, update_status, false),
        CardAction::Edit => CardOutcome::Edit {
            form_action: format!("/investigation/{id}/edit"),
        },
        CardAction::Delete => CardOutcome::Confirm(ConfirmationRequest {
            title: "Confirm Deletion".into(),
            message: format!("Delete <strong>{title}</strong>?"),
            confirm_label: "Yes, Delete".into(),
            tone: Tone::Danger,
            form_action: format!("/investigation/{id}/delete"),
            new_status: None,
            go_live: false,
        }),
        CardAction::Pause | CardAction::CloseLiveScreen => {
            CardOutcome::Confirm(ConfirmationRequest {
                title: "Pause Investigation".into(),
                message: "This will pause the investigation and return you to the main screen. Proceed?"
                    .into(),
                confirm_label: "Yes, Pause".into(),
                tone: Tone::Primary,
                form_action: update_status,
                new_status: Some(InvestigationStatus::Pending),
                go_live: false,
            })
        }
        CardAction::Complete => CardOutcome::Confirm(ConfirmationRequest {
            title: "Complete Investigation".into(),
            message: format!("Are you sure you want to mark <strong>{title}</strong> as complete?"),
            confirm_label: "Yes, Complete".into(),
            tone: Tone::Primary,
            form_action: update_status,
            new_status: Some(InvestigationStatus::Completed),
            go_live: false,
        }),
    }
}

fn open_live(title: &str, form_action: String, fresh: bool) -> CardOutcome {
    let (heading, label) = if fresh {
        ("Start Investigation", "Yes, Start")
    } else {
        ("Continue Investigation", "Yes, Continue")
    };
    CardOutcome::Confirm(ConfirmationRequest {
        title: heading.into(),
        message: format!("Open live screen for <strong>{title}</strong>?"),
        confirm_label: label.into(),
        tone: Tone::Primary,
        form_action,
        new_status: Some(InvestigationStatus::Live),
        go_live: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_common::InvestigationId;

    fn card(status: InvestigationStatus) -> CardRef {
        CardRef {
            id: InvestigationId(12),
            title: "Flood sweep".into(),
            status,
            timestamp: "20250314092653".into(),
        }
    }

    fn confirm(outcome: CardOutcome) -> ConfirmationRequest {
        match outcome {
            CardOutcome::Confirm(req) => req,
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn dashboard_live_card_starts() {
        let req = confirm(card_outcome(&card(InvestigationStatus::Live), CardAction::Open));
        assert_eq!(req.title, "Start Investigation");
        assert_eq!(req.confirm_label, "Yes, Start");
        assert_eq!(req.message, "Open live screen for <strong>Flood sweep</strong>?");
        assert_eq!(req.form_action, "/investigation/12/update_status");
        assert_eq!(
            req.hidden_fields(),
            vec![("new_status", "Live".to_string()), ("go_live", "true".to_string())]
        );
    }

    #[test]
    fn dashboard_pending_card_continues() {
        let req = confirm(card_outcome(&card(InvestigationStatus::Pending), CardAction::Open));
        assert_eq!(req.title, "Continue Investigation");
        assert_eq!(req.confirm_label, "Yes, Continue");
        assert_eq!(req.new_status, Some(InvestigationStatus::Live));
    }

    #[test]
    fn dashboard_completed_card_links_to_investigations() {
        let outcome = card_outcome(&card(InvestigationStatus::Completed), CardAction::Open);
        assert_eq!(
            outcome,
            CardOutcome::Notice(
                "This investigation is complete. You can <a href=\"/investigations#20250314092653\">view or delete it</a>."
                    .into()
            )
        );
    }

    #[test]
    fn delete_is_danger_without_hidden_fields() {
        let req = confirm(card_outcome(&card(InvestigationStatus::Pending), CardAction::Delete));
        assert_eq!(req.tone, Tone::Danger);
        assert_eq!(req.form_action, "/investigation/12/delete");
        assert!(req.hidden_fields().is_empty());
    }

    #[test]
    fn edit_opens_form() {
        assert_eq!(
            card_outcome(&card(InvestigationStatus::Live), CardAction::Edit),
            CardOutcome::Edit {
                form_action: "/investigation/12/edit".into()
            }
        );
    }

    #[test]
    fn closing_live_screen_pauses() {
        let pause = confirm(card_outcome(&card(InvestigationStatus::Live), CardAction::Pause));
        let close = confirm(card_outcome(
            &card(InvestigationStatus::Live),
            CardAction::CloseLiveScreen,
        ));
        assert_eq!(pause, close);
        assert_eq!(pause.new_status, Some(InvestigationStatus::Pending));
        assert!(!pause.go_live);
    }

    #[test]
    fn complete_sets_completed() {
        let req = confirm(card_outcome(&card(InvestigationStatus::Live), CardAction::Complete));
        assert_eq!(
            req.message,
            "Are you sure you want to mark <strong>Flood sweep</strong> as complete?"
        );
        assert_eq!(req.hidden_fields(), vec![("new_status", "Completed".to_string())]);
    }
}
