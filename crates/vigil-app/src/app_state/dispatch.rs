//! Action dispatch: routes UI actions to the appropriate subsystem.

use tracing::{debug, info, warn};
use vigil_assistant::VoiceLoop;
use vigil_common::{PanelKey, UiAction};
use vigil_investigation::{card_outcome, CardOutcome};

use super::core::VigilApp;

impl VigilApp {
    /// Dispatch a [`UiAction`] to the appropriate subsystem.
    pub async fn dispatch(&mut self, action: UiAction) {
        debug!(action = action.label(), "dispatch");
        match action {
            UiAction::OpenPanel(panel) => {
                self.panels.open(panel);
            }
            UiAction::CloseControl(panel) => {
                // Close buttons live on the panel's content, so only the
                // visible panel can be asking.
                if self.panels.is_visible(panel) {
                    let voice = &mut self.voice;
                    self.panels
                        .close_top_with(|closing| release_panel(voice, closing));
                }
            }
            UiAction::PanelClick { panel, target } => {
                let voice = &mut self.voice;
                self.panels
                    .handle_click_with(panel, target, |closing| release_panel(voice, closing));
            }

            UiAction::OpenCaptures(id) => self.open_captures(id).await,
            UiAction::AnalyzeCapture(id) => self.analyze_capture(id).await,
            UiAction::InspectFace(index) => self.inspect_face(index),

            UiAction::Card { card, action } => {
                self.titles.insert(card.id, card.title.clone());
                match card_outcome(&card, action) {
                    CardOutcome::Confirm(request) => {
                        info!(title = %request.title, action = %request.form_action, "confirmation requested");
                        self.confirmation = Some(request);
                        self.panels.open(PanelKey::Confirmation);
                    }
                    CardOutcome::Notice(message) => {
                        self.notices.push(message);
                    }
                    CardOutcome::Edit { form_action } => {
                        self.edit_form_action = Some(form_action);
                        self.panels.open(PanelKey::EditInvestigation);
                    }
                }
            }

            UiAction::CaptureSnapshot(id) => {
                let Some(frame) = self.staged_frame.take() else {
                    warn!(investigation = %id, "no camera frame to capture");
                    return;
                };
                match self.investigations.upload_capture(id, &frame).await {
                    Ok(url) => {
                        info!(investigation = %id, %url, "capture saved");
                        self.strip.push(url);
                    }
                    Err(e) => warn!(investigation = %id, error = %e, "failed to save capture"),
                }
            }

            UiAction::ToggleAssistant => self.toggle_assistant(),

            UiAction::None => {}
        }
    }

    /// Close every open panel top first, ending the assistant if its panel
    /// is among them, then wait for the voice loop to wind down.
    pub async fn shutdown(&mut self) -> Vec<PanelKey> {
        let voice = &mut self.voice;
        let closed = self
            .panels
            .close_all_with(|closing| release_panel(voice, closing));
        info!(closed = closed.len(), "panels closed for shutdown");
        self.join_assistant().await;
        closed
    }
}

/// Runs before `panel` leaves the stack.
fn release_panel(voice: &mut Option<VoiceLoop>, panel: PanelKey) {
    if panel == PanelKey::Assistant {
        if let Some(voice) = voice.as_mut() {
            voice.deactivate();
        }
    }
}
