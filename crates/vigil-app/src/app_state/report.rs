//! Reports drill-down: captures → group analysis → person details.

use tracing::warn;
use vigil_common::{CaptureId, InvestigationId, PanelKey};
use vigil_investigation::{CapturesView, GroupView, PersonView};

use super::core::VigilApp;

impl VigilApp {
    pub(super) async fn open_captures(&mut self, id: InvestigationId) {
        let title = self
            .titles
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Investigation #{id}"));
        self.captures_view = Some(CapturesView::loading(&title));
        self.panels.open(PanelKey::Captures);

        let result = self.investigations.list_captures(id).await;
        if let Err(e) = &result {
            warn!(investigation = %id, error = %e, "failed to fetch captures");
        }
        if let Some(view) = self.captures_view.as_mut() {
            view.settle(result);
        }
    }

    pub(super) async fn analyze_capture(&mut self, id: CaptureId) {
        self.group_view = Some(GroupView::analyzing());
        self.panels.open(PanelKey::GroupAnalysis);

        let result = self.investigations.analyze_capture(id).await;
        if let Err(e) = &result {
            warn!(capture = %id, error = %e, "analysis failed");
        }
        if let Some(view) = self.group_view.as_mut() {
            view.settle(result);
        }
    }

    pub(super) fn inspect_face(&mut self, index: usize) {
        let face = self
            .group_view
            .as_ref()
            .filter(|view| view.is_loaded())
            .and_then(|view| view.report.face(index))
            .cloned();
        match face {
            Some(face) => {
                self.person_view = Some(PersonView::new(face));
                self.panels.open(PanelKey::PersonDetails);
            }
            None => warn!(index, "no analyzed face at index"),
        }
    }
}
