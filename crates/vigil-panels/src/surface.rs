//! The show/hide primitives the stack drives.

use std::collections::HashMap;

use serde::Serialize;
use vigil_common::PanelKey;

/// Whatever actually renders panels (DOM overlay, TUI layer, test double).
///
/// The stack only ever toggles visibility; implementations must keep panel
/// content intact across `hide`/`show`.
pub trait PanelSurface {
    fn show(&mut self, panel: PanelKey);
    fn hide(&mut self, panel: PanelKey);
}

/// In-memory surface: remembers which panels are shown and every toggle.
#[derive(Debug, Default, Clone, Serialize)]
pub struct VisibilityMap {
    visible: HashMap<PanelKey, bool>,
    transitions: Vec<(PanelKey, bool)>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, panel: PanelKey) -> bool {
        self.visible.get(&panel).copied().unwrap_or(false)
    }

    /// Currently shown panels, in registration order.
    pub fn visible_panels(&self) -> Vec<PanelKey> {
        PanelKey::ALL
            .iter()
            .copied()
            .filter(|k| self.is_visible(*k))
            .collect()
    }

    /// Every show (`true`) / hide (`false`) call in order.
    pub fn transitions(&self) -> &[(PanelKey, bool)] {
        &self.transitions
    }
}

impl PanelSurface for VisibilityMap {
    fn show(&mut self, panel: PanelKey) {
        self.visible.insert(panel, true);
        self.transitions.push((panel, true));
    }

    fn hide(&mut self, panel: PanelKey) {
        self.visible.insert(panel, false);
        self.transitions.push((panel, false));
    }
}
