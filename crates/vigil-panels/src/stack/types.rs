//! Core types for the modal panel stack.

use vigil_common::PanelKey;

use crate::surface::PanelSurface;

/// A LIFO stack of opened panels driving a [`PanelSurface`].
///
/// The top panel is the only visible one; panels below it stay mounted but
/// hidden. The same key may appear more than once: reopening a panel from a
/// different trigger pushes another entry rather than moving the existing one.
#[derive(Debug)]
pub struct ModalStack<S: PanelSurface> {
    /// Opened panels, bottom first.
    pub(super) panels: Vec<PanelKey>,
    pub(super) surface: S,
}

impl<S: PanelSurface> ModalStack<S> {
    pub fn new(surface: S) -> Self {
        Self {
            panels: Vec::new(),
            surface,
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// The active (visible) panel, if any.
    pub fn top(&self) -> Option<PanelKey> {
        self.panels.last().copied()
    }

    pub fn contains(&self, panel: PanelKey) -> bool {
        self.panels.contains(&panel)
    }

    /// Opened panels, bottom first.
    pub fn panels(&self) -> &[PanelKey] {
        &self.panels
    }

    /// Stacking position of the topmost entry for `panel` (0 = bottom).
    pub fn z_index(&self, panel: PanelKey) -> Option<usize> {
        self.panels.iter().rposition(|&k| k == panel)
    }

    /// Whether `panel` is the one currently shown.
    pub fn is_visible(&self, panel: PanelKey) -> bool {
        self.top() == Some(panel)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
