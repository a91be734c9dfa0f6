//! Mutating operations on ModalStack: open, close, click routing.

use tracing::debug;
use vigil_common::{ClickTarget, PanelKey};

use super::ModalStack;
use crate::surface::PanelSurface;

impl<S: PanelSurface> ModalStack<S> {
    /// Show `panel` on top, hiding (not removing) the previous top.
    pub fn open(&mut self, panel: PanelKey) {
        if let Some(current) = self.top() {
            self.surface.hide(current);
        }
        self.surface.show(panel);
        self.panels.push(panel);
        debug!(%panel, depth = self.panels.len(), "panel opened");
    }

    /// Pop and hide the top panel, re-showing the one beneath it.
    /// Returns the closed panel; no-op on an empty stack.
    pub fn close_top(&mut self) -> Option<PanelKey> {
        self.close_top_with(|_| {})
    }

    /// Like [`close_top`](Self::close_top), but runs `before_close` with the
    /// closing panel first (e.g. to release a capture device it owns).
    pub fn close_top_with<F>(&mut self, before_close: F) -> Option<PanelKey>
    where
        F: FnOnce(PanelKey),
    {
        let closing = self.top()?;
        before_close(closing);
        self.panels.pop();
        self.surface.hide(closing);
        if let Some(new_top) = self.top() {
            self.surface.show(new_top);
        }
        debug!(panel = %closing, depth = self.panels.len(), "panel closed");
        Some(closing)
    }

    /// Route a click on `panel`. Only a click on the overlay of the panel
    /// currently on top closes anything, and then only that panel.
    pub fn handle_click(&mut self, panel: PanelKey, target: ClickTarget) -> Option<PanelKey> {
        self.handle_click_with(panel, target, |_| {})
    }

    /// [`handle_click`](Self::handle_click) with a hook run before the close.
    pub fn handle_click_with<F>(
        &mut self,
        panel: PanelKey,
        target: ClickTarget,
        before_close: F,
    ) -> Option<PanelKey>
    where
        F: FnOnce(PanelKey),
    {
        if target == ClickTarget::Overlay && self.is_visible(panel) {
            self.close_top_with(before_close)
        } else {
            None
        }
    }

    /// Close every panel, top first, so each hide happens in stack order.
    pub fn close_all(&mut self) -> Vec<PanelKey> {
        self.close_all_with(|_| {})
    }

    /// [`close_all`](Self::close_all), running `before_close` for each panel
    /// before it is popped.
    pub fn close_all_with<F>(&mut self, mut before_close: F) -> Vec<PanelKey>
    where
        F: FnMut(PanelKey),
    {
        let mut closed = Vec::with_capacity(self.panels.len());
        while let Some(panel) = self.close_top_with(&mut before_close) {
            closed.push(panel);
        }
        closed
    }
}
