//! Modal stacking: nested drill-down dialogs with back-navigation.

mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::VisibilityMap;
    use vigil_common::{ClickTarget, PanelKey};

    fn stack() -> ModalStack<VisibilityMap> {
        ModalStack::new(VisibilityMap::new())
    }

    #[test]
    fn new_stack_is_empty() {
        let s = stack();
        assert!(s.is_empty());
        assert_eq!(s.top(), None);
        assert!(s.surface().visible_panels().is_empty());
    }

    #[test]
    fn open_shows_panel() {
        let mut s = stack();
        s.open(PanelKey::Captures);
        assert_eq!(s.top(), Some(PanelKey::Captures));
        assert_eq!(s.surface().visible_panels(), vec![PanelKey::Captures]);
    }

    #[test]
    fn open_over_active_hides_previous() {
        let mut s = stack();
        s.open(PanelKey::Captures);
        s.open(PanelKey::GroupAnalysis);
        assert!(!s.surface().is_visible(PanelKey::Captures));
        assert!(s.surface().is_visible(PanelKey::GroupAnalysis));
        assert!(s.contains(PanelKey::Captures));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn close_top_reactivates_previous() {
        let mut s = stack();
        s.open(PanelKey::Captures);
        s.open(PanelKey::GroupAnalysis);
        assert_eq!(s.close_top(), Some(PanelKey::GroupAnalysis));
        assert_eq!(s.surface().visible_panels(), vec![PanelKey::Captures]);
        assert_eq!(s.top(), Some(PanelKey::Captures));
    }

    #[test]
    fn closing_last_panel_leaves_none_visible() {
        let mut s = stack();
        s.open(PanelKey::Assistant);
        assert_eq!(s.close_top(), Some(PanelKey::Assistant));
        assert!(s.is_empty());
        assert!(s.surface().visible_panels().is_empty());
    }

    #[test]
    fn close_on_empty_is_noop() {
        let mut s = stack();
        assert_eq!(s.close_top(), None);
        assert!(s.surface().transitions().is_empty());
    }

    #[test]
    fn close_top_with_runs_side_effect_before_pop() {
        let mut s = stack();
        s.open(PanelKey::Captures);
        s.open(PanelKey::Assistant);
        let mut seen = None;
        let closed = s.close_top_with(|p| seen = Some(p));
        assert_eq!(closed, Some(PanelKey::Assistant));
        assert_eq!(seen, Some(PanelKey::Assistant));
        assert!(s.is_visible(PanelKey::Captures));
    }

    #[test]
    fn close_top_with_skips_side_effect_when_empty() {
        let mut s = stack();
        let mut called = false;
        assert_eq!(s.close_top_with(|_| called = true), None);
        assert!(!called);
    }

    #[test]
    fn overlay_click_closes_only_top() {
        let mut s = stack();
        s.open(PanelKey::Captures);
        s.open(PanelKey::GroupAnalysis);
        s.open(PanelKey::PersonDetails);
        let closed = s.handle_click(PanelKey::PersonDetails, ClickTarget::Overlay);
        assert_eq!(closed, Some(PanelKey::PersonDetails));
        assert_eq!(s.panels(), &[PanelKey::Captures, PanelKey::GroupAnalysis]);
        assert_eq!(s.surface().visible_panels(), vec![PanelKey::GroupAnalysis]);
    }

    #[test]
    fn content_click_closes_nothing() {
        let mut s = stack();
        s.open(PanelKey::Captures);
        assert_eq!(s.handle_click(PanelKey::Captures, ClickTarget::Content), None);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn overlay_click_hook_sees_closing_panel() {
        let mut s = stack();
        s.open(PanelKey::DroneSpeaker);
        s.open(PanelKey::Assistant);
        let mut seen = None;
        let closed = s.handle_click_with(PanelKey::Assistant, ClickTarget::Overlay, |p| {
            seen = Some(p)
        });
        assert_eq!(closed, Some(PanelKey::Assistant));
        assert_eq!(seen, Some(PanelKey::Assistant));

        let mut called = false;
        s.handle_click_with(PanelKey::DroneSpeaker, ClickTarget::Content, |_| called = true);
        assert!(!called);
    }

    #[test]
    fn click_on_hidden_panel_is_ignored() {
        let mut s = stack();
        s.open(PanelKey::Captures);
        s.open(PanelKey::GroupAnalysis);
        assert_eq!(s.handle_click(PanelKey::Captures, ClickTarget::Overlay), None);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn duplicate_open_pushes_twice() {
        let mut s = stack();
        s.open(PanelKey::Confirmation);
        s.open(PanelKey::Confirmation);
        assert_eq!(s.len(), 2);
        s.close_top();
        assert!(s.surface().is_visible(PanelKey::Confirmation));
        s.close_top();
        assert!(!s.surface().is_visible(PanelKey::Confirmation));
    }

    #[test]
    fn z_index_follows_stack_position() {
        let mut s = stack();
        s.open(PanelKey::Captures);
        s.open(PanelKey::GroupAnalysis);
        assert_eq!(s.z_index(PanelKey::Captures), Some(0));
        assert_eq!(s.z_index(PanelKey::GroupAnalysis), Some(1));
        assert_eq!(s.z_index(PanelKey::Assistant), None);
    }

    #[test]
    fn close_all_pops_top_first() {
        let mut s = stack();
        s.open(PanelKey::Captures);
        s.open(PanelKey::GroupAnalysis);
        s.open(PanelKey::PersonDetails);
        let closed = s.close_all();
        assert_eq!(
            closed,
            vec![
                PanelKey::PersonDetails,
                PanelKey::GroupAnalysis,
                PanelKey::Captures
            ]
        );
        assert!(s.surface().visible_panels().is_empty());
    }

    #[test]
    fn close_all_with_sees_every_panel_in_pop_order() {
        let mut s = stack();
        s.open(PanelKey::Assistant);
        s.open(PanelKey::Captures);
        s.open(PanelKey::Assistant);
        let mut seen = Vec::new();
        let closed = s.close_all_with(|p| seen.push(p));
        assert_eq!(seen, closed);
        assert_eq!(
            seen,
            vec![PanelKey::Assistant, PanelKey::Captures, PanelKey::Assistant]
        );
        assert!(s.is_empty());
    }

    #[test]
    fn visible_panel_always_matches_top() {
        // Deterministic pseudo-random open/close sequences.
        let mut seed: u64 = 0x5eed;
        for _ in 0..200 {
            let mut s = stack();
            for _ in 0..30 {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let roll = (seed >> 33) as usize;
                if roll % 3 == 0 {
                    s.close_top();
                } else {
                    let key = PanelKey::ALL[roll % PanelKey::ALL.len()];
                    s.open(key);
                }
                let visible = s.surface().visible_panels();
                match s.top() {
                    Some(top) => assert_eq!(visible, vec![top]),
                    None => assert!(visible.is_empty()),
                }
            }
        }
    }
}
