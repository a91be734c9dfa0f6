mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_keys_have_unique_element_ids() {
        use std::collections::HashSet;
        let ids: HashSet<&str> = PanelKey::ALL.iter().map(|k| k.element_id()).collect();
        assert_eq!(ids.len(), PanelKey::ALL.len());
    }

    #[test]
    fn panel_key_from_element_id() {
        for key in PanelKey::ALL {
            assert_eq!(PanelKey::from_element_id(key.element_id()), Some(*key));
        }
        assert_eq!(PanelKey::from_element_id("sidebar-overlay"), None);
    }

    #[test]
    fn panel_key_serialization() {
        let json = serde_json::to_string(&PanelKey::GroupAnalysis).unwrap();
        assert_eq!(json, "\"group_analysis\"");
        let back: PanelKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PanelKey::GroupAnalysis);
    }

    #[test]
    fn investigation_id_display() {
        assert_eq!(InvestigationId(42).to_string(), "42");
        assert_eq!(CaptureId(7).to_string(), "7");
    }

    #[test]
    fn investigation_status_serializes_capitalized() {
        let json = serde_json::to_string(&InvestigationStatus::Pending).unwrap();
        assert_eq!(json, "\"Pending\"");
        let back: InvestigationStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(back, InvestigationStatus::Completed);
    }

    #[test]
    fn investigation_status_parse() {
        assert_eq!("Live".parse(), Ok(InvestigationStatus::Live));
        assert!("Archived".parse::<InvestigationStatus>().is_err());
    }
}
