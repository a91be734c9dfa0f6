//! VigilApp struct definition and constructors.

use std::collections::HashMap;
use std::sync::Arc;

use vigil_assistant::VoiceLoop;
use vigil_common::{InvestigationId, PanelKey, VigilError};
use vigil_config::VigilConfig;
use vigil_investigation::{
    CaptureStrip, CapturesView, ConfirmationRequest, GroupView, InvestigationApi,
    InvestigationClient, PersonView,
};
use vigil_panels::{ModalStack, VisibilityMap};

/// Top-level application state.
pub struct VigilApp {
    pub(super) config: VigilConfig,

    // Panels
    pub(super) panels: ModalStack<VisibilityMap>,

    // Voice assistant (absent until a capture device is attached)
    pub(super) voice: Option<VoiceLoop>,

    // Investigation data
    pub(super) investigations: Arc<dyn InvestigationApi>,
    pub(super) titles: HashMap<InvestigationId, String>,

    // Reports drill-down
    pub(super) captures_view: Option<CapturesView>,
    pub(super) group_view: Option<GroupView>,
    pub(super) person_view: Option<PersonView>,

    // Card actions
    pub(super) confirmation: Option<ConfirmationRequest>,
    pub(super) edit_form_action: Option<String>,
    pub(super) notices: Vec<String>,

    // Live screen
    pub(super) strip: CaptureStrip,
    pub(super) staged_frame: Option<Vec<u8>>,
}

impl VigilApp {
    pub fn new(config: VigilConfig, investigations: Arc<dyn InvestigationApi>) -> Self {
        let strip = CaptureStrip::new(config.capture.max_thumbnails as usize, 0);
        Self {
            config,
            panels: ModalStack::new(VisibilityMap::new()),
            voice: None,
            investigations,
            titles: HashMap::new(),
            captures_view: None,
            group_view: None,
            person_view: None,
            confirmation: None,
            edit_form_action: None,
            notices: Vec::new(),
            strip,
            staged_frame: None,
        }
    }

    /// Build the app against the configured investigation server.
    pub fn connect(config: VigilConfig) -> Result<Self, VigilError> {
        let client = InvestigationClient::new(
            &config.server.base_url,
            config.server.connect_timeout(),
            config.server.request_timeout(),
        )?;
        Ok(Self::new(config, Arc::new(client)))
    }

    pub fn panels(&self) -> &ModalStack<VisibilityMap> {
        &self.panels
    }

    /// The panel currently shown, if any.
    pub fn visible_panel(&self) -> Option<PanelKey> {
        self.panels.top()
    }

    /// Title used in the captures panel heading for `id`.
    pub fn remember_title(&mut self, id: InvestigationId, title: impl Into<String>) {
        self.titles.insert(id, title.into());
    }

    pub fn captures_view(&self) -> Option<&CapturesView> {
        self.captures_view.as_ref()
    }

    pub fn group_view(&self) -> Option<&GroupView> {
        self.group_view.as_ref()
    }

    pub fn person_view(&self) -> Option<&PersonView> {
        self.person_view.as_ref()
    }

    pub fn confirmation(&self) -> Option<&ConfirmationRequest> {
        self.confirmation.as_ref()
    }

    pub fn edit_form_action(&self) -> Option<&str> {
        self.edit_form_action.as_deref()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn strip(&self) -> &CaptureStrip {
        &self.strip
    }

    /// Hold the latest camera frame (JPEG) for the next snapshot.
    pub fn stage_frame(&mut self, jpeg: Vec<u8>) {
        self.staged_frame = Some(jpeg);
    }
}
