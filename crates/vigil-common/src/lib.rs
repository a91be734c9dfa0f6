pub mod actions;
pub mod errors;
pub mod id;
pub mod types;

pub use actions::{CardAction, ClickTarget, UiAction};
pub use errors::{ConfigError, DeviceError, VigilError};
pub use id::{new_id, SessionId};
pub use types::{CaptureId, CardRef, InvestigationId, InvestigationStatus, PanelKey};

pub type Result<T> = std::result::Result<T, VigilError>;
