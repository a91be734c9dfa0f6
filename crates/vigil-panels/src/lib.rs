//! Dialog panel management: a LIFO stack of overlapping modal panels.
//!
//! Opening a panel hides the one beneath it without unmounting it; closing
//! the top brings the previous one back exactly as it was left.

pub mod stack;
pub mod surface;

pub use stack::ModalStack;
pub use surface::{PanelSurface, VisibilityMap};
