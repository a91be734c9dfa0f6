//! Top-level application state.
//!
//! Owns the panel stack, the voice assistant and the investigation client,
//! and routes every [`UiAction`](vigil_common::UiAction) to them.

mod assistant;
mod core;
mod dispatch;
mod report;


pub use self::assistant::build_voice_loop;
pub use self::core::VigilApp;
