//! Assistant session state: history, phase, and liveness.
//!
//! One `AssistantSession` lives as long as the assistant panel. Each
//! activation hands out a fresh [`SessionTicket`]; deactivation cancels it.
//! Work that resumes after an await checks its ticket before touching
//! anything shared, so a reply that lands after the user stopped listening
//! is dropped instead of leaking into the next conversation.

mod state;
mod types;

pub use state::AssistantSession;
pub use types::{Phase, SessionTicket};
