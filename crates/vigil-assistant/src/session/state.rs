//! Shared session state guarded by one lock.

use std::sync::{Mutex, MutexGuard};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use vigil_common::SessionId;

use super::types::{Phase, SessionTicket};
use crate::history::ConversationHistory;
use crate::Message;

struct SessionState {
    id: SessionId,
    phase: Phase,
    history: ConversationHistory,
    token: CancellationToken,
}

/// History and phase of the assistant, shared between the UI side
/// (activate/deactivate) and the running loop.
///
/// The lock is never held across an await.
pub struct AssistantSession {
    state: Mutex<SessionState>,
}

impl AssistantSession {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        let token = CancellationToken::new();
        token.cancel();
        Self {
            state: Mutex::new(SessionState {
                id: SessionId::new(),
                phase: Phase::Idle,
                history: ConversationHistory::new(system_prompt),
                token,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a new activation: end any previous one, truncate history to the
    /// seed, and enter Listening.
    pub fn activate(&self) -> SessionTicket {
        let mut state = self.lock();
        state.token.cancel();
        state.token = CancellationToken::new();
        state.id = SessionId::new();
        state.history.reset();
        state.phase = Phase::Listening;
        info!(session = state.id.short(), "assistant session activated");
        SessionTicket {
            id: state.id.clone(),
            token: state.token.clone(),
        }
    }

    /// End the current activation. Returns false if it was already idle.
    pub fn deactivate(&self) -> bool {
        let mut state = self.lock();
        let was_live = !state.token.is_cancelled();
        state.token.cancel();
        state.phase = Phase::Idle;
        if was_live {
            info!(session = state.id.short(), "assistant session deactivated");
        }
        was_live
    }

    /// End the activation `ticket` belongs to, if it is still the live one,
    /// and run `publish` before the lock is released. Used by the loop itself
    /// when the device fails.
    pub fn end(&self, ticket: &SessionTicket, publish: impl FnOnce()) -> bool {
        let mut state = self.lock();
        if !ticket.is_live() {
            return false;
        }
        state.token.cancel();
        state.phase = Phase::Idle;
        info!(session = state.id.short(), "assistant session ended by loop");
        publish();
        true
    }

    /// Whether an activation is in progress.
    pub fn is_listening(&self) -> bool {
        !self.lock().token.is_cancelled()
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub fn id(&self) -> SessionId {
        self.lock().id.clone()
    }

    /// Move to `phase` if `ticket` is still the live activation.
    pub fn enter(&self, ticket: &SessionTicket, phase: Phase) -> bool {
        self.enter_with(ticket, phase, || {})
    }

    /// Like [`enter`](Self::enter), running `publish` under the lock once the
    /// phase has changed. Whatever `publish` sends is therefore ordered before
    /// anything a concurrent `deactivate` sends afterwards.
    pub fn enter_with(&self, ticket: &SessionTicket, phase: Phase, publish: impl FnOnce()) -> bool {
        let mut state = self.lock();
        if !ticket.is_live() {
            return false;
        }
        debug!(session = ticket.id.short(), from = %state.phase, to = %phase, "phase change");
        state.phase = phase;
        publish();
        true
    }

    /// Run `publish` under the lock if `ticket` is still live.
    pub fn while_live(&self, ticket: &SessionTicket, publish: impl FnOnce()) -> bool {
        let _state = self.lock();
        if !ticket.is_live() {
            return false;
        }
        publish();
        true
    }

    /// Record one exchange if `ticket` is still live, then run `publish`. The
    /// liveness check, the append and `publish` happen under the same lock as
    /// `activate`/`deactivate`, so a stale reply can never land in a newer
    /// conversation or be shown after the session ended.
    pub fn commit_exchange(
        &self,
        ticket: &SessionTicket,
        user: &str,
        reply: &str,
        publish: impl FnOnce(),
    ) -> bool {
        let mut state = self.lock();
        if !ticket.is_live() {
            debug!(session = ticket.id.short(), "dropping stale exchange");
            return false;
        }
        state.history.push_exchange(user, reply);
        publish();
        true
    }

    /// Copy of the history as it would be sent to the endpoint.
    pub fn history(&self) -> Vec<Message> {
        self.lock().history.messages().to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = AssistantSession::new("seed");
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.is_listening());
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn activate_enters_listening_with_live_ticket() {
        let session = AssistantSession::new("seed");
        let ticket = session.activate();
        assert!(ticket.is_live());
        assert!(session.is_listening());
        assert_eq!(session.phase(), Phase::Listening);
    }

    #[test]
    fn activate_resets_history_to_seed() {
        let session = AssistantSession::new("seed");
        let ticket = session.activate();
        for _ in 0..4 {
            assert!(session.commit_exchange(&ticket, "q", "a", || {}));
        }
        assert_eq!(session.history_len(), 9);

        session.deactivate();
        session.activate();
        assert_eq!(session.history(), vec![Message::system("seed")]);
    }

    #[test]
    fn deactivate_kills_ticket() {
        let session = AssistantSession::new("seed");
        let ticket = session.activate();
        assert!(session.deactivate());
        assert!(!ticket.is_live());
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.deactivate());
    }

    #[test]
    fn stale_ticket_cannot_commit() {
        let session = AssistantSession::new("seed");
        let old = session.activate();
        session.deactivate();
        let fresh = session.activate();
        assert!(!session.commit_exchange(&old, "late", "reply", || {}));
        assert_eq!(session.history_len(), 1);
        assert!(session.commit_exchange(&fresh, "help", "On my way", || {}));
        assert_eq!(session.history_len(), 3);
    }

    #[test]
    fn reactivation_supersedes_previous_ticket() {
        let session = AssistantSession::new("seed");
        let first = session.activate();
        let second = session.activate();
        assert!(!first.is_live());
        assert!(second.is_live());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn end_only_affects_its_own_activation() {
        let session = AssistantSession::new("seed");
        let old = session.activate();
        let current = session.activate();
        assert!(!session.end(&old, || {}));
        assert!(session.is_listening());
        assert!(session.end(&current, || {}));
        assert!(!session.is_listening());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn publish_runs_only_for_the_live_activation() {
        let session = AssistantSession::new("seed");
        let ticket = session.activate();
        let mut published = Vec::new();
        assert!(session.enter_with(&ticket, Phase::Processing, || published.push("processing")));
        assert!(session.while_live(&ticket, || published.push("listening")));
        session.deactivate();
        assert!(!session.enter_with(&ticket, Phase::Retrying, || published.push("retrying")));
        assert!(!session.while_live(&ticket, || published.push("late")));
        assert!(!session.commit_exchange(&ticket, "q", "a", || published.push("turn")));
        assert!(!session.end(&ticket, || published.push("mic error")));
        assert_eq!(published, vec!["processing", "listening"]);
    }

    #[test]
    fn stale_ticket_cannot_change_phase() {
        let session = AssistantSession::new("seed");
        let ticket = session.activate();
        assert!(session.enter(&ticket, Phase::Processing));
        session.deactivate();
        assert!(!session.enter(&ticket, Phase::Speaking));
        assert_eq!(session.phase(), Phase::Idle);
    }
}
