//! The continuous listen → send → speak loop.
//!
//! [`VoiceLoop`] owns the controller side: activation spawns one task per
//! activation, deactivation cancels its ticket. The task itself lives in
//! `cycle`; everything it reports reaches the UI as [`AssistantEvent`]s.

mod cycle;
mod events;


pub use events::{AssistantEvent, AssistantStatus, LISTENING_GREETING};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinHandle;
use tracing::{info_span, Instrument};

use crate::backend::VoiceBackend;
use crate::device::{AudioPlayer, CaptureDevice};
use crate::session::AssistantSession;

/// Delays between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTiming {
    /// How long each clip records before it is sent.
    pub capture_window: Duration,
    /// Pause after a reply before listening again.
    pub reply_delay: Duration,
    /// Pause after a failed round-trip before listening again.
    pub retry_backoff: Duration,
}

impl Default for LoopTiming {
    fn default() -> Self {
        Self {
            capture_window: Duration::from_millis(5000),
            reply_delay: Duration::from_millis(500),
            retry_backoff: Duration::from_millis(1000),
        }
    }
}

pub(crate) struct LoopContext {
    session: Arc<AssistantSession>,
    device: Arc<dyn CaptureDevice>,
    backend: Arc<dyn VoiceBackend>,
    player: Arc<dyn AudioPlayer>,
    timing: LoopTiming,
    events: mpsc::UnboundedSender<AssistantEvent>,
    /// One permit: at most one open capture across all activations.
    device_lease: Arc<Semaphore>,
}

impl LoopContext {
    fn emit(&self, event: AssistantEvent) {
        // A dropped receiver just means nobody is watching.
        let _ = self.events.send(event);
    }
}

/// Controller for the voice loop.
pub struct VoiceLoop {
    ctx: Arc<LoopContext>,
    task: Option<JoinHandle<()>>,
}

impl VoiceLoop {
    pub fn new(
        session: Arc<AssistantSession>,
        device: Arc<dyn CaptureDevice>,
        backend: Arc<dyn VoiceBackend>,
        player: Arc<dyn AudioPlayer>,
        timing: LoopTiming,
    ) -> (Self, mpsc::UnboundedReceiver<AssistantEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let ctx = Arc::new(LoopContext {
            session,
            device,
            backend,
            player,
            timing,
            events,
            device_lease: Arc::new(Semaphore::new(1)),
        });
        (Self { ctx, task: None }, rx)
    }

    pub fn session(&self) -> &Arc<AssistantSession> {
        &self.ctx.session
    }

    pub fn is_listening(&self) -> bool {
        self.ctx.session.is_listening()
    }

    /// Start a fresh conversation and begin listening. No-op while already
    /// listening.
    pub fn activate(&mut self) {
        if self.ctx.session.is_listening() {
            return;
        }
        let ticket = self.ctx.session.activate();
        self.ctx.emit(AssistantEvent::TranscriptCleared);

        let span = info_span!("assistant", session = %ticket.id().short());
        let ctx = Arc::clone(&self.ctx);
        self.task = Some(tokio::spawn(cycle::run(ctx, ticket).instrument(span)));
    }

    /// Stop listening. Any in-flight capture is released and any reply
    /// still on its way is discarded.
    pub fn deactivate(&mut self) {
        self.ctx.session.deactivate();
        self.ctx.emit(AssistantEvent::Status(AssistantStatus::Inactive));
    }

    /// Flip between listening and idle. Returns the new listening state.
    pub fn toggle(&mut self) -> bool {
        if self.is_listening() {
            self.deactivate();
        } else {
            self.activate();
        }
        self.is_listening()
    }

    /// Wait for the most recent activation's task to finish.
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "voice loop task failed");
            }
        }
    }
}
