//! One activation of the voice loop, phase by phase.
//!
//! Every await is a point where the user may have stopped the assistant;
//! each one is followed by a ticket check before anything shared changes.
//! Events are sent while the session lock is held, so none can follow the
//! `Inactive` status of a deactivation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use vigil_common::DeviceError;

use super::events::{AssistantEvent, AssistantStatus};
use super::LoopContext;
use crate::backend::{ReplyOutcome, VoiceReply};
use crate::device::AudioClip;
use crate::session::{Phase, SessionTicket};
use crate::Message;

enum Listen {
    Clip(AudioClip),
    Ended,
    DeviceFailed(DeviceError),
}

/// Drive the loop until the ticket's activation ends.
pub(super) async fn run(ctx: Arc<LoopContext>, ticket: SessionTicket) {
    loop {
        let clip = match listen(&ctx, &ticket).await {
            Listen::Clip(clip) => clip,
            Listen::Ended => break,
            Listen::DeviceFailed(err) => {
                warn!(error = %err, "capture device unavailable");
                ctx.session.end(&ticket, || {
                    ctx.emit(AssistantEvent::DeviceError(err.to_string()));
                    ctx.emit(AssistantEvent::Status(AssistantStatus::MicError));
                });
                break;
            }
        };

        let processing = ctx.session.enter_with(&ticket, Phase::Processing, || {
            ctx.emit(AssistantEvent::Status(AssistantStatus::Processing))
        });
        if !processing {
            break;
        }

        let history = ctx.session.history();
        let result = ctx
            .backend
            .submit(clip, &history)
            .await
            .and_then(VoiceReply::into_outcome);

        if !ticket.is_live() {
            debug!("discarding reply for ended session");
            break;
        }

        match result {
            Ok(ReplyOutcome::Silence) => {
                debug!("no speech detected");
            }
            Ok(ReplyOutcome::Turn {
                user_text,
                reply_text,
                audio,
            }) => {
                if !speak(&ctx, &ticket, user_text, reply_text, audio).await {
                    break;
                }
            }
            Err(err) => {
                warn!(error = %err, "voice round-trip failed, retrying");
                let retrying = ctx.session.enter_with(&ticket, Phase::Retrying, || {
                    ctx.emit(AssistantEvent::Status(AssistantStatus::Retrying))
                });
                if !retrying {
                    break;
                }
                if !pause(&ticket, ctx.timing.retry_backoff).await {
                    break;
                }
            }
        }
    }
    debug!("voice loop finished");
}

/// Hold the device for one capture window.
async fn listen(ctx: &LoopContext, ticket: &SessionTicket) -> Listen {
    // Held until the recording is stopped, so a quick reactivation cannot
    // open the device while this activation still has it.
    let _lease = tokio::select! {
        lease = ctx.device_lease.clone().acquire_owned() => match lease {
            Ok(lease) => lease,
            Err(_) => return Listen::Ended,
        },
        _ = ticket.ended() => return Listen::Ended,
    };

    if !ctx.session.enter(ticket, Phase::Listening) {
        return Listen::Ended;
    }

    let mut capture = match ctx.device.acquire().await {
        Ok(capture) => capture,
        Err(err) => return Listen::DeviceFailed(err),
    };

    let live = ctx.session.while_live(ticket, || {
        ctx.emit(AssistantEvent::Status(AssistantStatus::Listening))
    });
    if !live {
        capture.stop();
        return Listen::Ended;
    }

    let cancelled = tokio::select! {
        _ = tokio::time::sleep(ctx.timing.capture_window) => false,
        _ = capture.ended() => false,
        _ = ticket.ended() => true,
    };

    let clip = capture.stop();
    debug!(bytes = clip.len(), cancelled, "capture stopped");

    if cancelled {
        Listen::Ended
    } else {
        Listen::Clip(clip)
    }
}

/// Record and render one exchange, play its audio, then wait the reply
/// delay. Returns false when the activation ended along the way.
async fn speak(
    ctx: &LoopContext,
    ticket: &SessionTicket,
    user_text: String,
    reply_text: String,
    audio: Option<Vec<u8>>,
) -> bool {
    let committed = ctx.session.commit_exchange(ticket, &user_text, &reply_text, || {
        ctx.emit(AssistantEvent::Turn(Message::user(user_text.clone())));
        ctx.emit(AssistantEvent::Status(AssistantStatus::Thinking));
        ctx.emit(AssistantEvent::Turn(Message::assistant(reply_text.clone())));
    });
    if !committed {
        return false;
    }

    let speaking = ctx.session.enter_with(ticket, Phase::Speaking, || {
        if audio.is_some() {
            ctx.emit(AssistantEvent::Status(AssistantStatus::Speaking));
        }
    });
    if !speaking {
        return false;
    }

    if let Some(audio) = audio {
        if let Err(err) = ctx.player.play(&audio).await {
            warn!(error = %err, "reply playback failed");
        }
        if !ticket.is_live() {
            return false;
        }
    }

    pause(ticket, ctx.timing.reply_delay).await
}

/// Sleep unless the activation ends first.
async fn pause(ticket: &SessionTicket, delay: Duration) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(delay) => ticket.is_live(),
        _ = ticket.ended() => false,
    }
}
