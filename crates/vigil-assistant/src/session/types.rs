//! Session phase and liveness ticket.

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use vigil_common::SessionId;

/// Where the voice loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Listening,
    Processing,
    Speaking,
    Retrying,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Listening => "listening",
            Phase::Processing => "processing",
            Phase::Speaking => "speaking",
            Phase::Retrying => "retrying",
        };
        f.write_str(s)
    }
}

/// Proof of membership in one activation of the session.
#[derive(Debug, Clone)]
pub struct SessionTicket {
    pub(crate) id: SessionId,
    pub(crate) token: CancellationToken,
}

impl SessionTicket {
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// False once the activation this ticket belongs to has ended.
    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Resolves when the activation ends.
    pub async fn ended(&self) {
        self.token.cancelled().await
    }
}
