use serde::{Deserialize, Serialize};

use crate::reply::ReplyKind;

/// Events emitted by the chat session.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CoachEvent {
    /// A submission was accepted and the coach started "thinking"
    TurnStart { turn_id: u64 },

    /// The user's message was appended
    UserMessage { text: String },

    /// The canned reply for a turn was appended
    ReplyDelivered { turn_id: u64, kind: ReplyKind },

    /// A scheduled reply was cancelled before it could be delivered
    ReplyDropped { turn_id: u64 },
}

/// Why a chat submission was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Empty or whitespace-only input
    Blank,
    /// A reply is still pending
    Busy,
}
