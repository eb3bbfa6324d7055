//! Chat session: the coach conversation and its responding flag.
//!
//! Two states:
//! 1. `Idle`: a non-blank submission appends the user message and moves to
//!    `AwaitingReply`, handing back a `PendingReply` for the scheduler
//! 2. `AwaitingReply`: submissions are dropped; `deliver` appends the
//!    canned reply and returns to `Idle`
//!
//! The session never sleeps itself. Timing lives in `scheduler`.

use renew_types::{
    config::CoachConfig,
    event::{CoachEvent, IgnoreReason},
    message::Message,
    reply::ReplyKind,
};
use crate::event_bus::EventBus;
use crate::selector::ResponseSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReply { turn_id: u64 },
}

/// Result of `ChatSession::submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(PendingReply),
    Ignored(IgnoreReason),
}

/// A reply that has been selected but not yet delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub turn_id: u64,
    pub kind: ReplyKind,
    pub delay_ms: u64,
}

pub struct ChatSession {
    id: String,
    config: CoachConfig,
    messages: Vec<Message>,
    state: SessionState,
    selector: ResponseSelector,
    event_bus: EventBus,
    turn_counter: u64,
}

impl ChatSession {
    pub fn new(config: CoachConfig, event_bus: EventBus) -> Self {
        Self::with_selector(config, event_bus, ResponseSelector::new())
    }

    pub fn with_selector(
        config: CoachConfig,
        event_bus: EventBus,
        selector: ResponseSelector,
    ) -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        let messages = vec![Message::assistant_text(&config.greeting)];
        log::info!("Coach session {} started", id);

        Self {
            id,
            config,
            messages,
            state: SessionState::Idle,
            selector,
            event_bus,
            turn_counter: 0,
        }
    }

    /// Accept or drop a user submission.
    ///
    /// Blank input and input arriving while a reply is pending leave the
    /// session untouched.
    pub fn submit(&mut self, input: &str) -> Submission {
        if input.trim().is_empty() {
            return self.ignore(IgnoreReason::Blank);
        }
        if self.is_responding() {
            return self.ignore(IgnoreReason::Busy);
        }

        self.turn_counter += 1;
        let turn_id = self.turn_counter;
        let kind = self.selector.select(input);

        self.messages.push(Message::user(input));
        self.state = SessionState::AwaitingReply { turn_id };

        self.event_bus.emit(CoachEvent::TurnStart { turn_id });
        self.event_bus.emit(CoachEvent::UserMessage { text: input.to_string() });
        log::debug!("Session {} turn {} selected {}", self.id, turn_id, kind.label());

        Submission::Accepted(PendingReply {
            turn_id,
            kind,
            delay_ms: self.config.reply_delay_ms,
        })
    }

    fn ignore(&self, reason: IgnoreReason) -> Submission {
        log::debug!("Session {} ignored submission: {:?}", self.id, reason);
        Submission::Ignored(reason)
    }

    /// Append the reply for `pending` and go back to `Idle`.
    ///
    /// Returns false (and changes nothing) unless the session is awaiting
    /// exactly this turn.
    pub fn deliver(&mut self, pending: PendingReply) -> bool {
        if self.state != (SessionState::AwaitingReply { turn_id: pending.turn_id }) {
            log::debug!(
                "Session {} dropped stale reply for turn {}",
                self.id,
                pending.turn_id
            );
            return false;
        }

        self.messages.push(Message::assistant(pending.kind.payload()));
        self.state = SessionState::Idle;
        self.event_bus.emit(CoachEvent::ReplyDelivered {
            turn_id: pending.turn_id,
            kind: pending.kind,
        });
        true
    }

    /// Return to `Idle` without a reply, after the scheduled reply for
    /// `turn_id` was cancelled.
    pub fn abandon(&mut self, turn_id: u64) -> bool {
        if self.state != (SessionState::AwaitingReply { turn_id }) {
            return false;
        }
        self.state = SessionState::Idle;
        self.event_bus.emit(CoachEvent::ReplyDropped { turn_id });
        log::info!("Session {} abandoned turn {}", self.id, turn_id);
        true
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_responding(&self) -> bool {
        matches!(self.state, SessionState::AwaitingReply { .. })
    }

    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }
}
