//! Scheduled delivery of canned replies.
//!
//! `ReplyScheduler::schedule` turns a `PendingReply` into a future that
//! sleeps for the fixed delay and then delivers into the session. The
//! future only holds a `Weak` to the session, so a torn-down view is
//! never written to. Dropping the scheduler cancels every reply it
//! still tracks.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::ports::DelayPort;
use crate::session::{ChatSession, PendingReply};

#[derive(Default)]
struct TokenState {
    cancelled: Cell<bool>,
    finished: Cell<bool>,
}

/// Shared cancellation flag for one scheduled reply: clone-cheap via Rc.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Rc<TokenState>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    pub fn is_finished(&self) -> bool {
        self.inner.finished.get()
    }

    fn finish(&self) {
        self.inner.finished.set(true);
    }

    fn is_live(&self) -> bool {
        !self.is_cancelled() && !self.is_finished()
    }
}

/// How a scheduled reply ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// Reply appended, session back to `Idle`
    Delivered,
    /// Cancelled before delivery; the session (if alive) went back to `Idle`
    Cancelled,
    /// The session was dropped while the delay was running
    SessionGone,
    /// The session was no longer awaiting this turn
    Stale,
}

/// A reply waiting on its delay. Drive it with `run().await`.
pub struct ScheduledReply {
    session: Weak<RefCell<ChatSession>>,
    pending: PendingReply,
    delay: Rc<dyn DelayPort>,
    token: CancelToken,
}

impl ScheduledReply {
    pub fn turn_id(&self) -> u64 {
        self.pending.turn_id
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub async fn run(self) -> ReplyOutcome {
        let ScheduledReply { session, pending, delay, token } = self;
        let turn_id = pending.turn_id;

        delay.sleep(pending.delay_ms).await;
        token.finish();

        let Some(session) = session.upgrade() else {
            log::debug!("Reply for turn {} dropped: session is gone", turn_id);
            return ReplyOutcome::SessionGone;
        };
        let mut session = session.borrow_mut();

        if token.is_cancelled() {
            session.abandon(turn_id);
            return ReplyOutcome::Cancelled;
        }

        if session.deliver(pending) {
            ReplyOutcome::Delivered
        } else {
            ReplyOutcome::Stale
        }
    }
}

/// Tracks outstanding replies so they can be cancelled on teardown.
#[derive(Default)]
pub struct ReplyScheduler {
    tokens: Vec<CancelToken>,
}

impl ReplyScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &mut self,
        session: &Rc<RefCell<ChatSession>>,
        pending: PendingReply,
        delay: Rc<dyn DelayPort>,
    ) -> ScheduledReply {
        self.tokens.retain(CancelToken::is_live);

        let token = CancelToken::new();
        self.tokens.push(token.clone());

        ScheduledReply {
            session: Rc::downgrade(session),
            pending,
            delay,
            token,
        }
    }

    /// Number of replies still waiting on their delay
    pub fn outstanding(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_live()).count()
    }

    pub fn cancel_all(&mut self) {
        let live = self.outstanding();
        for token in self.tokens.drain(..) {
            token.cancel();
        }
        if live > 0 {
            log::info!("Cancelled {} pending coach replies", live);
        }
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
