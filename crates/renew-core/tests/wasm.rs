//! WASM-target tests for renew-core.
//!
//! Runs ResponseSelector, ChatSession and ReplyScheduler tests
//! under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use renew_core::event_bus::EventBus;
use renew_core::ports::DelayPort;
use renew_core::scheduler::{ReplyOutcome, ReplyScheduler};
use renew_core::selector::ResponseSelector;
use renew_core::session::{ChatSession, SessionState, Submission};
use renew_types::config::CoachConfig;
use renew_types::event::IgnoreReason;
use renew_types::message::Role;
use renew_types::reply::ReplyKind;

use std::cell::RefCell;
use std::rc::Rc;
use async_trait::async_trait;

struct InstantDelay;

#[async_trait(?Send)]
impl DelayPort for InstantDelay {
    async fn sleep(&self, _ms: u64) {}
}

fn shared_session() -> Rc<RefCell<ChatSession>> {
    Rc::new(RefCell::new(ChatSession::new(CoachConfig::default(), EventBus::new())))
}

// ─── Selector Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn selector_precedence() {
    let selector = ResponseSelector::new();
    assert_eq!(selector.select("Regional Manager to Agile Product Owner?"), ReplyKind::CareerPivot);
    assert_eq!(selector.select("How do I explain a 2-year gap?"), ReplyKind::EmploymentGap);
    assert_eq!(selector.select("tell me more"), ReplyKind::Encouragement);
}

// ─── Session Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn session_starts_idle_with_greeting() {
    let session = ChatSession::new(CoachConfig::default(), EventBus::new());
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::Assistant);
    assert_eq!(session.state(), SessionState::Idle);
}

#[wasm_bindgen_test]
fn session_whitespace_is_noop() {
    let mut session = ChatSession::new(CoachConfig::default(), EventBus::new());
    assert_eq!(session.submit("   "), Submission::Ignored(IgnoreReason::Blank));
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.state(), SessionState::Idle);
}

// ─── Scheduler Tests ─────────────────────────────────────

#[wasm_bindgen_test]
async fn scheduled_gap_reply() {
    let session = shared_session();
    let mut scheduler = ReplyScheduler::new();

    let Submission::Accepted(pending) = session.borrow_mut().submit("I have a 2-year gap in my resume") else {
        panic!("submission should be accepted");
    };
    let reply = scheduler.schedule(&session, pending, Rc::new(InstantDelay));
    assert_eq!(reply.run().await, ReplyOutcome::Delivered);

    let session = session.borrow();
    assert_eq!(session.messages().len(), 3);
    assert!(session.messages()[2].content.contains("Strategic Sabbatical"));
}

#[wasm_bindgen_test]
async fn second_submission_dropped_while_awaiting() {
    let session = shared_session();
    let mut scheduler = ReplyScheduler::new();

    let first = session.borrow_mut().submit("agile");
    let second = session.borrow_mut().submit("gap");
    assert_eq!(second, Submission::Ignored(IgnoreReason::Busy));

    let Submission::Accepted(pending) = first else {
        panic!("first submission should be accepted");
    };
    let reply = scheduler.schedule(&session, pending, Rc::new(InstantDelay));
    assert_eq!(reply.run().await, ReplyOutcome::Delivered);
    assert_eq!(session.borrow().messages().len(), 3);
}

#[wasm_bindgen_test]
async fn reply_for_dropped_session_is_discarded() {
    let session = shared_session();
    let mut scheduler = ReplyScheduler::new();
    let Submission::Accepted(pending) = session.borrow_mut().submit("agile") else {
        panic!("submission should be accepted");
    };
    let reply = scheduler.schedule(&session, pending, Rc::new(InstantDelay));
    drop(session);
    assert_eq!(reply.run().await, ReplyOutcome::SessionGone);
}
