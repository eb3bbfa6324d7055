//! WASM-target tests for renew-platform (Node.js runtime).
//!
//! Covers the delay adapters, the form body encoding and the NullForm
//! sink under wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! FormspreeAdapter needs a live endpoint and is not exercised here.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use renew_core::event_bus::EventBus;
use renew_core::ports::{DelayPort, FormPort};
use renew_core::scheduler::{ReplyOutcome, ReplyScheduler};
use renew_core::session::{ChatSession, Submission};
use renew_platform::form::encode_email_body;
use renew_platform::{load_page_config, GlooDelay, InstantDelay, NullForm};
use renew_types::config::CoachConfig;
use std::cell::RefCell;
use std::rc::Rc;

// ─── Delay Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
async fn instant_delay_resolves() {
    InstantDelay.sleep(1200).await;
}

#[wasm_bindgen_test]
async fn gloo_delay_resolves() {
    GlooDelay::new().sleep(5).await;
}

#[wasm_bindgen_test]
async fn gloo_delay_drives_scheduled_reply() {
    let config = CoachConfig { reply_delay_ms: 5, ..CoachConfig::default() };
    let session = Rc::new(RefCell::new(ChatSession::new(config, EventBus::new())));
    let mut scheduler = ReplyScheduler::new();

    let Submission::Accepted(pending) = session.borrow_mut().submit("agile") else {
        panic!("submission should be accepted");
    };
    let reply = scheduler.schedule(&session, pending, Rc::new(GlooDelay::new()));
    assert_eq!(reply.run().await, ReplyOutcome::Delivered);
    assert!(session.borrow().messages()[2].content.contains("Scale Management"));
}

// ─── Form Tests ──────────────────────────────────────────

#[wasm_bindgen_test]
fn email_body_is_urlencoded() {
    assert_eq!(encode_email_body("a+b@c.co"), "email=a%2Bb%40c.co");
}

#[wasm_bindgen_test]
async fn null_form_records_submissions() {
    let form = NullForm::new();
    form.submit_email("me@example.com").await.unwrap();
    assert_eq!(form.submitted(), vec!["me@example.com".to_string()]);
    assert_eq!(form.endpoint(), "null");
}

// ─── Page Config Tests ───────────────────────────────────

#[wasm_bindgen_test]
fn page_config_defaults_without_document() {
    // Node has no window/document
    assert_eq!(load_page_config(), CoachConfig::default());
}
