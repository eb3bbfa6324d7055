//! WASM-target tests for renew-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use renew_types::message::*;
use renew_types::event::*;
use renew_types::reply::*;
use renew_types::content::*;
use renew_types::config::*;
use renew_types::error::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content.plain_text(), "Hello");
}

#[wasm_bindgen_test]
fn message_timestamp_uses_wasm_clock() {
    let msg = Message::assistant_text("hi");
    assert!(chrono::DateTime::parse_from_rfc3339(&msg.created_at).is_ok());
}

#[wasm_bindgen_test]
fn rich_plain_text() {
    let content = MessageContent::Rich(vec![
        RichBlock::paragraph(vec![Span::accent("A"), Span::italic("b")]),
        RichBlock::call_to_action("C"),
    ]);
    assert_eq!(content.plain_text(), "Ab\nC");
}

// ─── Reply Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn reply_payloads_carry_key_phrases() {
    assert!(ReplyKind::CareerPivot.payload().contains("Scale Management"));
    assert!(ReplyKind::EmploymentGap.payload().contains("Strategic Sabbatical"));
    assert!(ReplyKind::Encouragement.payload().contains("hidden giants"));
}

// ─── Event Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn coach_event_serialization() {
    let event = CoachEvent::ReplyDelivered { turn_id: 3, kind: ReplyKind::EmploymentGap };
    let json = serde_json::to_string(&event).unwrap();
    let back: CoachEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

// ─── Content / Config Tests ──────────────────────────────

#[wasm_bindgen_test]
fn pricing_has_one_highlighted_tier() {
    let tiers = pricing_tiers();
    assert_eq!(tiers.iter().filter(|t| t.highlighted).count(), 1);
    assert_eq!(tiers[1].name, "Founding Member");
}

#[wasm_bindgen_test]
fn config_defaults() {
    let config = CoachConfig::default();
    assert_eq!(config.reply_delay_ms, DEFAULT_REPLY_DELAY_MS);
    assert_eq!(config.hero_image_url, DEFAULT_HERO_IMAGE_URL);
}

#[wasm_bindgen_test]
fn config_error_display() {
    let err = CoachConfig::from_json("[]").unwrap_err();
    assert!(matches!(err, CoachError::Serialization(_)));
}
