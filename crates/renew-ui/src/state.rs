//! UI-level state that drives rendering.
//! Messages are read straight from the `ChatSession`; this holds what the
//! session doesn't own: the input buffer, the email form, scroll state and
//! the status line, updated each frame by draining the EventBus.

use renew_core::email::EmailCapture;
use renew_core::session::Submission;
use renew_types::content::{COACH_LIVE, COACH_THINKING};
use renew_types::event::CoachEvent;

use crate::nav::{NavTarget, Navigator};

/// Something the user did that the app layer has to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// Send this text to the chat session
    Ask(String),
    /// Submit the email form
    SubmitEmail,
    Navigate(NavTarget),
}

pub struct UiState {
    /// Chat input field content
    pub input_text: String,
    pub email: EmailCapture,
    /// Validation hint shown under the email field
    pub email_error: Option<String>,
    pub nav: Navigator,
    /// Mirrors the session's `AwaitingReply` state
    pub responding: bool,
    pub status_text: String,
}

impl UiState {
    pub fn new(scroll_top_threshold: f32) -> Self {
        Self {
            input_text: String::new(),
            email: EmailCapture::new(),
            email_error: None,
            nav: Navigator::new(scroll_top_threshold),
            responding: false,
            status_text: COACH_LIVE.to_string(),
        }
    }

    pub fn process_events(&mut self, events: Vec<CoachEvent>) {
        for event in events {
            match event {
                CoachEvent::TurnStart { .. } => {
                    self.responding = true;
                    self.status_text = COACH_THINKING.to_string();
                }
                CoachEvent::ReplyDelivered { .. } => {
                    self.responding = false;
                    self.status_text = COACH_LIVE.to_string();
                }
                CoachEvent::ReplyDropped { turn_id } => {
                    log::debug!("Coach turn {} dropped before delivery", turn_id);
                    self.responding = false;
                    self.status_text = COACH_LIVE.to_string();
                }
                CoachEvent::UserMessage { text } => {
                    log::debug!("Chat message sent ({} chars)", text.chars().count());
                }
            }
        }
    }

    /// Clear the input buffer once the session accepted a submission.
    pub fn apply_submission(&mut self, submission: &Submission) {
        if let Submission::Accepted(_) = submission {
            self.input_text.clear();
        }
    }

    /// Whether the chat input currently holds something sendable
    pub fn can_send(&self) -> bool {
        !self.responding && !self.input_text.trim().is_empty()
    }
}
