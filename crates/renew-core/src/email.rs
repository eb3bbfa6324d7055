//! Lead-magnet email capture.
//!
//! The form flips to `Submitted` as soon as a well-formed address is
//! entered; the POST itself is fire-and-forget and its outcome never
//! changes this state.

use renew_types::{CoachError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Editing,
    Submitted,
}

#[derive(Debug, Clone)]
pub struct EmailCapture {
    /// Bound to the email text field
    pub email: String,
    state: CaptureState,
}

impl EmailCapture {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            state: CaptureState::Editing,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == CaptureState::Submitted
    }

    /// Validate and commit the current address.
    ///
    /// Returns the trimmed address for the caller to post.
    pub fn submit(&mut self) -> Result<String> {
        if self.is_submitted() {
            return Err(CoachError::AlreadySubmitted);
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(CoachError::InvalidEmail(email.to_string()));
        }
        let email = email.to_string();
        self.state = CaptureState::Submitted;
        log::info!("Email capture submitted");
        Ok(email)
    }
}

impl Default for EmailCapture {
    fn default() -> Self {
        Self::new()
    }
}

/// Same acceptance as the browser's `type="email"` check: a dot in the
/// domain is not required, so `user@localhost` passes.
pub fn is_valid_email(input: &str) -> bool {
    let input = input.trim();

    let mut parts = input.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty() && local.chars().all(is_local_char) && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
