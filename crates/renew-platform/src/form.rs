//! Email form adapters.
//!
//! `FormspreeAdapter` posts the lead-magnet address the same way the
//! plain HTML form would: urlencoded body, single `email` field.
//! Uses browser `fetch()` via gloo-net.

use std::cell::RefCell;

use async_trait::async_trait;
use gloo_net::http::Request;

use renew_core::ports::FormPort;
use renew_types::{CoachError, Result};

pub struct FormspreeAdapter {
    endpoint: String,
}

impl FormspreeAdapter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

/// Build the `application/x-www-form-urlencoded` body for one address.
pub fn encode_email_body(email: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(email).into();
    format!("email={}", encoded)
}

#[async_trait(?Send)]
impl FormPort for FormspreeAdapter {
    async fn submit_email(&self, email: &str) -> Result<()> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(encode_email_body(email))
            .map_err(|e| CoachError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| CoachError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(CoachError::Network(format!("HTTP {}: {}", status, text)));
        }

        log::info!("Email captured via {}", self.endpoint);
        Ok(())
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Form sink that records addresses instead of posting them.
#[derive(Default)]
pub struct NullForm {
    submitted: RefCell<Vec<String>>,
}

impl NullForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Vec<String> {
        self.submitted.borrow().clone()
    }
}

#[async_trait(?Send)]
impl FormPort for NullForm {
    async fn submit_email(&self, email: &str) -> Result<()> {
        self.submitted.borrow_mut().push(email.to_string());
        Ok(())
    }

    fn endpoint(&self) -> &str {
        "null"
    }
}
