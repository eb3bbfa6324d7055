//! Port traits: the boundary between core and browser.
//!
//! Implementations live in `renew-platform`. The core only sees these
//! traits, so tests can swap in instant or failing fakes.

use async_trait::async_trait;
use renew_types::Result;

// ─── Delay Port ──────────────────────────────────────────────

#[async_trait(?Send)]
pub trait DelayPort {
    /// Resolve after `ms` milliseconds without blocking the event loop
    async fn sleep(&self, ms: u64);
}

// ─── Form Port ───────────────────────────────────────────────

#[async_trait(?Send)]
pub trait FormPort {
    /// Post the lead-magnet email to the collection endpoint
    async fn submit_email(&self, email: &str) -> Result<()>;

    /// Where submissions go (for logging/debug)
    fn endpoint(&self) -> &str;
}
