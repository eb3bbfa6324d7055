//! Delay adapters.
//! `GlooDelay` rides the browser's `setTimeout`; `InstantDelay` resolves
//! on the next poll and is meant for headless runs and tests.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use renew_core::ports::DelayPort;

pub struct GlooDelay;

impl GlooDelay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GlooDelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl DelayPort for GlooDelay {
    async fn sleep(&self, ms: u64) {
        // setTimeout takes a 32-bit delay
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        TimeoutFuture::new(ms).await;
    }
}

#[derive(Default)]
pub struct InstantDelay;

#[async_trait(?Send)]
impl DelayPort for InstantDelay {
    async fn sleep(&self, ms: u64) {
        log::trace!("InstantDelay skipping {}ms", ms);
        futures::future::ready(()).await;
    }
}
