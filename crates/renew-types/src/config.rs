use serde::{Deserialize, Serialize};

use crate::Result;

/// Top-level page configuration.
///
/// Every field has a default, so a partial JSON override only needs the
/// keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Fixed "thinking" delay before a canned reply lands
    pub reply_delay_ms: u64,
    /// Seeded assistant greeting
    pub greeting: String,
    /// Third-party endpoint receiving the lead-magnet email form
    pub form_endpoint: String,
    /// Decorative hero photo
    pub hero_image_url: String,
    /// Page offset after which the scroll-to-top button shows
    pub scroll_top_threshold: f32,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            greeting: DEFAULT_GREETING.to_string(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            hero_image_url: DEFAULT_HERO_IMAGE_URL.to_string(),
            scroll_top_threshold: 400.0,
        }
    }
}

impl CoachConfig {
    /// Parse a JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CoachConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.form_endpoint.trim().is_empty() {
            return Err(crate::CoachError::Config(
                "form_endpoint must not be empty".to_string(),
            ));
        }
        if !self.scroll_top_threshold.is_finite() || self.scroll_top_threshold < 0.0 {
            return Err(crate::CoachError::Config(format!(
                "scroll_top_threshold must be a non-negative number, got {}",
                self.scroll_top_threshold
            )));
        }
        Ok(())
    }
}

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1200;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xgvgggzq";

pub const DEFAULT_HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?auto=format&fit=crop&q=80&w=1200";

const DEFAULT_GREETING: &str = "Hello! I'm your Renew AI Coach. Tell me about your background. \
For example: 'I have 25 years in regional management and want to pivot to a remote tech role.'";
