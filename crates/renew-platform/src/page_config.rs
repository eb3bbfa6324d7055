//! Page configuration read from the host document.
//!
//! `index.html` may embed
//! `<script id="renew_config" type="application/json">{ ... }</script>`;
//! any key it sets overrides the matching `CoachConfig` default.

use renew_types::{config::CoachConfig, CoachError, Result};

pub const CONFIG_ELEMENT_ID: &str = "renew_config";

/// Load the config override, falling back to defaults on any problem.
pub fn load_page_config() -> CoachConfig {
    match read_page_config() {
        Ok(Some(config)) => {
            log::info!("Page config loaded from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Ok(None) => CoachConfig::default(),
        Err(e) => {
            log::warn!("Ignoring page config: {}", e);
            CoachConfig::default()
        }
    }
}

fn read_page_config() -> Result<Option<CoachConfig>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CoachError::JsInterop("No document".to_string()))?;

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };

    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(None);
    }

    CoachConfig::from_json(&text).map(Some)
}
