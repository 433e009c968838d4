//! Behavior configuration
//!
//! Timings and limits can be overridden per page with a JSON block:
//!
//! ```html
//! <script type="application/json" id="page-behaviors-config">
//!   { "alert_dismiss_ms": 8000, "log_level": "debug" }
//! </script>
//! ```
//!
//! Every field is optional; missing fields keep their defaults.

use serde::Deserialize;
use web_sys::Document;

use crate::error::{BehaviorError, Result};

/// Id of the optional JSON configuration element
pub const CONFIG_ELEMENT_ID: &str = "page-behaviors-config";

/// Tunable timings and limits for page behaviors
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// `tracing` filter directive (e.g. `info`, `pathway_ui=debug`)
    pub log_level: String,
    /// Animation delay added per card, in seconds
    pub fade_step_secs: f64,
    /// Delay before an alert starts fading, in milliseconds
    pub alert_dismiss_ms: u32,
    /// Fade duration before the alert is removed, in milliseconds
    pub alert_fade_ms: u32,
    /// Duration of the success pulse class, in milliseconds
    pub success_pulse_ms: u32,
    /// Maximum message length shown by the character counter
    pub message_limit: usize,
    /// Remaining count below which the counter turns to the warning color
    pub message_warning_threshold: usize,
    /// Minimum accepted password length on registration
    pub min_password_length: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            fade_step_secs: 0.1,
            alert_dismiss_ms: 5000,
            alert_fade_ms: 300,
            success_pulse_ms: 1000,
            message_limit: 1000,
            message_warning_threshold: 100,
            min_password_length: 8,
        }
    }
}

impl BehaviorConfig {
    /// Parses a configuration block
    ///
    /// # Errors
    ///
    /// Returns `BehaviorError::Config` if the JSON is malformed or contains
    /// unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BehaviorError::Config(e.to_string()))
    }

    /// Loads configuration from the page
    ///
    /// An absent or empty configuration element yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `BehaviorError::Config` if the element holds malformed JSON.
    /// Callers are expected to fall back to `BehaviorConfig::default()` so a
    /// typo in markup never disables the page.
    pub fn from_document(document: &Document) -> Result<Self> {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Ok(Self::default());
        };

        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_json(&text)
    }

    /// Alert dismissal timing derived from this configuration
    #[must_use]
    pub const fn dismiss_schedule(&self) -> crate::behaviors::alerts::DismissSchedule {
        crate::behaviors::alerts::DismissSchedule::new(self.alert_dismiss_ms, self.alert_fade_ms)
    }
}
