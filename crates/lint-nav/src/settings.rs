//! User settings consumed by the navigation commands.
//!
//! Settings live in the host's settings store; hosts hand them over as JSON. Unknown keys are
//! ignored so the same settings object can carry options for other parts of the linter.

use serde::Deserialize;
use thiserror::Error;

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings document is not valid JSON for [`LintSettings`].
    #[error("invalid lint settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options that control lint navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LintSettings {
    /// If `true`, "next"/"previous" wrap around to the first/last error.
    pub wrap_find: bool,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self { wrap_find: true }
    }
}

impl LintSettings {
    /// Parse settings from a JSON object. Missing keys take their default.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse settings from an already-decoded JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, SettingsError> {
        Ok(serde_json::from_value(value)?)
    }
}
