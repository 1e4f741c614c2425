//! Configuration for the Translator

use crate::prompt::{DEFAULT_CONTEXT_TEMPLATE, DEFAULT_SYSTEM_TEMPLATE, INPUT_SLOT, SCHEMA_SLOT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed baseline chat model used when the caller does not pick one
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Configuration for the Translator
///
/// Constructed once and held immutably by the translator; runtime overrides
/// are explicit arguments on the operations that accept them rather than
/// mutations of shared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Model identifier sent with every request
    pub model: String,

    /// Sampling temperature sent with every request
    pub temperature: f32,

    /// Maximum requests admitted per rolling window
    pub max_requests_per_window: usize,

    /// Rolling window length (milliseconds)
    pub window_ms: u64,

    /// Safety margin added to the window to absorb clock and network
    /// jitter (milliseconds)
    pub window_margin_ms: u64,

    /// System instruction template; `{schema}` is replaced with the
    /// pretty-printed schema
    pub system_template: String,

    /// Context wrap template; `{input}` is replaced with the caller's text
    pub context_template: String,

    /// Salvage JSON from fenced or prose-wrapped replies before parsing.
    /// Off by default; opt in deliberately.
    pub lenient_json: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 1.0,
            max_requests_per_window: 3,
            window_ms: 60_000,
            window_margin_ms: 200,
            system_template: DEFAULT_SYSTEM_TEMPLATE.to_string(),
            context_template: DEFAULT_CONTEXT_TEMPLATE.to_string(),
            lenient_json: false,
        }
    }
}

impl TranslatorConfig {
    /// Rolling window including the safety margin
    pub fn effective_window(&self) -> Duration {
        Duration::from_millis(self.window_ms + self.window_margin_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.max_requests_per_window == 0 {
            return Err("max_requests_per_window must be greater than 0".to_string());
        }
        if self.window_ms == 0 {
            return Err("window_ms must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature {} out of range [0.0, 2.0]",
                self.temperature
            ));
        }
        if !self.system_template.contains(SCHEMA_SLOT) {
            return Err(format!("system_template must contain {}", SCHEMA_SLOT));
        }
        if !self.context_template.contains(INPUT_SLOT) {
            return Err(format!("context_template must contain {}", INPUT_SLOT));
        }
        Ok(())
    }

    /// Replace the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Replace the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Replace the rolling-window quota
    pub fn with_quota(mut self, max_requests: usize, window: Duration) -> Self {
        self.max_requests_per_window = max_requests;
        self.window_ms = window.as_millis() as u64;
        self
    }

    /// Replace the safety margin added to the rolling window
    pub fn with_window_margin(mut self, margin: Duration) -> Self {
        self.window_margin_ms = margin.as_millis() as u64;
        self
    }

    /// Replace the system instruction template
    pub fn with_system_template(mut self, template: impl Into<String>) -> Self {
        self.system_template = template.into();
        self
    }

    /// Opt into lenient JSON salvage
    pub fn with_lenient_json(mut self) -> Self {
        self.lenient_json = true;
        self
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TranslatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_requests_per_window, 3);
        assert_eq!(config.window_ms, 60_000);
        assert!(!config.lenient_json);
    }

    #[test]
    fn test_effective_window_includes_margin() {
        let config = TranslatorConfig::default();
        assert_eq!(config.effective_window(), Duration::from_millis(60_200));
    }

    #[test]
    fn test_invalid_quota() {
        let config = TranslatorConfig::default().with_quota(0, Duration::from_secs(60));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_temperature() {
        let config = TranslatorConfig::default().with_temperature(3.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_system_template_must_keep_schema_slot() {
        let config = TranslatorConfig::default().with_system_template("no slot here");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = TranslatorConfig::default()
            .with_model("other-model")
            .with_temperature(0.2)
            .with_quota(5, Duration::from_secs(10))
            .with_lenient_json();

        assert_eq!(config.model, "other-model");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_requests_per_window, 5);
        assert_eq!(config.window_ms, 10_000);
        assert!(config.lenient_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = TranslatorConfig::default().with_model("round-trip-model");
        let toml_str = config.to_toml().unwrap();
        let parsed = TranslatorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(parsed.model, "round-trip-model");
        assert_eq!(parsed.max_requests_per_window, config.max_requests_per_window);
        assert_eq!(parsed.window_ms, config.window_ms);
        assert_eq!(parsed.system_template, config.system_template);
    }
}
