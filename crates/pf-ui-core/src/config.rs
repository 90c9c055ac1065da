//! Site configuration.
//!
//! The page may embed a `<script type="application/json" id="site-config">`
//! block to override timings and labels. Every field has a default, so an
//! empty object (or no block at all) yields the stock behaviour.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Height of the sticky nav, subtracted from anchor scroll targets.
    pub nav_offset_px: f64,
    pub reveal_delay_ms: u32,
    pub hide_delay_ms: u32,
    pub submit_delay_ms: u32,
    pub toast_lifetime_ms: u32,
    pub toast_exit_ms: u32,
    pub scroll_debounce_ms: u32,
    pub labels: Labels,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_offset_px: 80.0,
            reveal_delay_ms: 10,
            hide_delay_ms: 200,
            submit_delay_ms: 1_000,
            toast_lifetime_ms: 5_000,
            toast_exit_ms: 300,
            scroll_debounce_ms: 10,
            labels: Labels::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub view_details: String,
    pub show_less: String,
    pub send: String,
    pub sending: String,
    pub success_title: String,
    pub success_body: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            view_details: "View Details".to_owned(),
            show_less: "Show Less".to_owned(),
            send: "Send Message".to_owned(),
            sending: "Sending...".to_owned(),
            success_title: "Message sent!".to_owned(),
            success_body: "Thank you for your message. I'll get back to you soon.".to_owned(),
        }
    }
}

impl Labels {
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("viewDetails", self.view_details.as_str()),
            ("showLess", self.show_less.as_str()),
            ("send", self.send.as_str()),
            ("sending", self.sending.as_str()),
            ("successTitle", self.success_title.as_str()),
            ("successBody", self.success_body.as_str()),
        ]
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.nav_offset_px.is_finite() || self.nav_offset_px < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "navOffsetPx must be a non-negative number, got {}",
                self.nav_offset_px
            )));
        }
        for (name, value) in self.labels.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("label `{name}` is empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.nav_offset_px, 80.0);
        assert_eq!(config.toast_lifetime_ms, 5_000);
        assert_eq!(config.labels.sending, "Sending...");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{"toastLifetimeMs": 2000, "labels": {"send": "Send it"}}"#,
        )
        .unwrap();
        assert_eq!(config.toast_lifetime_ms, 2_000);
        assert_eq!(config.hide_delay_ms, 200);
        assert_eq!(config.labels.send, "Send it");
        assert_eq!(config.labels.show_less, "Show Less");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn negative_nav_offset_is_rejected() {
        let err = SiteConfig::from_json(r#"{"navOffsetPx": -4}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("navOffsetPx")));
    }

    #[test]
    fn blank_label_is_rejected() {
        let err = SiteConfig::from_json(r#"{"labels": {"sending": "  "}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("sending")));
    }
}
