//! Runtime configuration
//!
//! Every field has a default matching the shipped page, so an empty JSON
//! object (or no config at all) yields the standard behaviour.

use serde::Deserialize;
use std::path::PathBuf;

/// Tunables for loading, interaction and reveal behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Origin the `data/*.json` paths are resolved against.
    pub data_dir: PathBuf,

    /// Scroll offset (px) past which the navbar gets its shadow.
    pub scroll_shadow_threshold_px: f64,

    /// Minimum visible fraction for a reveal target to count as intersecting.
    pub reveal_threshold: f64,

    /// Bottom root margin in px; negative shrinks the viewport.
    pub reveal_bottom_margin_px: f64,

    /// Per-item transition delay step in seconds.
    pub stagger_step_secs: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            scroll_shadow_threshold_px: 50.0,
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: -100.0,
            stagger_step_secs: 0.1,
        }
    }
}

impl SiteConfig {
    /// Overlay `PORTFOLIO_DATA_DIR` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = std::env::var("PORTFOLIO_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    /// Parse a JSON config document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.scroll_shadow_threshold_px, 50.0);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{"dataDir": "/srv/site", "staggerStepSecs": 0.25}"#).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.stagger_step_secs, 0.25);
        assert_eq!(config.reveal_threshold, 0.1);
    }
}
