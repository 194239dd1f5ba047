//! Tab bar configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use tabpager_strip::TabStripConfig;

use crate::error::CoreError;
use crate::layout::TabBarPosition;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBarConfig {
    /// Where the tab bar sits relative to the pages
    pub position: TabBarPosition,
    /// Button strip appearance and layout
    pub strip: TabStripConfig,
}

impl TabBarConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "Loaded tab bar config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let strip = &self.strip;
        if strip.height.is_nan() || strip.height <= 0.0 {
            return Err(CoreError::Config(format!("height must be positive, got {}", strip.height)));
        }
        if strip.indicator_thickness.is_nan() || strip.indicator_thickness < 0.0 || strip.indicator_thickness > strip.height {
            return Err(CoreError::Config(format!(
                "indicator thickness must be within 0..={}, got {}",
                strip.height, strip.indicator_thickness
            )));
        }
        let multiplier = strip.indicator_width_multiplier;
        if multiplier.is_nan() || multiplier <= 0.0 || multiplier > 1.0 {
            return Err(CoreError::Config(format!(
                "indicator width multiplier must be within (0, 1], got {}",
                multiplier
            )));
        }
        if strip.button_font.size.is_nan() || strip.button_font.size <= 0.0 {
            return Err(CoreError::Config(format!(
                "font size must be positive, got {}",
                strip.button_font.size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabpager_strip::{IndicatorEdge, LayoutMode, SelectionStyle};

    #[test]
    fn test_defaults() {
        let config = TabBarConfig::default();
        assert_eq!(config.position, TabBarPosition::Top);
        assert_eq!(config.strip.layout_mode, LayoutMode::Scrollable);
        assert_eq!(config.strip.selection_style, SelectionStyle::Line);
        assert_eq!(config.strip.height, 44.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = TabBarConfig::from_json(
            r#"{
                "position": "bottom",
                "strip": {
                    "indicator_edge": "top",
                    "indicator_thickness": 2.0,
                    "indicator_color": {"r": 255, "g": 0, "b": 0}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.position, TabBarPosition::Bottom);
        assert_eq!(config.strip.indicator_edge, IndicatorEdge::Top);
        assert_eq!(config.strip.indicator_thickness, 2.0);
        assert_eq!(config.strip.button_font.size, 14.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = TabBarConfig::default();
        config.strip.selection_style = SelectionStyle::HighlightAndLine;
        let json = config.to_json().unwrap();
        assert!(json.contains("highlightAndLine"));
        assert_eq!(TabBarConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let result = TabBarConfig::from_json(r#"{"strip": {"indicator_width_multiplier": 1.5}}"#);
        assert!(matches!(result, Err(CoreError::Config(_))));

        let result = TabBarConfig::from_json(r#"{"strip": {"indicator_thickness": -1.0}}"#);
        assert!(matches!(result, Err(CoreError::Config(_))));

        let result = TabBarConfig::from_json(r#"{"strip": {"height": 0.0}}"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = TabBarConfig::from_json("{ position: ");
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = TabBarConfig::load("/nonexistent/tabpager.json");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
