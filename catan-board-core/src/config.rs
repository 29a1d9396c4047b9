//! Rendering configuration
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pan and zoom supplied by the viewport controller
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Horizontal pan in pixels
    pub trans_x: f64,
    /// Vertical pan in pixels
    pub trans_y: f64,
    /// Pixels per hex unit
    pub scale: f64,
}

impl Viewport {
    pub fn new(trans_x: f64, trans_y: f64, scale: f64) -> Self {
        Self { trans_x, trans_y, scale }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            trans_x: 0.0,
            trans_y: 0.0,
            scale: 100.0,
        }
    }
}

/// Size ratios of every drawn element, relative to the viewport scale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Hexagon footprint
    pub tile_scale: f64,
    /// Font size of the dice number
    pub number_scale: f64,
    /// Diameter of the number badge
    pub number_circle_scale: f64,
    /// Diameter of one pip
    pub dot_scale: f64,
    /// Diameter of the port badge
    pub port_scale: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_scale: 0.95,
            number_scale: 0.175,
            number_circle_scale: 0.3,
            dot_scale: 0.025,
            port_scale: 0.55,
        }
    }
}

impl RenderConfig {
    /// Load from JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"portScale": 0.6}"#).unwrap();
        assert_eq!(config.port_scale, 0.6);
        assert_eq!(config.tile_scale, 0.95);
        assert_eq!(config.number_circle_scale, 0.3);
    }

    #[test]
    fn test_viewport_wire_names() {
        let vp: Viewport =
            serde_json::from_str(r#"{"transX": 5.0, "transY": -2.0, "scale": 40.0}"#).unwrap();
        assert_eq!(vp, Viewport::new(5.0, -2.0, 40.0));
    }
}
