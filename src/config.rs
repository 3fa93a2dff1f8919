use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Knobs for the layered layout. Every field is optional in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Vertical distance between consecutive layers.
    pub layer_spacing: f32,
    /// Horizontal gap between neighbouring nodes of one layer.
    pub node_spacing: f32,
    /// Barycenter sweeps run by crossing minimization.
    pub order_passes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layer_spacing: 140.0,
            node_spacing: 60.0,
            order_passes: 4,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("layerSpacing", self.layer_spacing),
            ("nodeSpacing", self.node_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{name} must be a finite, non-negative number (got {value})");
            }
        }
        Ok(())
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };

    let contents = std::fs::read_to_string(path)?;
    let config: LayoutConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{"nodeSpacing": 24}"#).unwrap();
        assert_eq!(config.node_spacing, 24.0);
        assert_eq!(config.layer_spacing, 140.0);
        assert_eq!(config.order_passes, 4);
    }

    #[test]
    fn rejects_negative_spacing() {
        let config = LayoutConfig {
            layer_spacing: -1.0,
            ..LayoutConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("layerSpacing"));
    }

    #[test]
    fn rejects_non_finite_spacing() {
        let config = LayoutConfig {
            node_spacing: f32::NAN,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_path_yields_defaults() {
        assert_eq!(load_config(None).unwrap(), LayoutConfig::default());
    }
}
