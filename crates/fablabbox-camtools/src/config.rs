//! Box requests: what to generate, loaded from and saved to JSON or TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::tabbed_box::{BoxConfiguration, BoxVariant, Point2D};

/// One box-generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxRequest {
    /// Prefix of every shape identifier.
    pub prefix: String,
    pub variant: BoxVariant,
    /// Sheet position of the layout origin.
    pub origin: Point2D,
    #[serde(rename = "box")]
    pub config: BoxConfiguration,
}

impl Default for BoxRequest {
    fn default() -> Self {
        Self {
            prefix: "box".to_string(),
            variant: BoxVariant::Open,
            origin: Point2D::ZERO,
            config: BoxConfiguration::default(),
        }
    }
}

impl BoxRequest {
    /// Check dimensions and offsets before any geometry is built.
    pub fn validate(&self) -> ConfigResult<()> {
        let c = &self.config;

        for (name, value) in [
            ("width", c.width),
            ("depth", c.depth),
            ("height", c.height),
            ("thickness", c.thickness),
            ("tab_width", c.tab_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDimensions(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..c.thickness).contains(&c.backlash) {
            return Err(out_of_range("backlash", c.backlash, 0.0, c.thickness));
        }

        if !(0.0..c.height).contains(&c.layer_offset) {
            return Err(out_of_range("layer_offset", c.layer_offset, 0.0, c.height));
        }

        // A divider is t thick and must clear the t-deep corner joints.
        let margin = 1.5 * c.thickness;
        for (name, offsets, span) in [
            ("divider_offsets.horizontal", &c.divider_offsets.horizontal, c.depth),
            ("divider_offsets.vertical", &c.divider_offsets.vertical, c.width),
        ] {
            for &offset in offsets {
                if !(margin..=span - margin).contains(&offset) {
                    return Err(out_of_range(name, offset, margin, span - margin));
                }
            }
        }

        Ok(())
    }

    /// Load a request from a `.json` or `.toml` file.
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let request: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        };

        request.validate()?;
        Ok(request)
    }

    /// Save a request to a `.json` or `.toml` file.
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        };

        std::fs::write(path, content)?;
        Ok(())
    }
}

fn out_of_range(name: &str, value: f32, min: f32, max: f32) -> ConfigError {
    ConfigError::OutOfRange {
        name: name.to_string(),
        value,
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_is_valid() {
        assert!(BoxRequest::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let mut request = BoxRequest::default();
        request.config.depth = 0.0;
        assert!(matches!(
            request.validate(),
            Err(ConfigError::InvalidDimensions(_))
        ));

        let mut request = BoxRequest::default();
        request.config.tab_width = -2.0;
        assert!(matches!(
            request.validate(),
            Err(ConfigError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_offsets() {
        let mut request = BoxRequest::default();
        request.config.layer_offset = request.config.height;
        assert!(matches!(
            request.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));

        let mut request = BoxRequest::default();
        request.config.divider_offsets.vertical = vec![request.config.width + 1.0];
        assert!(matches!(
            request.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));

        // Measured from the outer face: 3 mm material leaves 4.5..75.5 mm
        // of an 80 mm depth.
        let mut request = BoxRequest::default();
        request.config.divider_offsets.horizontal = vec![4.5, 40.0, 75.5];
        assert!(request.validate().is_ok());
        request.config.divider_offsets.horizontal = vec![79.0];
        assert!(matches!(
            request.validate(),
            Err(ConfigError::OutOfRange { min, max, .. }) if min == 4.5 && max == 75.5
        ));
        request.config.divider_offsets.horizontal = vec![2.0];
        assert!(request.validate().is_err());

        let mut request = BoxRequest::default();
        request.config.backlash = -0.1;
        assert!(matches!(
            request.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "prefix": "tray",
            "variant": "open-stackable",
            "box": { "width": 150.0, "divider_offsets": { "vertical": [75.0] } }
        }"#;
        let request: BoxRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.prefix, "tray");
        assert_eq!(request.variant, BoxVariant::OpenStackable);
        assert_eq!(request.config.width, 150.0);
        assert_eq!(request.config.depth, BoxConfiguration::default().depth);
        assert_eq!(request.config.divider_offsets.vertical, vec![75.0]);
        assert!(request.config.divider_offsets.horizontal.is_empty());
    }

    #[test]
    fn test_toml_request() {
        let toml_src = r#"
            prefix = "crate"
            variant = "closed-with-top"

            [origin]
            x = 10.0
            y = 20.0

            [box]
            width = 200.0
            depth = 120.0
            height = 80.0
            thickness = 4.0
            tab_width = 15.0
            backlash = 0.15
        "#;
        let request: BoxRequest = toml::from_str(toml_src).unwrap();
        assert_eq!(request.variant, BoxVariant::ClosedWithTop);
        assert_eq!(request.origin, Point2D::new(10.0, 20.0));
        assert_eq!(request.config.thickness, 4.0);
        assert!(request.validate().is_ok());
    }
}
