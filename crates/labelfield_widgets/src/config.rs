//! Field configuration
//!
//! Every layout constant and animation parameter of the field lives here, so
//! variants of the widget differ by configuration only. All fields default,
//! which lets a TOML file override just what it cares about:
//!
//! ```toml
//! value_offset = 14.0
//! animation_duration_ms = 180
//! focused_label_color = "#ff5500"
//! ```

use labelfield_animation::{Easing, Timing};
use labelfield_core::{Color, FieldError, Result};
use serde::{Deserialize, Serialize};

/// Layout, typography and motion settings for a label field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFieldConfig {
    /// Horizontal padding inside the input
    pub horizontal_padding: f32,
    /// Label top offset while resting inline
    pub label_lower_offset: f32,
    /// Label top offset while floated as a header
    pub label_upper_offset: f32,
    /// Extra top padding given to the input while the field has content
    pub value_offset: f32,
    /// Duration of every label/holder transition
    pub animation_duration_ms: u32,
    pub easing: Easing,
    pub container_height: f32,
    pub label_height: f32,
    pub label_font_size: f32,
    pub value_font_size: f32,
    pub label_color: Color,
    pub value_color: Color,
    /// Header color while the input has focus
    pub focused_label_color: Color,
    pub border_color: Color,
    pub border_width: f32,
}

impl Default for LabelFieldConfig {
    fn default() -> Self {
        Self {
            horizontal_padding: 12.0,
            label_lower_offset: 12.0,
            label_upper_offset: 1.0,
            value_offset: 10.0,
            animation_duration_ms: labelfield_animation::DEFAULT_DURATION_MS,
            easing: Easing::default(),
            container_height: 50.0,
            label_height: 15.0,
            label_font_size: 11.0,
            value_font_size: 16.0,
            label_color: Color::from_hex(0x111111),
            value_color: Color::from_hex(0x111111),
            focused_label_color: Color::from_hex(0x1482FE),
            border_color: Color::from_hex(0xC8C7CC),
            border_width: 0.5,
        }
    }
}

impl LabelFieldConfig {
    /// Parse a config from TOML, validating the result
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| FieldError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| FieldError::Config(e.to_string()))
    }

    /// Reject values no layout can honor
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("horizontal_padding", self.horizontal_padding),
            ("label_lower_offset", self.label_lower_offset),
            ("label_upper_offset", self.label_upper_offset),
            ("value_offset", self.value_offset),
            ("container_height", self.container_height),
            ("label_height", self.label_height),
            ("border_width", self.border_width),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(FieldError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("label_font_size", self.label_font_size),
            ("value_font_size", self.value_font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FieldError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let (x1, y1, x2, y2) = self.easing.control_points();
        if ![x1, y1, x2, y2].iter().all(|p| p.is_finite()) {
            return Err(FieldError::Config(format!(
                "easing control points must be finite, got {:?}",
                self.easing
            )));
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(FieldError::Config(format!(
                "easing x control points must lie in 0..=1, got {x1} and {x2}"
            )));
        }
        Ok(())
    }

    /// Timing shared by every transition of the field
    pub fn timing(&self) -> Timing {
        Timing::new(self.animation_duration_ms).easing(self.easing)
    }

    pub fn label_motion(&self) -> LabelMotion {
        LabelMotion {
            upper_offset: self.label_upper_offset,
            lower_offset: self.label_lower_offset,
            timing: self.timing(),
        }
    }

    pub fn holder_motion(&self) -> HolderMotion {
        HolderMotion {
            value_offset: self.value_offset,
            timing: self.timing(),
        }
    }
}

/// Where the floating label rests and how it moves between rests
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelMotion {
    pub upper_offset: f32,
    pub lower_offset: f32,
    pub timing: Timing,
}

impl Default for LabelMotion {
    fn default() -> Self {
        LabelFieldConfig::default().label_motion()
    }
}

/// How much room the holder makes for the header, and how fast
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HolderMotion {
    pub value_offset: f32,
    pub timing: Timing,
}

impl Default for HolderMotion {
    fn default() -> Self {
        LabelFieldConfig::default().holder_motion()
    }
}

/// Owner overrides for the field container
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerStyle {
    pub height: Option<f32>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
}

impl ContainerStyle {
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }
}

/// Owner overrides for the label or value text
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverride {
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub height: Option<f32>,
}

impl StyleOverride {
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }
}
