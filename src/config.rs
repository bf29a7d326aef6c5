//! Coordinator configuration.
//!
//! Every knob has a default matching the stock portfolio page, so an empty
//! TOML document yields a working configuration:
//!
//! ```toml
//! [header]
//! emphasis_threshold = 50.0
//! hide_threshold = 100.0
//!
//! [reveal]
//! threshold = 0.1
//! root_margin_bottom = -50.0
//! stagger_ms = 100
//!
//! [typewriter]
//! char_delay_ms = 50
//! line_pause_ms = 500
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::state::scroll::{PAGE_SCROLL_FACTOR, WHEEL_LINES};

// =============================================================================
// SECTIONS
// =============================================================================

/// Header State Reducer tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Position past which the header is emphasized.
    pub emphasis_threshold: f32,
    /// Minimum position before a downward step hides the header.
    pub hide_threshold: f32,
    /// Background alpha while emphasized.
    pub emphasized_alpha: f32,
    /// Background alpha while resting at the top.
    pub resting_alpha: f32,
    /// Backdrop blur radius in both modes.
    pub blur_px: f32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            emphasis_threshold: 50.0,
            hide_threshold: 100.0,
            emphasized_alpha: 0.95,
            resting_alpha: 0.8,
            blur_px: 20.0,
        }
    }
}

/// Anchor Navigator tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Extra gap left between the header and the target section.
    pub margin: f32,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { margin: 20.0 }
    }
}

/// Visibility Revealer tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be inside the root box.
    pub threshold: f32,
    /// Adjustment of the root box's bottom edge (negative shrinks it).
    pub root_margin_bottom: f32,
    /// Delay between consecutive children of a group.
    pub stagger_ms: u64,
    /// Initial downward offset of hidden elements.
    pub hidden_offset_px: f32,
    /// Transition duration written at mount.
    pub transition_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom: -50.0,
            stagger_ms: 100,
            hidden_offset_px: 30.0,
            transition_ms: 600,
        }
    }
}

/// Pointer Parallax tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Speed increment per element index.
    pub speed_step: f32,
    /// Maximum travel in pixels at speed 1.
    pub amplitude: f32,
    /// Floating-animation delay increment per element index.
    pub float_delay_step_ms: u64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            speed_step: 0.3,
            amplitude: 20.0,
            float_delay_step_ms: 2_000,
        }
    }
}

/// Typewriter Reveal tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub char_delay_ms: u64,
    pub line_pause_ms: u64,
    /// Wait between the container becoming visible and the first character.
    pub start_delay_ms: u64,
    /// Visibility fraction that triggers typing.
    pub trigger_threshold: f32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: 50,
            line_pause_ms: 500,
            start_delay_ms: 1_000,
            trigger_threshold: 0.0,
        }
    }
}

/// Rate limits applied to high-frequency notifications.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// At most one immediate scroll update per window.
    pub scroll_throttle_ms: u64,
    /// Quiet period after which the latest scroll position is applied.
    pub scroll_settle_ms: u64,
    /// Quiet period after which a resize is applied.
    pub resize_debounce_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: 16,
            scroll_settle_ms: 100,
            resize_debounce_ms: 150,
        }
    }
}

/// Terminal adapter tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub cell_width_px: f32,
    pub cell_height_px: f32,
    /// Lines scrolled per wheel notch.
    pub wheel_lines: u16,
    /// Fraction of the viewport scrolled by Page Up/Down.
    pub page_factor: f32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            wheel_lines: WHEEL_LINES,
            page_factor: PAGE_SCROLL_FACTOR,
        }
    }
}

// =============================================================================
// ROOT
// =============================================================================

/// Complete coordinator configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    pub header: HeaderConfig,
    pub anchor: AnchorConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub typewriter: TypewriterConfig,
    pub rate_limit: RateLimitConfig,
    pub terminal: TerminalConfig,
}

impl CoordinatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        fraction("reveal.threshold", self.reveal.threshold)?;
        fraction("typewriter.trigger_threshold", self.typewriter.trigger_threshold)?;
        fraction("header.emphasized_alpha", self.header.emphasized_alpha)?;
        fraction("header.resting_alpha", self.header.resting_alpha)?;

        finite("header.emphasis_threshold", self.header.emphasis_threshold)?;
        finite("header.hide_threshold", self.header.hide_threshold)?;
        finite("reveal.root_margin_bottom", self.reveal.root_margin_bottom)?;
        finite("reveal.hidden_offset_px", self.reveal.hidden_offset_px)?;

        non_negative("header.blur_px", self.header.blur_px)?;
        non_negative("anchor.margin", self.anchor.margin)?;
        non_negative("parallax.speed_step", self.parallax.speed_step)?;
        non_negative("parallax.amplitude", self.parallax.amplitude)?;
        non_negative("terminal.page_factor", self.terminal.page_factor)?;
        positive("terminal.cell_width_px", self.terminal.cell_width_px)?;
        positive("terminal.cell_height_px", self.terminal.cell_height_px)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            field,
            reason: format!("{value} is not finite"),
        })
    }
}

fn fraction(field: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            field,
            reason: format!("{value} is outside 0..=1"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            field,
            reason: format!("{value} is negative"),
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            field,
            reason: format!("{value} must be greater than zero"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CoordinatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CoordinatorConfig::default());
        assert_eq!(config.header.emphasis_threshold, 50.0);
        assert_eq!(config.header.hide_threshold, 100.0);
        assert_eq!(config.anchor.margin, 20.0);
        assert_eq!(config.reveal.stagger_ms, 100);
        assert_eq!(config.typewriter.char_delay_ms, 50);
        assert_eq!(config.typewriter.line_pause_ms, 500);
    }

    #[test]
    fn test_partial_override() {
        let config = CoordinatorConfig::from_toml_str(
            r#"
            [header]
            hide_threshold = 50.0

            [reveal]
            stagger_ms = 150
            "#,
        )
        .unwrap();

        assert_eq!(config.header.hide_threshold, 50.0);
        assert_eq!(config.header.emphasis_threshold, 50.0);
        assert_eq!(config.reveal.stagger_ms, 150);
        assert_eq!(config.reveal.threshold, 0.1);
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let err = CoordinatorConfig::from_toml_str("[reveal]\nthreshold = 1.5\n").unwrap_err();
        match err {
            Error::InvalidConfig { field, .. } => assert_eq!(field, "reveal.threshold"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_margin_rejected() {
        let err = CoordinatorConfig::from_toml_str("[anchor]\nmargin = -4.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { field: "anchor.margin", .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = CoordinatorConfig::from_toml_str("[header\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let err = CoordinatorConfig::from_toml_str("[terminal]\ncell_height_px = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfig { field: "terminal.cell_height_px", .. }
        ));
    }
}
