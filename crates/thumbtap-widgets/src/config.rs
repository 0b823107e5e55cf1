//! Tunables for [`crate::ThumbnailWidget`], loadable from TOML.

use crate::error::ThumbnailError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thumbtap_core::{Color, Easing};

/// Thumbnail widget configuration.
///
/// Every field has a default, so a TOML document only needs the keys it
/// overrides:
///
/// ```
/// use thumbtap_widgets::ThumbnailConfig;
///
/// let config = ThumbnailConfig::from_toml("long_press_delay_ms = 600").unwrap();
/// assert_eq!(config.long_press_delay_ms, 600);
/// assert_eq!(config.press_duration_ms, 230);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// Scale applied while fully pressed
    pub min_scale: f32,
    /// Press animation duration in milliseconds
    pub press_duration_ms: u64,
    /// Hold time before a press becomes a long press
    pub long_press_delay_ms: u64,
    /// Padding between the widget edge and the content, on every side
    pub content_padding: f32,
    /// Overshoot tension of the press curve
    pub overshoot_tension: f64,
    /// Fill used for the contour placeholder
    pub placeholder_color: Color,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.3,
            press_duration_ms: 230,
            long_press_delay_ms: 1000,
            content_padding: 8.0,
            overshoot_tension: 3.2,
            placeholder_color: Color::rgba(0.0, 0.0, 0.0, 0.08),
        }
    }
}

impl ThumbnailConfig {
    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ThumbnailError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Load from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ThumbnailError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Reject values the widget cannot render with.
    pub fn validate(&self) -> Result<(), ThumbnailError> {
        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            return Err(ThumbnailError::InvalidValue(format!(
                "min_scale must be a positive number, got {}",
                self.min_scale
            )));
        }
        if !self.content_padding.is_finite() || self.content_padding < 0.0 {
            return Err(ThumbnailError::InvalidValue(format!(
                "content_padding must be non-negative, got {}",
                self.content_padding
            )));
        }
        if !self.overshoot_tension.is_finite() || self.overshoot_tension < 0.0 {
            return Err(ThumbnailError::InvalidValue(format!(
                "overshoot_tension must be non-negative, got {}",
                self.overshoot_tension
            )));
        }
        Ok(())
    }

    /// Press animation duration.
    #[must_use]
    pub const fn press_duration(&self) -> Duration {
        Duration::from_millis(self.press_duration_ms)
    }

    /// Long-press delay.
    #[must_use]
    pub const fn long_press_delay(&self) -> Duration {
        Duration::from_millis(self.long_press_delay_ms)
    }

    /// Easing curve for the press animation.
    #[must_use]
    pub const fn press_easing(&self) -> Easing {
        Easing::Overshoot {
            tension: self.overshoot_tension,
        }
    }

    /// Content scale for a press factor.
    ///
    /// Factor 0 gives 1.0; factor 1 gives `min_scale`.
    #[must_use]
    pub fn scale_for(&self, factor: f32) -> f32 {
        (1.0 - self.min_scale).mul_add(1.0 - factor, self.min_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let c = ThumbnailConfig::default();
        assert_eq!(c.min_scale, 1.3);
        assert_eq!(c.press_duration(), Duration::from_millis(230));
        assert_eq!(c.long_press_delay(), Duration::from_secs(1));
        assert_eq!(c.content_padding, 8.0);
        assert_eq!(c.press_easing(), Easing::Overshoot { tension: 3.2 });
    }

    #[test]
    fn test_empty_toml_is_default() {
        let c = ThumbnailConfig::from_toml("").unwrap();
        assert_eq!(c, ThumbnailConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let c = ThumbnailConfig::from_toml(
            r"
            min_scale = 1.5
            content_padding = 4.0

            [placeholder_color]
            r = 1.0
            g = 0.0
            b = 0.0
            a = 0.5
            ",
        )
        .unwrap();
        assert_eq!(c.min_scale, 1.5);
        assert_eq!(c.content_padding, 4.0);
        assert_eq!(c.placeholder_color, Color::rgba(1.0, 0.0, 0.0, 0.5));
        assert_eq!(c.long_press_delay_ms, 1000);
    }

    #[test]
    fn test_toml_roundtrip() {
        let c = ThumbnailConfig {
            long_press_delay_ms: 750,
            ..ThumbnailConfig::default()
        };
        let parsed = ThumbnailConfig::from_toml(&c.to_toml()).unwrap();
        assert_eq!(parsed, c);
    }

    #[test]
    fn test_malformed_toml() {
        let err = ThumbnailConfig::from_toml("min_scale = \"big\"").unwrap_err();
        assert!(matches!(err, ThumbnailError::Config(_)));
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let err = ThumbnailConfig::from_toml("min_scale = 0.0").unwrap_err();
        assert!(matches!(err, ThumbnailError::InvalidValue(_)));
    }

    #[test]
    fn test_rejects_negative_padding() {
        let err = ThumbnailConfig::from_toml("content_padding = -1.0").unwrap_err();
        assert!(matches!(err, ThumbnailError::InvalidValue(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ThumbnailConfig::load_from_file(Path::new("/nonexistent/thumbtap.toml"))
            .unwrap_err();
        assert!(matches!(err, ThumbnailError::Io(_)));
    }

    #[test]
    fn test_scale_endpoints() {
        let c = ThumbnailConfig::default();
        assert_eq!(c.scale_for(0.0), 1.0);
        assert!((c.scale_for(1.0) - 1.3).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_scale_is_monotonic_in_factor(a in 0.0f32..1.0, b in 0.0f32..1.0) {
            let c = ThumbnailConfig::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(c.scale_for(lo) <= c.scale_for(hi) + 1e-6);
        }
    }
}
