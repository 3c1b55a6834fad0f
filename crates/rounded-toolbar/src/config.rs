//! Toolbar visual configuration.
//!
//! [`ToolbarConfig`] carries the corner radius, the three colors and the
//! initial selection mode. Every field has a default, so a configuration file
//! only needs the fields it changes:
//!
//! ```
//! use rounded_toolbar::ToolbarConfig;
//!
//! let config = ToolbarConfig::from_toml_str(
//!     r#"
//!     corner_radius = 6
//!     border_color = [60, 60, 60]
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.corner_radius, 6);
//! assert_eq!(config.start_gradient_color, [245, 245, 245]);
//! ```

use rounded_toolbar_render::Color;
use serde::Deserialize;

use crate::error::ToolbarResult;

/// Default corner radius in pixels.
pub const DEFAULT_CORNER_RADIUS: u32 = 8;
/// Default top color of the background gradient.
pub const DEFAULT_START_GRADIENT_COLOR: [u8; 3] = [245, 245, 245];
/// Default bottom color of the background gradient.
pub const DEFAULT_END_GRADIENT_COLOR: [u8; 3] = [185, 185, 185];
/// Default border color.
pub const DEFAULT_BORDER_COLOR: [u8; 3] = [66, 66, 66];

/// Construction-time configuration for a [`RoundedToolbar`](crate::RoundedToolbar).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolbarConfig {
    /// Radius of the rounded corners, in pixels.
    pub corner_radius: u32,
    /// Start in multi-selection mode instead of radio mode.
    pub multi_selection: bool,
    /// Top color of the background gradient, as `[r, g, b]`.
    pub start_gradient_color: [u8; 3],
    /// Bottom color of the background gradient, as `[r, g, b]`.
    pub end_gradient_color: [u8; 3],
    /// Border color, as `[r, g, b]`.
    pub border_color: [u8; 3],
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            corner_radius: DEFAULT_CORNER_RADIUS,
            multi_selection: false,
            start_gradient_color: DEFAULT_START_GRADIENT_COLOR,
            end_gradient_color: DEFAULT_END_GRADIENT_COLOR,
            border_color: DEFAULT_BORDER_COLOR,
        }
    }
}

impl ToolbarConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ToolbarError::Config`](crate::ToolbarError::Config) for
    /// malformed text, unknown keys or out-of-range values.
    pub fn from_toml_str(text: &str) -> ToolbarResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Set the corner radius using builder pattern.
    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the three colors using builder pattern.
    pub fn with_colors(mut self, start: [u8; 3], end: [u8; 3], border: [u8; 3]) -> Self {
        self.start_gradient_color = start;
        self.end_gradient_color = end;
        self.border_color = border;
        self
    }

    /// Set the initial selection mode using builder pattern.
    pub fn with_multi_selection(mut self, multi: bool) -> Self {
        self.multi_selection = multi;
        self
    }

    pub(crate) fn colors(&self) -> (Color, Color, Color) {
        let color = |[r, g, b]: [u8; 3]| Color::from_rgb8(r, g, b);
        (
            color(self.start_gradient_color),
            color(self.end_gradient_color),
            color(self.border_color),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolbarError;

    #[test]
    fn test_defaults() {
        let config = ToolbarConfig::default();
        assert_eq!(config.corner_radius, 8);
        assert!(!config.multi_selection);
        assert_eq!(config.border_color, [66, 66, 66]);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ToolbarConfig::from_toml_str("").unwrap(), ToolbarConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = ToolbarConfig::from_toml_str(
            r#"
            corner_radius = 6
            multi_selection = true
            start_gradient_color = [250, 250, 250]
            end_gradient_color = [190, 190, 190]
            border_color = [60, 60, 60]
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            ToolbarConfig::default()
                .with_corner_radius(6)
                .with_multi_selection(true)
                .with_colors([250, 250, 250], [190, 190, 190], [60, 60, 60])
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        let negative = ToolbarConfig::from_toml_str("corner_radius = -1");
        assert!(matches!(negative, Err(ToolbarError::Config(_))));

        let overflow = ToolbarConfig::from_toml_str("border_color = [300, 0, 0]");
        assert!(matches!(overflow, Err(ToolbarError::Config(_))));

        let unknown = ToolbarConfig::from_toml_str("shadow = true");
        assert!(matches!(unknown, Err(ToolbarError::Config(_))));
    }

    #[test]
    fn test_colors_convert() {
        let (start, end, border) = ToolbarConfig::default().colors();
        assert_eq!(start.to_rgb8(), [245, 245, 245]);
        assert_eq!(end.to_rgb8(), [185, 185, 185]);
        assert_eq!(border.to_rgb8(), [66, 66, 66]);
    }
}
