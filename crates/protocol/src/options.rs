use serde::{Deserialize, Serialize};

use crate::types::{Color, Insets, Point};

/// How a shape's corner radius is specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CornerRadius {
    /// A literal radius in window units.
    Absolute(f64),
    /// A fraction of half the shape's height: 0 is square, 1 is a full
    /// pill. Values outside [0, 1] are clamped at resolution time.
    Relative(f64),
}

impl CornerRadius {
    /// Resolve to a concrete radius for a shape of the given height.
    pub fn resolve(&self, height: f64) -> f64 {
        match self {
            Self::Absolute(value) => *value,
            Self::Relative(value) => (height / 2.0) * value.clamp(0.0, 1.0),
        }
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::Absolute(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    /// Caption and highlight share their left side.
    Left,
    /// Caption centered on the highlight.
    Center,
    /// Caption and highlight share their right side.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAlignment {
    /// Caption above the highlight.
    Top,
    /// Caption centered on the highlight.
    Center,
    /// Caption below the highlight.
    Bottom,
}

/// Where the caption sits relative to the highlighted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPosition {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl TextPosition {
    pub fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for TextPosition {
    fn default() -> Self {
        Self::new(HorizontalAlignment::Center, VerticalAlignment::Bottom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Bold,
}

/// An abstract font request. Hosts map this onto whatever text engine
/// they render with; the core only needs it for measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f64,
    pub weight: FontWeight,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: 14.0,
            weight: FontWeight::Regular,
        }
    }
}

/// The full per-highlight configuration set. Every field has a default,
/// so call sites typically start from `HighlightOptions::default()` and
/// override what they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightOptions {
    /// Stroke color of the outline drawn on the highlighted region.
    pub border_color: Color,
    /// Stroke width of the outline. Zero draws nothing.
    pub border_width: f64,
    /// Corner radius of the highlighted region and its cutout.
    pub corner_radius: CornerRadius,
    /// Per-edge growth applied to the raw target region.
    pub insets: Insets,
    /// Fill color behind the caption text.
    pub text_background_color: Color,
    /// Caption text color.
    pub text_color: Color,
    /// Corner radius of the caption, resolved against its padded height.
    pub text_corner_radius: CornerRadius,
    /// Caption font.
    pub text_font: FontSpec,
    /// Padding between the caption text and its background edges.
    pub text_insets: Insets,
    /// Maximum caption line count; 0 means unlimited.
    pub text_max_lines: u32,
    /// Pixel offset applied on top of the anchor rule.
    pub text_offset: Point,
    /// Which anchor rule places the caption.
    pub text_position: TextPosition,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            corner_radius: CornerRadius::default(),
            insets: Insets::ZERO,
            text_background_color: Color::WHITE,
            text_color: Color::BLACK,
            text_corner_radius: CornerRadius::default(),
            text_font: FontSpec::default(),
            text_insets: Insets::ZERO,
            text_max_lines: 0,
            text_offset: Point::ZERO,
            text_position: TextPosition::default(),
        }
    }
}

/// Appearance of the dimmed backdrop behind the cutout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundOptions {
    pub color: Color,
    pub opacity: f32,
}

impl Default for BackgroundOptions {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            opacity: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_radius_is_literal() {
        assert_eq!(CornerRadius::Absolute(7.0).resolve(100.0), 7.0);
        assert_eq!(CornerRadius::Absolute(0.0).resolve(100.0), 0.0);
    }

    #[test]
    fn relative_radius_scales_with_half_height() {
        assert_eq!(CornerRadius::Relative(0.5).resolve(40.0), 10.0);
        assert_eq!(CornerRadius::Relative(1.0).resolve(40.0), 20.0);
    }

    #[test]
    fn relative_radius_clamps_to_unit_range() {
        // v <= 0 resolves to 0, v >= 1 resolves to height/2.
        assert_eq!(CornerRadius::Relative(-3.0).resolve(40.0), 0.0);
        assert_eq!(CornerRadius::Relative(0.0).resolve(40.0), 0.0);
        assert_eq!(CornerRadius::Relative(1.5).resolve(40.0), 20.0);
    }

    #[test]
    fn relative_radius_stays_within_bounds() {
        for v in [-1.0, 0.0, 0.25, 0.5, 0.75, 1.0, 2.0] {
            for h in [0.0, 1.0, 13.0, 200.0] {
                let r = CornerRadius::Relative(v).resolve(h);
                assert!(r >= 0.0);
                assert!(r <= h / 2.0);
            }
        }
    }

    #[test]
    fn option_defaults_match_contract() {
        let opts = HighlightOptions::default();
        assert!(opts.border_color.is_transparent());
        assert_eq!(opts.border_width, 0.0);
        assert_eq!(opts.corner_radius, CornerRadius::Absolute(0.0));
        assert_eq!(opts.insets, Insets::ZERO);
        assert_eq!(opts.text_background_color, Color::WHITE);
        assert_eq!(opts.text_color, Color::BLACK);
        assert_eq!(opts.text_font.size, 14.0);
        assert_eq!(opts.text_font.weight, FontWeight::Regular);
        assert_eq!(opts.text_max_lines, 0);
        assert_eq!(opts.text_offset, Point::ZERO);
        assert_eq!(
            opts.text_position,
            TextPosition::new(HorizontalAlignment::Center, VerticalAlignment::Bottom)
        );
    }

    #[test]
    fn background_defaults() {
        let bg = BackgroundOptions::default();
        assert_eq!(bg.color, Color::BLACK);
        assert!((bg.opacity - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn options_serde_roundtrip() {
        let opts = HighlightOptions {
            corner_radius: CornerRadius::Relative(0.3),
            text_max_lines: 2,
            ..HighlightOptions::default()
        };
        let json = serde_json::to_string(&opts).unwrap_or_default();
        let back: HighlightOptions = serde_json::from_str(&json)
            .unwrap_or_else(|_| HighlightOptions::default());
        assert_eq!(back, opts);
    }
}
