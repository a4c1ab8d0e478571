//! Stroke, fill, and color styling for annotations.
//!
//! Styles are chosen from fixed palettes; every stroke style resolves to a
//! concrete (width, dash pattern) pair for the rendering layer.

use serde::{Deserialize, Serialize};

/// An opaque RGB color from the annotation palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(219, 40, 40);
    pub const ORANGE: Color = Color::new(242, 113, 28);
    pub const YELLOW: Color = Color::new(251, 189, 8);
    pub const GREEN: Color = Color::new(33, 186, 69);
    pub const BLUE: Color = Color::new(33, 133, 208);
    pub const PURPLE: Color = Color::new(163, 51, 200);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The fixed palette offered by the style toolbar.
    pub fn palette() -> &'static [Color] {
        &[
            Color::BLACK,
            Color::WHITE,
            Color::RED,
            Color::ORANGE,
            Color::YELLOW,
            Color::GREEN,
            Color::BLUE,
            Color::PURPLE,
        ]
    }

    /// CSS-style hex string, e.g. `#db2828`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Stroke width step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeWidth {
    Thin,
    #[default]
    Medium,
    Thick,
    VeryThick,
}

impl StrokeWidth {
    /// Get all widths in order.
    pub fn all() -> &'static [StrokeWidth] {
        &[
            StrokeWidth::Thin,
            StrokeWidth::Medium,
            StrokeWidth::Thick,
            StrokeWidth::VeryThick,
        ]
    }
}

/// Line dash mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineDash {
    #[default]
    Solid,
    Dashed,
}

/// A stroke style: width step crossed with dash mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: StrokeWidth,
    pub dash: LineDash,
}

impl StrokeStyle {
    pub fn new(width: StrokeWidth, dash: LineDash) -> Self {
        Self { width, dash }
    }

    /// Resolved stroke width in pixels.
    pub fn width_px(&self) -> f32 {
        match self.width {
            StrokeWidth::Thin => 2.0,
            StrokeWidth::Medium => 4.0,
            StrokeWidth::Thick => 6.0,
            StrokeWidth::VeryThick => 8.0,
        }
    }

    /// Resolved dash pattern as (dash, gap) lengths, or `None` for solid.
    pub fn dash_pattern(&self) -> Option<[f32; 2]> {
        match self.dash {
            LineDash::Solid => None,
            LineDash::Dashed => {
                let w = self.width_px();
                Some([w * 3.0, w * 2.0])
            }
        }
    }
}

/// How the interior of a shape annotation is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fill {
    /// Opaque fill in a palette color.
    Solid(Color),
    /// Transparent interior; only the stroke is visible.
    #[default]
    Empty,
    /// Opaque cut-out used when rendering the spotlight overlay mask.
    Mask,
    /// Transparent placeholder a spotlight shape carries before the
    /// renderer converts it into a mask cut-out.
    Spotlight,
}

impl Fill {
    /// Whether this fill participates in spotlight mask rendering.
    pub fn is_spotlight(&self) -> bool {
        matches!(self, Fill::Mask | Fill::Spotlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::RED.to_hex(), "#db2828");
    }

    #[test]
    fn test_stroke_resolution() {
        let thin_solid = StrokeStyle::new(StrokeWidth::Thin, LineDash::Solid);
        assert_eq!(thin_solid.width_px(), 2.0);
        assert_eq!(thin_solid.dash_pattern(), None);

        let thick_dashed = StrokeStyle::new(StrokeWidth::Thick, LineDash::Dashed);
        assert_eq!(thick_dashed.width_px(), 6.0);
        assert_eq!(thick_dashed.dash_pattern(), Some([18.0, 12.0]));
    }

    #[test]
    fn test_fill_spotlight() {
        assert!(Fill::Spotlight.is_spotlight());
        assert!(Fill::Mask.is_spotlight());
        assert!(!Fill::Empty.is_spotlight());
        assert!(!Fill::Solid(Color::RED).is_spotlight());
    }
}
