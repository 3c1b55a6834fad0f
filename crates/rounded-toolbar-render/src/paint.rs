//! Paint styles for filling and stroking shapes.

use crate::types::{Color, Point, Rect};

/// A paint style for filling shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Solid color fill.
    Solid(Color),
    /// Linear gradient fill.
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Create a solid color paint.
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Create a linear gradient paint.
    #[inline]
    pub fn linear_gradient(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Self::LinearGradient(LinearGradient { start, end, stops })
    }

    /// Get the solid color, if this is a solid paint.
    #[inline]
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(c) => Some(*c),
            Self::LinearGradient(_) => None,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Self::LinearGradient(gradient)
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

/// A linear gradient definition.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Start point of the gradient.
    pub start: Point,
    /// End point of the gradient.
    pub end: Point,
    /// Color stops, ordered by offset.
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// A two-stop gradient running from the top edge of `rect` to its bottom edge.
    pub fn vertical(rect: Rect, top: Color, bottom: Color) -> Self {
        Self {
            start: Point::new(rect.left(), rect.top()),
            end: Point::new(rect.left(), rect.bottom()),
            stops: vec![GradientStop::new(0.0, top), GradientStop::new(1.0, bottom)],
        }
    }
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0).
    pub offset: f32,
    /// Color at this stop.
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop.
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Stroke style options.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke paint (color or gradient).
    pub paint: Paint,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            paint: Paint::Solid(Color::BLACK),
            width: 1.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given paint and width.
    #[inline]
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_gradient_endpoints() {
        let rect = Rect::new(0.0, 0.0, 120.0, 25.0);
        let top = Color::from_rgb8(245, 245, 245);
        let bottom = Color::from_rgb8(185, 185, 185);
        let gradient = LinearGradient::vertical(rect, top, bottom);

        assert_eq!(gradient.start, Point::new(0.0, 0.0));
        assert_eq!(gradient.end, Point::new(0.0, 25.0));
        assert_eq!(gradient.stops[0], GradientStop::new(0.0, top));
        assert_eq!(gradient.stops[1], GradientStop::new(1.0, bottom));
    }

    #[test]
    fn test_paint_conversions() {
        let paint: Paint = Color::WHITE.into();
        assert_eq!(paint.as_solid(), Some(Color::WHITE));

        let stroke = Stroke::new(Color::from_rgb8(66, 66, 66), 1.0);
        assert_eq!(stroke.width, 1.0);
        assert!(stroke.paint.as_solid().is_some());
    }
}
