//! The stock tool item: a text label that highlights when selected.

use rounded_toolbar_core::Signal;
use rounded_toolbar_render::{
    Color, CornerRadii, Paint, Point, Rect, Renderer, RoundedRect, Stroke,
};

use crate::item::{Drawable, SelectionChanged, ToolItem};

/// Visual metrics and colors of a [`RoundedToolItem`].
#[derive(Debug, Clone, PartialEq)]
pub struct ToolItemStyle {
    /// Fill behind a selected item.
    pub selected_color: Color,
    /// Label color.
    pub text_color: Color,
    /// Color of the 1px separator after every item but the last.
    pub separator_color: Color,
    /// Padding around the label on every side.
    pub padding: f32,
    /// Advance of one label character, used to size the item.
    pub char_width: f32,
    /// Height of one label line.
    pub line_height: f32,
}

impl Default for ToolItemStyle {
    fn default() -> Self {
        Self {
            selected_color: Color::from_rgb8(155, 155, 155),
            text_color: Color::from_rgb8(40, 40, 40),
            separator_color: Color::from_rgb8(120, 120, 120),
            padding: 5.0,
            char_width: 7.0,
            line_height: 14.0,
        }
    }
}

/// A labelled, toggleable item.
///
/// Its preferred size derives from the label unless overridden with
/// [`with_width`](Self::with_width) or [`with_height`](Self::with_height).
///
/// # Example
///
/// ```
/// use rounded_toolbar::{HostSurface, RoundedToolItem, RoundedToolbar, StyleFlags, ToolItem};
///
/// let surface = HostSurface::new();
/// let mut toolbar = RoundedToolbar::new(&surface, StyleFlags::NONE).unwrap();
///
/// let bold = RoundedToolItem::new("Bold")
///     .with_tooltip("Toggle bold")
///     .with_width(40.0)
///     .attach(&mut toolbar)
///     .unwrap();
///
/// assert_eq!(toolbar.item(0).unwrap(), bold);
/// ```
pub struct RoundedToolItem {
    text: String,
    tooltip: Option<String>,
    width: Option<f32>,
    height: Option<f32>,
    corner_radius: f32,
    style: ToolItemStyle,
    selected: bool,
    bounds: Rect,
    selection_changed: Signal<SelectionChanged>,
}

impl RoundedToolItem {
    /// Create an item with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tooltip: None,
            width: None,
            height: None,
            corner_radius: crate::config::DEFAULT_CORNER_RADIUS as f32,
            style: ToolItemStyle::default(),
            selected: false,
            bounds: Rect::ZERO,
            selection_changed: Signal::new(),
        }
    }

    /// Set the tooltip using builder pattern.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Fix the preferred width using builder pattern.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width.max(0.0));
        self
    }

    /// Fix the preferred height using builder pattern.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height.max(0.0));
        self
    }

    /// Set the radius of the outer corners using builder pattern.
    ///
    /// Should match the owning toolbar's radius so the highlight of an end
    /// item follows the toolbar outline.
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Set the visual style using builder pattern.
    pub fn with_style(mut self, style: ToolItemStyle) -> Self {
        self.style = style;
        self
    }

    /// The label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The visual style.
    pub fn style(&self) -> &ToolItemStyle {
        &self.style
    }

    fn text_width(&self) -> f32 {
        self.text.chars().count() as f32 * self.style.char_width
    }

    fn highlight_radii(&self, x: f32, is_last: bool) -> CornerRadii {
        let r = self.corner_radius;
        match (x <= 0.0, is_last) {
            (true, true) => CornerRadii::uniform(r),
            (true, false) => CornerRadii::left(r),
            (false, true) => CornerRadii::right(r),
            (false, false) => CornerRadii::ZERO,
        }
    }
}

impl std::fmt::Debug for RoundedToolItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundedToolItem")
            .field("text", &self.text)
            .field("selected", &self.selected)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Drawable for RoundedToolItem {
    fn draw(&self, renderer: &mut dyn Renderer, x: f32, container_height: f32, is_last: bool) {
        let width = self.width();
        let rect = Rect::new(x, 0.0, width, container_height);

        if self.selected {
            let highlight = RoundedRect::with_radii(rect, self.highlight_radii(x, is_last));
            renderer.fill_rounded_rect(highlight, Paint::solid(self.style.selected_color));
        }

        if !is_last {
            let edge = rect.right() - 1.0;
            renderer.draw_line(
                Point::new(edge, 0.0),
                Point::new(edge, container_height),
                &Stroke::new(self.style.separator_color, 1.0),
            );
        }

        if !self.text.is_empty() {
            let origin = Point::new(
                x + (width - self.text_width()) / 2.0,
                (container_height - self.style.line_height) / 2.0,
            );
            renderer.draw_text(&self.text, origin, self.style.text_color);
        }
    }
}

impl ToolItem for RoundedToolItem {
    fn selection(&self) -> bool {
        self.selected
    }

    fn set_selection(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn width(&self) -> f32 {
        self.width
            .unwrap_or_else(|| self.text_width() + self.style.padding * 2.0)
    }

    fn height(&self) -> f32 {
        self.height
            .unwrap_or(self.style.line_height + self.style.padding * 2.0)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn tooltip_text(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    fn selection_changed(&self) -> &Signal<SelectionChanged> {
        &self.selection_changed
    }
}
