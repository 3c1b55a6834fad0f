//! Events the platform delivers to a toolbar.
//!
//! Positions are in toolbar-local coordinates: `(0, 0)` is the toolbar's
//! top-left corner.

use rounded_toolbar_render::{Point, Size};

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
    /// Any other button, by platform index.
    Other(u16),
}

/// A pointer button was released over the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerReleaseEvent {
    /// The released button.
    pub button: MouseButton,
    /// Pointer position in local coordinates.
    pub local_pos: Point,
}

impl PointerReleaseEvent {
    /// Create a release event for `button` at `local_pos`.
    pub fn new(button: MouseButton, local_pos: impl Into<Point>) -> Self {
        Self {
            button,
            local_pos: local_pos.into(),
        }
    }
}

/// The pointer came to rest over the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerHoverEvent {
    /// Pointer position in local coordinates.
    pub local_pos: Point,
}

impl PointerHoverEvent {
    /// Create a hover event at `local_pos`.
    pub fn new(local_pos: impl Into<Point>) -> Self {
        Self {
            local_pos: local_pos.into(),
        }
    }
}

/// The platform assigned the toolbar a new size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    /// The new size.
    pub size: Size,
}

impl ResizeEvent {
    /// Create a resize event.
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

/// Events routed through [`RoundedToolbar::event`](crate::RoundedToolbar::event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarEvent {
    /// Pointer button released.
    PointerRelease(PointerReleaseEvent),
    /// Pointer hovering.
    PointerHover(PointerHoverEvent),
    /// Toolbar resized.
    Resize(ResizeEvent),
}

impl From<PointerReleaseEvent> for ToolbarEvent {
    fn from(event: PointerReleaseEvent) -> Self {
        Self::PointerRelease(event)
    }
}

impl From<PointerHoverEvent> for ToolbarEvent {
    fn from(event: PointerHoverEvent) -> Self {
        Self::PointerHover(event)
    }
}

impl From<ResizeEvent> for ToolbarEvent {
    fn from(event: ResizeEvent) -> Self {
        Self::Resize(event)
    }
}
