//! Core renderer trait defining the 2D drawing interface.
//!
//! [`Renderer`] is object-safe so that widgets can hand a `&mut dyn Renderer`
//! to collaborators (tool items) without knowing the backend.

use crate::paint::{Paint, Stroke};
use crate::types::{Color, Path, Point, Rect, RoundedRect};

/// The core 2D rendering trait.
///
/// A typical paint pass looks like:
///
/// ```ignore
/// renderer.set_antialias(true);
/// renderer.clip_path(&Path::rounded_rect(bounds, CornerRadii::uniform(8.0)));
/// renderer.fill_rect(bounds, gradient.into());
/// renderer.restore_clip();
/// ```
pub trait Renderer {
    // =========================================================================
    // State Management
    // =========================================================================

    /// Enable or disable antialiasing for subsequent drawing.
    fn set_antialias(&mut self, enabled: bool);

    /// Whether antialiasing is currently enabled.
    fn antialias(&self) -> bool;

    // =========================================================================
    // Clipping
    // =========================================================================

    /// Push an arbitrary path clip region.
    ///
    /// Clips are nested; each call pushes a new clip level.
    fn clip_path(&mut self, path: &Path);

    /// Pop the most recently pushed clip.
    fn restore_clip(&mut self);

    /// Get the bounding box of the active clip, if any.
    fn clip_bounds(&self) -> Option<Rect>;

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill a rectangle with the specified paint.
    fn fill_rect(&mut self, rect: Rect, paint: Paint);

    /// Fill a rounded rectangle with the specified paint.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, paint: Paint);

    /// Stroke the outline of a rounded rectangle.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, color: Color);
}

/// Common state management for renderers.
///
/// Tracks the antialias flag and the clip stack so backends only have to
/// implement the actual drawing.
#[derive(Debug, Clone, Default)]
pub struct RenderStateStack {
    antialias: bool,
    clips: Vec<Rect>,
}

impl RenderStateStack {
    /// Create a new state stack with antialiasing off and no clip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether antialiasing is enabled.
    #[inline]
    pub fn antialias(&self) -> bool {
        self.antialias
    }

    /// Set the antialias flag.
    #[inline]
    pub fn set_antialias(&mut self, enabled: bool) {
        self.antialias = enabled;
    }

    /// Push a clip, intersected with the enclosing clip.
    pub fn push_clip(&mut self, bounds: Rect) {
        let clipped = match self.clips.last() {
            Some(outer) => intersect(outer, &bounds),
            None => bounds,
        };
        self.clips.push(clipped);
    }

    /// Pop the innermost clip. Returns `false` if no clip was active.
    pub fn pop_clip(&mut self) -> bool {
        self.clips.pop().is_some()
    }

    /// Get the current clip bounds.
    #[inline]
    pub fn clip_bounds(&self) -> Option<Rect> {
        self.clips.last().copied()
    }

    /// Number of clips currently pushed.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clips.len()
    }
}

fn intersect(a: &Rect, b: &Rect) -> Rect {
    let left = a.left().max(b.left());
    let top = a.top().max(b.top());
    let right = a.right().min(b.right()).max(left);
    let bottom = a.bottom().min(b.bottom()).max(top);
    Rect::new(left, top, right - left, bottom - top)
}
