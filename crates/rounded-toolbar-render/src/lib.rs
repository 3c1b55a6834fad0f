//! Geometry, paint and renderer abstractions for Rounded Toolbar.
//!
//! Widgets paint through the object-safe [`Renderer`] trait. The crate ships
//! a [`RecordingRenderer`] that turns a paint pass into a list of
//! [`DrawCommand`]s for a platform backend to replay.
//!
//! ```
//! use rounded_toolbar_render::{
//!     Color, CornerRadii, LinearGradient, Path, RecordingRenderer, Rect, Renderer,
//! };
//!
//! let bounds = Rect::new(0.0, 0.0, 120.0, 25.0);
//! let mut renderer = RecordingRenderer::new();
//!
//! renderer.set_antialias(true);
//! renderer.clip_path(&Path::rounded_rect(bounds, CornerRadii::uniform(8.0)));
//! renderer.fill_rect(
//!     bounds,
//!     LinearGradient::vertical(bounds, Color::WHITE, Color::BLACK).into(),
//! );
//! renderer.restore_clip();
//!
//! assert_eq!(renderer.commands().len(), 4);
//! ```

mod paint;
mod recording;
mod renderer;
mod types;

pub use paint::{GradientStop, LinearGradient, Paint, Stroke};
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{RenderStateStack, Renderer};
pub use types::{Color, CornerRadii, Path, PathCommand, Point, Rect, RoundedRect, Size};
