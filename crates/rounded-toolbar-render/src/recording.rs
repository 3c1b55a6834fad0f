//! A renderer that records draw commands instead of rasterizing them.
//!
//! [`RecordingRenderer`] produces a display list that a platform backend can
//! replay, and that tests can compare. Two paint passes over unchanged state
//! produce equal lists.

use crate::paint::{Paint, Stroke};
use crate::renderer::{RenderStateStack, Renderer};
use crate::types::{Color, Path, Point, Rect, RoundedRect};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetAntialias(bool),
    ClipPath(Path),
    RestoreClip,
    FillRect { rect: Rect, paint: Paint },
    FillRoundedRect { rect: RoundedRect, paint: Paint },
    StrokeRoundedRect { rect: RoundedRect, stroke: Stroke },
    DrawLine { from: Point, to: Point, stroke: Stroke },
    DrawText { text: String, origin: Point, color: Color },
}

/// Records every call made through the [`Renderer`] trait.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    state: RenderStateStack,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.state = RenderStateStack::new();
        std::mem::take(&mut self.commands)
    }

    /// Number of clips still active. Zero after a balanced paint pass.
    pub fn clip_depth(&self) -> usize {
        self.state.clip_depth()
    }
}

impl Renderer for RecordingRenderer {
    fn set_antialias(&mut self, enabled: bool) {
        self.state.set_antialias(enabled);
        self.commands.push(DrawCommand::SetAntialias(enabled));
    }

    fn antialias(&self) -> bool {
        self.state.antialias()
    }

    fn clip_path(&mut self, path: &Path) {
        self.state.push_clip(path.bounds().unwrap_or(Rect::ZERO));
        self.commands.push(DrawCommand::ClipPath(path.clone()));
    }

    fn restore_clip(&mut self) {
        if !self.state.pop_clip() {
            tracing::warn!(target: "rounded_toolbar_render", "restore_clip without an active clip");
        }
        self.commands.push(DrawCommand::RestoreClip);
    }

    fn clip_bounds(&self) -> Option<Rect> {
        self.state.clip_bounds()
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.commands.push(DrawCommand::FillRect { rect, paint });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, paint: Paint) {
        self.commands.push(DrawCommand::FillRoundedRect { rect, paint });
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRoundedRect {
            rect,
            stroke: stroke.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::DrawLine {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Color) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_owned(),
            origin,
            color,
        });
    }
}
