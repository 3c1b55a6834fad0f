//! Painting: rounded gradient background, border, then each item.

use rounded_toolbar_core::logging::targets;
use rounded_toolbar_render::{
    CornerRadii, LinearGradient, Path, Rect, Renderer, RoundedRect, Stroke,
};

use super::RoundedToolbar;
use crate::error::ToolbarResult;

impl RoundedToolbar {
    /// Paint the toolbar into `renderer`.
    ///
    /// Reads state only, so painting twice without changes in between
    /// produces the same drawing.
    #[tracing::instrument(skip_all, target = "rounded_toolbar::paint", level = "trace")]
    pub fn paint(&self, renderer: &mut dyn Renderer) -> ToolbarResult<()> {
        self.check_widget()?;

        let bounds = Rect::from_size(self.size);
        self.paint_background(renderer, bounds);
        self.paint_items(renderer, bounds.height());
        Ok(())
    }

    fn paint_background(&self, renderer: &mut dyn Renderer, bounds: Rect) {
        let radius = self.corner_radius as f32;
        renderer.set_antialias(true);

        renderer.clip_path(&Path::rounded_rect(bounds, CornerRadii::uniform(radius)));

        let gradient =
            LinearGradient::vertical(bounds, self.start_gradient_color, self.end_gradient_color);
        renderer.fill_rect(bounds, gradient.into());

        // Inset by one pixel on the right and bottom so the stroke stays inside.
        let outline = Rect::new(0.0, 0.0, bounds.width() - 1.0, bounds.height() - 1.0);
        renderer.stroke_rounded_rect(
            RoundedRect::new(outline, radius),
            &Stroke::new(self.border_color, 1.0),
        );

        renderer.restore_clip();
    }

    fn paint_items(&self, renderer: &mut dyn Renderer, height: f32) {
        let count = self.registry.count();
        let mut x = 0.0;
        for (index, (_, item)) in self.registry.iter().enumerate() {
            item.draw(renderer, x, height, index + 1 == count);
            x += item.width();
        }
        tracing::trace!(target: targets::PAINT, count, "items painted");
    }
}

#[cfg(test)]
mod tests {
    use rounded_toolbar_render::{
        Color, CornerRadii, DrawCommand, LinearGradient, Paint, Path, RecordingRenderer, Rect,
        RoundedRect, Size, Stroke,
    };

    use crate::error::ToolbarError;
    use crate::events::{MouseButton, PointerReleaseEvent};
    use crate::item::ToolItem;
    use crate::style::StyleFlags;
    use crate::surface::HostSurface;
    use crate::tool_item::RoundedToolItem;
    use crate::toolbar::RoundedToolbar;

    #[test]
    fn test_background_sequence() {
        let surface = HostSurface::new();
        let mut toolbar = RoundedToolbar::new(&surface, StyleFlags::NONE).unwrap();
        toolbar.set_size(Size::new(120.0, 25.0)).unwrap();

        let mut renderer = RecordingRenderer::new();
        toolbar.paint(&mut renderer).unwrap();

        let bounds = Rect::new(0.0, 0.0, 120.0, 25.0);
        let start = Color::from_rgb8(245, 245, 245);
        let end = Color::from_rgb8(185, 185, 185);
        let border = Color::from_rgb8(66, 66, 66);

        assert_eq!(
            renderer.commands(),
            &[
                DrawCommand::SetAntialias(true),
                DrawCommand::ClipPath(Path::rounded_rect(bounds, CornerRadii::uniform(8.0))),
                DrawCommand::FillRect {
                    rect: bounds,
                    paint: Paint::from(LinearGradient::vertical(bounds, start, end)),
                },
                DrawCommand::StrokeRoundedRect {
                    rect: RoundedRect::new(Rect::new(0.0, 0.0, 119.0, 24.0), 8.0),
                    stroke: Stroke::new(border, 1.0),
                },
                DrawCommand::RestoreClip,
            ]
        );
        assert_eq!(renderer.clip_depth(), 0);
    }

    #[test]
    fn test_items_painted_after_clip_released() {
        let surface = HostSurface::new();
        let mut toolbar = RoundedToolbar::new(&surface, StyleFlags::NONE).unwrap();
        RoundedToolItem::new("A").with_width(30.0).attach(&mut toolbar).unwrap();
        RoundedToolItem::new("B").with_width(40.0).attach(&mut toolbar).unwrap();
        toolbar.set_size(Size::new(70.0, 24.0)).unwrap();

        let mut renderer = RecordingRenderer::new();
        toolbar.paint(&mut renderer).unwrap();

        let commands = renderer.commands();
        let restore = commands
            .iter()
            .position(|cmd| *cmd == DrawCommand::RestoreClip)
            .unwrap();
        let texts: Vec<&str> = commands[restore..]
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["A", "B"]);

        // Only the first item gets a trailing separator.
        let separators = commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::DrawLine { .. }))
            .count();
        assert_eq!(separators, 1);
    }

    #[test]
    fn test_paint_is_repeatable() {
        let surface = HostSurface::new();
        let mut toolbar = RoundedToolbar::new(&surface, StyleFlags::NONE).unwrap();
        RoundedToolItem::new("A").with_width(30.0).attach(&mut toolbar).unwrap();
        toolbar.set_size(Size::new(30.0, 24.0)).unwrap();
        let release = PointerReleaseEvent::new(MouseButton::Left, (5.0, 5.0));
        assert!(toolbar.event(&release.into()).unwrap());

        let mut first = RecordingRenderer::new();
        let mut second = RecordingRenderer::new();
        toolbar.paint(&mut first).unwrap();
        toolbar.paint(&mut second).unwrap();
        assert_eq!(first.commands(), second.commands());
        assert!(first
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, DrawCommand::FillRoundedRect { .. })));
    }

    #[test]
    fn test_paint_after_dispose() {
        let surface = HostSurface::new();
        let mut toolbar = RoundedToolbar::new(&surface, StyleFlags::NONE).unwrap();
        toolbar.dispose().unwrap();

        let mut renderer = RecordingRenderer::new();
        assert!(matches!(toolbar.paint(&mut renderer), Err(ToolbarError::Disposed)));
        assert!(renderer.commands().is_empty());
    }
}
