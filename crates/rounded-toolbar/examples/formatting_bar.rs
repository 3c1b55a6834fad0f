//! Formatting bar demo.
//!
//! Builds a three-item toolbar from a TOML configuration, feeds it a few
//! pointer events and prints the draw commands a platform backend would
//! replay.
//!
//! Run with: `RUST_LOG=rounded_toolbar=debug cargo run -p rounded-toolbar --example formatting_bar`

use rounded_toolbar::prelude::*;
use rounded_toolbar::render::RecordingRenderer;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
corner_radius = 6
multi_selection = true
border_color = [80, 80, 80]
"#;

fn main() -> Result<(), ToolbarError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ToolbarConfig::from_toml_str(CONFIG)?;
    let surface = HostSurface::new();
    let mut toolbar = RoundedToolbar::with_config(&surface, StyleFlags::NONE, config)?;

    for (label, tooltip) in [("B", "Bold"), ("I", "Italic"), ("U", "Underline")] {
        let id = RoundedToolItem::new(label)
            .with_tooltip(tooltip)
            .with_width(32.0)
            .with_corner_radius(6.0)
            .attach(&mut toolbar)?;
        toolbar
            .item_ref(id)?
            .selection_changed()
            .connect(move |change| println!("{tooltip}: selected = {}", change.selected));
    }

    let preferred = toolbar.compute_size(-1.0, -1.0)?;
    toolbar.set_size(preferred)?;

    toolbar.event(&PointerHoverEvent::new((40.0, 10.0)).into())?;
    println!("tooltip: {}", toolbar.tooltip_text()?);

    toolbar.event(&PointerReleaseEvent::new(MouseButton::Left, (5.0, 10.0)).into())?;
    toolbar.event(&PointerReleaseEvent::new(MouseButton::Left, (70.0, 10.0)).into())?;

    println!("coalesced redraws: {}", surface.take_redraw_requests());

    let mut renderer = RecordingRenderer::new();
    toolbar.paint(&mut renderer)?;
    for command in renderer.commands() {
        println!("{command:?}");
    }

    toolbar.dispose()
}
