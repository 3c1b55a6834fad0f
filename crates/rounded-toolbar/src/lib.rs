//! A toolbar container with rounded corners and a vertical gradient.
//!
//! [`RoundedToolbar`] hosts a horizontal row of [`ToolItem`]s. It lays them
//! out edge to edge, paints its background and border through a
//! [`Renderer`](rounded_toolbar_render::Renderer), and turns pointer releases
//! into selection changes, in radio mode or multi-selection mode.
//!
//! The toolbar is owned by a [`HostSurface`] and may only be used from that
//! surface's UI thread. Every entry point returns a [`ToolbarResult`].
//!
//! # Quick start
//!
//! ```
//! use rounded_toolbar::prelude::*;
//! use rounded_toolbar::render::RecordingRenderer;
//!
//! let surface = HostSurface::new();
//! let mut toolbar = RoundedToolbar::new(&surface, StyleFlags::NONE)?;
//!
//! let bold = RoundedToolItem::new("B").with_tooltip("Bold").attach(&mut toolbar)?;
//! RoundedToolItem::new("I").with_tooltip("Italic").attach(&mut toolbar)?;
//!
//! toolbar.item_ref(bold)?.selection_changed().connect(|change| {
//!     println!("bold is now {}", change.selected);
//! });
//!
//! let preferred = toolbar.compute_size(-1.0, -1.0)?;
//! toolbar.set_size(preferred)?;
//!
//! let mut renderer = RecordingRenderer::new();
//! toolbar.paint(&mut renderer)?;
//! # Ok::<(), rounded_toolbar::ToolbarError>(())
//! ```

mod config;
mod error;
mod events;
mod item;
mod style;
mod surface;
mod tool_item;
mod toolbar;

pub use config::{
    DEFAULT_BORDER_COLOR, DEFAULT_CORNER_RADIUS, DEFAULT_END_GRADIENT_COLOR,
    DEFAULT_START_GRADIENT_COLOR, ToolbarConfig,
};
pub use error::{ToolbarError, ToolbarResult};
pub use events::{
    MouseButton, PointerHoverEvent, PointerReleaseEvent, ResizeEvent, ToolbarEvent,
};
pub use item::{Drawable, ItemId, SelectionChanged, ToolItem};
pub use style::StyleFlags;
pub use surface::HostSurface;
pub use tool_item::{RoundedToolItem, ToolItemStyle};
pub use toolbar::RoundedToolbar;

/// Notification primitives needed to implement [`ToolItem`].
pub use rounded_toolbar_core::{ConnectionId, Signal};

/// Re-export of the render crate.
pub use rounded_toolbar_render as render;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        Drawable, HostSurface, ItemId, MouseButton, PointerHoverEvent, PointerReleaseEvent,
        RoundedToolItem, RoundedToolbar, SelectionChanged, Signal, StyleFlags, ToolItem,
        ToolbarConfig, ToolbarError, ToolbarEvent, ToolbarResult,
    };
}
