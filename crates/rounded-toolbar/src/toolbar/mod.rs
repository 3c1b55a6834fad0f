//! The rounded toolbar container.
//!
//! [`RoundedToolbar`] lays a row of [`ToolItem`]s out left to right, paints a
//! rounded gradient background behind them and turns pointer releases into
//! selection changes.
//!
//! # Selection modes
//!
//! - Radio mode (the default): releasing over an item deselects every other
//!   item, then toggles the one under the pointer.
//! - Multi-selection mode: releasing over an item toggles only that item.
//!
//! Attaching an item that is already selected counts as selecting it, so in
//! radio mode the other items are deselected and notified.
//!
//! # Example
//!
//! ```
//! use rounded_toolbar::{
//!     HostSurface, MouseButton, PointerReleaseEvent, RoundedToolItem, RoundedToolbar,
//!     StyleFlags, ToolItem,
//! };
//!
//! let surface = HostSurface::new();
//! let mut toolbar = RoundedToolbar::new(&surface, StyleFlags::NONE).unwrap();
//!
//! for (label, width) in [("Left", 30.0), ("Center", 40.0), ("Right", 50.0)] {
//!     RoundedToolItem::new(label).with_width(width).attach(&mut toolbar).unwrap();
//! }
//!
//! let release = PointerReleaseEvent::new(MouseButton::Left, (35.0, 10.0));
//! toolbar.event(&release.into()).unwrap();
//!
//! let center = toolbar.item(1).unwrap();
//! assert!(toolbar.item_ref(center).unwrap().selection());
//! ```

mod input;
mod painter;
mod registry;

use rounded_toolbar_core::logging::targets;
use rounded_toolbar_core::ThreadAffinity;
use rounded_toolbar_render::{Color, Point, Size};

use crate::config::ToolbarConfig;
use crate::error::{ToolbarError, ToolbarResult};
use crate::events::ToolbarEvent;
use crate::item::{ItemId, ToolItem};
use crate::style::StyleFlags;
use crate::surface::HostSurface;

use self::registry::ItemRegistry;

/// A horizontal row of selectable items on a rounded gradient background.
///
/// Every public method checks that the toolbar is alive and that it is being
/// called on the UI thread of its parent surface before doing anything else.
#[derive(Debug)]
pub struct RoundedToolbar {
    parent: HostSurface,
    affinity: ThreadAffinity,
    style: StyleFlags,
    registry: ItemRegistry,
    multi_selection: bool,
    corner_radius: u32,
    start_gradient_color: Color,
    end_gradient_color: Color,
    border_color: Color,
    size: Size,
    tooltip_text: String,
    disposed: bool,
}

static_assertions::assert_impl_all!(RoundedToolbar: Send);

impl RoundedToolbar {
    /// Create a toolbar on `parent` with default colors and radius.
    ///
    /// # Errors
    ///
    /// [`ToolbarError::InvalidArgument`] if `parent` has been disposed,
    /// [`ToolbarError::WrongThread`] off the parent's UI thread.
    pub fn new(parent: &HostSurface, style: StyleFlags) -> ToolbarResult<Self> {
        Self::with_config(parent, style, ToolbarConfig::default())
    }

    /// Create a toolbar with a custom corner radius and default colors.
    pub fn with_corner_radius(
        parent: &HostSurface,
        style: StyleFlags,
        corner_radius: u32,
    ) -> ToolbarResult<Self> {
        Self::with_config(
            parent,
            style,
            ToolbarConfig::default().with_corner_radius(corner_radius),
        )
    }

    /// Create a toolbar from a full configuration.
    pub fn with_config(
        parent: &HostSurface,
        style: StyleFlags,
        config: ToolbarConfig,
    ) -> ToolbarResult<Self> {
        if parent.is_disposed() {
            return Err(ToolbarError::invalid_argument("parent surface has been disposed"));
        }
        let affinity = parent.affinity();
        affinity.check().map_err(ToolbarError::WrongThread)?;

        let (start_gradient_color, end_gradient_color, border_color) = config.colors();
        let style = style | StyleFlags::DOUBLE_BUFFERED;

        tracing::debug!(
            target: targets::TOOLBAR,
            corner_radius = config.corner_radius,
            multi_selection = config.multi_selection,
            style = style.bits(),
            "toolbar created"
        );

        Ok(Self {
            parent: parent.clone(),
            affinity,
            style,
            registry: ItemRegistry::new(),
            multi_selection: config.multi_selection,
            corner_radius: config.corner_radius,
            start_gradient_color,
            end_gradient_color,
            border_color,
            size: Size::ZERO,
            tooltip_text: String::new(),
            disposed: false,
        })
    }

    /// Fail unless the toolbar is alive and on its UI thread.
    fn check_widget(&self) -> ToolbarResult<()> {
        if self.disposed || self.parent.is_disposed() {
            return Err(ToolbarError::Disposed);
        }
        self.affinity.check().map_err(ToolbarError::WrongThread)
    }

    // =========================================================================
    // Items
    // =========================================================================

    pub(crate) fn add_item(&mut self, item: Box<dyn ToolItem>) -> ToolbarResult<ItemId> {
        self.check_widget()?;
        let preselected = item.selection();
        let id = self.registry.add(item);
        tracing::debug!(target: targets::REGISTRY, ?id, count = self.registry.count(), "item attached");
        if preselected && !self.multi_selection {
            self.select_only(id);
        }
        self.layout_items();
        self.parent.request_redraw();
        Ok(id)
    }

    pub(crate) fn remove_item(&mut self, id: ItemId) -> ToolbarResult<Option<Box<dyn ToolItem>>> {
        self.check_widget()?;
        let removed = self.registry.remove(id);
        if removed.is_some() {
            tracing::debug!(target: targets::REGISTRY, ?id, count = self.registry.count(), "item disposed");
            self.layout_items();
            self.parent.request_redraw();
        }
        Ok(removed)
    }

    /// Detach an item and hand it back. Later items shift left by one.
    ///
    /// # Errors
    ///
    /// [`ToolbarError::InvalidArgument`] if `id` is not attached here.
    pub fn dispose_item(&mut self, id: ItemId) -> ToolbarResult<Box<dyn ToolItem>> {
        self.remove_item(id)?
            .ok_or_else(|| ToolbarError::invalid_argument("item is not attached to this toolbar"))
    }

    /// The item at `index`, counting from the left.
    ///
    /// # Errors
    ///
    /// [`ToolbarError::InvalidArgument`] unless `index < item_count()`.
    pub fn item(&self, index: usize) -> ToolbarResult<ItemId> {
        self.check_widget()?;
        self.registry.get(index)
    }

    /// The first item whose bounds contain `point`, if any.
    pub fn item_at(&self, point: impl Into<Point>) -> ToolbarResult<Option<ItemId>> {
        self.check_widget()?;
        Ok(self.registry.item_at(point.into()))
    }

    /// Number of attached items.
    pub fn item_count(&self) -> ToolbarResult<usize> {
        self.check_widget()?;
        Ok(self.registry.count())
    }

    /// Every attached item, left to right. The returned list is a copy.
    pub fn items(&self) -> ToolbarResult<Vec<ItemId>> {
        self.check_widget()?;
        Ok(self.registry.ids().to_vec())
    }

    /// Position of `id` in the row, or `None` if it is not attached here.
    pub fn index_of(&self, id: ItemId) -> ToolbarResult<Option<usize>> {
        self.check_widget()?;
        Ok(self.registry.index_of(id))
    }

    /// Shared access to an attached item.
    ///
    /// # Errors
    ///
    /// [`ToolbarError::InvalidArgument`] if `id` is not attached here.
    pub fn item_ref(&self, id: ItemId) -> ToolbarResult<&dyn ToolItem> {
        self.check_widget()?;
        self.registry
            .item(id)
            .ok_or_else(|| ToolbarError::invalid_argument("item is not attached to this toolbar"))
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Preferred size: the items' summed width by their tallest height,
    /// raised to the hints when a hint is larger.
    pub fn compute_size(&self, width_hint: f32, height_hint: f32) -> ToolbarResult<Size> {
        self.check_widget()?;
        let preferred = self.registry.preferred_size();
        Ok(Size::new(
            preferred.width.max(width_hint),
            preferred.height.max(height_hint),
        ))
    }

    /// Current size as assigned by the platform.
    pub fn size(&self) -> ToolbarResult<Size> {
        self.check_widget()?;
        Ok(self.size)
    }

    /// Assign a new size and lay the items out again.
    pub fn set_size(&mut self, size: Size) -> ToolbarResult<()> {
        self.check_widget()?;
        self.size = size;
        self.layout_items();
        self.parent.request_redraw();
        Ok(())
    }

    /// Items span the toolbar's height, or their own preferred height while
    /// the toolbar has not been sized yet.
    fn layout_items(&mut self) {
        let height = if self.size.height > 0.0 {
            self.size.height
        } else {
            self.registry.preferred_size().height
        };
        self.registry.layout(height);
        tracing::trace!(target: targets::TOOLBAR, height, count = self.registry.count(), "layout");
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Radius of the rounded corners, in pixels.
    pub fn corner_radius(&self) -> ToolbarResult<u32> {
        self.check_widget()?;
        Ok(self.corner_radius)
    }

    /// Change the corner radius. Takes effect on the next paint.
    pub fn set_corner_radius(&mut self, radius: u32) -> ToolbarResult<()> {
        self.check_widget()?;
        if self.corner_radius != radius {
            self.corner_radius = radius;
            self.parent.request_redraw();
        }
        Ok(())
    }

    /// Top color of the background gradient.
    pub fn start_gradient_color(&self) -> ToolbarResult<Color> {
        self.check_widget()?;
        Ok(self.start_gradient_color)
    }

    /// Bottom color of the background gradient.
    pub fn end_gradient_color(&self) -> ToolbarResult<Color> {
        self.check_widget()?;
        Ok(self.end_gradient_color)
    }

    /// Border color.
    pub fn border_color(&self) -> ToolbarResult<Color> {
        self.check_widget()?;
        Ok(self.border_color)
    }

    /// Whether several items may be selected at once.
    pub fn is_multi_selection(&self) -> ToolbarResult<bool> {
        self.check_widget()?;
        Ok(self.multi_selection)
    }

    /// Switch selection mode. Existing selections are left as they are.
    pub fn set_multi_selection(&mut self, multi: bool) -> ToolbarResult<()> {
        self.check_widget()?;
        if self.multi_selection != multi {
            tracing::debug!(target: targets::INPUT, multi_selection = multi, "selection mode changed");
            self.multi_selection = multi;
        }
        Ok(())
    }

    /// Tooltip of the last item hovered, or empty.
    pub fn tooltip_text(&self) -> ToolbarResult<&str> {
        self.check_widget()?;
        Ok(&self.tooltip_text)
    }

    /// Style flags, with [`StyleFlags::DOUBLE_BUFFERED`] always set.
    pub fn style(&self) -> ToolbarResult<StyleFlags> {
        self.check_widget()?;
        Ok(self.style)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Dispatch a platform event.
    ///
    /// Returns `true` if the event changed the toolbar's state.
    pub fn event(&mut self, event: &ToolbarEvent) -> ToolbarResult<bool> {
        self.check_widget()?;
        let handled = match event {
            ToolbarEvent::PointerRelease(e) => self.handle_pointer_release(e),
            ToolbarEvent::PointerHover(e) => self.handle_pointer_hover(e),
            ToolbarEvent::Resize(e) => {
                self.size = e.size;
                self.layout_items();
                self.parent.request_redraw();
                true
            }
        };
        Ok(handled)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Dispose the toolbar and drop every item. Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// [`ToolbarError::WrongThread`] off the UI thread.
    pub fn dispose(&mut self) -> ToolbarResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.affinity.check().map_err(ToolbarError::WrongThread)?;
        self.registry.clear();
        self.disposed = true;
        tracing::debug!(target: targets::TOOLBAR, "toolbar disposed");
        Ok(())
    }

    /// Whether the toolbar, or its parent surface, has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.disposed || self.parent.is_disposed()
    }
}
