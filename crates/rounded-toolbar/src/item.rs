//! The contract between a toolbar and the items it hosts.
//!
//! A toolbar never draws item contents itself. It owns each item, tells it
//! where it sits, flips its selection flag and asks it to draw. Anything that
//! implements [`ToolItem`] can be hosted; [`RoundedToolItem`] is the stock
//! implementation.
//!
//! [`RoundedToolItem`]: crate::RoundedToolItem

use rounded_toolbar_core::Signal;
use rounded_toolbar_render::{Rect, Renderer};
use slotmap::new_key_type;

use crate::error::ToolbarResult;
use crate::toolbar::RoundedToolbar;

new_key_type! {
    /// Stable handle to an item attached to a toolbar.
    ///
    /// Handles stay valid while the item is attached and are never reused
    /// for a different item afterwards.
    pub struct ItemId;
}

/// Payload of an item's `selection_changed` signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The item whose selection was set.
    pub item: ItemId,
    /// The selection value after the change.
    pub selected: bool,
}

/// Something a toolbar can ask to draw itself.
pub trait Drawable {
    /// Draw at horizontal offset `x`, filling `container_height`.
    ///
    /// `is_last` is true only for the rightmost item, which lets it round
    /// its right corners and skip its trailing separator.
    fn draw(&self, renderer: &mut dyn Renderer, x: f32, container_height: f32, is_last: bool);
}

/// An item hosted by a [`RoundedToolbar`].
///
/// Implementations report their preferred size and keep the bounds the
/// toolbar assigns to them. Selection is driven by the toolbar's input
/// handling; once attached, an item is only reachable through shared
/// references, so nothing else can flip it.
pub trait ToolItem: Drawable + Send {
    /// Whether the item is selected.
    fn selection(&self) -> bool;

    /// Set the selection flag. Called by the owning toolbar.
    fn set_selection(&mut self, selected: bool);

    /// Preferred width in pixels.
    fn width(&self) -> f32;

    /// Preferred height in pixels.
    fn height(&self) -> f32;

    /// Bounds last assigned by the toolbar, in toolbar coordinates.
    fn bounds(&self) -> Rect;

    /// Store the bounds assigned by the toolbar's layout pass.
    fn set_bounds(&mut self, bounds: Rect);

    /// Tooltip text, if the item has any.
    fn tooltip_text(&self) -> Option<&str>;

    /// Emitted after every `set_selection` the toolbar performs.
    ///
    /// Notifications are not deduplicated: a radio-mode click notifies
    /// every other item even if it was already unselected.
    fn selection_changed(&self) -> &Signal<SelectionChanged>;

    /// Hand the item to `toolbar`, appending it to the end of the row.
    ///
    /// # Errors
    ///
    /// Fails with [`Disposed`](crate::ToolbarError::Disposed) or
    /// [`WrongThread`](crate::ToolbarError::WrongThread) if the toolbar is
    /// not usable from here.
    fn attach(self, toolbar: &mut RoundedToolbar) -> ToolbarResult<ItemId>
    where
        Self: Sized + 'static,
    {
        toolbar.add_item(Box::new(self))
    }
}
