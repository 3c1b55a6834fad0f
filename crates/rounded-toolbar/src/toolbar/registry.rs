//! Ordered storage for the items a toolbar owns.

use rounded_toolbar_render::{Point, Rect, Size};
use slotmap::SlotMap;

use crate::error::{ToolbarError, ToolbarResult};
use crate::item::{ItemId, ToolItem};

/// Items in insertion order.
///
/// The slot map owns the items; `order` is the left-to-right sequence. The
/// two always hold the same set of ids.
#[derive(Default)]
pub(crate) struct ItemRegistry {
    items: SlotMap<ItemId, Box<dyn ToolItem>>,
    order: Vec<ItemId>,
}

impl ItemRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append an item, returning its handle.
    pub(crate) fn add(&mut self, item: Box<dyn ToolItem>) -> ItemId {
        let id = self.items.insert(item);
        self.order.push(id);
        id
    }

    /// Remove an item, preserving the order of the rest.
    pub(crate) fn remove(&mut self, id: ItemId) -> Option<Box<dyn ToolItem>> {
        let item = self.items.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(item)
    }

    /// Drop every item.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }

    pub(crate) fn count(&self) -> usize {
        self.order.len()
    }

    /// The item at `index`, counting from the left.
    pub(crate) fn get(&self, index: usize) -> ToolbarResult<ItemId> {
        self.order.get(index).copied().ok_or_else(|| {
            ToolbarError::invalid_argument(format!(
                "item index {index} out of range for {} items",
                self.order.len()
            ))
        })
    }

    /// The first item whose bounds contain `point`.
    pub(crate) fn item_at(&self, point: Point) -> Option<ItemId> {
        self.iter()
            .find(|(_, item)| item.bounds().contains(point))
            .map(|(id, _)| id)
    }

    pub(crate) fn index_of(&self, id: ItemId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    pub(crate) fn ids(&self) -> &[ItemId] {
        &self.order
    }

    pub(crate) fn item(&self, id: ItemId) -> Option<&dyn ToolItem> {
        self.items.get(id).map(|item| &**item)
    }

    pub(crate) fn item_mut(&mut self, id: ItemId) -> Option<&mut (dyn ToolItem + 'static)> {
        self.items.get_mut(id).map(|item| &mut **item)
    }

    /// Items in left-to-right order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (ItemId, &(dyn ToolItem + 'static))> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.items.get(id).map(|item| (id, &**item)))
    }

    /// Sum of widths by tallest height.
    pub(crate) fn preferred_size(&self) -> Size {
        self.iter().fold(Size::ZERO, |acc, (_, item)| {
            Size::new(acc.width + item.width(), acc.height.max(item.height()))
        })
    }

    /// Lay the items out left to right, each `height` tall.
    pub(crate) fn layout(&mut self, height: f32) {
        let mut x = 0.0;
        for &id in &self.order {
            if let Some(item) = self.items.get_mut(id) {
                let width = item.width();
                item.set_bounds(Rect::new(x, 0.0, width, height));
                x += width;
            }
        }
    }
}

impl std::fmt::Debug for ItemRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemRegistry")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
