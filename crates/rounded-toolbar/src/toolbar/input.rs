//! Pointer handling: selection on release, tooltips on hover.

use rounded_toolbar_core::logging::targets;

use super::RoundedToolbar;
use crate::events::{MouseButton, PointerHoverEvent, PointerReleaseEvent};
use crate::item::{ItemId, SelectionChanged};

impl RoundedToolbar {
    /// Toggle the item under the pointer. In radio mode every other item is
    /// deselected first, and notified whether or not it was selected.
    #[tracing::instrument(
        skip_all,
        target = "rounded_toolbar::input",
        level = "trace",
        fields(x = event.local_pos.x, y = event.local_pos.y)
    )]
    pub(super) fn handle_pointer_release(&mut self, event: &PointerReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        let Some(hit) = self.registry.item_at(event.local_pos) else {
            tracing::trace!(target: targets::INPUT, "release missed every item");
            return false;
        };

        if !self.multi_selection {
            self.select_only(hit);
        }

        let toggled = self
            .registry
            .item(hit)
            .is_some_and(|item| !item.selection());
        self.apply_selection(hit, toggled);

        tracing::debug!(
            target: targets::INPUT,
            item = ?hit,
            selected = toggled,
            multi_selection = self.multi_selection,
            "item toggled"
        );

        self.parent.request_redraw();
        true
    }

    /// Show the hovered item's tooltip. A miss leaves the tooltip alone.
    pub(super) fn handle_pointer_hover(&mut self, event: &PointerHoverEvent) -> bool {
        let hovered = self
            .registry
            .item_at(event.local_pos)
            .and_then(|id| self.registry.item(id));

        match hovered {
            Some(item) => {
                self.tooltip_text = item.tooltip_text().unwrap_or_default().to_owned();
                true
            }
            None => false,
        }
    }

    /// Deselect every item except `keep`, notifying each one.
    pub(super) fn select_only(&mut self, keep: ItemId) {
        // Snapshot so slots never observe a half-updated sequence.
        let ids = self.registry.ids().to_vec();
        for id in ids.into_iter().filter(|&id| id != keep) {
            self.apply_selection(id, false);
        }
    }

    fn apply_selection(&mut self, id: ItemId, selected: bool) {
        if let Some(item) = self.registry.item_mut(id) {
            item.set_selection(selected);
            item.selection_changed()
                .emit(SelectionChanged { item: id, selected });
        }
    }
}
