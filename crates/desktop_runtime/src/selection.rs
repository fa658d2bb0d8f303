//! Rubber-band selection over the desktop content surface.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{
    geometry::{Point, SelectionRect},
    model::ShortcutId,
    shortcuts::ShortcutRegistry,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Selected shortcut ids plus the rubber-band rectangle while a gesture is in progress.
pub struct SelectionController {
    selected: BTreeSet<ShortcutId>,
    origin: Option<Point>,
    selection_box: Option<SelectionRect>,
}

impl SelectionController {
    /// Starts a rubber-band gesture at `origin`, dropping the previous selection.
    pub fn begin(&mut self, origin: Point) {
        self.selected.clear();
        self.origin = Some(origin);
        self.selection_box = Some(SelectionRect::at(origin));
        debug!(x = origin.x, y = origin.y, "selection gesture started");
    }

    /// Stretches the rectangle to `current` and recomputes the selection from scratch.
    ///
    /// Does nothing when no gesture is in progress.
    pub fn update(&mut self, current: Point, shortcuts: &ShortcutRegistry) {
        let Some(origin) = self.origin else {
            return;
        };

        let rect = SelectionRect::spanning(origin, current);
        self.selection_box = Some(rect);
        self.selected = shortcuts
            .iter()
            .filter(|shortcut| rect.contains(shortcut.position))
            .map(|shortcut| shortcut.id)
            .collect();
    }

    /// Finishes the gesture. The selection made so far is kept.
    pub fn end(&mut self) {
        if self.origin.take().is_some() {
            debug!(selected = self.selected.len(), "selection gesture ended");
        }
        self.selection_box = None;
    }

    /// Replaces the selection with a single shortcut.
    pub fn select_only(&mut self, id: ShortcutId) {
        self.selected.clear();
        self.selected.insert(id);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: ShortcutId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_ids(&self) -> &BTreeSet<ShortcutId> {
        &self.selected
    }

    pub fn selection_box(&self) -> Option<SelectionRect> {
        self.selection_box
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}
