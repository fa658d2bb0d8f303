//! Rigid group dragging of selected shortcuts.
//!
//! Positions are always derived from the baseline captured at drag start plus the cumulative
//! delta, never accumulated move by move, so a group stays rigid however many move events arrive.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::{
    geometry::Point, model::ShortcutId, selection::SelectionController,
    shortcuts::ShortcutRegistry,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Gesture calls made out of order by the host.
pub enum GestureError {
    #[error("drag update received without an active drag session")]
    DragNotStarted,
    #[error("shortcut {0} was not captured when the drag started")]
    NotInBaseline(ShortcutId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Snapshot taken when a drag starts.
pub struct DragSession {
    /// Shortcut the pointer grabbed.
    pub anchor: ShortcutId,
    pub pointer_start: Point,
    /// Position of every shortcut present at drag start, selected or not.
    pub baseline: BTreeMap<ShortcutId, Point>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    /// Captures the baseline for every shortcut and opens a session anchored on `anchor`.
    pub fn start(&mut self, shortcuts: &ShortcutRegistry, anchor: ShortcutId, pointer: Point) {
        let baseline = shortcuts.positions();
        debug!(%anchor, captured = baseline.len(), "shortcut drag started");
        self.session = Some(DragSession {
            anchor,
            pointer_start: pointer,
            baseline,
        });
    }

    /// Moves the selected group so that `id` lands on `new_position`.
    ///
    /// Every selected shortcut is placed at its baseline plus `new_position - baseline[id]`.
    /// Unselected shortcuts never move.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::DragNotStarted`] without a session and
    /// [`GestureError::NotInBaseline`] when `id` was not captured. Positions are untouched on
    /// error.
    pub fn apply(
        &self,
        id: ShortcutId,
        new_position: Point,
        selection: &SelectionController,
        shortcuts: &mut ShortcutRegistry,
    ) -> Result<(), GestureError> {
        let session = self.session.as_ref().ok_or(GestureError::DragNotStarted)?;
        let origin = session
            .baseline
            .get(&id)
            .copied()
            .ok_or(GestureError::NotInBaseline(id))?;
        let delta = new_position - origin;

        for selected in selection.selected_ids() {
            if let Some(start) = session.baseline.get(selected) {
                shortcuts.set_position(*selected, *start + delta);
            }
        }
        Ok(())
    }

    /// Pointer-driven form of [`Self::apply`]: the anchor follows the pointer's travel since drag
    /// start.
    ///
    /// # Errors
    ///
    /// Same as [`Self::apply`].
    pub fn apply_pointer(
        &self,
        pointer: Point,
        selection: &SelectionController,
        shortcuts: &mut ShortcutRegistry,
    ) -> Result<(), GestureError> {
        let session = self.session.as_ref().ok_or(GestureError::DragNotStarted)?;
        let anchor_start = session
            .baseline
            .get(&session.anchor)
            .copied()
            .ok_or(GestureError::NotInBaseline(session.anchor))?;
        let target = anchor_start + (pointer - session.pointer_start);
        self.apply(session.anchor, target, selection, shortcuts)
    }

    /// Discards the baseline. Positions stay where the last update put them.
    pub fn end(&mut self) {
        if self.session.take().is_some() {
            debug!("shortcut drag ended");
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }
}
