//! Open windows, their stacking order, and the minimized set.
//!
//! Stacking is a plain list of ids with the front window last. A window's z-index is its 1-based
//! rank in that list, so z-order is always a pure function of the stack.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{
    geometry::Point,
    model::{OpenWindow, Shortcut, ShortcutId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of [`WindowManager::open_or_focus`].
pub enum OpenOutcome {
    /// A new window was created at the next cascade position.
    Opened,
    /// The window already existed and was brought to the front.
    Focused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Taskbar button data for one open window.
pub struct TaskbarEntry {
    pub id: ShortcutId,
    pub title: String,
    pub icon: String,
    pub minimized: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowManager {
    windows: Vec<OpenWindow>,
    stack: Vec<ShortcutId>,
    minimized: BTreeSet<ShortcutId>,
    last_window_position: Point,
    cascade_step: Point,
}

impl WindowManager {
    pub fn new(origin: Point, cascade_step: Point) -> Self {
        Self {
            windows: Vec::new(),
            stack: Vec::new(),
            minimized: BTreeSet::new(),
            last_window_position: origin,
            cascade_step,
        }
    }

    /// Opens a window for `shortcut`, or raises and restores the one already open for it.
    ///
    /// Accepts shortcuts outside the desktop registry, such as items launched from a folder
    /// window.
    pub fn open_or_focus(&mut self, shortcut: &Shortcut) -> OpenOutcome {
        if self.is_open(shortcut.id) {
            self.focus(shortcut.id);
            return OpenOutcome::Focused;
        }

        let position = self.last_window_position + self.cascade_step;
        self.windows.push(OpenWindow {
            id: shortcut.id,
            label: shortcut.label.clone(),
            icon: shortcut.icon.clone(),
            content: shortcut.content.clone(),
            position,
        });
        self.stack.push(shortcut.id);
        self.last_window_position = position;
        debug!(id = %shortcut.id, x = position.x, y = position.y, "window opened");
        OpenOutcome::Opened
    }

    /// Raises `id` to the front and un-minimizes it. Unknown ids are ignored.
    ///
    /// Returns whether the window exists.
    pub fn focus(&mut self, id: ShortcutId) -> bool {
        let Some(index) = self.stack.iter().position(|stacked| *stacked == id) else {
            return false;
        };
        let raised = self.stack.remove(index);
        self.stack.push(raised);
        self.minimized.remove(&id);
        true
    }

    /// Hides `id` without touching its stack slot. Unknown ids are ignored.
    pub fn minimize(&mut self, id: ShortcutId) -> bool {
        if !self.is_open(id) {
            return false;
        }
        self.minimized.insert(id);
        true
    }

    /// Brings a minimized window back; restoring also raises it.
    pub fn restore(&mut self, id: ShortcutId) -> bool {
        self.focus(id)
    }

    /// Removes `id` from the window list, the stack, and the minimized set.
    ///
    /// Idempotent: closing an unknown or already closed id changes nothing.
    pub fn close(&mut self, id: ShortcutId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|window| window.id != id);
        self.stack.retain(|stacked| *stacked != id);
        self.minimized.remove(&id);
        let closed = self.windows.len() != before;
        if closed {
            debug!(%id, "window closed");
        }
        closed
    }

    /// 1-based rank from the back of the stack.
    pub fn z_index(&self, id: ShortcutId) -> Option<u32> {
        self.stack
            .iter()
            .position(|stacked| *stacked == id)
            .map(|index| (index + 1) as u32)
    }

    pub fn is_open(&self, id: ShortcutId) -> bool {
        self.windows.iter().any(|window| window.id == id)
    }

    pub fn is_minimized(&self, id: ShortcutId) -> bool {
        self.minimized.contains(&id)
    }

    pub fn window(&self, id: ShortcutId) -> Option<&OpenWindow> {
        self.windows.iter().find(|window| window.id == id)
    }

    /// Open windows in creation order.
    pub fn windows(&self) -> &[OpenWindow] {
        &self.windows
    }

    /// Back-to-front stacking order.
    pub fn stack_order(&self) -> &[ShortcutId] {
        &self.stack
    }

    pub fn minimized(&self) -> &BTreeSet<ShortcutId> {
        &self.minimized
    }

    /// Front-most window, minimized or not.
    pub fn front_window(&self) -> Option<ShortcutId> {
        self.stack.last().copied()
    }

    /// Front-most window that is currently painted.
    pub fn focused_window(&self) -> Option<ShortcutId> {
        self.stack
            .iter()
            .rev()
            .copied()
            .find(|id| !self.minimized.contains(id))
    }

    pub fn last_window_position(&self) -> Point {
        self.last_window_position
    }

    /// Painted windows paired with their z-index, back to front.
    pub fn visible_windows(&self) -> Vec<(&OpenWindow, u32)> {
        self.stack
            .iter()
            .enumerate()
            .filter(|(_, id)| !self.minimized.contains(*id))
            .filter_map(|(index, id)| self.window(*id).map(|window| (window, (index + 1) as u32)))
            .collect()
    }

    /// One entry per open window in creation order, minimized ones included.
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        self.windows
            .iter()
            .map(|window| TaskbarEntry {
                id: window.id,
                title: window.label.clone(),
                icon: window.icon.clone(),
                minimized: self.minimized.contains(&window.id),
            })
            .collect()
    }
}
