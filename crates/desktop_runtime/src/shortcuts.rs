//! Ordered registry of desktop shortcuts.

use std::collections::BTreeMap;

use crate::{
    catalog,
    geometry::Point,
    model::{ContentPayload, Shortcut, ShortcutId},
};

#[derive(Debug, Clone, PartialEq, Default)]
/// Desktop icons in catalog order. Entries are never added or removed after startup.
pub struct ShortcutRegistry {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutRegistry {
    pub fn new(shortcuts: Vec<Shortcut>) -> Self {
        Self { shortcuts }
    }

    pub fn from_catalog() -> Self {
        Self::new(catalog::builtin_shortcuts())
    }

    /// Binds `content` to every shortcut labelled `label`.
    ///
    /// Returns whether any shortcut matched.
    pub fn inject_content(&mut self, label: &str, content: ContentPayload) -> bool {
        let mut matched = false;
        for shortcut in self.shortcuts.iter_mut().filter(|s| s.label == label) {
            shortcut.content = Some(content.clone());
            matched = true;
        }
        matched
    }

    pub fn get(&self, id: ShortcutId) -> Option<&Shortcut> {
        self.shortcuts.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shortcut> {
        self.shortcuts.iter()
    }

    pub fn position(&self, id: ShortcutId) -> Option<Point> {
        self.get(id).map(|s| s.position)
    }

    /// Moves a shortcut. Returns `false` for unknown ids.
    pub fn set_position(&mut self, id: ShortcutId, position: Point) -> bool {
        match self.shortcuts.iter_mut().find(|s| s.id == id) {
            Some(shortcut) => {
                shortcut.position = position;
                true
            }
            None => false,
        }
    }

    /// Snapshot of every shortcut's current position.
    pub fn positions(&self) -> BTreeMap<ShortcutId, Point> {
        self.shortcuts.iter().map(|s| (s.id, s.position)).collect()
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}
