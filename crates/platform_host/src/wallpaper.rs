//! Wallpaper provider contracts and the in-memory provider used by the desktop runtime.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable wallpaper as exposed by a provider.
pub struct WallpaperRecord {
    /// Stable wallpaper identifier.
    pub id: String,
    /// Renderer-facing source URL or asset path.
    pub src: String,
}

impl WallpaperRecord {
    /// Builds a record from an id and source.
    pub fn new(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
        }
    }
}

/// Host service that owns the wallpaper catalog and the current selection.
///
/// The desktop runtime only forwards ids and sources; it never validates or persists them.
pub trait WallpaperProvider {
    /// Lists every available wallpaper in display order.
    fn list(&self) -> Vec<WallpaperRecord>;

    /// Returns the currently selected wallpaper, if the catalog is not empty.
    fn current(&self) -> Option<WallpaperRecord>;

    /// Selects a wallpaper by id.
    ///
    /// Returns `false` and keeps the current selection when `id` is unknown.
    fn select_by_id(&self, id: &str) -> bool;
}

#[derive(Debug)]
struct MemoryWallpaperInner {
    records: Vec<WallpaperRecord>,
    current_id: Option<String>,
}

#[derive(Debug, Clone)]
/// In-memory wallpaper provider backed by an ordered record list.
///
/// Clones share the same catalog and selection.
pub struct MemoryWallpaperProvider {
    inner: Rc<RefCell<MemoryWallpaperInner>>,
}

impl MemoryWallpaperProvider {
    /// Creates a provider whose initial selection is the first record.
    pub fn new(records: Vec<WallpaperRecord>) -> Self {
        let current_id = records.first().map(|record| record.id.clone());
        Self {
            inner: Rc::new(RefCell::new(MemoryWallpaperInner {
                records,
                current_id,
            })),
        }
    }

    /// Creates a provider with `initial_id` selected, falling back to the first record when the
    /// id is unknown.
    pub fn with_selected(records: Vec<WallpaperRecord>, initial_id: &str) -> Self {
        let provider = Self::new(records);
        provider.select_by_id(initial_id);
        provider
    }
}

impl WallpaperProvider for MemoryWallpaperProvider {
    fn list(&self) -> Vec<WallpaperRecord> {
        self.inner.borrow().records.clone()
    }

    fn current(&self) -> Option<WallpaperRecord> {
        let inner = self.inner.borrow();
        let current_id = inner.current_id.as_deref()?;
        inner
            .records
            .iter()
            .find(|record| record.id == current_id)
            .cloned()
    }

    fn select_by_id(&self, id: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.records.iter().any(|record| record.id == id) {
            return false;
        }
        inner.current_id = Some(id.to_string());
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Wallpaper provider with an empty catalog, used by headless hosts and baseline tests.
pub struct NoopWallpaperProvider;

impl WallpaperProvider for NoopWallpaperProvider {
    fn list(&self) -> Vec<WallpaperRecord> {
        Vec::new()
    }

    fn current(&self) -> Option<WallpaperRecord> {
        None
    }

    fn select_by_id(&self, _id: &str) -> bool {
        false
    }
}
