//! Built-in desktop catalog: the shortcuts placed at startup and the bundled wallpapers.

use std::sync::OnceLock;

use platform_host::{MemoryWallpaperProvider, WallpaperRecord};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    geometry::Point,
    model::{ContentPayload, Shortcut, ShortcutId},
};

include!(concat!(env!("OUT_DIR"), "/desktop_catalog_generated.rs"));

#[derive(Debug, Clone, Deserialize)]
struct ShortcutCatalogEntry {
    id: u32,
    label: String,
    icon: String,
    x: i32,
    y: i32,
    in_folder: bool,
    content: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct DesktopCatalog {
    default_wallpaper: String,
    shortcuts: Vec<ShortcutCatalogEntry>,
    wallpapers: Vec<WallpaperRecord>,
}

fn catalog() -> &'static DesktopCatalog {
    static CATALOG: OnceLock<DesktopCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(DESKTOP_CATALOG_JSON)
            .expect("generated desktop catalog should parse")
    })
}

/// Shortcuts placed on the desktop at startup, in catalog order.
pub fn builtin_shortcuts() -> Vec<Shortcut> {
    catalog()
        .shortcuts
        .iter()
        .map(|entry| Shortcut {
            id: ShortcutId(entry.id),
            label: entry.label.clone(),
            icon: entry.icon.clone(),
            content: entry.content.clone().map(ContentPayload::new),
            position: Point::new(entry.x, entry.y),
            in_folder: entry.in_folder,
        })
        .collect()
}

pub fn builtin_wallpapers() -> Vec<WallpaperRecord> {
    catalog().wallpapers.clone()
}

pub fn default_wallpaper_id() -> &'static str {
    &catalog().default_wallpaper
}

/// Wallpaper provider preloaded with the bundled wallpapers and the default selection.
pub fn builtin_wallpaper_provider() -> MemoryWallpaperProvider {
    MemoryWallpaperProvider::with_selected(builtin_wallpapers(), default_wallpaper_id())
}
