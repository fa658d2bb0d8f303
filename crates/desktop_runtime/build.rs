use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShortcutEntry {
    id: u32,
    label: String,
    icon: String,
    x: i32,
    y: i32,
    #[serde(default)]
    in_folder: bool,
    #[serde(default)]
    content: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WallpaperEntry {
    id: String,
    src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopCatalog {
    schema_version: u32,
    default_wallpaper: String,
    shortcuts: Vec<ShortcutEntry>,
    wallpapers: Vec<WallpaperEntry>,
}

fn validate(catalog: &DesktopCatalog, path: &str) {
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {path}: expected 1 found {}",
            catalog.schema_version
        );
    }

    let mut ids = BTreeSet::new();
    for shortcut in &catalog.shortcuts {
        if !ids.insert(shortcut.id) {
            panic!("duplicate shortcut id {} in {path}", shortcut.id);
        }
        if shortcut.label.trim().is_empty() {
            panic!("shortcut {} in {path} has an empty label", shortcut.id);
        }
    }

    if catalog.wallpapers.is_empty() {
        panic!("{path} must declare at least one wallpaper");
    }
    if !catalog
        .wallpapers
        .iter()
        .any(|wallpaper| wallpaper.id == catalog.default_wallpaper)
    {
        panic!(
            "default wallpaper `{}` in {path} is not declared",
            catalog.default_wallpaper
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog").join("desktop.catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: DesktopCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    let json = serde_json::to_string_pretty(&catalog).expect("serialize desktop catalog");
    let generated = format!(
        "/// Build-time generated desktop catalog JSON.\n\
pub const DESKTOP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
