//! Typed host-side contracts consumed by the desktop runtime.
//!
//! The runtime core never talks to the browser directly. Wallpaper catalogs and wall-clock time
//! come through this crate so that the engine stays testable off-target.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod time;
pub mod wallpaper;

pub use time::{elapsed_ms, unix_time_ms_now};
pub use wallpaper::{
    MemoryWallpaperProvider, NoopWallpaperProvider, WallpaperProvider, WallpaperRecord,
};
