//! Per-frame render input derived from [`DesktopState`].
//!
//! A frame is a read-only projection. The rendering layer consumes it and reports user input back
//! as [`crate::DesktopAction`] values; nothing here is ever written back into state.

use platform_host::WallpaperRecord;
use serde::Serialize;

use crate::{
    geometry::{Point, SelectionRect},
    model::{ContentPayload, DesktopState, ShortcutId},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortcutView {
    pub id: ShortcutId,
    pub label: String,
    pub icon: String,
    pub position: Point,
    pub selected: bool,
    pub in_folder: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowView {
    pub id: ShortcutId,
    pub title: String,
    pub icon: String,
    pub position: Point,
    pub z_index: u32,
    pub content: Option<ContentPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskbarButtonView {
    pub id: ShortcutId,
    pub title: String,
    pub icon: String,
    pub minimized: bool,
    /// Front-most painted window.
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Everything the rendering layer needs to paint one frame.
pub struct DesktopFrame {
    pub wallpaper: Option<WallpaperRecord>,
    pub shortcuts: Vec<ShortcutView>,
    /// Present only while a rubber-band gesture is in progress.
    pub selection_box: Option<SelectionRect>,
    /// Painted windows, back to front.
    pub windows: Vec<WindowView>,
    /// Every open window in creation order, minimized ones included.
    pub taskbar: Vec<TaskbarButtonView>,
}

impl DesktopFrame {
    pub fn capture(state: &DesktopState, wallpaper: Option<WallpaperRecord>) -> Self {
        let shortcuts = state
            .shortcuts
            .iter()
            .map(|shortcut| ShortcutView {
                id: shortcut.id,
                label: shortcut.label.clone(),
                icon: shortcut.icon.clone(),
                position: shortcut.position,
                selected: state.selection.is_selected(shortcut.id),
                in_folder: shortcut.in_folder,
            })
            .collect();

        let selection_box = if state.gesture.is_selecting() {
            state.selection.selection_box()
        } else {
            None
        };

        let windows = state
            .windows
            .visible_windows()
            .into_iter()
            .map(|(window, z_index)| WindowView {
                id: window.id,
                title: window.label.clone(),
                icon: window.icon.clone(),
                position: window.position,
                z_index,
                content: window.content.clone(),
            })
            .collect();

        let focused = state.windows.focused_window();
        let taskbar = state
            .windows
            .taskbar_entries()
            .into_iter()
            .map(|entry| TaskbarButtonView {
                focused: focused == Some(entry.id),
                id: entry.id,
                title: entry.title,
                icon: entry.icon,
                minimized: entry.minimized,
            })
            .collect();

        Self {
            wallpaper,
            shortcuts,
            selection_box,
            windows,
            taskbar,
        }
    }
}
