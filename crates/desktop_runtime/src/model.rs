use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    click::ClickDebouncer, config::DesktopConfig, drag::DragController, geometry::Point,
    selection::SelectionController, shortcuts::ShortcutRegistry, window_manager::WindowManager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable shortcut identity. An open window reuses the id of the shortcut that launched it.
pub struct ShortcutId(pub u32);

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// Renderable content bound to a shortcut. The runtime stores and forwards it untouched.
pub struct ContentPayload(pub Value);

impl ContentPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Desktop icon. Shortcuts are permanent for the session; only their position changes.
pub struct Shortcut {
    pub id: ShortcutId,
    pub label: String,
    pub icon: String,
    pub content: Option<ContentPayload>,
    pub position: Point,
    pub in_folder: bool,
}

impl Shortcut {
    pub fn new(id: u32, label: impl Into<String>, icon: impl Into<String>, position: Point) -> Self {
        Self {
            id: ShortcutId(id),
            label: label.into(),
            icon: icon.into(),
            content: None,
            position,
            in_folder: false,
        }
    }

    pub fn with_content(mut self, content: ContentPayload) -> Self {
        self.content = Some(content);
        self
    }

    pub fn in_folder(mut self) -> Self {
        self.in_folder = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Managed window opened from a shortcut. Its position is fixed when it is created.
pub struct OpenWindow {
    pub id: ShortcutId,
    pub label: String,
    pub icon: String,
    pub content: Option<ContentPayload>,
    pub position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The single pointer gesture currently in progress.
pub enum ActiveGesture {
    #[default]
    None,
    /// Rubber-band selection started on empty canvas.
    Selecting,
    /// Group drag started on a selected shortcut.
    Dragging,
}

impl ActiveGesture {
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }

    pub fn is_selecting(self) -> bool {
        matches!(self, Self::Selecting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// What the pointer landed on when a gesture started.
pub enum PointerTarget {
    /// Empty content surface (wallpaper).
    Canvas,
    Shortcut(ShortcutId),
    /// Window body or chrome.
    Window(ShortcutId),
    Taskbar,
}

#[derive(Debug, Clone, PartialEq)]
/// Authoritative desktop state mutated only through [`crate::reduce_desktop`].
pub struct DesktopState {
    pub config: DesktopConfig,
    pub shortcuts: ShortcutRegistry,
    pub selection: SelectionController,
    pub drag: DragController,
    pub windows: WindowManager,
    pub gesture: ActiveGesture,
    pub clicks: ClickDebouncer,
}

impl DesktopState {
    pub fn new(config: DesktopConfig, shortcuts: ShortcutRegistry) -> Self {
        Self {
            shortcuts,
            selection: SelectionController::default(),
            drag: DragController::default(),
            windows: WindowManager::new(config.window_origin, config.cascade_step),
            gesture: ActiveGesture::None,
            clicks: ClickDebouncer::new(config.click_debounce_ms),
            config,
        }
    }

    /// Desktop populated from the built-in catalog with default configuration.
    pub fn from_catalog() -> Self {
        Self::new(DesktopConfig::default(), ShortcutRegistry::from_catalog())
    }
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::from_catalog()
    }
}
