//! Interaction and state engine for a simulated browser desktop.
//!
//! Pointer input enters through [`reduce_desktop`] (usually via [`DesktopRuntime::dispatch`]),
//! which routes each gesture to rubber-band selection, group dragging, or the window manager.
//! Rendering layers read a derived [`DesktopFrame`] and never write state directly.

pub mod catalog;
pub mod click;
pub mod config;
pub mod drag;
pub mod geometry;
pub mod model;
pub mod reducer;
pub mod runtime;
pub mod selection;
pub mod shortcuts;
pub mod surface;
pub mod window_manager;

pub use click::{ClickDebouncer, ClickVerdict};
pub use config::{ConfigError, DesktopConfig};
pub use drag::{DragController, DragSession, GestureError};
pub use geometry::{Point, SelectionRect};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime::DesktopRuntime;
pub use selection::SelectionController;
pub use shortcuts::ShortcutRegistry;
pub use surface::{DesktopFrame, ShortcutView, TaskbarButtonView, WindowView};
pub use window_manager::{OpenOutcome, TaskbarEntry, WindowManager};
