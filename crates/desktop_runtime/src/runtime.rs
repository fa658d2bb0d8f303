//! Long-lived container that owns desktop state, dispatches actions, and executes effects.

use platform_host::{unix_time_ms_now, WallpaperProvider};
use tracing::{debug, warn};

use crate::{
    catalog,
    model::{DesktopState, ShortcutId},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    surface::DesktopFrame,
};

/// Desktop session bound to a wallpaper provider.
///
/// Reducer errors are absorbed here: they are logged and the state is left as it was, so no
/// gesture or lifecycle mistake ever reaches the user.
pub struct DesktopRuntime<W: WallpaperProvider> {
    state: DesktopState,
    wallpapers: W,
    pending: Vec<RuntimeEffect>,
}

impl DesktopRuntime<platform_host::MemoryWallpaperProvider> {
    /// Runtime over the built-in catalog and bundled wallpapers.
    pub fn from_catalog() -> Self {
        Self::new(
            DesktopState::from_catalog(),
            catalog::builtin_wallpaper_provider(),
        )
    }
}

impl<W: WallpaperProvider> DesktopRuntime<W> {
    pub fn new(state: DesktopState, wallpapers: W) -> Self {
        Self {
            state,
            wallpapers,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn wallpapers(&self) -> &W {
        &self.wallpapers
    }

    /// Applies one action. Wallpaper effects are executed immediately; the rest are queued for
    /// the host.
    pub fn dispatch(&mut self, action: DesktopAction) {
        match reduce_desktop(&mut self.state, action) {
            Ok(effects) => {
                for effect in effects {
                    self.run_effect(effect);
                }
            }
            Err(err) => warn!("desktop reducer error: {err}"),
        }
    }

    /// Single click stamped with the current wall-clock time.
    pub fn click_shortcut(&mut self, shortcut_id: ShortcutId) {
        self.dispatch(DesktopAction::ShortcutClick {
            shortcut_id,
            at_ms: unix_time_ms_now(),
        });
    }

    /// Takes the effects the host still has to act on, in emission order.
    ///
    /// Hosts drain once per frame. Only the latest focus request is kept between drains, so the
    /// queue never holds more than one [`RuntimeEffect::FocusWindowInput`].
    pub fn drain_effects(&mut self) -> Vec<RuntimeEffect> {
        std::mem::take(&mut self.pending)
    }

    pub fn frame(&self) -> DesktopFrame {
        DesktopFrame::capture(&self.state, self.wallpapers.current())
    }

    fn run_effect(&mut self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::SelectWallpaper(wallpaper_id) => {
                if self.wallpapers.select_by_id(&wallpaper_id) {
                    debug!(%wallpaper_id, "wallpaper selected");
                } else {
                    warn!(%wallpaper_id, "wallpaper provider rejected unknown id");
                }
            }
            RuntimeEffect::FocusWindowInput(window_id) => {
                self.pending
                    .retain(|pending| !matches!(pending, RuntimeEffect::FocusWindowInput(_)));
                self.pending.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
    }
}
