//! Reducer actions, side-effect intents, and pointer routing for the desktop runtime.
//!
//! [`reduce_desktop`] is the composition surface: it decides per pointer event whether the
//! gesture is a rubber-band selection or an icon drag and forwards it to the matching controller.

use thiserror::Error;
use tracing::debug;

use crate::{
    click::ClickVerdict,
    drag::GestureError,
    geometry::Point,
    model::{ActiveGesture, DesktopState, PointerTarget, Shortcut, ShortcutId},
    window_manager::OpenOutcome,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Pointer pressed on the content surface.
    PointerDown {
        /// What the pointer landed on.
        target: PointerTarget,
        /// Viewport-relative pointer position.
        point: Point,
    },
    /// Pointer moved while over the content surface.
    PointerMove {
        point: Point,
    },
    /// Pointer released; finalizes any gesture.
    PointerUp,
    /// Host-reported position of a dragged icon.
    DragShortcut {
        shortcut_id: ShortcutId,
        position: Point,
    },
    /// Single click on a desktop icon.
    ShortcutClick {
        shortcut_id: ShortcutId,
        /// Event timestamp in unix milliseconds.
        at_ms: u64,
    },
    /// Double click on a desktop icon.
    ShortcutDoubleClick {
        shortcut_id: ShortcutId,
    },
    /// Launch a shortcut that lives inside window content rather than on the desktop.
    LaunchShortcut {
        shortcut: Shortcut,
    },
    FocusWindow {
        window_id: ShortcutId,
    },
    /// Click anywhere on a window's body or chrome.
    WindowClick {
        window_id: ShortcutId,
    },
    /// Click on a taskbar button. Always focuses; never toggles minimize.
    TaskbarClick {
        window_id: ShortcutId,
    },
    MinimizeWindow {
        window_id: ShortcutId,
    },
    RestoreWindow {
        window_id: ShortcutId,
    },
    CloseWindow {
        window_id: ShortcutId,
    },
    /// Pick a wallpaper from the provider catalog.
    SelectWallpaper {
        wallpaper_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the runtime to execute.
pub enum RuntimeEffect {
    /// Move input focus into the newly fronted window's content.
    FocusWindowInput(ShortcutId),
    /// Ask the wallpaper provider to switch selection.
    SelectWallpaper(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot apply to the current state.
pub enum ReducerError {
    #[error(transparent)]
    Gesture(#[from] GestureError),
    #[error("shortcut {0} is not on the desktop")]
    UnknownShortcut(ShortcutId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Window lifecycle actions that reference closed windows are no-ops rather than errors.
///
/// # Errors
///
/// Returns [`ReducerError::Gesture`] for drag updates without an active drag, and
/// [`ReducerError::UnknownShortcut`] when a click or double click names a shortcut that is not
/// on the desktop. State is unchanged on error.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::PointerDown { target, point } => {
            finish_gesture(state);
            match target {
                PointerTarget::Canvas => {
                    state.selection.begin(point);
                    state.gesture = ActiveGesture::Selecting;
                }
                PointerTarget::Shortcut(id)
                    if state.selection.is_selected(id) && state.shortcuts.get(id).is_some() =>
                {
                    state.drag.start(&state.shortcuts, id, point);
                    state.gesture = ActiveGesture::Dragging;
                }
                PointerTarget::Shortcut(_) | PointerTarget::Window(_) | PointerTarget::Taskbar => {}
            }
        }
        DesktopAction::PointerMove { point } => match state.gesture {
            ActiveGesture::Selecting => state.selection.update(point, &state.shortcuts),
            ActiveGesture::Dragging => {
                state
                    .drag
                    .apply_pointer(point, &state.selection, &mut state.shortcuts)?;
            }
            ActiveGesture::None => {}
        },
        DesktopAction::PointerUp => finish_gesture(state),
        DesktopAction::DragShortcut {
            shortcut_id,
            position,
        } => {
            if !state.gesture.is_dragging() {
                return Err(GestureError::DragNotStarted.into());
            }
            state
                .drag
                .apply(shortcut_id, position, &state.selection, &mut state.shortcuts)?;
        }
        DesktopAction::ShortcutClick { shortcut_id, at_ms } => {
            if state.shortcuts.get(shortcut_id).is_none() {
                return Err(ReducerError::UnknownShortcut(shortcut_id));
            }
            let verdict = state.clicks.register(at_ms);
            if verdict == ClickVerdict::WithinDebounce {
                debug!(%shortcut_id, "click swallowed as part of a double click");
            } else if !state.selection.is_selected(shortcut_id) && !state.gesture.is_dragging() {
                state.selection.select_only(shortcut_id);
            }
        }
        DesktopAction::ShortcutDoubleClick { shortcut_id } => {
            let shortcut = state
                .shortcuts
                .get(shortcut_id)
                .cloned()
                .ok_or(ReducerError::UnknownShortcut(shortcut_id))?;
            open_or_focus(state, &shortcut, &mut effects);
        }
        DesktopAction::LaunchShortcut { shortcut } => {
            open_or_focus(state, &shortcut, &mut effects);
        }
        DesktopAction::FocusWindow { window_id }
        | DesktopAction::WindowClick { window_id }
        | DesktopAction::TaskbarClick { window_id }
        | DesktopAction::RestoreWindow { window_id } => {
            if state.windows.focus(window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            state.windows.minimize(window_id);
        }
        DesktopAction::CloseWindow { window_id } => {
            state.windows.close(window_id);
        }
        DesktopAction::SelectWallpaper { wallpaper_id } => {
            effects.push(RuntimeEffect::SelectWallpaper(wallpaper_id));
        }
    }

    Ok(effects)
}

fn open_or_focus(state: &mut DesktopState, shortcut: &Shortcut, effects: &mut Vec<RuntimeEffect>) {
    let outcome = state.windows.open_or_focus(shortcut);
    if outcome == OpenOutcome::Focused {
        debug!(id = %shortcut.id, "window already open, raised to front");
    }
    effects.push(RuntimeEffect::FocusWindowInput(shortcut.id));
}

/// Clears the rubber band and the drag baseline, whichever gesture was running.
///
/// A completed drag also drops the selection it moved.
fn finish_gesture(state: &mut DesktopState) {
    if state.gesture.is_dragging() {
        state.selection.clear();
    }
    state.selection.end();
    state.drag.end();
    state.gesture = ActiveGesture::None;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        config::DesktopConfig,
        model::{ContentPayload, ShortcutId},
        shortcuts::ShortcutRegistry,
    };

    fn desktop() -> DesktopState {
        DesktopState::new(
            DesktopConfig::default(),
            ShortcutRegistry::new(vec![
                Shortcut::new(1, "cmd", "cmd", Point::new(20, 20)),
                Shortcut::new(2, "wallpapers", "folder", Point::new(20, 100)),
                Shortcut::new(3, "games", "folder", Point::new(20, 180)),
                Shortcut::new(4, "web projects", "folder", Point::new(20, 260)),
            ]),
        )
    }

    fn dispatch(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, action).expect("reduce")
    }

    fn rubber_band(state: &mut DesktopState, from: Point, to: Point) {
        dispatch(
            state,
            DesktopAction::PointerDown {
                target: PointerTarget::Canvas,
                point: from,
            },
        );
        dispatch(state, DesktopAction::PointerMove { point: to });
        dispatch(state, DesktopAction::PointerUp);
    }

    fn selected(state: &DesktopState) -> Vec<u32> {
        state.selection.selected_ids().iter().map(|id| id.0).collect()
    }

    #[test]
    fn canvas_press_starts_selection_and_clears_previous() {
        let mut state = desktop();
        state.selection.select_only(ShortcutId(4));

        dispatch(
            &mut state,
            DesktopAction::PointerDown {
                target: PointerTarget::Canvas,
                point: Point::new(0, 0),
            },
        );

        assert_eq!(state.gesture, ActiveGesture::Selecting);
        assert!(selected(&state).is_empty());
    }

    #[test]
    fn rubber_band_selects_icons_under_the_box() {
        let mut state = desktop();
        rubber_band(&mut state, Point::new(0, 0), Point::new(60, 120));

        assert_eq!(selected(&state), vec![1, 2]);
        assert_eq!(state.selection.selection_box(), None);
        assert_eq!(state.gesture, ActiveGesture::None);
    }

    #[test]
    fn pressing_a_selected_icon_drags_the_whole_selection() {
        let mut state = desktop();
        rubber_band(&mut state, Point::new(0, 0), Point::new(60, 120));

        dispatch(
            &mut state,
            DesktopAction::PointerDown {
                target: PointerTarget::Shortcut(ShortcutId(2)),
                point: Point::new(30, 110),
            },
        );
        assert_eq!(state.gesture, ActiveGesture::Dragging);

        dispatch(
            &mut state,
            DesktopAction::PointerMove {
                point: Point::new(230, 150),
            },
        );
        dispatch(&mut state, DesktopAction::PointerUp);

        assert_eq!(state.shortcuts.position(ShortcutId(1)), Some(Point::new(220, 60)));
        assert_eq!(state.shortcuts.position(ShortcutId(2)), Some(Point::new(220, 140)));
        assert_eq!(state.shortcuts.position(ShortcutId(3)), Some(Point::new(20, 180)));
        assert!(!state.drag.is_active());
        assert!(selected(&state).is_empty());
    }

    #[test]
    fn releasing_a_rubber_band_keeps_its_selection() {
        let mut state = desktop();
        rubber_band(&mut state, Point::new(0, 0), Point::new(60, 190));
        dispatch(&mut state, DesktopAction::PointerUp);

        assert_eq!(selected(&state), vec![1, 2, 3]);
    }

    #[test]
    fn moves_during_a_drag_never_touch_the_selection() {
        let mut state = desktop();
        rubber_band(&mut state, Point::new(0, 0), Point::new(60, 30));

        dispatch(
            &mut state,
            DesktopAction::PointerDown {
                target: PointerTarget::Shortcut(ShortcutId(1)),
                point: Point::new(20, 20),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::PointerMove {
                point: Point::new(20, 400),
            },
        );

        assert_eq!(selected(&state), vec![1]);
        assert_eq!(state.selection.selection_box(), None);
    }

    #[test]
    fn pressing_an_unselected_icon_starts_no_gesture() {
        let mut state = desktop();
        dispatch(
            &mut state,
            DesktopAction::PointerDown {
                target: PointerTarget::Shortcut(ShortcutId(3)),
                point: Point::new(20, 180),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::PointerMove {
                point: Point::new(300, 300),
            },
        );

        assert_eq!(state.gesture, ActiveGesture::None);
        assert_eq!(state.shortcuts.position(ShortcutId(3)), Some(Point::new(20, 180)));
    }

    #[test]
    fn drag_shortcut_applies_reported_icon_position() {
        let mut state = desktop();
        rubber_band(&mut state, Point::new(0, 0), Point::new(60, 190));
        dispatch(
            &mut state,
            DesktopAction::PointerDown {
                target: PointerTarget::Shortcut(ShortcutId(3)),
                point: Point::new(25, 185),
            },
        );

        dispatch(
            &mut state,
            DesktopAction::DragShortcut {
                shortcut_id: ShortcutId(3),
                position: Point::new(120, 200),
            },
        );

        assert_eq!(state.shortcuts.position(ShortcutId(1)), Some(Point::new(120, 40)));
        assert_eq!(state.shortcuts.position(ShortcutId(3)), Some(Point::new(120, 200)));
        assert_eq!(state.shortcuts.position(ShortcutId(4)), Some(Point::new(20, 260)));
    }

    #[test]
    fn drag_shortcut_without_drag_is_rejected_without_side_effects() {
        let mut state = desktop();
        state.selection.select_only(ShortcutId(1));
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            DesktopAction::DragShortcut {
                shortcut_id: ShortcutId(1),
                position: Point::new(400, 400),
            },
        )
        .unwrap_err();

        assert_eq!(err, ReducerError::Gesture(GestureError::DragNotStarted));
        assert_eq!(state, before);
    }

    #[test]
    fn single_click_replaces_selection() {
        let mut state = desktop();
        rubber_band(&mut state, Point::new(0, 0), Point::new(60, 120));

        dispatch(
            &mut state,
            DesktopAction::ShortcutClick {
                shortcut_id: ShortcutId(4),
                at_ms: 1_000,
            },
        );

        assert_eq!(selected(&state), vec![4]);
    }

    #[test]
    fn clicking_a_selected_icon_keeps_multi_selection() {
        let mut state = desktop();
        rubber_band(&mut state, Point::new(0, 0), Point::new(60, 120));

        dispatch(
            &mut state,
            DesktopAction::ShortcutClick {
                shortcut_id: ShortcutId(2),
                at_ms: 1_000,
            },
        );

        assert_eq!(selected(&state), vec![1, 2]);
    }

    #[test]
    fn second_click_inside_debounce_is_swallowed() {
        let mut state = desktop();
        dispatch(
            &mut state,
            DesktopAction::ShortcutClick {
                shortcut_id: ShortcutId(3),
                at_ms: 5_000,
            },
        );
        assert_eq!(selected(&state), vec![3]);

        dispatch(
            &mut state,
            DesktopAction::ShortcutClick {
                shortcut_id: ShortcutId(1),
                at_ms: 5_150,
            },
        );

        assert_eq!(selected(&state), vec![3]);
    }

    #[test]
    fn click_while_dragging_keeps_selection() {
        let mut state = desktop();
        rubber_band(&mut state, Point::new(0, 0), Point::new(60, 120));
        dispatch(
            &mut state,
            DesktopAction::PointerDown {
                target: PointerTarget::Shortcut(ShortcutId(1)),
                point: Point::new(20, 20),
            },
        );

        dispatch(
            &mut state,
            DesktopAction::ShortcutClick {
                shortcut_id: ShortcutId(4),
                at_ms: 9_000,
            },
        );

        assert_eq!(selected(&state), vec![1, 2]);
    }

    #[test]
    fn double_click_opens_then_refronts() {
        let mut state = desktop();

        let effects = dispatch(
            &mut state,
            DesktopAction::ShortcutDoubleClick {
                shortcut_id: ShortcutId(1),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(ShortcutId(1))]);
        dispatch(
            &mut state,
            DesktopAction::ShortcutDoubleClick {
                shortcut_id: ShortcutId(2),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::ShortcutDoubleClick {
                shortcut_id: ShortcutId(1),
            },
        );

        assert_eq!(state.windows.windows().len(), 2);
        assert_eq!(
            state.windows.stack_order(),
            &[ShortcutId(2), ShortcutId(1)]
        );
    }

    #[test]
    fn double_click_on_unknown_shortcut_errors() {
        let mut state = desktop();
        let err = reduce_desktop(
            &mut state,
            DesktopAction::ShortcutDoubleClick {
                shortcut_id: ShortcutId(99),
            },
        )
        .unwrap_err();

        assert_eq!(err, ReducerError::UnknownShortcut(ShortcutId(99)));
        assert!(state.windows.windows().is_empty());
    }

    #[test]
    fn launched_folder_item_opens_with_its_content() {
        let mut state = desktop();
        let game = Shortcut::new(31, "snake", "joystick", Point::new(10, 10))
            .in_folder()
            .with_content(ContentPayload::new(json!({ "game": "snake" })));

        dispatch(&mut state, DesktopAction::LaunchShortcut { shortcut: game });

        let window = state.windows.window(ShortcutId(31)).expect("window");
        assert_eq!(
            window.content,
            Some(ContentPayload::new(json!({ "game": "snake" })))
        );
        assert!(state.shortcuts.get(ShortcutId(31)).is_none());
    }

    #[test]
    fn window_lifecycle_actions_ignore_unknown_ids() {
        let mut state = desktop();
        for action in [
            DesktopAction::FocusWindow {
                window_id: ShortcutId(7),
            },
            DesktopAction::TaskbarClick {
                window_id: ShortcutId(7),
            },
            DesktopAction::MinimizeWindow {
                window_id: ShortcutId(7),
            },
            DesktopAction::RestoreWindow {
                window_id: ShortcutId(7),
            },
            DesktopAction::CloseWindow {
                window_id: ShortcutId(7),
            },
        ] {
            assert_eq!(dispatch(&mut state, action), Vec::new());
        }
        assert!(state.windows.stack_order().is_empty());
    }

    #[test]
    fn taskbar_click_on_front_window_does_not_minimize() {
        let mut state = desktop();
        dispatch(
            &mut state,
            DesktopAction::ShortcutDoubleClick {
                shortcut_id: ShortcutId(1),
            },
        );

        dispatch(
            &mut state,
            DesktopAction::TaskbarClick {
                window_id: ShortcutId(1),
            },
        );

        assert!(!state.windows.is_minimized(ShortcutId(1)));
        assert_eq!(state.windows.front_window(), Some(ShortcutId(1)));
    }

    #[test]
    fn new_press_finalizes_an_unterminated_gesture() {
        let mut state = desktop();
        dispatch(
            &mut state,
            DesktopAction::PointerDown {
                target: PointerTarget::Canvas,
                point: Point::new(0, 0),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::PointerDown {
                target: PointerTarget::Window(ShortcutId(1)),
                point: Point::new(300, 300),
            },
        );

        assert_eq!(state.gesture, ActiveGesture::None);
        assert_eq!(state.selection.selection_box(), None);
    }

    #[test]
    fn click_on_unknown_shortcut_is_rejected_without_selecting() {
        let mut state = desktop();
        state.selection.select_only(ShortcutId(2));
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            DesktopAction::ShortcutClick {
                shortcut_id: ShortcutId(99),
                at_ms: 1_000,
            },
        )
        .unwrap_err();

        assert_eq!(err, ReducerError::UnknownShortcut(ShortcutId(99)));
        assert_eq!(state, before);
    }

    #[test]
    fn press_on_unknown_shortcut_never_starts_a_drag() {
        let mut state = desktop();
        state.selection.select_only(ShortcutId(99));

        dispatch(
            &mut state,
            DesktopAction::PointerDown {
                target: PointerTarget::Shortcut(ShortcutId(99)),
                point: Point::new(500, 500),
            },
        );
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::PointerMove {
                point: Point::new(520, 520),
            },
        );

        assert_eq!(effects, Ok(Vec::new()));
        assert_eq!(state.gesture, ActiveGesture::None);
        assert_eq!(state.shortcuts.position(ShortcutId(1)), Some(Point::new(20, 20)));
    }

    #[test]
    fn select_wallpaper_is_forwarded_as_effect() {
        let mut state = desktop();
        let effects = dispatch(
            &mut state,
            DesktopAction::SelectWallpaper {
                wallpaper_id: "starfield".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::SelectWallpaper("starfield".to_string())]
        );
    }
}
