//! Single-click vs double-click disambiguation for shortcut clicks.

use platform_host::elapsed_ms;

use crate::config::DEFAULT_CLICK_DEBOUNCE_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickVerdict {
    /// Stand-alone click; may change the selection.
    Single,
    /// Arrived inside the debounce window of the previous click; treated as part of a
    /// double-click and ignored for selection.
    WithinDebounce,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Remembers the time of the last shortcut click, on any shortcut.
pub struct ClickDebouncer {
    window_ms: u64,
    last_click_ms: Option<u64>,
}

impl Default for ClickDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_DEBOUNCE_MS)
    }
}

impl ClickDebouncer {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_click_ms: None,
        }
    }

    /// Records a click at `now_ms` and classifies it against the previous one.
    pub fn register(&mut self, now_ms: u64) -> ClickVerdict {
        let previous = self.last_click_ms.replace(now_ms);
        match previous {
            Some(last) if elapsed_ms(last, now_ms) < self.window_ms => ClickVerdict::WithinDebounce,
            _ => ClickVerdict::Single,
        }
    }
}
