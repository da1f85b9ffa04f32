use rust_telex_core::KeyEvent;

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotkeyAction {
    ToggleIme,
}

/// Shell-level shortcut bound to `event`, if any. Only key-down events count.
pub fn action_for(cfg: &Config, event: &KeyEvent) -> Option<HotkeyAction> {
    (event.down && cfg.toggle_hotkey.matches(event)).then_some(HotkeyAction::ToggleIme)
}
