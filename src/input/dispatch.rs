use std::time::Instant;

use rust_telex_core::{KeyDisposition, KeyEvent, OutputSink, ResetReason};

use super::{
    hotkeys::{HotkeyAction, action_for},
    remap::RemapKey,
};
use crate::{
    app::{AppState, Toggle},
    config::Config,
};

/// What the keyboard hook must do with the physical key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HookDecision {
    Pass,
    Swallow,
    /// Swallow and tap the given key instead.
    Remap(RemapKey),
}

impl HookDecision {
    pub fn should_swallow(self) -> bool {
        !matches!(self, Self::Pass)
    }
}

/// Runs one hook event through the shell rules and then the engine.
///
/// `remap` names the event's key when it is one of the remap cycle keys.
/// The returned settings are `Some` when the event changed them and they
/// need persisting.
pub fn dispatch_key<S: OutputSink + ?Sized>(
    state: &mut AppState,
    event: &KeyEvent,
    remap: Option<RemapKey>,
    now: Instant,
    sink: &mut S,
) -> (HookDecision, Option<Config>) {
    if let Some(HotkeyAction::ToggleIme) = action_for(state.config(), event) {
        let next = state.toggle(Toggle::Ime);
        tracing::info!(enabled = next.ime_enabled, "ime toggled by hotkey");
        return (HookDecision::Swallow, Some(next));
    }

    if state.config().key_remap_enabled
        && let Some(key) = remap
    {
        if !event.down {
            return (HookDecision::Swallow, None);
        }
        state.engine_mut().reset(ResetReason::Remap);
        let target = key.target();
        tracing::debug!(from = key.as_str(), to = target.as_str(), "key remapped");
        return (HookDecision::Remap(target), None);
    }

    if !state.ime_enabled() {
        return (HookDecision::Pass, None);
    }

    let decision = match state.engine_mut().handle_key(event, now, sink) {
        KeyDisposition::Handled => HookDecision::Swallow,
        KeyDisposition::Passed => HookDecision::Pass,
    };
    (decision, None)
}
