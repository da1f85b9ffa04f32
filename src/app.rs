//! Shell state shared by the hooks and the tray: settings plus the one engine
//! instance they drive.

use std::path::Path;

use rust_telex_core::{Engine, ResetReason, StandardSyllables, SyllableOracle, SyllableSet};

use crate::config::Config;

pub type DynOracle = Box<dyn SyllableOracle + Send>;

/// Settings the tray menu flips.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Toggle {
    Ime,
    KeyRemap,
    AutoIeYe,
    DoubleKeyRevert,
    StartWithWindows,
}

impl Toggle {
    pub const ALL: [Self; 5] = [
        Self::Ime,
        Self::KeyRemap,
        Self::AutoIeYe,
        Self::DoubleKeyRevert,
        Self::StartWithWindows,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Toggle::Ime => "Vietnamese IME",
            Toggle::KeyRemap => "Key remap (~ > CapsLock > Tab)",
            Toggle::AutoIeYe => "Auto ie/ye > iê/yê",
            Toggle::DoubleKeyRevert => "Double key reverts to raw",
            Toggle::StartWithWindows => "Start with Windows",
        }
    }

    pub fn get(self, cfg: &Config) -> bool {
        match self {
            Toggle::Ime => cfg.ime_enabled,
            Toggle::KeyRemap => cfg.key_remap_enabled,
            Toggle::AutoIeYe => cfg.auto_ie_ye_enabled,
            Toggle::DoubleKeyRevert => cfg.double_key_revert_enabled,
            Toggle::StartWithWindows => cfg.start_with_windows,
        }
    }

    fn slot(self, cfg: &mut Config) -> &mut bool {
        match self {
            Toggle::Ime => &mut cfg.ime_enabled,
            Toggle::KeyRemap => &mut cfg.key_remap_enabled,
            Toggle::AutoIeYe => &mut cfg.auto_ie_ye_enabled,
            Toggle::DoubleKeyRevert => &mut cfg.double_key_revert_enabled,
            Toggle::StartWithWindows => &mut cfg.start_with_windows,
        }
    }
}

/// Builds the syllable oracle, preferring the configured list.
///
/// A list that cannot be read or contains nothing falls back to the built-in
/// inventory so typing keeps working.
pub fn load_oracle(path: Option<&Path>) -> DynOracle {
    let Some(path) = path else {
        return Box::new(StandardSyllables);
    };

    match std::fs::read_to_string(path) {
        Ok(text) => {
            let set = SyllableSet::parse(&text);
            if set.is_empty() {
                tracing::warn!(path = %path.display(), "syllable list is empty, using built-in set");
                return Box::new(StandardSyllables);
            }
            tracing::info!(path = %path.display(), count = set.len(), "syllable list loaded");
            Box::new(set)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "syllable list unreadable, using built-in set");
            Box::new(StandardSyllables)
        }
    }
}

pub struct AppState {
    config: Config,
    engine: Engine<DynOracle>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let oracle = load_oracle(config.syllable_list.as_deref());
        Self::with_oracle(config, oracle)
    }

    pub fn with_oracle(config: Config, oracle: DynOracle) -> Self {
        let engine = Engine::with_oracle(config.engine_options(), oracle);
        Self { config, engine }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> &Engine<DynOracle> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<DynOracle> {
        &mut self.engine
    }

    pub fn ime_enabled(&self) -> bool {
        self.config.ime_enabled
    }

    /// Swaps settings in place. Engine options change between keystrokes
    /// without touching the raw log; a new syllable list rebuilds the engine.
    pub fn apply_config(&mut self, config: Config) {
        if config.syllable_list != self.config.syllable_list {
            let oracle = load_oracle(config.syllable_list.as_deref());
            self.engine = Engine::with_oracle(config.engine_options(), oracle);
        } else {
            self.engine.set_options(config.engine_options());
        }

        if self.config.ime_enabled != config.ime_enabled {
            self.engine.reset(ResetReason::ImeToggle);
        }

        self.config = config;
    }

    /// Flips one setting and returns the new settings for persisting.
    pub fn toggle(&mut self, toggle: Toggle) -> Config {
        let mut next = self.config.clone();
        let slot = toggle.slot(&mut next);
        *slot = !*slot;

        tracing::info!(?toggle, enabled = *slot, "setting toggled");

        self.apply_config(next.clone());
        next
    }

    /// Caret may have moved; the pending syllable no longer matches the screen.
    pub fn on_pointer(&mut self) {
        self.engine.reset(ResetReason::Pointer);
    }
}
