mod config_validator;
pub mod constants;
pub mod raw_config;

use std::{
    fmt, io,
    path::{Path, PathBuf},
    time::Duration,
};

pub use config_validator::{validate_buffer_timeout, validate_syllable_list, validate_toggle_hotkey};
pub use raw_config::RawConfig;
use rust_telex_core::{EngineOptions, Key, KeyEvent};
use serde::{Deserialize, Deserializer, Serialize};

use self::constants::{MOD_ALT, MOD_CONTROL, MOD_SHIFT, MOD_WIN};

const APP_DIR: &str = "RustTelex";
const CONFIG_FILE: &str = "config.toml";

/// A modifier set plus one virtual key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotkeyChord {
    pub mods: u32,
    pub vk: Option<u32>,
}

impl HotkeyChord {
    /// Lowercase letter for `A`..`Z` virtual keys.
    pub fn letter(&self) -> Option<char> {
        let vk = u8::try_from(self.vk?).ok()?;
        vk.is_ascii_uppercase().then(|| char::from(vk).to_ascii_lowercase())
    }

    /// Exact match: the letter and the same set of held modifiers.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let Some(letter) = self.letter() else {
            return false;
        };
        let m = event.modifiers;

        event.key == Key::Letter(letter)
            && m.ctrl == (self.mods & MOD_CONTROL != 0)
            && m.alt == (self.mods & MOD_ALT != 0)
            && m.shift == (self.mods & MOD_SHIFT != 0)
            && m.meta == (self.mods & MOD_WIN != 0)
    }
}

impl fmt::Display for HotkeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MODS_ORDER: &[(u32, &str)] = &[
            (MOD_CONTROL, "Ctrl"),
            (MOD_ALT, "Alt"),
            (MOD_SHIFT, "Shift"),
            (MOD_WIN, "Win"),
        ];

        let mut parts: Vec<String> = MODS_ORDER
            .iter()
            .filter(|(mask, _)| self.mods & mask != 0)
            .map(|(_, label)| (*label).to_string())
            .collect();

        match (self.letter(), self.vk) {
            (Some(letter), _) => parts.push(letter.to_ascii_uppercase().to_string()),
            (None, Some(vk)) => parts.push(format!("VK 0x{vk:02X}")),
            (None, None) => {}
        }

        if parts.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&parts.join(" + "))
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    pub ime_enabled: bool,
    pub key_remap_enabled: bool,
    pub auto_ie_ye_enabled: bool,
    pub double_key_revert_enabled: bool,
    pub start_with_windows: bool,
    pub buffer_timeout_ms: u32,
    pub syllable_list: Option<PathBuf>,
    pub toggle_hotkey: HotkeyChord,
}

impl Default for Config {
    fn default() -> Self {
        let raw = RawConfig::default();
        Self {
            ime_enabled: raw.ime_enabled,
            key_remap_enabled: raw.key_remap_enabled,
            auto_ie_ye_enabled: raw.auto_ie_ye_enabled,
            double_key_revert_enabled: raw.double_key_revert_enabled,
            start_with_windows: raw.start_with_windows,
            buffer_timeout_ms: raw.buffer_timeout_ms,
            toggle_hotkey: raw.toggle_hotkey,
            syllable_list: raw.syllable_list,
        }
    }
}

impl Config {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            auto_ie_ye: self.auto_ie_ye_enabled,
            double_key_revert: self.double_key_revert_enabled,
            timeout: Duration::from_millis(u64::from(self.buffer_timeout_ms)),
        }
    }
}

pub fn config_path() -> io::Result<PathBuf> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "APPDATA is not set"))?;

    Ok(PathBuf::from(appdata).join(APP_DIR).join(CONFIG_FILE))
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    std::fs::create_dir_all(dir)
}

fn confy_err(e: confy::ConfyError) -> io::Error {
    io::Error::other(e)
}

/// Reads the settings file, creating it with defaults when missing.
pub fn load() -> io::Result<Config> {
    let path = config_path()?;
    ensure_parent_dir(&path)?;

    confy::load_path(&path).map_err(confy_err)
}

pub fn save(cfg: &Config) -> io::Result<()> {
    cfg.validate()
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let path = config_path()?;
    ensure_parent_dir(&path)?;
    confy::store_path(path, cfg).map_err(confy_err)
}

impl TryFrom<RawConfig> for Config {
    type Error = String;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let cfg = Self {
            ime_enabled: raw.ime_enabled,
            key_remap_enabled: raw.key_remap_enabled,
            auto_ie_ye_enabled: raw.auto_ie_ye_enabled,
            double_key_revert_enabled: raw.double_key_revert_enabled,
            start_with_windows: raw.start_with_windows,
            buffer_timeout_ms: raw.buffer_timeout_ms,
            toggle_hotkey: raw.toggle_hotkey,
            syllable_list: raw.syllable_list,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawConfig::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}
