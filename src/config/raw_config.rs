use std::path::PathBuf;

use serde::Deserialize;

use super::{
    HotkeyChord,
    constants::{DEFAULT_BUFFER_TIMEOUT_MS, MOD_CONTROL, MOD_SHIFT, VK_S},
};

/// On-disk shape of the settings file, before validation.
///
/// Every field has a default so files written by older versions still load.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub ime_enabled: bool,
    pub key_remap_enabled: bool,
    pub auto_ie_ye_enabled: bool,
    pub double_key_revert_enabled: bool,
    pub start_with_windows: bool,
    pub buffer_timeout_ms: u32,
    pub syllable_list: Option<PathBuf>,
    pub toggle_hotkey: HotkeyChord,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            ime_enabled: true,
            key_remap_enabled: true,
            auto_ie_ye_enabled: true,
            double_key_revert_enabled: true,
            start_with_windows: false,
            buffer_timeout_ms: DEFAULT_BUFFER_TIMEOUT_MS,
            toggle_hotkey: HotkeyChord {
                mods: MOD_CONTROL | MOD_SHIFT,
                vk: Some(VK_S),
            },
            syllable_list: None,
        }
    }
}
