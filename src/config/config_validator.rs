use std::{fmt::Write as _, path::Path};

use super::{
    Config, HotkeyChord,
    constants::{MAX_BUFFER_TIMEOUT_MS, MIN_BUFFER_TIMEOUT_MS, MOD_ALT, MOD_CONTROL, MOD_WIN},
};

pub fn validate_buffer_timeout(ms: u32) -> Result<(), String> {
    if (MIN_BUFFER_TIMEOUT_MS..=MAX_BUFFER_TIMEOUT_MS).contains(&ms) {
        Ok(())
    } else {
        Err(format!(
            "buffer_timeout_ms must be between {MIN_BUFFER_TIMEOUT_MS} and {MAX_BUFFER_TIMEOUT_MS}, got {ms}"
        ))
    }
}

/// The toggle must not be typeable text: it needs Ctrl, Alt or Win plus a letter.
pub fn validate_toggle_hotkey(chord: &HotkeyChord) -> Result<(), String> {
    if chord.mods & (MOD_CONTROL | MOD_ALT | MOD_WIN) == 0 {
        return Err("toggle_hotkey must include Ctrl, Alt or Win".to_string());
    }

    match chord.vk {
        Some(vk) if (0x41..=0x5A).contains(&vk) => Ok(()),
        Some(vk) => Err(format!("toggle_hotkey key must be a letter, got VK 0x{vk:02X}")),
        None => Err("toggle_hotkey has no key".to_string()),
    }
}

pub fn validate_syllable_list(path: Option<&Path>) -> Result<(), String> {
    match path {
        Some(p) if p.as_os_str().is_empty() => {
            Err("syllable_list must be a file path when set".to_string())
        }
        _ => Ok(()),
    }
}

impl Config {
    /// Collects every problem into one message.
    pub fn validate(&self) -> Result<(), String> {
        let problems: Vec<String> = [
            validate_buffer_timeout(self.buffer_timeout_ms),
            validate_toggle_hotkey(&self.toggle_hotkey),
            validate_syllable_list(self.syllable_list.as_deref()),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if problems.is_empty() {
            return Ok(());
        }

        let mut error = String::from("Invalid settings:\n");
        for p in &problems {
            let _ = writeln!(error, "- {p}");
        }
        Err(error)
    }
}
