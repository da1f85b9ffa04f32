//! Modifier bits share their values with the Win32 `MOD_*` flags so a chord
//! can be handed to the platform layer unchanged.

pub const MOD_ALT: u32 = 0x0001;
pub const MOD_CONTROL: u32 = 0x0002;
pub const MOD_SHIFT: u32 = 0x0004;
pub const MOD_WIN: u32 = 0x0008;

pub const DEFAULT_BUFFER_TIMEOUT_MS: u32 = 2000;
pub const MIN_BUFFER_TIMEOUT_MS: u32 = 250;
pub const MAX_BUFFER_TIMEOUT_MS: u32 = 60_000;

/// Virtual key code of `S`.
pub const VK_S: u32 = 0x53;
