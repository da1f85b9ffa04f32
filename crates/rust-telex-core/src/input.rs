//! Key events as delivered by the platform hook, and what the engine did with them.

/// Logical key identity. Only the keys the engine reacts to are distinguished.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Key {
    /// ASCII letter key, stored lowercase. The typed case comes from [`Modifiers`].
    Letter(char),
    Backspace,
    Escape,
    Space,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

impl Key {
    /// `Letter` for ASCII letters (either case), `Other` for anything else.
    pub fn letter(ch: char) -> Self {
        if ch.is_ascii_alphabetic() {
            Self::Letter(ch.to_ascii_lowercase())
        } else {
            Self::Other
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::Left
                | Self::Right
                | Self::Up
                | Self::Down
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }
}

/// Live modifier state at the time of the event.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub caps_lock: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        caps_lock: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Ctrl, Alt or Meta turn the key into a shortcut the engine must not touch.
    pub fn is_shortcut(self) -> bool {
        self.ctrl || self.alt || self.meta
    }

    pub fn uppercase(self) -> bool {
        self.shift ^ self.caps_lock
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub down: bool,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn down(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            down: true,
            modifiers,
        }
    }

    pub fn up(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            down: false,
            modifiers,
        }
    }

    /// The character a letter key types, honoring Shift and Caps Lock.
    pub fn typed_char(&self) -> Option<char> {
        match self.key {
            Key::Letter(ch) if self.modifiers.uppercase() => Some(ch.to_ascii_uppercase()),
            Key::Letter(ch) => Some(ch),
            _ => None,
        }
    }
}

/// Whether the physical key must be suppressed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyDisposition {
    /// The engine rendered the key's effect itself.
    Handled,
    /// Let the key reach the application unchanged.
    Passed,
}

impl KeyDisposition {
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ResetReason {
    Timeout,
    Commit,
    Navigation,
    ShortcutModifier,
    UnsupportedKey,
    EmptyBackspace,
    Escape,
    Remap,
    Pointer,
    ImeToggle,
    External,
}

impl ResetReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ResetReason::Timeout => "timeout",
            ResetReason::Commit => "commit",
            ResetReason::Navigation => "navigation",
            ResetReason::ShortcutModifier => "shortcut_modifier",
            ResetReason::UnsupportedKey => "unsupported_key",
            ResetReason::EmptyBackspace => "empty_backspace",
            ResetReason::Escape => "escape",
            ResetReason::Remap => "remap",
            ResetReason::Pointer => "pointer",
            ResetReason::ImeToggle => "ime_toggle",
            ResetReason::External => "external",
        }
    }
}
