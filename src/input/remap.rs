/// Keys taking part in the remap cycle `~` > CapsLock > Tab > `~`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemapKey {
    /// The `` ` ``/`~` key (VK_OEM_3 on US layouts).
    Grave,
    CapsLock,
    Tab,
}

impl RemapKey {
    /// The key sent in place of `self`.
    pub const fn target(self) -> Self {
        match self {
            Self::Grave => Self::CapsLock,
            Self::CapsLock => Self::Tab,
            Self::Tab => Self::Grave,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grave => "grave",
            Self::CapsLock => "caps_lock",
            Self::Tab => "tab",
        }
    }
}
