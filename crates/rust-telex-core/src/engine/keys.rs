use crate::text::Tone;

/// Telex keys that modify the syllable instead of extending it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ModifierKey {
    Tone(Tone),
    /// `z`: â ê ô
    Circumflex,
    /// `w`: ă ơ ư
    BreveHorn,
    /// `d`: đ toggle
    Stroke,
}

impl ModifierKey {
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'z' => Some(Self::Circumflex),
            'w' => Some(Self::BreveHorn),
            'd' => Some(Self::Stroke),
            other => match Tone::from_key(other) {
                Some(tone) => Some(Self::Tone(tone)),
                None => None,
            },
        }
    }
}

#[must_use]
pub const fn is_modifier(ch: char) -> bool {
    ModifierKey::from_char(ch).is_some()
}

/// True when every key in `rest` is a modifier.
///
/// A modifier only acts while nothing but modifiers follow it in the raw log,
/// so `azs` chains into `ấ` while `asc` stays literal.
#[must_use]
pub fn only_modifiers(rest: &[char]) -> bool {
    rest.iter().all(|&ch| is_modifier(ch))
}
