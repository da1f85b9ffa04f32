use crate::text::{SyllableOracle, Tone, skeleton, vowel::tone_of};

/// Why a syllable is shown as typed instead of converted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Fallback {
    DoubleKeystroke,
    UnknownSyllable,
    ToneAfterStop,
}

impl Fallback {
    pub fn as_str(self) -> &'static str {
        match self {
            Fallback::DoubleKeystroke => "double_keystroke",
            Fallback::UnknownSyllable => "unknown_syllable",
            Fallback::ToneAfterStop => "tone_after_stop",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Decision {
    Processed,
    Raw(Fallback),
}

/// Syllables closed by `c`, `ch`, `p` or `t`.
#[must_use]
pub fn ends_with_stop(buf: &[char]) -> bool {
    let sk = skeleton(buf.iter().copied());
    sk.len() >= 2 && (sk.ends_with("ch") || sk.ends_with(['c', 'p', 't']))
}

#[must_use]
pub fn tone_allowed(buf: &[char], tone: Tone) -> bool {
    tone.allowed_after_stop() || !ends_with_stop(buf)
}

/// Two physically identical keys in a row, case ignored.
#[must_use]
pub fn has_double_keystroke(raw: &[char]) -> bool {
    raw.windows(2)
        .any(|pair| pair[0].to_lowercase().eq(pair[1].to_lowercase()))
}

/// Chooses between the converted buffer and the raw keystrokes.
pub fn decide<O: SyllableOracle + ?Sized>(
    buf: &[char],
    raw: &[char],
    double_key_revert: bool,
    oracle: &O,
) -> Decision {
    if double_key_revert && has_double_keystroke(raw) {
        return Decision::Raw(Fallback::DoubleKeystroke);
    }

    if !oracle.contains(&skeleton(buf.iter().copied())) {
        return Decision::Raw(Fallback::UnknownSyllable);
    }

    let tone = buf.iter().find_map(|&ch| tone_of(ch));
    if tone.is_some_and(|tone| !tone_allowed(buf, tone)) {
        return Decision::Raw(Fallback::ToneAfterStop);
    }

    Decision::Processed
}
