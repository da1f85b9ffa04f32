use super::{keys::ModifierKey, tone::tone_position, validate::tone_allowed};
use crate::text::{
    SyllableOracle, Tone, Vowel, VowelChar, skeleton,
    vowel::{retone, strip_tone, toggle_stroke},
};

/// Applies one modifier key to `buf`.
///
/// Returns `None` when the key does not apply; the caller then treats it as a
/// literal letter.
pub fn apply<O: SyllableOracle + ?Sized>(
    buf: &[char],
    key: ModifierKey,
    oracle: &O,
) -> Option<Vec<char>> {
    let first = *buf.first()?;

    if key == ModifierKey::Stroke {
        let mut out = buf.to_vec();
        out[0] = toggle_stroke(first)?;
        return Some(out);
    }

    if !oracle.contains(&skeleton(buf.iter().copied())) {
        return None;
    }

    match key {
        ModifierKey::Circumflex => apply_circumflex(buf),
        ModifierKey::BreveHorn => apply_breve_horn(buf),
        ModifierKey::Tone(tone) => apply_tone(buf, tone),
        ModifierKey::Stroke => None,
    }
}

fn parse_at(buf: &[char], i: usize) -> Option<VowelChar> {
    buf.get(i).copied().and_then(VowelChar::parse)
}

/// Rewrites position `i` to `vowel`, keeping its tone and case.
fn replace_vowel(out: &mut [char], i: usize, vowel: Vowel) -> Option<()> {
    let current = VowelChar::parse(out[i])?;
    out[i] = current.with_vowel(vowel).to_char();
    Some(())
}

fn apply_circumflex(buf: &[char]) -> Option<Vec<char>> {
    let (i, target) = buf.iter().enumerate().find_map(|(i, &ch)| {
        let v = VowelChar::parse(ch)?;
        if v.vowel.has_circumflex() {
            return None;
        }
        Some((i, v.vowel.circumflex()?))
    })?;

    let mut out = buf.to_vec();
    replace_vowel(&mut out, i, target)?;
    Some(out)
}

fn ascii_pair(buf: &[char], i: usize) -> Option<(VowelChar, VowelChar)> {
    Some((parse_at(buf, i)?, parse_at(buf, i + 1)?))
}

fn apply_breve_horn(buf: &[char]) -> Option<Vec<char>> {
    let pairs = || (0..buf.len().saturating_sub(1)).filter_map(|i| Some((i, ascii_pair(buf, i)?)));

    // uo → ươ, both halves
    if let Some((i, _)) = pairs().find(|(_, (a, b))| {
        a.vowel.ascii() == 'u'
            && b.vowel.ascii() == 'o'
            && !a.vowel.has_breve_horn()
            && !b.vowel.has_breve_horn()
    }) {
        let mut out = buf.to_vec();
        replace_vowel(&mut out, i, Vowel::UHorn)?;
        replace_vowel(&mut out, i + 1, Vowel::OHorn)?;
        return Some(out);
    }

    // oa → oă (hoặc)
    if let Some((i, _)) = pairs().find(|(_, (a, b))| {
        a.vowel.ascii() == 'o' && b.vowel.ascii() == 'a' && !b.vowel.has_breve_horn()
    }) {
        let mut out = buf.to_vec();
        replace_vowel(&mut out, i + 1, Vowel::ABreve)?;
        return Some(out);
    }

    // ua + consonant → uă (quăng); a trailing ua falls through to ư (cưa)
    if let Some((i, _)) = pairs().find(|&(i, (a, b))| {
        a.vowel.ascii() == 'u'
            && b.vowel.ascii() == 'a'
            && !a.vowel.has_breve_horn()
            && !b.vowel.has_breve_horn()
            && buf.get(i + 2).is_some_and(|&ch| VowelChar::parse(ch).is_none())
    }) {
        let mut out = buf.to_vec();
        replace_vowel(&mut out, i + 1, Vowel::ABreve)?;
        return Some(out);
    }

    let (i, target) = buf.iter().enumerate().find_map(|(i, &ch)| {
        let v = VowelChar::parse(ch)?;
        if v.vowel.has_breve_horn() {
            return None;
        }
        Some((i, v.vowel.breve_horn()?))
    })?;

    let mut out = buf.to_vec();
    replace_vowel(&mut out, i, target)?;
    Some(out)
}

/// Places `tone`, clearing any tone already in the syllable.
fn apply_tone(buf: &[char], tone: Tone) -> Option<Vec<char>> {
    if !tone_allowed(buf, tone) {
        tracing::trace!(tone = ?tone, "tone rejected after stop consonant");
        return None;
    }

    let pos = tone_position(buf)?;

    let mut out: Vec<char> = buf.iter().map(|&ch| strip_tone(ch)).collect();
    out[pos] = retone(out[pos], Some(tone))?;
    Some(out)
}
