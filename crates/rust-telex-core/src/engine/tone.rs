//! Tone placement.
//!
//! Rules, in priority order, over the syllable's vowels (semivowels of the
//! `qu` and `gi` onsets excluded):
//! - a vowel with circumflex, breve or horn takes the tone; for two adjacent
//!   ones (ươ, uô, iê) the second wins
//! - `oa`, `oe`, `uy` as the last two vowels put it on the second
//! - a closed syllable puts it on the last vowel
//! - an open one puts it on the second to last

use crate::text::{
    SyllableOracle, Vowel, VowelChar, skeleton,
    vowel::{is_vowel, retone, strip_tone, tone_of},
};

fn is_semivowel(buf: &[char], i: usize) -> bool {
    let Some(prev) = i.checked_sub(1).map(|p| buf[p]) else {
        return false;
    };
    let cur = buf[i];

    if cur.eq_ignore_ascii_case(&'u') && prev.eq_ignore_ascii_case(&'q') {
        return true;
    }

    cur.eq_ignore_ascii_case(&'i')
        && prev.eq_ignore_ascii_case(&'g')
        && buf.get(i + 1).is_some_and(|&next| is_vowel(next))
}

fn vowel_positions(buf: &[char]) -> Vec<usize> {
    (0..buf.len())
        .filter(|&i| is_vowel(buf[i]) && !is_semivowel(buf, i))
        .collect()
}

fn vowel_at(buf: &[char], i: usize) -> Option<Vowel> {
    VowelChar::parse(buf[i]).map(|v| v.vowel)
}

/// Index of the vowel that should carry the tone, if the buffer has any vowel.
#[must_use]
pub fn tone_position(buf: &[char]) -> Option<usize> {
    let vowels = vowel_positions(buf);
    let (&last, rest) = vowels.split_last()?;
    let Some(&second_last) = rest.last() else {
        return Some(last);
    };

    let special: Vec<usize> = vowels
        .iter()
        .copied()
        .filter(|&i| vowel_at(buf, i).is_some_and(Vowel::is_special))
        .collect();

    match special[..] {
        [first, second, ..] if second == first + 1 => return Some(second),
        [first, ..] => return Some(first),
        [] => {}
    }

    if matches!(
        (vowel_at(buf, second_last), vowel_at(buf, last)),
        (Some(Vowel::O), Some(Vowel::A | Vowel::E)) | (Some(Vowel::U), Some(Vowel::Y))
    ) {
        return Some(last);
    }

    if last + 1 < buf.len() {
        Some(last)
    } else {
        Some(second_last)
    }
}

fn is_final_consonant(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'n' | 'm' | 't' | 'c' | 'p' | 'g' | 'h')
}

/// Moves an existing tone to where [`tone_position`] wants it once a final
/// consonant closes the syllable (`hóa` + `n` → `hoán`).
///
/// Returns `None` when nothing has to move.
#[must_use]
pub fn reposition<O: SyllableOracle + ?Sized>(buf: &[char], oracle: &O) -> Option<Vec<char>> {
    if buf.len() < 2 || !buf.last().is_some_and(|&ch| is_final_consonant(ch)) {
        return None;
    }

    let (old, tone) = buf
        .iter()
        .enumerate()
        .find_map(|(i, &ch)| tone_of(ch).map(|tone| (i, tone)))?;

    if !oracle.contains(&skeleton(buf.iter().copied())) {
        return None;
    }

    let mut bare = buf.to_vec();
    bare[old] = strip_tone(bare[old]);

    let new = tone_position(&bare)?;
    if new == old {
        return None;
    }

    bare[new] = retone(bare[new], Some(tone))?;
    Some(bare)
}
