use crate::text::{Vowel, VowelChar};

/// Letters that close an `ie`/`ye` pair into `iê`/`yê`.
#[must_use]
pub fn closes_ie(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'n' | 'm' | 't' | 'c' | 'p' | 'u')
}

/// `tie` + `n` → `tiên`, `ye` + `n` → `yên`.
///
/// On success the returned buffer already ends with `following`.
#[must_use]
pub fn try_convert(buf: &[char], following: char) -> Option<Vec<char>> {
    let &[.., second_last, last] = buf else {
        return None;
    };

    if !matches!(second_last, 'i' | 'I' | 'y' | 'Y') {
        return None;
    }

    let e = VowelChar::parse(last).filter(|v| v.vowel == Vowel::E)?;

    let mut out = buf.to_vec();
    if let Some(slot) = out.last_mut() {
        *slot = e.with_vowel(Vowel::ECircumflex).to_char();
    }
    out.push(following);
    Some(out)
}
