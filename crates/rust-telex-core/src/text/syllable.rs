// File: src/text/syllable.rs

use std::{collections::HashSet, sync::LazyLock};

use super::vowel::VowelChar;

/// Canonical ASCII form of a syllable: lowercase, diacritics and tone marks
/// stripped, `đ` spelled as `dd`.
#[must_use]
pub fn skeleton<I>(chars: I) -> String
where
    I: IntoIterator<Item = char>,
{
    let mut out = String::new();
    for ch in chars {
        match ch {
            'đ' | 'Đ' => out.push_str("dd"),
            _ => match VowelChar::parse(ch) {
                Some(v) => out.push(v.vowel.ascii()),
                None => out.extend(ch.to_lowercase()),
            },
        }
    }
    out
}

/// Membership test over canonical syllable skeletons.
pub trait SyllableOracle {
    fn contains(&self, skeleton: &str) -> bool;
}

impl<T: SyllableOracle + ?Sized> SyllableOracle for &T {
    fn contains(&self, skeleton: &str) -> bool {
        (**self).contains(skeleton)
    }
}

impl<T: SyllableOracle + ?Sized> SyllableOracle for Box<T> {
    fn contains(&self, skeleton: &str) -> bool {
        (**self).contains(skeleton)
    }
}

impl SyllableOracle for HashSet<String> {
    fn contains(&self, skeleton: &str) -> bool {
        HashSet::contains(self, skeleton)
    }
}

/// An explicit set of valid skeletons, typically loaded from a word list.
#[derive(Clone, Debug, Default)]
pub struct SyllableSet {
    skeletons: HashSet<String>,
}

impl SyllableSet {
    /// Parses a newline separated list. Blank lines and `#` comments are
    /// skipped; every entry is canonicalized, so toned spellings are accepted.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let skeletons = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default().trim())
            .filter(|line| !line.is_empty())
            .map(|line| skeleton(line.chars()))
            .collect();
        Self { skeletons }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skeletons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skeletons.is_empty()
    }
}

impl SyllableOracle for SyllableSet {
    fn contains(&self, skeleton: &str) -> bool {
        self.skeletons.contains(skeleton)
    }
}

impl FromIterator<String> for SyllableSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            skeletons: iter.into_iter().map(|s| skeleton(s.chars())).collect(),
        }
    }
}

/// Built-in oracle covering the standard Vietnamese syllable inventory.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardSyllables;

impl SyllableOracle for StandardSyllables {
    fn contains(&self, skeleton: &str) -> bool {
        STANDARD.contains(skeleton)
    }
}

static STANDARD: LazyLock<SyllableSet> = LazyLock::new(|| {
    let skeletons: HashSet<String> = ONSETS
        .iter()
        .flat_map(|&onset| {
            RIMES
                .iter()
                .filter(move |&&rime| onset_accepts(onset, rime))
                .map(move |&rime| format!("{onset}{rime}"))
        })
        .collect();
    tracing::debug!(count = skeletons.len(), "standard syllable set built");
    SyllableSet { skeletons }
});

const ONSETS: &[&str] = &[
    "", "b", "c", "ch", "d", "dd", "g", "gh", "gi", "h", "k", "kh", "l", "m", "n", "ng", "ngh",
    "nh", "p", "ph", "qu", "r", "s", "t", "th", "tr", "v", "x",
];

// Skeleton rimes. Several written rimes share one skeleton (ă/â/a, ô/ơ/o, ư/u, ê/e).
const RIMES: &[&str] = &[
    // open
    "a", "e", "i", "o", "u", "y", "ai", "ao", "au", "ay", "eo", "eu", "ia", "iu", "oa", "oe",
    "oi", "ua", "ue", "ui", "uo", "uu", "uy", "ieu", "yeu", "oai", "oay", "oeo", "uay", "uoi",
    "uou", "uya", "uyu",
    // closed
    "ac", "ach", "am", "an", "ang", "anh", "ap", "at",
    "ec", "ech", "em", "en", "eng", "enh", "ep", "et",
    "ich", "im", "in", "inh", "ip", "it",
    "oc", "om", "on", "ong", "op", "ot", "ooc", "oong",
    "uc", "um", "un", "ung", "up", "ut",
    "iec", "iem", "ien", "ieng", "iep", "iet",
    "yem", "yen", "yet", "ych", "ynh", "yt",
    "oac", "oach", "oam", "oan", "oang", "oanh", "oap", "oat", "oen", "oet",
    "uac", "uach", "uan", "uang", "uanh", "uat", "uech", "uen", "uenh",
    "uoc", "uom", "uon", "uong", "uop", "uot",
    "uych", "uyen", "uyet", "uynh", "uyt",
];

fn onset_accepts(onset: &str, rime: &str) -> bool {
    let Some(first) = rime.chars().next() else {
        return false;
    };
    let front = matches!(first, 'e' | 'i' | 'y');

    if first == 'y' && rime.len() > 1 && !matches!(onset, "" | "qu") {
        return false;
    }

    match onset {
        "k" => front,
        "gh" | "ngh" => matches!(first, 'e' | 'i'),
        "c" | "ng" => !front,
        "g" => !matches!(first, 'e' | 'y'),
        "gi" => !matches!(first, 'i' | 'y'),
        "qu" => first != 'u',
        _ => true,
    }
}
