// File: src/text/vowel.rs

/// One of the five Vietnamese tone marks.
///
/// The declaration order is the fixed table index (sắc=0 .. nặng=4) used by
/// [`TONED`]. Do not reorder.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Tone {
    Sac,
    Huyen,
    Hoi,
    Nga,
    Nang,
}

impl Tone {
    pub const ALL: [Self; 5] = [Self::Sac, Self::Huyen, Self::Hoi, Self::Nga, Self::Nang];

    /// Maps a Telex tone key (`s f r x j`, case-insensitive) to its tone.
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            's' => Some(Self::Sac),
            'f' => Some(Self::Huyen),
            'r' => Some(Self::Hoi),
            'x' => Some(Self::Nga),
            'j' => Some(Self::Nang),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Only sắc and nặng may sit on a syllable closed by c, ch, p or t.
    #[must_use]
    pub const fn allowed_after_stop(self) -> bool {
        matches!(self, Self::Sac | Self::Nang)
    }
}

/// The twelve vowel identities of Vietnamese orthography, tone excluded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Vowel {
    A,
    ABreve,
    ACircumflex,
    E,
    ECircumflex,
    I,
    O,
    OCircumflex,
    OHorn,
    U,
    UHorn,
    Y,
}

impl Vowel {
    pub const ALL: [Self; 12] = [
        Self::A,
        Self::ABreve,
        Self::ACircumflex,
        Self::E,
        Self::ECircumflex,
        Self::I,
        Self::O,
        Self::OCircumflex,
        Self::OHorn,
        Self::U,
        Self::UHorn,
        Self::Y,
    ];

    /// Lowercase untoned form.
    #[must_use]
    pub const fn plain(self) -> char {
        match self {
            Self::A => 'a',
            Self::ABreve => 'ă',
            Self::ACircumflex => 'â',
            Self::E => 'e',
            Self::ECircumflex => 'ê',
            Self::I => 'i',
            Self::O => 'o',
            Self::OCircumflex => 'ô',
            Self::OHorn => 'ơ',
            Self::U => 'u',
            Self::UHorn => 'ư',
            Self::Y => 'y',
        }
    }

    /// The bare ASCII letter, with circumflex, breve and horn stripped.
    #[must_use]
    pub const fn ascii(self) -> char {
        match self {
            Self::A | Self::ABreve | Self::ACircumflex => 'a',
            Self::E | Self::ECircumflex => 'e',
            Self::I => 'i',
            Self::O | Self::OCircumflex | Self::OHorn => 'o',
            Self::U | Self::UHorn => 'u',
            Self::Y => 'y',
        }
    }

    /// Circumflex form of the base letter: a/ă → â, e → ê, o/ơ → ô.
    #[must_use]
    pub const fn circumflex(self) -> Option<Self> {
        match self.ascii() {
            'a' => Some(Self::ACircumflex),
            'e' => Some(Self::ECircumflex),
            'o' => Some(Self::OCircumflex),
            _ => None,
        }
    }

    /// Breve or horn form of the base letter: a/â → ă, o/ô → ơ, u → ư.
    #[must_use]
    pub const fn breve_horn(self) -> Option<Self> {
        match self.ascii() {
            'a' => Some(Self::ABreve),
            'o' => Some(Self::OHorn),
            'u' => Some(Self::UHorn),
            _ => None,
        }
    }

    #[must_use]
    pub const fn has_circumflex(self) -> bool {
        matches!(self, Self::ACircumflex | Self::ECircumflex | Self::OCircumflex)
    }

    #[must_use]
    pub const fn has_breve_horn(self) -> bool {
        matches!(self, Self::ABreve | Self::OHorn | Self::UHorn)
    }

    /// Vowels already carrying a circumflex, breve or horn. They win tone placement.
    #[must_use]
    pub const fn is_special(self) -> bool {
        self.has_circumflex() || self.has_breve_horn()
    }

    #[must_use]
    pub const fn toned(self, tone: Tone) -> char {
        TONED[self as usize][tone.index()]
    }
}

/// Lowercase toned forms, rows in [`Vowel`] order, columns in [`Tone`] order.
const TONED: [[char; 5]; 12] = [
    ['á', 'à', 'ả', 'ã', 'ạ'],
    ['ắ', 'ằ', 'ẳ', 'ẵ', 'ặ'],
    ['ấ', 'ầ', 'ẩ', 'ẫ', 'ậ'],
    ['é', 'è', 'ẻ', 'ẽ', 'ẹ'],
    ['ế', 'ề', 'ể', 'ễ', 'ệ'],
    ['í', 'ì', 'ỉ', 'ĩ', 'ị'],
    ['ó', 'ò', 'ỏ', 'õ', 'ọ'],
    ['ố', 'ồ', 'ổ', 'ỗ', 'ộ'],
    ['ớ', 'ờ', 'ở', 'ỡ', 'ợ'],
    ['ú', 'ù', 'ủ', 'ũ', 'ụ'],
    ['ứ', 'ừ', 'ử', 'ữ', 'ự'],
    ['ý', 'ỳ', 'ỷ', 'ỹ', 'ỵ'],
];

/// A vowel as it appears in text: identity, tone and letter case.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VowelChar {
    pub vowel: Vowel,
    pub tone: Option<Tone>,
    pub upper: bool,
}

impl VowelChar {
    /// Decomposes a (possibly toned, possibly uppercase) vowel character.
    ///
    /// Returns `None` for anything that is not one of the 144 Vietnamese vowel
    /// forms per case.
    #[must_use]
    pub fn parse(ch: char) -> Option<Self> {
        let upper = ch.is_uppercase();
        let lower = if upper { to_lower(ch) } else { ch };

        Vowel::ALL.into_iter().find_map(|vowel| {
            if vowel.plain() == lower {
                return Some(Self {
                    vowel,
                    tone: None,
                    upper,
                });
            }
            Tone::ALL
                .into_iter()
                .find(|&tone| vowel.toned(tone) == lower)
                .map(|tone| Self {
                    vowel,
                    tone: Some(tone),
                    upper,
                })
        })
    }

    #[must_use]
    pub fn to_char(self) -> char {
        let lower = match self.tone {
            Some(tone) => self.vowel.toned(tone),
            None => self.vowel.plain(),
        };
        if self.upper { to_upper(lower) } else { lower }
    }

    /// Same case and tone, different vowel identity.
    #[must_use]
    pub const fn with_vowel(self, vowel: Vowel) -> Self {
        Self { vowel, ..self }
    }

    #[must_use]
    pub const fn with_tone(self, tone: Option<Tone>) -> Self {
        Self { tone, ..self }
    }
}

/// Vietnamese letters all have single-scalar case mappings.
fn to_lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn to_upper(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

#[must_use]
pub fn is_vowel(ch: char) -> bool {
    VowelChar::parse(ch).is_some()
}

/// The tone carried by `ch`, if it is a toned vowel.
#[must_use]
pub fn tone_of(ch: char) -> Option<Tone> {
    VowelChar::parse(ch).and_then(|v| v.tone)
}

/// `ch` with its tone removed. Non-vowels are returned unchanged.
#[must_use]
pub fn strip_tone(ch: char) -> char {
    VowelChar::parse(ch).map_or(ch, |v| v.with_tone(None).to_char())
}

/// Case-preserving stroke toggle: `d` ⇄ `đ`, `D` ⇄ `Đ`.
#[must_use]
pub const fn toggle_stroke(ch: char) -> Option<char> {
    match ch {
        'd' => Some('đ'),
        'D' => Some('Đ'),
        'đ' => Some('d'),
        'Đ' => Some('D'),
        _ => None,
    }
}

/// Replaces the tone of vowel `ch`, keeping identity and case. `None` for non-vowels.
#[must_use]
pub fn retone(ch: char, tone: Option<Tone>) -> Option<char> {
    VowelChar::parse(ch).map(|v| v.with_tone(tone).to_char())
}
