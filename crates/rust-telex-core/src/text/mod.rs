pub mod syllable;
pub mod vowel;

pub use syllable::{SyllableOracle, SyllableSet, StandardSyllables, skeleton};
pub use vowel::{Tone, Vowel, VowelChar};
