use super::chars;
use crate::{
    engine::tone::{reposition, tone_position},
    text::StandardSyllables,
};

fn pos(s: &str) -> Option<usize> {
    tone_position(&chars(s))
}

#[test]
fn single_vowel_takes_the_tone() {
    assert_eq!(pos("a"), Some(0));
    assert_eq!(pos("hoc"), Some(1));
}

#[test]
fn no_vowel_no_position() {
    assert_eq!(pos("b"), None);
    assert_eq!(pos(""), None);
}

#[test]
fn marked_vowel_wins() {
    assert_eq!(pos("tiên"), Some(2));
    assert_eq!(pos("muô"), Some(2));
    assert_eq!(pos("thuê"), Some(3));
}

#[test]
fn adjacent_marked_vowels_pick_the_second() {
    assert_eq!(pos("tương"), Some(2));
    assert_eq!(pos("người"), Some(3));
}

#[test]
fn oa_oe_uy_put_the_tone_on_the_second_vowel() {
    assert_eq!(pos("hoa"), Some(2));
    assert_eq!(pos("khoe"), Some(3));
    assert_eq!(pos("thuy"), Some(3));
}

#[test]
fn open_syllable_uses_second_to_last_vowel() {
    assert_eq!(pos("mua"), Some(1));
    assert_eq!(pos("mai"), Some(1));
}

#[test]
fn closed_syllable_uses_last_vowel() {
    assert_eq!(pos("cuoc"), Some(2));
    assert_eq!(pos("toan"), Some(2));
}

#[test]
fn qu_and_gi_onsets_are_not_vowels() {
    assert_eq!(pos("qua"), Some(2));
    assert_eq!(pos("quan"), Some(2));
    assert_eq!(pos("gia"), Some(2));
    assert_eq!(pos("gi"), Some(1));
}

#[test]
fn reposition_moves_tone_when_a_final_consonant_arrives() {
    assert_eq!(reposition(&chars("hóan"), &StandardSyllables), Some(chars("hoán")));
}

#[test]
fn reposition_leaves_correct_or_open_syllables_alone() {
    assert_eq!(reposition(&chars("hóa"), &StandardSyllables), None);
    assert_eq!(reposition(&chars("hán"), &StandardSyllables), None);
    assert_eq!(reposition(&chars("han"), &StandardSyllables), None);
}
