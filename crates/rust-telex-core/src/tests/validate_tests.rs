use super::chars;
use crate::{
    engine::validate::{
        Decision, Fallback, decide, ends_with_stop, has_double_keystroke, tone_allowed,
    },
    text::{StandardSyllables, Tone},
};

#[test]
fn stop_endings() {
    assert!(ends_with_stop(&chars("hoc")));
    assert!(ends_with_stop(&chars("sách")));
    assert!(ends_with_stop(&chars("đẹp")));
    assert!(ends_with_stop(&chars("mát")));
    assert!(!ends_with_stop(&chars("anh")));
    assert!(!ends_with_stop(&chars("c")));
}

#[test]
fn tone_allowed_after_stop() {
    assert!(tone_allowed(&chars("hoc"), Tone::Sac));
    assert!(tone_allowed(&chars("hoc"), Tone::Nang));
    assert!(!tone_allowed(&chars("hoc"), Tone::Nga));
    assert!(tone_allowed(&chars("hoa"), Tone::Nga));
}

#[test]
fn double_keystroke_ignores_case() {
    assert!(has_double_keystroke(&chars("aww")));
    assert!(has_double_keystroke(&chars("aA")));
    assert!(!has_double_keystroke(&chars("aba")));
    assert!(!has_double_keystroke(&[]));
}

#[test]
fn decide_orders_its_checks() {
    let oracle = StandardSyllables;

    assert_eq!(
        decide(&chars("â"), &chars("azz"), true, &oracle),
        Decision::Raw(Fallback::DoubleKeystroke)
    );
    assert_eq!(
        decide(&chars("xyz"), &chars("xyzz"), false, &oracle),
        Decision::Raw(Fallback::UnknownSyllable)
    );
    assert_eq!(
        decide(&chars("hòc"), &chars("hocf"), true, &oracle),
        Decision::Raw(Fallback::ToneAfterStop)
    );
    assert_eq!(
        decide(&chars("học"), &chars("hocj"), true, &oracle),
        Decision::Processed
    );
}

#[test]
fn fallback_names_are_stable() {
    assert_eq!(Fallback::DoubleKeystroke.as_str(), "double_keystroke");
    assert_eq!(Fallback::UnknownSyllable.as_str(), "unknown_syllable");
    assert_eq!(Fallback::ToneAfterStop.as_str(), "tone_after_stop");
}
