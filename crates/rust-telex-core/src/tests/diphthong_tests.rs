use super::chars;
use crate::engine::diphthong::{closes_ie, try_convert};

#[test]
fn closing_letters() {
    for ch in ['n', 'm', 't', 'c', 'p', 'u', 'N'] {
        assert!(closes_ie(ch), "{ch}");
    }
    for ch in ['g', 'h', 'a', 's'] {
        assert!(!closes_ie(ch), "{ch}");
    }
}

#[test]
fn ie_and_ye_gain_circumflex_and_the_closing_letter() {
    assert_eq!(try_convert(&chars("tie"), 'n'), Some(chars("tiên")));
    assert_eq!(try_convert(&chars("ye"), 'n'), Some(chars("yên")));
    assert_eq!(try_convert(&chars("YE"), 'N'), Some(chars("YÊN")));
}

#[test]
fn existing_tone_is_carried_over() {
    assert_eq!(try_convert(&chars("tié"), 'n'), Some(chars("tiến")));
}

#[test]
fn nothing_to_convert() {
    assert_eq!(try_convert(&chars("tiê"), 'n'), None);
    assert_eq!(try_convert(&chars("tae"), 'n'), None);
    assert_eq!(try_convert(&chars("e"), 'n'), None);
    assert_eq!(try_convert(&[], 'n'), None);
}
