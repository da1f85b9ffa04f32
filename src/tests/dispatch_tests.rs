use std::time::Instant;

use rust_telex_core::{Key, KeyEvent, Modifiers, RecordingSink};
use tracing_test::traced_test;

use crate::{
    app::AppState,
    config::Config,
    input::{HookDecision, RemapKey, dispatch_key},
};

const CTRL_SHIFT: Modifiers = Modifiers {
    ctrl: true,
    shift: true,
    ..Modifiers::NONE
};

fn letter(ch: char) -> KeyEvent {
    KeyEvent::down(Key::letter(ch), Modifiers::NONE)
}

fn toggle_chord() -> KeyEvent {
    KeyEvent::down(Key::Letter('s'), CTRL_SHIFT)
}

fn type_str(state: &mut AppState, sink: &mut RecordingSink, now: Instant, s: &str) {
    for ch in s.chars() {
        let (decision, changed) = dispatch_key(state, &letter(ch), None, now, sink);
        assert_eq!(decision, HookDecision::Swallow, "{ch}");
        assert!(changed.is_none());
    }
}

#[test]
fn letters_reach_the_engine() {
    let mut state = AppState::new(Config::default());
    let mut sink = RecordingSink::default();
    type_str(&mut state, &mut sink, Instant::now(), "Vietj");
    assert_eq!(sink.text, "Việt");
}

#[test]
#[traced_test]
fn toggle_hotkey_is_swallowed_and_disables_the_ime() {
    let mut state = AppState::new(Config::default());
    let mut sink = RecordingSink::default();

    let (decision, changed) = dispatch_key(&mut state, &toggle_chord(), None, Instant::now(), &mut sink);

    assert_eq!(decision, HookDecision::Swallow);
    let cfg = changed.expect("toggle returns settings to persist");
    assert!(!cfg.ime_enabled);
    assert!(!state.ime_enabled());
    assert!(sink.text.is_empty());
    assert!(logs_contain("ime toggled by hotkey"));
}

#[test]
fn disabled_ime_passes_letters_through() {
    let mut state = AppState::new(Config {
        ime_enabled: false,
        ..Default::default()
    });
    let mut sink = RecordingSink::default();

    for ch in "as".chars() {
        let (decision, _) = dispatch_key(&mut state, &letter(ch), None, Instant::now(), &mut sink);
        assert_eq!(decision, HookDecision::Pass);
    }
    assert!(state.engine().is_empty());
    assert!(sink.text.is_empty());
}

#[test]
fn toggle_hotkey_twice_restores_the_ime() {
    let mut state = AppState::new(Config::default());
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    let _ = dispatch_key(&mut state, &toggle_chord(), None, now, &mut sink);
    let (_, changed) = dispatch_key(&mut state, &toggle_chord(), None, now, &mut sink);

    assert!(changed.is_some_and(|cfg| cfg.ime_enabled));
    assert!(state.ime_enabled());
}

#[test]
fn toggle_hotkey_release_does_nothing() {
    let mut state = AppState::new(Config::default());
    let mut sink = RecordingSink::default();
    let release = KeyEvent::up(Key::Letter('s'), CTRL_SHIFT);

    let (decision, changed) = dispatch_key(&mut state, &release, None, Instant::now(), &mut sink);
    assert_eq!(decision, HookDecision::Pass);
    assert!(changed.is_none());
    assert!(state.ime_enabled());
}

#[test]
fn other_ctrl_chords_reset_and_pass() {
    let mut state = AppState::new(Config::default());
    let mut sink = RecordingSink::default();
    let now = Instant::now();
    type_str(&mut state, &mut sink, now, "vie");

    let ctrl_s = KeyEvent::down(
        Key::Letter('s'),
        Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        },
    );
    let (decision, changed) = dispatch_key(&mut state, &ctrl_s, None, now, &mut sink);

    assert_eq!(decision, HookDecision::Pass);
    assert!(changed.is_none());
    assert!(state.engine().is_empty());
    assert!(state.ime_enabled());
}

#[test]
#[traced_test]
fn remap_cycles_and_resets_the_syllable() {
    let mut state = AppState::new(Config::default());
    let mut sink = RecordingSink::default();
    let now = Instant::now();
    type_str(&mut state, &mut sink, now, "tie");

    let cases = [
        (RemapKey::Grave, RemapKey::CapsLock),
        (RemapKey::CapsLock, RemapKey::Tab),
        (RemapKey::Tab, RemapKey::Grave),
    ];
    for (from, to) in cases {
        let event = KeyEvent::down(Key::Other, Modifiers::NONE);
        let (decision, changed) = dispatch_key(&mut state, &event, Some(from), now, &mut sink);
        assert_eq!(decision, HookDecision::Remap(to));
        assert!(decision.should_swallow());
        assert!(changed.is_none());
    }

    assert!(state.engine().is_empty());
    assert_eq!(sink.text, "tie");
    assert!(logs_contain("key remapped"));
}

#[test]
fn remap_key_release_is_swallowed() {
    let mut state = AppState::new(Config::default());
    let mut sink = RecordingSink::default();
    let event = KeyEvent::up(Key::Other, Modifiers::NONE);

    let (decision, _) = dispatch_key(&mut state, &event, Some(RemapKey::Tab), Instant::now(), &mut sink);
    assert_eq!(decision, HookDecision::Swallow);
}

#[test]
fn remap_applies_with_the_ime_off() {
    let mut state = AppState::new(Config {
        ime_enabled: false,
        ..Default::default()
    });
    let mut sink = RecordingSink::default();
    let event = KeyEvent::down(Key::Other, Modifiers::NONE);

    let (decision, _) = dispatch_key(&mut state, &event, Some(RemapKey::Grave), Instant::now(), &mut sink);
    assert_eq!(decision, HookDecision::Remap(RemapKey::CapsLock));
}

#[test]
fn disabled_remap_lets_the_key_commit_the_syllable() {
    let mut state = AppState::new(Config {
        key_remap_enabled: false,
        ..Default::default()
    });
    let mut sink = RecordingSink::default();
    let now = Instant::now();
    type_str(&mut state, &mut sink, now, "as");

    let event = KeyEvent::down(Key::Other, Modifiers::NONE);
    let (decision, _) = dispatch_key(&mut state, &event, Some(RemapKey::Tab), now, &mut sink);

    assert_eq!(decision, HookDecision::Pass);
    assert!(!decision.should_swallow());
    assert!(state.engine().is_empty());
    assert_eq!(sink.text, "á");
}

#[test]
fn pass_decision_is_not_swallowed() {
    assert!(!HookDecision::Pass.should_swallow());
    assert!(HookDecision::Swallow.should_swallow());
}
