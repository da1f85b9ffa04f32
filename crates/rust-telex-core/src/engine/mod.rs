//! The conversion session.
//!
//! The raw keystroke log is the only state. Every mutation replays the whole
//! log from scratch, so backspace is "drop the last key and replay" and can
//! never drift from what forward typing would have produced.

pub mod diphthong;
pub mod keys;
pub mod modifier;
pub mod tone;
pub mod validate;

use std::time::{Duration, Instant};

pub use keys::{ModifierKey, is_modifier, only_modifiers};
pub use tone::tone_position;
pub use validate::{Decision, Fallback};

use crate::{
    input::{Key, KeyDisposition, KeyEvent, Modifiers, ResetReason},
    render::{Edit, OutputSink, RecordingSink, Renderer},
    text::{StandardSyllables, SyllableOracle},
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Switches the shell may flip between keystrokes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EngineOptions {
    /// `ie`/`ye` + closing letter becomes `iê`/`yê`.
    pub auto_ie_ye: bool,
    /// Two identical keys in a row render the syllable as typed.
    pub double_key_revert: bool,
    /// Inactivity after which the next key starts a new syllable.
    pub timeout: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            auto_ie_ye: true,
            double_key_revert: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug)]
pub struct Engine<O = StandardSyllables> {
    raw: Vec<char>,
    renderer: Renderer,
    last_event: Option<Instant>,
    options: EngineOptions,
    oracle: O,
}

impl Default for Engine<StandardSyllables> {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl Engine<StandardSyllables> {
    pub fn new(options: EngineOptions) -> Self {
        Self::with_oracle(options, StandardSyllables)
    }
}

impl<O: SyllableOracle> Engine<O> {
    pub fn with_oracle(options: EngineOptions, oracle: O) -> Self {
        Self {
            raw: Vec::new(),
            renderer: Renderer::default(),
            last_event: None,
            options,
            oracle,
        }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Takes effect on the next replay; the raw log is kept.
    pub fn set_options(&mut self, options: EngineOptions) {
        if self.options != options {
            tracing::debug!(?options, "engine options updated");
        }
        self.options = options;
    }

    pub fn raw(&self) -> &[char] {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Text currently shown for the pending syllable.
    pub fn shown(&self) -> &str {
        self.renderer.shown()
    }

    /// Replays the raw log into the converted buffer.
    pub fn processed(&self) -> Vec<char> {
        let mut buf: Vec<char> = Vec::with_capacity(self.raw.len());

        for (i, &ch) in self.raw.iter().enumerate() {
            if let Some(key) = ModifierKey::from_char(ch)
                && only_modifiers(&self.raw[i..])
                && let Some(next) = modifier::apply(&buf, key, &self.oracle)
            {
                buf = next;
                continue;
            }

            if self.options.auto_ie_ye
                && diphthong::closes_ie(ch)
                && !is_modifier(ch)
                && let Some(next) = diphthong::try_convert(&buf, ch)
            {
                buf = next;
                continue;
            }

            buf.push(ch);
            if let Some(next) = tone::reposition(&buf, &self.oracle) {
                buf = next;
            }
        }

        buf
    }

    pub fn decision(&self) -> (Decision, Vec<char>) {
        let buf = self.processed();
        let decision = validate::decide(
            &buf,
            &self.raw,
            self.options.double_key_revert,
            &self.oracle,
        );
        (decision, buf)
    }

    /// What the application should show for the current raw log.
    pub fn render_text(&self) -> String {
        match self.decision() {
            (Decision::Processed, buf) => buf.into_iter().collect(),
            (Decision::Raw(fallback), _) => {
                tracing::trace!(fallback = fallback.as_str(), "rendering raw keystrokes");
                self.raw.iter().collect()
            }
        }
    }

    fn rerender(&mut self) -> Option<Edit> {
        let next = self.render_text();
        let edit = self.renderer.render(&next);
        if let Some(edit) = &edit {
            tracing::trace!(
                backspaces = edit.backspaces,
                insert = %edit.insert,
                "render edit"
            );
        }
        edit
    }

    /// Appends one keystroke and returns the edit that brings the display up to date.
    pub fn accept(&mut self, ch: char) -> Option<Edit> {
        self.raw.push(ch);
        self.rerender()
    }

    /// Drops the last keystroke. On an empty log this only resets.
    pub fn delete_last(&mut self) -> Option<Edit> {
        if self.raw.pop().is_none() {
            self.reset(ResetReason::EmptyBackspace);
            return None;
        }
        self.rerender()
    }

    /// Shows the keystrokes exactly as typed and starts over.
    pub fn escape(&mut self) -> Option<Edit> {
        if self.raw.is_empty() {
            return None;
        }

        let raw: String = self.raw.iter().collect();
        let edit = self.renderer.render(&raw);
        self.reset(ResetReason::Escape);
        edit
    }

    /// Forgets the syllable. Whatever is on screen stays there.
    pub fn reset(&mut self, reason: ResetReason) {
        if !self.raw.is_empty() {
            tracing::debug!(reason = reason.as_str(), raw_len = self.raw.len(), "engine reset");
        }
        self.raw.clear();
        self.renderer.clear();
    }

    fn timed_out(&self, now: Instant) -> bool {
        self.last_event
            .is_some_and(|last| now.saturating_duration_since(last) > self.options.timeout)
    }

    /// Routes one hook event and applies its effect to `sink`.
    pub fn handle_key<S: OutputSink + ?Sized>(
        &mut self,
        event: &KeyEvent,
        now: Instant,
        sink: &mut S,
    ) -> KeyDisposition {
        if !event.down {
            return KeyDisposition::Passed;
        }

        if event.modifiers.is_shortcut() {
            self.reset(ResetReason::ShortcutModifier);
            return KeyDisposition::Passed;
        }

        if self.timed_out(now) {
            self.reset(ResetReason::Timeout);
        }
        self.last_event = Some(now);

        let edit = match event.key {
            Key::Letter(_) => {
                let Some(ch) = event.typed_char() else {
                    return KeyDisposition::Passed;
                };
                self.accept(ch)
            }
            Key::Backspace => {
                if self.raw.is_empty() {
                    self.reset(ResetReason::EmptyBackspace);
                    return KeyDisposition::Passed;
                }
                self.delete_last()
            }
            Key::Escape => {
                if self.raw.is_empty() {
                    return KeyDisposition::Passed;
                }
                self.escape()
            }
            Key::Space | Key::Enter => {
                self.reset(ResetReason::Commit);
                return KeyDisposition::Passed;
            }
            key if key.is_navigation() => {
                self.reset(ResetReason::Navigation);
                return KeyDisposition::Passed;
            }
            _ => {
                self.reset(ResetReason::UnsupportedKey);
                return KeyDisposition::Passed;
            }
        };

        if let Some(edit) = edit {
            edit.apply(sink);
        }
        KeyDisposition::Handled
    }
}

/// Converts `input` with default options; see [`simulate_with`].
pub fn simulate(input: &str) -> String {
    simulate_with(EngineOptions::default(), input)
}

/// Runs `input` through a fresh engine and returns the resulting text.
///
/// Letters are keystrokes; any other character commits the syllable and is
/// copied through, the way the application would receive it.
pub fn simulate_with(options: EngineOptions, input: &str) -> String {
    let mut engine = Engine::new(options);
    let mut sink = RecordingSink::default();
    let now = Instant::now();

    for ch in input.chars() {
        let event = KeyEvent::down(Key::letter(ch), simulated_modifiers(ch));
        let event = match ch {
            ' ' => KeyEvent { key: Key::Space, ..event },
            '\n' => KeyEvent { key: Key::Enter, ..event },
            _ => event,
        };

        if engine.handle_key(&event, now, &mut sink) == KeyDisposition::Passed {
            sink.text.push(ch);
        }
    }

    sink.text
}

fn simulated_modifiers(ch: char) -> Modifiers {
    if ch.is_ascii_uppercase() {
        Modifiers::SHIFT
    } else {
        Modifiers::NONE
    }
}
