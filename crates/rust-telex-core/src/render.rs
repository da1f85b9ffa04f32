//! Minimal edits between what the application shows and what it should show.

/// Receiver of the engine's output, normally keystroke injection into the
/// foreground application. Both calls are fire-and-forget.
pub trait OutputSink {
    fn send_backspaces(&mut self, count: usize);
    fn send_text(&mut self, text: &str);
}

/// Delete `backspaces` characters before the caret, then type `insert`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Edit {
    pub backspaces: usize,
    pub insert: String,
}

impl Edit {
    /// Diff on Unicode scalar values: keep the longest common prefix.
    #[must_use]
    pub fn between(previous: &str, next: &str) -> Option<Self> {
        if previous == next {
            return None;
        }

        let common = previous
            .chars()
            .zip(next.chars())
            .take_while(|(a, b)| a == b)
            .count();

        let backspaces = previous.chars().count() - common;
        let insert = next.chars().skip(common).collect();

        Some(Self { backspaces, insert })
    }

    pub fn apply<S: OutputSink + ?Sized>(&self, sink: &mut S) {
        if self.backspaces > 0 {
            sink.send_backspaces(self.backspaces);
        }
        if !self.insert.is_empty() {
            sink.send_text(&self.insert);
        }
    }
}

/// Tracks the text currently shown for the syllable being typed.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    previous: String,
}

impl Renderer {
    #[must_use]
    pub fn shown(&self) -> &str {
        &self.previous
    }

    /// Moves the display to `next`, returning the edit that does it.
    pub fn render(&mut self, next: &str) -> Option<Edit> {
        let edit = Edit::between(&self.previous, next)?;
        next.clone_into(&mut self.previous);
        Some(edit)
    }

    /// Forgets the shown text without emitting anything; it stays on screen as committed.
    pub fn clear(&mut self) {
        self.previous.clear();
    }
}

/// Sink that replays edits into an in-memory text, for shells without
/// injection and for tests.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecordingSink {
    pub text: String,
    pub backspaces_sent: usize,
    pub inserts_sent: usize,
}

impl OutputSink for RecordingSink {
    fn send_backspaces(&mut self, count: usize) {
        self.backspaces_sent += count;
        for _ in 0..count {
            let _ = self.text.pop();
        }
    }

    fn send_text(&mut self, text: &str) {
        self.inserts_sent += 1;
        self.text.push_str(text);
    }
}
