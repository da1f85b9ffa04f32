//! Telex keystroke conversion for Vietnamese.
//!
//! The crate is platform independent: a shell feeds [`input::KeyEvent`]s into an
//! [`Engine`] and forwards the resulting edits to an [`render::OutputSink`].

pub mod engine;
pub mod input;
pub mod render;
pub mod text;

pub use engine::{Engine, EngineOptions, simulate, simulate_with};
pub use input::{Key, KeyDisposition, KeyEvent, Modifiers, ResetReason};
pub use render::{Edit, OutputSink, RecordingSink, Renderer};
pub use text::{StandardSyllables, SyllableOracle, SyllableSet};

#[cfg(test)]
mod tests;
