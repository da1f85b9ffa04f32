//! Routing between the OS hooks and the engine.

pub mod dispatch;
pub mod hotkeys;
pub mod remap;

pub use dispatch::{HookDecision, dispatch_key};
pub use remap::RemapKey;
