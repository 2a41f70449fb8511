//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] commands,
//! plus the host-level quit and restart keys. Nothing here touches game
//! state; the host forwards the resulting actions to the session.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
