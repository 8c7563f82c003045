//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]s. The core
//! never sees key codes; a front end forwards whatever this mapping returns.

pub mod map;

pub use starfall_types as types;

pub use map::{handle_key_event, should_quit};
