//! Starfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benches can write `starfall::core::GameState`.

pub use starfall_core as core;
pub use starfall_input as input;
pub use starfall_term as term;
pub use starfall_types as types;
