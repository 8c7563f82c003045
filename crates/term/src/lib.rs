//! Terminal presentation layer.
//!
//! Renders game snapshots into a character framebuffer and flushes that
//! framebuffer to a real terminal. Nothing here mutates game state.
//!
//! - [`fb`]: styled character cells
//! - [`game_view`]: pure snapshot -> framebuffer painter (unit-testable)
//! - [`renderer`]: crossterm output with changed-run diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use starfall_core as core;
pub use starfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
