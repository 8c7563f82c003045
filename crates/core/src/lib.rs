//! Core game logic - pure, synchronous and testable
//!
//! This crate holds the whole rule set of the falling-block game and has no
//! dependency on terminals, timers or audio. A front end drives it through
//! [`GameState`]: it forwards player intents, reports elapsed wall-clock time
//! through [`GameState::tick`], renders a [`GameSnapshot`] and reacts to the
//! returned [`GameEvent`](types::GameEvent)s.
//!
//! # Module Structure
//!
//! - [`config`]: grid dimensions, validated once at construction
//! - [`grid`]: occupancy matrix; out-of-bounds reads are occupied
//! - [`pieces`]: the seven shape matrices and clockwise rotation
//! - [`transform`]: collision, move, rotate, hard drop, lock
//! - [`scoring`]: line clearing, linear scoring, level and drop cadence
//! - [`rng`]: uniform piece selection with replacement
//! - [`game_state`]: the Idle / Running / GameOver controller
//! - [`snapshot`]: owned render state
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn is an independent 1-in-7 pick
//! - **Rotation without kicks**: a rotation that collides is simply discarded
//! - **No lock delay**: a piece locks on the first tick it cannot fall
//! - **Scoring**: `lines * 10 * level`, level = `1 + lines / 10`
//! - **Game over**: a freshly spawned piece already collides
//!
//! # Example
//!
//! ```
//! use starfall_core::GameState;
//! use starfall_types::{GameAction, GameEvent, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! let events = game.apply_action(GameAction::HardDrop);
//! assert_eq!(events[0], GameEvent::PieceLocked);
//! assert_eq!(game.grid().occupied_count(), 4);
//! ```

pub mod config;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod transform;

pub use starfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use game_state::{Events, GameState};
pub use grid::Grid;
pub use pieces::{get_shape, Shape};
pub use rng::{PieceSource, ScriptedPieces, SimpleRng, UniformPieces};
pub use scoring::{clear_lines, get_drop_interval_ms, ClearOutcome, Scoring};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use transform::{collides, Piece};
