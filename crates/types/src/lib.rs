//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so the core rules, the
//! terminal front end and the tests can all agree on the same vocabulary.
//!
//! # Grid Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Coordinates are `(row, col)`
//! with row 0 at the top; pieces spawn on row 0, horizontally centered.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Runner frame interval (~60 FPS), also the drop interval floor |
//! | `BASE_DROP_MS` | 1000 | Drop interval at level 1 |
//!
//! The drop interval at level `n` is `BASE_DROP_MS / n`, clamped to `TICK_MS`.
//!
//! # Examples
//!
//! ```
//! use starfall_types::{PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.letter(), "T");
//! assert_eq!((DEFAULT_COLS, DEFAULT_ROWS), (10, 20));
//! ```

/// Default grid width in cells
pub const DEFAULT_COLS: usize = 10;

/// Default grid height in cells
pub const DEFAULT_ROWS: usize = 20;

/// Runner frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Drop interval at level 1 (one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Lower bound for the drop interval; never drop faster than one row per frame
pub const MIN_DROP_INTERVAL_MS: u32 = TICK_MS;

/// Points per cleared line, multiplied by the current level
pub const POINTS_PER_LINE: u32 = 10;

/// Cleared lines needed per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in the order the uniform picker indexes them
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single uppercase letter, used in logs
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Player intents and session commands
///
/// Intents (moves, rotation, drops) are only honoured while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; a blocked soft drop is simply rejected
    SoftDrop,
    /// Rotate piece 90° clockwise, no wall kicks
    Rotate,
    /// Drop to the lowest legal row and lock immediately
    HardDrop,
    /// Leave the idle screen and begin the first game
    Start,
    /// Throw away the current session and begin a new one
    Restart,
}

/// Cues emitted by the core for the presentation layer (sound, flashes).
///
/// The core never reads these back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The active piece was merged into the grid
    PieceLocked,
    /// One or more rows were removed by a single lock
    LinesCleared(u32),
    /// The level went up; carries the new level
    LevelUp(u32),
    /// A freshly spawned piece collided; the session is over
    GameOver,
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Created but not started; waiting for `start`
    #[default]
    Idle,
    /// A piece is falling and input is accepted
    Running,
    /// Terminal until `restart`
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn drop_floor_is_one_frame() {
        assert_eq!(MIN_DROP_INTERVAL_MS, TICK_MS);
        assert!(BASE_DROP_MS > MIN_DROP_INTERVAL_MS);
    }
}
