//! Snapshot module - owned copies of game state for renderers

use crate::pieces::Shape;
use crate::transform::Piece;
use crate::types::{PieceKind, Phase, BASE_DROP_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i32,
    pub col: i32,
}

impl ActiveSnapshot {
    /// Absolute `(row, col)` of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(dr, dc)| (self.row + dr, self.col + dc))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            row: value.row,
            col: value.col,
        }
    }
}

/// Owned copy of everything a renderer needs for one frame.
///
/// `snapshot_into` refills an existing value so a render loop can reuse the
/// grid allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cols: usize,
    pub rows: usize,
    /// Row-major occupancy, `rows * cols` long
    pub grid: Vec<bool>,
    pub active: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Locked-cell occupancy; false outside the grid
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.grid[row * self.cols + col]
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cols: 0,
            rows: 0,
            grid: Vec::new(),
            active: None,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
        }
    }
}
