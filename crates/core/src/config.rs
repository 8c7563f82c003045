//! Grid configuration, fixed at construction.

use thiserror::Error;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

/// Smallest accepted width/height; the I piece is four cells long.
pub const MIN_DIM: usize = 4;

/// Largest accepted width/height.
pub const MAX_DIM: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width {0} out of range (4..=64)")]
    Cols(usize),
    #[error("grid height {0} out of range (4..=64)")]
    Rows(usize),
}

/// Grid dimensions for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    cols: usize,
    rows: usize,
}

impl GameConfig {
    pub fn new(cols: usize, rows: usize) -> Result<Self, ConfigError> {
        if !(MIN_DIM..=MAX_DIM).contains(&cols) {
            return Err(ConfigError::Cols(cols));
        }
        if !(MIN_DIM..=MAX_DIM).contains(&rows) {
            return Err(ConfigError::Rows(rows));
        }
        Ok(Self { cols, rows })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }
}
