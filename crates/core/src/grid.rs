//! Grid module - the occupancy matrix
//!
//! A `rows x cols` matrix of occupancy flags stored as a flat row-major vector.
//! Coordinates are `(row, col)`; row 0 is the top. Dimensions never change after
//! construction.
//!
//! Reads outside the grid report "occupied". That single rule turns the floor,
//! the walls and the ceiling into ordinary obstacles for collision checks.

use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cols: usize,
    rows: usize,
    /// Row-major (row * cols + col)
    cells: Vec<bool>,
}

impl Grid {
    /// Create an empty grid with the configured dimensions
    pub fn new(config: GameConfig) -> Self {
        Self {
            cols: config.cols(),
            rows: config.rows(),
            cells: vec![false; config.cols() * config.rows()],
        }
    }

    /// Build a grid from an ASCII picture, one string per row, top row first.
    ///
    /// `#` (or any non-space, non-`.` char) marks an occupied cell. Rows shorter
    /// than `cols` are padded with empty cells; missing rows are added at the top
    /// so the picture sits on the floor.
    pub fn from_rows(config: GameConfig, picture: &[&str]) -> Self {
        let mut grid = Self::new(config);
        let offset = grid.rows.saturating_sub(picture.len());
        for (i, line) in picture.iter().take(grid.rows).enumerate() {
            for (col, ch) in line.chars().take(grid.cols).enumerate() {
                if ch != '.' && ch != ' ' {
                    grid.set((offset + i) as i32, col as i32);
                }
            }
        }
        grid
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Occupancy at `(row, col)`. Anything outside the grid is occupied.
    pub fn cell(&self, row: i32, col: i32) -> bool {
        match self.index(row, col) {
            Some(idx) => self.cells[idx],
            None => true,
        }
    }

    /// Mark `(row, col)` occupied.
    ///
    /// Returns false (and changes nothing) when the coordinate is outside the grid.
    pub fn set(&mut self, row: i32, col: i32) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = true;
                true
            }
            None => false,
        }
    }

    /// True iff every column of `row` is occupied; false for rows outside the grid
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|&filled| filled))
            .unwrap_or(false)
    }

    /// Remove `row`, shift everything above it down by one and open an empty row 0.
    ///
    /// Out-of-range rows are ignored.
    pub fn remove_row_shift_down(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let width = self.cols;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(false);
    }

    /// Borrow one row of cells
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Number of occupied cells on the whole grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
