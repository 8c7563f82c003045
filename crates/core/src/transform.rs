//! Transform engine - collision, movement, rotation, hard drop and lock
//!
//! All transforms are pure: they take a piece by value and return the piece to
//! keep. A rejected transform hands back the input unchanged, so callers never
//! see a piece in a colliding position.

use crate::grid::Grid;
use crate::pieces::{get_shape, Shape};
use crate::types::PieceKind;

/// The active falling piece: a shape matrix anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Grid row of the matrix's top edge
    pub row: i32,
    /// Grid column of the matrix's left edge
    pub col: i32,
}

impl Piece {
    /// A piece in spawn orientation, horizontally centered on row 0
    pub fn spawn(kind: PieceKind, grid_cols: usize) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            shape,
            row: 0,
            col: (grid_cols / 2) as i32 - (shape.cols() / 2) as i32,
        }
    }

    /// Absolute `(row, col)` of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(dr, dc)| (self.row + dr, self.col + dc))
    }

    fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..self
        }
    }
}

/// True if any filled cell lands on an occupied or out-of-bounds grid cell
pub fn collides(piece: &Piece, grid: &Grid) -> bool {
    piece.cells().any(|(row, col)| grid.cell(row, col))
}

/// Shift the piece; a colliding result is rejected and the original returned
pub fn try_move(piece: Piece, d_row: i32, d_col: i32, grid: &Grid) -> Piece {
    let moved = piece.offset(d_row, d_col);
    if collides(&moved, grid) {
        piece
    } else {
        moved
    }
}

/// Turn the piece 90° clockwise in place (no kicks); rejected if it collides
pub fn rotate(piece: Piece, grid: &Grid) -> Piece {
    let turned = Piece {
        shape: piece.shape.rotated_cw(),
        ..piece
    };
    if collides(&turned, grid) {
        piece
    } else {
        turned
    }
}

/// Move the piece straight down to the lowest row it can occupy
pub fn hard_drop(piece: Piece, grid: &Grid) -> Piece {
    let mut landed = piece;
    loop {
        let next = landed.offset(1, 0);
        if collides(&next, grid) {
            return landed;
        }
        landed = next;
    }
}

/// Merge the piece's filled cells into the grid.
///
/// The caller guarantees the piece is not colliding; cells outside the grid are
/// skipped rather than written.
pub fn lock(piece: &Piece, grid: &mut Grid) {
    debug_assert!(!collides(piece, grid), "locking a colliding piece");
    for (row, col) in piece.cells() {
        grid.set(row, col);
    }
}

/// True if the piece cannot move down one more row
pub fn is_resting(piece: &Piece, grid: &Grid) -> bool {
    collides(&piece.offset(1, 0), grid)
}
