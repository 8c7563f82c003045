//! Pieces module - tetromino shape matrices and rotation
//!
//! Each kind is a small boolean matrix defined once as constant data. Rotation
//! produces a new matrix (transpose, then reverse the row order of the source
//! columns: a 90° clockwise turn). There is no facing state and no kick table:
//! four turns give back the starting matrix by construction.

use crate::types::PieceKind;

/// Side length of the backing storage; every tetromino fits in 4x4.
pub const MAX_SHAPE_DIM: usize = 4;

/// A shape matrix: `rows x cols` cells of a 4x4 backing array.
///
/// Cells outside `rows x cols` are always false, so derived equality compares
/// shapes by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from literal rows (1 = filled).
    ///
    /// Used for the canonical table; rows/cols beyond 4 are truncated.
    pub const fn from_matrix<const R: usize, const C: usize>(m: [[u8; C]; R]) -> Self {
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let rows = if R > MAX_SHAPE_DIM { MAX_SHAPE_DIM } else { R };
        let cols = if C > MAX_SHAPE_DIM { MAX_SHAPE_DIM } else { C };
        let mut r = 0;
        while r < rows {
            let mut c = 0;
            while c < cols {
                bits[r][c] = m[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: rows as u8,
            cols: cols as u8,
            bits,
        }
    }

    /// Number of rows (height)
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Number of columns (width)
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the matrix cell at `(row, col)` is filled
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Offsets `(d_row, d_col)` of every filled cell, top-left first
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols())
                .filter(move |&c| self.bits[r][c])
                .map(move |c| (r as i32, c as i32))
        })
    }

    /// The shape turned 90° clockwise.
    ///
    /// Row `c` of the result is column `c` of `self` read bottom to top, so an
    /// `R x C` shape becomes `C x R`.
    pub fn rotated_cw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (c, out_row) in bits.iter_mut().enumerate().take(cols) {
            for (r, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.bits[rows - 1 - r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

const I_SHAPE: Shape = Shape::from_matrix([[1, 1, 1, 1]]);
const J_SHAPE: Shape = Shape::from_matrix([[1, 0, 0], [1, 1, 1]]);
const L_SHAPE: Shape = Shape::from_matrix([[0, 0, 1], [1, 1, 1]]);
const O_SHAPE: Shape = Shape::from_matrix([[1, 1], [1, 1]]);
const S_SHAPE: Shape = Shape::from_matrix([[0, 1, 1], [1, 1, 0]]);
const T_SHAPE: Shape = Shape::from_matrix([[0, 1, 0], [1, 1, 1]]);
const Z_SHAPE: Shape = Shape::from_matrix([[1, 1, 0], [0, 1, 1]]);

/// Spawn-orientation matrix for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
