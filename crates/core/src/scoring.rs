//! Scoring module - line clearing, score and level progression
//!
//! Rules:
//! - Every cleared line is worth `POINTS_PER_LINE * level`, using the level in
//!   effect *before* the clear. No multi-line bonus.
//! - `level = 1 + lines / LINES_PER_LEVEL`, always recomputed from the total.
//! - Drop interval is `BASE_DROP_MS / level`, never below `MIN_DROP_INTERVAL_MS`.

use crate::grid::Grid;
use crate::types::{BASE_DROP_MS, LINES_PER_LEVEL, MIN_DROP_INTERVAL_MS, POINTS_PER_LINE};

/// Remove every full row, bottom to top, and return how many were removed.
///
/// After a removal the same index is examined again, since the row above has
/// just shifted into it. Row 0 is included: a full top row is reachable by
/// sliding pieces along it while the spawn columns are still free.
pub fn clear_lines(grid: &mut Grid) -> u32 {
    let mut cleared = 0;
    let mut row = grid.rows();
    while row > 0 {
        let y = row - 1;
        if grid.is_row_full(y) {
            grid.remove_row_shift_down(y);
            cleared += 1;
        } else {
            row -= 1;
        }
    }
    cleared
}

/// Level for a running total of cleared lines
pub fn level_for_lines(lines: u32) -> u32 {
    1 + lines / LINES_PER_LEVEL
}

/// Points for clearing `lines` rows at `level`
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    lines.saturating_mul(POINTS_PER_LINE).saturating_mul(level)
}

/// Milliseconds between automatic drops at `level`
pub fn get_drop_interval_ms(level: u32) -> u32 {
    (BASE_DROP_MS / level.max(1)).max(MIN_DROP_INTERVAL_MS)
}

/// Result of feeding one clear pass into [`Scoring`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearOutcome {
    pub lines: u32,
    pub points: u32,
    /// New level, if this clear crossed a level boundary
    pub level_up: Option<u32>,
}

/// Score, level and line counters for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scoring {
    score: u32,
    level: u32,
    lines: u32,
}

impl Scoring {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Account for `lines` rows cleared by a single lock
    pub fn apply_clear(&mut self, lines: u32) -> ClearOutcome {
        if lines == 0 {
            return ClearOutcome::default();
        }

        let points = calculate_line_score(lines, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines);

        let new_level = level_for_lines(self.lines);
        let level_up = (new_level > self.level).then_some(new_level);
        self.level = new_level;

        ClearOutcome {
            lines,
            points,
            level_up,
        }
    }

    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.level)
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_line_score_is_linear() {
        assert_eq!(calculate_line_score(1, 1), 10);
        assert_eq!(calculate_line_score(4, 1), 40);
        assert_eq!(calculate_line_score(2, 3), 60);
        assert_eq!(calculate_line_score(0, 7), 0);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(35), 4);
    }

    #[test]
    fn test_drop_interval() {
        assert_eq!(get_drop_interval_ms(1), 1000);
        assert_eq!(get_drop_interval_ms(2), 500);
        assert_eq!(get_drop_interval_ms(3), 333);
        assert_eq!(get_drop_interval_ms(1000), MIN_DROP_INTERVAL_MS);
        assert_eq!(get_drop_interval_ms(0), 1000);
    }

    #[test]
    fn test_clear_uses_level_before_level_up() {
        let mut s = Scoring::new();
        s.apply_clear(4);
        s.apply_clear(4);
        assert_eq!((s.score(), s.lines(), s.level()), (80, 8, 1));

        let out = s.apply_clear(3);
        assert_eq!(out.points, 30);
        assert_eq!(out.level_up, Some(2));
        assert_eq!((s.score(), s.lines(), s.level()), (110, 11, 2));
    }

    #[test]
    fn test_level_can_jump_more_than_one_step() {
        let mut s = Scoring::new();
        // Not reachable through play (max 4 lines per lock), but the formula is a
        // recompute, not an increment.
        let out = s.apply_clear(25);
        assert_eq!(out.level_up, Some(3));
        assert_eq!(s.level(), 3);
    }

    #[test]
    fn test_zero_lines_changes_nothing() {
        let mut s = Scoring::new();
        assert_eq!(s.apply_clear(0), ClearOutcome::default());
        assert_eq!(s, Scoring::new());
    }

    #[test]
    fn test_clear_lines_reexamines_shifted_row() {
        let mut grid = Grid::from_rows(
            GameConfig::default(),
            &["##########", "##########", "#.........", "##########"],
        );
        assert_eq!(clear_lines(&mut grid), 3);
        assert_eq!(grid.occupied_count(), 1);
        assert!(grid.cell(19, 0));
    }
}
