//! Game state module - the game loop controller
//!
//! Owns the grid, the active piece, the scoring counters and the session phase,
//! and drives `spawn -> (inputs) -> drop -> lock -> clear -> spawn` until a
//! spawn collides.
//!
//! Every command runs to completion before returning and hands back the events
//! it produced. A lock and everything that follows it (clear, score, respawn)
//! happens inside one call; no input can observe the board in between.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::{clear_lines, Scoring};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::transform::{self, collides, Piece};
use crate::types::{GameAction, GameEvent, Phase};

/// Events produced by a single command.
///
/// One command locks at most one piece, so it can emit at most
/// `PieceLocked`, `LinesCleared`, `LevelUp` and `GameOver`.
pub type Events = ArrayVec<GameEvent, 4>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformPieces> {
    config: GameConfig,
    grid: Grid,
    active: Option<Piece>,
    scoring: Scoring,
    phase: Phase,
    /// Milliseconds accumulated since the last automatic drop
    drop_timer_ms: u32,
    source: S,
}

impl GameState<UniformPieces> {
    /// Create an idle 10x20 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create an idle game with custom grid dimensions
    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        Self::with_source(config, UniformPieces::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create an idle game that draws its pieces from `source`
    pub fn with_source(config: GameConfig, source: S) -> Self {
        Self {
            config,
            grid: Grid::new(config),
            active: None,
            scoring: Scoring::new(),
            phase: Phase::Idle,
            drop_timer_ms: 0,
            source,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.scoring.score()
    }

    pub fn level(&self) -> u32 {
        self.scoring.level()
    }

    pub fn lines(&self) -> u32 {
        self.scoring.lines()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Board setup hook for tests and benches.
    ///
    /// Cells written under the active piece break the lock invariant; `start`
    /// and `restart` wipe whatever was set here.
    #[doc(hidden)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The falling piece. After game over this is the spawn that collided.
    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Current drop cadence in milliseconds
    pub fn drop_interval_ms(&self) -> u32 {
        self.scoring.drop_interval_ms()
    }

    /// Milliseconds accumulated towards the next automatic drop
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    /// Leave `Idle` and spawn the first piece. Ignored in any other phase.
    pub fn start(&mut self) -> Events {
        let mut events = Events::new();
        if self.phase != Phase::Idle {
            return events;
        }
        info!("starting game on a {}x{} grid", self.config.cols(), self.config.rows());
        self.begin_session(&mut events);
        events
    }

    /// Discard the current session (in any phase) and begin a new one
    pub fn restart(&mut self) -> Events {
        let mut events = Events::new();
        info!(
            "restarting game (previous score {}, level {}, lines {})",
            self.score(),
            self.level(),
            self.lines()
        );
        self.begin_session(&mut events);
        events
    }

    fn begin_session(&mut self, events: &mut Events) {
        self.grid.clear();
        self.scoring = Scoring::new();
        self.active = None;
        self.phase = Phase::Running;
        self.spawn_piece(events);
    }

    /// Draw the next kind and place it at the top of the grid.
    ///
    /// A spawn that collides ends the session.
    fn spawn_piece(&mut self, events: &mut Events) {
        let kind = self.source.next_kind();
        let piece = Piece::spawn(kind, self.grid.cols());
        self.active = Some(piece);
        self.drop_timer_ms = 0;

        if collides(&piece, &self.grid) {
            self.phase = Phase::GameOver;
            events.push(GameEvent::GameOver);
            info!(
                "game over: {:?} blocked at spawn (score {}, level {}, lines {})",
                kind,
                self.score(),
                self.level(),
                self.lines()
            );
        } else {
            debug!("spawned {} at row {}, col {}", kind.letter(), piece.row, piece.col);
        }
    }

    /// Merge the active piece, clear rows, score them and spawn the next piece
    fn lock_and_advance(&mut self, piece: Piece, events: &mut Events) {
        transform::lock(&piece, &mut self.grid);
        self.active = None;
        events.push(GameEvent::PieceLocked);
        debug!("locked {} at row {}, col {}", piece.kind.letter(), piece.row, piece.col);

        let lines = clear_lines(&mut self.grid);
        let outcome = self.scoring.apply_clear(lines);
        if outcome.lines > 0 {
            events.push(GameEvent::LinesCleared(outcome.lines));
            debug!(
                "cleared {} line(s) for {} points (total {})",
                outcome.lines,
                outcome.points,
                self.score()
            );
        }
        if let Some(level) = outcome.level_up {
            events.push(GameEvent::LevelUp(level));
            info!("level up: {} (drop interval {}ms)", level, self.drop_interval_ms());
        }

        self.spawn_piece(events);
    }

    /// The active piece, only while running
    fn live_piece(&self) -> Option<Piece> {
        if self.phase != Phase::Running {
            return None;
        }
        self.active
    }

    fn shift(&mut self, d_row: i32, d_col: i32) -> bool {
        let Some(piece) = self.live_piece() else {
            return false;
        };
        let moved = transform::try_move(piece, d_row, d_col, &self.grid);
        self.active = Some(moved);
        moved != piece
    }

    /// Returns true if the piece moved
    pub fn move_left(&mut self) -> bool {
        self.shift(0, -1)
    }

    /// Returns true if the piece moved
    pub fn move_right(&mut self) -> bool {
        self.shift(0, 1)
    }

    /// Move down one row. A blocked soft drop is rejected; it does not lock.
    pub fn soft_drop(&mut self) -> bool {
        self.shift(1, 0)
    }

    /// Rotate clockwise. Returns true if the new orientation was kept.
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.live_piece() else {
            return false;
        };
        let turned = transform::rotate(piece, &self.grid);
        self.active = Some(turned);
        turned != piece
    }

    /// Drop to the lowest legal row, then lock, clear and respawn
    pub fn hard_drop(&mut self) -> Events {
        let mut events = Events::new();
        let Some(piece) = self.live_piece() else {
            return events;
        };
        let landed = transform::hard_drop(piece, &self.grid);
        self.lock_and_advance(landed, &mut events);
        events
    }

    /// Advance the drop clock by `elapsed_ms` of wall-clock time.
    ///
    /// Once more than one drop interval has accumulated the piece falls one
    /// row and the clock restarts; if it cannot fall, it locks. At most one row
    /// per call. Every spawn also restarts the clock, including the one after
    /// a hard drop, so a new piece always gets a full interval.
    pub fn tick(&mut self, elapsed_ms: u32) -> Events {
        let mut events = Events::new();
        let Some(piece) = self.live_piece() else {
            return events;
        };

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.drop_interval_ms() {
            return events;
        }
        self.drop_timer_ms = 0;

        let moved = transform::try_move(piece, 1, 0, &self.grid);
        if moved != piece {
            self.active = Some(moved);
        } else {
            self.lock_and_advance(piece, &mut events);
        }
        events
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> Events {
        match action {
            GameAction::MoveLeft => {
                self.move_left();
                Events::new()
            }
            GameAction::MoveRight => {
                self.move_right();
                Events::new()
            }
            GameAction::SoftDrop => {
                self.soft_drop();
                Events::new()
            }
            GameAction::Rotate => {
                self.rotate();
                Events::new()
            }
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cols = self.grid.cols();
        out.rows = self.grid.rows();
        out.grid.clear();
        out.grid.extend_from_slice(self.grid.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.phase = self.phase;
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
