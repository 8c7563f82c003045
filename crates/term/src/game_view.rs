//! GameView: paints a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts are covered by plain unit tests. White blocks on
//! black; the falling piece is drawn bold.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Phase;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Vertical placement of the board frame inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BLOCK: char = '█';
const EMPTY: char = '·';

const FIELD_BG: Rgb = Rgb::BLACK;
const BORDER: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::BLACK);
const LOCKED: CellStyle = CellStyle::plain(Rgb::new(225, 225, 225), FIELD_BG);
const FALLING: CellStyle = CellStyle::plain(Rgb::WHITE, FIELD_BG).bold();
const GRID_DOT: CellStyle = CellStyle::plain(Rgb::new(70, 70, 80), FIELD_BG).dim();
const LABEL: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const VALUE: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::BLACK);
const BANNER: CellStyle = CellStyle::plain(Rgb::WHITE, Rgb::BLACK).bold();

/// A lightweight terminal painter for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up cells on typical terminal glyphs.
        Self::new(2, 1)
    }
}

/// Top-left corner of the board frame and its outer size
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame_for(snap, viewport);
        self.draw_border(fb, frame);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let (ch, style) = if snap.is_occupied(row, col) {
                    (BLOCK, LOCKED)
                } else {
                    (EMPTY, GRID_DOT)
                };
                self.fill_cell(fb, frame, row as i32, col as i32, snap, ch, style);
            }
        }

        if let Some(active) = snap.active {
            for (row, col) in active.cells() {
                self.fill_cell(fb, frame, row, col, snap, BLOCK, FALLING);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            Phase::Idle => self.draw_banner(fb, frame, &["PRESS ENTER"]),
            Phase::GameOver => self.draw_banner(fb, frame, &["GAME OVER", "R TO RESTART"]),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame_for(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let w = (snap.cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        if f.w < 2 || f.h < 2 {
            return;
        }
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);
        fb.put_char(f.x, f.y, '┌', BORDER);
        fb.put_char(right, f.y, '┐', BORDER);
        fb.put_char(f.x, bottom, '└', BORDER);
        fb.put_char(right, bottom, '┘', BORDER);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', BORDER);
            fb.put_char(x, bottom, '─', BORDER);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', BORDER);
            fb.put_char(right, y, '│', BORDER);
        }
    }

    /// Fill one board cell; coordinates outside the board are skipped.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        row: i32,
        col: i32,
        snap: &GameSnapshot,
        ch: char,
        style: CellStyle,
    ) {
        if row < 0 || col < 0 || row as usize >= snap.rows || col as usize >= snap.cols {
            return;
        }
        let px = f.x + 1 + col as u16 * self.cell_w;
        let py = f.y + 1 + row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        f: Frame,
    ) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let mut y = f.y;
        for (label, value) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y.saturating_add(1), value, VALUE);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "DROP", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.drop_interval_ms, VALUE);
        let digits = snap.drop_interval_ms.max(1).ilog10() as u16 + 1;
        fb.put_str(panel_x + digits, y, "ms", VALUE.dim());
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, f: Frame, lines: &[&str]) {
        let mid_y = f.y.saturating_add(f.h / 2);
        let top = mid_y.saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
            fb.put_str(x, top.saturating_add(i as u16), text, BANNER);
        }
    }
}
