use starfall::core::{GameConfig, GameState, ScriptedPieces};
use starfall::term::{encode_diff_into, AnchorY, FrameBuffer, GameView, Viewport};
use starfall::types::{Phase, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 tall
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.grid[19 * snap.cols] = true;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_highlights_active_piece() {
    let mut game = GameState::with_source(
        GameConfig::default(),
        ScriptedPieces::new(vec![PieceKind::T]),
    );
    game.start();
    let snap = game.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // T at (0, 4): top nub on col 5, base on cols 4..=6 of row 1
    let nub = fb.get(1 + 5 * 2, 1).unwrap();
    assert_eq!(nub.ch, '█');
    assert!(nub.style.bold);
    for col in 4..7u16 {
        assert_eq!(fb.get(1 + col * 2, 2).unwrap().ch, '█');
    }
    assert_eq!(fb.get(1 + 4 * 2, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameState::new(1);
    game.start();
    let mut snap = game.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.drop_interval_ms = 500;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LEVEL"));
    assert!(all.contains("LINES"));
    assert!(all.contains("500ms"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_overlays_follow_phase() {
    let mut snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(40, 24);

    assert_eq!(snap.phase, Phase::Idle);
    assert!(screen_text(&view.render(&snap, vp)).contains("PRESS ENTER"));

    snap.phase = Phase::Running;
    let running = screen_text(&view.render(&snap, vp));
    assert!(!running.contains("PRESS ENTER"));
    assert!(!running.contains("GAME OVER"));

    snap.phase = Phase::GameOver;
    let over = screen_text(&view.render(&snap, vp));
    assert!(over.contains("GAME OVER"));
    assert!(over.contains("R TO RESTART"));
}

#[test]
fn term_view_anchor_top_pins_frame() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 40));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
}

#[test]
fn term_view_scales_to_custom_grid() {
    let config = GameConfig::new(6, 8).unwrap();
    let snap = GameState::with_config(config, 1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(14, 10));
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
}

#[test]
fn moving_a_piece_changes_few_cells() {
    let mut game = GameState::with_source(
        GameConfig::default(),
        ScriptedPieces::new(vec![PieceKind::O]),
    );
    game.start();
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let before = view.render(&game.snapshot(), vp);
    game.move_left();
    let after = view.render(&game.snapshot(), vp);

    let mut full = Vec::new();
    starfall::term::encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len() / 4);
}
