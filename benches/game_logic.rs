use criterion::{black_box, criterion_group, criterion_main, Criterion};
use starfall::core::transform::{rotate, try_move, Piece};
use starfall::core::{clear_lines, GameSnapshot, GameState, Grid};
use starfall::types::{GameEvent, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.tick(black_box(16)).contains(&GameEvent::GameOver) {
                state.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::default();
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    grid.set(row, col);
                }
            }
            black_box(clear_lines(&mut grid))
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop_and_spawn", |b| {
        b.iter(|| {
            state.hard_drop();
            if state.is_game_over() {
                state.restart();
            }
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let grid = Grid::default();
    let piece = Piece::spawn(PieceKind::T, grid.cols());

    c.bench_function("try_move", |b| {
        b.iter(|| try_move(black_box(piece), 1, 0, &grid))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let grid = Grid::default();
    let piece = Piece::spawn(PieceKind::L, grid.cols());

    c.bench_function("rotate", |b| b.iter(|| rotate(black_box(piece), &grid)));
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
