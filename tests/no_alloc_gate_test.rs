use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use starfall::core::{GameSnapshot, GameState};
use starfall::term::{FrameBuffer, GameView, Viewport};
use starfall::types::GameAction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn game_loop_and_render_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut game = GameState::new(1);
    game.start();
    let view = GameView::default();
    let vp = Viewport::new(60, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    // Warm-up.
    game.snapshot_into(&mut snap);
    view.render_into(&snap, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let _ = game.tick(16);
        }

        for _ in 0..50 {
            let _ = game.apply_action(GameAction::MoveLeft);
            let _ = game.apply_action(GameAction::MoveRight);
            let _ = game.apply_action(GameAction::Rotate);
            let _ = game.apply_action(GameAction::SoftDrop);
        }

        // Hard drop drives lock, line clear and spawn.
        for _ in 0..40 {
            let _ = game.apply_action(GameAction::HardDrop);
            let _ = game.tick(1001);
            if game.is_game_over() {
                let _ = game.apply_action(GameAction::Restart);
            }
            game.snapshot_into(&mut snap);
            view.render_into(&snap, vp, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
