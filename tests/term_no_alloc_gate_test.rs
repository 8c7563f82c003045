use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use starfall::core::{GameSnapshot, GameState};
use starfall::term::{encode_diff_into, FrameBuffer, GameView, Viewport};

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
fn term_diff_encoding_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(60, 24);
    let mut prev = FrameBuffer::new(viewport.width, viewport.height);
    let mut next = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = GameSnapshot::default();
    // Large enough for a full-screen diff of styled cells.
    let mut out: Vec<u8> = Vec::with_capacity(256 * 1024);

    let mut game = GameState::new(1);
    game.start();

    // Warm-up.
    game.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut prev);
    game.move_left();
    game.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut next);
    encode_diff_into(&prev, &next, &mut out).unwrap();

    let allocs = with_alloc_counting(|| {
        for i in 0..100 {
            std::mem::swap(&mut prev, &mut next);
            if i % 2 == 0 {
                game.move_right();
            } else {
                game.move_left();
            }
            game.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut next);
            out.clear();
            let _ = encode_diff_into(&prev, &next, &mut out);
        }
    });

    assert!(!out.is_empty());
    assert_eq!(allocs, 0);
}
