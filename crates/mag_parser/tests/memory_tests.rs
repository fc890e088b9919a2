//! Verifies that parsing leaves no heap allocations behind once the arena
//! is dropped. Node text and node lists live in the arena, so repeated
//! parse-and-drop cycles must return to the same outstanding byte count.
//!
//! Kept in its own test binary so the allocator counter is not disturbed by
//! concurrently running tests.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicI64, Ordering};

use bumpalo::Bump;

struct CountingAllocator;

static OUTSTANDING_BYTES: AtomicI64 = AtomicI64::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        OUTSTANDING_BYTES.fetch_add(layout.size() as i64, Ordering::SeqCst);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        OUTSTANDING_BYTES.fetch_sub(layout.size() as i64, Ordering::SeqCst);
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

const SOURCE: &str = "\
let xs = [1, 2, 3];\n\
let mut total = xs[0] + 2 ** 3;\n\
if (total == 9) { (total = total + 1); } else { (total = 0); }\n\
const label = \"done\";\n";

#[test]
fn test_repeated_parses_release_all_heap_memory() {
    // The first parse warms up any lazily initialized allocations.
    {
        let arena = Bump::new();
        assert!(mag_parser::parse_program(&arena, SOURCE).is_ok());
    }
    let before = OUTSTANDING_BYTES.load(Ordering::SeqCst);
    for _ in 0..100 {
        let arena = Bump::new();
        let program = mag_parser::parse_program(&arena, SOURCE);
        assert!(program.is_ok());
        drop(program);
        drop(arena);
    }
    let after = OUTSTANDING_BYTES.load(Ordering::SeqCst);
    assert_eq!(before, after, "heap bytes leaked across parses");
}
