use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use super::{Global, NodeAllocator};

mod fuzz;

fn trace_init() -> tracing::dispatcher::DefaultGuard {
    use tracing_subscriber::prelude::*;
    tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .with_timer(())
        .set_default()
}

/// Allocator that serves a fixed number of allocations, then reports
/// exhaustion. Counts live allocations so leaks show up in assertions.
#[derive(Debug, Default)]
struct LimitedAlloc {
    remaining: Cell<usize>,
    live: Cell<usize>,
}

impl LimitedAlloc {
    fn new(limit: usize) -> Self {
        Self {
            remaining: Cell::new(limit),
            live: Cell::new(0),
        }
    }

    fn live(&self) -> usize {
        self.live.get()
    }
}

impl NodeAllocator for LimitedAlloc {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        let remaining = self.remaining.get();
        if remaining == 0 {
            return None;
        }
        let ptr = Global.allocate(layout)?;
        self.remaining.set(remaining - 1);
        self.live.set(self.live.get() + 1);
        Some(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.live.set(self.live.get() - 1);
        unsafe { Global.deallocate(ptr, layout) }
    }
}
