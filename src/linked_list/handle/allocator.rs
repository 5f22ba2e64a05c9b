use alloc::alloc::{alloc, dealloc};
use core::alloc::Layout;
use core::ptr::NonNull;

/// The allocate/free pair a [`HandleList`](super::HandleList) uses for its
/// nodes.
///
/// Unlike the global allocator, exhaustion is reported to the caller
/// (`None`) instead of aborting, and surfaces as
/// [`ListError::AllocationFailure`](super::ListError::AllocationFailure).
pub trait NodeAllocator {
    /// Allocate memory for `layout`, or return `None` if none is available.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Return memory obtained from [`allocate`](NodeAllocator::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate` on this allocator with the
    /// same `layout`, and must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// Node allocator backed by the global allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl NodeAllocator for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert_ne!(layout.size(), 0);
        NonNull::new(unsafe { alloc(layout) })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { dealloc(ptr.as_ptr(), layout) }
    }
}

impl<A: NodeAllocator + ?Sized> NodeAllocator for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
