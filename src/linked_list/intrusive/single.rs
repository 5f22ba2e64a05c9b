use core::ptr::NonNull;

use super::traits::{Link, Node, NodeWithData};

/// A node in a singly linked list.
///
/// The link is the first field and the layout is `repr(C)`, so a pointer to
/// the node and a pointer to its link are interchangeable.
#[derive(Debug)]
#[repr(C)]
pub struct SingleNode<T> {
    link: SingleLink,
    data: T,
}

impl<T> SingleNode<T> {
    /// Creates an unlinked node holding `data`.
    pub const fn new(data: T) -> Self {
        Self {
            link: SingleLink { next: None },
            data,
        }
    }
}

impl<T: Default> Default for SingleNode<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Link for SingleNode<T> {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.link.next().map(|n| n.cast())
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.link.set_next(next.map(|n| n.cast()));
    }
}

impl<T> Node for SingleNode<T> {
    #[inline]
    unsafe fn append_to<L>(node: NonNull<Self>, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        unsafe { (*node.as_ptr()).set_next(parent.next()) };
        parent.set_next(Some(node));
    }

    #[inline]
    unsafe fn detach<L>(node: NonNull<Self>, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        debug_assert_eq!(
            parent.next(),
            Some(node),
            "Parent must be the one that contains this node"
        );
        unsafe {
            parent.set_next((*node.as_ptr()).next());
            (*node.as_ptr()).set_next(None);
        }
    }
}

impl<T> NodeWithData for SingleNode<T> {
    type Data = T;

    #[inline]
    fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

/// A link in a singly linked list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLink {
    next: Option<NonNull<Self>>,
}

impl Link for SingleLink {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

unsafe impl Send for SingleLink {}
unsafe impl Sync for SingleLink {}
