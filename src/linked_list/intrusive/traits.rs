use core::ptr::NonNull;

use super::iter::LinkedListIter;

/// A trait for a singly linked list.
pub trait List: Link {
    /// Get the head of the linked list
    fn head(&self) -> Option<NonNull<Self::Target>>;

    /// Get the tail of the linked list
    fn tail(&self) -> Option<NonNull<Self::Target>>;

    /// Push a new node to the front of the linked list
    fn push_front(&mut self, node: NonNull<Self::Target>);

    /// Push a new node to the back of the linked list
    fn push_back(&mut self, node: NonNull<Self::Target>);

    /// Pop a node from the front of the linked list
    fn pop_front(&mut self) -> Option<NonNull<Self::Target>>;

    /// Remove a node from the linked list
    ///
    /// Scans from the head for `node` and unlinks it. Returns `None` if the
    /// node is not part of this list; the pointer is only compared, never
    /// dereferenced, in that case.
    fn remove(&mut self, node: NonNull<Self::Target>) -> Option<NonNull<Self::Target>>;

    /// Check if the linked list is empty
    fn is_empty(&self) -> bool;

    /// Get the number of nodes in the linked list
    fn count(&self) -> usize;

    /// Get an iterator over the linked list
    /// # Safety
    /// The caller must ensure that the linked list is not modified while iterating.
    unsafe fn iter<'a>(&'a self) -> LinkedListIter<'a, Self::Target, Self>
    where
        Self::Target: Node<Target = Self::Target>,
    {
        unsafe { LinkedListIter::new(self) }
    }
}

/// A trait for a link in a linked list.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A trait for a node in a linked list.
///
/// Nodes are always handled through the `NonNull` the list was given, which
/// is the only pointer ever stored in a link.
pub trait Node: Link {
    /// Insert `node` directly after `parent`.
    ///
    /// `parent` is either a list (the node becomes the new head) or another
    /// node already in the list.
    ///
    /// # Safety
    ///
    /// `node` must be valid for writes and not linked into any list.
    unsafe fn append_to<L>(node: NonNull<Self>, parent: &mut L)
    where
        L: Link<Target = Self>;

    /// Detach `node` from the linked list
    ///
    /// # Safety
    ///
    /// The parent must be the node directly in front of `node`, or the
    /// `LinkedList` whose head is `node`. It will update the parent's next
    /// pointer to skip `node`.
    unsafe fn detach<L>(node: NonNull<Self>, parent: &mut L)
    where
        L: Link<Target = Self>;
}

/// A trait for a node that contains data.
pub trait NodeWithData: Node {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}
