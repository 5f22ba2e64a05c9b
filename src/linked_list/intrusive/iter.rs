use core::ptr::NonNull;

use super::traits::{List, Node};

/// An iterator over a linked list, head to tail.
pub struct LinkedListIter<'a, T: Node, L: List> {
    _list: &'a L,
    current: Option<NonNull<T>>,
}

impl<'a, T, L> LinkedListIter<'a, T, L>
where
    T: Node<Target = T>,
    L: List<Target = T>,
{
    /// Creates a new iterator over the given list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while the iterator is alive.
    pub unsafe fn new(list: &'a L) -> Self {
        Self {
            current: list.head(),
            _list: list,
        }
    }
}

impl<'a, T, L> Iterator for LinkedListIter<'a, T, L>
where
    T: Node<Target = T>,
    L: List<Target = T>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next() };
        })
    }
}
