use core::ptr::NonNull;

use super::traits::{Link, List, Node};

/// A generic intrusive singly linked list.
///
/// Keeps both ends so that nodes can be appended in O(1); removal of an
/// arbitrary node scans from the head to find its parent.
#[derive(Debug)]
pub struct LinkedList<T: Node> {
    head: Option<NonNull<T>>,
    tail: Option<NonNull<T>>,
    count: usize,
}

impl<T> LinkedList<T>
where
    T: Node,
{
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            count: 0,
        }
    }
}

/// The list acts as the parent link of its head node, so that linking and
/// unlinking the head goes through the same code path as any other node.
impl<T> Link for LinkedList<T>
where
    T: Node,
{
    type Target = T;

    fn next(&self) -> Option<NonNull<T>> {
        self.head
    }

    fn set_next(&mut self, next: Option<NonNull<T>>) {
        self.head = next;
    }
}

impl<T> List for LinkedList<T>
where
    T: Node<Target = T>,
{
    fn head(&self) -> Option<NonNull<T>> {
        self.head
    }

    fn tail(&self) -> Option<NonNull<T>> {
        self.tail
    }

    fn push_front(&mut self, node: NonNull<T>) {
        unsafe { T::append_to(node, self) };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.count += 1;
    }

    fn push_back(&mut self, node: NonNull<T>) {
        unsafe {
            match self.tail {
                Some(tail) => T::append_to(node, &mut *tail.as_ptr()),
                None => T::append_to(node, self),
            }
        }
        self.tail = Some(node);
        self.count += 1;
    }

    fn pop_front(&mut self) -> Option<NonNull<T>> {
        let head = self.head?;
        unsafe { T::detach(head, self) };
        if self.tail == Some(head) {
            self.tail = None;
        }
        self.count -= 1;
        Some(head)
    }

    /// Returns the pointer the list was given for the node, which may carry
    /// different provenance than `node`.
    fn remove(&mut self, node: NonNull<T>) -> Option<NonNull<T>> {
        let mut prev: Option<NonNull<T>> = None;
        let mut current = self.head;
        while let Some(candidate) = current {
            if candidate == node {
                unsafe {
                    match prev {
                        Some(prev) => T::detach(candidate, &mut *prev.as_ptr()),
                        None => T::detach(candidate, self),
                    }
                }
                if self.tail == Some(candidate) {
                    self.tail = prev;
                }
                self.count -= 1;
                return Some(candidate);
            }
            prev = Some(candidate);
            current = unsafe { candidate.as_ref().next() };
        }
        None
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn count(&self) -> usize {
        self.count
    }
}

impl<T> Default for LinkedList<T>
where
    T: Node,
{
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl<T: Node + Send> Send for LinkedList<T> {}
unsafe impl<T: Node + Sync> Sync for LinkedList<T> {}
