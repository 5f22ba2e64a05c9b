use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::linked_list::intrusive::{
    iter::LinkedListIter,
    list::LinkedList,
    single::SingleNode,
    traits::{Link, List, NodeWithData},
};

use super::allocator::{Global, NodeAllocator};
use super::error::ListError;

/// Source of per-node serials. Shared by every list so that a handle can never
/// be mistaken for a node of another list that reuses the same address.
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

struct Entry<V> {
    value: V,
    serial: u64,
}

type EntryNode<V> = SingleNode<Entry<V>>;

/// Opaque reference to one item of a [`HandleList`].
///
/// A handle stays valid until its item is removed or the list is dropped.
/// Stale handles, and handles belonging to another list, are recognised by
/// every operation that takes one: lookups return `None` and
/// [`HandleList::remove`] returns [`ListError::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemHandle {
    node: NonNull<()>,
    serial: u64,
}

impl ItemHandle {
    #[cfg(feature = "ffi")]
    pub(crate) fn node_ptr(self) -> NonNull<()> {
        self.node
    }
}

// The pointer inside a handle is only dereferenced after the owning list has
// confirmed it is one of its live nodes.
unsafe impl Send for ItemHandle {}
unsafe impl Sync for ItemHandle {}

/// A singly linked list of caller-owned values.
///
/// Values are `Copy` (typically references or pointers), so the list never
/// owns or drops the data they refer to; it owns only its node memory, which
/// comes from the [`NodeAllocator`] `A`.
///
/// Besides the node chain the list keeps a set of its live node addresses,
/// which lets every handle be validated in O(1) before it is dereferenced.
pub struct HandleList<V: Copy, A: NodeAllocator = Global> {
    nodes: LinkedList<EntryNode<V>>,
    index: HashSet<NonNull<EntryNode<V>>>,
    alloc: A,
}

impl<V: Copy> HandleList<V> {
    /// Creates a new, empty list using the global allocator.
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates a new, empty list with room to index `capacity` items without
    /// growing.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ListError> {
        let mut list = Self::new();
        if list.index.try_reserve(capacity).is_err() {
            debug!(capacity, "HandleList::try_with_capacity -> allocation failure");
            return Err(ListError::AllocationFailure);
        }
        Ok(list)
    }
}

impl<V: Copy, A: NodeAllocator> HandleList<V, A> {
    const NODE_LAYOUT: Layout = Layout::new::<EntryNode<V>>();

    /// Creates a new, empty list whose nodes are allocated from `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self {
            nodes: LinkedList::new(),
            index: HashSet::new(),
            alloc,
        }
    }

    /// Appends `value` to the tail of the list and returns its handle.
    ///
    /// On failure the list is left exactly as it was.
    pub fn add(&mut self, value: V) -> Result<ItemHandle, ListError> {
        if self.index.try_reserve(1).is_err() {
            debug!(len = self.len(), "HandleList::add -> index allocation failure");
            return Err(ListError::AllocationFailure);
        }
        let Some(raw) = self.alloc.allocate(Self::NODE_LAYOUT) else {
            debug!(len = self.len(), "HandleList::add -> node allocation failure");
            return Err(ListError::AllocationFailure);
        };

        let serial = NEXT_SERIAL.fetch_add(1, Ordering::Relaxed);
        let node = raw.cast::<EntryNode<V>>();
        unsafe { node.as_ptr().write(SingleNode::new(Entry { value, serial })) };
        self.nodes.push_back(node);
        self.index.insert(node);

        trace!(?node, serial, len = self.len(), "HandleList::add");
        Ok(ItemHandle {
            node: node.cast(),
            serial,
        })
    }

    /// Returns the handle of the first item, or `None` if the list is empty.
    pub fn head_item(&self) -> Option<ItemHandle> {
        self.nodes.head().map(|node| unsafe { Self::handle_of(node) })
    }

    /// Returns the handle of the item added right after `item`.
    ///
    /// `None` if `item` is the last item or is not part of this list.
    pub fn next_item(&self, item: ItemHandle) -> Option<ItemHandle> {
        let node = self.resolve(item)?;
        let next = unsafe { node.as_ref() }.next()?;
        Some(unsafe { Self::handle_of(next) })
    }

    /// Returns the value stored for `item`, or `None` if it is not part of
    /// this list.
    pub fn value(&self, item: ItemHandle) -> Option<V> {
        self.resolve(item)
            .map(|node| unsafe { node.as_ref() }.data().value)
    }

    /// Returns `true` if `item` currently identifies an item of this list.
    pub fn contains(&self, item: ItemHandle) -> bool {
        self.resolve(item).is_some()
    }

    /// Returns the first item, from head to tail, for which `matches` returns
    /// `true`.
    ///
    /// Any state the predicate needs is captured by the closure.
    pub fn find<F>(&self, mut matches: F) -> Option<ItemHandle>
    where
        F: FnMut(&Item<'_, V>) -> bool,
    {
        self.iter().find(|item| matches(item)).map(|item| item.handle())
    }

    /// Unlinks and frees the node identified by `item`, returning its value.
    ///
    /// Fails with [`ListError::NotFound`] if `item` was already removed or
    /// belongs to another list; the list is unchanged in that case. All other
    /// handles stay valid and the order of the remaining items is kept.
    pub fn remove(&mut self, item: ItemHandle) -> Result<V, ListError> {
        let Some(node) = self.resolve(item) else {
            debug!(?item, "HandleList::remove -> not found");
            return Err(ListError::NotFound);
        };

        let Some(node) = self.nodes.remove(node) else {
            debug_assert!(false, "indexed node is missing from the chain");
            return Err(ListError::NotFound);
        };
        self.index.remove(&node);

        trace!(?item, len = self.len(), "HandleList::remove");
        Ok(unsafe { self.release(node) })
    }

    /// Removes the first item and returns its value.
    pub fn pop_front(&mut self) -> Option<V> {
        let node = self.nodes.pop_front()?;
        self.index.remove(&node);
        trace!(?node, len = self.len(), "HandleList::pop_front");
        Some(unsafe { self.release(node) })
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.nodes.count()
    }

    /// Returns `true` if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the items from head to tail.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            // the shared borrow keeps the list from being modified
            inner: unsafe { self.nodes.iter() },
        }
    }

    /// Frees every node. The values the list referred to are untouched.
    pub fn destroy(self) {
        drop(self)
    }

    /// Validates `item` against this list.
    ///
    /// Returns the node pointer the list owns, never the one carried by the
    /// handle.
    fn resolve(&self, item: ItemHandle) -> Option<NonNull<EntryNode<V>>> {
        let node = *self.index.get(&item.node.cast::<EntryNode<V>>())?;
        // indexed nodes are live, so reading the serial is sound
        let serial = unsafe { node.as_ref() }.data().serial;
        (serial == item.serial).then_some(node)
    }

    /// # Safety
    ///
    /// `node` must be a live node of this list.
    unsafe fn handle_of(node: NonNull<EntryNode<V>>) -> ItemHandle {
        ItemHandle {
            node: node.cast(),
            serial: unsafe { node.as_ref() }.data().serial,
        }
    }

    /// # Safety
    ///
    /// `node` must be unlinked, no longer indexed and allocated by `self.alloc`.
    unsafe fn release(&self, node: NonNull<EntryNode<V>>) -> V {
        unsafe {
            let value = node.as_ref().data().value;
            self.alloc.deallocate(node.cast(), Self::NODE_LAYOUT);
            value
        }
    }
}

#[cfg(feature = "ffi")]
impl<V: Copy, A: NodeAllocator> HandleList<V, A> {
    /// Handle for a bare node pointer, if that node is linked into this list.
    pub(crate) fn handle_for_node(&self, node: NonNull<()>) -> Option<ItemHandle> {
        let node = *self.index.get(&node.cast::<EntryNode<V>>())?;
        Some(unsafe { Self::handle_of(node) })
    }

    /// # Safety
    ///
    /// `node` must be a live node of some `HandleList<V, _>`.
    pub(crate) unsafe fn next_of_node(node: NonNull<()>) -> Option<NonNull<()>> {
        let node = unsafe { node.cast::<EntryNode<V>>().as_ref() };
        node.next().map(NonNull::cast)
    }

    /// # Safety
    ///
    /// `node` must be a live node of some `HandleList<V, _>`.
    pub(crate) unsafe fn value_of_node(node: NonNull<()>) -> V {
        unsafe { node.cast::<EntryNode<V>>().as_ref() }.data().value
    }
}

impl<V: Copy, A: NodeAllocator> Drop for HandleList<V, A> {
    fn drop(&mut self) {
        trace!(len = self.len(), "HandleList::drop");
        while let Some(node) = self.nodes.pop_front() {
            unsafe { self.release(node) };
        }
        self.index.clear();
    }
}

impl<V: Copy> Default for HandleList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Copy + fmt::Debug, A: NodeAllocator> fmt::Debug for HandleList<V, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|item| item.value()))
            .finish()
    }
}

unsafe impl<V: Copy + Send, A: NodeAllocator + Send> Send for HandleList<V, A> {}
unsafe impl<V: Copy + Sync, A: NodeAllocator + Sync> Sync for HandleList<V, A> {}

/// A borrowed view of one item, handed to [`HandleList::find`] predicates and
/// yielded by [`HandleList::iter`].
pub struct Item<'a, V> {
    // the list's own pointer, so handles built from it can later free the node
    node: NonNull<EntryNode<V>>,
    _list: PhantomData<&'a EntryNode<V>>,
}

impl<V: Copy> Item<'_, V> {
    fn entry(&self) -> &Entry<V> {
        // the borrow of the list keeps the node alive and unmodified
        unsafe { self.node.as_ref() }.data()
    }

    /// The handle identifying this item.
    pub fn handle(&self) -> ItemHandle {
        ItemHandle {
            node: self.node.cast(),
            serial: self.entry().serial,
        }
    }

    /// The value stored in this item.
    pub fn value(&self) -> V {
        self.entry().value
    }
}

impl<V: Copy + fmt::Debug> fmt::Debug for Item<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("handle", &self.handle())
            .field("value", &self.value())
            .finish()
    }
}

/// Head-to-tail iterator over a [`HandleList`].
pub struct Iter<'a, V> {
    inner: LinkedListIter<'a, EntryNode<V>, LinkedList<EntryNode<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = Item<'a, V>;

    fn next(&mut self) -> Option<Item<'a, V>> {
        self.inner
            .next()
            .map(|node| Item {
                node,
                _list: PhantomData,
            })
    }
}

impl<'a, V: Copy, A: NodeAllocator> IntoIterator for &'a HandleList<V, A> {
    type Item = Item<'a, V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}
