//! # Handle List
//!
//! [`HandleList`] is an owning singly linked list built on the
//! [intrusive](super::intrusive) core. It allocates one node per value,
//! appends at the tail, and hands out an opaque [`ItemHandle`] for each item.
//!
//! Values are stored by copy and are expected to be references or pointers to
//! data the caller owns: the list frees its nodes, never the data.
//!
//! ```
//! use mola_list::{HandleList, ListError};
//!
//! let (a, b, c) = (1, 2, 3);
//! let mut list = HandleList::new();
//!
//! let ha = list.add(&a).unwrap();
//! let hb = list.add(&b).unwrap();
//! list.add(&c).unwrap();
//!
//! // traversal follows insertion order
//! let head = list.head_item().unwrap();
//! assert_eq!(list.value(head), Some(&1));
//! assert_eq!(list.next_item(head), Some(hb));
//!
//! // the first match wins
//! let odd = list.find(|item| *item.value() % 2 == 1);
//! assert_eq!(odd, Some(ha));
//!
//! assert_eq!(list.remove(hb), Ok(&2));
//! assert_eq!(list.remove(hb), Err(ListError::NotFound));
//! assert_eq!(list.iter().map(|item| *item.value()).collect::<Vec<_>>(), [1, 3]);
//! ```
//!
//! ## Handles
//!
//! A handle carries the node address and a serial number unique to that
//! node. Before a handle is dereferenced the list checks that the address is
//! one of its live nodes and that the serials agree, so a handle that was
//! removed, or that comes from another list, is reported as not found rather
//! than touching freed memory.

mod allocator;
mod error;
mod list;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use allocator::{Global, NodeAllocator};
pub use error::ListError;
pub use list::{HandleList, Item, ItemHandle, Iter};

#[cfg(test)]
mod tests;
