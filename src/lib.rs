//! Singly linked lists for `no_std` + `alloc` environments.
//!
//! - [`linked_list::intrusive`]: intrusive links, nodes and a pointer-threaded
//!   [`LinkedList`](linked_list::intrusive::list::LinkedList).
//! - [`linked_list::handle`]: [`HandleList`], an owning list of caller values
//!   addressed through opaque [`ItemHandle`]s.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod linked_list;

#[doc(inline)]
pub use linked_list::handle::{HandleList, Item, ItemHandle, ListError};
