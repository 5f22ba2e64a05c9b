//! Singly linked lists.
//!
//! [`intrusive`] holds the building blocks: the nodes carry their own link and
//! the list only threads pointers through them, so the caller decides where
//! node memory lives. [`handle`] builds an owning list on top of it, where the
//! list allocates the nodes and callers refer to items through handles.
//!
//! # Examples
//!
//! ```
//! use mola_list::linked_list::intrusive::{
//!     list::LinkedList,
//!     single::SingleNode,
//!     traits::{List, NodeWithData},
//! };
//! use core::ptr::NonNull;
//!
//! let mut list = LinkedList::<SingleNode<i32>>::new();
//! let mut node1 = SingleNode::new(1);
//! let mut node2 = SingleNode::new(2);
//! let mut node3 = SingleNode::new(3);
//!
//! list.push_back(NonNull::from(&mut node1));
//! list.push_back(NonNull::from(&mut node2));
//! list.push_front(NonNull::from(&mut node3));
//!
//! assert_eq!(list.count(), 3);
//!
//! let values: Vec<i32> = unsafe { list.iter().map(|node| *node.as_ref().data()).collect() };
//! assert_eq!(values, vec![3, 1, 2]);
//! ```
pub mod handle;
pub mod intrusive;
