//! # Intrusive Linked List
//!
//! This module provides an implementation of an intrusive singly linked list.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the core traits for the linked list, such as `List`, `Link`, and `Node`.
//! - [`list::LinkedList`]: A generic implementation of a singly linked list with O(1) append.
//! - [`single::SingleNode`]: A node embedding a [`single::SingleLink`] next to its data.
//! - [`iter::LinkedListIter`]: Head-to-tail traversal.
//!
//! ## Safety
//!
//! The list only threads pointers through nodes it does not own.
//! The user of this module is responsible for upholding several invariants:
//!
//! - Nodes must outlive the list they are in, and must not move while linked.
//! - A node must not be in two lists at the same time.
//! - When iterating, the list must not be modified.

pub mod traits;
pub mod single;
pub mod list;
pub mod iter;

#[cfg(test)]
mod tests;
