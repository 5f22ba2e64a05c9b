use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use crate::linked_list::intrusive::{
    list::LinkedList,
    single::SingleNode,
    traits::{Link, List, NodeWithData},
};

fn values(list: &LinkedList<SingleNode<i32>>) -> Vec<i32> {
    unsafe { list.iter().map(|node| *node.as_ref().data()).collect() }
}

#[test]
fn test_single_list_push_back_keeps_order() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    assert!(list.is_empty());
    assert!(list.head().is_none());
    assert!(list.tail().is_none());

    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);
    let mut node3 = SingleNode::new(3);

    let n1 = NonNull::from(&mut node1);
    let n2 = NonNull::from(&mut node2);
    let n3 = NonNull::from(&mut node3);

    list.push_back(n1);
    list.push_back(n2);
    list.push_back(n3);

    assert_eq!(list.count(), 3);
    assert_eq!(values(&list), vec![1, 2, 3]);
    assert_eq!(list.head(), Some(n1));
    assert_eq!(list.tail(), Some(n3));
}

#[test]
fn test_single_list_push_front() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);
    let mut node3 = SingleNode::new(3);

    let n1 = NonNull::from(&mut node1);
    let n2 = NonNull::from(&mut node2);
    let n3 = NonNull::from(&mut node3);

    list.push_front(n1);
    assert_eq!(list.tail(), Some(n1));
    list.push_front(n2);
    list.push_back(n3);

    assert_eq!(values(&list), vec![2, 1, 3]);
    assert_eq!(list.tail(), Some(n3));
}

#[test]
fn test_single_list_pop_front() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);

    let n1 = NonNull::from(&mut node1);
    let n2 = NonNull::from(&mut node2);

    list.push_back(n1);
    list.push_back(n2);

    let popped = list.pop_front().unwrap();
    assert_eq!(unsafe { *popped.as_ref().data() }, 1);
    // a detached node no longer points into the list
    assert!(unsafe { popped.as_ref().next() }.is_none());
    assert_eq!(list.count(), 1);

    let popped = list.pop_front().unwrap();
    assert_eq!(unsafe { *popped.as_ref().data() }, 2);
    assert!(list.is_empty());
    assert!(list.tail().is_none());
    assert!(list.pop_front().is_none());

    // the list is reusable once drained
    list.push_back(n1);
    assert_eq!(values(&list), vec![1]);
}

#[test]
fn test_single_list_remove() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);
    let mut node3 = SingleNode::new(3);

    let n1 = NonNull::from(&mut node1);
    let n2 = NonNull::from(&mut node2);
    let n3 = NonNull::from(&mut node3);

    list.push_back(n1);
    list.push_back(n2);
    list.push_back(n3);

    // Remove middle
    let removed = list.remove(n2);
    assert_eq!(unsafe { *removed.unwrap().as_ref().data() }, 2);
    assert_eq!(list.count(), 2);
    assert_eq!(values(&list), vec![1, 3]);

    // Removing twice finds nothing
    assert!(list.remove(n2).is_none());
    assert_eq!(list.count(), 2);

    // Remove tail, the previous node becomes the tail
    let removed = list.remove(n3);
    assert!(removed.is_some());
    assert_eq!(list.tail(), Some(n1));

    // Appending after a tail removal links behind the new tail
    list.push_back(n2);
    assert_eq!(values(&list), vec![1, 2]);

    // Remove head
    let removed = list.remove(n1);
    assert!(removed.is_some());
    assert_eq!(list.count(), 1);
    assert_eq!(unsafe { *list.head().unwrap().as_ref().data() }, 2);

    let removed = list.remove(n2);
    assert!(removed.is_some());
    assert!(list.is_empty());
    assert!(list.head().is_none());
    assert!(list.tail().is_none());
}

#[test]
fn test_single_node_data_mut() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    let mut node = SingleNode::<i32>::default();
    *node.data_mut() = 7;
    let n = NonNull::from(&mut node);
    list.push_back(n);

    unsafe {
        let head = &mut *list.head().unwrap().as_ptr();
        *head.data_mut() += 1;
    }
    assert_eq!(values(&list), vec![8]);
    assert_eq!(list.pop_front(), Some(n));
}

/// Nodes are only touched through the pointers they were linked with, so the
/// list stays usable while those pointers are reused for lookups.
#[test]
fn test_single_list_reuses_linked_pointers() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);

    let n1 = NonNull::from(&mut node1);
    let n2 = NonNull::from(&mut node2);
    list.push_back(n1);
    list.push_back(n2);

    // the returned pointer is the one the list was given
    assert_eq!(list.remove(n1), Some(n1));
    unsafe { *(*n1.as_ptr()).data_mut() = 10 };
    list.push_back(n1);
    assert_eq!(values(&list), vec![2, 10]);

    assert_eq!(list.pop_front(), Some(n2));
    assert_eq!(list.pop_front(), Some(n1));
    assert!(list.is_empty());
}
