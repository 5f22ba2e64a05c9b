use core::ops::Range;
use std::collections::VecDeque;
use std::vec::Vec;

use proptest::collection::vec;
use proptest::num::usize::ANY;

use super::trace_init;
use crate::linked_list::handle::{HandleList, ItemHandle, ListError};

#[derive(Debug)]
enum Op {
    Add,
    Remove(usize),
    RemoveStale,
    PopFront,
    Find(usize),
}

/// Miri is orders of magnitude slower, so op sequences stay short there.
///
/// Run with `cargo +nightly miri test` to check the unsafe node handling.
#[cfg(miri)]
const FUZZ_RANGE: Range<usize> = 0..10;

#[cfg(not(miri))]
const FUZZ_RANGE: Range<usize> = 0..100;

proptest::proptest! {
    #[test]
    fn fuzz_handle_list(ops in vec(ANY, FUZZ_RANGE)) {
        let ops = ops
            .iter()
            .map(|i| match i % 5 {
                0 => Op::Add,
                1 => Op::Remove(i / 5),
                2 => Op::RemoveStale,
                3 => Op::PopFront,
                4 => Op::Find(i / 5),
                _ => unreachable!(),
            })
            .collect::<Vec<_>>();

        let _trace = trace_init();
        let _span = tracing::info_span!("fuzz").entered();
        tracing::info!(?ops);
        run_fuzz(ops);
    }
}

fn run_fuzz(ops: Vec<Op>) {
    let values: Vec<usize> = (0..ops.len()).collect();
    let mut list = HandleList::<&usize>::new();
    let mut reference: VecDeque<(ItemHandle, usize)> = VecDeque::new();
    let mut stale: Vec<ItemHandle> = Vec::new();

    for (i, op) in ops.iter().enumerate() {
        let _span = tracing::info_span!("op", ?i, ?op).entered();
        match op {
            Op::Add => {
                let handle = list.add(&values[i]).unwrap();
                reference.push_back((handle, i));
            }
            Op::Remove(n) => {
                if reference.is_empty() {
                    tracing::debug!("skipping remove; list is empty");
                    continue;
                }
                let idx = n % reference.len();
                let (handle, expect) = reference.remove(idx).unwrap();
                assert_eq!(list.remove(handle), Ok(&expect));
                stale.push(handle);
            }
            Op::RemoveStale => {
                let Some(&handle) = stale.last() else {
                    tracing::debug!("skipping stale remove; nothing removed yet");
                    continue;
                };
                let len = list.len();
                assert_eq!(list.remove(handle), Err(ListError::NotFound));
                assert_eq!(list.len(), len);
            }
            Op::PopFront => {
                let expect = reference.pop_front().map(|(handle, value)| {
                    stale.push(handle);
                    value
                });
                assert_eq!(list.pop_front().copied(), expect);
            }
            Op::Find(n) => {
                let target = n % values.len();
                let expect = reference
                    .iter()
                    .find(|(_, value)| *value == target)
                    .map(|(handle, _)| *handle);
                assert_eq!(list.find(|item| *item.value() == target), expect);
            }
        }

        assert_eq!(list.len(), reference.len());
        let mut current = list.head_item();
        for (handle, value) in &reference {
            assert_eq!(current, Some(*handle));
            assert_eq!(list.value(*handle), Some(value));
            current = list.next_item(*handle);
        }
        assert!(current.is_none());
    }
}
