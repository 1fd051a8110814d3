//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and compare the heap
//! against a simple model: a vector where the minimum is found by linear scan
//! and ties go to the earliest position.

use proptest::prelude::*;
use stable_heap::compare::{by_key, Natural};
use stable_heap::{Counter, StableHeap};

/// A heap operation applied to both the heap and the model
#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
    Peek,
    Renumber,
    Trim,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..8).prop_map(Op::Push),
        3 => Just(Op::Pop),
        1 => Just(Op::Peek),
        1 => Just(Op::Renumber),
        1 => Just(Op::Trim),
    ]
}

/// Removes the first minimum by key, mirroring FIFO tie-breaking
fn model_pop(model: &mut Vec<(u8, usize)>) -> Option<(u8, usize)> {
    let (pos, _) = model.iter().enumerate().min_by_key(|(_, item)| item.0)?;
    Some(model.remove(pos))
}

fn model_peek(model: &[(u8, usize)]) -> Option<(u8, usize)> {
    model.iter().min_by_key(|item| item.0).copied()
}

/// Runs `ops` against a heap with counter type `N`, checking every step
fn check_against_model<N: Counter>(ops: Vec<Op>, max_len: usize) -> Result<(), TestCaseError> {
    let mut heap: StableHeap<(u8, usize), _, N> =
        StableHeap::with_counter(by_key(|item: &(u8, usize)| item.0));
    let mut model = Vec::new();
    let mut pushes = 0usize;
    let mut pops = 0usize;

    for (seq, op) in ops.into_iter().enumerate() {
        match op {
            Op::Push(key) if heap.len() < max_len => {
                heap.push((key, seq));
                model.push((key, seq));
                pushes += 1;
            }
            Op::Push(_) | Op::Pop => {
                let got = heap.pop();
                let expected = model_pop(&mut model);
                if got.is_some() {
                    pops += 1;
                }
                prop_assert_eq!(got, expected);
            }
            Op::Peek => {
                prop_assert_eq!(heap.peek().copied(), model_peek(&model));
            }
            Op::Renumber => heap.renumber(),
            Op::Trim => heap.trim(),
        }

        prop_assert!(heap.is_valid_heap());
        prop_assert_eq!(heap.len(), pushes - pops);
        prop_assert_eq!(heap.is_empty(), heap.len() == 0);
    }

    let drained: Vec<_> = heap.drain_sorted().collect();
    let mut expected = model;
    expected.sort_by_key(|item| item.0);
    prop_assert_eq!(drained, expected);

    Ok(())
}

proptest! {
    #[test]
    fn test_drain_matches_stable_sort(values in prop::collection::vec(0u8..16, 0..200)) {
        let mut heap = StableHeap::with_comparator(by_key(|item: &(u8, usize)| item.0));
        let mut expected: Vec<(u8, usize)> =
            values.iter().enumerate().map(|(i, &key)| (key, i)).collect();
        heap.extend(expected.iter().copied());

        expected.sort_by_key(|item| item.0);
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_drain_matches_stable_sort_descending(values in prop::collection::vec(0u8..16, 0..200)) {
        let mut heap = StableHeap::with_comparator(|a: &(u8, usize), b: &(u8, usize)| b.0.cmp(&a.0));
        let mut expected: Vec<(u8, usize)> =
            values.iter().enumerate().map(|(i, &key)| (key, i)).collect();
        heap.extend(expected.iter().copied());

        expected.sort_by(|a, b| b.0.cmp(&a.0));
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_ops_match_model(ops in prop::collection::vec(op_strategy(), 0..300)) {
        check_against_model::<u64>(ops, usize::MAX)?;
    }

    #[test]
    fn test_ops_match_model_with_u8_counter(ops in prop::collection::vec(op_strategy(), 0..1500)) {
        check_against_model::<u8>(ops, 64)?;
    }

    #[test]
    fn test_peek_does_not_mutate(values in prop::collection::vec(any::<i32>(), 1..100), peeks in 1usize..10) {
        let mut heap: StableHeap<i32> = values.iter().copied().collect();
        let first = heap.peek().copied();
        for _ in 0..peeks {
            prop_assert_eq!(heap.peek().copied(), first);
            prop_assert_eq!(heap.len(), values.len());
        }
        prop_assert_eq!(heap.pop(), first);
    }

    #[test]
    fn test_renumber_is_transparent(
        values in prop::collection::vec(0u8..4, 0..100),
        pops in 0usize..50,
    ) {
        let build = || {
            let mut heap: StableHeap<(u8, usize), _, u16> =
                StableHeap::with_counter(by_key(|item: &(u8, usize)| item.0));
            heap.extend(values.iter().enumerate().map(|(i, &key)| (key, i)));
            for _ in 0..pops {
                heap.pop();
            }
            heap
        };

        let plain = build();
        let mut renumbered = build();
        renumbered.renumber();

        prop_assert_eq!(renumbered.next_counter() as usize, renumbered.len());
        prop_assert_eq!(renumbered.into_sorted_vec(), plain.into_sorted_vec());
    }

    #[test]
    fn test_trim_is_transparent(values in prop::collection::vec(any::<i16>(), 0..100), pops in 0usize..100) {
        let mut plain = StableHeap::with_comparator(Natural);
        plain.extend(values.iter().copied());
        let mut trimmed = plain.clone();
        for _ in 0..pops {
            prop_assert_eq!(trimmed.pop(), plain.pop());
        }

        trimmed.trim();
        prop_assert!(trimmed.capacity() >= trimmed.len());
        prop_assert_eq!(trimmed.peek(), plain.peek());
        prop_assert_eq!(trimmed.into_sorted_vec(), plain.into_sorted_vec());
    }
}
