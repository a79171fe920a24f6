//! Stateful model test: the full operation surface against a `Vec<i64>`
//! shadow, plus value-level properties for the transformations.

use proptest::prelude::*;
use slist_rs::{List, NodePool};

const PROPTEST_CASES: u32 = 256;

fn proptest_cases() -> u32 {
    std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(PROPTEST_CASES)
        .max(1)
}

/// Operations mirrored against the shadow vector.
#[derive(Debug, Clone, Copy)]
enum Op {
    AddAtHead(i64),
    AddAtTail(i64),
    AddAtIndex(usize, i64),
    DeleteAtIndex(usize),
    RemoveElements(i64),
    RemoveNthFromEnd(usize),
    Reverse,
    RotateRight(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Small value domain so RemoveElements actually hits something.
    let value = -3i64..=3;
    prop_oneof![
        value.clone().prop_map(Op::AddAtHead),
        value.clone().prop_map(Op::AddAtTail),
        (0usize..24, value.clone()).prop_map(|(i, v)| Op::AddAtIndex(i, v)),
        (0usize..24).prop_map(Op::DeleteAtIndex),
        value.prop_map(Op::RemoveElements),
        (0usize..24).prop_map(Op::RemoveNthFromEnd),
        Just(Op::Reverse),
        (0usize..24).prop_map(Op::RotateRight),
    ]
}

fn apply_shadow(shadow: &mut Vec<i64>, op: Op) {
    match op {
        Op::AddAtHead(v) => shadow.insert(0, v),
        Op::AddAtTail(v) => shadow.push(v),
        Op::AddAtIndex(i, v) => {
            if i <= shadow.len() {
                shadow.insert(i, v);
            }
        }
        Op::DeleteAtIndex(i) => {
            if i < shadow.len() {
                shadow.remove(i);
            }
        }
        Op::RemoveElements(v) => shadow.retain(|&x| x != v),
        Op::RemoveNthFromEnd(n) => {
            if n >= 1 && n <= shadow.len() {
                let at = shadow.len() - n;
                shadow.remove(at);
            }
        }
        Op::Reverse => shadow.reverse(),
        Op::RotateRight(k) => {
            if shadow.len() >= 2 {
                let shift = k % shadow.len();
                shadow.rotate_right(shift);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(proptest_cases()))]

    /// Every mutation keeps the list equal to the shadow and keeps the
    /// length invariant intact. `has_cycle` stays false throughout: the
    /// public surface has no cycle-introducing operation.
    #[test]
    fn full_surface_matches_shadow(ops in prop::collection::vec(op_strategy(), 1..120)) {
        let mut pool = NodePool::new();
        let mut list = List::new();
        let mut shadow: Vec<i64> = Vec::new();

        for op in ops {
            match op {
                Op::AddAtHead(v) => pool.add_at_head(&mut list, v),
                Op::AddAtTail(v) => pool.add_at_tail(&mut list, v),
                Op::AddAtIndex(i, v) => pool.add_at_index(&mut list, i, v),
                Op::DeleteAtIndex(i) => pool.delete_at_index(&mut list, i),
                Op::RemoveElements(v) => pool.remove_elements(&mut list, v),
                Op::RemoveNthFromEnd(n) => pool.remove_nth_from_end(&mut list, n),
                Op::Reverse => pool.reverse(&mut list),
                Op::RotateRight(k) => pool.rotate_right(&mut list, k),
            }
            apply_shadow(&mut shadow, op);

            prop_assert_eq!(pool.values(&list), shadow.clone());
            prop_assert_eq!(list.len(), shadow.len());
            prop_assert!(!pool.has_cycle(&list));
            prop_assert!(!pool.has_cycle_hashed(&list));
            pool.check_invariants(&list);
        }
    }

    /// Indexed reads agree with the shadow on every index, in range or not.
    #[test]
    fn reads_match_shadow(values in prop::collection::vec(any::<i64>(), 0..32)) {
        let mut pool = NodePool::new();
        let list = pool.list_from(&values);

        for index in 0..values.len() + 2 {
            prop_assert_eq!(pool.try_get(&list, index), values.get(index).copied());
            let expected = values.get(index).copied().unwrap_or(-1);
            prop_assert_eq!(pool.get(&list, index), expected);
        }
        prop_assert_eq!(pool.find_middle(&list), middle_of(&values));
    }

    /// Reverse is an involution on the value sequence.
    #[test]
    fn reverse_involution(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut pool = NodePool::new();
        let mut list = pool.list_from(&values);

        pool.reverse(&mut list);
        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(pool.values(&list), reversed);

        pool.reverse(&mut list);
        prop_assert_eq!(pool.values(&list), values);
    }

    /// Sorted merge equals the sorted concatenation, and both merge
    /// variants agree.
    #[test]
    fn merge_equals_sorted_concat(
        mut left in prop::collection::vec(-50i64..50, 0..32),
        mut right in prop::collection::vec(-50i64..50, 0..32),
    ) {
        left.sort_unstable();
        right.sort_unstable();

        let mut pool = NodePool::new();
        let a = pool.list_from(&left);
        let b = pool.list_from(&right);
        let merged = pool.merge_sorted(a, b);

        let mut expected = left.clone();
        expected.extend_from_slice(&right);
        expected.sort_unstable();
        prop_assert_eq!(pool.values(&merged), expected);
        pool.check_invariants(&merged);

        let a2 = pool.list_from(&left);
        let b2 = pool.list_from(&right);
        let dummy = pool.merge_sorted_dummy(a2, b2);
        prop_assert_eq!(pool.values(&dummy), pool.values(&merged));
    }

    /// Digit addition matches integer addition for numbers that fit i64.
    #[test]
    fn add_digits_matches_arithmetic(x in 0u64..1_000_000_000, y in 0u64..1_000_000_000) {
        let mut pool = NodePool::new();
        let a = pool.list_from(&digits_lsb_first(x));
        let b = pool.list_from(&digits_lsb_first(y));

        let sum = pool.add_digits(&a, &b);
        prop_assert_eq!(pool.values(&sum), digits_lsb_first(x + y));
    }

    /// Dedup on a sorted list equals the shadow dedup.
    #[test]
    fn dedup_matches_shadow(mut values in prop::collection::vec(-10i64..10, 0..48)) {
        values.sort_unstable();

        let mut pool = NodePool::new();
        let mut list = pool.list_from(&values);
        pool.delete_duplicates(&mut list);

        let mut expected = values;
        expected.dedup();
        prop_assert_eq!(pool.values(&list), expected);
        pool.check_invariants(&list);
    }

    /// Odd/even regrouping is a stable partition by 1-based position.
    #[test]
    fn odd_even_is_stable_position_partition(values in prop::collection::vec(any::<i64>(), 0..48)) {
        let mut pool = NodePool::new();
        let mut list = pool.list_from(&values);
        pool.odd_even(&mut list);

        let odds = values.iter().copied().step_by(2);
        let evens = values.iter().copied().skip(1).step_by(2);
        let expected: Vec<i64> = odds.chain(evens).collect();
        prop_assert_eq!(pool.values(&list), expected);
        pool.check_invariants(&list);
    }
}

fn middle_of(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        None
    } else {
        Some(values[values.len() / 2])
    }
}

fn digits_lsb_first(mut n: u64) -> Vec<i64> {
    if n == 0 {
        return vec![0];
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push((n % 10) as i64);
        n /= 10;
    }
    out
}
