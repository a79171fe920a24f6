//! Arena-backed singly linked list with positional access, structural
//! diagnostics, and relinking transformations.
//!
//! ## Scope
//! One component: an ordered, mutable sequence of `i64`-valued nodes. Nodes
//! live in an append-only [`NodePool`]; a [`List`] is a head-id/length handle
//! into that pool, and every operation is a method on the pool.
//!
//! ## Key invariants
//! - For every acyclic list, `len` equals the number of nodes reachable from
//!   the head by following successor ids.
//! - Node identity is [`NodeId`] equality; nodes are never moved or freed
//!   individually, so ids stay valid for the life of the pool.
//! - Out-of-range indices follow a permissive contract: the `-1` sentinel
//!   from `get`, `None` from `try_get`, silent no-op from mutators. No
//!   operation panics on caller input.
//! - Diagnostics documented as destructive (the in-place palindrome checks)
//!   consume the `List` handle; everything else leaves structure it does not
//!   own untouched.
//!
//! ## Operation families
//! - Positional: `get`/`try_get`, `add_at_head`, `add_at_tail`,
//!   `add_at_index`, `delete_at_index`, `values`, `list_from`.
//! - Diagnostics: `find_middle`, `has_cycle` (+ hashed), `is_palindrome`
//!   (three variants), `intersection` (two variants).
//! - Rewiring: `reverse`, `remove_elements`, `remove_nth_from_end` (two
//!   variants), `delete_duplicates`, `odd_even`, `rotate_right`.
//! - Combining: `merge_sorted` (two variants), `add_digits`.
//!
//! ## Threading
//! Single-writer by design; the pool carries no synchronization.

mod combine;
mod list;
mod pool;
mod probe;
mod rewire;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use pool::{List, NodeId, NodePool};
