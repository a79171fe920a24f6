//! Raw node-wiring helpers for tests and harnesses.
//!
//! The production surface cannot create cycles or make two lists share
//! nodes; the cycle and intersection diagnostics still need such inputs.
//! This module is compiled only for unit tests and under the `testkit`
//! feature (integration tests and benches opt in via
//! `required-features`).
//!
//! Handles wired here can violate the reachable-count invariant on
//! purpose; do not call `check_invariants` on them.

use crate::pool::{List, NodeId, NodePool};

impl NodePool {
    /// Allocates a detached node and returns its id.
    pub fn raw_alloc(&mut self, value: i64) -> NodeId {
        self.alloc(value)
    }

    /// Points `id` at an arbitrary successor, cycles included.
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.node_mut(id).next = next;
    }

    /// Links the tail of `list` back to the node at `back_to`, creating a
    /// cycle.
    ///
    /// # Panics
    /// Panics if the list is empty or `back_to >= len`.
    pub fn make_cycle(&mut self, list: &List, back_to: usize) {
        assert!(back_to < list.len(), "cycle target out of range");

        let target = self
            .node_at(list, back_to)
            .expect("target index was bounds-checked");
        let tail = self.tail_of(list).expect("non-empty list has a tail");
        self.node_mut(tail).next = Some(target);
    }

    /// Builds two lists that converge on a freshly allocated shared suffix:
    /// `a_prefix ++ shared` and `b_prefix ++ shared`. Returns both handles
    /// and the junction id (`None` when `shared` is empty).
    pub fn lists_with_shared_suffix(
        &mut self,
        a_prefix: &[i64],
        b_prefix: &[i64],
        shared: &[i64],
    ) -> (List, List, Option<NodeId>) {
        let suffix = self.list_from(shared);
        let junction = suffix.head();

        let a = self.attach_suffix(a_prefix, &suffix);
        let b = self.attach_suffix(b_prefix, &suffix);

        (a, b, junction)
    }

    fn attach_suffix(&mut self, prefix: &[i64], suffix: &List) -> List {
        let mut list = self.list_from(prefix);
        match self.tail_of(&list) {
            Some(tail) => self.node_mut(tail).next = suffix.head(),
            None => list.head = suffix.head(),
        }
        list.len += suffix.len() as u32;
        list
    }
}
