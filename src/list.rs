//! Positional surface: indexed reads, head/tail/index insertion, indexed
//! deletion, and snapshot conversion.
//!
//! Edge policy is deliberately permissive, matching the structure's origin:
//! an out-of-range read returns the `-1` sentinel (or `None` from
//! [`NodePool::try_get`]) and an out-of-range mutation is a silent no-op.
//! Nothing here panics on caller input.

use crate::pool::{List, NodeId, NodePool};

impl NodePool {
    /// Value at `index`, or `-1` when `index >= len`.
    ///
    /// The sentinel keeps lookups infallible for callers that treat misses as data;
    /// prefer [`NodePool::try_get`] when `-1` is a legal element value.
    pub fn get(&self, list: &List, index: usize) -> i64 {
        self.try_get(list, index).unwrap_or(-1)
    }

    /// Value at `index`, or `None` when `index >= len`. O(index).
    pub fn try_get(&self, list: &List, index: usize) -> Option<i64> {
        if index >= list.len() {
            return None;
        }
        let id = self.node_at(list, index)?;
        Some(self.value(id))
    }

    /// Prepends a node. O(1); the new node becomes the head.
    pub fn add_at_head(&mut self, list: &mut List, value: i64) {
        let old_len = list.len;

        let id = self.alloc(value);
        self.node_mut(id).next = list.head;
        list.head = Some(id);
        list.len += 1;

        debug_assert!(list.len == old_len + 1);
        debug_assert!(list.head == Some(id));
    }

    /// Appends a node. O(len); walks to the last node.
    pub fn add_at_tail(&mut self, list: &mut List, value: i64) {
        let old_len = list.len;

        let id = self.alloc(value);
        match self.tail_of(list) {
            None => list.head = Some(id),
            Some(last) => self.node_mut(last).next = Some(id),
        }
        list.len += 1;

        debug_assert!(list.len == old_len + 1);
    }

    /// Inserts `value` before the node at `index`. `index == len` appends;
    /// `index > len` is a no-op. Boundary cases delegate to the head/tail
    /// inserts.
    pub fn add_at_index(&mut self, list: &mut List, index: usize, value: i64) {
        if index > list.len() {
            return;
        }
        if index == 0 {
            self.add_at_head(list, value);
            return;
        }
        if index == list.len() {
            self.add_at_tail(list, value);
            return;
        }

        let Some(prev) = self.node_at(list, index - 1) else {
            return;
        };
        let id = self.alloc(value);
        let after = self.next(prev);
        self.node_mut(id).next = after;
        self.node_mut(prev).next = Some(id);
        list.len += 1;
    }

    /// Unlinks the node at `index`; no-op when `index >= len`. The node's
    /// slot stays in the pool, unreachable.
    pub fn delete_at_index(&mut self, list: &mut List, index: usize) {
        if index >= list.len() {
            return;
        }

        if index == 0 {
            if let Some(head) = list.head {
                list.head = self.next(head);
                list.len -= 1;
            }
            return;
        }

        let Some(prev) = self.node_at(list, index - 1) else {
            return;
        };
        let Some(victim) = self.next(prev) else {
            return;
        };
        let after = self.next(victim);
        self.node_mut(prev).next = after;
        list.len -= 1;
    }

    /// Builds a list holding `values` in order. O(n), single pass.
    pub fn list_from(&mut self, values: &[i64]) -> List {
        let mut list = List::new();
        let mut tail: Option<NodeId> = None;

        for &value in values {
            let id = self.alloc(value);
            match tail {
                None => list.head = Some(id),
                Some(t) => self.node_mut(t).next = Some(id),
            }
            tail = Some(id);
            list.len += 1;
        }

        debug_assert!(list.len() == values.len());

        list
    }

    /// Snapshot of the value sequence.
    ///
    /// Traversal is bounded by `len`, so a list that was given a diagnostic
    /// cycle yields at most `len` values instead of hanging.
    pub fn values(&self, list: &List) -> Vec<i64> {
        let mut out = Vec::with_capacity(list.len());
        let mut curr = list.head;

        while let Some(id) = curr {
            if out.len() == list.len() {
                break;
            }
            out.push(self.value(id));
            curr = self.next(id);
        }

        out
    }

    /// Node at `index`, or `None` when the chain is shorter.
    pub(crate) fn node_at(&self, list: &List, index: usize) -> Option<NodeId> {
        let mut curr = list.head?;
        for _ in 0..index {
            curr = self.next(curr)?;
        }
        Some(curr)
    }

    /// Last node of the list, or `None` when empty.
    pub(crate) fn tail_of(&self, list: &List) -> Option<NodeId> {
        let mut curr = list.head?;
        while let Some(next) = self.next(curr) {
            curr = next;
        }
        Some(curr)
    }
}
