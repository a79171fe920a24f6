//! Operations over two lists that produce a third: stable sorted merge (two
//! variants) and grade-school digit addition.
//!
//! The merges relink the input nodes rather than copying, so they consume
//! both handles; digit addition reads its inputs and allocates fresh nodes.

use crate::pool::{Cursor, List, NodeId, NodePool};

impl NodePool {
    /// Stable merge of two ascending lists by relinking. On a value tie the
    /// node from `a` is taken first. Merging with an empty list returns the
    /// other unchanged. O(m+n), no allocation.
    pub fn merge_sorted(&mut self, a: List, b: List) -> List {
        let total = a.len + b.len;

        let mut pa = a.head;
        let mut pb = b.head;
        let head = match (pa, pb) {
            (None, _) => return b,
            (_, None) => return a,
            (Some(x), Some(y)) => {
                if self.value(x) <= self.value(y) {
                    pa = self.next(x);
                    x
                } else {
                    pb = self.next(y);
                    y
                }
            }
        };

        let mut tail = head;
        while let (Some(x), Some(y)) = (pa, pb) {
            let pick = if self.value(x) <= self.value(y) {
                pa = self.next(x);
                x
            } else {
                pb = self.next(y);
                y
            };
            self.node_mut(tail).next = Some(pick);
            tail = pick;
        }
        let rest = pa.or(pb);
        self.node_mut(tail).next = rest;

        let merged = List {
            head: Some(head),
            len: total,
        };

        debug_assert!(merged.len() == total as usize);

        merged
    }

    /// Merge through the virtual before-head cursor of the result, which
    /// removes the first-node special case. Output is identical to
    /// [`NodePool::merge_sorted`].
    pub fn merge_sorted_dummy(&mut self, a: List, b: List) -> List {
        let total = a.len + b.len;
        let mut out = List {
            head: None,
            len: total,
        };

        let mut tail = Cursor::Before;
        let mut pa = a.head;
        let mut pb = b.head;
        while let (Some(x), Some(y)) = (pa, pb) {
            let pick = if self.value(x) <= self.value(y) {
                pa = self.next(x);
                x
            } else {
                pb = self.next(y);
                y
            };
            self.set_next_at(&mut out, tail, Some(pick));
            tail = Cursor::At(pick);
        }
        let rest = pa.or(pb);
        self.set_next_at(&mut out, tail, rest);

        out
    }

    /// Adds two numbers stored least-significant digit first, one digit per
    /// node, into a new list. Carry propagates left; the result has
    /// max(m, n) digits, or one more when a final carry remains.
    ///
    /// Inputs must hold digits 0..=9 (debug-asserted).
    pub fn add_digits(&mut self, a: &List, b: &List) -> List {
        let mut out = List::new();
        let mut tail: Option<NodeId> = None;

        let mut pa = a.head;
        let mut pb = b.head;
        let mut carry: i64 = 0;
        while pa.is_some() || pb.is_some() || carry != 0 {
            let da = match pa {
                Some(id) => {
                    pa = self.next(id);
                    self.value(id)
                }
                None => 0,
            };
            let db = match pb {
                Some(id) => {
                    pb = self.next(id);
                    self.value(id)
                }
                None => 0,
            };
            debug_assert!((0..=9).contains(&da), "non-digit value {da}");
            debug_assert!((0..=9).contains(&db), "non-digit value {db}");

            let sum = da + db + carry;
            carry = sum / 10;
            let id = self.alloc(sum % 10);
            match tail {
                None => out.head = Some(id),
                Some(t) => self.node_mut(t).next = Some(id),
            }
            tail = Some(id);
            out.len += 1;
        }

        debug_assert!(out.len() >= a.len().max(b.len()));
        debug_assert!(out.len() <= a.len().max(b.len()) + 1);

        out
    }
}
