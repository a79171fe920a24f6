//! Structural diagnostics: middle, cycle detection, palindrome checks, and
//! intersection of two lists.
//!
//! Variant policy: every diagnostic with an O(1)-space in-place variant also
//! keeps a straightforward higher-space variant, and the pair must agree on
//! every input. The in-place palindrome checks reverse part of the chain as
//! a side effect of scanning; they consume the `List` handle so the
//! destroyed structure cannot be observed afterwards. The copy-based
//! [`NodePool::is_palindrome`] is the default.

use ahash::AHashSet;

use crate::pool::{List, NodeId, NodePool};

impl NodePool {
    /// Value at the middle node, upper middle for even lengths. `None` on an
    /// empty list. Slow/fast traversal, O(n)/O(1); acyclic lists only.
    pub fn find_middle(&self, list: &List) -> Option<i64> {
        let head = list.head?;
        let mut slow = head;
        let mut fast = head;

        while let Some(step) = self.next(fast) {
            slow = match self.next(slow) {
                Some(s) => s,
                None => break,
            };
            match self.next(step) {
                Some(two) => fast = two,
                None => break,
            }
        }

        Some(self.value(slow))
    }

    /// Floyd's tortoise and hare: cursors advancing at rates 1 and 2 meet
    /// iff the chain loops back on itself. O(n) time, O(1) space.
    pub fn has_cycle(&self, list: &List) -> bool {
        let Some(head) = list.head else {
            return false;
        };
        let mut slow = head;
        let mut fast = head;

        loop {
            let Some(one) = self.next(fast) else {
                return false;
            };
            let Some(two) = self.next(one) else {
                return false;
            };
            fast = two;
            slow = match self.next(slow) {
                Some(s) => s,
                None => return false,
            };
            if slow == fast {
                return true;
            }
        }
    }

    /// Visited-set cycle check, O(n) space. Must agree with
    /// [`NodePool::has_cycle`] on every input.
    pub fn has_cycle_hashed(&self, list: &List) -> bool {
        let mut visited: AHashSet<NodeId> = AHashSet::new();
        let mut curr = list.head;

        while let Some(id) = curr {
            if !visited.insert(id) {
                return true;
            }
            curr = self.next(id);
        }

        false
    }

    /// Palindrome check over a value snapshot: O(n) space, non-destructive.
    pub fn is_palindrome(&self, list: &List) -> bool {
        let values = self.values(list);
        if values.is_empty() {
            return true;
        }

        let mut left = 0;
        let mut right = values.len() - 1;
        while left < right {
            if values[left] != values[right] {
                return false;
            }
            left += 1;
            right -= 1;
        }

        true
    }

    /// Palindrome check that locates the middle, reverses the second half in
    /// place, then compares the halves. O(1) extra space.
    ///
    /// Destructive: the second half stays reversed, so the handle is
    /// consumed. Use [`NodePool::is_palindrome`] to keep the list.
    pub fn is_palindrome_two_pass(&mut self, list: List) -> bool {
        let Some(head) = list.head else {
            return true;
        };

        // First pass: slow lands on the upper middle.
        let mut slow = head;
        let mut fast = Some(head);
        while let Some(f) = fast {
            let Some(one) = self.next(f) else {
                break;
            };
            slow = match self.next(slow) {
                Some(s) => s,
                None => break,
            };
            fast = self.next(one);
        }

        // Reverse from the middle to the tail.
        let mut prev: Option<NodeId> = None;
        let mut curr = Some(slow);
        while let Some(id) = curr {
            let after = self.next(id);
            self.node_mut(id).next = prev;
            prev = Some(id);
            curr = after;
        }

        // Second pass: walk inward from both ends.
        let mut left = list.head;
        let mut right = prev;
        while let (Some(l), Some(r)) = (left, right) {
            if self.value(l) != self.value(r) {
                return false;
            }
            left = self.next(l);
            right = self.next(r);
        }

        true
    }

    /// Palindrome check that reverses the first half while locating the
    /// middle, then compares outward. O(1) extra space, single scan to the
    /// middle.
    ///
    /// Destructive: the first half stays reversed, so the handle is
    /// consumed.
    pub fn is_palindrome_one_pass(&mut self, list: List) -> bool {
        let mut prev: Option<NodeId> = None;
        let mut slow = list.head;
        let mut fast = list.head;

        while let Some(f) = fast {
            let Some(one) = self.next(f) else {
                break;
            };
            fast = self.next(one);

            // Fold the scanned node onto the reversed first half.
            let Some(s) = slow else {
                break;
            };
            let after = self.next(s);
            self.node_mut(s).next = prev;
            prev = Some(s);
            slow = after;
        }

        // Odd length leaves `fast` non-null and the middle node at `slow`;
        // skip it, the middle compares with itself.
        let mut second = if fast.is_none() {
            slow
        } else {
            slow.and_then(|s| self.next(s))
        };
        let mut first = prev;

        while let (Some(l), Some(r)) = (first, second) {
            if self.value(l) != self.value(r) {
                return false;
            }
            first = self.next(l);
            second = self.next(r);
        }

        true
    }

    /// First node shared by both chains, by id identity, or `None` when the
    /// lists are disjoint. Two-cursor round-robin re-basing: each cursor
    /// walks its own list then restarts on the other, so both travel m+n
    /// slots and meet at the junction (or at the simultaneous end). O(m+n)
    /// time, O(1) space.
    pub fn intersection(&self, a: &List, b: &List) -> Option<NodeId> {
        if a.head.is_none() || b.head.is_none() {
            return None;
        }

        let mut pa = a.head;
        let mut pb = b.head;
        while pa != pb {
            pa = match pa {
                Some(id) => self.next(id),
                None => b.head,
            };
            pb = match pb {
                Some(id) => self.next(id),
                None => a.head,
            };
        }

        pa
    }

    /// Set-based intersection: collect one chain's ids, walk the other.
    /// O(m+n) time, O(n) space. Must return the same id as
    /// [`NodePool::intersection`].
    pub fn intersection_hashed(&self, a: &List, b: &List) -> Option<NodeId> {
        let mut in_b: AHashSet<NodeId> = AHashSet::new();
        let mut curr = b.head;
        while let Some(id) = curr {
            in_b.insert(id);
            curr = self.next(id);
        }

        let mut curr = a.head;
        while let Some(id) = curr {
            if in_b.contains(&id) {
                return Some(id);
            }
            curr = self.next(id);
        }

        None
    }
}
