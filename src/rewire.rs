//! In-place transformations by pointer rewiring: reverse, filtered removal,
//! nth-from-end removal, sorted dedup, odd/even regrouping, and rotation.
//!
//! Removal operations go through the virtual before-head cursor
//! (`Cursor::Before`), so unlinking the head is the same code path as
//! unlinking any interior node. Unlinked nodes stay in the pool,
//! unreachable.

use crate::pool::{Cursor, List, NodeId, NodePool};

impl NodePool {
    /// Reverses the list in place; the head becomes the former tail. O(n).
    pub fn reverse(&mut self, list: &mut List) {
        let old_len = list.len;

        let mut prev: Option<NodeId> = None;
        let mut curr = list.head;
        while let Some(id) = curr {
            let after = self.next(id);
            self.node_mut(id).next = prev;
            prev = Some(id);
            curr = after;
        }
        list.head = prev;

        debug_assert!(list.len == old_len);
    }

    /// Unlinks every node whose value equals `value`. O(n).
    pub fn remove_elements(&mut self, list: &mut List, value: i64) {
        let old_len = list.len;
        let mut removed: u32 = 0;

        let mut cursor = Cursor::Before;
        while let Some(id) = self.next_at(list, cursor) {
            if self.value(id) == value {
                let after = self.next(id);
                self.set_next_at(list, cursor, after);
                removed += 1;
            } else {
                cursor = Cursor::At(id);
            }
        }

        assert!(removed <= old_len);
        list.len = old_len - removed;
    }

    /// Unlinks the nth node from the end (n = 1 is the tail) in one pass: a
    /// lead cursor starts n slots in, then lead and lag advance together
    /// until the lead exhausts. No-op when n is 0 or exceeds the length.
    pub fn remove_nth_from_end(&mut self, list: &mut List, n: usize) {
        if n == 0 || n > list.len() {
            return;
        }
        let old_len = list.len;

        let mut lead = list.head;
        for _ in 0..n {
            let Some(id) = lead else {
                return;
            };
            lead = self.next(id);
        }

        let mut lag = Cursor::Before;
        while let Some(id) = lead {
            lead = self.next(id);
            lag = match self.next_at(list, lag) {
                Some(next) => Cursor::At(next),
                None => return,
            };
        }

        self.unlink_after(list, lag);

        debug_assert!(list.len == old_len - 1);
    }

    /// Two-pass variant: count the length, then walk to the predecessor of
    /// the target. Same edge policy as [`NodePool::remove_nth_from_end`];
    /// both variants must agree for every n in `[1, len]`.
    pub fn remove_nth_from_end_two_pass(&mut self, list: &mut List, n: usize) {
        if n == 0 || n > list.len() {
            return;
        }

        let mut length: usize = 0;
        let mut curr = list.head;
        while let Some(id) = curr {
            length += 1;
            curr = self.next(id);
        }
        debug_assert!(length == list.len());

        let mut lag = Cursor::Before;
        for _ in 0..(length - n) {
            lag = match self.next_at(list, lag) {
                Some(id) => Cursor::At(id),
                None => return,
            };
        }

        self.unlink_after(list, lag);
    }

    /// Removes consecutive equal-valued nodes; the input is assumed sorted,
    /// so each run collapses to its first node. O(n).
    pub fn delete_duplicates(&mut self, list: &mut List) {
        let old_len = list.len;
        let mut removed: u32 = 0;

        let mut curr = list.head;
        while let Some(id) = curr {
            match self.next(id) {
                Some(dup) if self.value(dup) == self.value(id) => {
                    let after = self.next(dup);
                    self.node_mut(id).next = after;
                    removed += 1;
                }
                _ => curr = self.next(id),
            }
        }

        assert!(removed <= old_len);
        list.len = old_len - removed;
    }

    /// Regroups nodes odd-positions-first then even-positions (1-based),
    /// preserving relative order within each group. O(n), O(1) space.
    pub fn odd_even(&mut self, list: &mut List) {
        let old_len = list.len;
        let Some(head) = list.head else {
            return;
        };
        let Some(even_head) = self.next(head) else {
            return;
        };

        let mut odd = head;
        let mut even = Some(even_head);
        while let Some(e) = even {
            let Some(next_odd) = self.next(e) else {
                break;
            };
            let after = self.next(next_odd);
            self.node_mut(odd).next = Some(next_odd);
            self.node_mut(e).next = after;
            odd = next_odd;
            even = after;
        }
        // Stitch the even run after the odd run.
        self.node_mut(odd).next = Some(even_head);

        debug_assert!(list.len == old_len);
        debug_assert!(list.head == Some(head));
    }

    /// Rotates the list right by `k % len` places: the last `k % len` nodes
    /// move to the front in order. No-op on lists shorter than two nodes or
    /// when the effective shift is zero. O(n).
    pub fn rotate_right(&mut self, list: &mut List, k: usize) {
        if list.len() < 2 {
            return;
        }
        let shift = k % list.len();
        if shift == 0 {
            return;
        }
        let Some(head) = list.head else {
            return;
        };

        // Lead cursor starts `shift` nodes in; when it reaches the tail the
        // lag cursor is on the new tail.
        let mut lead = head;
        for _ in 0..shift {
            lead = match self.next(lead) {
                Some(id) => id,
                None => return,
            };
        }
        let mut lag = head;
        while let Some(next) = self.next(lead) {
            lead = next;
            lag = match self.next(lag) {
                Some(id) => id,
                None => return,
            };
        }

        let new_head = self.next(lag);
        self.node_mut(lead).next = Some(head);
        self.node_mut(lag).next = None;
        list.head = new_head;

        debug_assert!(new_head.is_some());
    }

    /// Drops the node after `cursor`, if any, and fixes `len`.
    fn unlink_after(&mut self, list: &mut List, cursor: Cursor) {
        if let Some(victim) = self.next_at(list, cursor) {
            let after = self.next(victim);
            self.set_next_at(list, cursor, after);
            list.len -= 1;
        }
    }
}
