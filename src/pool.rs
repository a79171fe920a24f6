//! Append-only node arena and the list handle type.
//!
//! Nodes are stored contiguously in a [`NodePool`] and referenced by typed
//! `u32` ids instead of owning pointers. Node identity is id equality, which
//! is what the intersection and cycle diagnostics compare.
//!
//! # Invariants
//! - Ids are only ever handed out by [`NodePool::alloc`] and stay valid for
//!   the life of the pool (nodes are never freed individually; unlinked nodes
//!   are simply unreachable).
//! - For every acyclic list, `List::len` equals the number of nodes reachable
//!   from `List::head` via successor links.
//!
//! # Threading
//! The pool is not synchronized; it assumes a single writer.

// Compile-time: verify u32 ids fit in usize.
const _: () = assert!(
    std::mem::size_of::<usize>() >= std::mem::size_of::<u32>(),
    "Platform must have at least 32-bit addressing"
);

/// Typed index of a node in a [`NodePool`].
///
/// Ids are `Copy` and compare by index; an id from one pool must not be used
/// with another (indexing may panic or address an unrelated node).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Raw index of this id, useful for debug output.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single list element: a value and a successor id.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: i64,
    pub(crate) next: Option<NodeId>,
}

/// Owns every node; all list operations are methods on this type.
///
/// The pool is append-only: deletion operations unlink nodes but never
/// reclaim their slots. Dropping the pool frees everything at once.
#[derive(Debug, Default)]
pub struct NodePool {
    nodes: Vec<Node>,
}

/// Head/len handle for one list in a [`NodePool`].
///
/// The handle is `Clone` but deliberately not `Copy`: operations documented
/// as destructive take it by value, and a clone that outlives a mutation may
/// observe stale links. `len` is `u32` for 32/64-bit portability.
#[derive(Clone, Debug, Default)]
pub struct List {
    pub(crate) head: Option<NodeId>,
    pub(crate) len: u32,
}

impl List {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes reachable from the head (acyclic lists).
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        let empty = self.head.is_none();

        debug_assert!(empty == (self.len == 0));

        empty
    }

    /// Id of the first node, if any.
    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }
}

/// Virtual before-head slot, the arena rendition of the synthetic sentinel
/// node: `Before` addresses `list.head`, `At(id)` addresses `id.next`, so
/// head-relative unlinking needs no special case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cursor {
    Before,
    At(NodeId),
}

impl NodePool {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Total nodes ever allocated, reachable or not.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Value stored at `id`.
    ///
    /// # Panics
    /// Panics if `id` came from a different pool.
    #[inline]
    pub fn value(&self, id: NodeId) -> i64 {
        self.node(id).value
    }

    /// Allocates a detached node.
    ///
    /// # Panics
    /// Panics if the pool already holds `u32::MAX` nodes.
    pub(crate) fn alloc(&mut self, value: i64) -> NodeId {
        let index = self.nodes.len();

        assert!(index < u32::MAX as usize, "node pool exhausted");

        self.nodes.push(Node { value, next: None });
        NodeId(index as u32)
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Successor of `id`, or `None` at the tail.
    #[inline]
    pub(crate) fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    /// Reads the slot a cursor addresses.
    #[inline]
    pub(crate) fn next_at(&self, list: &List, cursor: Cursor) -> Option<NodeId> {
        match cursor {
            Cursor::Before => list.head,
            Cursor::At(id) => self.next(id),
        }
    }

    /// Writes the slot a cursor addresses.
    #[inline]
    pub(crate) fn set_next_at(&mut self, list: &mut List, cursor: Cursor, next: Option<NodeId>) {
        match cursor {
            Cursor::Before => list.head = next,
            Cursor::At(id) => self.node_mut(id).next = next,
        }
    }

    /// Panic if `len` disagrees with the reachable node count. Acyclic lists
    /// only; intended for tests and debugging.
    pub fn check_invariants(&self, list: &List) {
        let mut count: u32 = 0;
        let mut curr = list.head;

        while let Some(id) = curr {
            count += 1;
            assert!(count <= list.len, "more reachable nodes than len indicates");
            curr = self.next(id);
        }

        assert!(
            count == list.len,
            "reachable count {} but len is {}",
            count,
            list.len
        );
    }
}
