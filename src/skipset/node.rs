//! Value node stored in the slab.
//!
//! ## Design
//!
//! A node holds one value and its tower: one successor per level it takes
//! part in. Successors are slab keys (`usize`), not references, so the
//! whole structure is owned by a single `Slab<Node<T>>` and releasing the
//! slab releases every node.
//!
//! ```text
//! level 2:  head ---------------------> [5] ----------> None
//! level 1:  head --------> [3] -------> [5] ----------> None
//! level 0:  head -> [1] -> [3] -> [4] -> [5] -> [8] --> None
//! ```

/// Node stored in the slab.
///
/// `forward[i]` is the key of the next node at level `i`, or `None` at the
/// end of that level. The tower length is the node's height and never
/// changes after creation.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) forward: Vec<Option<usize>>,
}

impl<T> Node<T> {
    /// Create a node with a pre-allocated tower
    #[inline]
    pub(crate) fn new(value: T, forward: Vec<Option<usize>>) -> Self {
        debug_assert!(!forward.is_empty(), "a node has at least one level");
        Self { value, forward }
    }

    /// Number of levels this node participates in
    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.forward.len()
    }

    /// Level-0 successor
    #[inline]
    pub(crate) fn next(&self) -> Option<usize> {
        self.forward[0]
    }
}
