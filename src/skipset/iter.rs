//! Ordered traversal of the level-0 chain.
//!
//! - [`Iter`] borrows the set, so the borrow checker rules out mutation while
//!   it is alive.
//! - [`IntoIter`] consumes the set and yields owned values.
//! - [`Cursor`] is a detached position that does not borrow the set. It is
//!   stamped with the set's structure version and every use through the set
//!   checks that stamp, failing with
//!   [`SkipSetError::CursorInvalidated`](crate::SkipSetError::CursorInvalidated)
//!   once the set has been structurally modified.

use std::iter::FusedIterator;

use slab::Slab;

use crate::skipset::node::Node;

/// Borrowing iterator over a skip set in ascending order.
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a Slab<Node<T>>,
    pub(crate) next: Option<usize>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes: &'a Slab<Node<T>> = self.nodes;
        let node = &nodes[self.next?];
        self.next = node.next();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over a skip set in ascending order.
pub struct IntoIter<T> {
    pub(crate) nodes: Slab<Node<T>>,
    pub(crate) next: Option<usize>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.nodes.remove(self.next?);
        self.next = node.next();
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nodes.len(), Some(self.nodes.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Detached forward position in a skip set.
///
/// Obtained from [`SkipSet::begin`](crate::SkipSet::begin) or
/// [`SkipSet::end`](crate::SkipSet::end) and moved with
/// [`SkipSet::advance`](crate::SkipSet::advance). Equality compares positions
/// only, so `set.begin() == set.end()` holds exactly when the set is empty.
///
/// A cursor must only be used with the set that created it.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub(crate) position: Option<usize>,
    pub(crate) version: u64,
}

impl Cursor {
    /// Returns true if the cursor is past the last element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Structure version the cursor was stamped with
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cursor {}
