//! Ordered, duplicate-free skip list set.
//!
//! ## Architecture
//!
//! - **Slab**: every value node lives in a `Slab<Node<T>>` and is addressed
//!   by its slab key. Erased slots go back on the slab's free list and are
//!   reused by later inserts.
//! - **Header**: a valueless table of `max_level` successor keys. In the
//!   search code a predecessor of `None` means "the header".
//! - **Levels**: tower heights come from an owned [`LevelGenerator`].
//!
//! ## Search
//!
//! Every operation walks from the top occupied level down to level 0,
//! advancing while the next value orders strictly before the probe. The
//! level-0 successor of the final predecessor is the only equality
//! candidate, and it matches when the probe does not order before it.
//! All comparator calls happen during this walk, before any link changes,
//! so a panicking comparator leaves the set intact.
//!
//! ## Complexity
//!
//! | Operation | Expected |
//! |-----------|----------|
//! | insert | O(log n) |
//! | erase / take | O(log n) |
//! | find / contains | O(log n) |
//! | first / pop_first | O(1) / O(height) |
//! | last | O(log n) |
//! | len / is_empty | O(1) |
//!
//! ## Example
//!
//! ```
//! use ordered_skipset::{SkipSet, SkipSetConfig};
//!
//! let mut set = SkipSet::with_config(SkipSetConfig::new(4)).unwrap();
//! for value in [5, 3, 8, 1] {
//!     set.insert(value).unwrap();
//! }
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
//!
//! assert!(set.erase(&3));
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.find(&8), Some(&8));
//! assert_eq!(set.find(&99), None);
//! ```

use std::fmt;
use std::mem;

use slab::Slab;

use crate::compare::{Compare, NaturalOrder};
use crate::config::{validate_max_level, SkipSetConfig, DEFAULT_MAX_LEVEL};
use crate::error::{try_links, Result, SkipSetError};
use crate::skipset::iter::{Cursor, IntoIter, Iter};
use crate::skipset::level::{GeometricLevels, LevelGenerator};
use crate::skipset::node::Node;

/// Ordered set backed by a skip list.
///
/// `C` decides the order (and, through it, which values count as the same
/// element). `G` produces tower heights.
#[derive(Clone)]
pub struct SkipSet<T, C = NaturalOrder, G = GeometricLevels> {
    /// Value nodes, keyed by slab index
    nodes: Slab<Node<T>>,

    /// Header successors, one per level up to `max_level`
    head: Vec<Option<usize>>,

    /// Number of levels in use, between 1 and `max_level`
    level: usize,

    /// Bumped on every structural change, checked by cursors
    version: u64,

    /// Reused predecessor table for insert/erase
    update: Vec<Option<usize>>,

    compare: C,
    levels: G,
}

impl<T: Ord> Default for SkipSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> SkipSet<T> {
    /// Create an empty set in natural order with the default configuration.
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: vec![None; DEFAULT_MAX_LEVEL],
            level: 1,
            version: 0,
            update: vec![None; DEFAULT_MAX_LEVEL],
            compare: NaturalOrder,
            levels: GeometricLevels::default(),
        }
    }

    /// Create an empty set in natural order.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if the configuration does not validate
    /// - `OutOfMemory` if the header cannot be allocated
    pub fn with_config(config: SkipSetConfig) -> Result<Self> {
        Self::with_comparator(config, NaturalOrder)
    }
}

impl<T, C: Compare<T>> SkipSet<T, C> {
    /// Create an empty set ordered by `compare`.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_skipset::{ReverseOrder, SkipSet, SkipSetConfig};
    ///
    /// let mut set = SkipSet::with_comparator(SkipSetConfig::default(), ReverseOrder).unwrap();
    /// set.try_extend([1, 3, 2]).unwrap();
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    pub fn with_comparator(config: SkipSetConfig, compare: C) -> Result<Self> {
        config.validate()?;
        let levels = GeometricLevels::from_config(&config)?;
        Self::assemble(compare, levels, config.capacity)
    }
}

impl<T, C: Compare<T>, G: LevelGenerator> SkipSet<T, C, G> {
    /// Create an empty set with an injected level generator.
    ///
    /// The header gets `levels.max_level()` slots.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if the generator's level bound is zero
    /// - `OutOfMemory` if the header cannot be allocated
    pub fn with_generator(compare: C, levels: G) -> Result<Self> {
        Self::assemble(compare, levels, 0)
    }

    fn assemble(compare: C, levels: G, capacity: usize) -> Result<Self> {
        let max_level = levels.max_level();
        validate_max_level(max_level)?;

        let head = try_links(max_level)?;
        let update = try_links(max_level)?;

        Ok(Self {
            nodes: Slab::with_capacity(capacity),
            head,
            level: 1,
            version: 0,
            update,
            compare,
            levels,
        })
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert a value.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the value was inserted, `Ok(false)` if an equivalent
    /// value was already present (the set is unchanged and `value` is
    /// dropped).
    ///
    /// # Errors
    ///
    /// `OutOfMemory` if the new node's tower cannot be allocated. The set
    /// is left exactly as it was.
    ///
    /// # Aborts
    ///
    /// Growing the slab's slot vector goes through the global allocator,
    /// which aborts on exhaustion. Pre-size with
    /// [`SkipSetConfig::with_capacity`] to keep inserts within
    /// [`capacity`](Self::capacity) off that path.
    pub fn insert(&mut self, value: T) -> Result<bool> {
        let mut update = self.scratch();
        let result = self.insert_with(value, &mut update);
        self.update = update;
        result
    }

    fn insert_with(&mut self, value: T, update: &mut [Option<usize>]) -> Result<bool> {
        if self.locate(&value, update).is_some() {
            return Ok(false);
        }

        let height = self.levels.random_height().clamp(1, self.max_level());
        // Fails before any link moves. A tower is never taller than the
        // header already allocated, so the failure branch of `try_links` is
        // exercised through `test_skipset_header_allocation_failure` instead.
        let mut forward = try_links(height)?;

        // Newly activated levels are entered from the header
        if height > self.level {
            for pred in &mut update[self.level..height] {
                *pred = None;
            }
        }

        for (level, next) in forward.iter_mut().enumerate() {
            *next = self.successor(update[level], level);
        }

        let key = self.nodes.insert(Node::new(value, forward));
        for (level, &pred) in update.iter().enumerate().take(height) {
            *self.link_mut(pred, level) = Some(key);
        }

        self.level = self.level.max(height);
        self.bump_version();
        Ok(true)
    }

    /// Insert every value from `iter`.
    ///
    /// # Returns
    ///
    /// The number of values that were not already present.
    ///
    /// # Errors
    ///
    /// Stops at the first `OutOfMemory`. Values inserted before the
    /// failure stay in the set.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let mut inserted = 0;
        for value in iter {
            if self.insert(value)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Remove the element equivalent to `value`.
    ///
    /// Returns false, without touching the set, if there is none.
    pub fn erase(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Remove and return the element equivalent to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let mut update = self.scratch();
        let removed = match self.locate(value, &mut update) {
            Some(key) => Some(self.unlink(key, &update)),
            None => None,
        };
        self.update = update;
        removed
    }

    /// Unlink the node at `key` from every level it occupies and release it.
    ///
    /// `update[i]` must be the node's predecessor at level `i`.
    fn unlink(&mut self, key: usize, update: &[Option<usize>]) -> T {
        let node = self.nodes.remove(key);
        for (level, &next) in node.forward.iter().enumerate() {
            let link = self.link_mut(update[level], level);
            debug_assert_eq!(*link, Some(key));
            *link = next;
        }

        self.shrink_level();
        self.bump_version();
        node.value
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Find the stored element equivalent to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.search(value).map(|key| &self.nodes[key].value)
    }

    /// Check if an element equivalent to `value` is stored.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Comparator in use
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    // ========================================================================
    // Search internals
    // ========================================================================

    /// Top-down walk recording the predecessor at every occupied level.
    fn locate(&self, value: &T, update: &mut [Option<usize>]) -> Option<usize> {
        let mut pred = None;
        for level in (0..self.level).rev() {
            pred = self.skip_before(pred, level, value);
            update[level] = pred;
        }
        self.candidate(pred, value)
    }

    fn search(&self, value: &T) -> Option<usize> {
        let mut pred = None;
        for level in (0..self.level).rev() {
            pred = self.skip_before(pred, level, value);
        }
        self.candidate(pred, value)
    }

    /// Advance along `level` while the next value orders before `value`.
    #[inline]
    fn skip_before(&self, mut pred: Option<usize>, level: usize, value: &T) -> Option<usize> {
        while let Some(next) = self.successor(pred, level) {
            if !self.compare.less(&self.nodes[next].value, value) {
                break;
            }
            pred = Some(next);
        }
        pred
    }

    /// Level-0 successor of `pred`, if it is equivalent to `value`.
    ///
    /// The successor is already known not to order before `value`.
    #[inline]
    fn candidate(&self, pred: Option<usize>, value: &T) -> Option<usize> {
        self.successor(pred, 0)
            .filter(|&key| !self.compare.less(value, &self.nodes[key].value))
    }

    /// Predecessor table sized to the header, every entry pointing at the header.
    fn scratch(&mut self) -> Vec<Option<usize>> {
        let mut update = mem::take(&mut self.update);
        update.clear();
        update.resize(self.head.len(), None);
        update
    }
}

impl<T, C, G> SkipSet<T, C, G> {
    // ========================================================================
    // Size and Shape
    // ========================================================================

    /// Number of stored elements
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels currently in use (1 when empty)
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Upper bound on tower height
    #[inline]
    pub fn max_level(&self) -> usize {
        self.head.len()
    }

    /// Number of node slots allocated
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Structure version, bumped by every successful structural change
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    // ========================================================================
    // Ends
    // ========================================================================

    /// Smallest element
    pub fn first(&self) -> Option<&T> {
        self.head[0].map(|key| &self.nodes[key].value)
    }

    /// Largest element
    pub fn last(&self) -> Option<&T> {
        let mut pred = None;
        for level in (0..self.level).rev() {
            while let Some(next) = self.successor(pred, level) {
                pred = Some(next);
            }
        }
        pred.map(|key| &self.nodes[key].value)
    }

    /// Remove and return the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        let key = self.head[0]?;
        let node = self.nodes.remove(key);

        // The first node heads every level it occupies
        for (level, &next) in node.forward.iter().enumerate() {
            debug_assert_eq!(self.head[level], Some(key));
            self.head[level] = next;
        }

        self.shrink_level();
        self.bump_version();
        Some(node.value)
    }

    /// Remove every element.
    ///
    /// Resets the header, then releases every node. Slab capacity is kept.
    ///
    /// If a value's `Drop` panics, the set is already empty and stays usable.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }

        // Detach first: no header slot may name a key the slab has released
        self.head.fill(None);
        self.level = 1;
        self.bump_version();

        self.nodes.drain().for_each(drop);
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head[0],
            remaining: self.len(),
        }
    }

    /// Cursor at the smallest element, or the end cursor if empty.
    #[inline]
    pub fn begin(&self) -> Cursor {
        Cursor {
            position: self.head[0],
            version: self.version,
        }
    }

    /// Cursor past the largest element.
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor {
            position: None,
            version: self.version,
        }
    }

    /// Element under `cursor`, or `None` at the end.
    ///
    /// # Errors
    ///
    /// `CursorInvalidated` if the set changed since the cursor was created.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_skipset::{SkipSet, SkipSetError};
    ///
    /// let mut set = SkipSet::new();
    /// set.try_extend([2, 1]).unwrap();
    ///
    /// let mut cursor = set.begin();
    /// assert_eq!(set.value_at(&cursor).unwrap(), Some(&1));
    /// set.advance(&mut cursor).unwrap();
    /// assert_eq!(set.value_at(&cursor).unwrap(), Some(&2));
    ///
    /// set.erase(&2);
    /// assert!(matches!(
    ///     set.value_at(&cursor),
    ///     Err(SkipSetError::CursorInvalidated { .. })
    /// ));
    /// ```
    pub fn value_at(&self, cursor: &Cursor) -> Result<Option<&T>> {
        self.check_cursor(cursor)?;
        Ok(cursor
            .position
            .and_then(|key| self.nodes.get(key))
            .map(|node| &node.value))
    }

    /// Move `cursor` to the next element. The end cursor stays at the end.
    ///
    /// # Errors
    ///
    /// `CursorInvalidated` if the set changed since the cursor was created.
    pub fn advance(&self, cursor: &mut Cursor) -> Result<()> {
        self.check_cursor(cursor)?;
        if let Some(key) = cursor.position {
            cursor.position = self.nodes.get(key).and_then(Node::next);
        }
        Ok(())
    }

    fn check_cursor(&self, cursor: &Cursor) -> Result<()> {
        if cursor.version != self.version {
            return Err(SkipSetError::CursorInvalidated {
                cursor: cursor.version,
                current: self.version,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Link helpers
    // ========================================================================

    /// Successor of `pred` (`None` = header) at `level`
    #[inline]
    fn successor(&self, pred: Option<usize>, level: usize) -> Option<usize> {
        match pred {
            Some(key) => self.nodes[key].forward[level],
            None => self.head[level],
        }
    }

    #[inline]
    fn link_mut(&mut self, pred: Option<usize>, level: usize) -> &mut Option<usize> {
        match pred {
            Some(key) => &mut self.nodes[key].forward[level],
            None => &mut self.head[level],
        }
    }

    /// Drop vacant top levels in one scan from the top down.
    fn shrink_level(&mut self) {
        while self.level > 1 && self.head[self.level - 1].is_none() {
            self.level -= 1;
        }
    }

    #[inline]
    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl<T, C, G> IntoIterator for SkipSet<T, C, G> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            next: self.head[0],
            nodes: self.nodes,
        }
    }
}

impl<'a, T, C, G> IntoIterator for &'a SkipSet<T, C, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug, C, G> fmt::Debug for SkipSet<T, C, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
