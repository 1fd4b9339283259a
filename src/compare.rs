//! Ordering capability used by the skip set.
//!
//! A comparator only answers "is `a` strictly before `b`". Two values are
//! treated as the same element when neither is before the other, so the
//! stored type never needs `PartialEq`.

use std::cmp::Ordering;
use std::fmt;

/// A strict weak ordering over `T`.
///
/// Implementations must be irreflexive and transitive, and equivalence
/// (`!less(a, b) && !less(b, a)`) must be transitive as well.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns true if neither value orders before the other.
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Ascending order via [`Ord`]. This is the default comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Compare<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a.cmp(b) == Ordering::Less
    }
}

/// Descending order via [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Compare<T> for ReverseOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b.cmp(a) == Ordering::Less
    }
}

/// Adapts a `Fn(&T, &T) -> bool` "less than" closure.
///
/// ```
/// use ordered_skipset::{CompareFn, SkipSet, SkipSetConfig};
///
/// let by_len = CompareFn::new(|a: &String, b: &String| a.len() < b.len());
/// let mut set = SkipSet::with_comparator(SkipSetConfig::default(), by_len).unwrap();
///
/// assert!(set.insert("pear".to_string()).unwrap());
/// assert!(!set.insert("plum".to_string()).unwrap()); // same length, same element
/// assert_eq!(set.find(&"kiwi".to_string()).map(String::as_str), Some("pear"));
/// ```
#[derive(Clone, Copy)]
pub struct CompareFn<F>(F);

impl<F> CompareFn<F> {
    pub fn new(less: F) -> Self {
        CompareFn(less)
    }
}

impl<F> fmt::Debug for CompareFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompareFn")
    }
}

impl<T: ?Sized, F> Compare<T> for CompareFn<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}
