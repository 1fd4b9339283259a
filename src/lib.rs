//! # ordered-skipset
//!
//! An ordered, duplicate-free set implemented as a skip list.
//!
//! ## Architecture
//!
//! - **SkipSet**: the container, with nodes stored in a slab and addressed by key
//! - **Compare**: strict weak ordering; equality is derived from it
//! - **LevelGenerator**: tower heights from an owned, explicitly seeded RNG
//! - **Cursor**: detached positions that fail fast once the set changes
//!
//! ## Design Principles
//!
//! 1. **Determinism**: the same seed and operations produce the same structure
//! 2. **No hidden state**: every set owns its random source
//! 3. **Typed failures**: bad configuration and allocation failure are errors, never panics
//! 4. **Single-threaded**: no locks or atomics; a set is not shared for mutation
//!
//! ## Example
//!
//! ```
//! use ordered_skipset::SkipSet;
//!
//! let mut set = SkipSet::new();
//! assert!(set.insert(3).unwrap());
//! assert!(set.insert(1).unwrap());
//! assert!(!set.insert(3).unwrap());
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.first(), Some(&1));
//! assert!(set.contains(&3));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Comparators: natural, reverse and closure based ordering
pub mod compare;

/// Construction parameters
pub mod config;

/// Error types
pub mod error;

/// Skip set, level generation and iteration
pub mod skipset;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use compare::{Compare, CompareFn, NaturalOrder, ReverseOrder};
pub use config::SkipSetConfig;
pub use error::{Result, SkipSetError};
pub use skipset::{Cursor, GeometricLevels, IntoIter, Iter, LevelGenerator, SkipSet};
