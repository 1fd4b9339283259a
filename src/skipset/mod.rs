//! Skip list set.
//!
//! ## Components
//!
//! - [`SkipSet`]: the container (slab-backed nodes, header, search/splice)
//! - [`LevelGenerator`] / [`GeometricLevels`]: tower height policy
//! - [`Iter`], [`IntoIter`], [`Cursor`]: ordered traversal
//!
//! Node layout lives in `node` and is not exposed.

pub mod iter;
pub mod level;
mod node;
pub mod set;

pub use iter::{Cursor, IntoIter, Iter};
pub use level::{GeometricLevels, LevelGenerator};
pub use set::SkipSet;
