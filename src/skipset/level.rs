//! Tower height generation.
//!
//! ## Policy
//!
//! Every new node starts with height 1. A uniform draw in `[0, 1)` below the
//! continuation probability `p` adds one level, and drawing repeats until a
//! draw fails or the level bound is reached:
//!
//! ```text
//! P(height = k)         = (1 - p) * p^(k-1)     for k < max_level
//! P(height = max_level) = p^(max_level-1)
//! ```
//!
//! ## Determinism
//!
//! The random source is a `ChaCha8Rng` owned by the generator and seeded
//! explicitly (https://docs.rs/rand_chacha/0.3). Two generators built from
//! the same seed produce the same heights, so a skip set's shape is
//! reproducible across runs and independent of any other set.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{
    validate_max_level, validate_probability, SkipSetConfig, DEFAULT_MAX_LEVEL,
    DEFAULT_PROBABILITY, DEFAULT_SEED,
};
use crate::error::Result;

/// Source of tower heights for newly inserted nodes.
///
/// Custom generators can be injected with
/// [`SkipSet::with_generator`](crate::SkipSet::with_generator).
pub trait LevelGenerator {
    /// Upper bound on generated heights (and the number of header slots).
    fn max_level(&self) -> usize;

    /// Height for the next node, in `1..=max_level()`.
    ///
    /// The skip set clamps out-of-range values into that interval.
    fn random_height(&mut self) -> usize;
}

/// Geometric height distribution driven by a seeded ChaCha8 generator.
#[derive(Debug, Clone)]
pub struct GeometricLevels {
    max_level: usize,
    probability: f64,
    rng: ChaCha8Rng,
}

impl Default for GeometricLevels {
    /// Generator with the default bound, probability and seed
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            probability: DEFAULT_PROBABILITY,
            rng: ChaCha8Rng::seed_from_u64(DEFAULT_SEED),
        }
    }
}

impl GeometricLevels {
    /// Create a generator.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `max_level` is zero or `probability` is not
    /// in `(0, 1)`.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_skipset::{GeometricLevels, LevelGenerator};
    ///
    /// let mut levels = GeometricLevels::new(4, 0.5, 42).unwrap();
    /// let height = levels.random_height();
    /// assert!((1..=4).contains(&height));
    /// ```
    pub fn new(max_level: usize, probability: f64, seed: u64) -> Result<Self> {
        validate_max_level(max_level)?;
        validate_probability(probability)?;

        Ok(Self {
            max_level,
            probability,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Create a generator from a set configuration
    pub fn from_config(config: &SkipSetConfig) -> Result<Self> {
        Self::new(config.max_level, config.probability, config.seed)
    }

    /// Continuation probability
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl LevelGenerator for GeometricLevels {
    #[inline]
    fn max_level(&self) -> usize {
        self.max_level
    }

    fn random_height(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_level && self.rng.gen::<f64>() < self.probability {
            height += 1;
        }
        height
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
