//! Construction parameters for a [`SkipSet`](crate::SkipSet).
//!
//! ## Example
//!
//! ```
//! use ordered_skipset::SkipSetConfig;
//!
//! let config = SkipSetConfig::new(8).with_seed(7).with_capacity(1_000);
//! assert!(config.validate().is_ok());
//!
//! assert!(SkipSetConfig::new(0).validate().is_err());
//! ```

use crate::error::{Result, SkipSetError};

/// Default bound on tower height
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Default per-level continuation probability
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Default generator seed, so that default-constructed sets are reproducible
pub const DEFAULT_SEED: u64 = 0x5eed_5eed_5eed_5eed;

/// Skip set configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipSetConfig {
    /// Maximum tower height (number of header slots). Must be at least 1.
    pub max_level: usize,

    /// Probability that a tower continues to the next level. Must be in `(0, 1)`.
    pub probability: f64,

    /// Seed for the owned level generator
    pub seed: u64,

    /// Number of node slots to pre-allocate
    pub capacity: usize,
}

impl Default for SkipSetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVEL)
    }
}

impl SkipSetConfig {
    /// Create a configuration with the given level bound and default
    /// probability, seed and capacity.
    pub fn new(max_level: usize) -> Self {
        Self {
            max_level,
            probability: DEFAULT_PROBABILITY,
            seed: DEFAULT_SEED,
            capacity: 0,
        }
    }

    /// Set the continuation probability
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Set the level generator seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of pre-allocated node slots
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check the configuration.
    ///
    /// A zero level bound is rejected rather than coerced to 1.
    pub fn validate(&self) -> Result<()> {
        validate_max_level(self.max_level)?;
        validate_probability(self.probability)
    }
}

pub(crate) fn validate_max_level(max_level: usize) -> Result<()> {
    if max_level == 0 {
        return Err(SkipSetError::invalid("max_level must be at least 1"));
    }
    Ok(())
}

pub(crate) fn validate_probability(probability: f64) -> Result<()> {
    // NaN fails both comparisons
    if !(probability > 0.0 && probability < 1.0) {
        return Err(SkipSetError::invalid(format!(
            "probability must be in (0, 1), got {probability}"
        )));
    }
    Ok(())
}
