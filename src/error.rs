//! Error types for the skip set.
//!
//! Only genuine failures are errors. Looking up or erasing an absent value,
//! or inserting a value that is already present, is reported through the
//! return value (`None` / `false`) instead.

use std::collections::TryReserveError;

use thiserror::Error;

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, SkipSetError>;

/// Failures raised by construction, insertion and cursor use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipSetError {
    /// The configuration cannot describe a valid skip list
    /// (zero level bound, probability outside `(0, 1)`).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Reserving successor slots failed. No links were modified.
    #[error("out of memory reserving {height} successor slot(s)")]
    OutOfMemory {
        /// Number of successor slots that were requested
        height: usize,
        #[source]
        source: TryReserveError,
    },

    /// A detached cursor outlived a structural mutation of its set.
    #[error("cursor invalidated: created at version {cursor}, set is at version {current}")]
    CursorInvalidated {
        /// Structure version the cursor was stamped with
        cursor: u64,
        /// Structure version of the set at the time of use
        current: u64,
    },
}

impl SkipSetError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SkipSetError::InvalidConfiguration(reason.into())
    }

    pub(crate) fn out_of_memory(height: usize, source: TryReserveError) -> Self {
        SkipSetError::OutOfMemory { height, source }
    }
}

/// Allocate an empty successor table of exactly `height` slots.
///
/// Used for both the header and node towers so every allocation point
/// reports exhaustion as [`SkipSetError::OutOfMemory`].
pub(crate) fn try_links(height: usize) -> Result<Vec<Option<usize>>> {
    let mut links = Vec::new();
    links
        .try_reserve_exact(height)
        .map_err(|source| SkipSetError::out_of_memory(height, source))?;
    links.resize(height, None);
    Ok(links)
}
