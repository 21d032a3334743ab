//! Error types for the ranked-combinator engine.
//!
//! This module defines the error type used for the few failures that are
//! *not* programmer errors: configured-limit violations raised at
//! construction time, and errors propagated verbatim from the host's
//! evaluation oracle. Everything else — out-of-bounds indices, operating on
//! a permutation past its capacity, heap overflow — is a precondition
//! violation and panics, matching the "engine aborts" contract in the
//! specification this crate implements.

use thiserror::Error;

/// Result type alias for ranked-combinator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the ranked-combinator engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A requested dimension or capacity exceeds the configured [`crate::limits::Limits`].
    #[error("dimension {requested} exceeds configured limit {limit}")]
    DimensionTooLarge {
        /// The dimension the caller asked for.
        requested: usize,
        /// The configured maximum.
        limit: usize,
    },

    /// The host's evaluation oracle returned an error other than "no data yet".
    ///
    /// Hill climbing resets its pending candidate to the current best before
    /// surfacing this; best-first search leaves its heap intact so the host
    /// may choose to retry.
    #[error("evaluation oracle failed: {0}")]
    Oracle(String),
}
