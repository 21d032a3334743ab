//! Core types for the ranked-combinator permutation search engine.
//!
//! This crate has no notion of search: it defines the data the search
//! drivers in `rcomb-engine` operate on.
//!
//! - [`ElementId`]: a filter identifier
//! - [`Relation`] / [`PartialOrder`]: the three-valued precedence matrix
//! - [`Permutation`]: a fixed-capacity, partially-decided ordering of identifiers
//! - [`EvaluationOracle`] / [`EvalOutcome`]: the host-provided scoring capability
//! - [`Error`] / [`Limits`]: the error and configuration ambient to all of the above

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod order;
pub mod permutation;
pub mod relation;
pub mod traits;

pub use error::{Error, Result};
pub use limits::Limits;
pub use order::PartialOrder;
pub use permutation::{ElementId, Permutation};
pub use relation::Relation;
pub use traits::{EvalOutcome, EvaluationOracle};
