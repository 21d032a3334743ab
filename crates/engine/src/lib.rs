//! Search drivers that reorder [`rcomb_core::Permutation`]s under a
//! [`rcomb_core::PartialOrder`] using host-provided scoring.
//!
//! - [`heap::MaxHeap`]: the priority queue [`best_first::BestFirst`] is built on
//! - [`hill_climb::HillClimb`]: local search by pairwise swap
//! - [`best_first::BestFirst`]: informed search over partial permutations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod best_first;
pub mod heap;
pub mod hill_climb;

pub use best_first::BestFirst;
pub use heap::MaxHeap;
pub use hill_climb::HillClimb;

pub use best_first::StepOutcome as BestFirstStepOutcome;
pub use hill_climb::StepOutcome as HillClimbStepOutcome;
