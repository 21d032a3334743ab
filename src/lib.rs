//! # rcomb
//!
//! A ranked-combinator permutation search engine: the reusable core behind
//! reordering a set of filters under precedence constraints, where
//! evaluating a candidate ordering is expensive and must be measured by an
//! external oracle.
//!
//! Four pieces, composed bottom-up:
//!
//! - [`Relation`] / [`PartialOrder`] — a three-valued precedence matrix over
//!   filter identifiers, with transitive closure.
//! - [`Permutation`] — a fixed-capacity, partially-decided ordering of
//!   identifiers.
//! - [`EvaluationOracle`] — the host capability that scores a candidate
//!   permutation, or reports that it has no data yet.
//! - [`HillClimb`] / [`BestFirst`] — two resumable search drivers that
//!   reorder permutations against an oracle and a partial order.
//!
//! Both drivers are pull-style state machines: the host calls `step`
//! repeatedly. A call either makes progress, asks for an oracle measurement
//! ([`HillClimbStepOutcome::NeedsEvaluation`] /
//! [`BestFirstStepOutcome::NeedsEvaluation`]), or reports completion.
//!
//! # Quick Start
//!
//! ```
//! use rcomb::{EvalOutcome, EvaluationOracle, HillClimb, HillClimbStepOutcome, PartialOrder, Permutation, Result};
//!
//! struct CostOracle;
//!
//! impl EvaluationOracle for CostOracle {
//!     fn evaluate(&mut self, candidate: &Permutation) -> Result<EvalOutcome> {
//!         // Prefer large identifiers first.
//!         let score: i64 = candidate
//!             .decided()
//!             .iter()
//!             .enumerate()
//!             .map(|(i, &e)| (i as i64) * (e as i64))
//!             .sum();
//!         Ok(EvalOutcome::Score(-score))
//!     }
//! }
//!
//! let po = PartialOrder::new(4);
//! let mut start = Permutation::new(4);
//! start.identity_fill();
//!
//! let mut oracle = CostOracle;
//! let mut search = HillClimb::new(&start, &po, &mut oracle);
//!
//! loop {
//!     match search.step()? {
//!         HillClimbStepOutcome::Complete => break,
//!         HillClimbStepOutcome::NeedsEvaluation => continue,
//!     }
//! }
//!
//! assert_eq!(search.result().decided(), &[3, 2, 1, 0]);
//! # Ok::<(), rcomb::Error>(())
//! ```
//!
//! # Precedence constraints
//!
//! Filters that must stay in relative order are declared once, then closed
//! transitively, before search begins:
//!
//! ```
//! use rcomb::{PartialOrder, Relation};
//!
//! let mut po = PartialOrder::new(3);
//! po.set_order(0, 1, Relation::Lt);
//! po.set_order(1, 2, Relation::Lt);
//! po.closure();
//!
//! assert_eq!(po.get(0, 2), Relation::Lt);
//! assert_eq!(po.get(2, 0), Relation::Gt);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use rcomb_core::{
    EvalOutcome, ElementId, Error, EvaluationOracle, Limits, PartialOrder, Permutation, Relation,
    Result,
};
pub use rcomb_engine::{
    BestFirst, BestFirstStepOutcome, HillClimb, HillClimbStepOutcome, MaxHeap,
};
