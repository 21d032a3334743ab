//! The evaluation oracle: the host-provided capability that scores candidate
//! permutations.

use crate::error::Result;
use crate::permutation::Permutation;

/// The result of scoring one candidate permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalOutcome {
    /// The oracle produced a score for the candidate. Higher is better.
    Score(i64),
    /// The oracle does not yet have enough samples to score this candidate;
    /// the host should arrange measurement and the driver should be resumed
    /// once that data is available.
    NoData,
}

/// A host-provided scoring callback for candidate filter orderings.
///
/// This is the search drivers' only way to learn anything about a
/// permutation's quality: the engine does not measure filter cost itself,
/// does not interpret element identifiers, and caches no results, so an
/// oracle may be asked to score the same permutation more than once and is
/// expected to be idempotent when it is.
///
/// Implementations carry their own context (statistics, sample counts,
/// whatever the scoring model needs) as fields — there is no separate
/// `context` parameter, unlike the original C callback-plus-`void*` pairing
/// this trait replaces.
pub trait EvaluationOracle {
    /// Score `candidate`, or report that more samples are needed.
    ///
    /// # Errors
    ///
    /// Returns an error only for oracle failures that are not "no data yet" —
    /// those are propagated verbatim to the driver's caller.
    fn evaluate(&mut self, candidate: &Permutation) -> Result<EvalOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantOracle(i64);

    impl EvaluationOracle for ConstantOracle {
        fn evaluate(&mut self, _candidate: &Permutation) -> Result<EvalOutcome> {
            Ok(EvalOutcome::Score(self.0))
        }
    }

    #[test]
    fn oracle_trait_is_object_safe() {
        fn accepts_oracle(_o: &mut dyn EvaluationOracle) {}
        let mut oracle = ConstantOracle(42);
        accepts_oracle(&mut oracle);
    }

    #[test]
    fn oracle_scores_a_candidate() {
        let mut oracle = ConstantOracle(7);
        let p = Permutation::new(3);
        assert_eq!(oracle.evaluate(&p).unwrap(), EvalOutcome::Score(7));
    }
}
