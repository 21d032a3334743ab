//! Hill-climbing search over pairwise swaps.

use rcomb_core::{EvalOutcome, EvaluationOracle, PartialOrder, Permutation, Result};
use tracing::{debug, trace};

/// Outcome of a single [`HillClimb::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A full pass over every `(i, j)` pair found no improving swap.
    /// Inspect [`HillClimb::result`].
    Complete,
    /// A candidate permutation is awaiting an oracle measurement. Inspect
    /// [`HillClimb::next`], arrange the measurement, then call `step` again.
    NeedsEvaluation,
}

/// Local search that repeatedly swaps pairs of positions in a permutation,
/// accepting only swaps that strictly improve the oracle's score.
///
/// For every pair `(i, j)` with `0 <= i < j < n`, a swap is only considered
/// if it can be realized as a sequence of adjacent transpositions that never
/// violates the partial order: `perm[i]` and `perm[j]` must be incomparable,
/// and every position strictly between `i` and `j` must be incomparable with
/// both endpoints. Equal-scoring neighbors are never accepted, which keeps
/// the search from cycling among permutations of equal quality.
///
/// `step` is pull-style and resumable: a call either runs to convergence
/// (`Complete`) or stops because the oracle needs more samples
/// (`NeedsEvaluation`), preserving its `(i, j)` cursor across the pause so a
/// later call resumes the same candidate.
pub struct HillClimb<'a> {
    po: &'a PartialOrder,
    oracle: &'a mut dyn EvaluationOracle,
    n: usize,
    best: Permutation,
    next: Permutation,
    i: usize,
    j: usize,
    improved: bool,
}

impl<'a> HillClimb<'a> {
    /// Start hill climbing from `start`, constrained by `po` and scored by `oracle`.
    pub fn new(
        start: &Permutation,
        po: &'a PartialOrder,
        oracle: &'a mut dyn EvaluationOracle,
    ) -> Self {
        let n = start.length();
        HillClimb {
            po,
            oracle,
            n,
            best: start.duplicate(),
            next: Permutation::new(n),
            i: 0,
            j: 1,
            improved: true,
        }
    }

    /// The best permutation found so far.
    pub fn result(&self) -> &Permutation {
        &self.best
    }

    /// The candidate under evaluation when `step` last returned
    /// [`StepOutcome::NeedsEvaluation`].
    pub fn next(&self) -> &Permutation {
        &self.next
    }

    fn valid_swap(&self, perm: &Permutation, u: usize, v: usize) -> bool {
        if self.po.is_comparable(perm.element(u), perm.element(v)) {
            return false;
        }
        for k in (u + 1)..v {
            if self.po.is_comparable(perm.element(u), perm.element(k))
                || self.po.is_comparable(perm.element(k), perm.element(v))
            {
                return false;
            }
        }
        true
    }

    /// Advance the search.
    ///
    /// A single call may run through several full passes — it keeps going as
    /// long as each pass finds at least one improving swap — stopping only
    /// when a pass converges (`Complete`) or the oracle stalls
    /// (`NeedsEvaluation`).
    ///
    /// # Errors
    ///
    /// Propagates any oracle error other than "no data yet" verbatim. On
    /// error, `next()` is reset to equal `result()` before returning, per the
    /// specification's oracle-error contract.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let n = self.n;
        if n < 2 {
            return Ok(StepOutcome::Complete);
        }

        let mut best_score = match self.oracle.evaluate(&self.best) {
            Ok(EvalOutcome::Score(s)) => s,
            Ok(EvalOutcome::NoData) => {
                self.next.copy_from(&self.best);
                return Ok(StepOutcome::NeedsEvaluation);
            }
            Err(e) => {
                self.next.copy_from(&self.best);
                return Err(e);
            }
        };

        while self.improved {
            // `(i, j) == (0, 1)` marks the top of a pass, whether this is a
            // brand new pass or we are resuming one that stalled before
            // recording any improvement. Resuming mid-pass (i, j) elsewhere
            // must not clobber an improvement already found earlier in that
            // same pass.
            if self.i == 0 && self.j == 1 {
                self.improved = false;
            }
            debug!(best = %self.best.formatted(200), best_score, "hill climb pass");
            self.next.copy_from(&self.best);

            while self.i < n - 1 {
                if self.valid_swap(&self.next, self.i, self.j) {
                    self.next.swap(self.i, self.j);

                    match self.oracle.evaluate(&self.next) {
                        Ok(EvalOutcome::Score(next_score)) => {
                            trace!(
                                i = self.i,
                                j = self.j,
                                candidate = %self.next.formatted(200),
                                next_score,
                                "hill climb candidate"
                            );
                            if next_score > best_score {
                                best_score = next_score;
                                self.improved = true;
                                self.best.copy_from(&self.next);
                            }
                            self.next.swap(self.i, self.j);
                        }
                        Ok(EvalOutcome::NoData) => {
                            return Ok(StepOutcome::NeedsEvaluation);
                        }
                        Err(e) => {
                            self.next.copy_from(&self.best);
                            return Err(e);
                        }
                    }
                }

                self.j += 1;
                if self.j >= n {
                    self.i += 1;
                    self.j = self.i + 1;
                }
            }

            self.i = 0;
            self.j = 1;
        }

        Ok(StepOutcome::Complete)
    }
}
