//! Best-first search over partial permutations, expanded in order of
//! decreasing evaluation score.

use rcomb_core::{EvalOutcome, EvaluationOracle, PartialOrder, Permutation, Relation, Result};
use tracing::{debug, trace};

use crate::heap::MaxHeap;

/// Outcome of a single [`BestFirst::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The state machine advanced internally; call `step` again.
    Progress,
    /// A candidate permutation is awaiting an oracle measurement. Inspect
    /// [`BestFirst::next`] — already repaired into a full, precedence-valid
    /// ordering — arrange the measurement, then call `step` again.
    NeedsEvaluation,
    /// The highest-scoring fully-expanded permutation has been found.
    /// Inspect [`BestFirst::result`].
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Init,
    Visit,
    Expand,
    Done,
}

/// Informed search that builds a full permutation of `[0, n)` one position
/// at a time, always expanding the highest-scoring partial permutation seen
/// so far.
///
/// Seeds the search with every minimal element of `po` (an element with no
/// element strictly less than it), then repeatedly pops the best partial
/// permutation off a max-heap and extends it by one position for every
/// precedence-valid candidate. The first length-`n` permutation popped off
/// the heap is the result, since every shorter partial permutation still on
/// the heap scores no higher.
///
/// Like [`crate::hill_climb::HillClimb`], `step` is pull-style: it returns
/// [`StepOutcome::NeedsEvaluation`] when the oracle stalls, exposing a
/// repaired **full** permutation (not just the partial candidate) so the
/// host always has something precedence-valid to measure.
pub struct BestFirst<'a> {
    po: &'a PartialOrder,
    oracle: &'a mut dyn EvaluationOracle,
    n: usize,
    heap: MaxHeap<Permutation>,
    best: Permutation,
    next: Permutation,
    i: usize,
    j: usize,
    phase: Phase,
}

impl<'a> BestFirst<'a> {
    /// Construct a best-first search over `n` elements, constrained by `po`
    /// and scored by `oracle`.
    ///
    /// The heap is sized at `n * n` entries, matching the source algorithm's
    /// heuristic capacity. This is not a proven upper bound on how many
    /// partial permutations the search can have live at once — it is a
    /// carried-over limitation, not a guarantee — so pathological precedence
    /// graphs on large `n` could in principle overflow it; see `DESIGN.md`.
    pub fn new(n: usize, po: &'a PartialOrder, oracle: &'a mut dyn EvaluationOracle) -> Self {
        let heap_capacity = (n * n).max(16);
        BestFirst {
            po,
            oracle,
            n,
            heap: MaxHeap::new(heap_capacity),
            best: Permutation::new(n),
            next: Permutation::new(n),
            i: 0,
            j: 0,
            phase: Phase::Init,
        }
    }

    /// The best full permutation found so far (only meaningful once the
    /// search has reached [`StepOutcome::Complete`]).
    pub fn result(&self) -> &Permutation {
        &self.best
    }

    /// The candidate under evaluation when `step` last returned
    /// [`StepOutcome::NeedsEvaluation`].
    pub fn next(&self) -> &Permutation {
        &self.next
    }

    /// Advance the state machine by one transition.
    ///
    /// # Errors
    ///
    /// Propagates any oracle error other than "no data yet" verbatim,
    /// leaving the heap intact so the host may choose to retry.
    pub fn step(&mut self) -> Result<StepOutcome> {
        match self.phase {
            Phase::Init => {
                while self.i < self.n {
                    if self.po.is_min(self.i) {
                        let mut seed = Permutation::new(self.n);
                        seed.identity_fill();
                        seed.swap(0, self.i);
                        seed.set_length(1);

                        match self.oracle.evaluate(&seed) {
                            Ok(EvalOutcome::Score(score)) => {
                                trace!(candidate = %seed.formatted(200), score, "best-first seed");
                                self.heap.insert(score, seed);
                            }
                            Ok(EvalOutcome::NoData) => {
                                self.next.copy_all_from(&seed);
                                repair_to_full(self.po, self.n, &mut self.next);
                                return Ok(StepOutcome::NeedsEvaluation);
                            }
                            Err(e) => return Err(e),
                        }
                    }
                    self.i += 1;
                }
                self.phase = Phase::Visit;
                Ok(StepOutcome::Progress)
            }

            Phase::Visit => {
                if self.heap.is_empty() {
                    self.phase = Phase::Done;
                    return Ok(StepOutcome::Complete);
                }

                self.best = self.heap.extract_max();
                debug!(candidate = %self.best.formatted(200), "best-first visit");

                if self.best.length() == self.n {
                    self.phase = Phase::Done;
                    return Ok(StepOutcome::Complete);
                }

                self.j = self.best.length();
                self.phase = Phase::Expand;
                Ok(StepOutcome::Progress)
            }

            Phase::Expand => {
                while self.j < self.n {
                    let pos = self.best.length();
                    self.next.copy_all_from(&self.best);
                    self.next.swap(pos, self.j);
                    self.next.set_length(pos + 1);

                    if is_valid_partial(self.po, self.n, &self.next) {
                        match self.oracle.evaluate(&self.next) {
                            Ok(EvalOutcome::Score(score)) => {
                                trace!(candidate = %self.next.formatted(200), score, "best-first expand");
                                self.heap.insert(score, self.next.duplicate());
                            }
                            Ok(EvalOutcome::NoData) => {
                                repair_to_full(self.po, self.n, &mut self.next);
                                return Ok(StepOutcome::NeedsEvaluation);
                            }
                            Err(e) => return Err(e),
                        }
                    }
                    self.j += 1;
                }
                self.phase = Phase::Visit;
                Ok(StepOutcome::Progress)
            }

            Phase::Done => {
                while !self.heap.is_empty() {
                    self.heap.extract_max();
                }
                self.phase = Phase::Init;
                self.i = 0;
                Ok(StepOutcome::Progress)
            }
        }
    }
}

/// `true` iff no decided position of `perm` precedes (by `Gt`) any later
/// position, decided or not — the validity contract every heap entry must
/// satisfy.
///
/// A free function, not a method on `BestFirst`, so callers can pass
/// `&mut self.next` alongside `self.po` without the borrow checker seeing an
/// overlapping `&self` and `&mut self.next` borrow of the same struct.
fn is_valid_partial(po: &PartialOrder, n: usize, perm: &Permutation) -> bool {
    for i in 0..perm.length() {
        for j in (i + 1)..n {
            if po.get(perm.element(i), perm.element(j)) == Relation::Gt {
                return false;
            }
        }
    }
    true
}

/// Topological-sort-by-swap over `perm[perm.length()..n)`, producing a full,
/// precedence-valid permutation out of a partial one. Used only to give the
/// host something sensible to measure when the oracle stalls.
fn repair_to_full(po: &PartialOrder, n: usize, perm: &mut Permutation) {
    let start = perm.length();
    for i in start..n {
        let mut v1 = perm.element(i);
        for j in (i + 1)..n {
            let v2 = perm.element(j);
            if po.get(v1, v2) == Relation::Gt {
                perm.swap(i, j);
                v1 = v2;
            }
        }
    }
    perm.set_length(n);
    debug_assert!(is_valid_partial(po, n, perm));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcomb_core::{EvalOutcome, EvaluationOracle, PartialOrder, Permutation, Relation, Result};

    fn drive(bf: &mut BestFirst<'_>) -> StepOutcome {
        loop {
            match bf.step().unwrap() {
                StepOutcome::Progress => continue,
                other => return other,
            }
        }
    }

    /// Rewards permutations that start with element `0`.
    struct StartsWithZero;

    impl EvaluationOracle for StartsWithZero {
        fn evaluate(&mut self, candidate: &Permutation) -> Result<EvalOutcome> {
            let score = if candidate.decided().first() == Some(&0) {
                100
            } else {
                0
            };
            Ok(EvalOutcome::Score(score))
        }
    }

    #[test]
    fn finds_a_full_valid_permutation_starting_with_the_preferred_element() {
        let mut po = PartialOrder::new(3);
        po.set_order(0, 1, Relation::Lt);
        po.closure();

        let mut oracle = StartsWithZero;
        let mut bf = BestFirst::new(3, &po, &mut oracle);
        let outcome = drive(&mut bf);

        assert_eq!(outcome, StepOutcome::Complete);
        let result = bf.result();
        assert_eq!(result.length(), 3);
        assert_eq!(result.element(0), 0);

        // result must respect (0,1) = Lt
        let pos0 = result.decided().iter().position(|&e| e == 0).unwrap();
        let pos1 = result.decided().iter().position(|&e| e == 1).unwrap();
        assert!(pos0 < pos1);
    }

    #[test]
    fn heap_entries_stay_valid_partial_permutations_throughout() {
        // A structural property test: every permutation this search ever
        // constructs as a candidate satisfies is_valid_partial by the time
        // it would be inserted. We check this indirectly by confirming the
        // final result is itself fully precedence-valid.
        let mut po = PartialOrder::new(4);
        po.set_order(0, 1, Relation::Lt);
        po.set_order(1, 2, Relation::Lt);
        po.closure();

        struct ConstantOracle;
        impl EvaluationOracle for ConstantOracle {
            fn evaluate(&mut self, _candidate: &Permutation) -> Result<EvalOutcome> {
                Ok(EvalOutcome::Score(0))
            }
        }

        let mut oracle = ConstantOracle;
        let mut bf = BestFirst::new(4, &po, &mut oracle);
        let outcome = drive(&mut bf);
        assert_eq!(outcome, StepOutcome::Complete);

        let result = bf.result();
        for i in 0..result.length() {
            for j in (i + 1)..4 {
                assert_ne!(po.get(result.element(i), result.element(j)), Relation::Gt);
            }
        }
    }

    /// Returns `NoData` the first time it is asked about a given candidate
    /// length, `Ok` thereafter.
    struct StallOnceOracle {
        seen: Vec<Vec<usize>>,
    }

    impl StallOnceOracle {
        fn new() -> Self {
            StallOnceOracle { seen: Vec::new() }
        }
    }

    impl EvaluationOracle for StallOnceOracle {
        fn evaluate(&mut self, candidate: &Permutation) -> Result<EvalOutcome> {
            let key = candidate.decided().to_vec();
            if self.seen.contains(&key) {
                Ok(EvalOutcome::Score(key.len() as i64))
            } else {
                self.seen.push(key);
                Ok(EvalOutcome::NoData)
            }
        }
    }

    #[test]
    fn resumes_after_a_stall_without_losing_progress() {
        let po = PartialOrder::new(3);
        let mut oracle = StallOnceOracle::new();
        let mut bf = BestFirst::new(3, &po, &mut oracle);

        let mut guard = 0;
        loop {
            guard += 1;
            assert!(guard < 10_000, "did not converge");
            match bf.step().unwrap() {
                StepOutcome::Complete => break,
                _ => continue,
            }
        }
        assert_eq!(bf.result().length(), 3);
    }

    #[test]
    fn done_phase_drains_and_resets_for_reuse() {
        let po = PartialOrder::new(2);
        struct ConstantOracle;
        impl EvaluationOracle for ConstantOracle {
            fn evaluate(&mut self, _candidate: &Permutation) -> Result<EvalOutcome> {
                Ok(EvalOutcome::Score(1))
            }
        }
        let mut oracle = ConstantOracle;
        let mut bf = BestFirst::new(2, &po, &mut oracle);
        assert_eq!(drive(&mut bf), StepOutcome::Complete);
        let first = bf.result().clone();

        // Drive the Done -> Init reset, then run the search again.
        assert_eq!(bf.step().unwrap(), StepOutcome::Progress);
        assert_eq!(drive(&mut bf), StepOutcome::Complete);
        assert_eq!(bf.result(), &first);
    }

    struct ConstantOracle;
    impl EvaluationOracle for ConstantOracle {
        fn evaluate(&mut self, _candidate: &Permutation) -> Result<EvalOutcome> {
            Ok(EvalOutcome::Score(0))
        }
    }

    proptest::proptest! {
        #[test]
        fn result_is_always_a_full_precedence_valid_permutation(
            n in 2usize..6,
            edge_count in 0usize..6,
            seed in proptest::prelude::any::<u64>(),
        ) {
            use rand::{Rng, SeedableRng};
            use rand::rngs::StdRng;

            let mut rng = StdRng::seed_from_u64(seed);
            let mut po = PartialOrder::new(n);
            // Only ever constrain lower index before higher index: any subset
            // of the identity total order is consistent by construction, so
            // this can never produce a contradictory (cyclic) precedence graph.
            for _ in 0..edge_count {
                let u = rng.gen_range(0..n);
                let v = rng.gen_range(0..n);
                if u < v {
                    po.set_order(u, v, Relation::Lt);
                } else if v < u {
                    po.set_order(v, u, Relation::Lt);
                }
            }
            po.closure();

            let mut oracle = ConstantOracle;
            let mut bf = BestFirst::new(n, &po, &mut oracle);
            let outcome = drive(&mut bf);
            proptest::prop_assert_eq!(outcome, StepOutcome::Complete);

            let result = bf.result();
            proptest::prop_assert_eq!(result.length(), n);
            for i in 0..n {
                for j in (i + 1)..n {
                    proptest::prop_assert_ne!(
                        po.get(result.element(i), result.element(j)),
                        Relation::Gt
                    );
                }
            }
        }
    }
}
