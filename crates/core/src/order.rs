//! Dense matrix encoding of a three-valued precedence relation over element
//! identifiers, with Warshall-style transitive closure.

use std::fmt;

use crate::limits::Limits;
use crate::permutation::ElementId;
use crate::relation::Relation;

/// A square matrix of [`Relation`]s over `[0, dim)`.
///
/// Every entry starts `Incomparable`. Callers set edges with
/// [`PartialOrder::set_order`], then call [`PartialOrder::closure`] exactly
/// once before handing the partial order to a search driver — closure is
/// idempotent, but the drivers assume it has already run.
#[derive(Debug, Clone)]
pub struct PartialOrder {
    dim: usize,
    // Row-major dim*dim matrix; `matrix[u * dim + v]` is the relation of u to v.
    matrix: Vec<Relation>,
}

impl PartialOrder {
    /// Allocate a `dim`-by-`dim` partial order with every entry `Incomparable`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dim` exceeds `limits`.
    pub fn with_limits(dim: usize, limits: &Limits) -> crate::error::Result<Self> {
        limits.check_dimension(dim)?;
        Ok(PartialOrder {
            dim,
            matrix: vec![Relation::Incomparable; dim * dim],
        })
    }

    /// Allocate a `dim`-by-`dim` partial order, using [`Limits::default`].
    ///
    /// # Panics
    ///
    /// Panics if `dim` exceeds the default limit. Use
    /// [`PartialOrder::with_limits`] to handle oversized input as a
    /// recoverable error instead.
    pub fn new(dim: usize) -> Self {
        Self::with_limits(dim, &Limits::default())
            .expect("dim exceeds default Limits; use PartialOrder::with_limits")
    }

    /// The number of elements this partial order covers.
    pub fn dim(&self) -> usize {
        self.dim
    }

    fn index(&self, u: ElementId, v: ElementId) -> usize {
        assert!(u < self.dim, "element {u} out of range for dim {}", self.dim);
        assert!(v < self.dim, "element {v} out of range for dim {}", self.dim);
        u * self.dim + v
    }

    /// Set `M[u][v] = rel` and mirror `M[v][u] = rel.inverse()`.
    pub fn set_order(&mut self, u: ElementId, v: ElementId, rel: Relation) {
        let uv = self.index(u, v);
        let vu = self.index(v, u);
        self.matrix[uv] = rel;
        self.matrix[vu] = rel.inverse();
    }

    /// Read `M[u][v]`.
    pub fn get(&self, u: ElementId, v: ElementId) -> Relation {
        self.matrix[self.index(u, v)]
    }

    /// `true` iff `get(u, v)` is anything but `Incomparable`.
    pub fn is_comparable(&self, u: ElementId, v: ElementId) -> bool {
        self.get(u, v).is_comparable()
    }

    /// `true` iff `get(u, v) == Incomparable`.
    pub fn is_incomparable(&self, u: ElementId, v: ElementId) -> bool {
        !self.is_comparable(u, v)
    }

    /// `true` iff no element is strictly less than `u` (no `v` has
    /// `get(u, v) == Gt`).
    pub fn is_min(&self, u: ElementId) -> bool {
        (0..self.dim).all(|v| self.get(u, v) != Relation::Gt)
    }

    /// Transitively close the `Lt`/`Gt` relations with a Warshall-style
    /// triple loop.
    ///
    /// For every `i, j` still `Incomparable`, if there is a `k` with
    /// `get(i, k) == get(k, j)` and that common value is `Lt` or `Gt`,
    /// `M[i][j]` (and its mirror) is set to that value.
    ///
    /// `Eq` is not bridged by this rule: if `get(i, k) == get(k, j) == Eq`,
    /// `M[i][j]` is left `Incomparable`. Equality is treated as a terminal
    /// statement about two specific elements, not a transitive bridge — if
    /// callers need `Eq` to imply shared precedence, they must set those
    /// edges explicitly before calling `closure`.
    ///
    /// Idempotent: calling `closure` again after it has already run is a no-op.
    pub fn closure(&mut self) {
        let n = self.dim;
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if self.is_incomparable(i, j) {
                        let via_k = self.get(i, k);
                        if via_k == self.get(k, j)
                            && matches!(via_k, Relation::Lt | Relation::Gt)
                        {
                            self.set_order(i, j, via_k);
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for PartialOrder {
    /// Diagnostic grid of single-character relations, one header row of
    /// column indices followed by one row per element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for i in 0..self.dim {
            write!(f, " {:x}", i % 16)?;
        }
        writeln!(f)?;
        for i in 0..self.dim {
            write!(f, "{i:3}")?;
            for j in 0..self.dim {
                write!(f, " {}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_partial_order_is_all_incomparable() {
        let po = PartialOrder::new(3);
        for u in 0..3 {
            for v in 0..3 {
                assert_eq!(po.get(u, v), Relation::Incomparable);
            }
        }
    }

    #[test]
    fn set_order_mirrors_inverse() {
        let mut po = PartialOrder::new(2);
        po.set_order(0, 1, Relation::Lt);
        assert_eq!(po.get(0, 1), Relation::Lt);
        assert_eq!(po.get(1, 0), Relation::Gt);
    }

    #[test]
    fn closure_bridges_lt_chain() {
        // n=3; set (0,1)=LT, (1,2)=LT. After closure: get(0,2)==LT, get(2,0)==GT.
        let mut po = PartialOrder::new(3);
        po.set_order(0, 1, Relation::Lt);
        po.set_order(1, 2, Relation::Lt);
        po.closure();

        assert_eq!(po.get(0, 2), Relation::Lt);
        assert_eq!(po.get(2, 0), Relation::Gt);
        // untouched pairs besides the ones implied above stay incomparable
        assert_eq!(po.get(0, 0), Relation::Incomparable);
    }

    #[test]
    fn closure_does_not_bridge_through_eq() {
        let mut po = PartialOrder::new(3);
        po.set_order(0, 1, Relation::Eq);
        po.set_order(1, 2, Relation::Eq);
        po.closure();
        assert_eq!(po.get(0, 2), Relation::Incomparable);
    }

    #[test]
    fn closure_is_idempotent() {
        let mut po = PartialOrder::new(4);
        po.set_order(0, 1, Relation::Lt);
        po.set_order(1, 2, Relation::Lt);
        po.set_order(2, 3, Relation::Lt);
        po.closure();
        let once = po.clone();
        po.closure();
        for u in 0..4 {
            for v in 0..4 {
                assert_eq!(once.get(u, v), po.get(u, v));
            }
        }
    }

    #[test]
    fn is_min_reflects_no_incoming_gt() {
        let mut po = PartialOrder::new(3);
        po.set_order(0, 1, Relation::Lt);
        assert!(po.is_min(0));
        assert!(!po.is_min(1));
        assert!(po.is_min(2));
    }

    #[test]
    fn direct_comparability_blocks_swap_candidates() {
        // n=3; set (0,2)=LT then closure: 0 and 2 are directly comparable.
        let mut po = PartialOrder::new(3);
        po.set_order(0, 2, Relation::Lt);
        po.closure();
        assert!(po.is_comparable(0, 2));
        assert!(po.is_incomparable(0, 1));
    }

    #[test]
    fn with_limits_rejects_oversized_dim() {
        let limits = Limits { max_elements: 2 };
        assert!(PartialOrder::with_limits(3, &limits).is_err());
        assert!(PartialOrder::with_limits(2, &limits).is_ok());
    }

    #[test]
    fn display_renders_a_grid_line_per_element() {
        let po = PartialOrder::new(2);
        let rendered = po.to_string();
        assert_eq!(rendered.lines().count(), 3); // header + 2 rows
    }

    proptest::proptest! {
        #[test]
        fn closure_is_idempotent_over_random_chains(
            len in 2usize..8,
            ascending in proptest::prelude::any::<bool>(),
        ) {
            // Build a simple chain 0 < 1 < ... < len-1 (or its mirror) and
            // confirm a second closure() changes nothing.
            let mut po = PartialOrder::new(len);
            let rel = if ascending { Relation::Lt } else { Relation::Gt };
            for u in 0..len - 1 {
                po.set_order(u, u + 1, rel);
            }
            po.closure();
            let once = po.clone();
            po.closure();
            for u in 0..len {
                for v in 0..len {
                    proptest::prop_assert_eq!(once.get(u, v), po.get(u, v));
                }
            }
        }
    }
}
