//! Configurable capacity bounds for the ranked-combinator engine.
//!
//! These limits exist so that a misconfigured or adversarial caller gets a
//! clean [`crate::error::Error::DimensionTooLarge`] at construction time
//! instead of allocating an `n*n` precedence matrix for an unreasonable `n`.
//! They are not part of the original algorithm; they are the construction-time
//! boundary check every entry point in this crate validates against.

/// Capacity bounds enforced when constructing [`crate::order::PartialOrder`]
/// and [`crate::permutation::Permutation`] values.
///
/// After stabilization the defaults should be treated as frozen: widening
/// them is backwards compatible, narrowing them is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of elements (filters) a single search may reorder.
    ///
    /// Bounds the `n*n` precedence matrix and the `n*n` default best-first
    /// heap capacity (see [`crate::order::PartialOrder`] and the best-first
    /// driver) so both stay well inside a sane memory budget.
    pub max_elements: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            // 1024^2 Relation entries (1 byte each) caps the precedence
            // matrix at 1MiB, which is generous for a filter-reordering
            // workload: real deployments reorder dozens of filters, not
            // thousands.
            max_elements: 1024,
        }
    }
}

impl Limits {
    /// Check `n` against [`Limits::max_elements`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::DimensionTooLarge`] if `n` exceeds the
    /// configured limit.
    pub fn check_dimension(&self, n: usize) -> crate::error::Result<()> {
        if n > self.max_elements {
            return Err(crate::error::Error::DimensionTooLarge {
                requested: n,
                limit: self.max_elements,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_reasonable_dimension() {
        let limits = Limits::default();
        assert!(limits.check_dimension(64).is_ok());
    }

    #[test]
    fn default_rejects_oversized_dimension() {
        let limits = Limits::default();
        assert!(limits.check_dimension(1_000_000).is_err());
    }

    #[test]
    fn custom_limit_is_honored() {
        let limits = Limits { max_elements: 4 };
        assert!(limits.check_dimension(4).is_ok());
        assert!(limits.check_dimension(5).is_err());
    }
}
