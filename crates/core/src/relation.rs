//! The three-valued precedence relation used by [`crate::order::PartialOrder`].

use std::fmt;

/// Precedence relation between two element identifiers `u` and `v`.
///
/// `PartialOrder` stores one of these for every ordered pair `(u, v)`.
/// Equality is a terminal statement, not a bridging one: [`PartialOrder::closure`]
/// does not propagate transitivity through [`Relation::Eq`] (see its docs).
///
/// [`PartialOrder::closure`]: crate::order::PartialOrder::closure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `u` must precede `v`.
    Lt,
    /// `u` and `v` are interchangeable.
    Eq,
    /// `u` must follow `v`.
    Gt,
    /// No precedence constraint is known between `u` and `v`.
    Incomparable,
}

impl Relation {
    /// The relation as seen from the other side of the pair.
    ///
    /// `inverse(Lt) == Gt`, `inverse(Gt) == Lt`, and `Eq`/`Incomparable` invert
    /// to themselves.
    pub fn inverse(self) -> Relation {
        match self {
            Relation::Lt => Relation::Gt,
            Relation::Gt => Relation::Lt,
            Relation::Eq => Relation::Eq,
            Relation::Incomparable => Relation::Incomparable,
        }
    }

    /// True for `Lt`, `Eq`, or `Gt` — anything but `Incomparable`.
    pub fn is_comparable(self) -> bool {
        !matches!(self, Relation::Incomparable)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Relation::Lt => '<',
            Relation::Gt => '>',
            Relation::Eq => '=',
            Relation::Incomparable => '?',
        };
        write!(f, "{c}")
    }
}
