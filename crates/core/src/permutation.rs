//! Fixed-capacity sequence of element identifiers.

use std::fmt;

use crate::limits::Limits;

/// A filter identifier: a small non-negative integer in `[0, n)`.
///
/// The engine never interprets an `ElementId`; it only compares identifiers
/// through a [`crate::order::PartialOrder`] and permutes them.
pub type ElementId = usize;

/// A fixed-capacity sequence of [`ElementId`]s with a "used prefix" length.
///
/// `elements[0..length)` is the decided portion of the permutation;
/// `elements[length..capacity)` holds identifiers that have not yet been
/// placed. Every operation that touches the buffer preserves its multiset of
/// identifiers once the permutation has been seeded by [`Permutation::identity_fill`]
/// — swaps only ever exchange two slots.
#[derive(Debug, Clone)]
pub struct Permutation {
    capacity: usize,
    length: usize,
    elements: Vec<ElementId>,
}

impl Permutation {
    /// Create an empty permutation with room for `capacity` elements.
    ///
    /// The buffer is zero-filled; call [`Permutation::identity_fill`] before
    /// reading through [`Permutation::element`] past the used length.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` exceeds `limits`.
    pub fn with_limits(capacity: usize, limits: &Limits) -> crate::error::Result<Self> {
        limits.check_dimension(capacity)?;
        Ok(Permutation {
            capacity,
            length: 0,
            elements: vec![0; capacity],
        })
    }

    /// Create an empty permutation with room for `capacity` elements, using
    /// [`Limits::default`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the default limit. Use
    /// [`Permutation::with_limits`] to handle oversized input as a recoverable
    /// error instead.
    pub fn new(capacity: usize) -> Self {
        Self::with_limits(capacity, &Limits::default())
            .expect("capacity exceeds default Limits; use Permutation::with_limits")
    }

    /// Total number of slots in the buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fill the buffer with the identity permutation `[0, 1, ..., capacity)`
    /// and mark the whole buffer as decided.
    pub fn identity_fill(&mut self) {
        for (i, slot) in self.elements.iter_mut().enumerate() {
            *slot = i;
        }
        self.length = self.capacity;
    }

    /// Read the element at index `i`.
    ///
    /// Note that `i` is checked against `capacity`, not `length`: algorithms
    /// built on an identity-filled buffer legitimately read past the used
    /// length.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity()`.
    pub fn element(&self, i: usize) -> ElementId {
        self.elements[i]
    }

    /// Write `v` at index `i`. If `i >= length()`, grows the used length to `i + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity()`.
    pub fn set_element(&mut self, i: usize, v: ElementId) {
        self.elements[i] = v;
        if i >= self.length {
            self.length = i + 1;
        }
    }

    /// The length of the decided prefix.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the length of the decided prefix.
    ///
    /// # Panics
    ///
    /// Panics if `n > capacity()`.
    pub fn set_length(&mut self, n: usize) {
        assert!(n <= self.capacity, "length {n} exceeds capacity {}", self.capacity);
        self.length = n;
    }

    /// Swap the elements at indices `i` and `j`.
    ///
    /// Neither index needs to be within the decided prefix.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= capacity()`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.elements.swap(i, j);
    }

    /// Copy the decided prefix of `src` into `self` and adopt its length.
    ///
    /// # Panics
    ///
    /// Panics if `self.capacity() < src.length()`.
    pub fn copy_from(&mut self, src: &Permutation) {
        assert!(
            self.capacity >= src.length,
            "destination capacity {} too small for source length {}",
            self.capacity,
            src.length
        );
        self.elements[..src.length].copy_from_slice(&src.elements[..src.length]);
        self.length = src.length;
    }

    /// Copy every slot of `src` (not just the decided prefix) into `self` and
    /// adopt its length.
    ///
    /// # Panics
    ///
    /// Panics if `self.capacity() < src.capacity()`.
    pub fn copy_all_from(&mut self, src: &Permutation) {
        assert!(
            self.capacity >= src.capacity,
            "destination capacity {} too small for source capacity {}",
            self.capacity,
            src.capacity
        );
        self.elements[..src.capacity].copy_from_slice(&src.elements[..src.capacity]);
        self.length = src.length;
    }

    /// Allocate a new permutation with the same capacity as `self` and every
    /// slot copied (equivalent to `copy_all_from`, but into a fresh value).
    pub fn duplicate(&self) -> Permutation {
        Permutation {
            capacity: self.capacity,
            length: self.length,
            elements: self.elements.clone(),
        }
    }

    /// The decided prefix, as a slice.
    pub fn decided(&self) -> &[ElementId] {
        &self.elements[..self.length]
    }

    /// Render the decided prefix as a bracketed, space-separated decimal
    /// list (e.g. `[3 1 4]`), truncating safely if the result would exceed
    /// `max_chars`.
    ///
    /// Used by the search drivers' diagnostic logging, where an unbounded
    /// permutation could otherwise blow out a log line.
    pub fn formatted(&self, max_chars: usize) -> String {
        let mut out = String::from("[");
        for (i, e) in self.decided().iter().enumerate() {
            let mut piece = String::new();
            if i != 0 {
                piece.push(' ');
            }
            piece.push_str(&e.to_string());
            if out.len() + piece.len() + 1 > max_chars {
                out.push_str("...");
                break;
            }
            out.push_str(&piece);
        }
        out.push(']');
        out
    }
}

impl PartialEq for Permutation {
    /// Two permutations are equal iff their decided prefixes have the same
    /// length and contents; slots past the decided length are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.decided() == other.decided()
    }
}

impl Eq for Permutation {}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted(usize::MAX))
    }
}
