//! Foldable type class - reducing a structure to a summary value.
//!
//! Folds are the catamorphisms of sequences. Every method here traverses
//! the whole structure, so lazy containers must be finite.
//!
//! # Examples
//!
//! ```rust
//! use iterw::sequence::Stream;
//! use iterw::typeclass::Foldable;
//!
//! let values: Stream<i32> = vec![1, 2, 3].into();
//! let sum = values.clone().fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 6);
//!
//! let digits = values.fold_right(String::new(), |element, accumulator| {
//!     format!("{element}{accumulator}")
//! });
//! assert_eq!(digits, "123");
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// `fold_right(z, f)` over `[a1, a2, a3]` is `f(a1, f(a2, f(a3, z)))`.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and combines all results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements, in order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Checks whether all elements satisfy the predicate.
    ///
    /// Empty structures satisfy every predicate.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(true, |accumulator, element| accumulator && predicate(&element))
    }
}
