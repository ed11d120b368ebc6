//! Applicative type class - lifting values and combining sequences.
//!
//! For sequences the combination is cartesian: every element of the first
//! operand is paired with every element of the second, the first operand
//! driving the outer loop.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.map2(pure(()), |a, _| a) == fa
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! ```

use super::functor::Functor;

/// A type class for functors that can lift a single value and combine two
/// containers element-wise through a binary function.
pub trait Applicative: Functor {
    /// Lifts a value into a one-element container.
    fn pure<A>(value: A) -> Self::WithType<A>
    where
        A: Clone + 'static;

    /// Combines two containers with a binary function.
    ///
    /// For sequences the result holds `function(a, b)` for every `a` in
    /// `self` (outer) and every `b` in `other` (inner).
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(Self::Inner, B) -> C + 'static;

    /// Pairs up the elements of two containers, cartesian for sequences.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: Clone + 'static,
        B: Clone + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}
