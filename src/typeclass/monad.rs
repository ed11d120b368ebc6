//! Monad type class - sequencing dependent computations.
//!
//! For sequences, `flat_map` maps every element to a sequence and
//! concatenates the results in encounter order.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use iterw::sequence::Stream;
//! use iterw::typeclass::Monad;
//!
//! let numbers: Stream<i32> = vec![1, 2, 3].into();
//! let repeated = numbers.flat_map(|n| Stream::from(vec![n; n as usize]));
//! assert_eq!(repeated.to_vec(), vec![1, 2, 2, 3, 3, 3]);
//! ```

use super::applicative::Applicative;

/// A type class for applicatives supporting dependent sequencing.
pub trait Monad: Applicative {
    /// Maps every element to a container and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone + 'static,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the values of the first.
    ///
    /// For sequences, `next` is repeated once per element of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
        Self::WithType<B>: Clone + 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}
