//! Functor type class - mapping over the elements of a sequence.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use iterw::sequence::Stream;
//! use iterw::typeclass::Functor;
//!
//! let numbers: Stream<i32> = vec![1, 2, 3].into();
//! let labels = numbers.fmap(|n| format!("#{n}"));
//! assert_eq!(labels.to_vec(), vec!["#1", "#2", "#3"]);
//! ```

use super::higher::TypeConstructor;

/// A type class for sequence-shaped containers that can have a function
/// mapped over their elements.
///
/// Elements of a lazy sequence are mapped when they are pulled, possibly
/// long after `fmap` returns and possibly more than once, so the function
/// is `Fn + 'static` rather than `FnOnce`.
pub trait Functor: TypeConstructor {
    /// Applies a function to every element, preserving order and shape.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: Clone + 'static;

    /// Replaces every element with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the elements, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
