//! Monoid type class - a semigroup with an identity element.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use iterw::typeclass::{Monoid, Semigroup};
///
/// let value = String::from("hello");
/// assert_eq!(String::empty().combine(value.clone()), value);
/// assert_eq!(String::combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every value of an iterator, starting from `empty()`.
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values.into_iter().fold(Self::empty(), Semigroup::combine)
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}
