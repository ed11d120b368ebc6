//! Semigroup type class - associative combination.
//!
//! For sequences, `combine` is lazy concatenation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use iterw::sequence::Stream;
/// use iterw::typeclass::Semigroup;
///
/// let front: Stream<i32> = vec![1, 2].into();
/// let back: Stream<i32> = vec![3].into();
/// assert_eq!(front.combine(back).to_vec(), vec![1, 2, 3]);
/// ```
pub trait Semigroup {
    /// Combines two values into one. This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("foo", "bar", "foobar")]
    #[case("", "bar", "bar")]
    #[case("foo", "", "foo")]
    fn string_combine_concatenates(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
        assert_eq!(left.to_string().combine(right.to_string()), expected);
    }

    #[rstest]
    fn vec_combine_is_associative() {
        let left = vec![1].combine(vec![2]).combine(vec![3]);
        let right = vec![1].combine(vec![2].combine(vec![3]));
        assert_eq!(left, right);
    }
}
