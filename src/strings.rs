//! Curried string functions.
//!
//! Each function here is a first-class value that can be handed straight to
//! [`IterableW::map`](crate::iterable::IterableW::map) or used as a
//! predicate. The binary ones are curried: the pattern comes first and the
//! returned closure takes the string under test.
//!
//! # Examples
//!
//! ```rust
//! use iterw::iterable::IterableW;
//! use iterw::strings;
//!
//! let words = IterableW::wrap(vec!["", "alpha", "beta"]);
//! assert_eq!(words.map(strings::length).to_vec(), vec![0, 5, 4]);
//!
//! let has_ph = strings::contains("ph");
//! assert_eq!(words.map(has_ph).to_vec(), vec![false, true, false]);
//! ```

use regex::Regex;

/// Returns `true` if the string has no characters.
#[inline]
pub fn is_empty<S: AsRef<str>>(string: S) -> bool {
    string.as_ref().is_empty()
}

/// Number of characters (not bytes) in the string.
///
/// # Examples
///
/// ```rust
/// use iterw::strings;
///
/// assert_eq!(strings::length("héllo"), 5);
/// ```
#[inline]
pub fn length<S: AsRef<str>>(string: S) -> usize {
    string.as_ref().chars().count()
}

/// Returns a predicate that is `true` for strings containing `needle`.
pub fn contains<S: AsRef<str>>(needle: impl Into<String>) -> impl Fn(S) -> bool {
    let needle = needle.into();
    move |haystack| haystack.as_ref().contains(needle.as_str())
}

/// Returns a predicate that is `true` for strings matching `pattern` as a
/// whole.
///
/// # Errors
///
/// Returns the [`regex::Error`] if `pattern` is not a valid regular
/// expression.
///
/// # Examples
///
/// ```rust
/// use iterw::strings;
///
/// let digits = strings::matches("[0-9]+").unwrap();
/// assert!(digits("2024"));
/// assert!(!digits("year 2024"));
///
/// assert!(strings::matches::<&str>("(").is_err());
/// ```
pub fn matches<S: AsRef<str>>(pattern: &str) -> Result<impl Fn(S) -> bool, regex::Error> {
    let anchored = Regex::new(&format!("^(?:{pattern})$"))?;
    Ok(move |candidate: S| anchored.is_match(candidate.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case(" ", false)]
    #[case("text", false)]
    fn test_is_empty(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_empty(input), expected);
        assert_eq!(is_empty(input.to_string()), expected);
    }

    #[rstest]
    #[case("", 0)]
    #[case("abc", 3)]
    #[case("日本語", 3)]
    fn test_length_counts_characters(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(length(input), expected);
    }

    #[rstest]
    #[case("ell", "hello", true)]
    #[case("", "hello", true)]
    #[case("hello", "ell", false)]
    fn test_contains_checks_the_argument(#[case] needle: &str, #[case] haystack: &str, #[case] expected: bool) {
        assert_eq!(contains(needle)(haystack), expected);
    }

    #[rstest]
    #[case("a+b", "aaab", true)]
    #[case("a+b", "aaabc", false)]
    #[case("a|b", "b", true)]
    #[case("a|b", "ab", false)]
    fn test_matches_whole_string(#[case] pattern: &str, #[case] input: &str, #[case] expected: bool) {
        let predicate = matches(pattern).unwrap();
        assert_eq!(predicate(input), expected);
    }

    #[rstest]
    fn test_matches_rejects_invalid_pattern() {
        assert!(matches::<String>("[unclosed").is_err());
    }
}
