//! Error types for iterable wrappers and their list views.

use std::fmt;

/// The direction a bidirectional iterator was moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the sequence.
    Forward,
    /// Towards the start of the sequence.
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(formatter, "next"),
            Self::Backward => write!(formatter, "previous"),
        }
    }
}

/// Represents errors raised by [`IterableW`](super::IterableW),
/// [`ListView`](super::ListView) and [`ListIter`](super::ListIter).
///
/// # Examples
///
/// ```rust
/// use iterw::iterable::IterableError;
///
/// let error = IterableError::IndexOutOfRange { index: 5, length: Some(3) };
/// assert_eq!(format!("{error}"), "index 5 out of range for length 3");
///
/// let error = IterableError::UnsupportedOperation { operation: "clear" };
/// assert_eq!(format!("{error}"), "clear: unsupported, the list is immutable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterableError {
    /// A reduction without a seed was applied to an empty sequence.
    EmptySequence {
        /// The reduction that failed.
        operation: &'static str,
    },
    /// An index lies outside the sequence.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the sequence, when it was measured.
        length: Option<usize>,
    },
    /// A list iterator moved past a boundary.
    NoSuchElement {
        /// The direction of the failed move.
        direction: Direction,
    },
    /// A mutating operation was attempted on an immutable list.
    UnsupportedOperation {
        /// The rejected operation.
        operation: &'static str,
    },
}

impl IterableError {
    /// Builds an [`IterableError::UnsupportedOperation`], logging the rejection.
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, "rejected mutation of an immutable list");
        Self::UnsupportedOperation { operation }
    }
}

impl fmt::Display for IterableError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence { operation } => {
                write!(formatter, "{operation}: the sequence is empty")
            }
            Self::IndexOutOfRange {
                index,
                length: Some(length),
            } => write!(formatter, "index {index} out of range for length {length}"),
            Self::IndexOutOfRange {
                index,
                length: None,
            } => write!(formatter, "index {index} out of range"),
            Self::NoSuchElement { direction } => {
                write!(formatter, "{direction}: no such element")
            }
            Self::UnsupportedOperation { operation } => {
                write!(formatter, "{operation}: unsupported, the list is immutable")
            }
        }
    }
}

impl std::error::Error for IterableError {}
