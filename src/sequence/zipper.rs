//! Immutable bidirectional cursor over a [`Stream`].
//!
//! A [`Zipper`] splits a non-empty stream into the elements before the
//! cursor (kept reversed, nearest first), the focused element, and the
//! elements after it. Moving the cursor never mutates: it returns a new
//! zipper that shares structure with the old one.
//!
//! # Examples
//!
//! ```rust
//! use iterw::sequence::{Stream, Zipper};
//!
//! let stream: Stream<char> = vec!['a', 'b', 'c'].into();
//! let zipper = Zipper::from_stream(&stream).unwrap();
//! assert_eq!(*zipper.focus(), 'a');
//!
//! let moved = zipper.next().unwrap().next().unwrap();
//! assert_eq!(*moved.focus(), 'c');
//! assert!(moved.at_end());
//!
//! // The starting cursor is untouched
//! assert_eq!(zipper.index(), 0);
//! ```

use std::fmt;

use super::Stream;

/// A focused position within a non-empty stream.
///
/// The right-hand side stays lazy, so a zipper over an infinite stream only
/// evaluates as far as the cursor has moved (plus one cell for `at_end`).
#[derive(Clone)]
pub struct Zipper<A> {
    left: Stream<A>,
    focus: A,
    right: Stream<A>,
    index: usize,
}

impl<A: Clone + 'static> Zipper<A> {
    /// Focuses the first element of a stream, or returns `None` if it is empty.
    pub fn from_stream(stream: &Stream<A>) -> Option<Self> {
        let (focus, right) = stream.uncons()?;
        Some(Self {
            left: Stream::empty(),
            focus,
            right,
            index: 0,
        })
    }

    /// The focused element.
    #[inline]
    pub const fn focus(&self) -> &A {
        &self.focus
    }

    /// Zero-based position of the focus in the underlying stream.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if nothing precedes the focus.
    #[inline]
    pub const fn at_start(&self) -> bool {
        self.index == 0
    }

    /// Returns `true` if nothing follows the focus. Forces one cell.
    pub fn at_end(&self) -> bool {
        self.right.is_empty()
    }

    /// Moves the focus one step forward.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        let (focus, right) = self.right.uncons()?;
        Some(Self {
            left: Stream::cons(self.focus.clone(), self.left.clone()),
            focus,
            right,
            index: self.index + 1,
        })
    }

    /// Moves the focus one step backward.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        let (focus, left) = self.left.uncons()?;
        Some(Self {
            left,
            focus,
            right: Stream::cons(self.focus.clone(), self.right.clone()),
            index: self.index - 1,
        })
    }

    /// Moves the focus to an absolute position.
    ///
    /// Returns `None` if the stream has no element at `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::sequence::{Stream, Zipper};
    ///
    /// let zipper = Zipper::from_stream(&Stream::range_from(0)).unwrap();
    /// assert_eq!(*zipper.move_to(5).unwrap().focus(), 5);
    ///
    /// let finite = Zipper::from_stream(&Stream::from(vec![1, 2])).unwrap();
    /// assert!(finite.move_to(2).is_none());
    /// ```
    #[must_use]
    pub fn move_to(&self, target: usize) -> Option<Self> {
        let mut cursor = self.clone();
        while cursor.index < target {
            cursor = cursor.next()?;
        }
        while cursor.index > target {
            cursor = cursor.previous()?;
        }
        Some(cursor)
    }

    /// Total number of elements. Never returns for an infinite stream.
    pub fn len(&self) -> usize {
        self.index + 1 + self.right.len()
    }

    /// Rebuilds the whole underlying sequence, front to back.
    pub fn to_stream(&self) -> Stream<A> {
        let mut prefix = self.left.to_vec();
        prefix.reverse();
        prefix.push(self.focus.clone());
        Stream::from(prefix).append(&self.right)
    }
}

impl<A: Clone + fmt::Debug + 'static> fmt::Debug for Zipper<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Zipper")
            .field("index", &self.index)
            .field("focus", &self.focus)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}
