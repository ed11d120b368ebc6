//! Bidirectional list iterator.
//!
//! A [`ListIter`] stands between two elements, never on one: `try_next`
//! returns the element after the gap and moves past it, `try_previous` the
//! element before it. The position is kept as an immutable [`Zipper`] plus
//! the side of the focused element the gap lies on.

use std::fmt;

use super::{Direction, IterableError};
use crate::sequence::{Stream, Zipper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    BeforeFocus,
    AfterFocus,
}

/// A bidirectional iterator over a read-only list.
///
/// Obtained from [`ListView::list_iter`](super::ListView::list_iter) or
/// [`ListView::list_iter_at`](super::ListView::list_iter_at).
///
/// # Examples
///
/// ```rust
/// use iterw::iterable::IterableW;
///
/// let list = IterableW::wrap(vec![10, 20, 30]).to_standard_list();
/// let mut cursor = list.list_iter();
///
/// let forward: Vec<i32> = cursor.by_ref().collect();
/// assert_eq!(forward, vec![10, 20, 30]);
/// assert!(!cursor.has_next());
///
/// assert_eq!(cursor.try_previous(), Ok(30));
/// assert_eq!(cursor.try_previous(), Ok(20));
/// assert_eq!(cursor.try_previous(), Ok(10));
/// assert_eq!(cursor.next_index(), 0);
/// assert_eq!(cursor.previous_index(), None);
/// ```
#[derive(Clone)]
pub struct ListIter<A> {
    cursor: Option<Zipper<A>>,
    side: Side,
}

impl<A: Clone + 'static> ListIter<A> {
    pub(crate) fn new(stream: &Stream<A>) -> Self {
        Self {
            cursor: Zipper::from_stream(stream),
            side: Side::BeforeFocus,
        }
    }

    pub(crate) fn at(stream: &Stream<A>, index: usize) -> Result<Self, IterableError> {
        let Some(start) = Zipper::from_stream(stream) else {
            return if index == 0 {
                Ok(Self::new(stream))
            } else {
                Err(IterableError::IndexOutOfRange {
                    index,
                    length: Some(0),
                })
            };
        };

        if let Some(cursor) = start.move_to(index) {
            return Ok(Self {
                cursor: Some(cursor),
                side: Side::BeforeFocus,
            });
        }
        // Only `index == len` is left: the gap after the last element.
        match index.checked_sub(1).and_then(|last| start.move_to(last)) {
            Some(cursor) => Ok(Self {
                cursor: Some(cursor),
                side: Side::AfterFocus,
            }),
            None => Err(IterableError::IndexOutOfRange {
                index,
                length: Some(start.len()),
            }),
        }
    }

    /// Returns `true` if an element follows the current position.
    pub fn has_next(&self) -> bool {
        match (&self.cursor, self.side) {
            (None, _) => false,
            (Some(_), Side::BeforeFocus) => true,
            (Some(zipper), Side::AfterFocus) => !zipper.at_end(),
        }
    }

    /// Returns `true` if an element precedes the current position.
    pub const fn has_previous(&self) -> bool {
        match (&self.cursor, self.side) {
            (None, _) => false,
            (Some(_), Side::AfterFocus) => true,
            (Some(zipper), Side::BeforeFocus) => !zipper.at_start(),
        }
    }

    /// Returns the next element and moves past it.
    ///
    /// # Errors
    ///
    /// Returns [`IterableError::NoSuchElement`] at the end of the list.
    pub fn try_next(&mut self) -> Result<A, IterableError> {
        let exhausted = IterableError::NoSuchElement {
            direction: Direction::Forward,
        };
        let zipper = self.cursor.as_ref().ok_or_else(|| exhausted.clone())?;
        match self.side {
            Side::BeforeFocus => {
                let element = zipper.focus().clone();
                self.side = Side::AfterFocus;
                Ok(element)
            }
            Side::AfterFocus => {
                let moved = zipper.next().ok_or(exhausted)?;
                let element = moved.focus().clone();
                self.cursor = Some(moved);
                Ok(element)
            }
        }
    }

    /// Returns the previous element and moves before it.
    ///
    /// # Errors
    ///
    /// Returns [`IterableError::NoSuchElement`] at the start of the list.
    pub fn try_previous(&mut self) -> Result<A, IterableError> {
        let exhausted = IterableError::NoSuchElement {
            direction: Direction::Backward,
        };
        let zipper = self.cursor.as_ref().ok_or_else(|| exhausted.clone())?;
        match self.side {
            Side::AfterFocus => {
                let element = zipper.focus().clone();
                self.side = Side::BeforeFocus;
                Ok(element)
            }
            Side::BeforeFocus => {
                let moved = zipper.previous().ok_or(exhausted)?;
                let element = moved.focus().clone();
                self.cursor = Some(moved);
                Ok(element)
            }
        }
    }

    /// Index of the element `try_next` would return.
    pub const fn next_index(&self) -> usize {
        match (&self.cursor, self.side) {
            (None, _) => 0,
            (Some(zipper), Side::BeforeFocus) => zipper.index(),
            (Some(zipper), Side::AfterFocus) => zipper.index() + 1,
        }
    }

    /// Index of the element `try_previous` would return, `None` at the start.
    pub const fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// # Errors
    ///
    /// Always [`IterableError::UnsupportedOperation`].
    #[allow(clippy::unused_self)]
    pub fn remove(&mut self) -> Result<(), IterableError> {
        Err(IterableError::unsupported("remove"))
    }

    /// # Errors
    ///
    /// Always [`IterableError::UnsupportedOperation`].
    #[allow(clippy::unused_self)]
    pub fn set(&mut self, _element: A) -> Result<(), IterableError> {
        Err(IterableError::unsupported("set"))
    }

    /// # Errors
    ///
    /// Always [`IterableError::UnsupportedOperation`].
    #[allow(clippy::unused_self)]
    pub fn add(&mut self, _element: A) -> Result<(), IterableError> {
        Err(IterableError::unsupported("add"))
    }
}

impl<A: Clone + 'static> Iterator for ListIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        self.try_next().ok()
    }
}

impl<A: Clone + fmt::Debug + 'static> fmt::Debug for ListIter<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ListIter")
            .field("next_index", &self.next_index())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stream() -> Stream<i32> {
        vec![10, 20, 30].into()
    }

    #[rstest]
    fn test_forward_then_backward(stream: Stream<i32>) {
        let mut cursor = ListIter::new(&stream);
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next_index(), 0);

        assert_eq!(cursor.try_next(), Ok(10));
        assert_eq!(cursor.try_next(), Ok(20));
        assert_eq!(cursor.try_next(), Ok(30));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_index(), 3);
        assert_eq!(
            cursor.try_next(),
            Err(IterableError::NoSuchElement { direction: Direction::Forward })
        );

        assert_eq!(cursor.try_previous(), Ok(30));
        assert_eq!(cursor.try_previous(), Ok(20));
        assert_eq!(cursor.try_previous(), Ok(10));
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(
            cursor.try_previous(),
            Err(IterableError::NoSuchElement { direction: Direction::Backward })
        );
    }

    #[rstest]
    fn test_alternating_returns_same_element(stream: Stream<i32>) {
        let mut cursor = ListIter::new(&stream);
        assert_eq!(cursor.try_next(), Ok(10));
        assert_eq!(cursor.try_previous(), Ok(10));
        assert_eq!(cursor.try_next(), Ok(10));
        assert_eq!(cursor.try_next(), Ok(20));
        assert_eq!(cursor.previous_index(), Some(1));
    }

    #[rstest]
    fn test_empty_stream() {
        let mut cursor = ListIter::new(&Stream::<i32>::empty());
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next_index(), 0);
        assert!(cursor.try_next().is_err());
        assert!(cursor.try_previous().is_err());
    }

    #[rstest]
    #[case(0, 0, Some(10), None)]
    #[case(1, 1, Some(20), Some(10))]
    #[case(3, 3, None, Some(30))]
    fn test_at(
        stream: Stream<i32>,
        #[case] index: usize,
        #[case] next_index: usize,
        #[case] next: Option<i32>,
        #[case] previous: Option<i32>,
    ) {
        let cursor = ListIter::at(&stream, index).unwrap();
        assert_eq!(cursor.next_index(), next_index);
        assert_eq!(cursor.clone().try_next().ok(), next);
        assert_eq!(cursor.clone().try_previous().ok(), previous);
    }

    #[rstest]
    fn test_at_out_of_range(stream: Stream<i32>) {
        assert_eq!(
            ListIter::at(&stream, 4).map(|cursor| cursor.next_index()),
            Err(IterableError::IndexOutOfRange { index: 4, length: Some(3) })
        );
        assert!(ListIter::at(&Stream::<i32>::empty(), 0).is_ok());
        assert!(ListIter::at(&Stream::<i32>::empty(), 1).is_err());
    }

    #[rstest]
    fn test_mutations_are_unsupported(stream: Stream<i32>) {
        let mut cursor = ListIter::new(&stream);
        let _ = cursor.try_next();
        assert_eq!(
            cursor.set(1),
            Err(IterableError::UnsupportedOperation { operation: "set" })
        );
        assert!(cursor.add(1).is_err());
        assert!(cursor.remove().is_err());
        assert_eq!(cursor.try_next(), Ok(20));
    }
}
