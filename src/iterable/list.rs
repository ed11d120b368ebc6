//! Immutable list view over an [`IterableW`].
//!
//! [`ListView`] answers the read-only questions of a list interface (length,
//! membership, positional access, sub-lists) by traversing the wrapped
//! sequence. Every mutator is rejected: the boolean ones return `false`, the
//! others return [`IterableError::UnsupportedOperation`].

use std::fmt;

use super::{IterableError, IterableW, ListIter};
use crate::sequence::Iter;

/// A read-only list interface over a wrapped sequence.
///
/// Queries are O(n) traversals of the source; nothing is cached.
///
/// # Examples
///
/// ```rust
/// use iterw::iterable::{IterableError, IterableW};
///
/// let list = IterableW::wrap(vec!["a", "b", "c"]).to_standard_list();
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1), Ok("b"));
/// assert_eq!(list.index_of(&"c"), Some(2));
///
/// assert!(!list.add("d"));
/// assert_eq!(list.clear(), Err(IterableError::UnsupportedOperation { operation: "clear" }));
/// assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
/// ```
pub struct ListView<A> {
    wrapper: IterableW<A>,
}

impl<A: Clone + 'static> ListView<A> {
    /// Creates a list view over a wrapper.
    #[inline]
    pub const fn new(wrapper: IterableW<A>) -> Self {
        Self { wrapper }
    }

    /// The wrapper this view reads from.
    #[inline]
    pub const fn as_iterable(&self) -> &IterableW<A> {
        &self.wrapper
    }

    /// Counts the elements.
    pub fn len(&self) -> usize {
        self.wrapper.to_stream().len()
    }

    /// Returns `true` if there are no elements. Pulls at most one element.
    pub fn is_empty(&self) -> bool {
        self.wrapper.to_stream().is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IterableError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<A, IterableError> {
        self.wrapper
            .to_stream()
            .get(index)
            .ok_or_else(|| IterableError::IndexOutOfRange {
                index,
                length: Some(self.len()),
            })
    }

    /// Collects the elements in order.
    pub fn to_vec(&self) -> Vec<A> {
        self.wrapper.to_vec()
    }

    /// Returns a pulling iterator over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<A> {
        self.wrapper.iter()
    }

    /// Returns a bidirectional iterator positioned before the first element.
    pub fn list_iter(&self) -> ListIter<A> {
        ListIter::new(&self.wrapper.to_stream())
    }

    /// Returns a bidirectional iterator positioned before `index`.
    ///
    /// `index == len()` positions the iterator after the last element.
    ///
    /// # Errors
    ///
    /// Returns [`IterableError::IndexOutOfRange`] if `index > len()`.
    pub fn list_iter_at(&self, index: usize) -> Result<ListIter<A>, IterableError> {
        ListIter::at(&self.wrapper.to_stream(), index)
    }

    /// Returns a view over the elements in `from..to`.
    ///
    /// The result is clipped to the available elements.
    ///
    /// # Errors
    ///
    /// Returns [`IterableError::IndexOutOfRange`] if `from > to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::iterable::IterableW;
    ///
    /// let list = IterableW::wrap(vec![0, 1, 2, 3, 4]).to_standard_list();
    /// assert_eq!(list.sub_list(1, 3).unwrap().to_vec(), vec![1, 2]);
    /// assert!(list.sub_list(3, 1).is_err());
    /// ```
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Self, IterableError> {
        if from > to {
            return Err(IterableError::IndexOutOfRange {
                index: from,
                length: None,
            });
        }
        let window = self.wrapper.to_stream().drop_first(from).take(to - from);
        Ok(Self::new(IterableW::wrap(window)))
    }
}

impl<A: Clone + PartialEq + 'static> ListView<A> {
    /// Returns `true` if some element equals `element`.
    pub fn contains(&self, element: &A) -> bool {
        self.wrapper.to_stream().exists(|candidate| candidate == element)
    }

    /// Returns `true` if every one of `elements` is contained.
    pub fn contains_all(&self, elements: &[A]) -> bool {
        elements.iter().all(|element| self.contains(element))
    }

    /// Position of the first element equal to `element`.
    pub fn index_of(&self, element: &A) -> Option<usize> {
        self.iter().position(|candidate| candidate == *element)
    }

    /// Position of the last element equal to `element`.
    pub fn last_index_of(&self, element: &A) -> Option<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, candidate)| candidate == element)
            .last()
            .map(|(position, _)| position)
    }
}

fn rejected(operation: &'static str) -> bool {
    #[cfg(feature = "tracing")]
    tracing::debug!(operation, "rejected mutation of an immutable list");
    #[cfg(not(feature = "tracing"))]
    let _ = operation;
    false
}

/// Mutators. None of them changes anything.
#[allow(clippy::unused_self)]
impl<A: Clone + 'static> ListView<A> {
    /// Always `false`.
    pub fn add(&self, _element: A) -> bool {
        rejected("add")
    }

    /// Always `false`.
    pub fn remove(&self, _element: &A) -> bool {
        rejected("remove")
    }

    /// Always `false`.
    pub fn add_all<I>(&self, _elements: I) -> bool
    where
        I: IntoIterator<Item = A>,
    {
        rejected("add_all")
    }

    /// Always `false`.
    pub fn add_all_at<I>(&self, _index: usize, _elements: I) -> bool
    where
        I: IntoIterator<Item = A>,
    {
        rejected("add_all_at")
    }

    /// Always `false`.
    pub fn remove_all(&self, _elements: &[A]) -> bool {
        rejected("remove_all")
    }

    /// Always `false`.
    pub fn retain_all(&self, _elements: &[A]) -> bool {
        rejected("retain_all")
    }

    /// # Errors
    ///
    /// Always [`IterableError::UnsupportedOperation`].
    pub fn clear(&self) -> Result<(), IterableError> {
        Err(IterableError::unsupported("clear"))
    }

    /// # Errors
    ///
    /// Always [`IterableError::UnsupportedOperation`].
    pub fn set(&self, _index: usize, _element: A) -> Result<A, IterableError> {
        Err(IterableError::unsupported("set"))
    }

    /// # Errors
    ///
    /// Always [`IterableError::UnsupportedOperation`].
    pub fn insert(&self, _index: usize, _element: A) -> Result<(), IterableError> {
        Err(IterableError::unsupported("insert"))
    }

    /// # Errors
    ///
    /// Always [`IterableError::UnsupportedOperation`].
    pub fn remove_at(&self, _index: usize) -> Result<A, IterableError> {
        Err(IterableError::unsupported("remove_at"))
    }
}

impl<A> Clone for ListView<A> {
    fn clone(&self) -> Self {
        Self {
            wrapper: self.wrapper.clone(),
        }
    }
}

impl<A: Clone + PartialEq + 'static> PartialEq for ListView<A> {
    fn eq(&self, other: &Self) -> bool {
        self.wrapper == other.wrapper
    }
}

impl<A: Clone + fmt::Debug + 'static> fmt::Debug for ListView<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<A: Clone + 'static> IntoIterator for &ListView<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
