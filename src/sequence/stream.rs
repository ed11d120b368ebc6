//! Persistent lazy stream.
//!
//! This module provides [`Stream`], a memoised, pull-based cons stream that
//! may be infinite.
//!
//! # Overview
//!
//! A stream is a chain of cells, each of which is either empty or holds an
//! element and the rest of the stream. Cells are [`Lazy`] values behind an
//! `Rc`: a cell is computed the first time anybody pulls it and then shared
//! by every clone of the stream.
//!
//! - O(1) `clone` and `cons`
//! - O(1) `uncons` once the cell is forced
//! - O(n) `get`, `len`
//! - lazy `append`, `bind`, `map`, `take`, `drop_first`, `zip_with`
//!
//! # Examples
//!
//! ```rust
//! use iterw::sequence::Stream;
//!
//! // Infinite streams are fine as long as only a prefix is pulled
//! let naturals = Stream::range_from(0);
//! let evens = naturals.map(|n| n * 2);
//! assert_eq!(evens.take(4).to_vec(), vec![0, 2, 4, 6]);
//!
//! // Structural sharing: the shared tail is preserved
//! let list: Stream<i32> = vec![2, 3].into();
//! let extended = Stream::cons(1, list.clone());
//! assert_eq!(list.len(), 2);
//! assert_eq!(extended.to_vec(), vec![1, 2, 3]);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

use crate::compose::Function;
use crate::control::{Lazy, LazyState};
use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Monoid, Semigroup, TypeConstructor,
};

/// The deferred computation of one cell.
///
/// Concatenation is kept as data rather than as a closure, so that chains of
/// nested appends can be flattened when forced and taken apart when dropped.
enum Thunk<A> {
    Suspended(Box<dyn FnOnce() -> Cell<A>>),
    Append(Stream<A>, Stream<A>),
}

/// A shared, memoised cell.
type Link<A> = Rc<Lazy<Cell<A>, Thunk<A>>>;

/// Number of elements `Debug` shows before eliding the rest.
const DEBUG_PREVIEW_LENGTH: usize = 32;

/// One evaluated cell of a stream.
enum Cell<A> {
    Nil,
    Cons(A, Stream<A>),
}

/// A persistent, lazily evaluated, possibly infinite sequence.
///
/// # Time Complexity
///
/// | Operation    | Complexity              |
/// |--------------|-------------------------|
/// | `cons`       | O(1)                    |
/// | `uncons`     | O(1) + cost of forcing  |
/// | `get`        | O(n)                    |
/// | `len`        | O(n), finite only       |
/// | `append`     | O(1), lazy              |
/// | `map`/`bind` | O(1), lazy              |
///
/// # Examples
///
/// ```rust
/// use iterw::sequence::Stream;
///
/// let stream = Stream::cons(1, Stream::singleton(2));
/// assert_eq!(stream.head(), Some(1));
/// assert_eq!(stream.len(), 2);
/// ```
pub struct Stream<A> {
    link: Link<A>,
}

impl<A> Stream<A> {
    fn from_cell(cell: Cell<A>) -> Self {
        Self {
            link: Rc::new(Lazy::new_with_value(cell)),
        }
    }

    /// Creates an empty stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::sequence::Stream;
    ///
    /// let stream: Stream<i32> = Stream::empty();
    /// assert!(stream.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::from_cell(Cell::Nil)
    }

    /// Prepends an element to a stream.
    #[inline]
    #[must_use]
    pub fn cons(head: A, tail: Self) -> Self {
        Self::from_cell(Cell::Cons(head, tail))
    }

    /// Creates a stream containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: A) -> Self {
        Self::cons(element, Self::empty())
    }

    /// Returns `true` if the first cell has already been evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::sequence::Stream;
    ///
    /// let stream = Stream::from_iterator(vec![1, 2, 3]);
    /// assert!(!stream.is_evaluated());
    /// let _ = stream.head();
    /// assert!(stream.is_evaluated());
    /// ```
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.link.is_initialized()
    }

    fn take_link(&mut self) -> Link<A> {
        std::mem::replace(&mut self.link, Rc::new(Lazy::new_with_value(Cell::Nil)))
    }

    /// Whether dropping this stream may release a chain of further cells.
    fn owns_chain(&self) -> bool {
        Rc::strong_count(&self.link) == 1
            && (matches!(self.link.get().as_deref(), Some(Cell::Cons(..)))
                || matches!(self.link.pending().as_deref(), Some(Thunk::Append(..))))
    }
}

impl<A: 'static> Stream<A> {
    fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Cell<A> + 'static,
    {
        Self {
            link: Rc::new(Lazy::new_deferred(Thunk::Suspended(Box::new(thunk)))),
        }
    }

    fn concat(front: Self, back: Self) -> Self {
        Self {
            link: Rc::new(Lazy::new_deferred(Thunk::Append(front, back))),
        }
    }

    /// The operands of a pending concatenation, if this stream is one.
    fn pending_append(&self) -> Option<(Self, Self)> {
        match self.link.pending().as_deref() {
            Some(Thunk::Append(front, back)) => Some((front.clone(), back.clone())),
            _ => None,
        }
    }

    /// Creates a stream that pulls from an iterator only as its cells are forced.
    ///
    /// Each element is pulled at most once, however many times the stream is
    /// traversed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::sequence::Stream;
    ///
    /// let squares = Stream::from_iterator((1..).map(|n: u64| n * n));
    /// assert_eq!(squares.take(3).to_vec(), vec![1, 4, 9]);
    /// ```
    pub fn from_iterator<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = A>,
        I::IntoIter: 'static,
    {
        let mut iterator = iterable.into_iter();
        Self::suspend(move || match iterator.next() {
            Some(element) => Cell::Cons(element, Self::from_iterator(iterator)),
            None => Cell::Nil,
        })
    }

    /// Builds a stream from a seed and a step function, stopping at the first `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::sequence::Stream;
    ///
    /// let countdown = Stream::unfold(3, |n| (n > 0).then(|| (n, n - 1)));
    /// assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn unfold<S, F>(seed: S, step: F) -> Self
    where
        S: 'static,
        F: Fn(S) -> Option<(A, S)> + 'static,
    {
        Self::unfold_shared(seed, Rc::new(step))
    }

    fn unfold_shared<S, F>(seed: S, step: Rc<F>) -> Self
    where
        S: 'static,
        F: Fn(S) -> Option<(A, S)> + 'static,
    {
        Self::suspend(move || match step(seed) {
            Some((element, next_seed)) => Cell::Cons(element, Self::unfold_shared(next_seed, step)),
            None => Cell::Nil,
        })
    }
}

impl<A: Clone + 'static> Stream<A> {
    /// The infinite stream `seed, step(seed), step(step(seed)), ...`.
    pub fn iterate<F>(seed: A, step: F) -> Self
    where
        F: Fn(A) -> A + 'static,
    {
        Self::unfold(seed, move |current: A| {
            let next = step(current.clone());
            Some((current, next))
        })
    }

    /// The infinite stream repeating one element.
    pub fn repeat(element: A) -> Self {
        Self::unfold((), move |()| Some((element.clone(), ())))
    }

    fn force(&self) -> std::cell::Ref<'_, Cell<A>> {
        self.link.force_with(|thunk| match thunk {
            Thunk::Suspended(thunk) => thunk(),
            Thunk::Append(front, back) => Self::concatenate(front, back),
        })
    }

    /// Evaluates the first cell of `front ++ back`.
    ///
    /// Pending concatenations on the left are unfolded into a right-nested
    /// chain in a loop, so forcing a deeply left-nested append takes constant
    /// stack. The unfolded chain is left behind as the tail and is walked one
    /// level per forced cell.
    fn concatenate(front: Self, back: Self) -> Cell<A> {
        let mut current = front;
        let mut rest = Some(back);
        loop {
            if let Some((inner_front, inner_back)) = current.pending_append() {
                rest = Some(match rest.take() {
                    Some(rest) => Self::concat(inner_back, rest),
                    None => inner_back,
                });
                current = inner_front;
                continue;
            }
            match current.uncons() {
                Some((head, tail)) => {
                    let tail = match rest {
                        Some(rest) => Self::concat(tail, rest),
                        None => tail,
                    };
                    return Cell::Cons(head, tail);
                }
                None => match rest.take() {
                    Some(next) => current = next,
                    None => return Cell::Nil,
                },
            }
        }
    }

    /// Returns `true` if the stream is empty. Forces the first cell.
    pub fn is_empty(&self) -> bool {
        matches!(&*self.force(), Cell::Nil)
    }

    /// Splits the stream into its first element and the rest.
    ///
    /// Returns `None` for an empty stream. Forces the first cell.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::sequence::Stream;
    ///
    /// let stream: Stream<i32> = vec![1, 2].into();
    /// let (head, tail) = stream.uncons().unwrap();
    /// assert_eq!(head, 1);
    /// assert_eq!(tail.to_vec(), vec![2]);
    /// ```
    pub fn uncons(&self) -> Option<(A, Self)> {
        match &*self.force() {
            Cell::Nil => None,
            Cell::Cons(head, tail) => Some((head.clone(), tail.clone())),
        }
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn head(&self) -> Option<A> {
        self.uncons().map(|(head, _)| head)
    }

    fn into_cell(self) -> Cell<A> {
        match self.uncons() {
            Some((head, tail)) => Cell::Cons(head, tail),
            None => Cell::Nil,
        }
    }

    /// Returns an iterator that pulls elements from the stream.
    #[inline]
    pub fn iter(&self) -> Iter<A> {
        Iter {
            remaining: self.clone(),
        }
    }

    /// Returns the element at `index`, or `None` if the stream is shorter.
    ///
    /// # Complexity
    ///
    /// O(index)
    pub fn get(&self, index: usize) -> Option<A> {
        self.iter().nth(index)
    }

    /// Counts the elements. Never returns for an infinite stream.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if any element satisfies the predicate.
    ///
    /// Stops at the first match, so it terminates on an infinite stream
    /// that contains one.
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.iter().any(|element| predicate(&element))
    }

    /// Collects the elements into a `Vec`. Finite streams only.
    pub fn to_vec(&self) -> Vec<A> {
        self.iter().collect()
    }

    /// Folds the stream from the left, seeding with the first element.
    ///
    /// Returns `None` for an empty stream.
    pub fn fold_left1<F>(&self, function: F) -> Option<A>
    where
        F: FnMut(A, A) -> A,
    {
        self.iter().reduce(function)
    }

    /// Concatenates two streams lazily.
    ///
    /// Appends may be nested to any depth on either side: forcing and
    /// dropping both run in constant stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::sequence::Stream;
    ///
    /// let front: Stream<i32> = vec![1, 2].into();
    /// let back: Stream<i32> = vec![3].into();
    /// assert_eq!(front.append(&back).to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        Self::concat(self.clone(), other.clone())
    }

    /// Concatenates this stream with one that is only produced once this
    /// stream is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::sequence::Stream;
    ///
    /// let front: Stream<usize> = vec![1].into();
    /// let joined = front.append_with(|| Stream::range_from(10));
    /// assert_eq!(joined.take(3).to_vec(), vec![1, 10, 11]);
    /// ```
    #[must_use]
    pub fn append_with<F>(&self, other: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::concat(self.clone(), Self::suspend(move || other().into_cell()))
    }

    /// Maps every element to a stream and concatenates the results in order.
    ///
    /// Outer order is preserved, and within each outer element the order of
    /// its generated elements is preserved. Elements are produced lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::sequence::Stream;
    ///
    /// let stream: Stream<i32> = vec![1, 2].into();
    /// let expanded = stream.bind(|n| Stream::from(vec![n, n * 10]));
    /// assert_eq!(expanded.to_vec(), vec![1, 10, 2, 20]);
    /// ```
    pub fn bind<B, F>(&self, function: F) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Stream<B> + 'static,
    {
        self.bind_shared(Rc::new(function))
    }

    fn bind_shared<B, F>(&self, function: Rc<F>) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Stream<B> + 'static,
    {
        let this = self.clone();
        Stream::suspend(move || {
            let mut outer = this;
            // Skip outer elements whose inner streams are empty without
            // nesting one suspension per skipped element.
            while let Some((element, rest)) = outer.uncons() {
                let inner = function(element);
                if let Some((head, tail)) = inner.uncons() {
                    return Cell::Cons(head, tail.append_with(move || rest.bind_shared(function)));
                }
                outer = rest;
            }
            Cell::Nil
        })
    }

    /// Applies a function to every element lazily.
    pub fn map<B, F>(&self, function: F) -> Stream<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        self.map_shared(Rc::new(function))
    }

    fn map_shared<B, F>(&self, function: Rc<F>) -> Stream<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let this = self.clone();
        Stream::suspend(move || match this.uncons() {
            Some((head, tail)) => Cell::Cons(function(head), tail.map_shared(function)),
            None => Cell::Nil,
        })
    }

    /// Returns the stream without its first `count` elements.
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let this = self.clone();
        Self::suspend(move || {
            let mut remaining = this;
            for _ in 0..count {
                match remaining.uncons() {
                    Some((_, tail)) => remaining = tail,
                    None => return Cell::Nil,
                }
            }
            remaining.into_cell()
        })
    }

    /// Returns the first `count` elements as a new stream.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count == 0 {
            return Self::empty();
        }
        let this = self.clone();
        Self::suspend(move || match this.uncons() {
            Some((head, tail)) => Cell::Cons(head, tail.take(count - 1)),
            None => Cell::Nil,
        })
    }

    /// Combines two streams position by position.
    ///
    /// The result is as long as the shorter operand; the remainder of the
    /// longer one is never pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::sequence::Stream;
    ///
    /// let numbers: Stream<i32> = vec![1, 2, 3].into();
    /// let tens: Stream<i32> = vec![10, 20].into();
    /// assert_eq!(numbers.zip_with(&tens, |a, b| a + b).to_vec(), vec![11, 22]);
    /// ```
    pub fn zip_with<B, C, F>(&self, other: &Stream<B>, function: F) -> Stream<C>
    where
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        self.zip_with_shared(other, Rc::new(function))
    }

    fn zip_with_shared<B, C, F>(&self, other: &Stream<B>, function: Rc<F>) -> Stream<C>
    where
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let this = self.clone();
        let other = other.clone();
        Stream::suspend(move || {
            let Some((left, left_rest)) = this.uncons() else {
                return Cell::Nil;
            };
            let Some((right, right_rest)) = other.uncons() else {
                return Cell::Nil;
            };
            Cell::Cons(
                function(left, right),
                left_rest.zip_with_shared(&right_rest, function),
            )
        })
    }

    /// Pairs up two streams position by position, truncating to the shorter.
    pub fn zip<B>(&self, other: &Stream<B>) -> Stream<(A, B)>
    where
        B: Clone + 'static,
    {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Pairs every element with its zero-based position.
    pub fn zip_index(&self) -> Stream<(A, usize)> {
        self.zip(&Stream::range_from(0))
    }

    /// Applies the i-th function to the i-th element.
    ///
    /// The result is as long as the shorter of the two streams.
    pub fn zapp<B>(&self, functions: &Stream<Function<A, B>>) -> Stream<B>
    where
        B: 'static,
    {
        functions.zip_with(self, |function, element| function(element))
    }
}

impl Stream<usize> {
    /// The infinite stream `start, start + 1, start + 2, ...`.
    pub fn range_from(start: usize) -> Self {
        Self::iterate(start, |current| current + 1)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A pulling iterator over a [`Stream`].
///
/// Holding the iterator keeps only the unvisited part of the stream alive.
pub struct Iter<A> {
    remaining: Stream<A>,
}

impl<A: Clone + 'static> Iterator for Iter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.remaining.uncons()?;
        self.remaining = tail;
        Some(head)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Clone for Stream<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            link: Rc::clone(&self.link),
        }
    }
}

impl<A> Default for Stream<A> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Releases uniquely owned cells from a worklist instead of recursively, so
/// that neither a long forced stream nor a deep chain of pending appends
/// overflows the stack. Unevaluated cells are never forced.
impl<A> Drop for Stream<A> {
    fn drop(&mut self) {
        if !self.owns_chain() {
            return;
        }

        let mut links = vec![self.take_link()];
        while let Some(link) = links.pop() {
            let Ok(lazy) = Rc::try_unwrap(link) else {
                continue;
            };
            match lazy.into_state() {
                LazyState::Init(Cell::Cons(_, mut tail)) => links.push(tail.take_link()),
                LazyState::Uninit(Thunk::Append(mut front, mut back)) => {
                    links.push(back.take_link());
                    links.push(front.take_link());
                }
                LazyState::Init(Cell::Nil) | LazyState::Uninit(Thunk::Suspended(_)) | LazyState::Poisoned => {}
            }
        }
    }
}

impl<A: Clone> FromIterator<A> for Stream<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let elements: Vec<A> = iter.into_iter().collect();
        elements.into()
    }
}

impl<A> From<Vec<A>> for Stream<A> {
    fn from(mut elements: Vec<A>) -> Self {
        let mut stream = Self::empty();
        while let Some(element) = elements.pop() {
            stream = Self::cons(element, stream);
        }
        stream
    }
}

impl<A> From<Option<A>> for Stream<A> {
    fn from(value: Option<A>) -> Self {
        value.map_or_else(Self::empty, Self::singleton)
    }
}

impl<A: Clone + 'static> IntoIterator for Stream<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter { remaining: self }
    }
}

impl<A: Clone + 'static> IntoIterator for &Stream<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Element-wise equality. Both streams must be finite unless they differ.
impl<A: Clone + PartialEq + 'static> PartialEq for Stream<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.link, &other.link) || self.iter().eq(other.iter())
    }
}

impl<A: Clone + fmt::Debug + 'static> fmt::Debug for Stream<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = formatter.debug_list();
        let mut preview = self.iter();
        list.entries(preview.by_ref().take(DEBUG_PREVIEW_LENGTH));
        if preview.next().is_some() {
            list.entry(&format_args!(".."));
        }
        list.finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Stream<A> {
    type Inner = A;
    type WithType<B> = Stream<B>;
}

impl<A: Clone + 'static> Functor for Stream<A> {
    fn fmap<B, F>(self, function: F) -> Stream<B>
    where
        F: Fn(A) -> B + 'static,
        B: Clone + 'static,
    {
        self.map(function)
    }
}

impl<A: Clone + 'static> Applicative for Stream<A> {
    fn pure<T>(value: T) -> Stream<T>
    where
        T: Clone + 'static,
    {
        Stream::singleton(value)
    }

    fn map2<B, C, F>(self, other: Stream<B>, function: F) -> Stream<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let function = Rc::new(function);
        self.bind(move |left| {
            let function = Rc::clone(&function);
            other.map(move |right| function(left.clone(), right))
        })
    }
}

impl<A: Clone + 'static> Monad for Stream<A> {
    fn flat_map<B, F>(self, function: F) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> Stream<B> + 'static,
    {
        self.bind(function)
    }
}

impl<A: Clone + 'static> Foldable for Stream<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.to_vec()
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

impl<A: Clone + 'static> Semigroup for Stream<A> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<A: Clone + 'static> Monoid for Stream<A> {
    fn empty() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: Clone + serde::Serialize + 'static> serde::Serialize for Stream<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for Stream<A>
where
    A: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<A>::deserialize(deserializer).map(Self::from)
    }
}
