//! The monadic iterable wrapper.
//!
//! [`IterableW`] wraps any re-traversable [`Sequence`] and offers monadic,
//! folding and zipping combinators over it. Combinators never touch the
//! wrapped source: each one derives a new lazy [`Stream`] from it and wraps
//! that.

use std::cell::RefCell;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

use super::{IterableError, ListView};
use crate::compose::{Function, curry2, function, identity};
use crate::sequence::{Iter, Sequence, Stream, Zipper};
use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Monoid, Semigroup, TypeConstructor,
};

/// A pending step of a right fold.
type Continuation<'a, B> = Box<dyn FnOnce(B) -> B + 'a>;

/// A monadic view over a re-traversable sequence.
///
/// The wrapper holds a shared, read-only reference to its source and is
/// cheap to clone. All combinators are lazy unless documented otherwise;
/// folds are strict and need a finite source.
///
/// # Examples
///
/// ```rust
/// use iterw::iterable::IterableW;
/// use iterw::typeclass::Foldable;
///
/// let numbers = IterableW::wrap(vec![1, 2, 3]);
/// let pairs = numbers.bind(|n| vec![n, n * 10]);
/// assert_eq!(pairs.to_vec(), vec![1, 10, 2, 20, 3, 30]);
///
/// // The source is untouched and can be traversed again
/// assert_eq!(numbers.fold_left(0, |sum, n| sum + n), 6);
/// ```
pub struct IterableW<A> {
    source: Rc<dyn Sequence<Item = A>>,
}

impl<A: Clone + 'static> IterableW<A> {
    /// Wraps a sequence.
    #[inline]
    pub fn wrap<S>(sequence: S) -> Self
    where
        S: Sequence<Item = A> + 'static,
    {
        Self::from_shared(Rc::new(sequence))
    }

    /// Wraps a sequence that is already shared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::iterable::IterableW;
    /// use std::rc::Rc;
    ///
    /// let shared = Rc::new(vec!['a', 'b']);
    /// let wrapper = IterableW::from_shared(shared.clone());
    /// assert_eq!(wrapper.to_vec(), *shared);
    /// ```
    #[inline]
    pub fn from_shared(source: Rc<dyn Sequence<Item = A>>) -> Self {
        Self { source }
    }

    /// A wrapper over no elements.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::wrap(Stream::empty())
    }

    /// A wrapper over exactly one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::iterable::IterableW;
    ///
    /// let f = |n: i32| IterableW::wrap(vec![n, n + 1]);
    /// assert_eq!(IterableW::unit(1).bind(f), f(1));
    /// ```
    #[inline]
    pub fn unit(value: A) -> Self {
        Self::wrap(Some(value))
    }

    /// Lifts a plain function into one returning a singleton wrapper.
    pub fn kleisli<B, F>(function: F) -> impl Fn(A) -> IterableW<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B,
    {
        move |value| IterableW::unit(function(value))
    }

    /// [`kleisli`](Self::kleisli) as a function value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::compose::function;
    /// use iterw::iterable::IterableW;
    ///
    /// let arrow = IterableW::arrow();
    /// let halve = arrow(function(|n: i32| n / 2));
    /// assert_eq!(halve(42).to_vec(), vec![21]);
    /// ```
    pub fn arrow<B>() -> impl Fn(Function<A, B>) -> Function<A, IterableW<B>>
    where
        B: Clone + 'static,
    {
        |transform: Function<A, B>| function(move |value| IterableW::unit(transform(value)))
    }

    /// [`bind`](Self::bind) as a curried function value: wrapper first,
    /// then the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::compose::function;
    /// use iterw::iterable::IterableW;
    ///
    /// let bind = IterableW::curried_bind();
    /// let over_digits = bind(IterableW::wrap(vec![1, 2]));
    /// let doubled: IterableW<i32> = over_digits(function(|n: i32| vec![n; 2]));
    /// assert_eq!(doubled.to_vec(), vec![1, 1, 2, 2]);
    /// ```
    pub fn curried_bind<B, T>() -> impl Fn(IterableW<A>) -> Function<Function<A, T>, IterableW<B>>
    where
        B: Clone + 'static,
        T: Sequence<Item = B> + 'static,
    {
        |wrapper: Self| {
            function(move |transform: Function<A, T>| {
                wrapper.bind(move |value| transform(value))
            })
        }
    }

    /// Lifts a plain function to a function between wrappers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::iterable::IterableW;
    ///
    /// let lengths = IterableW::lift(|word: &str| word.len());
    /// let words = IterableW::wrap(vec!["one", "three"]);
    /// assert_eq!(lengths(words).to_vec(), vec![3, 5]);
    /// ```
    pub fn lift<B, F>(function: F) -> impl Fn(IterableW<A>) -> IterableW<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        move |wrapper: Self| {
            let function = Rc::clone(&function);
            wrapper.map(move |value| function(value))
        }
    }

    /// Returns a fresh lazy stream over the source.
    #[inline]
    pub fn to_stream(&self) -> Stream<A> {
        Rc::clone(&self.source).to_stream()
    }

    /// Maps every element to a sequence and concatenates the results.
    ///
    /// Outer order is preserved, and for each element the order of the
    /// sequence it produced. `function` runs as elements are pulled.
    pub fn bind<B, T, F>(&self, function: F) -> IterableW<B>
    where
        B: Clone + 'static,
        T: Sequence<Item = B> + 'static,
        F: Fn(A) -> T + 'static,
    {
        IterableW::wrap(
            self.to_stream()
                .bind(move |value| Rc::new(function(value)).to_stream()),
        )
    }

    /// Applies a function to every element.
    pub fn map<B, F>(&self, function: F) -> IterableW<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        self.bind(Self::kleisli(function))
    }

    /// Applies every function of `functions` to every element.
    ///
    /// Functions form the outer loop and elements the inner one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::compose::{Function, function};
    /// use iterw::iterable::IterableW;
    ///
    /// let functions: Vec<Function<i32, i32>> = vec![function(|n| n + 1), function(|n| n * 10)];
    /// let numbers = IterableW::wrap(vec![1, 2]);
    /// assert_eq!(numbers.apply(functions).to_vec(), vec![2, 3, 10, 20]);
    /// ```
    pub fn apply<B, S>(&self, functions: S) -> IterableW<B>
    where
        B: Clone + 'static,
        S: Sequence<Item = Function<A, B>> + 'static,
    {
        let this = self.clone();
        IterableW::wrap(functions).bind(move |function: Function<A, B>| this.map(move |value| function(value)))
    }

    /// Combines every element of `first` with every element of `second`.
    ///
    /// `first` is the outer loop and `second` the inner one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::iterable::IterableW;
    ///
    /// let pairs = IterableW::bind2(vec![1, 2], vec!['a', 'b'], |n, c| format!("{n}{c}"));
    /// assert_eq!(pairs.to_vec(), vec!["1a", "1b", "2a", "2b"]);
    /// ```
    pub fn bind2<B, C, S, T, F>(first: S, second: T, function: F) -> IterableW<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        S: Sequence<Item = A> + 'static,
        T: Sequence<Item = B> + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        IterableW::wrap(second).apply(Self::wrap(first).map(curry2(function)))
    }

    /// Lifts a binary function to a curried function between wrappers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::iterable::IterableW;
    ///
    /// let add = IterableW::lift_m2(|a: i32, b: i32| a + b);
    /// let sums = add(IterableW::wrap(vec![1, 2]))(IterableW::wrap(vec![10, 20]));
    /// assert_eq!(sums.to_vec(), vec![11, 21, 12, 22]);
    /// ```
    pub fn lift_m2<B, C, F>(binary: F) -> impl Fn(IterableW<A>) -> Function<IterableW<B>, IterableW<C>>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let binary = Rc::new(binary);
        move |first: Self| {
            let binary = Rc::clone(&binary);
            function(move |second: IterableW<B>| {
                let binary = Rc::clone(&binary);
                Self::bind2(first.clone(), second, move |a, b| binary(a, b))
            })
        }
    }

    /// Flattens a sequence of sequences by one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::iterable::IterableW;
    ///
    /// let nested = vec![vec![1, 2], vec![], vec![3]];
    /// assert_eq!(IterableW::join(nested).to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn join<S>(sequences: S) -> Self
    where
        S: Sequence + 'static,
        S::Item: Sequence<Item = A> + Clone + 'static,
    {
        IterableW::wrap(sequences).bind(identity)
    }

    /// Folds from the left, seeding with the first element.
    ///
    /// # Errors
    ///
    /// Returns [`IterableError::EmptySequence`] if there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::iterable::{IterableError, IterableW};
    ///
    /// assert_eq!(IterableW::wrap(vec![1, 2, 3, 4]).fold_left1(|a, b| a + b), Ok(10));
    /// assert_eq!(
    ///     IterableW::<i32>::empty().fold_left1(|a, b| a + b),
    ///     Err(IterableError::EmptySequence { operation: "fold_left1" })
    /// );
    /// ```
    pub fn fold_left1<F>(&self, function: F) -> Result<A, IterableError>
    where
        F: FnMut(A, A) -> A,
    {
        self.to_stream().fold_left1(function).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(operation = "fold_left1", "reduction of an empty sequence");
            IterableError::EmptySequence {
                operation: "fold_left1",
            }
        })
    }

    /// Applies the i-th function to the i-th element, stopping at the
    /// shorter of the two.
    pub fn zapp<B, S>(&self, functions: S) -> IterableW<B>
    where
        B: Clone + 'static,
        S: Sequence<Item = Function<A, B>> + 'static,
    {
        IterableW::wrap(self.to_stream().zapp(&Rc::new(functions).to_stream()))
    }

    /// Combines elements position by position, stopping at the shorter operand.
    pub fn zip_with<B, C, S, F>(&self, other: S, function: F) -> IterableW<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        S: Sequence<Item = B> + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        IterableW::wrap(self.to_stream().zip_with(&Rc::new(other).to_stream(), function))
    }

    /// Pairs elements position by position, stopping at the shorter operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::iterable::IterableW;
    ///
    /// let zipped = IterableW::wrap(vec![1, 2, 3]).zip(vec!["one", "two"]);
    /// assert_eq!(zipped.to_vec(), vec![(1, "one"), (2, "two")]);
    /// ```
    pub fn zip<B, S>(&self, other: S) -> IterableW<(A, B)>
    where
        B: Clone + 'static,
        S: Sequence<Item = B> + 'static,
    {
        IterableW::wrap(self.to_stream().zip(&Rc::new(other).to_stream()))
    }

    /// Pairs every element with its zero-based position.
    pub fn zip_index(&self) -> IterableW<(A, usize)> {
        IterableW::wrap(self.to_stream().zip_index())
    }

    /// Returns a pulling iterator over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<A> {
        self.to_stream().into_iter()
    }

    /// Collects the elements. Needs a finite source.
    pub fn to_vec(&self) -> Vec<A> {
        self.to_stream().to_vec()
    }

    /// Returns a cursor on the first element, or `None` if there is none.
    pub fn to_zipper(&self) -> Option<Zipper<A>> {
        Zipper::from_stream(&self.to_stream())
    }

    /// Views the elements as an immutable list.
    #[inline]
    pub fn to_standard_list(&self) -> ListView<A> {
        ListView::new(self.clone())
    }
}

impl<A: Clone + 'static> Sequence for IterableW<A> {
    type Item = A;

    fn to_stream(self: Rc<Self>) -> Stream<A> {
        Rc::clone(&self.source).to_stream()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Clone for IterableW<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
        }
    }
}

impl<A: Clone + 'static> Default for IterableW<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: Clone + PartialEq + 'static> PartialEq for IterableW<A> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<A: Clone + fmt::Debug + 'static> fmt::Debug for IterableW<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("IterableW")
            .field(&self.to_stream())
            .finish()
    }
}

impl<A: Clone + 'static> From<Vec<A>> for IterableW<A> {
    fn from(elements: Vec<A>) -> Self {
        Self::wrap(elements)
    }
}

impl<A: Clone + 'static> From<Stream<A>> for IterableW<A> {
    fn from(stream: Stream<A>) -> Self {
        Self::wrap(stream)
    }
}

impl<A: Clone + 'static> FromIterator<A> for IterableW<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::wrap(iter.into_iter().collect::<Vec<A>>())
    }
}

impl<A: Clone + 'static> IntoIterator for IterableW<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Clone + 'static> IntoIterator for &IterableW<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for IterableW<A> {
    type Inner = A;
    type WithType<B> = IterableW<B>;
}

impl<A: Clone + 'static> Functor for IterableW<A> {
    fn fmap<B, F>(self, function: F) -> IterableW<B>
    where
        F: Fn(A) -> B + 'static,
        B: Clone + 'static,
    {
        self.map(function)
    }
}

impl<A: Clone + 'static> Applicative for IterableW<A> {
    fn pure<T>(value: T) -> IterableW<T>
    where
        T: Clone + 'static,
    {
        IterableW::unit(value)
    }

    fn map2<B, C, F>(self, other: IterableW<B>, function: F) -> IterableW<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        Self::bind2(self, other, function)
    }
}

impl<A: Clone + 'static> Monad for IterableW<A> {
    fn flat_map<B, F>(self, function: F) -> IterableW<B>
    where
        B: Clone + 'static,
        F: Fn(A) -> IterableW<B> + 'static,
    {
        self.bind(function)
    }
}

/// Folds need a finite source.
///
/// # Examples
///
/// ```rust
/// use iterw::iterable::IterableW;
/// use iterw::typeclass::Foldable;
///
/// let letters = IterableW::wrap(vec!['a', 'b', 'c']);
/// let word = letters.fold_right(String::new(), |c, mut acc| {
///     acc.push(c);
///     acc
/// });
/// assert_eq!(word, "cba");
/// ```
impl<A: Clone + 'static> Foldable for IterableW<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.iter().fold(init, function)
    }

    /// Walks the source once building one continuation per element, then
    /// runs the chain on `init`. Stack depth grows with the element count.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        let function = RefCell::new(function);
        let function = &function;
        let start: Continuation<'_, B> = Box::new(identity::<B>);
        let chain = self.iter().fold(start, |continuation, value| {
            Box::new(move |accumulator| {
                let folded = (*function.borrow_mut())(value, accumulator);
                continuation(folded)
            }) as Continuation<'_, B>
        });
        chain(init)
    }
}

impl<A: Clone + 'static> Semigroup for IterableW<A> {
    fn combine(self, other: Self) -> Self {
        Self::wrap(self.to_stream().append(&other.to_stream()))
    }
}

impl<A: Clone + 'static> Monoid for IterableW<A> {
    fn empty() -> Self {
        Self::empty()
    }
}

static_assertions::assert_not_impl_any!(IterableW<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_wrap_preserves_order() {
        let wrapper = IterableW::wrap(vec![3, 1, 2]);
        assert_eq!(wrapper.to_vec(), vec![3, 1, 2]);
        assert_eq!(wrapper.to_vec(), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_unit_is_singleton() {
        assert_eq!(IterableW::unit("x").to_vec(), vec!["x"]);
    }

    #[rstest]
    fn test_bind_keeps_outer_and_inner_order() {
        let wrapper = IterableW::wrap(vec![1, 2, 3]);
        let result = wrapper.bind(|n| vec![n; n]);
        assert_eq!(result.to_vec(), vec![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn test_bind_runs_function_lazily() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let wrapper = IterableW::wrap(vec![1, 2, 3]);
        let result = wrapper.bind(move |n| {
            counter.set(counter.get() + 1);
            Some(n)
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(result.iter().next(), Some(1));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_map_over_infinite_source() {
        let naturals = IterableW::wrap(Stream::range_from(0));
        let squares = naturals.map(|n| n * n);
        assert_eq!(squares.iter().take(4).collect::<Vec<_>>(), vec![0, 1, 4, 9]);
    }

    #[rstest]
    fn test_apply_functions_outer() {
        let functions: Vec<Function<i32, String>> =
            vec![function(|n: i32| format!("a{n}")), function(|n: i32| format!("b{n}"))];
        let result = IterableW::wrap(vec![1, 2]).apply(functions);
        assert_eq!(result.to_vec(), vec!["a1", "a2", "b1", "b2"]);
    }

    #[rstest]
    fn test_bind2_first_is_outer() {
        let result = IterableW::bind2(vec![1, 2], vec![10, 20], |a, b| a * 100 + b);
        assert_eq!(result.to_vec(), vec![110, 120, 210, 220]);
    }

    #[rstest]
    fn test_bind2_with_empty_operand() {
        let result = IterableW::bind2(vec![1, 2], Vec::<i32>::new(), |a, b| a + b);
        assert!(result.to_vec().is_empty());
    }

    #[rstest]
    fn test_join_flattens_one_level() {
        let nested = IterableW::wrap(vec![IterableW::wrap(vec![1]), IterableW::empty(), IterableW::wrap(vec![2, 3])]);
        assert_eq!(IterableW::join(nested).to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4], 10)]
    #[case(vec![], 0)]
    fn test_fold_left(#[case] elements: Vec<i32>, #[case] expected: i32) {
        assert_eq!(IterableW::wrap(elements).fold_left(0, |sum, n| sum + n), expected);
    }

    #[rstest]
    fn test_fold_left1_empty_is_error() {
        let result = IterableW::<i32>::empty().fold_left1(|a, b| a + b);
        assert_eq!(result, Err(IterableError::EmptySequence { operation: "fold_left1" }));
    }

    #[rstest]
    fn test_fold_right_associates_to_the_right() {
        let wrapper = IterableW::wrap(vec![1, 2, 3]);
        let rendered = wrapper.clone().fold_right("0".to_string(), |n, acc| format!("({n} {acc})"));
        assert_eq!(rendered, "(1 (2 (3 0)))");

        let difference = wrapper.fold_right(0, |n, acc| n - acc);
        assert_eq!(difference, 1 - (2 - (3 - 0)));
    }

    #[rstest]
    fn test_repeated_folds_through_prelude() {
        use crate::prelude::*;

        let wrapper = IterableW::wrap(vec![1, 2, 3, 4]);
        assert_eq!(wrapper.clone().fold_left(0, |sum, n| sum + n), 10);
        assert_eq!(wrapper.clone().fold_right(0, |n, acc| n - acc), 1 - (2 - (3 - (4 - 0))));
        assert_eq!(wrapper.fold_left1(|a, b| a * b), Ok(24));
        assert_eq!(wrapper.to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_fold_map_over_many_singletons() {
        let total: IterableW<usize> =
            IterableW::wrap(Stream::range_from(0).take(100_000)).fold_map(IterableW::unit);
        assert_eq!(total.iter().next(), Some(0));
        assert_eq!(total.iter().count(), 100_000);
    }

    #[rstest]
    fn test_deeply_nested_combine() {
        let combined = (0..100_000).fold(IterableW::empty(), |accumulator, n| {
            accumulator.combine(IterableW::unit(n))
        });
        assert_eq!(combined.iter().next(), Some(0));
        assert_eq!(combined.iter().last(), Some(99_999));
        drop(combined);

        let unforced = (0..100_000).fold(IterableW::empty(), |accumulator, n| {
            accumulator.combine(IterableW::unit(n))
        });
        drop(unforced);
    }

    #[rstest]
    fn test_zip_truncates() {
        let zipped = IterableW::wrap(vec!['a', 'b']).zip(vec![1, 2, 3]);
        assert_eq!(zipped.to_vec(), vec![('a', 1), ('b', 2)]);
    }

    #[rstest]
    fn test_zip_index() {
        let indexed = IterableW::wrap(vec!["a", "b", "c"]).zip_index();
        assert_eq!(indexed.to_vec(), vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[rstest]
    fn test_zapp_is_positional() {
        let functions: Vec<Function<i32, i32>> = vec![function(|n| n + 1), function(|n| n * 2)];
        let result = IterableW::wrap(vec![10, 20, 30]).zapp(functions);
        assert_eq!(result.to_vec(), vec![11, 40]);
    }

    #[rstest]
    fn test_to_zipper() {
        assert!(IterableW::<i32>::empty().to_zipper().is_none());
        let zipper = IterableW::wrap(vec![5, 6]).to_zipper().unwrap();
        assert_eq!(*zipper.focus(), 5);
    }

    #[rstest]
    fn test_lift_and_kleisli() {
        let describe = IterableW::lift(|n: i32| n.to_string());
        assert_eq!(describe(IterableW::wrap(vec![1, 2])).to_vec(), vec!["1", "2"]);

        let single = IterableW::kleisli(|n: i32| n + 1);
        assert_eq!(single(4).to_vec(), vec![5]);
    }

    #[rstest]
    fn test_arrow_and_curried_bind_agree_with_bind() {
        let wrapper = IterableW::wrap(vec![1, 2, 3]);
        let arrow = IterableW::arrow();
        let squared = arrow(function(|n: i32| n * n));
        assert_eq!(wrapper.bind(move |n| squared(n)).to_vec(), vec![1, 4, 9]);

        let bind = IterableW::curried_bind();
        let neighbours: Function<i32, Vec<i32>> = function(|n| vec![n - 1, n + 1]);
        let expanded: IterableW<i32> = bind(wrapper.clone())(Rc::clone(&neighbours));
        assert_eq!(expanded, wrapper.bind(move |n| neighbours(n)));
    }

    #[rstest]
    fn test_semigroup_and_monoid() {
        let joined = IterableW::wrap(vec![1]).combine(IterableW::wrap(vec![2, 3]));
        assert_eq!(joined.to_vec(), vec![1, 2, 3]);
        assert_eq!(<IterableW<i32> as Monoid>::empty().to_vec(), Vec::<i32>::new());
    }

    #[rstest]
    fn test_foldable_fold_right_with_fn_mut() {
        let mut visited = Vec::new();
        let total = Foldable::fold_right(IterableW::wrap(vec![1, 2, 3]), 0, |n, acc| {
            visited.push(n);
            acc + n
        });
        assert_eq!(total, 6);
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", IterableW::wrap(vec![1, 2])), "IterableW([1, 2])");
    }

    #[cfg(feature = "tracing")]
    #[test]
    #[tracing_test::traced_test]
    fn test_empty_reduction_is_logged() {
        assert!(IterableW::<i32>::empty().fold_left1(|a, b| a + b).is_err());
        assert!(logs_contain("reduction of an empty sequence"));
        assert!(logs_contain("operation=\"fold_left1\""));

        assert_eq!(IterableW::wrap(vec![1]).fold_left1(|a, b| a + b), Ok(1));
    }
}
