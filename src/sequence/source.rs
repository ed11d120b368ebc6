//! Re-traversable sources.
//!
//! [`Sequence`] is the "iterable" abstraction: anything that can hand out a
//! fresh [`Stream`] over its elements as many times as asked. Implementations
//! take the source behind an `Rc` so the stream can keep reading from the
//! shared source instead of copying it up front.

use std::rc::Rc;

use super::Stream;

/// A source that can be traversed any number of times, in a stable order.
///
/// The trait is dyn-compatible; wrappers store sources as
/// `Rc<dyn Sequence<Item = A>>`.
///
/// # Examples
///
/// ```rust
/// use iterw::sequence::{Reiterable, Sequence};
/// use std::rc::Rc;
///
/// let source = Rc::new(vec![1, 2, 3]);
/// assert_eq!(Rc::clone(&source).to_stream().to_vec(), vec![1, 2, 3]);
/// assert_eq!(source.to_stream().len(), 3);
///
/// // Cloneable iterators, including infinite ones, are sources too
/// let naturals = Rc::new(Reiterable(0_u32..));
/// assert_eq!(naturals.to_stream().take(3).to_vec(), vec![0, 1, 2]);
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns a stream over the elements, starting from the first.
    ///
    /// The stream is lazy: elements are read from the source only as it is
    /// pulled.
    fn to_stream(self: Rc<Self>) -> Stream<Self::Item>;
}

/// A cloneable iterator used as a re-traversable source.
///
/// Every traversal starts from a clone of the wrapped iterator, so the
/// iterator itself is never advanced.
#[derive(Debug, Clone)]
pub struct Reiterable<I>(pub I);

fn slice_stream<A, S>(source: Rc<S>) -> Stream<A>
where
    A: Clone + 'static,
    S: AsRef<[A]> + ?Sized + 'static,
{
    Stream::unfold(0, move |index: usize| {
        (*source)
            .as_ref()
            .get(index)
            .map(|element| (element.clone(), index + 1))
    })
}

impl<A: Clone + 'static> Sequence for Stream<A> {
    type Item = A;

    fn to_stream(self: Rc<Self>) -> Stream<A> {
        (*self).clone()
    }
}

impl<A: Clone + 'static> Sequence for Vec<A> {
    type Item = A;

    fn to_stream(self: Rc<Self>) -> Stream<A> {
        slice_stream(self)
    }
}

impl<A: Clone + 'static> Sequence for Box<[A]> {
    type Item = A;

    fn to_stream(self: Rc<Self>) -> Stream<A> {
        slice_stream(self)
    }
}

impl<A: Clone + 'static, const N: usize> Sequence for [A; N] {
    type Item = A;

    fn to_stream(self: Rc<Self>) -> Stream<A> {
        slice_stream(self)
    }
}

impl<A: Clone + 'static> Sequence for Option<A> {
    type Item = A;

    fn to_stream(self: Rc<Self>) -> Stream<A> {
        Stream::from((*self).clone())
    }
}

impl<I> Sequence for Reiterable<I>
where
    I: Iterator + Clone + 'static,
    I::Item: 'static,
{
    type Item = I::Item;

    fn to_stream(self: Rc<Self>) -> Stream<I::Item> {
        Stream::from_iterator(self.0.clone())
    }
}
