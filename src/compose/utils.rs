//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`compose`]: Right-to-left composition of two unary functions
//! - [`curry2`]: Turns a binary function into a chain of unary function values
//! - [`function`]: Boxes a closure as a shareable [`Function`] value

use std::rc::Rc;

/// A unary function held as data.
///
/// Sequences of functions (as consumed by
/// [`IterableW::apply`](crate::iterable::IterableW::apply) and
/// [`IterableW::zapp`](crate::iterable::IterableW::zapp)) need a single,
/// nameable, cloneable element type; a reference-counted trait object is it.
pub type Function<A, B> = Rc<dyn Fn(A) -> B>;

/// Wraps a closure as a [`Function`] value.
///
/// # Examples
///
/// ```
/// use iterw::compose::{Function, function};
///
/// let double: Function<i32, i32> = function(|x| x * 2);
/// let shared = double.clone();
/// assert_eq!(shared(21), 42);
/// ```
#[inline]
pub fn function<A, B, F>(body: F) -> Function<A, B>
where
    F: Fn(A) -> B + 'static,
{
    Rc::new(body)
}

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition and
/// the function [`IterableW::join`](crate::iterable::IterableW::join) binds
/// with.
///
/// # Examples
///
/// ```
/// use iterw::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use iterw::compose::constant;
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use iterw::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(flip(subtract)(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Composes two functions right to left: `compose(f, g)(x) == f(g(x))`.
///
/// # Laws
///
/// - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
/// - **Identity**: `compose(identity, f) == f == compose(f, identity)`
///
/// # Examples
///
/// ```
/// use iterw::compose::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// assert_eq!(compose(add_one, double)(5), 11);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}

/// Curries a binary function: `curry2(f)(a)(b) == f(a, b)`.
///
/// The first argument is cloned into each partially applied function, so the
/// result can be applied to many second arguments.
///
/// # Examples
///
/// ```
/// use iterw::compose::curry2;
///
/// let add = curry2(|first: i32, second: i32| first + second);
/// let add_five = add(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
pub fn curry2<A, B, C, F>(function: F) -> impl Fn(A) -> Function<B, C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + 'static,
{
    let function = Rc::new(function);
    move |first: A| {
        let function = Rc::clone(&function);
        Rc::new(move |second: B| function(first.clone(), second)) as Function<B, C>
    }
}
