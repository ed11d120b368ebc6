//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over the elements of a sequence
//! - [`Applicative`]: Lifting values and combining sequences
//! - [`Monad`]: Sequencing dependent computations
//! - [`Foldable`]: Folding sequences to summary values
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! so that `Functor` and `Monad` can be stated once for
//! [`Stream`](crate::sequence::Stream) and
//! [`IterableW`](crate::iterable::IterableW).
//!
//! Unlike single-value containers, sequences call mapping functions once
//! per element and lazily, at pull time. The traits here therefore take
//! `Fn + 'static` functions and require `Clone + 'static` element types.

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
