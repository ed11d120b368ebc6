//! # iterw
//!
//! A monadic wrapper for re-traversable sequences.
//!
//! ## Overview
//!
//! This library lets any iterable source be treated as a monad: wrap it,
//! then `bind`, `map`, `apply`, `join`, fold and zip it, all lazily. It
//! includes:
//!
//! - **Iterable Wrapper**: `IterableW` with monadic, folding and zipping
//!   combinators, plus an immutable list view and bidirectional iterator
//! - **Lazy Sequences**: Memoised, possibly infinite `Stream` and an
//!   immutable `Zipper` cursor
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Semigroup, Monoid
//! - **Function Composition**: identity, constant, flip, compose, curry2
//! - **Control Structures**: Lazy evaluation with memoization
//! - **Strings**: Curried string predicates
//! - **Categories**: Category labels for properties
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function composition utilities
//! - `control`: Control structures (Lazy)
//! - `sequence`: Lazy streams and zippers
//! - `iterable`: The iterable wrapper and list adapter
//! - `strings`: Curried string functions (pulls in `regex`)
//! - `category`: Category labels
//! - `serde`: Serialization of streams
//! - `tracing`: Debug events for rejected mutations and failed reductions
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use iterw::prelude::*;
//!
//! let numbers = IterableW::wrap(vec![1, 2, 3]);
//! let pairs = numbers.bind(|n| vec![n, -n]);
//! assert_eq!(pairs.to_vec(), vec![1, -1, 2, -2, 3, -3]);
//!
//! let sums = IterableW::lift_m2(|a: i32, b: i32| a + b);
//! let table = sums(numbers.clone())(IterableW::wrap(vec![10, 20]));
//! assert_eq!(table.fold_left1(|a, b| a.max(b)), Ok(23));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use iterw::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "iterable")]
    pub use crate::iterable::*;

    #[cfg(feature = "category")]
    pub use crate::category::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "iterable")]
pub mod iterable;

#[cfg(feature = "strings")]
pub mod strings;

#[cfg(feature = "category")]
pub mod category;
