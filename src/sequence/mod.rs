//! Lazy, re-traversable sequences.
//!
//! - [`Stream`]: Persistent memoised cons stream, possibly infinite
//! - [`Zipper`]: Immutable bidirectional cursor over a stream
//! - [`Sequence`]: Any source that can be traversed repeatedly
//! - [`Reiterable`]: Adapter turning a cloneable iterator into a [`Sequence`]
//!
//! # Laziness
//!
//! Every transformation on a [`Stream`] is deferred until its cells are
//! pulled, and each cell is computed at most once. Operations that must see
//! every element (`len`, `to_vec`, folds) only terminate on finite streams.
//!
//! # Examples
//!
//! ```rust
//! use iterw::sequence::{Stream, Zipper};
//!
//! let stream: Stream<i32> = (1..=3).collect();
//! let doubled = stream.map(|n| n * 2);
//! assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
//!
//! let zipper = Zipper::from_stream(&doubled).unwrap().next().unwrap();
//! assert_eq!(*zipper.focus(), 4);
//! ```

mod source;
mod stream;
mod zipper;

pub use source::{Reiterable, Sequence};
pub use stream::{Iter, Stream};
pub use zipper::Zipper;

static_assertions::assert_not_impl_any!(Stream<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Zipper<i32>: Send, Sync);
