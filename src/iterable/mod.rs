//! Monadic wrapper over re-traversable sequences.
//!
//! - [`IterableW`]: The wrapper, with `bind`, `map`, `apply`, `join`, folds
//!   and zips
//! - [`ListView`]: Immutable list interface over a wrapper
//! - [`ListIter`]: Bidirectional iterator over a [`ListView`]
//! - [`IterableError`]: Failures of folds, positional access and mutators
//!
//! # Monad Laws
//!
//! ```text
//! IterableW::unit(a).bind(f) == f(a)
//! m.bind(IterableW::unit) == m
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use iterw::iterable::IterableW;
//!
//! let words = IterableW::wrap(vec!["to", "be"]);
//! let letters = words.bind(|word: &str| word.chars().collect::<Vec<_>>());
//! assert_eq!(letters.to_vec(), vec!['t', 'o', 'b', 'e']);
//!
//! let list = letters.to_standard_list();
//! assert_eq!(list.index_of(&'b'), Some(2));
//! ```

mod error;
mod list;
mod list_iter;
mod wrapper;

pub use error::{Direction, IterableError};
pub use list::ListView;
pub use list_iter::ListIter;
pub use wrapper::IterableW;

static_assertions::assert_not_impl_any!(ListView<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(ListIter<i32>: Send, Sync);
