//! Control structures for functional programming.
//!
//! - [`Lazy`]: Lazy evaluation with memoization, the cell type behind
//!   [`Stream`](crate::sequence::Stream)
//!
//! # Examples
//!
//! ```rust
//! use iterw::control::Lazy;
//!
//! let lazy = Lazy::new(|| "computed".to_string());
//! assert_eq!(lazy.force().as_str(), "computed");
//! ```

mod lazy;

pub use lazy::{Lazy, LazyState};
