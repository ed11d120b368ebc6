//! Function composition utilities.
//!
//! Function values are ordinary closures. When a function has to be stored
//! as data, for example as the element of a sequence of functions, it is
//! boxed as a [`Function`].
//!
//! # Examples
//!
//! ```
//! use iterw::compose::{compose, curry2, identity};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//! assert_eq!(compose(add_one, double)(5), 11);
//! assert_eq!(compose(identity, add_one)(5), 6);
//!
//! let add = curry2(|first: i32, second: i32| first + second);
//! assert_eq!(add(5)(3), 8);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Double Flip Identity**: `flip(flip(f)) == f`

mod utils;

pub use utils::{Function, compose, constant, curry2, flip, function, identity};
