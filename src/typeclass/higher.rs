//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Stream<_>` directly.
//! [`TypeConstructor`] names the constructor through a GAT so that traits
//! like [`Functor`](super::Functor) and [`Monad`](super::Monad) can say
//! "the same container, holding a different element type".
//!
//! # Example
//!
//! ```rust
//! use iterw::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = transform_type(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The element type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
