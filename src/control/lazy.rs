//! Lazy evaluation with memoization.
//!
//! This module provides the `Lazy<T, F>` type, the deferred cell from which
//! [`Stream`](crate::sequence::Stream) is built. A value is computed only
//! when it is first forced, and the result is cached for every later access.
//!
//! # Examples
//!
//! ```rust
//! use iterw::control::Lazy;
//!
//! let lazy = Lazy::new(|| 6 * 7);
//! assert!(!lazy.is_initialized());
//!
//! assert_eq!(*lazy.force(), 42);
//! assert!(lazy.is_initialized());
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// The internal state of a `Lazy` value.
///
/// A lazy value starts out holding its initializer, holds the computed value
/// once forced, and is poisoned if the initializer panicked.
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// The value has not been computed yet.
    /// Contains the initialization function.
    Uninit(F),
    /// The value has been computed.
    Init(T),
    /// The initialization function panicked.
    /// The lazy value is now unusable.
    Poisoned,
}

/// A lazily evaluated value with memoization.
///
/// `Lazy<T, F>` defers computation until the value is first accessed via
/// [`force`](Lazy::force). Once computed, the value is cached and subsequent
/// calls return it without recomputation.
///
/// # Thread Safety
///
/// This type is NOT thread-safe: the state lives in a `RefCell`.
///
/// # Examples
///
/// ```rust
/// use iterw::control::Lazy;
/// use std::cell::Cell;
///
/// let call_count = Cell::new(0);
/// let lazy = Lazy::new(|| {
///     call_count.set(call_count.get() + 1);
///     42
/// });
///
/// assert_eq!(call_count.get(), 0);
/// let _ = lazy.force();
/// let _ = lazy.force();
/// assert_eq!(call_count.get(), 1);
/// ```
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value with the given initialization function.
    ///
    /// The function is not called until [`force`](Lazy::force) is invoked.
    #[inline]
    pub const fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Forces evaluation of the lazy value and returns a reference to it.
    ///
    /// # Panics
    ///
    /// - If the initialization function panics; the value is poisoned afterwards.
    /// - If the value was already poisoned by an earlier panic.
    /// - If the initializer forces this same value re-entrantly.
    #[inline]
    pub fn force(&self) -> Ref<'_, T> {
        self.force_with(|initializer| initializer())
    }
}

impl<T, F> Lazy<T, F> {
    /// Creates a lazy value whose initializer is not itself callable.
    ///
    /// Such a value can only be forced through [`force_with`](Lazy::force_with),
    /// which is told how to turn the initializer into the value.
    #[inline]
    pub const fn new_deferred(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Forces evaluation by passing the initializer to `evaluate`.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`force`](Lazy::force).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::control::Lazy;
    ///
    /// let lazy = Lazy::new_deferred(21);
    /// assert_eq!(*lazy.force_with(|half| half * 2), 42);
    /// assert_eq!(*lazy.force_with(|_| 0), 42);
    /// ```
    pub fn force_with<E>(&self, evaluate: E) -> Ref<'_, T>
    where
        E: FnOnce(F) -> T,
    {
        let needs_initialization = {
            let state = self.state.borrow();
            match &*state {
                LazyState::Init(_) => false,
                LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
                LazyState::Uninit(_) => true,
            }
        };

        if needs_initialization {
            self.initialize(evaluate);
        }

        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => value,
            _ => panic!("Lazy should be initialized at this point"),
        })
    }

    fn initialize<E>(&self, evaluate: E)
    where
        E: FnOnce(F) -> T,
    {
        let mut state = self.state.borrow_mut();

        match &*state {
            LazyState::Init(_) => return,
            LazyState::Poisoned => panic!("Lazy instance has been poisoned"),
            LazyState::Uninit(_) => {}
        }

        // Stay poisoned unless the initializer returns normally.
        let LazyState::Uninit(initializer) = std::mem::replace(&mut *state, LazyState::Poisoned)
        else {
            unreachable!()
        };

        let value = evaluate(initializer);
        *state = LazyState::Init(value);
    }

    /// Returns a reference to the initializer while the value is still pending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::control::Lazy;
    ///
    /// let lazy = Lazy::new_deferred("pending");
    /// assert_eq!(lazy.pending().as_deref(), Some(&"pending"));
    /// let _ = lazy.force_with(str::len);
    /// assert!(lazy.pending().is_none());
    /// ```
    pub fn pending(&self) -> Option<Ref<'_, F>> {
        let state = self.state.borrow();
        if matches!(&*state, LazyState::Uninit(_)) {
            Some(Ref::map(state, |state| match state {
                LazyState::Uninit(initializer) => initializer,
                _ => unreachable!(),
            }))
        } else {
            None
        }
    }

    /// Consumes the Lazy and returns its state without running anything.
    #[inline]
    pub fn into_state(self) -> LazyState<T, F> {
        self.state.into_inner()
    }

    /// Creates a lazy value that is already initialized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::control::Lazy;
    ///
    /// let lazy: Lazy<i32, fn() -> i32> = Lazy::new_with_value(42);
    /// assert!(lazy.is_initialized());
    /// ```
    #[inline]
    pub const fn new_with_value(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Init(value)),
        }
    }

    /// Returns a reference to the value if it has been computed.
    ///
    /// Unlike [`force`](Lazy::force), this never triggers initialization.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 42);
    /// assert!(lazy.get().is_none());
    ///
    /// let _ = lazy.force();
    /// assert_eq!(lazy.get().as_deref(), Some(&42));
    /// ```
    pub fn get(&self) -> Option<Ref<'_, T>> {
        let state = self.state.borrow();
        if matches!(&*state, LazyState::Init(_)) {
            Some(Ref::map(state, |state| match state {
                LazyState::Init(value) => value,
                _ => unreachable!(),
            }))
        } else {
            None
        }
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Returns whether the lazy value has been poisoned.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }

    /// Consumes the Lazy and returns the computed value, if there is one.
    ///
    /// Unlike forcing, this never runs the initializer: an unevaluated or
    /// poisoned value yields `None`. Streams rely on this to tear down long
    /// chains of cells without evaluating the parts nobody pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterw::control::Lazy;
    ///
    /// let pending = Lazy::new(|| 42);
    /// assert_eq!(pending.into_forced(), None);
    ///
    /// let forced = Lazy::new(|| 42);
    /// let _ = forced.force();
    /// assert_eq!(forced.into_forced(), Some(42));
    /// ```
    pub fn into_forced(self) -> Option<T> {
        match self.into_state() {
            LazyState::Init(value) => Some(value),
            LazyState::Uninit(_) | LazyState::Poisoned => None,
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn test_lazy_is_not_evaluated_on_creation() {
        let lazy = Lazy::new(|| 42);
        assert!(!lazy.is_initialized());
    }

    #[rstest]
    fn test_lazy_force_computes_value() {
        let lazy = Lazy::new(|| 42);
        assert_eq!(*lazy.force(), 42);
        assert!(lazy.is_initialized());
    }

    #[rstest]
    fn test_lazy_memoization() {
        let call_count = Cell::new(0);
        let lazy = Lazy::new(|| {
            call_count.set(call_count.get() + 1);
            42
        });

        let _ = lazy.force();
        let _ = lazy.force();
        assert_eq!(call_count.get(), 1);
    }

    #[rstest]
    fn test_lazy_poisoned_after_panic() {
        let lazy: Lazy<i32, _> = Lazy::new(|| panic!("initialization failed"));
        let result = catch_unwind(AssertUnwindSafe(|| *lazy.force()));
        assert!(result.is_err());
        assert!(lazy.is_poisoned());
        assert_eq!(lazy.into_forced(), None);
    }

    #[rstest]
    fn test_into_forced_does_not_run_initializer() {
        let call_count = Cell::new(0);
        let lazy = Lazy::new(|| {
            call_count.set(call_count.get() + 1);
            1
        });
        assert_eq!(lazy.into_forced(), None);
        assert_eq!(call_count.get(), 0);
    }

    #[rstest]
    fn test_deferred_initializer_is_visible_until_forced() {
        let lazy = Lazy::new_deferred(vec![1, 2, 3]);
        assert_eq!(lazy.pending().map(|pending| pending.len()), Some(3));
        assert_eq!(*lazy.force_with(|elements| elements.iter().sum::<i32>()), 6);
        assert!(lazy.pending().is_none());
        assert!(matches!(lazy.into_state(), LazyState::Init(6)));
    }

    #[rstest]
    fn test_debug_shows_state() {
        let lazy = Lazy::new(|| 7);
        assert_eq!(format!("{lazy:?}"), "Lazy(\"<uninit>\")");
        let _ = lazy.force();
        assert_eq!(format!("{lazy:?}"), "Lazy(7)");
    }
}
