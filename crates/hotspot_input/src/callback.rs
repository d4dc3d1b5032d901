//! Callback abstraction for change handlers
//!
//! Instead of writing `Option<Box<dyn Fn(T) -> M>>` at every seam that reports upward,
//! owners store a `Callback<T, M>` which may or may not be set.
//!
//! # Examples
//!
//! ```
//! use hotspot_input::Callback;
//!
//! let on_change: Callback<Vec<u32>, usize> = Callback::new(|v: Vec<u32>| v.len());
//! assert_eq!(on_change.call(vec![1, 2, 3]), Some(3));
//!
//! let unset: Callback<Vec<u32>, usize> = Callback::none();
//! assert_eq!(unset.call(vec![1]), None);
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional handler.
///
/// # Type Parameters
///
/// - `T`: The input type for the callback
/// - `M`: The value returned by the callback (defaults to `()`)
pub struct Callback<T, M = ()> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(result)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
