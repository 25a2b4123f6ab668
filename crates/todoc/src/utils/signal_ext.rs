//! Extension trait for Dioxus signals.
//!
//! Mutating a signal's value and getting something back out of the mutation
//! (a new toast id, a transition result) otherwise takes a write guard held
//! in a separate statement:
//!
//! ```ignore
//! let id = {
//!     let mut queue = toasts.write();
//!     queue.error("Login failed")
//! };
//! ```
//!
//! With `SignalExt`:
//!
//! ```ignore
//! let id = toasts.mutate(|queue| queue.error("Login failed"));
//! ```

use dioxus::prelude::*;

/// Mutation helpers for `Signal<T>`.
pub trait SignalExt<T: 'static> {
    /// Mutate the value in place and return whatever the closure returns.
    ///
    /// Subscribers are notified once, when the write guard drops.
    fn mutate<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

impl<T: 'static> SignalExt<T> for Signal<T> {
    fn mutate<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.write();
        f(&mut guard)
    }
}

// SignalExt is a thin wrapper over Signal::write and needs a Dioxus runtime to
// exercise; it is covered through the components that use it.
