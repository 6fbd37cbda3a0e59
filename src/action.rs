//! The [`action`](self) module contains the action seam a capture point is
//! installed through when the consuming framework expects a "do-callback"
//! style action for a mocked invocation.

use crate::capture::Capture;

/// Trait that defines an action that can only be executed once.
///
/// This is similar to [`FnOnce`] of the standard library.
pub trait Action<T, R> {
    /// Execute the action with the passed arguments.
    fn exec(self, args: T) -> R;
}

impl<X, T, R> Action<T, R> for X
where
    X: FnOnce(T) -> R,
{
    fn exec(self, args: T) -> R {
        self(args)
    }
}

/// Like [`Action`] but this action may be called repeatedly.
///
/// This is similar to [`FnMut`] of the standard library.
pub trait RepeatableAction<T, R> {
    /// Execute the action with the passed arguments.
    fn exec(&mut self, args: T) -> R;
}

impl<X, T, R> RepeatableAction<T, R> for X
where
    X: FnMut(T) -> R,
{
    fn exec(&mut self, args: T) -> R {
        self(args)
    }
}

/// A capture point used as an action stores the argument it is executed
/// with.
impl<T> Action<T, ()> for Capture<T> {
    fn exec(self, args: T) {
        self.set(args);
    }
}

/// A capture point used as a repeatable action stores the argument of the
/// first execution.
///
/// # Panics
/// Any further execution panics, the mock was invoked more often than the
/// test expected.
impl<T> RepeatableAction<T, ()> for Capture<T> {
    fn exec(&mut self, args: T) {
        self.set(args);
    }
}
