//! The [`matcher`](self) module contains the matcher seam a capture point
//! is installed through when the consuming framework expects an argument
//! matcher instead of a plain callback.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::capture::Capture;

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. A capture point implements this trait so it can sit
/// anywhere an argument matcher is accepted.
pub trait Matcher<T> {
    /// Returns `true` if the passed `value` matches the expectations,
    /// `false` otherwise.
    fn matches(&self, value: &T) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

/// A capture point used as a matcher records the argument and accepts it
/// unconditionally.
///
/// # Panics
/// [`matches`](Matcher::matches) panics if the cell already holds a value,
/// the mock was invoked more often than the test expected.
impl<T> Matcher<T> for Capture<T>
where
    T: Clone,
{
    fn matches(&self, value: &T) -> bool {
        self.set(value.clone());

        true
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "capture")
    }
}

/// Create a [`Filtered`] capture that only records arguments accepted by
/// the `inner` matcher.
pub fn filtered<T, M>(capture: Capture<T>, inner: M) -> Filtered<T, M> {
    Filtered { capture, inner }
}

/// Capture point guarded by an inner matcher.
///
/// Arguments are matched against `inner` first and are recorded only when
/// accepted. The verdict of `inner` is passed through, so a rejected
/// argument is reported as a mismatch by the consuming framework instead
/// of being captured.
#[must_use]
pub struct Filtered<T, M> {
    capture: Capture<T>,
    inner: M,
}

impl<T, M> Matcher<T> for Filtered<T, M>
where
    T: Clone,
    M: Matcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        if !self.inner.matches(value) {
            return false;
        }

        self.capture.set(value.clone());

        true
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "capture if ")?;
        self.inner.fmt(f)
    }
}

/// Create a [`Closure`] matcher from the passed predicate.
pub fn closure<F>(f: F) -> Closure<F> {
    Closure(f)
}

/// Matcher that accepts any value the wrapped predicate returns `true` for.
#[must_use]
#[derive(Debug)]
pub struct Closure<F>(pub F);

impl<T, F> Matcher<T> for Closure<F>
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &T) -> bool {
        self.0(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "closure")
    }
}

/// Create an [`Eq`] matcher that accepts values equal to `value`.
pub fn eq<T>(value: T) -> Eq<T> {
    Eq(value)
}

/// Matcher that accepts values equal to the wrapped one.
#[must_use]
#[derive(Debug)]
pub struct Eq<T>(pub T);

impl<T, X> Matcher<X> for Eq<T>
where
    T: PartialEq<X> + Display,
{
    fn matches(&self, value: &X) -> bool {
        self.0.eq(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Eq({})", self.0)
    }
}

/// Create a [`Ne`] matcher that accepts values not equal to `value`.
pub fn ne<T>(value: T) -> Ne<T> {
    Ne(value)
}

/// Matcher that accepts values not equal to the wrapped one.
#[must_use]
#[derive(Debug)]
pub struct Ne<T>(pub T);

impl<T, X> Matcher<X> for Ne<T>
where
    T: PartialEq<X> + Display,
{
    fn matches(&self, value: &X) -> bool {
        self.0.ne(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Ne({})", self.0)
    }
}
