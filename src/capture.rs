//! The [`capture`](self) module contains the capture cell itself, a
//! write-once, read-many value slot that is shared between a producer
//! callback and a read-only handle.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::CaptureError;

/// Create a new capture point.
///
/// Returns a [`Capture`] that is installed at the place the mocking
/// framework invokes with the argument, and a [`CaptureHandle`] that the
/// assertion phase of the test reads the argument back from. Both sides
/// refer to the same underlying slot; every call to [`capture`] yields an
/// independent cell.
#[must_use]
pub fn capture<T>() -> (Capture<T>, CaptureHandle<T>) {
    let slot = Arc::new(Mutex::new(Slot::Empty));

    (
        Capture { slot: slot.clone() },
        CaptureHandle { slot },
    )
}

/// State of a capture cell.
///
/// The cell is a two-state machine: `Empty` until the producer callback
/// fires, `Filled` afterwards. `Filled` is terminal, there is no reset.
enum Slot<T> {
    Empty,
    Filled(T),
}

impl<T> Slot<T> {
    fn fill(&mut self, value: T) -> Result<(), CaptureError> {
        match self {
            Self::Filled(_) => Err(CaptureError::AlreadySet),
            Self::Empty => {
                *self = Self::Filled(value);

                Ok(())
            }
        }
    }

    fn get(&self) -> Result<&T, CaptureError> {
        match self {
            Self::Empty => Err(CaptureError::NotSet),
            Self::Filled(value) => Ok(value),
        }
    }
}

/// Producer side of a capture point.
///
/// Stores the argument of one mocked invocation into the shared slot. The
/// producer exposes no read access, the captured value is inspected
/// through the [`CaptureHandle`] returned by the same [`capture`] call.
#[must_use]
pub struct Capture<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Capture<T> {
    /// Store `value` into the cell.
    ///
    /// # Errors
    /// Returns [`CaptureError::AlreadySet`] if the cell already holds a
    /// value. The value stored first is retained.
    pub fn try_set(&self, value: T) -> Result<(), CaptureError> {
        self.slot.lock().fill(value)
    }

    /// Store `value` into the cell.
    ///
    /// # Panics
    /// Panics if the cell already holds a value, failing the enclosing
    /// test case.
    pub fn set(&self, value: T) {
        if let Err(err) = self.try_set(value) {
            panic!("{err}");
        }
    }

    /// Convert the producer into a plain single-argument callback that
    /// can be passed to any framework expecting a `Fn(T)` action.
    ///
    /// Each invocation of the returned closure behaves like [`set`](Self::set).
    pub fn into_fn(self) -> impl Fn(T) {
        move |value| self.set(value)
    }
}

impl<T> Clone for Capture<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Debug for Capture<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Capture({})", slot_state(&self.slot))
    }
}

/// Read side of a capture point.
///
/// Exposes the value the producer callback received. Reading is idempotent,
/// once the cell is filled every read returns the same value.
#[must_use]
pub struct CaptureHandle<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> CaptureHandle<T> {
    /// Returns `true` if the producer callback has been invoked, `false`
    /// otherwise.
    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(&*self.slot.lock(), Slot::Filled(_))
    }

    /// Get a copy of the captured value.
    ///
    /// # Errors
    /// Returns [`CaptureError::NotSet`] if the producer callback has not
    /// been invoked yet.
    pub fn try_value(&self) -> Result<T, CaptureError>
    where
        T: Clone,
    {
        self.slot.lock().get().cloned()
    }

    /// Get a copy of the captured value.
    ///
    /// # Panics
    /// Panics if the producer callback has not been invoked yet, failing
    /// the enclosing test case.
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Run `f` on a borrow of the captured value.
    ///
    /// Useful for payload types that do not implement [`Clone`].
    ///
    /// # Errors
    /// Returns [`CaptureError::NotSet`] if the producer callback has not
    /// been invoked yet.
    pub fn with<R, F>(&self, f: F) -> Result<R, CaptureError>
    where
        F: FnOnce(&T) -> R,
    {
        let slot = self.slot.lock();

        slot.get().map(f)
    }
}

impl<T> Clone for CaptureHandle<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Debug for CaptureHandle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "CaptureHandle({})", slot_state(&self.slot))
    }
}

fn slot_state<T>(slot: &Mutex<Slot<T>>) -> &'static str {
    match &*slot.lock() {
        Slot::Empty => "empty",
        Slot::Filled(_) => "set",
    }
}
