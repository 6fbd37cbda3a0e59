//! Write-once argument capture cells for mock based unit tests.
//!
//! A capture point is created with [`capture`] and consists of two narrow
//! sides that share a single value slot: a producer ([`Capture`]) that is
//! installed wherever the mocking framework accepts a single-argument
//! callback, matcher or action, and a read-only handle ([`CaptureHandle`])
//! that the assertion phase of the test reads the received argument from.
//!
//! ```
//! use argcap::capture;
//!
//! let (cap, handle) = capture();
//! let callback = cap.into_fn();
//!
//! // Installed into a mock, invoked by the code under test.
//! callback(42);
//!
//! assert_eq!(handle.value(), 42);
//! ```
//!
//! The slot is single-assignment: reading it before the callback fired
//! fails with [`CaptureError::NotSet`], invoking the callback a second
//! time fails with [`CaptureError::AlreadySet`]. Both are test authoring
//! errors and abort the enclosing test case.

pub mod action;
pub mod capture;
pub mod error;
pub mod matcher;

pub use action::{Action, RepeatableAction};
pub use capture::{capture, Capture, CaptureHandle};
pub use error::CaptureError;
pub use matcher::Matcher;
