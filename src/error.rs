use thiserror::Error;

/// Error that is raised when the usage contract of a capture cell is
/// violated.
///
/// Both variants signal a mistake in the test itself rather than a runtime
/// condition to recover from. They are expected to propagate up and fail
/// the enclosing test case.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum CaptureError {
    /// The cell was read before the producer callback has ever been
    /// invoked. The collaborator method was never called, or the capture
    /// point was wired to the wrong call.
    #[error("no value has been captured yet")]
    NotSet,

    /// The producer callback was invoked a second time on the same cell.
    /// The mock was invoked more times than the test expected, or the
    /// cell was reused across unrelated invocations.
    #[error("a value has already been captured")]
    AlreadySet,
}
