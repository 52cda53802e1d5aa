use thiserror::Error;

/// Errors that may arise while operating on a [Stack](crate::Stack) or its
/// cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// The stack contains no elements.
    #[error("stack is empty")]
    Empty,
    /// A stack was requested with a backing capacity of zero.
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    /// The cursor sits outside the range of live elements, either before
    /// the first advance or after exhaustion.
    #[error("cursor is out of range")]
    CursorOutOfRange,
}
