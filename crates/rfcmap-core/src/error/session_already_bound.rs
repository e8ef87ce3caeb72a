use super::Error;

/// Error when binding a session to a thread that already has an open bound session.
#[derive(Debug)]
pub(super) struct SessionAlreadyBoundError;

impl std::error::Error for SessionAlreadyBoundError {}

impl core::fmt::Display for SessionAlreadyBoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("a session is already bound to the current thread")
    }
}

impl Error {
    /// Creates a session already bound error.
    pub fn session_already_bound() -> Error {
        Error::from(super::ErrorKind::SessionAlreadyBound(SessionAlreadyBoundError))
    }

    /// Returns `true` if this error is a session already bound error.
    pub fn is_session_already_bound(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SessionAlreadyBound(_))
    }
}
