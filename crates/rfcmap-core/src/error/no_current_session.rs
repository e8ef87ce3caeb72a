use super::Error;

/// Error when no open session is bound to the calling thread.
#[derive(Debug)]
pub(super) struct NoCurrentSessionError;

impl std::error::Error for NoCurrentSessionError {}

impl core::fmt::Display for NoCurrentSessionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no session is bound to the current thread")
    }
}

impl Error {
    /// Creates a no current session error.
    pub fn no_current_session() -> Error {
        Error::from(super::ErrorKind::NoCurrentSession(NoCurrentSessionError))
    }

    /// Returns `true` if this error is a no current session error.
    pub fn is_no_current_session(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoCurrentSession(_))
    }
}
