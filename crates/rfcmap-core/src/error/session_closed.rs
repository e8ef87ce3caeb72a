use super::Error;

/// Error when a closed session is used.
#[derive(Debug)]
pub(super) struct SessionClosedError;

impl std::error::Error for SessionClosedError {}

impl core::fmt::Display for SessionClosedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("session is closed")
    }
}

impl Error {
    /// Creates a session closed error.
    pub fn session_closed() -> Error {
        Error::from(super::ErrorKind::SessionClosed(SessionClosedError))
    }

    /// Returns `true` if this error is a session closed error.
    pub fn is_session_closed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SessionClosed(_))
    }
}
