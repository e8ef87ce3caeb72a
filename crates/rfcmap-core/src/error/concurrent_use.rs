use super::Error;

/// Error when a shared session is entered while another call is in flight on it.
#[derive(Debug)]
pub(super) struct ConcurrentUseError;

impl std::error::Error for ConcurrentUseError {}

impl core::fmt::Display for ConcurrentUseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("session is already executing a call")
    }
}

impl Error {
    /// Creates a concurrent use error.
    pub fn concurrent_use() -> Error {
        Error::from(super::ErrorKind::ConcurrentUse(ConcurrentUseError))
    }

    /// Returns `true` if this error is a concurrent use error.
    pub fn is_concurrent_use(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConcurrentUse(_))
    }
}
