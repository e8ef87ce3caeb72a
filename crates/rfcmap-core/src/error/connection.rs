use super::Error;
use crate::transport::TransportError;

/// Error when a connection to the remote system cannot be opened.
#[derive(Debug)]
pub(super) struct ConnectionError {
    pub(super) transport: TransportError,
}

impl std::error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.transport)
    }
}

impl core::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to open connection: {}", self.transport)
    }
}

impl Error {
    /// Creates a connection error from the connector's failure.
    pub fn connection(transport: TransportError) -> Error {
        Error::from(super::ErrorKind::Connection(ConnectionError { transport }))
    }

    /// Returns `true` if this error is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Connection(_))
    }
}
