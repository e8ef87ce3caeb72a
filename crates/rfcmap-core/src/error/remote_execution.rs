use super::Error;
use crate::transport::TransportError;

/// Error when the remote system or the transport fails to execute a call.
///
/// The transport's diagnostics are kept as reported. No retry is attempted.
#[derive(Debug)]
pub(super) struct RemoteExecutionError {
    pub(super) function: Box<str>,
    pub(super) transport: TransportError,
}

impl std::error::Error for RemoteExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.transport)
    }
}

impl core::fmt::Display for RemoteExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "remote call `{}` failed: {}", self.function, self.transport)
    }
}

impl Error {
    /// Creates an error for a failed execution of the remote function `function`.
    pub fn remote_execution(function: &str, transport: TransportError) -> Error {
        Error::from(super::ErrorKind::RemoteExecution(RemoteExecutionError {
            function: function.into(),
            transport,
        }))
    }

    /// Returns `true` if this error is a remote execution error.
    pub fn is_remote_execution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RemoteExecution(_))
    }

    /// The remote function name, for remote execution errors.
    pub fn remote_function(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::RemoteExecution(err) => Some(&err.function),
            _ => None,
        }
    }

    /// The transport's error, for remote execution and connection errors.
    pub fn transport(&self) -> Option<&TransportError> {
        match self.kind() {
            super::ErrorKind::RemoteExecution(err) => Some(&err.transport),
            super::ErrorKind::Connection(err) => Some(&err.transport),
            _ => None,
        }
    }
}
