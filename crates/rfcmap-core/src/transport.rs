//! The remote transport capability.
//!
//! The transport is an external collaborator: it accepts a populated call
//! structure, executes the named remote function and returns the reply
//! structure. Its wire protocol is not part of this crate.

mod error;
pub use error::TransportError;

use crate::{Properties, Structure};

use std::fmt::Debug;

/// Opens connections to the remote system.
pub trait Connector: Debug + Send + Sync + 'static {
    /// Opens a connection using the `connection.*` properties, with the
    /// namespace prefix stripped.
    fn connect(&self, properties: &Properties) -> Result<Box<dyn Connection>, TransportError>;
}

/// One open connection to the remote system.
///
/// A connection serves one call at a time. It is released by [`close`],
/// which consumes it, so a connection cannot be released twice.
///
/// [`close`]: Connection::close
pub trait Connection: Debug + Send + 'static {
    /// Executes `function` with the given parameters and returns the reply.
    ///
    /// This blocks the calling thread until the remote system answers. Any
    /// timeout is the transport's responsibility and is reported as an error.
    fn invoke(&mut self, function: &str, parameters: Structure)
        -> Result<Structure, TransportError>;

    /// Releases the connection.
    fn close(self: Box<Self>);
}
