mod current;
pub use current::CurrentSessions;

mod manager;
pub(crate) use manager::Shared;
pub use manager::SessionManager;

mod shared;
pub use shared::SharedSession;

use crate::{mapping, Connection, Error, Mapped, Result, Structure};

use rfcmap_core::MappedType;

use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// One open connection to the remote system.
///
/// A session executes calls one at a time and stays open until [`close`] is
/// called or it is dropped. Any call on a closed session fails with a
/// "session is closed" error.
///
/// [`close`]: Session::close
pub struct Session {
    id: Uuid,
    shared: Arc<Shared>,

    /// `None` once the session is closed
    connection: Option<Box<dyn Connection>>,
}

impl Session {
    pub(crate) fn new(shared: Arc<Shared>, connection: Box<dyn Connection>) -> Session {
        Session {
            id: Uuid::new_v4(),
            shared,
            connection: Some(connection),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    /// Executes the remote function `T` is mapped to, in place.
    ///
    /// The parameters are built from `call`, and the reply is merged back into
    /// the same instance: fields present in the reply are overwritten, fields
    /// missing from it keep the values that were sent.
    pub fn execute<T: Mapped>(&mut self, call: &mut T) -> Result<()> {
        let mapped = self.prepare::<T>()?;
        let parameters = mapping::build_object(&mapped, call)?;
        let reply = self.invoke(&mapped.remote_name, parameters)?;
        mapping::map_onto(&reply, &mapped, call)
    }

    /// Executes the remote function `T` is mapped to and returns the reply as
    /// a new instance, built from `T::default()`.
    pub fn execute_detached<T: Mapped>(&mut self, call: &T) -> Result<T> {
        let mapped = self.prepare::<T>()?;
        let parameters = mapping::build_object(&mapped, call)?;
        let reply = self.invoke(&mapped.remote_name, parameters)?;
        mapping::map_object(&reply, &mapped)
    }

    /// Sends an already built call structure to the remote function
    /// `function` and returns the reply.
    pub fn invoke(&mut self, function: &str, parameters: Structure) -> Result<Structure> {
        let Some(connection) = self.connection.as_mut() else {
            return Err(Error::session_closed());
        };

        tracing::debug!(session = %self.id, function, "executing remote call");
        tracing::trace!(session = %self.id, ?parameters, "call parameters");

        let reply = connection
            .invoke(function, parameters)
            .map_err(|err| Error::remote_execution(function, err))?;

        tracing::trace!(session = %self.id, ?reply, "call reply");
        tracing::debug!(session = %self.id, function, "remote call completed");

        Ok(reply)
    }

    /// Closes the session, releasing its connection. Closing a closed session
    /// does nothing.
    pub fn close(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.close();
            tracing::debug!(session = %self.id, "session closed");
        }
    }

    fn prepare<T: Mapped>(&self) -> Result<Arc<MappedType>> {
        if !self.is_open() {
            return Err(Error::session_closed());
        }

        let mapped = self.shared.metadata.resolve(T::type_ref())?;

        if !mapped.is_function() {
            return Err(Error::mapping_configuration(
                mapped.name,
                format!(
                    "only functions can be executed, but `{}` is a {}",
                    mapped.remote_name, mapped.kind
                ),
            ));
        }

        Ok(mapped)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("open", &self.is_open())
            .finish()
    }
}
