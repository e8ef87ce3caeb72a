use super::{CurrentSessions, Session, SharedSession};
use crate::{mapping, Builder, Connector, Error, Mapped, Properties, Result, Structure};

use rfcmap_core::{MappedType, Metadata};

use std::sync::Arc;

/// Configuration shared by a manager and all of its sessions.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) metadata: Metadata,
    pub(crate) properties: Properties,
    pub(crate) connector: Box<dyn Connector>,
}

/// Creates sessions and holds the resolved configuration.
///
/// A manager is built once with [`SessionManager::builder`] and is cheap to
/// clone. Its configuration never changes after it is built.
#[derive(Debug, Clone)]
pub struct SessionManager {
    shared: Arc<Shared>,
    current: Arc<CurrentSessions>,
}

impl SessionManager {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(shared: Shared) -> SessionManager {
        SessionManager {
            shared: Arc::new(shared),
            current: Arc::new(CurrentSessions::new()),
        }
    }

    /// Opens a new connection and returns a session owning it.
    pub fn open_session(&self) -> Result<Session> {
        let properties = self.shared.properties.namespace("connection");

        let connection = self
            .shared
            .connector
            .connect(&properties)
            .map_err(Error::connection)?;

        let session = Session::new(self.shared.clone(), connection);
        tracing::debug!(session = %session.id(), "session opened");
        Ok(session)
    }

    /// Binds `session` to the calling thread. See [`CurrentSessions::bind`].
    pub fn bind_current(&self, session: Session) -> Result<SharedSession> {
        self.current.bind(session)
    }

    /// Opens a session and binds it to the calling thread.
    pub fn open_current(&self) -> Result<SharedSession> {
        self.bind_current(self.open_session()?)
    }

    /// Returns the open session bound to the calling thread.
    pub fn current_session(&self) -> Result<SharedSession> {
        self.current.current()
    }

    /// Removes the calling thread's binding without closing the session.
    pub fn unbind_current(&self) -> Option<SharedSession> {
        self.current.unbind()
    }

    /// Returns the resolved metadata of `T`.
    pub fn resolve<T: Mapped>(&self) -> Result<Arc<MappedType>> {
        self.shared.metadata.resolve(T::type_ref())
    }

    /// Builds the call structure for `object` without executing it.
    pub fn build<T: Mapped>(&self, object: &T) -> Result<Structure> {
        let mapped = self.resolve::<T>()?;
        mapping::build_object(&mapped, object)
    }

    /// Maps a call structure to a new `T`.
    pub fn map<T: Mapped>(&self, structure: &Structure) -> Result<T> {
        let mapped = self.resolve::<T>()?;
        mapping::map_object(structure, &mapped)
    }

    /// The resolved configuration properties.
    pub fn properties(&self) -> &Properties {
        &self.shared.properties
    }

    pub fn metadata(&self) -> &Metadata {
        &self.shared.metadata
    }
}
