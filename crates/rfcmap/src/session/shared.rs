use super::Session;
use crate::{Error, Mapped, Result, Structure};

use std::sync::{Arc, Mutex, MutexGuard, TryLockError};
use uuid::Uuid;

/// A session that can be reached from several places, such as the
/// current-session registry.
///
/// Every operation takes the session for its whole duration. An operation
/// that finds the session busy fails with a concurrent use error instead of
/// waiting.
#[derive(Debug, Clone)]
pub struct SharedSession {
    id: Uuid,
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> SharedSession {
        SharedSession {
            id: session.id(),
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns `true` unless the session has been closed. A session that is
    /// busy is open.
    pub fn is_open(&self) -> bool {
        match self.inner.try_lock() {
            Ok(session) => session.is_open(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().is_open(),
            Err(TryLockError::WouldBlock) => true,
        }
    }

    pub fn execute<T: Mapped>(&self, call: &mut T) -> Result<()> {
        self.with(|session| session.execute(call))
    }

    pub fn execute_detached<T: Mapped>(&self, call: &T) -> Result<T> {
        self.with(|session| session.execute_detached(call))
    }

    pub fn invoke(&self, function: &str, parameters: Structure) -> Result<Structure> {
        self.with(|session| session.invoke(function, parameters))
    }

    pub fn close(&self) -> Result<()> {
        self.with(|session| {
            session.close();
            Ok(())
        })
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> Result<R>) -> Result<R> {
        let mut session = self.lock()?;
        f(&mut session)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Session>> {
        match self.inner.try_lock() {
            Ok(session) => Ok(session),
            // A panic during a call leaves the session itself consistent;
            // the connection is still owned and released on close.
            Err(TryLockError::Poisoned(poisoned)) => Ok(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => Err(Error::concurrent_use()),
        }
    }
}
