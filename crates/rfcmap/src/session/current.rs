use super::{Session, SharedSession};
use crate::{Error, Result};

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::thread::{self, ThreadId};

type Bound = Mutex<HashMap<ThreadId, SharedSession>>;

thread_local! {
    /// The registries this thread has bound a session in.
    static BINDINGS: RefCell<Vec<Binding>> = const { RefCell::new(Vec::new()) };
}

/// The registry of sessions bound to threads.
///
/// Each thread has at most one bound session. Binding is explicit: nothing is
/// bound until [`bind`](CurrentSessions::bind) is called. A binding ends when
/// it is removed with [`unbind`](CurrentSessions::unbind), when the bound
/// session is closed, or when its thread exits. A thread that exits with a
/// bound session closes that session.
#[derive(Debug, Default)]
pub struct CurrentSessions {
    bound: Arc<Bound>,
}

impl CurrentSessions {
    pub fn new() -> CurrentSessions {
        CurrentSessions::default()
    }

    /// Binds `session` to the calling thread.
    ///
    /// Fails if the thread already has an open bound session; `session` is
    /// dropped, and so closed, in that case.
    pub fn bind(&self, session: Session) -> Result<SharedSession> {
        let thread = thread::current().id();

        let shared = {
            let mut bound = lock(&self.bound);

            if bound.get(&thread).is_some_and(SharedSession::is_open) {
                return Err(Error::session_already_bound());
            }

            let shared = SharedSession::new(session);
            bound.insert(thread, shared.clone());
            shared
        };

        tracing::debug!(session = %shared.id(), ?thread, "session bound to thread");
        self.release_on_exit(thread);
        Ok(shared)
    }

    /// Returns the open session bound to the calling thread.
    pub fn current(&self) -> Result<SharedSession> {
        let thread = thread::current().id();
        let mut bound = lock(&self.bound);

        match bound.get(&thread) {
            Some(session) if session.is_open() => Ok(session.clone()),
            Some(_) => {
                bound.remove(&thread);
                Err(Error::no_current_session())
            }
            None => Err(Error::no_current_session()),
        }
    }

    /// Removes the calling thread's binding and returns the session. The
    /// session is not closed.
    pub fn unbind(&self) -> Option<SharedSession> {
        lock(&self.bound).remove(&thread::current().id())
    }

    /// The number of threads with a binding, open or not.
    pub fn len(&self) -> usize {
        lock(&self.bound).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn release_on_exit(&self, thread: ThreadId) {
        let registered = BINDINGS.try_with(|bindings| {
            let mut bindings = bindings.borrow_mut();
            bindings.retain(|binding| binding.bound.strong_count() > 0);

            if !bindings
                .iter()
                .any(|binding| std::ptr::eq(binding.bound.as_ptr(), Arc::as_ptr(&self.bound)))
            {
                bindings.push(Binding {
                    thread,
                    bound: Arc::downgrade(&self.bound),
                });
            }
        });

        if registered.is_err() {
            tracing::debug!(?thread, "thread is exiting; binding is not released on exit");
        }
    }
}

/// Ends a thread's binding in one registry when the thread exits.
struct Binding {
    thread: ThreadId,
    bound: Weak<Bound>,
}

impl Drop for Binding {
    fn drop(&mut self) {
        let Some(bound) = self.bound.upgrade() else {
            return;
        };

        let Some(session) = lock(&bound).remove(&self.thread) else {
            return;
        };

        tracing::debug!(session = %session.id(), thread = ?self.thread, "bound thread exited");

        if let Err(err) = session.close() {
            // Another thread is using the session; it is closed when the
            // last handle is dropped.
            tracing::debug!(session = %session.id(), %err, "bound session left open");
        }
    }
}

fn lock(bound: &Bound) -> MutexGuard<'_, HashMap<ThreadId, SharedSession>> {
    bound
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
