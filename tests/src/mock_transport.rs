use rfcmap::{Connection, Connector, Properties, Structure, TransportError};

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering::SeqCst};
use std::sync::{Arc, Mutex};

type Reply = dyn Fn(&str, &Structure) -> Result<Structure, TransportError> + Send + Sync;

/// A transport that answers calls from a script and records everything it
/// is asked to do.
///
/// Clones share the script and the records, so a test keeps one clone to
/// inspect what the session manager did with the other.
#[derive(Clone)]
pub struct MockConnector {
    state: Arc<State>,
}

struct State {
    reply: Mutex<Arc<Reply>>,

    /// When set, `connect` fails with this code and message
    refuse: Mutex<Option<(String, String)>>,

    log: CallLog,

    /// Connection properties received by the latest `connect`
    properties: Mutex<Option<Properties>>,

    connects: AtomicUsize,
    closes: AtomicUsize,
}

/// One recorded remote call.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// The connection that executed the call, numbered from 1
    pub connection: usize,
    pub function: String,
    pub parameters: Structure,
}

/// The calls received by a [`MockConnector`], in order.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl MockConnector {
    /// A connector whose calls all reply with an empty structure.
    pub fn new() -> MockConnector {
        let reply: Arc<Reply> = Arc::new(|_: &str, _: &Structure| Ok(Structure::new()));

        MockConnector {
            state: Arc::new(State {
                reply: Mutex::new(reply),
                refuse: Mutex::new(None),
                log: CallLog::default(),
                properties: Mutex::new(None),
                connects: AtomicUsize::new(0),
                closes: AtomicUsize::new(0),
            }),
        }
    }

    /// Answers every call with `reply`.
    pub fn reply_with<F>(&self, reply: F) -> &Self
    where
        F: Fn(&str, &Structure) -> Result<Structure, TransportError> + Send + Sync + 'static,
    {
        *self.state.reply.lock().unwrap() = Arc::new(reply);
        self
    }

    /// Answers every call with a copy of `structure`.
    pub fn reply(&self, structure: Structure) -> &Self {
        self.reply_with(move |_, _| Ok(structure.clone()))
    }

    /// Makes every following `connect` fail with the given diagnostics.
    pub fn refuse(&self, code: &str, message: &str) -> &Self {
        *self.state.refuse.lock().unwrap() = Some((code.to_string(), message.to_string()));
        self
    }

    pub fn log(&self) -> CallLog {
        self.state.log.clone()
    }

    /// Properties passed to the latest `connect`.
    pub fn last_properties(&self) -> Option<Properties> {
        self.state.properties.lock().unwrap().clone()
    }

    /// Number of connections opened.
    pub fn connects(&self) -> usize {
        self.state.connects.load(SeqCst)
    }

    /// Number of connections released.
    pub fn closes(&self) -> usize {
        self.state.closes.load(SeqCst)
    }

    /// Number of connections opened and not yet released.
    pub fn open_connections(&self) -> usize {
        self.connects() - self.closes()
    }
}

impl Default for MockConnector {
    fn default() -> MockConnector {
        MockConnector::new()
    }
}

impl fmt::Debug for MockConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockConnector")
            .field("connects", &self.connects())
            .field("closes", &self.closes())
            .field("calls", &self.state.log.len())
            .finish()
    }
}

impl Connector for MockConnector {
    fn connect(&self, properties: &Properties) -> Result<Box<dyn Connection>, TransportError> {
        *self.state.properties.lock().unwrap() = Some(properties.clone());

        if let Some((code, message)) = self.state.refuse.lock().unwrap().clone() {
            return Err(TransportError::new(code, message));
        }

        let id = self.state.connects.fetch_add(1, SeqCst) + 1;

        Ok(Box::new(MockConnection {
            id,
            state: self.state.clone(),
        }))
    }
}

struct MockConnection {
    id: usize,
    state: Arc<State>,
}

impl fmt::Debug for MockConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockConnection").field("id", &self.id).finish()
    }
}

impl Connection for MockConnection {
    fn invoke(
        &mut self,
        function: &str,
        parameters: Structure,
    ) -> Result<Structure, TransportError> {
        self.state.log.push(Invocation {
            connection: self.id,
            function: function.to_string(),
            parameters: parameters.clone(),
        });

        // Cloned out so a blocking script does not hold the lock.
        let reply = self.state.reply.lock().unwrap().clone();
        reply(function, &parameters)
    }

    fn close(self: Box<Self>) {
        self.state.closes.fetch_add(1, SeqCst);
    }
}

impl CallLog {
    fn push(&self, invocation: Invocation) {
        self.calls.lock().unwrap().push(invocation);
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    /// All calls so far.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Invocation> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Number of calls of `function`.
    pub fn count(&self, function: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.function == function)
            .count()
    }
}
