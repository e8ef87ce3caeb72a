use std::fmt;

/// A failure reported by the remote transport.
///
/// The diagnostic code and message are kept exactly as the transport reported
/// them.
#[derive(Debug)]
pub struct TransportError {
    code: Option<String>,
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> TransportError {
        TransportError {
            code: Some(code.into()),
            message: message.into(),
            source: None,
        }
    }

    /// An error without a diagnostic code.
    pub fn message(message: impl Into<String>) -> TransportError {
        TransportError {
            code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying error.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> TransportError {
        self.source = Some(source.into());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn diagnostic(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{code}] {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
