use std::fmt;
use std::sync::Arc;

use errmap_core::ErrorRecord;

use crate::{DiagnosticSink, ErrorHandler, Exception, TracingSink};

/// Client-visible message used for exceptions no handler claims
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FallbackMessage {
    /// The exception's own `Display` output
    #[default]
    Verbatim,
    /// A fixed string; the exception still reaches the diagnostic sink
    Generic(String),
}

/// Ordered handler chain that turns any exception into an error record
///
/// Handlers are tried in registration order and the first match wins,
/// regardless of how specific a later handler is. Register narrow
/// handlers before broad ones.
///
/// The chain is fixed once built, so a shared dispatcher can be used
/// from any number of tasks without locking.
pub struct ErrorDispatcher {
    handlers: Vec<Box<dyn ErrorHandler>>,
    fallback: FallbackMessage,
    sink: Arc<dyn DiagnosticSink>,
}

impl ErrorDispatcher {
    pub fn builder() -> ErrorDispatcherBuilder {
        ErrorDispatcherBuilder::default()
    }

    /// Convert an exception into a record
    ///
    /// Never fails: when no handler matches, the exception is reported to
    /// the diagnostic sink and a 500 `INTERNAL_ERROR` record is returned.
    pub fn get_error(&self, exception: &Exception) -> ErrorRecord {
        if let Some(handler) = self.handlers.iter().find(|h| h.matches(exception)) {
            tracing::debug!(handler = handler.name(), "error matched handler");
            return handler.convert(exception);
        }

        self.sink.unmatched(exception);

        let message = match &self.fallback {
            FallbackMessage::Verbatim => exception.to_string(),
            FallbackMessage::Generic(message) => message.clone(),
        };

        ErrorRecord::fallback(message)
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names in dispatch order
    pub fn handler_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.iter().map(|h| h.name())
    }

    pub const fn fallback_message(&self) -> &FallbackMessage {
        &self.fallback
    }
}

impl fmt::Debug for ErrorDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorDispatcher")
            .field("handlers", &self.handler_names().collect::<Vec<_>>())
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Collects handlers in order before the chain is frozen
#[derive(Default)]
pub struct ErrorDispatcherBuilder {
    handlers: Vec<Box<dyn ErrorHandler>>,
    fallback: FallbackMessage,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl ErrorDispatcherBuilder {
    /// Append a handler after those already registered
    #[must_use]
    pub fn handler(mut self, handler: impl ErrorHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Append several boxed handlers, keeping their order
    #[must_use]
    pub fn handlers(mut self, handlers: impl IntoIterator<Item = Box<dyn ErrorHandler>>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    #[must_use]
    pub fn fallback_message(mut self, fallback: FallbackMessage) -> Self {
        self.fallback = fallback;
        self
    }

    /// Replace the default `tracing` sink
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> ErrorDispatcher {
        ErrorDispatcher {
            handlers: self.handlers,
            fallback: self.fallback,
            sink: self.sink.unwrap_or_else(|| Arc::new(TracingSink)),
        }
    }
}
