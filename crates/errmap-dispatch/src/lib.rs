//! Ordered dispatch from raised errors to error records
//!
//! Any failure escaping a request handler arrives here as an
//! [`Exception`]. The [`ErrorDispatcher`] walks its handler chain in
//! registration order, lets the first matching handler convert the
//! exception, and falls back to a logged 500 `INTERNAL_ERROR` record
//! when nothing matches.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod dispatcher;
mod handler;
mod sink;

pub use dispatcher::{ErrorDispatcher, ErrorDispatcherBuilder, FallbackMessage};
pub use handler::{BaseErrorHandler, ErrorHandler, FnHandler, HttpErrorHandler, StatusErrorHandler};
pub use sink::{DiagnosticSink, TracingSink};

/// Anything raised while handling a request
pub type Exception = anyhow::Error;
