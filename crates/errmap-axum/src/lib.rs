//! axum boundary for errmap
//!
//! Handlers return `Result<T, Raised>`. The [`ErrorBoundary`] layer
//! hands every raised error, extractor rejection, unknown route and panic
//! to the shared [`ErrorDispatcher`] once, and writes the resulting
//! record as `{ "error", "message", "detail" }`.
//!
//! [`ErrorDispatcher`]: errmap_dispatch::ErrorDispatcher

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod boundary;
mod extract;
mod middleware;
mod panic;
mod raised;
mod response;

pub use boundary::{ErrorBoundary, common_handlers};
pub use extract::{ValidJson, ValidQuery, json_rejection_handler, query_rejection_handler};
pub use middleware::handle_errors;
pub use panic::{PanicResponder, Panicked};
pub use raised::Raised;
pub use response::error_response;
