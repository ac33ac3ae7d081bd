use http::StatusCode;
use serde_json::Value;

use crate::ErrorKind;

/// Trait for errors that can be classified into an error record
///
/// Implemented by the domain errors in this crate and by any downstream
/// error enum that knows its own status and kind. The dispatch layer
/// projects these four accessors into an `ErrorRecord`, keeping error
/// types decoupled from any web framework.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable classification tag
    fn error_type(&self) -> ErrorKind;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Structured detail, opaque to the dispatcher
    fn detail(&self) -> Option<Value> {
        None
    }
}
