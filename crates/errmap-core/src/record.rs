use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::{ErrorKind, HttpError};

/// Normalized failure handed to a response adapter
///
/// Status and kind are always present; detail may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub status: StatusCode,
    pub error_type: ErrorKind,
    pub message: String,
    pub detail: Option<Value>,
}

impl ErrorRecord {
    pub fn new(status: StatusCode, error_type: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status,
            error_type,
            message: message.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<Value>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Project any classifiable error field by field
    pub fn from_http_error<E: HttpError + ?Sized>(error: &E) -> Self {
        Self {
            status: error.status_code(),
            error_type: error.error_type(),
            message: error.client_message(),
            detail: error.detail(),
        }
    }

    /// Record returned when no handler claims a failure
    pub fn fallback(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::InternalError, message)
    }

    /// Wire body: exactly `error`, `message` and `detail`
    pub fn body(&self) -> ErrorBody<'_> {
        ErrorBody {
            error: self.error_type,
            message: &self.message,
            detail: self.detail.as_ref(),
        }
    }
}

/// Serializable view of a record; `detail` is written as `null` when absent
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: ErrorKind,
    pub message: &'a str,
    pub detail: Option<&'a Value>,
}
