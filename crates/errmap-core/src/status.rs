use http::StatusCode;
use serde_json::Value;

use crate::{ErrorKind, HttpError};

/// Transport-level failure known only by its status code
///
/// Raised by routing fallbacks and by handlers that want to reject a
/// request without picking a domain variant. The kind is derived from
/// the status through [`ErrorKind::for_status`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
pub struct HttpStatusError {
    status: StatusCode,
    message: Option<String>,
    detail: Option<Value>,
}

impl HttpStatusError {
    pub const fn new(status: StatusCode) -> Self {
        Self {
            status,
            message: None,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<Value>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl HttpError for HttpStatusError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_type(&self) -> ErrorKind {
        ErrorKind::for_status(self.status)
    }

    fn client_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| self.error_type().as_str().to_owned())
    }

    fn detail(&self) -> Option<Value> {
        self.detail.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_status() {
        let err = HttpStatusError::new(StatusCode::BAD_REQUEST).with_message("Invalid signature");
        assert_eq!(err.error_type(), ErrorKind::BadRequest);
        assert_eq!(err.client_message(), "Invalid signature");
        assert_eq!(err.detail(), None);
        assert_eq!(err.to_string(), "HTTP 400 Bad Request: Invalid signature");
    }

    #[test]
    fn message_defaults_to_kind() {
        let err = HttpStatusError::new(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.client_message(), "BAD_REQUEST");
    }
}
