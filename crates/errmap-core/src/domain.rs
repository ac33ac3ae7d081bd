use std::fmt;

use http::StatusCode;
use serde_json::Value;

use crate::{ErrorKind, HttpError};

/// Identity of a domain error, fixing its kind and default status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Internal,
    Authorization,
    BadRequest,
    AccessDenied,
    NotFound,
}

impl Variant {
    /// Kind tag every error of this variant carries
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::Internal => ErrorKind::InternalError,
            Self::Authorization => ErrorKind::AuthorizationFailed,
            Self::BadRequest => ErrorKind::BadRequest,
            Self::AccessDenied => ErrorKind::AccessDenied,
            Self::NotFound => ErrorKind::NotFound,
        }
    }

    /// Status code used when the caller supplies none
    pub const fn default_code(self) -> StatusCode {
        self.kind().default_status()
    }
}

/// A typed failure raised by application logic
///
/// Only code, message and detail can be overridden; the kind follows
/// from the variant and has no setter.
///
/// ```
/// use errmap_core::{DomainError, ErrorKind, HttpError};
/// use http::StatusCode;
///
/// let err = DomainError::authorization()
///     .with_code(StatusCode::FORBIDDEN)
///     .with_message("You shall not pass");
///
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
/// assert_eq!(err.error_type(), ErrorKind::AuthorizationFailed);
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "Error: code: {}, message: {}, detail: {}",
    .code.as_u16(),
    .message.as_deref().unwrap_or(.variant.kind().as_str()),
    DetailDisplay(&.detail)
)]
pub struct DomainError {
    variant: Variant,
    code: StatusCode,
    message: Option<String>,
    detail: Option<Value>,
}

impl DomainError {
    /// Create an error with the variant's defaults and no detail
    pub const fn new(variant: Variant) -> Self {
        Self {
            variant,
            code: variant.default_code(),
            message: None,
            detail: None,
        }
    }

    pub const fn internal() -> Self {
        Self::new(Variant::Internal)
    }

    pub const fn authorization() -> Self {
        Self::new(Variant::Authorization)
    }

    pub const fn bad_request() -> Self {
        Self::new(Variant::BadRequest)
    }

    pub const fn access_denied() -> Self {
        Self::new(Variant::AccessDenied)
    }

    pub const fn not_found() -> Self {
        Self::new(Variant::NotFound)
    }

    /// Override the status code
    #[must_use]
    pub fn with_code(mut self, code: StatusCode) -> Self {
        self.code = code;
        self
    }

    /// Override the client-facing message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach structured detail
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<Value>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Message as supplied, or the kind tag when none was given
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_else(|| self.variant.kind().as_str())
    }

    pub const fn detail_ref(&self) -> Option<&Value> {
        self.detail.as_ref()
    }
}

impl HttpError for DomainError {
    fn status_code(&self) -> StatusCode {
        self.code
    }

    fn error_type(&self) -> ErrorKind {
        self.variant.kind()
    }

    fn client_message(&self) -> String {
        self.message().to_owned()
    }

    fn detail(&self) -> Option<Value> {
        self.detail.clone()
    }
}

/// Renders absent detail as `null`, matching the wire body
struct DetailDisplay<'a>(&'a Option<Value>);

impl fmt::Display for DetailDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("null"),
        }
    }
}
