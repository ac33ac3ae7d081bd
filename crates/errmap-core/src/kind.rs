use http::StatusCode;
use serde::Serialize;

/// Canonical classification tag carried by every error record
///
/// The set is closed: new kinds are added here, never inferred from
/// free-form strings, so there is no `FromStr`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Caller is authenticated but not allowed to act on the resource
    AccessDenied,
    /// Caller could not be authenticated
    AuthorizationFailed,
    /// Request is malformed or semantically wrong
    BadRequest,
    /// Failure on the service side, including anything unclassified
    InternalError,
    /// Requested resource does not exist
    NotFound,
    /// Request body or parameters failed shape validation
    ValidationError,
}

impl ErrorKind {
    /// Wire form of the tag, e.g. `NOT_FOUND`
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Status code a record of this kind carries when nothing overrides it
    pub const fn default_status(self) -> StatusCode {
        match self {
            Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::AuthorizationFailed => StatusCode::UNAUTHORIZED,
            Self::BadRequest | Self::ValidationError => StatusCode::BAD_REQUEST,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Classify a transport status code onto the closed set
    ///
    /// Unlisted client errors collapse to `BAD_REQUEST`; everything else
    /// (including non-error codes) is treated as `INTERNAL_ERROR`.
    pub fn for_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED => Self::AuthorizationFailed,
            StatusCode::FORBIDDEN => Self::AccessDenied,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationError,
            s if s.is_client_error() => Self::BadRequest,
            _ => Self::InternalError,
        }
    }
}
