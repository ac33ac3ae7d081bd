use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use errmap_dispatch::Exception;
use http::StatusCode;

/// Error type for request handlers behind an [`ErrorBoundary`]
///
/// Anything convertible into `anyhow::Error` can be raised with `?`.
/// The response it produces is a placeholder: the boundary middleware
/// replaces it with the dispatched error record.
///
/// [`ErrorBoundary`]: crate::ErrorBoundary
#[derive(Debug)]
pub struct Raised(Exception);

impl Raised {
    pub const fn exception(&self) -> &Exception {
        &self.0
    }

    pub fn into_inner(self) -> Exception {
        self.0
    }
}

impl<E> From<E> for Raised
where
    E: Into<Exception>,
{
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

impl IntoResponse for Raised {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(PendingError(Arc::new(self.0)));
        response
    }
}

/// Exception parked on a response until the boundary middleware picks it up
#[derive(Debug, Clone)]
pub(crate) struct PendingError(pub(crate) Arc<Exception>);
