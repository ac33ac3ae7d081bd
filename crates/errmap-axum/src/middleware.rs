use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use errmap_dispatch::ErrorDispatcher;

use crate::raised::PendingError;
use crate::response::error_response;

/// Error boundary middleware
///
/// Responses without a raised error pass through untouched. A raised
/// error is dispatched exactly once and the placeholder response is
/// replaced with the serialized record.
pub async fn handle_errors(
    State(dispatcher): State<Arc<ErrorDispatcher>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    let Some(PendingError(exception)) = response.extensions_mut().remove::<PendingError>() else {
        return response;
    };

    let record = dispatcher.get_error(&exception);

    tracing::debug!(
        %method,
        path = %path,
        status = record.status.as_u16(),
        error_type = %record.error_type,
        "request failed"
    );

    error_response(&record)
}
