use std::sync::Arc;

use axum::Router;
use errmap_core::HttpStatusError;
use errmap_dispatch::{BaseErrorHandler, ErrorDispatcher, ErrorHandler, StatusErrorHandler};
use http::StatusCode;
use tower_http::catch_panic::CatchPanicLayer;

use crate::Raised;
use crate::extract::{json_rejection_handler, query_rejection_handler};
use crate::middleware::handle_errors;
use crate::panic::PanicResponder;

/// Handler chain recommended for axum services, in dispatch order
///
/// Extractor rejections first, then transport status errors, then domain
/// errors. Application handlers for narrower types should be registered
/// ahead of these.
pub fn common_handlers() -> Vec<Box<dyn ErrorHandler>> {
    vec![
        Box::new(json_rejection_handler()),
        Box::new(query_rejection_handler()),
        Box::new(StatusErrorHandler::new()),
        Box::new(BaseErrorHandler::new()),
    ]
}

/// Wraps a router so every failure leaves as a JSON error record
#[derive(Debug, Clone)]
pub struct ErrorBoundary {
    dispatcher: Arc<ErrorDispatcher>,
}

impl ErrorBoundary {
    pub const fn new(dispatcher: Arc<ErrorDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub const fn dispatcher(&self) -> &Arc<ErrorDispatcher> {
        &self.dispatcher
    }

    /// Install routing fallbacks, the error middleware and panic capture
    ///
    /// Call after all routes are added; routes merged later are not
    /// covered.
    pub fn wrap<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router
            .fallback(not_found)
            .method_not_allowed_fallback(method_not_allowed)
            .layer(axum::middleware::from_fn_with_state(
                Arc::clone(&self.dispatcher),
                handle_errors,
            ))
            .layer(CatchPanicLayer::custom(PanicResponder::new(Arc::clone(&self.dispatcher))))
    }
}

async fn not_found() -> Raised {
    HttpStatusError::new(StatusCode::NOT_FOUND).into()
}

async fn method_not_allowed() -> Raised {
    HttpStatusError::new(StatusCode::METHOD_NOT_ALLOWED).into()
}
