use std::any::Any;
use std::sync::Arc;

use axum::response::Response;
use errmap_dispatch::{ErrorDispatcher, Exception};
use tower_http::catch_panic::ResponseForPanic;

use crate::response::error_response;

/// A panic caught while handling a request
///
/// No handler claims this by default, so it takes the logged fallback
/// path like any other unexpected failure.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Extract a message from a panic payload
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_owned()))
            .unwrap_or_else(|| "request handler panicked".to_owned());

        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Dispatches caught panics through the same handler chain as raised errors
#[derive(Debug, Clone)]
pub struct PanicResponder {
    dispatcher: Arc<ErrorDispatcher>,
}

impl PanicResponder {
    pub const fn new(dispatcher: Arc<ErrorDispatcher>) -> Self {
        Self { dispatcher }
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let exception = Exception::new(Panicked::from_payload(err.as_ref()));
        error_response(&self.dispatcher.get_error(&exception))
    }
}
