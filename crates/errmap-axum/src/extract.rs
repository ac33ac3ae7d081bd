use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use errmap_core::{ErrorKind, ErrorRecord};
use errmap_dispatch::FnHandler;
use http::StatusCode;
use serde_json::json;

use crate::Raised;

/// JSON body extractor whose rejection is raised through the boundary
///
/// Pair with [`json_rejection_handler`] to answer malformed bodies with
/// `400 VALIDATION_ERROR`.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(Raised))]
pub struct ValidJson<T>(pub T);

/// Query string extractor whose rejection is raised through the boundary
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Raised))]
pub struct ValidQuery<T>(pub T);

/// Converts JSON body rejections
///
/// Shape failures (bad syntax, wrong types, missing content type) become
/// validation errors. Anything else, such as an oversized body, keeps the
/// status axum chose for it.
pub fn json_rejection_handler() -> FnHandler {
    FnHandler::for_type::<JsonRejection, _>("axum::JsonRejection", |rejection| match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => validation_record("body", &rejection.body_text()),
        _ => status_record(rejection.status(), rejection.body_text()),
    })
}

/// Converts query string rejections into validation errors
pub fn query_rejection_handler() -> FnHandler {
    FnHandler::for_type::<QueryRejection, _>("axum::QueryRejection", |rejection| match rejection {
        QueryRejection::FailedToDeserializeQueryString(_) => validation_record("query", &rejection.body_text()),
        _ => status_record(rejection.status(), rejection.body_text()),
    })
}

fn validation_record(location: &str, message: &str) -> ErrorRecord {
    ErrorRecord::new(
        StatusCode::BAD_REQUEST,
        ErrorKind::ValidationError,
        ErrorKind::ValidationError.as_str(),
    )
    .with_detail(json!([{ "loc": [location], "msg": message }]))
}

fn status_record(status: StatusCode, message: String) -> ErrorRecord {
    ErrorRecord::new(status, ErrorKind::for_status(status), message)
}
