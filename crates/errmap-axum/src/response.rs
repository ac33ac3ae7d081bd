use axum::{
    Json,
    response::{IntoResponse, Response},
};
use errmap_core::ErrorRecord;

/// Serialize a record as `{ "error", "message", "detail" }` with its status
pub fn error_response(record: &ErrorRecord) -> Response {
    (record.status, Json(record.body())).into_response()
}
