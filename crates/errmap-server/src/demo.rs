//! Routes that raise every class of failure the boundary understands
//!
//! Useful for smoke-testing a deployment and for the end-to-end tests.

use std::num::ParseIntError;

use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use errmap_axum::{Raised, ValidJson, ValidQuery};
use errmap_core::{DomainError, ErrorKind, ErrorRecord, HttpStatusError, Variant};
use errmap_dispatch::FnHandler;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub fn router() -> Router {
    Router::new()
        .route("/demo/ok", get(ok))
        .route("/demo/domain/{variant}", get(raise_domain).post(raise_domain_with))
        .route("/demo/status/{code}", get(raise_status))
        .route("/demo/unhandled", get(raise_unhandled))
        .route("/demo/parse/{value}", get(parse_number))
        .route("/demo/panic", get(raise_panic))
        .route("/demo/echo", post(echo))
}

/// Reports integer parse failures as validation errors
pub fn parse_int_handler() -> FnHandler {
    FnHandler::for_type::<ParseIntError, _>("std::num::ParseIntError", |error| {
        ErrorRecord::new(StatusCode::BAD_REQUEST, ErrorKind::ValidationError, error.to_string())
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Overrides {
    code: Option<u16>,
    message: Option<String>,
    detail: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct StatusQuery {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UnhandledQuery {
    message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Order {
    id: i64,
    user: String,
}

fn variant_from_slug(slug: &str) -> Option<Variant> {
    match slug {
        "internal" => Some(Variant::Internal),
        "authorization" => Some(Variant::Authorization),
        "bad_request" => Some(Variant::BadRequest),
        "access_denied" => Some(Variant::AccessDenied),
        "not_found" => Some(Variant::NotFound),
        _ => None,
    }
}

fn domain_error(slug: &str) -> Result<DomainError, HttpStatusError> {
    variant_from_slug(slug).map(DomainError::new).ok_or_else(|| {
        HttpStatusError::new(StatusCode::NOT_FOUND).with_message(format!("unknown error variant `{slug}`"))
    })
}

fn status_code(code: u16) -> Result<StatusCode, HttpStatusError> {
    StatusCode::from_u16(code).map_err(|_| {
        HttpStatusError::new(StatusCode::BAD_REQUEST).with_message(format!("invalid status code {code}"))
    })
}

async fn ok() -> Json<Value> {
    Json(json!({"test": "ok"}))
}

async fn raise_domain(Path(slug): Path<String>) -> Result<Json<Value>, Raised> {
    Err(domain_error(&slug)?.into())
}

async fn raise_domain_with(
    Path(slug): Path<String>,
    ValidJson(overrides): ValidJson<Overrides>,
) -> Result<Json<Value>, Raised> {
    let mut error = domain_error(&slug)?;

    if let Some(code) = overrides.code {
        error = error.with_code(status_code(code)?);
    }
    if let Some(message) = overrides.message {
        error = error.with_message(message);
    }
    if let Some(detail) = overrides.detail {
        error = error.with_detail(detail);
    }

    Err(error.into())
}

async fn raise_status(
    Path(code): Path<String>,
    ValidQuery(query): ValidQuery<StatusQuery>,
) -> Result<Json<Value>, Raised> {
    let mut error = HttpStatusError::new(status_code(code.parse()?)?);
    if let Some(message) = query.message {
        error = error.with_message(message);
    }

    Err(error.into())
}

async fn raise_unhandled(ValidQuery(query): ValidQuery<UnhandledQuery>) -> Result<Json<Value>, Raised> {
    let message = query.message.unwrap_or_else(|| "unhandled failure".to_owned());
    Err(anyhow::anyhow!(message).into())
}

async fn parse_number(Path(value): Path<String>) -> Result<Json<Value>, Raised> {
    let value: i64 = value.parse()?;
    Ok(Json(json!({"value": value})))
}

async fn raise_panic() -> Json<Value> {
    panic!("demo handler panicked")
}

async fn echo(ValidJson(order): ValidJson<Order>) -> Json<Order> {
    Json(order)
}

#[cfg(test)]
mod tests {
    use errmap_dispatch::{ErrorHandler, Exception};

    use super::*;

    #[test]
    fn slugs() {
        assert_eq!(variant_from_slug("access_denied"), Some(Variant::AccessDenied));
        assert_eq!(variant_from_slug("authorization"), Some(Variant::Authorization));
        assert_eq!(variant_from_slug("AccessDenied"), None);
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let error = domain_error("teapot").unwrap_err();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "HTTP 404 Not Found: unknown error variant `teapot`");
    }

    #[test]
    fn parse_errors_are_validation_errors() {
        let handler = parse_int_handler();
        let exception = Exception::new("x".parse::<i64>().unwrap_err());
        assert!(handler.matches(&exception));

        let record = handler.convert(&exception);
        assert_eq!(record.status, StatusCode::BAD_REQUEST);
        assert_eq!(record.error_type, ErrorKind::ValidationError);
        assert_eq!(record.message, "invalid digit found in string");
    }
}
