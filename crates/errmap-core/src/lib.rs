//! Error taxonomy shared by every errmap crate
//!
//! Holds the closed set of kind tags, the raisable domain errors, the
//! `HttpError` classification trait and the normalized `ErrorRecord`.
//! Nothing here knows about a web framework.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod domain;
mod error;
mod kind;
mod record;
mod status;

pub use domain::{DomainError, Variant};
pub use error::HttpError;
pub use kind::ErrorKind;
pub use record::{ErrorBody, ErrorRecord};
pub use status::HttpStatusError;
