#![allow(clippy::must_use_candidate)]

mod env;
pub mod errors;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use errors::*;
pub use server::*;
pub use telemetry::*;

/// Top-level errmap configuration
///
/// The handler chain itself is assembled in code; this file only tunes
/// the server, the fallback presentation and log output.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Fallback presentation for unclassified errors
    #[serde(default)]
    pub errors: ErrorsConfig,
    /// Log output configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
