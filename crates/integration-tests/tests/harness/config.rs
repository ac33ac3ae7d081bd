//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use errmap_config::{Config, ErrorsConfig, HealthConfig, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                errors: ErrorsConfig::default(),
                ..Config::default()
            },
        }
    }

    /// Hide unhandled error text behind a fixed message
    pub fn with_generic_fallback(mut self, message: &str) -> Self {
        self.config.errors.expose_unhandled_messages = false;
        message.clone_into(&mut self.config.errors.generic_message);
        self
    }

    /// Serve the health check from a different path
    pub fn with_health_path(mut self, path: &str) -> Self {
        path.clone_into(&mut self.config.server.health.path);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
