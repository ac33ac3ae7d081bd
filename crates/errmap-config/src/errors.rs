use errmap_dispatch::FallbackMessage;
use serde::Deserialize;

/// How unclassified failures are presented to clients
///
/// The dispatcher always logs the original error; this only controls
/// what ends up in the response body.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Return the raw error text for unmatched failures
    #[serde(default = "default_expose")]
    pub expose_unhandled_messages: bool,
    /// Message used when raw text is not exposed
    #[serde(default = "default_generic_message")]
    pub generic_message: String,
}

impl ErrorsConfig {
    pub fn fallback_message(&self) -> FallbackMessage {
        if self.expose_unhandled_messages {
            FallbackMessage::Verbatim
        } else {
            FallbackMessage::Generic(self.generic_message.clone())
        }
    }
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            expose_unhandled_messages: default_expose(),
            generic_message: default_generic_message(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_expose() -> bool {
    true
}

fn default_generic_message() -> String {
    "internal server error".to_owned()
}
