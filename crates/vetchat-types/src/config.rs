//! Client configuration types for vetchat.
//!
//! `ClientConfig` represents the optional `config.toml` in the data
//! directory. All fields have defaults so a missing file is equivalent to
//! an empty one.

use serde::{Deserialize, Serialize};

/// Default WebSocket target when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "ws://localhost:3000";

/// Top-level client configuration.
///
/// Loaded from `~/.vetchat/config.toml`. Command-line flags and environment
/// variables take precedence over these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// WebSocket URL of the screening chat server.
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}
