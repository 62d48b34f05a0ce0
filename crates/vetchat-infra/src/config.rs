//! Client configuration loader for vetchat.
//!
//! Reads `config.toml` from the data directory (`~/.vetchat/` in
//! production) and deserializes it into [`ClientConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use vetchat_types::config::ClientConfig;

/// Resolve the vetchat data directory.
///
/// Priority: `VETCHAT_DATA_DIR` env var, then `~/.vetchat`, then
/// `.vetchat` in the working directory.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("VETCHAT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".vetchat");
    }

    PathBuf::from(".vetchat")
}

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ClientConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
pub async fn load_client_config(data_dir: &Path) -> ClientConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
    }
}
