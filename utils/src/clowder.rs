use std::fs;
use std::path::Path;

use bootstrap_defs::{AppConfig, BootstrapError};
use log::{info, warn};

pub fn load_app_config(path: &Path) -> Result<AppConfig, BootstrapError> {
    let config_error = |message: String| BootstrapError::Config {
        path: path.display().to_string(),
        message,
    };

    let contents = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| config_error(e.to_string()))
}

/// Reads the mounted Clowder document when a path is given, otherwise falls back
/// to the built-in sample bindings.
pub fn resolve_app_config(path: Option<&Path>) -> Result<AppConfig, BootstrapError> {
    match path {
        Some(path) => {
            info!("Loading Clowder config from {}", path.display());
            load_app_config(path)
        }
        None => {
            warn!("No Clowder config given, using sample bindings");
            Ok(AppConfig::sample())
        }
    }
}
