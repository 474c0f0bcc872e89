//! Config file loading.

use std::path::Path;

use super::{
    ConfigError,
    Settings,
};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".privacy-i18n.json";

/// Loads `.privacy-i18n.json` from the workspace root.
///
/// # Returns
/// - `Ok(Some(settings))`: config file found and parsed
/// - `Ok(None)`: no config file
/// - `Err(ConfigError)`: read or parse error
pub(super) fn load_from_workspace(workspace_root: &Path) -> Result<Option<Settings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}

/// Loads settings from an explicit path.
///
/// A missing file is an error here.
pub(super) fn load_from_file(config_path: &Path) -> Result<Settings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let settings: Settings = serde_json::from_str(&content)?;

    Ok(settings)
}
