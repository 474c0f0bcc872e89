//! Settings lifecycle for one run.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    Settings,
    loader,
};

/// Holds the validated settings and the root they were resolved against.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings, with `i18n_dir` already resolved
    current_settings: Settings,

    /// Workspace root
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a manager holding the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: Settings::default(), workspace_root: None }
    }

    /// Loads, validates and resolves settings.
    ///
    /// # Arguments
    /// * `workspace_root` - workspace root path
    /// * `config_path` - explicit config file (relative paths are resolved against the root)
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(
        &mut self,
        workspace_root: PathBuf,
        config_path: Option<&Path>,
    ) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        let mut settings = if let Some(path) = config_path {
            loader::load_from_file(&workspace_root.join(path))?
        } else {
            loader::load_from_workspace(&workspace_root)?.map_or_else(Settings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        settings.resolve_against(&workspace_root);
        self.current_settings = settings;
        self.workspace_root = Some(workspace_root);
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Overrides the i18n directory (`--i18n-dir`).
    pub fn override_i18n_dir(&mut self, dir: PathBuf) {
        tracing::debug!("Overriding i18n directory: {:?}", dir);
        self.current_settings.i18n_dir = dir;
        if let Some(root) = &self.workspace_root {
            self.current_settings.resolve_against(root);
        }
    }

    #[must_use]
    pub const fn get_settings(&self) -> &Settings {
        &self.current_settings
    }

    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;

    /// new: starts from the defaults
    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings().section, "PRIVACY");
        assert!(manager.workspace_root().is_none());
    }

    /// load_settings: defaults without a config file
    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path().to_path_buf(), None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().section, "PRIVACY");
        assert_eq!(manager.get_settings().i18n_dir, temp_dir.path().join("public/assets/i18n"));
        assert!(manager.workspace_root().is_some());
    }

    /// load_settings: workspace config file
    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"i18nDir": "locales", "fallback": {"targetLanguages": ["es"]}}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path().to_path_buf(), None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().i18n_dir, temp_dir.path().join("locales"));
        assert_eq!(manager.get_settings().fallback.target_languages, vec!["es".to_string()]);
    }

    /// load_settings: explicit config file
    #[rstest]
    fn test_load_settings_with_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("custom.json"), r#"{"section": "TERMS"}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result =
            manager.load_settings(temp_dir.path().to_path_buf(), Some(Path::new("custom.json")));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().section, "TERMS");
    }

    /// load_settings: invalid config is rejected
    #[rstest]
    fn test_load_settings_invalid() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"section": ""}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path().to_path_buf(), None);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert!(manager.workspace_root().is_none());
    }

    /// override_i18n_dir: relative paths resolve against the root
    #[rstest]
    fn test_override_i18n_dir_relative() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        manager.load_settings(temp_dir.path().to_path_buf(), None).unwrap();
        manager.override_i18n_dir(PathBuf::from("i18n"));

        assert_eq!(manager.get_settings().i18n_dir, temp_dir.path().join("i18n"));
    }
}
