//! Helpers shared by the unit test modules.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;

use serde_json::Value;
use tempfile::TempDir;

use crate::config::Settings;

/// Creates a temporary i18n directory.
///
/// # Arguments
/// * `files` - language code and JSON content pairs, written as `<lang>.json`
pub(crate) fn create_i18n_dir(files: &[(&str, Value)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (language, content) in files {
        let path = temp_dir.path().join(format!("{language}.json"));
        fs::write(path, serde_json::to_string_pretty(content).unwrap()).unwrap();
    }
    temp_dir
}

/// Default settings pointed at `dir`.
pub(crate) fn settings_for(dir: &TempDir) -> Settings {
    Settings { i18n_dir: dir.path().to_path_buf(), ..Settings::default() }
}

/// Reads a locale file back as JSON.
pub(crate) fn read_locale(dir: &TempDir, language: &str) -> Value {
    let text = fs::read_to_string(dir.path().join(format!("{language}.json"))).unwrap();
    serde_json::from_str(&text).unwrap()
}
