use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "fallback.targetLanguages[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Directory holding one `<lang>.json` file per locale.
    pub i18n_dir: PathBuf,

    /// Top-level key the jobs replace.
    pub section: String,

    /// Language whose authored table is the complete section.
    pub source_language: String,

    /// Glob matched against file names when scanning the i18n directory.
    pub file_pattern: String,

    pub fallback: FallbackConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FallbackConfig {
    /// Locale that supplies placeholder text for keys nobody translated yet.
    pub base_language: String,

    /// Language of the partial authored table merged into every target.
    pub authored_language: String,

    pub target_languages: Vec<String>,

    /// Prefix applied to copied placeholder values.
    /// If unset, copied values are written verbatim.
    pub marker: Option<String>,
}

impl Settings {
    /// Path of a locale file inside the i18n directory.
    #[must_use]
    pub fn locale_path(&self, language: &str) -> PathBuf {
        self.i18n_dir.join(format!("{language}.json"))
    }

    /// Resolves a relative i18n directory against `root`.
    pub fn resolve_against(&mut self, root: &Path) {
        if self.i18n_dir.is_relative() {
            self.i18n_dir = root.join(&self.i18n_dir);
        }
    }

    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Language without embedded content
    /// - Base language also listed as a target
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.i18n_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "i18nDir",
                "The directory cannot be empty. Example: \"public/assets/i18n\"",
            ));
        }

        if self.section.is_empty() {
            errors.push(ValidationError::new(
                "section",
                "The section key cannot be empty. Example: \"PRIVACY\"",
            ));
        }

        if content::authored(&self.source_language).is_none() {
            errors.push(ValidationError::new(
                "sourceLanguage",
                format!(
                    "No authored content for '{}'. Available: {}",
                    self.source_language,
                    content::AUTHORED_LANGUAGES.join(", ")
                ),
            ));
        }

        if self.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "filePattern",
                "The pattern cannot be empty. Example: \"*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.file_pattern) {
            errors.push(ValidationError::new(
                "filePattern",
                format!("Invalid glob pattern '{}': {e}", self.file_pattern),
            ));
        }

        errors.extend(self.fallback.validate());

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl FallbackConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.base_language.is_empty() {
            errors.push(ValidationError::new(
                "fallback.baseLanguage",
                "The base language cannot be empty. Example: \"de\"",
            ));
        }

        if content::authored(&self.authored_language).is_none() {
            errors.push(ValidationError::new(
                "fallback.authoredLanguage",
                format!(
                    "No authored content for '{}'. Available: {}",
                    self.authored_language,
                    content::AUTHORED_LANGUAGES.join(", ")
                ),
            ));
        }

        if self.target_languages.is_empty() {
            errors.push(ValidationError::new(
                "fallback.targetLanguages",
                "At least one target language is required. Example: [\"es\"]",
            ));
        }

        for (index, language) in self.target_languages.iter().enumerate() {
            if language.is_empty() {
                errors.push(ValidationError::new(
                    format!("fallback.targetLanguages[{index}]"),
                    "The language code cannot be empty",
                ));
            } else if *language == self.base_language {
                errors.push(ValidationError::new(
                    format!("fallback.targetLanguages[{index}]"),
                    format!("'{language}' is the base language and cannot also be a target"),
                ));
            }
        }

        if let Some(marker) = &self.marker
            && marker.is_empty()
        {
            errors.push(ValidationError::new(
                "fallback.marker",
                "The marker cannot be empty. Please specify a prefix (e.g., \"[TODO] \"), or remove this field",
            ));
        }

        errors
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            i18n_dir: PathBuf::from("public/assets/i18n"),
            section: "PRIVACY".to_string(),
            source_language: "en".to_string(),
            file_pattern: "*.json".to_string(),
            fallback: FallbackConfig::default(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            base_language: "de".to_string(),
            authored_language: "es".to_string(),
            target_languages: vec!["es".to_string(), "ua".to_string()],
            marker: None,
        }
    }
}
