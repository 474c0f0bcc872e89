//! Locale document loading and writing.

use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

/// Mapping from translation key to localized value.
pub type SectionMap = Map<String, Value>;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Failed to read locale file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse locale file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Locale file {} must contain a top-level JSON object, found {found}", path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("Failed to serialize locale file {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write locale file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LocaleError {
    /// Path of the file the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Malformed { path, .. }
            | Self::NotAnObject { path, .. }
            | Self::Serialize { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

/// One language's translation file.
///
/// Key order of the file is kept, so rewriting a document only moves what was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDocument {
    path: PathBuf,
    root: SectionMap,
}

impl LocaleDocument {
    #[must_use]
    pub const fn new(path: PathBuf, root: SectionMap) -> Self {
        Self { path, root }
    }

    /// Reads and parses a locale file.
    ///
    /// # Errors
    /// - File missing or unreadable
    /// - Invalid JSON
    /// - Top level is not an object
    pub fn load(path: &Path) -> Result<Self, LocaleError> {
        tracing::debug!(path = %path.display(), "Loading locale file");

        let content = std::fs::read_to_string(path)
            .map_err(|source| LocaleError::Read { path: path.to_path_buf(), source })?;

        let json: Value = serde_json::from_str(&content)
            .map_err(|source| LocaleError::Malformed { path: path.to_path_buf(), source })?;

        match json {
            Value::Object(root) => Ok(Self::new(path.to_path_buf(), root)),
            other => {
                Err(LocaleError::NotAnObject { path: path.to_path_buf(), found: kind_of(&other) })
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Language code, taken from the file stem (`i18n/ua.json` -> `ua`).
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.path.file_stem().and_then(|stem| stem.to_str())
    }

    #[must_use]
    pub const fn root(&self) -> &SectionMap {
        &self.root
    }

    /// Returns a section when it exists and is an object.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&SectionMap> {
        self.root.get(name).and_then(Value::as_object)
    }

    /// Replaces a whole section, returning the previous value.
    ///
    /// An existing section keeps its position; a new one is appended.
    pub fn replace_section(&mut self, name: &str, section: SectionMap) -> Option<Value> {
        self.root.insert(name.to_string(), Value::Object(section))
    }

    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json_text(&self) -> Result<String, LocaleError> {
        to_json_text(&self.root)
            .map_err(|source| LocaleError::Serialize { path: self.path.clone(), source })
    }

    /// Overwrites the file at the document's path.
    ///
    /// The file is written in place; an interrupted write can leave it truncated.
    ///
    /// # Errors
    /// - Serialization failure
    /// - Path not writable
    pub fn write(&self) -> Result<(), LocaleError> {
        let text = self.to_json_text()?;
        std::fs::write(&self.path, text)
            .map_err(|source| LocaleError::Write { path: self.path.clone(), source })?;
        tracing::debug!(path = %self.path.display(), "Wrote locale file");
        Ok(())
    }
}

/// Serializes with two-space indentation, leaving non-ASCII characters unescaped.
///
/// # Errors
/// Returns error if the map contains values serde cannot represent.
pub fn to_json_text(root: &SectionMap) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(root)
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
