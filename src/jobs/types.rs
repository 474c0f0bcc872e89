use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::locale::LocaleError;

#[derive(Error, Debug)]
pub enum JobError {
    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error("No authored content for language '{0}'")]
    MissingContent(String),

    #[error("Locale directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Outcome of a job that replaces a section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobReport {
    pub section: String,

    /// Files written, in write order. Empty on a dry run.
    pub written: Vec<PathBuf>,

    /// Files that would have been written on a dry run.
    pub skipped: Vec<PathBuf>,

    /// Number of keys in the written section.
    pub key_count: usize,

    /// Locale the placeholders were copied from.
    pub base_language: Option<String>,

    /// Keys holding copied text that still needs translating.
    pub placeholders: Vec<String>,

    /// Expected keys absent from every source.
    pub unresolved: Vec<String>,
}

impl JobReport {
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.written.is_empty() && !self.skipped.is_empty()
    }
}

fn file_names(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| {
            path.file_name().map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for JobReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dry_run() {
            write!(f, "Dry run: would write {} to {}", self.section, file_names(&self.skipped))?;
        } else {
            write!(f, "Wrote {} to {}", self.section, file_names(&self.written))?;
        }
        write!(f, " ({} keys", self.key_count)?;
        if let Some(base) = &self.base_language {
            write!(f, ", {} copied from {base} as placeholders", self.placeholders.len())?;
        }
        write!(f, ")")?;

        if !self.unresolved.is_empty() {
            write!(f, "\n{} expected keys have no text in any source", self.unresolved.len())?;
        }
        if !self.placeholders.is_empty() {
            write!(f, "\nPlaceholder entries still need a manual translation")?;
        }
        Ok(())
    }
}
