//! Read-only report of a section across every locale file.

use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobMatcher,
};
use ignore::WalkBuilder;
use serde_json::Value;

use super::JobError;
use crate::config::Settings;
use crate::content;
use crate::locale::{
    LocaleDocument,
    flatten_json,
};

/// Section state of one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleState {
    Loaded {
        /// Leaf values in the section (nested keys flattened).
        present: usize,
        /// Expected keys absent from the section, in expected order.
        missing: Vec<String>,
        /// Keys whose value is identical to the base locale's, sorted.
        same_as_base: Vec<String>,
    },
    NoSection,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStatus {
    pub language: String,
    pub path: PathBuf,
    pub state: LocaleState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub section: String,
    pub base_language: String,
    pub expected: usize,
    /// Sorted by file name.
    pub locales: Vec<LocaleStatus>,
}

impl StatusReport {
    #[must_use]
    pub fn locale(&self, language: &str) -> Option<&LocaleStatus> {
        self.locales.iter().find(|status| status.language == language)
    }
}

/// Reports every locale file in the i18n directory against the expected key list.
///
/// Files that fail to load are reported individually instead of aborting.
///
/// # Errors
/// - No authored content for the source language
/// - Invalid file pattern
/// - Missing i18n directory
pub fn status(settings: &Settings) -> Result<StatusReport, JobError> {
    let expected_keys = content::expected_keys(&settings.source_language)
        .ok_or_else(|| JobError::MissingContent(settings.source_language.clone()))?;

    let matcher = Glob::new(&settings.file_pattern)
        .map_err(|source| JobError::InvalidPattern {
            pattern: settings.file_pattern.clone(),
            source,
        })?
        .compile_matcher();

    if !settings.i18n_dir.is_dir() {
        return Err(JobError::MissingDirectory(settings.i18n_dir.clone()));
    }

    let base_language = &settings.fallback.base_language;
    let base_values = LocaleDocument::load(&settings.locale_path(base_language))
        .ok()
        .and_then(|document| {
            document.root().get(&settings.section).filter(|v| v.is_object()).map(|section| {
                flatten_json(section, ".", None)
            })
        });

    let locales = find_locale_files(&settings.i18n_dir, &matcher)
        .into_iter()
        .map(|path| {
            let language = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();

            let state = match LocaleDocument::load(&path) {
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to load locale");
                    LocaleState::Failed(e.to_string())
                }
                Ok(document) => match document.root().get(&settings.section) {
                    Some(section @ Value::Object(entries)) => {
                        let leaves = flatten_json(section, ".", None);
                        let missing = expected_keys
                            .iter()
                            .filter(|key| !entries.contains_key(**key))
                            .map(ToString::to_string)
                            .collect();
                        let mut same_as_base: Vec<String> = match &base_values {
                            Some(base) if language != *base_language => leaves
                                .iter()
                                .filter(|(key, value)| base.get(*key) == Some(*value))
                                .map(|(key, _)| key.clone())
                                .collect(),
                            _ => Vec::new(),
                        };
                        same_as_base.sort();

                        LocaleState::Loaded { present: leaves.len(), missing, same_as_base }
                    }
                    _ => LocaleState::NoSection,
                },
            };

            LocaleStatus { language, path, state }
        })
        .collect();

    Ok(StatusReport {
        section: settings.section.clone(),
        base_language: base_language.clone(),
        expected: expected_keys.len(),
        locales,
    })
}

/// Lists matching locale files directly inside `dir`, skipping hidden files.
fn find_locale_files(dir: &Path, matcher: &GlobMatcher) -> Vec<PathBuf> {
    let mut found_files = Vec::new();

    for result in
        WalkBuilder::new(dir).standard_filters(false).max_depth(Some(1)).follow_links(false).build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        // Dotfiles such as `.privacy-i18n.json` are never locales
        if name.to_string_lossy().starts_with('.') || !matcher.is_match(name) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    found_files
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} expected keys, base {}", self.section, self.expected, self.base_language)?;

        for locale in &self.locales {
            write!(f, "\n  {}: ", locale.language)?;
            match &locale.state {
                LocaleState::Loaded { present, missing, same_as_base } => {
                    write!(f, "{present} keys")?;
                    if missing.is_empty() {
                        write!(f, ", complete")?;
                    } else {
                        write!(f, ", {} missing", missing.len())?;
                    }
                    if !same_as_base.is_empty() {
                        write!(f, ", {} same as {}", same_as_base.len(), self.base_language)?;
                    }
                }
                LocaleState::NoSection => write!(f, "no {} section", self.section)?,
                LocaleState::Failed(message) => write!(f, "failed ({message})")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use crate::jobs::{
        seed_fallback,
        update_english,
    };
    use crate::test_utils::{
        create_i18n_dir,
        settings_for,
    };

    #[googletest::test]
    fn test_status_after_seeding() {
        let dir = create_i18n_dir(&[
            ("de", json!({"PRIVACY": {"INVITE_TITLE": "Zugang nur auf Einladung"}})),
            ("en", json!({})),
            ("es", json!({})),
            ("ua", json!({})),
        ]);
        let settings = settings_for(&dir);
        update_english(&settings, false).unwrap();
        seed_fallback(&settings, false).unwrap();

        let report = status(&settings).unwrap();

        let languages: Vec<_> = report.locales.iter().map(|l| l.language.as_str()).collect();
        assert_eq!(languages, ["de", "en", "es", "ua"]);
        expect_that!(report.expected, eq(243));

        let Some(LocaleStatus { state: LocaleState::Loaded { present, missing, same_as_base }, .. }) =
            report.locale("es")
        else {
            panic!("es should be loaded");
        };
        expect_that!(*present, eq(15));
        expect_that!(missing.len(), eq(243 - 15));
        assert_eq!(same_as_base, &["INVITE_TITLE".to_string()]);

        let Some(LocaleStatus { state: LocaleState::Loaded { missing, .. }, .. }) =
            report.locale("en")
        else {
            panic!("en should be loaded");
        };
        expect_that!(missing.is_empty(), eq(true));
    }

    #[rstest]
    fn test_status_reports_failures_per_file() {
        let dir = create_i18n_dir(&[("de", json!({"NAV": {}}))]);
        fs::write(dir.path().join("fr.json"), "{ broken").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let report = status(&settings_for(&dir)).unwrap();

        assert_eq!(report.locales.len(), 2);
        assert_eq!(report.locale("de").unwrap().state, LocaleState::NoSection);
        assert!(matches!(report.locale("fr").unwrap().state, LocaleState::Failed(_)));
    }

    #[rstest]
    fn test_status_skips_config_and_hidden_files() {
        let dir = create_i18n_dir(&[("en", json!({}))]);
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"i18nDir": "."}"#).unwrap();
        fs::write(dir.path().join(".backup.json"), "{}").unwrap();

        let report = status(&settings_for(&dir)).unwrap();

        let languages: Vec<_> = report.locales.iter().map(|l| l.language.as_str()).collect();
        assert_eq!(languages, ["en"]);
    }

    #[rstest]
    fn test_status_skips_subdirectories() {
        let dir = create_i18n_dir(&[("en", json!({}))]);
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("es.json"), "{}").unwrap();

        let report = status(&settings_for(&dir)).unwrap();

        assert_eq!(report.locales.len(), 1);
    }

    #[rstest]
    fn test_status_missing_directory() {
        let dir = create_i18n_dir(&[]);
        let mut settings = settings_for(&dir);
        settings.i18n_dir = dir.path().join("absent");

        let result = status(&settings);

        assert!(matches!(result, Err(JobError::MissingDirectory(_))));
    }

    #[rstest]
    fn test_status_display() {
        let report = StatusReport {
            section: "PRIVACY".to_string(),
            base_language: "de".to_string(),
            expected: 3,
            locales: vec![
                LocaleStatus {
                    language: "en".to_string(),
                    path: PathBuf::from("en.json"),
                    state: LocaleState::Loaded {
                        present: 3,
                        missing: vec![],
                        same_as_base: vec![],
                    },
                },
                LocaleStatus {
                    language: "es".to_string(),
                    path: PathBuf::from("es.json"),
                    state: LocaleState::Loaded {
                        present: 2,
                        missing: vec!["FOOTER".to_string()],
                        same_as_base: vec!["TITLE".to_string()],
                    },
                },
                LocaleStatus {
                    language: "fr".to_string(),
                    path: PathBuf::from("fr.json"),
                    state: LocaleState::NoSection,
                },
            ],
        };

        assert_eq!(
            report.to_string(),
            "PRIVACY: 3 expected keys, base de\n  en: 3 keys, complete\n  es: 2 keys, 1 missing, 1 same as de\n  fr: no PRIVACY section"
        );
    }
}
