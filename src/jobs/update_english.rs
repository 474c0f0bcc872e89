//! Writes the authored source-language section.

use super::{
    JobError,
    JobReport,
};
use crate::config::Settings;
use crate::content;
use crate::locale::LocaleDocument;

/// Replaces the section in the source-language file with the authored table.
///
/// Anything else in the file is left untouched. Hand edits made to the section since the
/// last run are discarded.
///
/// # Errors
/// - No authored content for the source language
/// - Source-language file missing or malformed
/// - Write failure
pub fn update_english(settings: &Settings, dry_run: bool) -> Result<JobReport, JobError> {
    let language = &settings.source_language;
    let table =
        content::authored(language).ok_or_else(|| JobError::MissingContent(language.clone()))?;

    let path = settings.locale_path(language);
    let mut document = LocaleDocument::load(&path)?;

    let section = content::to_section(table);
    let key_count = section.len();
    if document.replace_section(&settings.section, section).is_some() {
        tracing::debug!(section = %settings.section, %language, "Replacing existing section");
    }

    let mut report =
        JobReport { section: settings.section.clone(), key_count, ..JobReport::default() };

    if dry_run {
        tracing::info!(path = %path.display(), "Dry run, not writing");
        report.skipped.push(path);
    } else {
        document.write()?;
        report.written.push(path);
    }

    Ok(report)
}
