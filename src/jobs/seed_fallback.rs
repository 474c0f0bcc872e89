//! Seeds target locales from a partial authored table and a base locale.

use super::{
    JobError,
    JobReport,
};
use crate::config::Settings;
use crate::content;
use crate::locale::{
    LocaleDocument,
    SectionMap,
};
use crate::section::merge_section;

/// Merges the authored table with the base locale's section and writes the result into
/// every target locale.
///
/// Expected keys come from the source-language table. Keys the authored table lacks are
/// copied from the base locale as placeholders and reported. All targets receive the
/// same merged section.
///
/// Targets are written one after another; a failed write leaves earlier targets written.
///
/// # Errors
/// - No authored content for the authored or source language
/// - A target or the base file is missing or malformed
/// - Write failure
pub fn seed_fallback(settings: &Settings, dry_run: bool) -> Result<JobReport, JobError> {
    let fallback = &settings.fallback;

    let authored = content::authored(&fallback.authored_language)
        .ok_or_else(|| JobError::MissingContent(fallback.authored_language.clone()))?;
    let expected_keys = content::expected_keys(&settings.source_language)
        .ok_or_else(|| JobError::MissingContent(settings.source_language.clone()))?;

    let targets = fallback
        .target_languages
        .iter()
        .map(|language| LocaleDocument::load(&settings.locale_path(language)))
        .collect::<Result<Vec<_>, _>>()?;
    let base = LocaleDocument::load(&settings.locale_path(&fallback.base_language))?;

    let base_section = base.section(&settings.section);
    if base_section.is_none() {
        tracing::warn!(
            base = %fallback.base_language,
            section = %settings.section,
            "Base locale has no section to copy placeholders from"
        );
    }

    let mut merged =
        merge_section(&content::to_section(authored), expected_keys, base_section);

    for key in merged.placeholders() {
        tracing::debug!(%key, base = %fallback.base_language, "Copied placeholder");
    }
    if !merged.placeholders().is_empty() {
        tracing::warn!(
            count = merged.placeholders().len(),
            base = %fallback.base_language,
            "Keys filled with untranslated placeholder text"
        );
    }
    for key in merged.unresolved() {
        tracing::warn!(%key, "Expected key has no authored or base text");
    }

    if let Some(marker) = &fallback.marker {
        merged.mark_placeholders(marker);
    }

    let mut report = JobReport {
        section: settings.section.clone(),
        key_count: merged.entries().len(),
        base_language: Some(fallback.base_language.clone()),
        placeholders: merged.placeholders().to_vec(),
        unresolved: merged.unresolved().to_vec(),
        ..JobReport::default()
    };

    write_targets(targets, merged.entries(), dry_run, &mut report)?;

    Ok(report)
}

/// Replaces `report.section` in each target and writes them in order.
///
/// Stops at the first failed write; targets before it stay written and are listed in
/// `report.written`.
fn write_targets(
    targets: Vec<LocaleDocument>,
    entries: &SectionMap,
    dry_run: bool,
    report: &mut JobReport,
) -> Result<(), JobError> {
    for mut target in targets {
        target.replace_section(&report.section, entries.clone());
        let path = target.path().to_path_buf();
        if dry_run {
            tracing::info!(path = %path.display(), "Dry run, not writing");
            report.skipped.push(path);
        } else {
            target.write()?;
            report.written.push(path);
        }
    }
    Ok(())
}
