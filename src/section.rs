//! Section merging with fallback placeholders.
//!
//! A target section is built from authored entries first. Every expected key that is
//! still missing afterwards is copied from the fallback section and recorded as a
//! placeholder, so callers can tell copied text apart from translated text.

use serde_json::Value;

use crate::locale::SectionMap;

/// Result of merging authored entries with a fallback section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedSection {
    entries: SectionMap,

    /// Keys whose values were copied from the fallback, in expected-key order.
    placeholders: Vec<String>,

    /// Expected keys found neither in the authored entries nor in the fallback.
    unresolved: Vec<String>,
}

impl MergedSection {
    #[must_use]
    pub const fn entries(&self) -> &SectionMap {
        &self.entries
    }

    #[must_use]
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    #[must_use]
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    #[must_use]
    pub fn is_placeholder(&self, key: &str) -> bool {
        self.placeholders.iter().any(|k| k == key)
    }

    /// Prefixes every copied string value with `marker`.
    ///
    /// Values that already start with the marker and non-string values are left as is.
    pub fn mark_placeholders(&mut self, marker: &str) {
        for key in &self.placeholders {
            if let Some(Value::String(text)) = self.entries.get_mut(key)
                && !text.starts_with(marker)
            {
                text.insert_str(0, marker);
            }
        }
    }

    #[must_use]
    pub fn into_entries(self) -> SectionMap {
        self.entries
    }
}

/// Builds a complete section from authored entries and a fallback section.
///
/// - Authored values always win, and authored keys are kept even when not expected.
/// - An expected key missing from `authored` is copied from `fallback` when present there.
/// - Fallback keys outside `expected_keys` are never copied.
///
/// Output order is authored order followed by copied keys in expected order.
///
/// # Examples
/// ```
/// use privacy_i18n::section::merge_section;
/// use serde_json::json;
///
/// let authored = json!({"TITLE": "Política de Privacidad"});
/// let fallback = json!({"INTRO_TEXT": "German text", "TITLE": "German title"});
///
/// let merged = merge_section(
///     authored.as_object().unwrap(),
///     ["TITLE", "INTRO_TEXT"],
///     fallback.as_object(),
/// );
///
/// assert_eq!(
///     serde_json::to_string(merged.entries()).unwrap(),
///     r#"{"TITLE":"Política de Privacidad","INTRO_TEXT":"German text"}"#
/// );
/// assert_eq!(merged.placeholders(), ["INTRO_TEXT"]);
/// ```
#[must_use]
pub fn merge_section<'a, I>(
    authored: &SectionMap,
    expected_keys: I,
    fallback: Option<&SectionMap>,
) -> MergedSection
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries = authored.clone();
    let mut placeholders = Vec::new();
    let mut unresolved: Vec<String> = Vec::new();

    for key in expected_keys {
        if entries.contains_key(key) {
            continue;
        }

        if let Some(value) = fallback.and_then(|section| section.get(key)) {
            entries.insert(key.to_string(), value.clone());
            placeholders.push(key.to_string());
        } else if !unresolved.iter().any(|k| k == key) {
            unresolved.push(key.to_string());
        }
    }

    MergedSection { entries, placeholders, unresolved }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn object(value: &Value) -> SectionMap {
        value.as_object().cloned().unwrap_or_default()
    }

    #[rstest]
    fn test_merge_prefers_authored_values() {
        let authored = object(&json!({"TITLE": "Política de Privacidad"}));
        let fallback = object(&json!({"INTRO_TEXT": "German text", "TITLE": "German title"}));

        let merged = merge_section(&authored, ["TITLE", "INTRO_TEXT"], Some(&fallback));

        assert_eq!(
            serde_json::to_string(merged.entries()).unwrap(),
            r#"{"TITLE":"Política de Privacidad","INTRO_TEXT":"German text"}"#
        );
        assert_eq!(merged.placeholders(), ["INTRO_TEXT"]);
        assert!(merged.unresolved().is_empty());
    }

    #[googletest::test]
    fn test_merge_does_not_fabricate_missing_keys() {
        let authored = object(&json!({"TITLE": "Título"}));
        let fallback = object(&json!({"INTRO_TEXT": "Einleitung"}));

        let merged =
            merge_section(&authored, ["TITLE", "INTRO_TEXT", "FOOTER"], Some(&fallback));

        expect_that!(merged.entries().contains_key("FOOTER"), eq(false));
        assert_eq!(merged.unresolved(), ["FOOTER"]);
        expect_that!(merged.entries().len(), eq(2));
    }

    #[googletest::test]
    fn test_merge_ignores_unexpected_fallback_keys() {
        let authored = object(&json!({}));
        let fallback = object(&json!({"TITLE": "Datenschutz", "LEGACY": "Alt"}));

        let merged = merge_section(&authored, ["TITLE"], Some(&fallback));

        expect_that!(merged.entries().contains_key("LEGACY"), eq(false));
        expect_that!(merged.entries().get("TITLE"), some(eq(&json!("Datenschutz"))));
    }

    #[googletest::test]
    fn test_merge_keeps_authored_keys_outside_expected_list() {
        let authored = object(&json!({"EXTRA": "Extra"}));

        let merged = merge_section(&authored, ["TITLE"], None);

        expect_that!(merged.entries().get("EXTRA"), some(eq(&json!("Extra"))));
        assert_eq!(merged.unresolved(), ["TITLE"]);
    }

    #[googletest::test]
    fn test_merge_without_fallback_only_keeps_authored() {
        let authored = object(&json!({"TITLE": "Título"}));

        let merged = merge_section(&authored, ["TITLE", "INTRO_TITLE"], None);

        expect_that!(merged.entries().len(), eq(1));
        expect_that!(merged.placeholders().is_empty(), eq(true));
    }

    #[rstest]
    fn test_merge_order_follows_authored_then_expected() {
        let authored = object(&json!({"B": "b", "A": "a"}));
        let fallback = object(&json!({"D": "d", "C": "c", "E": "e"}));

        let merged = merge_section(&authored, ["E", "A", "C", "D"], Some(&fallback));

        let keys: Vec<_> = merged.entries().keys().map(String::as_str).collect();
        assert_eq!(keys, ["B", "A", "E", "C", "D"]);
    }

    #[rstest]
    fn test_merge_with_duplicate_expected_keys() {
        let fallback = object(&json!({"A": "a"}));

        let merged = merge_section(&SectionMap::new(), ["A", "A", "Z", "Z"], Some(&fallback));

        assert_eq!(merged.placeholders(), ["A"]);
        assert_eq!(merged.unresolved(), ["Z"]);
    }

    #[rstest]
    fn test_merge_copies_non_string_fallback_values() {
        let fallback = object(&json!({"LIST": ["eins", "zwei"]}));

        let merged = merge_section(&SectionMap::new(), ["LIST"], Some(&fallback));

        assert_eq!(merged.entries()["LIST"], json!(["eins", "zwei"]));
    }

    #[rstest]
    fn test_mark_placeholders_prefixes_copied_strings_only() {
        let authored = object(&json!({"TITLE": "Título"}));
        let fallback = object(&json!({"INTRO_TEXT": "Einleitung", "COUNT": 3}));
        let mut merged =
            merge_section(&authored, ["TITLE", "INTRO_TEXT", "COUNT"], Some(&fallback));

        merged.mark_placeholders("[TODO] ");
        merged.mark_placeholders("[TODO] ");

        assert_eq!(merged.entries()["TITLE"], json!("Título"));
        assert_eq!(merged.entries()["INTRO_TEXT"], json!("[TODO] Einleitung"));
        assert_eq!(merged.entries()["COUNT"], json!(3));
        assert!(merged.is_placeholder("INTRO_TEXT"));
        assert!(!merged.is_placeholder("TITLE"));
    }

    /// Two targets built from the same merge receive the same copied values.
    #[rstest]
    fn test_shared_merge_is_identical_for_all_targets() {
        let authored = object(&json!({"TITLE": "Título"}));
        let fallback = object(&json!({"INTRO_TEXT": "Einleitung"}));
        let merged = merge_section(&authored, ["TITLE", "INTRO_TEXT"], Some(&fallback));

        let es = merged.entries().clone();
        let ua = merged.into_entries();

        assert_eq!(es, ua);
        assert_eq!(ua["INTRO_TEXT"], json!("Einleitung"));
    }
}
