//! Authored privacy policy content embedded in the binary.

/// English strings
mod en;
/// Spanish strings
mod es;

use serde_json::{
    Map,
    Value,
};

/// Languages that carry embedded authored content.
pub const AUTHORED_LANGUAGES: &[&str] = &["en", "es"];

/// Returns the authored key/text table for a language.
#[must_use]
pub fn authored(language: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match language {
        "en" => Some(en::PRIVACY),
        "es" => Some(es::PRIVACY),
        _ => None,
    }
}

/// Returns the key order of a language's authored table.
///
/// For the source language this is the full list of keys a complete section contains.
#[must_use]
pub fn expected_keys(language: &str) -> Option<Vec<&'static str>> {
    authored(language).map(|table| table.iter().map(|(key, _)| *key).collect())
}

/// Converts an authored table into a section mapping, keeping table order.
#[must_use]
pub fn to_section(table: &[(&str, &str)]) -> Map<String, Value> {
    table.iter().map(|(key, text)| ((*key).to_string(), Value::String((*text).to_string()))).collect()
}
