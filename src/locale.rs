//! Locale document input and output.
/// Locale file load and write
pub mod document;
/// Nested key flattening
pub mod flatten;

pub use document::{
    LocaleDocument,
    LocaleError,
    SectionMap,
    to_json_text,
};
pub use flatten::flatten_json;
