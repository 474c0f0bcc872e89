//! privacy-i18n
//!
//! Fills the privacy policy section of a web app's per-language JSON locale files.
//! Authored text is written as is; keys a language has no translation for yet are
//! copied from a base locale and reported as placeholders.

pub mod cli;
pub mod config;
pub mod content;
pub mod jobs;
pub mod locale;
pub mod section;

mod test_utils;

pub use cli::{
    Cli,
    run,
};
