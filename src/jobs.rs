//! One-shot jobs over the locale directory.
/// Seeds target locales from authored content plus a base locale
mod seed_fallback;
/// Read-only section report
mod status;
/// Job errors and reports
mod types;
/// Writes the complete source-language section
mod update_english;

pub use seed_fallback::seed_fallback;
pub use status::{
    LocaleState,
    LocaleStatus,
    StatusReport,
    status,
};
pub use types::{
    JobError,
    JobReport,
};
pub use update_english::update_english;
