use thiserror::Error;

use crate::domain::request::Locale;
use crate::domain::score::ScoreRange;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FortuneError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown gender: {0}")]
    UnknownGender(String),

    #[error("invalid day key {0:?}, expected YYYY-MM-DD")]
    InvalidDayKey(String),

    #[error("invalid seed {0:?}, expected 64 lowercase hex characters")]
    InvalidSeed(String),

    /// The template source has no entry for a key the composer needs.
    #[error("missing template entry: {field} for locale {locale}, range {range}")]
    MissingTemplate {
        locale: Locale,
        field: &'static str,
        range: ScoreRange,
    },
}
