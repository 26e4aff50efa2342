//! Error types for locale selection and table lookups.

use thiserror::Error;

/// Errors that can occur when parsing a locale tag.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseLocaleError {
    #[error("unknown locale tag '{tag}'")]
    UnknownTag { tag: String },

    #[error("empty locale tag")]
    EmptyTag,
}

/// Errors that can occur when looking up a table entry by index.
///
/// An out-of-range index is a caller contract violation, not a runtime
/// condition to recover from. Lookups are bounds-checked so the violation
/// surfaces as a typed error in tests instead of a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("weekday index out of range: {index} (expected 0..=6)")]
    WeekdayIndexOutOfRange { index: usize },

    #[error("month index out of range: {index} (expected 0..=11)")]
    MonthIndexOutOfRange { index: usize },
}
