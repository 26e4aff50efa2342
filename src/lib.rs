//! disploc - locale string tables for device dashboard displays
//!
//! This crate provides the fixed, read-only strings a dashboard display
//! renders: weekday names, month names and UI section labels, per supported
//! locale. Locale selection is a closed enumeration resolved once at
//! startup; the tables themselves are immutable `'static` data.

pub mod error;
pub mod locale;
pub mod table;

#[cfg(feature = "chrono")]
mod heading;

pub use error::{LookupError, ParseLocaleError};
pub use locale::Locale;
pub use table::{Label, LocalizationTable};
