//! Localized date headings for the dashboard.
//!
//! The display prints a heading above each forecast column: the weekday and
//! date for upcoming days, or the dedicated "today" label for the current
//! one. These helpers render those headings from a locale's string table.

use chrono::{Datelike, Month, NaiveDate, Weekday};

use crate::table::{Label, LocalizationTable};

impl LocalizationTable {
    /// Returns the full weekday name for a [`chrono::Weekday`].
    pub fn weekday_name_for(&self, weekday: Weekday) -> &'static str {
        self.weekday_names[weekday.num_days_from_sunday() as usize]
    }

    /// Returns the full month name for a [`chrono::Month`].
    pub fn month_name_for(&self, month: Month) -> &'static str {
        self.month_names[(month.number_from_month() - 1) as usize]
    }

    /// Renders the localized date heading for a forecast column,
    /// e.g. `"Dimanche 3 Janvier"` or `"Sunday 3 January"`.
    pub fn date_heading(&self, date: NaiveDate) -> String {
        let weekday = self.weekday_name_for(date.weekday());
        let month = self.month_names[(date.month() - 1) as usize];
        format!("{} {} {}", weekday, date.day(), month)
    }

    /// Returns the heading text for a day column: the "today" label when
    /// `date` is the current day, otherwise the weekday name.
    pub fn day_heading(&self, date: NaiveDate, today: NaiveDate) -> &'static str {
        if date == today {
            self.label(Label::Today)
        } else {
            self.weekday_name_for(date.weekday())
        }
    }
}
