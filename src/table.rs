//! Built-in locale string tables.
//!
//! One immutable table per supported locale, holding the weekday names,
//! month names and UI section labels the dashboard renders. Tables are
//! `'static` data: selection costs a match, lookups cost an array index,
//! and any number of threads may read them without coordination.

use crate::error::LookupError;
use crate::locale::Locale;

/// A UI section label shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Heading for the current day's forecast column
    Today,
    /// Heading of the weather forecast panel
    Forecast,
    /// Heading of the Home Assistant sensor section
    HaSensors,
    /// Heading of the cryptocurrency ticker section
    Crypto,
    /// Battery level caption
    Battery,
    /// Indoor sensor caption
    Indoor,
    /// Outdoor sensor caption
    Outdoor,
    /// Caption for the remaining sensor group
    Other,
}

impl Label {
    /// All dashboard labels.
    pub const ALL: [Label; 8] = [
        Label::Today,
        Label::Forecast,
        Label::HaSensors,
        Label::Crypto,
        Label::Battery,
        Label::Indoor,
        Label::Outdoor,
        Label::Other,
    ];
}

/// The complete set of display strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationTable {
    /// Full weekday names, index 0 = Sunday.
    pub weekday_names: [&'static str; 7],
    /// Full month names, index 0 = January.
    pub month_names: [&'static str; 12],
    pub today: &'static str,
    pub forecast: &'static str,
    pub ha_sensors: &'static str,
    pub crypto: &'static str,
    pub battery: &'static str,
    pub indoor: &'static str,
    pub outdoor: &'static str,
    pub other: &'static str,
}

static FR: LocalizationTable = LocalizationTable {
    weekday_names: [
        "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi",
    ],
    month_names: [
        "Janvier",
        "Février",
        "Mars",
        "Avril",
        "Mai",
        "Juin",
        "Juillet",
        "Août",
        "Septembre",
        "Octobre",
        "Novembre",
        "Décembre",
    ],
    today: "Aujourd'hui",
    forecast: "Previsions",
    ha_sensors: "Capteurs Home Assistant",
    crypto: "Crypto",
    battery: "Batterie",
    indoor: "Interieur",
    outdoor: "Exterieur",
    // The source device used the spare sensor slot for a greenhouse
    other: "Serre",
};

static EN: LocalizationTable = LocalizationTable {
    weekday_names: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    today: "Today",
    forecast: "Forecast",
    ha_sensors: "Home Assistant sensors",
    crypto: "Crypto",
    battery: "Battery",
    indoor: "Indoor",
    outdoor: "Outdoor",
    other: "Other",
};

impl LocalizationTable {
    /// Returns the table for the given locale.
    pub fn for_locale(locale: Locale) -> &'static LocalizationTable {
        match locale {
            Locale::Fr => &FR,
            Locale::En => &EN,
        }
    }

    /// Returns the full weekday name for `index`, where 0 = Sunday.
    ///
    /// Indices outside `0..=6` violate the caller contract and return
    /// [`LookupError::WeekdayIndexOutOfRange`].
    pub fn weekday_name(&self, index: usize) -> Result<&'static str, LookupError> {
        self.weekday_names
            .get(index)
            .copied()
            .ok_or(LookupError::WeekdayIndexOutOfRange { index })
    }

    /// Returns the full month name for `index`, where 0 = January.
    ///
    /// Indices outside `0..=11` violate the caller contract and return
    /// [`LookupError::MonthIndexOutOfRange`].
    pub fn month_name(&self, index: usize) -> Result<&'static str, LookupError> {
        self.month_names
            .get(index)
            .copied()
            .ok_or(LookupError::MonthIndexOutOfRange { index })
    }

    /// Returns the text for a dashboard label.
    pub fn label(&self, label: Label) -> &'static str {
        match label {
            Label::Today => self.today,
            Label::Forecast => self.forecast,
            Label::HaSensors => self.ha_sensors,
            Label::Crypto => self.crypto,
            Label::Battery => self.battery,
            Label::Indoor => self.indoor,
            Label::Outdoor => self.outdoor,
            Label::Other => self.other,
        }
    }
}
