//! Conversions between the backend's `dd-mm-yyyy` text form, ISO-8601 dates
//! and locale display strings.
//!
//! Every helper here reports failure through `Option`; none of them panic.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

const DAY_FIRST_FORMAT: &str = "%d-%m-%Y";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const ISO_NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Locales the member views render dates for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateLocale {
    /// `7/15/2023`
    EnUs,
    /// `15/07/2023`
    EnGb,
    /// `15/7/2023`
    #[default]
    ViVn,
    /// `15.7.2023`
    DeDe,
    /// `15/07/2023`
    FrFr,
    /// `2023-07-15`
    Iso,
}

impl DateLocale {
    /// Canonical tag of the locale.
    pub fn as_str(self) -> &'static str {
        match self {
            DateLocale::EnUs => "en-US",
            DateLocale::EnGb => "en-GB",
            DateLocale::ViVn => "vi-VN",
            DateLocale::DeDe => "de-DE",
            DateLocale::FrFr => "fr-FR",
            DateLocale::Iso => "iso",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DateLocale::EnUs => "%-m/%-d/%Y",
            DateLocale::EnGb | DateLocale::FrFr => "%d/%m/%Y",
            DateLocale::ViVn => "%-d/%-m/%Y",
            DateLocale::DeDe => "%-d.%-m.%Y",
            DateLocale::Iso => ISO_DATE_FORMAT,
        }
    }

    /// Renders `date` the way this locale writes short dates.
    pub fn render(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

impl Display for DateLocale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DateLocale {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().replace('_', "-").to_ascii_lowercase();
        match tag.as_str() {
            "en-us" | "en" => Ok(DateLocale::EnUs),
            "en-gb" => Ok(DateLocale::EnGb),
            "vi-vn" | "vi" => Ok(DateLocale::ViVn),
            "de-de" | "de" => Ok(DateLocale::DeDe),
            "fr-fr" | "fr" => Ok(DateLocale::FrFr),
            "iso" => Ok(DateLocale::Iso),
            _ => Err(TypeConstraintError::UnknownLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for DateLocale {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateLocale> for String {
    fn from(value: DateLocale) -> Self {
        value.as_str().to_string()
    }
}

/// Parses `dd-mm-yyyy` text.
///
/// Returns `None` when a component is missing or non-numeric, when there are
/// extra components, or when the components do not name a real calendar day
/// (`31-02-2025`).
pub fn parse_dd_mm_yyyy(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split('-');
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a date as zero-padded `dd-mm-yyyy`, or an empty string for `None`.
pub fn format_dd_mm_yyyy(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DAY_FIRST_FORMAT).to_string()).unwrap_or_default()
}

/// Parses `dd-mm-yyyy` text and renders it for `locale`.
pub fn localize_dd_mm_yyyy(text: &str, locale: DateLocale) -> Option<String> {
    parse_dd_mm_yyyy(text).map(|date| locale.render(date))
}

/// Formats a date as `yyyy-mm-dd`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// True when `text` has the `dd-mm-yyyy` 2-2-4 digit shape.
fn has_day_first_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses an ISO-8601 date or date-time, keeping the calendar date as written.
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, ISO_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    ISO_NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|datetime| datetime.date())
}

/// Parses a plan start date given either as `dd-mm-yyyy` or ISO-8601.
pub fn parse_plan_start_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if has_day_first_shape(text) {
        parse_dd_mm_yyyy(text)
    } else {
        parse_iso_date(text)
    }
}
