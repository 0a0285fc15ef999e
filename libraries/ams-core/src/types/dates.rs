//! Lenient date and number handling for API payloads.
//!
//! The API is inconsistent about representation: dates may arrive with a time
//! part, `first_release_year` may be a year or a full date, and album counts
//! may be numbers or numeric strings. Everything is normalized on the way in
//! and written back in one canonical form.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// Parse `YYYY-MM-DD`, ignoring any time part that follows.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.split(['T', ' ']).next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Format a date the way every form and table shows it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Read a release year from either a plain year or a date string.
pub fn parse_release_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    parse_date(raw).map(|date| date.year())
}

/// Serde adapter for calendar dates.
pub mod date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
    }
}

/// Serde adapter for `first_release_year`: always written as an integer year.
pub mod release_year {
    use super::*;

    pub fn serialize<S: Serializer>(year: &i32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(*year)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => i32::try_from(n)
                .map_err(|_| serde::de::Error::custom(format!("year out of range: {n}"))),
            NumberOrText::Text(raw) => parse_release_year(&raw)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid release year: {raw}"))),
        }
    }
}

/// Serde adapter for counts that may be transported as strings.
pub mod count {
    use super::*;

    pub fn serialize<S: Serializer>(count: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(*count)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => u32::try_from(n)
                .map_err(|_| serde::de::Error::custom(format!("count out of range: {n}"))),
            NumberOrText::Text(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| serde::de::Error::custom(format!("invalid count: {raw}"))),
        }
    }
}
