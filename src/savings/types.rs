//! Core data types for savings entries
//!
//! - `SavingsEntry`: one reported cost-saving event
//! - `ChartPoint`: one point of the cumulative savings series

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::{SavingsError, SavingsResult};

/// Format used for every date on the wire
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single reported savings event
///
/// Entries have no identity of their own; they are positional within
/// the dataset and immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavingsEntry {
    /// Calendar date of the report (no time of day)
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Amount saved in whole dollars
    pub amount: u64,
    /// Free-text explanation
    pub description: String,
    /// Link to the original report, not validated
    pub source: String,
}

impl SavingsEntry {
    /// Create an entry from a `YYYY-MM-DD` date string
    pub fn new(
        date: &str,
        amount: u64,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> SavingsResult<Self> {
        Ok(Self::with_date(
            parse_date(date)?,
            amount,
            description,
            source,
        ))
    }

    /// Create an entry from an already parsed date
    pub fn with_date(
        date: NaiveDate,
        amount: u64,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
            source: source.into(),
        }
    }
}

/// One point of the cumulative series
///
/// `amount` is the running total up to and including `date`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub amount: u64,
}

impl ChartPoint {
    pub fn new(date: NaiveDate, amount: u64) -> Self {
        Self { date, amount }
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> SavingsResult<NaiveDate> {
    // chrono skips spaces and accepts signs and unpadded fields, the wire format does not
    if !has_date_shape(value) {
        return Err(SavingsError::InvalidDate {
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| SavingsError::InvalidDate {
        value: value.to_string(),
    })
}

/// Exactly `DDDD-DD-DD` with ASCII digits
fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_date(&value).map_err(serde::de::Error::custom)
}
