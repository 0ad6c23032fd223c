//! Validated calendar dates.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::ValidationError;

#[allow(clippy::expect_used)] // literal pattern
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("literal pattern"));

/// An ISO calendar date (`YYYY-MM-DD`), no time component.
///
/// Construction is the only validation point: the strict zero-padded form
/// is enforced by regex before any remote call is issued, so
/// `"2024-6-1"` never reaches the network. Month and day are additionally
/// range-checked; per-month day counts are left to the remote authority.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(String);

impl CalendarDate {
    /// Validate and wrap a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidDate`] if the input does not match the
    ///   strict zero-padded form, or month/day are out of range.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if !DATE_PATTERN.is_match(input) {
            return Err(ValidationError::InvalidDate { input: input.to_string() });
        }

        let month: u32 = input[5..7].parse().unwrap_or(0);
        let day: u32 = input[8..10].parse().unwrap_or(0);

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(ValidationError::InvalidDate { input: input.to_string() });
        }

        Ok(Self(input.to_string()))
    }

    /// The validated `YYYY-MM-DD` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
