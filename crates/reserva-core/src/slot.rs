//! The fixed slot domain of a bookable day.
//!
//! A day is divided into eight non-overlapping windows, identical for every
//! room and date. The domain is closed: a [`TimeSlot`] can only be obtained
//! from [`SlotCalendar::slots`] or by parsing one of the canonical
//! `"HH:MM-HH:MM"` keys. No ad-hoc slots exist at runtime.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::ValidationError;

/// Number of slots in a day.
pub const SLOT_COUNT: usize = 8;

/// Canonical slot keys, in calendar order.
const SLOT_KEYS: [&str; SLOT_COUNT] = [
    "08:00-09:30",
    "09:45-11:15",
    "11:30-13:00",
    "13:15-14:45",
    "15:00-16:30",
    "16:45-18:15",
    "19:00-20:30",
    "20:45-22:15",
];

/// One of the eight fixed time windows composing a bookable day.
///
/// Backed by an index into the canonical table, so slots are `Copy`, cheap
/// to compare, and totally ordered by calendar position. The canonical
/// string key round-trips: `TimeSlot::parse(slot.as_str()) == Ok(slot)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// Parse a canonical `"HH:MM-HH:MM"` key.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownSlot`] if the key is not one of the
    ///   eight canonical entries. The domain is closed; near-misses
    ///   (`"08:00-09:31"`) are rejected, not snapped.
    pub fn parse(key: &str) -> Result<Self, ValidationError> {
        SLOT_KEYS
            .iter()
            .position(|k| *k == key)
            .map(|i| Self(i as u8))
            .ok_or_else(|| ValidationError::UnknownSlot { key: key.to_string() })
    }

    /// Canonical `"HH:MM-HH:MM"` key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        SLOT_KEYS[self.0 as usize]
    }

    /// Position in the calendar (0-based).
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Start time (`"HH:MM"`).
    #[must_use]
    pub fn start(self) -> &'static str {
        &self.as_str()[..5]
    }

    /// End time (`"HH:MM"`).
    #[must_use]
    pub fn end(self) -> &'static str {
        &self.as_str()[6..]
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Self::parse(&key).map_err(de::Error::custom)
    }
}

/// The fixed day calendar shared by every room and date.
///
/// Pure and infallible: [`SlotCalendar::slots`] always returns the same
/// eight slots in the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotCalendar;

impl SlotCalendar {
    /// All slots of a day, in calendar order.
    #[must_use]
    pub fn slots() -> [TimeSlot; SLOT_COUNT] {
        [
            TimeSlot(0),
            TimeSlot(1),
            TimeSlot(2),
            TimeSlot(3),
            TimeSlot(4),
            TimeSlot(5),
            TimeSlot(6),
            TimeSlot(7),
        ]
    }

    /// Iterate the slot domain in calendar order.
    pub fn iter() -> impl Iterator<Item = TimeSlot> {
        Self::slots().into_iter()
    }
}
