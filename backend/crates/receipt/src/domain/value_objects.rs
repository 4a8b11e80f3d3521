//! Domain Value Objects
//!
//! Immutable value types parsed from the textual receipt fields.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// One or more ASCII digits, a dot, exactly two digits
static MONEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("Invalid regex"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid regex"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("Invalid regex"));

/// Currency amount with exactly two decimal places, held as integer cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: u64,
}

impl Money {
    /// Parse a `D.DD` amount. Returns `None` on any format mismatch or if
    /// the amount does not fit in `u64` cents.
    pub fn parse(raw: &str) -> Option<Self> {
        if !MONEY_RE.is_match(raw) {
            return None;
        }
        let (dollars, cents) = raw.split_once('.')?;
        let dollars: u64 = dollars.parse().ok()?;
        let cents: u64 = cents.parse().ok()?;
        let total = dollars.checked_mul(100)?.checked_add(cents)?;
        Some(Self { cents: total })
    }

    #[inline]
    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// True when the amount has no cents part (`X.00`)
    #[inline]
    pub fn is_round_dollar(&self) -> bool {
        self.cents % 100 == 0
    }

    #[inline]
    pub fn is_multiple_of_cents(&self, step: u64) -> bool {
        step != 0 && self.cents % step == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// Calendar date of purchase (`YYYY-MM-DD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PurchaseDate(NaiveDate);

impl PurchaseDate {
    /// Parse a `YYYY-MM-DD` string; the date must exist in the calendar
    pub fn parse(raw: &str) -> Option<Self> {
        if !DATE_RE.is_match(raw) {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().map(Self)
    }

    /// Day of the month, 1-based
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for PurchaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Time of purchase, 24-hour clock (`HH:MM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PurchaseTime(NaiveTime);

impl PurchaseTime {
    /// Parse a 24-hour `HH:MM` string. AM/PM forms are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        if !TIME_RE.is_match(raw) {
            return None;
        }
        NaiveTime::parse_from_str(raw, "%H:%M").ok().map(Self)
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    /// Exclusive on both ends; bounds are minutes since midnight
    pub fn is_strictly_between(&self, start_minutes: u32, end_minutes: u32) -> bool {
        let minutes = self.minutes_since_midnight();
        minutes > start_minutes && minutes < end_minutes
    }
}

impl fmt::Display for PurchaseTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}
