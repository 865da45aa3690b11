use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_COMMON,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
};
use crate::prelude::*;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

/// A day value guaranteed to be valid for a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A complete, valid Gregorian calendar date.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// 0001-01-01, the earliest representable date
    pub const MIN: Self = Self {
        year:  Year(NonZeroU16::MIN),
        month: Month(NonZeroU8::MIN),
        day:   Day(NonZeroU8::MIN),
    };

    /// Creates a date from raw components, checking the day against the month length
    ///
    /// # Errors
    /// Returns the first component error found, year first.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// The same calendar day `years` years earlier.
    ///
    /// February 29 lands on February 28 when the target year is not a leap year.
    /// Returns `None` when the result falls outside `1..=MAX_YEAR`.
    pub fn years_before(&self, years: i32) -> Option<Self> {
        let target = i32::from(self.year()).checked_sub(years)?;
        let target = u16::try_from(target).ok()?;
        let month = self.month();
        let day = self.day().min(days_in_month_checked(target, month)?);
        Self::new(target, month, day).ok()
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the ISO `yyyy-mm-dd` form produced by `Display`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };
        Self::new(parse_component(year)?, parse_component(month)?, parse_component(day)?)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a numeric date component, ignoring surrounding blanks
pub(crate) fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    trimmed
        .parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY {
        if is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            FEBRUARY_DAYS_COMMON
        }
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

const fn days_in_month_checked(year: u16, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        None
    } else {
        Some(days_in_month(year, month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
        assert_eq!(Year::new(2024).unwrap().get(), 2024);
    }

    #[test]
    fn test_month_new_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_day_new_valid() {
        assert!(Day::new(31, 2024, 1).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
        assert!(Day::new(0, 2024, 1).is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        for (year, leap) in [(2020, true), (2023, false), (1900, false), (2000, true), (2100, false)]
        {
            assert_eq!(is_leap_year(year), leap, "Year {year}");
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
    }

    #[test]
    fn test_calendar_date_rejects_impossible_day() {
        assert!(matches!(
            CalendarDate::new(2021, 2, 29),
            Err(ParseError::InvalidDay {
                month: 2,
                day: 29,
                year: 2021
            })
        ));
        assert!(matches!(CalendarDate::new(0, 1, 1), Err(ParseError::InvalidYear(0))));
    }

    #[test]
    fn test_calendar_date_ordering_is_chronological() {
        assert!(date(1990, 12, 31) < date(1991, 1, 1));
        assert!(date(1991, 1, 31) < date(1991, 2, 1));
        assert!(date(1991, 2, 1) < date(1991, 2, 2));
    }

    #[test]
    fn test_years_before() {
        assert_eq!(date(2026, 10, 16).years_before(18), Some(date(2008, 10, 16)));
        assert_eq!(date(2024, 2, 29).years_before(1), Some(date(2023, 2, 28)));
        assert_eq!(date(2024, 2, 29).years_before(4), Some(date(2020, 2, 29)));
        assert_eq!(date(2024, 2, 29).years_before(-1), Some(date(2025, 2, 28)));
        assert_eq!(date(50, 1, 1).years_before(50), None);
        assert_eq!(date(9999, 1, 1).years_before(-1), None);
    }

    #[test]
    fn test_display_and_from_str() {
        let d = date(1990, 6, 5);
        assert_eq!(d.to_string(), "1990-06-05");
        assert_eq!("1990-06-05".parse::<CalendarDate>().unwrap(), d);
        assert!(matches!("".parse::<CalendarDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "1990/06/05".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_component_rejects_signs_and_blanks() {
        assert_eq!(parse_component::<u8>(" 7"), Ok(7));
        assert!(parse_component::<u8>("+7").is_err());
        assert!(parse_component::<u8>("  ").is_err());
    }

    #[test]
    fn test_calendar_date_serde() {
        let d = date(2024, 2, 29);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-02-29\"");
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
        assert!(serde_json::from_str::<CalendarDate>("\"2023-02-29\"").is_err());
    }
}
