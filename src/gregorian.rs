//! Minimal proleptic Gregorian date used as the bridge calendar.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ASTRONOMICAL_JDN_1970, CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, GREGORIAN_MAX_YEAR, GREGORIAN_MIN_YEAR, GREGORIAN_SEPARATOR,
    LEAP_YEAR_CYCLE, MIN_DAY,
};
use crate::{DateError, Field, ParseError, Temporal, ValueRange, prelude::*};

/// A validated date in the proleptic Gregorian calendar, years `1..=9999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new Gregorian date, validating the day against the month
    ///
    /// # Errors
    /// Returns `DateError::ValueOutOfRange` if the year or month is out of
    /// range, or `DateError::InvalidGregorianDate` if the day does not exist.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        ValueRange::of(i64::from(GREGORIAN_MIN_YEAR), i64::from(GREGORIAN_MAX_YEAR))
            .check_valid_value(i64::from(year), Field::Year)?;
        Field::MonthOfYear
            .default_range()
            .check_valid_value(i64::from(month), Field::MonthOfYear)?;

        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidGregorianDate { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// Creates the date `epoch_day` days after 1970-01-01.
    ///
    /// # Errors
    /// Returns `DateError` if the day is outside years `1..=9999`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        let jdn = epoch_day.checked_add(ASTRONOMICAL_JDN_1970).ok_or(DateError::Overflow)?;
        if jdn <= 0 {
            return Err(DateError::NonPositiveJulianDay(jdn));
        }
        let (year, month, day) = civil_from_jdn(jdn);
        let year = i32::try_from(year).map_err(|_| DateError::Overflow)?;
        Self::new(year, month as u8, day as u8)
    }

    /// Conversion for epoch days already known to be in range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn from_supported_epoch_day(epoch_day: i64) -> Self {
        let (year, month, day) = civil_from_jdn(epoch_day + ASTRONOMICAL_JDN_1970);
        Self {
            year:  year as i32,
            month: month as u8,
            day:   day as u8,
        }
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month, 1 for January
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day-of-month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Astronomical Julian day number; 2000-01-01 is `2_451_545`.
    pub fn to_julian_day_number(&self) -> i64 {
        let (y, m, d) = (i64::from(self.year), i64::from(self.month), i64::from(self.day));
        (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075
    }

    /// Days since 1970-01-01.
    pub fn to_epoch_day(&self) -> i64 {
        self.to_julian_day_number() - ASTRONOMICAL_JDN_1970
    }
}

/// Gregorian (year, month, day) of an astronomical Julian day number.
fn civil_from_jdn(jdn: i64) -> (i64, i64, i64) {
    let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year, month, day)
}

pub(crate) const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

impl Temporal for GregorianDate {
    fn is_supported(&self, field: Field) -> bool {
        matches!(
            field,
            Field::DayOfMonth | Field::MonthOfYear | Field::Year | Field::EpochDay
        )
    }

    fn get(&self, field: Field) -> Result<i64, DateError> {
        match field {
            Field::DayOfMonth => Ok(i64::from(self.day)),
            Field::MonthOfYear => Ok(i64::from(self.month)),
            Field::Year => Ok(i64::from(self.year)),
            Field::EpochDay => Ok(self.to_epoch_day()),
            _ => Err(DateError::UnsupportedField(field)),
        }
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let invalid = || ParseError::InvalidFormat(s.to_owned());
        let mut parts = trimmed.split(GREGORIAN_SEPARATOR);
        let (Some(year), Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid().into());
        };

        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let day = day.parse::<u8>().map_err(|_| invalid())?;

        Self::new(year, month, day)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
