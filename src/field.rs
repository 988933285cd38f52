//! Field, unit and weekday identifiers shared by the chronology and dates.

use crate::{DateError, prelude::*, range::ValueRange};
use serde::{Deserialize, Serialize};

/// A numeric field of a date-time that can be queried or validated.
///
/// Only the date fields are supported by [`PersianDate`](crate::PersianDate);
/// the time-of-day fields exist so that callers holding a generic field get a
/// typed [`DateError::UnsupportedField`] instead of a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Field {
    #[display(fmt = "NanoOfSecond")]
    NanoOfSecond,
    #[display(fmt = "SecondOfMinute")]
    SecondOfMinute,
    #[display(fmt = "MinuteOfHour")]
    MinuteOfHour,
    #[display(fmt = "HourOfDay")]
    HourOfDay,
    #[display(fmt = "DayOfWeek")]
    DayOfWeek,
    #[display(fmt = "AlignedDayOfWeekInMonth")]
    AlignedDayOfWeekInMonth,
    #[display(fmt = "AlignedDayOfWeekInYear")]
    AlignedDayOfWeekInYear,
    #[display(fmt = "DayOfMonth")]
    DayOfMonth,
    #[display(fmt = "DayOfYear")]
    DayOfYear,
    #[display(fmt = "EpochDay")]
    EpochDay,
    #[display(fmt = "AlignedWeekOfMonth")]
    AlignedWeekOfMonth,
    #[display(fmt = "AlignedWeekOfYear")]
    AlignedWeekOfYear,
    #[display(fmt = "MonthOfYear")]
    MonthOfYear,
    #[display(fmt = "ProlepticMonth")]
    ProlepticMonth,
    #[display(fmt = "YearOfEra")]
    YearOfEra,
    #[display(fmt = "Year")]
    Year,
    #[display(fmt = "Era")]
    Era,
}

impl Field {
    /// Every field, time-of-day fields first.
    pub const ALL: [Self; 17] = [
        Self::NanoOfSecond,
        Self::SecondOfMinute,
        Self::MinuteOfHour,
        Self::HourOfDay,
        Self::DayOfWeek,
        Self::AlignedDayOfWeekInMonth,
        Self::AlignedDayOfWeekInYear,
        Self::DayOfMonth,
        Self::DayOfYear,
        Self::EpochDay,
        Self::AlignedWeekOfMonth,
        Self::AlignedWeekOfYear,
        Self::MonthOfYear,
        Self::ProlepticMonth,
        Self::YearOfEra,
        Self::Year,
        Self::Era,
    ];

    /// Returns true for fields that describe a calendar date.
    pub const fn is_date_based(self) -> bool {
        !self.is_time_based()
    }

    /// Returns true for fields that describe a time of day.
    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::NanoOfSecond | Self::SecondOfMinute | Self::MinuteOfHour | Self::HourOfDay
        )
    }

    /// Calendar-independent range of the field.
    ///
    /// Calendars narrow this through
    /// [`PersianChronology::range`](crate::PersianChronology::range).
    pub const fn default_range(self) -> ValueRange {
        match self {
            Self::NanoOfSecond => ValueRange::of(0, 999_999_999),
            Self::SecondOfMinute | Self::MinuteOfHour => ValueRange::of(0, 59),
            Self::HourOfDay => ValueRange::of(0, 23),
            Self::DayOfWeek | Self::AlignedDayOfWeekInMonth | Self::AlignedDayOfWeekInYear => {
                ValueRange::of(1, 7)
            }
            Self::DayOfMonth => ValueRange::of_variable_max(1, 28, 31),
            Self::DayOfYear => ValueRange::of_variable_max(1, 365, 366),
            Self::EpochDay => ValueRange::of(-365_243_219_162, 365_241_780_471),
            Self::AlignedWeekOfMonth => ValueRange::of_variable_max(1, 4, 5),
            Self::AlignedWeekOfYear => ValueRange::of(1, 53),
            Self::MonthOfYear => ValueRange::of(1, 12),
            Self::ProlepticMonth => ValueRange::of(-999_999_999 * 12, 999_999_999 * 12 + 11),
            Self::YearOfEra => ValueRange::of_variable_max(1, 999_999_999, 1_000_000_000),
            Self::Year => ValueRange::of(-999_999_999, 999_999_999),
            Self::Era => ValueRange::of(0, 1),
        }
    }
}

/// A unit of date-time amount, used by arithmetic and differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Unit {
    #[display(fmt = "Nanos")]
    Nanos,
    #[display(fmt = "Micros")]
    Micros,
    #[display(fmt = "Millis")]
    Millis,
    #[display(fmt = "Seconds")]
    Seconds,
    #[display(fmt = "Minutes")]
    Minutes,
    #[display(fmt = "Hours")]
    Hours,
    #[display(fmt = "HalfDays")]
    HalfDays,
    #[display(fmt = "Days")]
    Days,
    #[display(fmt = "Weeks")]
    Weeks,
    #[display(fmt = "Months")]
    Months,
    #[display(fmt = "Years")]
    Years,
    #[display(fmt = "Decades")]
    Decades,
    #[display(fmt = "Centuries")]
    Centuries,
    #[display(fmt = "Millennia")]
    Millennia,
    #[display(fmt = "Eras")]
    Eras,
    #[display(fmt = "Forever")]
    Forever,
}

impl Unit {
    /// Returns true for units of a day or longer, excluding `Forever`.
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::Days
                | Self::Weeks
                | Self::Months
                | Self::Years
                | Self::Decades
                | Self::Centuries
                | Self::Millennia
                | Self::Eras
        )
    }

    /// Number of months in one of this unit, for the month-multiple units.
    pub(crate) const fn months(self) -> Option<i64> {
        match self {
            Self::Months => Some(1),
            Self::Years => Some(12),
            Self::Decades => Some(120),
            Self::Centuries => Some(1200),
            Self::Millennia => Some(12000),
            _ => None,
        }
    }
}

/// A day of the week, numbered 1 (Monday) through 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    #[display(fmt = "Monday")]
    Monday = 1,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
    #[display(fmt = "Sunday")]
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Creates a weekday from its ISO value.
    ///
    /// # Errors
    /// Returns `DateError::ValueOutOfRange` unless `value` is in `1..=7`.
    pub fn of(value: u8) -> Result<Self, DateError> {
        Field::DayOfWeek.default_range().check_valid_value(i64::from(value), Field::DayOfWeek)?;
        Ok(Self::ALL[usize::from(value - 1)])
    }

    /// Weekday for a calendar Julian day (the count used by
    /// [`PersianDate::to_julian_day`](crate::PersianDate::to_julian_day)).
    pub(crate) const fn from_julian_day(julian_day: i64) -> Self {
        Self::ALL[(julian_day + 1).rem_euclid(7) as usize]
    }

    /// ISO value of the weekday, Monday being 1.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Persian name of the weekday.
    pub const fn persian_name(self) -> &'static str {
        match self {
            Self::Monday => "دوشنبه",
            Self::Tuesday => "سه‌شنبه",
            Self::Wednesday => "چهارشنبه",
            Self::Thursday => "پنجشنبه",
            Self::Friday => "جمعه",
            Self::Saturday => "شنبه",
            Self::Sunday => "یکشنبه",
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.value()
    }
}
