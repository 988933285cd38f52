//! The Solar Hijri date value and its Julian-day conversion.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::chronology::is_leap_year;
use crate::consts::{
    ALT_DATE_SEPARATOR, CYCLE_BASE_YEAR, CYCLE_ORIGIN_JULIAN_DAY, DATE_SEPARATOR, DAYS_BEFORE_MEHR,
    DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_PER_WEEK, GRAND_CYCLE_DAYS, GRAND_CYCLE_YEARS,
    JULIAN_DAY_TO_1970, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTHS_PER_YEAR, PERSIAN_EPOCH_JULIAN_DAY,
    YEAR_474_FIRST_JULIAN_DAY, YEAR_474_LAST_JULIAN_DAY,
};
use crate::prelude::*;
use crate::{
    CHRONOLOGY, Clock, DateError, Field, GregorianDate, ParseError, Period, PersianChronology,
    PersianEra, PersianMonth, Temporal, Unit, ValueRange, Weekday,
};

/// A date in the Solar Hijri calendar, such as `1396/08/06`.
///
/// `PersianDate` is an immutable value: every constructor validates the year
/// (`1..=1999`), the month and the day against the month's length for that
/// year, and arithmetic returns new values. Dates order by year, then month,
/// then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", year, "month.value()", day)]
pub struct PersianDate {
    year:  i32,
    month: PersianMonth,
    day:   u8,
}

/// Julian day number of `year`/`month`/`day`, without validation.
///
/// This is the day count used throughout the crate: `0001/01/01` is
/// `1_948_320` and `1396/08/06` is `2_458_054`.
pub fn julian_day(year: i32, month: PersianMonth, day: u8) -> i64 {
    raw_julian_day(i64::from(year), month, i64::from(day))
}

pub(crate) fn raw_julian_day(year: i64, month: PersianMonth, day: i64) -> i64 {
    let epoch_base = year - CYCLE_BASE_YEAR;
    let epoch_year = CYCLE_BASE_YEAR + epoch_base.rem_euclid(GRAND_CYCLE_YEARS);
    day + i64::from(month.days_to_first_of_month())
        + (epoch_year * 682 - 110).div_euclid(2816)
        + (epoch_year - 1) * i64::from(DAYS_IN_COMMON_YEAR)
        + epoch_base.div_euclid(GRAND_CYCLE_YEARS) * GRAND_CYCLE_DAYS
        + PERSIAN_EPOCH_JULIAN_DAY
}

/// Proleptic year containing `julian_day`.
fn year_of_julian_day(jd: i64) -> i64 {
    let days_since_origin = jd - CYCLE_ORIGIN_JULIAN_DAY;
    let mut cycle = days_since_origin.div_euclid(GRAND_CYCLE_DAYS);
    let day_in_cycle = days_since_origin.rem_euclid(GRAND_CYCLE_DAYS);

    let mut year_in_cycle = if day_in_cycle == GRAND_CYCLE_DAYS - 1 {
        GRAND_CYCLE_YEARS
    } else {
        let quotient = day_in_cycle.div_euclid(366);
        let remainder = day_in_cycle.rem_euclid(366);
        let estimate = (2134 * quotient + 2816 * remainder + 2815).div_euclid(1_028_522) + quotient;
        if estimate >= 0 { estimate + 1 } else { estimate }
    };

    // Year 474 sits just before the cycle origin; pin it to the base cycle.
    if (YEAR_474_FIRST_JULIAN_DAY..=YEAR_474_LAST_JULIAN_DAY).contains(&jd) {
        trace!(julian_day = jd, "year 474 correction");
        cycle = 0;
        year_in_cycle = 0;
    }

    year_in_cycle + GRAND_CYCLE_YEARS * cycle + CYCLE_BASE_YEAR
}

impl PersianDate {
    /// The earliest supported date, `0001/01/01`.
    pub const MIN: Self = Self {
        year:  MIN_YEAR,
        month: PersianMonth::Farvardin,
        day:   MIN_DAY,
    };

    /// The latest supported date, `1999/12/29`.
    pub const MAX: Self = Self {
        year:  MAX_YEAR,
        month: PersianMonth::Esfand,
        day:   29,
    };

    /// Creates a date from year, month (1 to 12) and day-of-month.
    ///
    /// # Errors
    /// Returns `DateError::ValueOutOfRange` if a field is outside its range,
    /// `DateError::NotLeapYear` for Esfand 30 of a common year, and
    /// `DateError::InvalidDate` for any other day past the end of the month.
    pub fn of(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        CHRONOLOGY.check_valid_value(i64::from(year), Field::Year)?;
        let month = PersianMonth::of(month)?;
        Self::of_month(year, month, day)
    }

    /// Creates a date from year, [`PersianMonth`] and day-of-month.
    ///
    /// # Errors
    /// See [`of`](Self::of).
    pub fn of_month(year: i32, month: PersianMonth, day: u8) -> Result<Self, DateError> {
        CHRONOLOGY.check_valid_value(i64::from(year), Field::Year)?;
        CHRONOLOGY.check_valid_value(i64::from(day), Field::DayOfMonth)?;

        let leap_year = CHRONOLOGY.is_leap_year(year);
        if day > month.length(leap_year) {
            if month == PersianMonth::Esfand && day == 30 && !leap_year {
                return Err(DateError::NotLeapYear { year });
            }
            return Err(DateError::InvalidDate { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// Today's date according to `clock`.
    ///
    /// # Errors
    /// Returns `DateError` if the clock's day is outside the supported years.
    pub fn now<C: Clock + ?Sized>(clock: &C) -> Result<Self, DateError> {
        Self::of_epoch_day(clock.epoch_day())
    }

    /// Creates a date from a Julian day number, the inverse of
    /// [`to_julian_day`](Self::to_julian_day).
    ///
    /// # Errors
    /// Returns `DateError::NonPositiveJulianDay` if `julian_day <= 0` and
    /// `DateError::ValueOutOfRange` if it falls outside the supported years.
    pub fn of_julian_day(jd: i64) -> Result<Self, DateError> {
        if jd <= 0 {
            return Err(DateError::NonPositiveJulianDay(jd));
        }

        let year = CHRONOLOGY.check_valid_int_value(year_of_julian_day(jd), Field::Year)?;
        let year_day = u16::try_from(jd - julian_day(year, PersianMonth::Farvardin, 1) + 1)
            .map_err(|_| DateError::Overflow)?;

        let estimate = if year_day <= DAYS_BEFORE_MEHR {
            f64::from(year_day) / 31.0
        } else {
            f64::from(year_day - 6) / 30.0
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = PersianMonth::of(estimate.ceil() as u8)?;

        let day = u8::try_from(jd - julian_day(year, month, 1) + 1).map_err(|_| DateError::Overflow)?;
        Self::of_month(year, month, day)
    }

    /// Creates a date from a count of days since 1970-01-01 (Gregorian).
    ///
    /// `PersianDate::of_epoch_day(17_468)` is `1396/08/07`.
    ///
    /// # Errors
    /// Returns `DateError` if the day falls outside the supported years.
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        let jd = epoch_day.checked_add(JULIAN_DAY_TO_1970).ok_or(DateError::Overflow)?;
        Self::of_julian_day(jd)
    }

    /// Alias of [`of_epoch_day`](Self::of_epoch_day) for callers holding a
    /// Gregorian epoch day.
    ///
    /// # Errors
    /// Returns `DateError` if the day falls outside the supported years.
    pub fn from_gregorian_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        Self::of_epoch_day(epoch_day)
    }

    /// Converts a Gregorian date.
    ///
    /// # Errors
    /// Returns `DateError` if the date falls outside the supported years.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, DateError> {
        Self::of_epoch_day(date.to_epoch_day())
    }

    /// The same day in the proleptic Gregorian calendar.
    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_supported_epoch_day(self.to_epoch_day())
    }

    /// Julian day number of this date; `1396/08/06` is `2_458_054`.
    pub fn to_julian_day(&self) -> i64 {
        julian_day(self.year, self.month, self.day)
    }

    /// Days since 1970-01-01 (Gregorian).
    pub fn to_epoch_day(&self) -> i64 {
        self.to_julian_day() - JULIAN_DAY_TO_1970
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> PersianMonth {
        self.month
    }

    /// Returns the month as a number from 1 to 12
    #[inline]
    pub const fn month_value(&self) -> u8 {
        self.month.value()
    }

    /// Returns the day-of-month
    #[inline]
    pub const fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Day-of-year, from 1 to 365, or 366 in a leap year.
    pub const fn day_of_year(&self) -> u16 {
        self.month.days_to_first_of_month() + self.day as u16
    }

    pub fn day_of_week(&self) -> Weekday {
        Weekday::from_julian_day(self.to_julian_day())
    }

    /// `year * 12 + month - 1`, a single count of months.
    pub const fn proleptic_month(&self) -> i64 {
        self.year as i64 * MONTHS_PER_YEAR as i64 + self.month.value() as i64 - 1
    }

    pub const fn chronology(&self) -> PersianChronology {
        PersianChronology
    }

    pub const fn era(&self) -> PersianEra {
        PersianEra::Ahs
    }

    pub fn is_leap_year(&self) -> bool {
        CHRONOLOGY.is_leap_year(self.year)
    }

    /// Length of this date's month in days.
    pub fn length_of_month(&self) -> u8 {
        self.month.length(self.is_leap_year())
    }

    /// Length of this date's year in days.
    pub fn length_of_year(&self) -> u16 {
        if self.is_leap_year() {
            DAYS_IN_LEAP_YEAR
        } else {
            DAYS_IN_COMMON_YEAR
        }
    }

    /// Returns true for the date fields; time-of-day fields are unsupported.
    pub const fn is_supported(&self, field: Field) -> bool {
        field.is_date_based()
    }

    /// Range of valid values for `field`, refined by this date's month and
    /// year where the length varies.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedField` for time-of-day fields.
    pub fn range(&self, field: Field) -> Result<ValueRange, DateError> {
        if !self.is_supported(field) {
            return Err(DateError::UnsupportedField(field));
        }
        Ok(match field {
            Field::DayOfMonth => ValueRange::of(1, i64::from(self.length_of_month())),
            Field::DayOfYear => ValueRange::of(1, i64::from(self.length_of_year())),
            _ => CHRONOLOGY.range(field),
        })
    }

    /// Value of `field` for this date.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedField` for time-of-day fields.
    pub fn get(&self, field: Field) -> Result<i64, DateError> {
        let day = i64::from(self.day);
        let day_of_year = i64::from(self.day_of_year());
        let value = match field {
            Field::DayOfWeek => i64::from(self.day_of_week().value()),
            Field::AlignedDayOfWeekInMonth => (day - 1) % DAYS_PER_WEEK + 1,
            Field::AlignedDayOfWeekInYear => (day_of_year - 1) % DAYS_PER_WEEK + 1,
            Field::DayOfMonth => day,
            Field::DayOfYear => day_of_year,
            Field::EpochDay => self.to_epoch_day(),
            Field::AlignedWeekOfMonth => (day - 1) / DAYS_PER_WEEK + 1,
            Field::AlignedWeekOfYear => (day_of_year - 1) / DAYS_PER_WEEK + 1,
            Field::MonthOfYear => i64::from(self.month.value()),
            Field::ProlepticMonth => self.proleptic_month(),
            Field::YearOfEra => {
                if self.year >= 1 {
                    i64::from(self.year)
                } else {
                    1 - i64::from(self.year)
                }
            }
            Field::Year => i64::from(self.year),
            Field::Era => i64::from(self.year >= 1),
            Field::NanoOfSecond | Field::SecondOfMinute | Field::MinuteOfHour | Field::HourOfDay => {
                return Err(DateError::UnsupportedField(field));
            }
        };
        Ok(value)
    }

    /// Returns this date with `days` added; negative amounts go back.
    ///
    /// `1396/12/29` plus one day is `1397/01/01`.
    ///
    /// # Errors
    /// Returns `DateError` if the result falls outside the supported years.
    pub fn plus_days(self, days: i64) -> Result<Self, DateError> {
        if days == 0 {
            return Ok(self);
        }
        let jd = self.to_julian_day().checked_add(days).ok_or(DateError::Overflow)?;
        Self::of_julian_day(jd)
    }

    /// Returns this date with `weeks` added.
    ///
    /// # Errors
    /// Returns `DateError` if the result falls outside the supported years.
    pub fn plus_weeks(self, weeks: i64) -> Result<Self, DateError> {
        self.plus_days(weeks.checked_mul(DAYS_PER_WEEK).ok_or(DateError::Overflow)?)
    }

    /// Returns this date with `months` added.
    ///
    /// When the day-of-month does not exist in the resulting month it is
    /// clamped to the month's last day: `1388/11/30` plus one month is
    /// `1388/12/29`, not an error and not a day of the following month.
    ///
    /// # Errors
    /// Returns `DateError` if the result falls outside the supported years.
    pub fn plus_months(self, months: i64) -> Result<Self, DateError> {
        if months == 0 {
            return Ok(self);
        }
        let month_count = self.proleptic_month().checked_add(months).ok_or(DateError::Overflow)?;
        let year = CHRONOLOGY.check_valid_int_value(month_count.div_euclid(12), Field::Year)?;
        let month = self.month.plus(month_count.rem_euclid(12) - i64::from(self.month.value()) + 1);
        Self::resolve_previous_valid(year, month, self.day)
    }

    /// Returns this date with `years` added, clamping Esfand 30 to Esfand 29
    /// when the target year is common.
    ///
    /// # Errors
    /// Returns `DateError` if the result falls outside the supported years.
    pub fn plus_years(self, years: i64) -> Result<Self, DateError> {
        self.plus_months(years.checked_mul(12).ok_or(DateError::Overflow)?)
    }

    /// Returns this date with `amount` of `unit` added.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedUnit` for time units, `Eras` and
    /// `Forever`, or `DateError` if the result is out of range.
    pub fn plus(self, amount: i64, unit: Unit) -> Result<Self, DateError> {
        match unit {
            Unit::Days => self.plus_days(amount),
            Unit::Weeks => self.plus_weeks(amount),
            _ => match unit.months() {
                Some(months) => self.plus_months(amount.checked_mul(months).ok_or(DateError::Overflow)?),
                None => Err(DateError::UnsupportedUnit(unit)),
            },
        }
    }

    /// Returns this date with `days` subtracted.
    ///
    /// # Errors
    /// Returns `DateError` if the result falls outside the supported years.
    pub fn minus_days(self, days: i64) -> Result<Self, DateError> {
        self.plus_days(days.checked_neg().ok_or(DateError::Overflow)?)
    }

    /// Returns this date with `weeks` subtracted.
    ///
    /// # Errors
    /// Returns `DateError` if the result falls outside the supported years.
    pub fn minus_weeks(self, weeks: i64) -> Result<Self, DateError> {
        self.plus_weeks(weeks.checked_neg().ok_or(DateError::Overflow)?)
    }

    /// Returns this date with `months` subtracted, clamping the day like
    /// [`plus_months`](Self::plus_months).
    ///
    /// # Errors
    /// Returns `DateError` if the result falls outside the supported years.
    pub fn minus_months(self, months: i64) -> Result<Self, DateError> {
        self.plus_months(months.checked_neg().ok_or(DateError::Overflow)?)
    }

    /// Returns this date with `years` subtracted.
    ///
    /// # Errors
    /// Returns `DateError` if the result falls outside the supported years.
    pub fn minus_years(self, years: i64) -> Result<Self, DateError> {
        self.plus_years(years.checked_neg().ok_or(DateError::Overflow)?)
    }

    /// Returns this date with `amount` of `unit` subtracted.
    ///
    /// # Errors
    /// See [`plus`](Self::plus).
    pub fn minus(self, amount: i64, unit: Unit) -> Result<Self, DateError> {
        self.plus(amount.checked_neg().ok_or(DateError::Overflow)?, unit)
    }

    /// Period between this date and `end` in years, months and days.
    ///
    /// The start is included and the end is not. Whole months are removed
    /// first, then the remaining days, so that every component carries the
    /// same sign. From `1396/06/15` to `1396/08/14` is one month and 29 days.
    pub fn until(&self, end: &Self) -> Period {
        self.period_until(end)
    }

    /// Like [`until`](Self::until) for an end of any calendar, converted
    /// through its epoch day.
    ///
    /// # Errors
    /// Returns `DateError` if `end` has no epoch day or falls outside the
    /// supported years.
    pub fn until_temporal<T: Temporal + ?Sized>(&self, end: &T) -> Result<Period, DateError> {
        Ok(self.period_until(&CHRONOLOGY.date_from(end)?))
    }

    fn period_until(&self, end: &Self) -> Period {
        let mut total_months = end.proleptic_month() - self.proleptic_month();
        let mut days = i64::from(end.day) - i64::from(self.day);
        if total_months > 0 && days < 0 {
            total_months -= 1;
            days = end.to_julian_day() - self.julian_day_months_later(total_months);
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(end.length_of_month());
        }
        Period::new(total_months / 12, total_months % 12, days)
    }

    /// Amount of time between this date and `end` in whole `unit`s.
    ///
    /// The result is negative when `end` is before this date. Between
    /// `1396/06/15` and `1396/08/14` there is only one month, being a day short
    /// of two.
    ///
    /// `end` may be a date of any calendar; it is converted through its
    /// epoch day first.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedUnit` for time units and `Forever`, or
    /// `DateError` if `end` cannot be converted.
    pub fn until_unit<T: Temporal + ?Sized>(&self, end: &T, unit: Unit) -> Result<i64, DateError> {
        let end = &CHRONOLOGY.date_from(end)?;
        match unit {
            Unit::Days => Ok(self.days_until(end)),
            Unit::Weeks => Ok(self.days_until(end) / DAYS_PER_WEEK),
            Unit::Eras => Ok(end.get(Field::Era)? - self.get(Field::Era)?),
            _ => match unit.months() {
                Some(months) => Ok(self.months_until(end) / months),
                None => Err(DateError::UnsupportedUnit(unit)),
            },
        }
    }

    fn days_until(&self, end: &Self) -> i64 {
        end.to_julian_day() - self.to_julian_day()
    }

    fn months_until(&self, end: &Self) -> i64 {
        let packed_start = self.proleptic_month() * 32 + i64::from(self.day);
        let packed_end = end.proleptic_month() * 32 + i64::from(end.day);
        (packed_end - packed_start) / 32
    }

    /// Julian day of this date moved `months` later with the day clamped,
    /// for amounts that stay within the supported years.
    fn julian_day_months_later(&self, months: i64) -> i64 {
        let month_count = self.proleptic_month() + months;
        let year = month_count.div_euclid(12);
        let month = PersianMonth::ALL[month_count.rem_euclid(12) as usize];
        let day = self.day.min(month.length(is_leap_year(year)));
        raw_julian_day(year, month, i64::from(day))
    }

    /// Builds the date, moving a day past the end of the month back to the
    /// month's last day.
    fn resolve_previous_valid(year: i32, month: PersianMonth, day: u8) -> Result<Self, DateError> {
        let last_day = month.length(CHRONOLOGY.is_leap_year(year));
        if day > last_day {
            debug!(year, month = month.value(), day, last_day, "clamped day to end of month");
        }
        Self::of_month(year, month, day.min(last_day))
    }
}

impl Temporal for PersianDate {
    fn is_supported(&self, field: Field) -> bool {
        Self::is_supported(self, field)
    }

    fn get(&self, field: Field) -> Result<i64, DateError> {
        Self::get(self, field)
    }
}

impl FromStr for PersianDate {
    type Err = DateError;

    /// Parses `YYYY/MM/DD`; `YYYY-MM-DD` is accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let has_slash = trimmed.contains(DATE_SEPARATOR);
        let has_hyphen = trimmed.contains(ALT_DATE_SEPARATOR);
        let separator = match (has_slash, has_hyphen) {
            (true, true) => return Err(ParseError::MixedSeparators.into()),
            (false, true) => ALT_DATE_SEPARATOR,
            _ => DATE_SEPARATOR,
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected year{separator}month{separator}day, found {} component(s): {s}",
                parts.len()
            ))
            .into());
        };

        let year = year
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*day).to_owned()))?;

        Self::of(year, month, day)
    }
}

impl Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> PersianDate {
        PersianDate::of(year, month, day).unwrap()
    }

    #[test]
    fn test_of_valid() {
        let d = date(1396, 8, 6);
        assert_eq!(d.year(), 1396);
        assert_eq!(d.month(), PersianMonth::Aban);
        assert_eq!(d.month_value(), 8);
        assert_eq!(d.day_of_month(), 6);
        assert_eq!(d.era(), PersianEra::Ahs);
        assert_eq!(d.chronology(), CHRONOLOGY);
    }

    #[test]
    fn test_of_invalid_cases() {
        struct TestCase {
            year:        i32,
            month:       u8,
            day:         u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        0,
                month:       1,
                day:         1,
                description: "year below range",
            },
            TestCase {
                year:        2000,
                month:       1,
                day:         1,
                description: "year above range",
            },
            TestCase {
                year:        1396,
                month:       0,
                day:         1,
                description: "month zero",
            },
            TestCase {
                year:        1396,
                month:       13,
                day:         1,
                description: "month thirteen",
            },
            TestCase {
                year:        1396,
                month:       1,
                day:         0,
                description: "day zero",
            },
            TestCase {
                year:        1396,
                month:       1,
                day:         32,
                description: "day past any month",
            },
        ];

        for case in &cases {
            let result = PersianDate::of(case.year, case.month, case.day);
            assert!(
                matches!(result, Err(DateError::ValueOutOfRange { .. })),
                "Expected range error for: {}, got {result:?}",
                case.description
            );
        }
    }

    #[test]
    fn test_invalid_day_for_month() {
        assert_eq!(
            PersianDate::of(1396, 7, 31),
            Err(DateError::InvalidDate {
                year:  1396,
                month: PersianMonth::Mehr,
                day:   31,
            })
        );
        assert_eq!(
            PersianDate::of(1395, 12, 31),
            Err(DateError::InvalidDate {
                year:  1395,
                month: PersianMonth::Esfand,
                day:   31,
            })
        );
    }

    #[test]
    fn test_esfand_thirty() {
        assert!(PersianDate::of(1387, 12, 30).is_ok());
        assert_eq!(PersianDate::of(1388, 12, 30), Err(DateError::NotLeapYear { year: 1388 }));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(PersianDate::MIN, date(1, 1, 1));
        assert_eq!(PersianDate::MAX, date(1999, 12, 29));
        assert_eq!(PersianDate::MIN.to_julian_day(), 1_948_320);
        assert_eq!(PersianDate::MAX.to_julian_day(), 2_678_438);
    }

    #[test]
    fn test_to_julian_day() {
        assert_eq!(date(1396, 8, 6).to_julian_day(), 2_458_054);
        assert_eq!(julian_day(1396, PersianMonth::Aban, 6), 2_458_054);
        assert_eq!(date(474, 1, 1).to_julian_day(), 2_121_079);
        assert_eq!(date(475, 1, 1).to_julian_day(), 2_121_445);
    }

    #[test]
    fn test_of_julian_day() {
        assert_eq!(PersianDate::of_julian_day(2_458_054).unwrap(), date(1396, 8, 6));
        assert_eq!(PersianDate::of_julian_day(1_948_320).unwrap(), PersianDate::MIN);
        assert_eq!(PersianDate::of_julian_day(2_678_438).unwrap(), PersianDate::MAX);
    }

    #[test]
    fn test_of_julian_day_year_474_window() {
        assert_eq!(PersianDate::of_julian_day(2_121_078).unwrap(), date(473, 12, 29));
        assert_eq!(PersianDate::of_julian_day(2_121_079).unwrap(), date(474, 1, 1));
        assert_eq!(PersianDate::of_julian_day(2_121_444).unwrap(), date(474, 12, 30));
        assert_eq!(PersianDate::of_julian_day(2_121_445).unwrap(), date(475, 1, 1));
    }

    #[test]
    fn test_of_julian_day_errors() {
        assert_eq!(PersianDate::of_julian_day(0), Err(DateError::NonPositiveJulianDay(0)));
        assert_eq!(PersianDate::of_julian_day(-5), Err(DateError::NonPositiveJulianDay(-5)));
        assert!(matches!(
            PersianDate::of_julian_day(1_948_319),
            Err(DateError::ValueOutOfRange { field: Field::Year, value: 0, .. })
        ));
        assert!(matches!(
            PersianDate::of_julian_day(2_678_439),
            Err(DateError::ValueOutOfRange { field: Field::Year, value: 2000, .. })
        ));
        assert!(PersianDate::of_julian_day(1).is_err());
        assert!(PersianDate::of_julian_day(i64::MAX).is_err());
    }

    #[test]
    fn test_julian_day_round_trip_all_dates() {
        let mut expected = PersianDate::MIN.to_julian_day();
        for year in MIN_YEAR..=MAX_YEAR {
            let leap_year = CHRONOLOGY.is_leap_year(year);
            for month in PersianMonth::ALL {
                for day in 1..=month.length(leap_year) {
                    if year == MAX_YEAR && month == PersianMonth::Esfand && day == 30 {
                        continue;
                    }
                    let d = PersianDate::of_month(year, month, day).unwrap();
                    let jd = d.to_julian_day();
                    assert_eq!(jd, expected, "{d} should follow the previous day");
                    assert_eq!(PersianDate::of_julian_day(jd).unwrap(), d);
                    assert_eq!(PersianDate::of_epoch_day(d.to_epoch_day()).unwrap(), d);
                    expected += 1;
                }
            }
        }
    }

    #[test]
    fn test_epoch_day() {
        assert_eq!(PersianDate::of_epoch_day(17_468).unwrap(), date(1396, 8, 7));
        assert_eq!(date(1396, 8, 7).to_epoch_day(), 17_468);
        assert_eq!(date(1396, 1, 1).to_epoch_day(), 17_246);
        assert_eq!(PersianDate::from_gregorian_epoch_day(0).unwrap(), date(1348, 10, 11));
        assert_eq!(PersianDate::of_epoch_day(i64::MAX), Err(DateError::Overflow));
    }

    #[test]
    fn test_gregorian_conversion() {
        let g = GregorianDate::new(2017, 10, 29).unwrap();
        assert_eq!(PersianDate::from_gregorian(g).unwrap(), date(1396, 8, 7));
        assert_eq!(date(1396, 8, 7).to_gregorian(), g);
        assert_eq!(PersianDate::MIN.to_gregorian(), GregorianDate::new(622, 3, 22).unwrap());
        assert_eq!(PersianDate::MAX.to_gregorian(), GregorianDate::new(2621, 3, 20).unwrap());
        assert_eq!(date(1400, 1, 1).to_gregorian(), GregorianDate::new(2021, 3, 21).unwrap());
    }

    #[test]
    fn test_now() {
        let clock = crate::FixedClock(17_468);
        assert_eq!(PersianDate::now(&clock).unwrap(), date(1396, 8, 7));
    }

    #[test]
    fn test_derived_fields() {
        let d = date(1396, 8, 6);
        assert_eq!(d.day_of_year(), 222);
        assert_eq!(d.day_of_week(), Weekday::Saturday);
        assert_eq!(d.proleptic_month(), 1396 * 12 + 7);
        assert!(!d.is_leap_year());
        assert_eq!(d.length_of_month(), 30);
        assert_eq!(d.length_of_year(), 365);
        assert_eq!(date(1395, 12, 30).day_of_year(), 366);
        assert_eq!(date(1395, 12, 1).length_of_month(), 30);
        assert_eq!(date(1396, 12, 1).length_of_month(), 29);
        assert_eq!(date(1395, 1, 1).length_of_year(), 366);
    }

    #[test]
    fn test_get_fields() {
        struct TestCase {
            field:    Field,
            expected: i64,
        }

        // 1396/08/06 is day 222 of the year and a Saturday
        let d = date(1396, 8, 6);
        let cases = [
            TestCase { field: Field::DayOfWeek, expected: 6 },
            TestCase { field: Field::AlignedDayOfWeekInMonth, expected: 6 },
            TestCase { field: Field::AlignedDayOfWeekInYear, expected: 5 },
            TestCase { field: Field::DayOfMonth, expected: 6 },
            TestCase { field: Field::DayOfYear, expected: 222 },
            TestCase { field: Field::EpochDay, expected: 17_467 },
            TestCase { field: Field::AlignedWeekOfMonth, expected: 1 },
            TestCase { field: Field::AlignedWeekOfYear, expected: 32 },
            TestCase { field: Field::MonthOfYear, expected: 8 },
            TestCase { field: Field::ProlepticMonth, expected: 16_759 },
            TestCase { field: Field::YearOfEra, expected: 1396 },
            TestCase { field: Field::Year, expected: 1396 },
            TestCase { field: Field::Era, expected: 1 },
        ];

        for case in &cases {
            assert_eq!(d.get(case.field).unwrap(), case.expected, "{}", case.field);
            assert!(d.is_supported(case.field));
        }

        let end_of_month = date(1396, 7, 30);
        assert_eq!(end_of_month.get(Field::AlignedWeekOfMonth).unwrap(), 5);
        assert_eq!(end_of_month.get(Field::AlignedDayOfWeekInMonth).unwrap(), 2);
    }

    #[test]
    fn test_day_of_year_round_trip() {
        for d in [date(1396, 8, 6), date(1396, 1, 1), date(1396, 6, 31), date(1396, 7, 1), date(1395, 12, 30)] {
            assert_eq!(CHRONOLOGY.date_year_day(d.year(), d.day_of_year()).unwrap(), d, "{d}");
            assert_eq!(d.get(Field::DayOfYear).unwrap(), i64::from(d.day_of_year()));
        }
        assert_eq!(date(1396, 7, 1).day_of_year(), 187);
    }

    #[test]
    fn test_get_unsupported_field() {
        let d = date(1396, 8, 6);
        for field in [Field::NanoOfSecond, Field::SecondOfMinute, Field::MinuteOfHour, Field::HourOfDay] {
            assert_eq!(d.get(field), Err(DateError::UnsupportedField(field)));
            assert!(!d.is_supported(field));
            assert_eq!(d.range(field), Err(DateError::UnsupportedField(field)));
        }
    }

    #[test]
    fn test_range_refined_by_date() {
        assert_eq!(date(1396, 12, 1).range(Field::DayOfMonth).unwrap(), ValueRange::of(1, 29));
        assert_eq!(date(1395, 12, 1).range(Field::DayOfMonth).unwrap(), ValueRange::of(1, 30));
        assert_eq!(date(1396, 1, 1).range(Field::DayOfMonth).unwrap(), ValueRange::of(1, 31));
        assert_eq!(date(1396, 1, 1).range(Field::DayOfYear).unwrap(), ValueRange::of(1, 365));
        assert_eq!(date(1396, 1, 1).range(Field::Year).unwrap(), ValueRange::of(1, 1999));
    }

    #[test]
    fn test_plus_days() {
        let d = date(1396, 12, 29);
        assert_eq!(d.plus_days(0).unwrap(), d);
        assert_eq!(d.plus_days(1).unwrap(), date(1397, 1, 1));
        assert_eq!(date(1397, 1, 1).plus_days(-1).unwrap(), d);
        assert_eq!(date(1395, 12, 29).plus_days(1).unwrap(), date(1395, 12, 30));
        assert_eq!(date(1396, 6, 31).plus_days(1).unwrap(), date(1396, 7, 1));
        assert_eq!(date(1396, 1, 1).plus_days(365).unwrap(), date(1397, 1, 1));
        assert!(PersianDate::MAX.plus_days(1).is_err());
        assert!(PersianDate::MIN.plus_days(-1).is_err());
        assert_eq!(PersianDate::MIN.plus_days(i64::MAX), Err(DateError::Overflow));
    }

    #[test]
    fn test_plus_weeks() {
        assert_eq!(date(1396, 8, 6).plus_weeks(1).unwrap(), date(1396, 8, 13));
        assert_eq!(date(1396, 8, 6).minus_weeks(1).unwrap(), date(1396, 7, 29));
        assert_eq!(date(1396, 8, 6).plus_weeks(i64::MAX), Err(DateError::Overflow));
    }

    #[test]
    fn test_plus_months_cases() {
        struct TestCase {
            start:       (i32, u8, u8),
            months:      i64,
            expected:    (i32, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (1396, 8, 6),
                months:      1,
                expected:    (1396, 9, 6),
                description: "simple forward",
            },
            TestCase {
                start:       (1396, 11, 30),
                months:      1,
                expected:    (1396, 12, 29),
                description: "clamped into a common Esfand",
            },
            TestCase {
                start:       (1395, 11, 30),
                months:      1,
                expected:    (1395, 12, 30),
                description: "fits a leap Esfand",
            },
            TestCase {
                start:       (1396, 6, 31),
                months:      1,
                expected:    (1396, 7, 30),
                description: "31 clamped into a 30-day month",
            },
            TestCase {
                start:       (1396, 12, 15),
                months:      1,
                expected:    (1397, 1, 15),
                description: "across the year boundary",
            },
            TestCase {
                start:       (1397, 1, 15),
                months:      -1,
                expected:    (1396, 12, 15),
                description: "backwards across the year boundary",
            },
            TestCase {
                start:       (1396, 8, 6),
                months:      -20,
                expected:    (1394, 12, 6),
                description: "negative months span years",
            },
            TestCase {
                start:       (1396, 8, 6),
                months:      25,
                expected:    (1398, 9, 6),
                description: "positive months span years",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.start;
            let (ey, em, ed) = case.expected;
            assert_eq!(
                date(y, m, d).plus_months(case.months).unwrap(),
                date(ey, em, ed),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_plus_months_out_of_range() {
        assert!(matches!(
            PersianDate::MAX.plus_months(1),
            Err(DateError::ValueOutOfRange { field: Field::Year, .. })
        ));
        assert!(PersianDate::MIN.minus_months(1).is_err());
        assert_eq!(PersianDate::MIN.plus_months(i64::MAX), Err(DateError::Overflow));
        assert!(PersianDate::MIN.plus_months(i64::MIN).is_err());
    }

    #[test]
    fn test_plus_years() {
        assert_eq!(date(1387, 12, 30).plus_years(1).unwrap(), date(1388, 12, 29));
        assert_eq!(date(1387, 12, 30).plus_years(4).unwrap(), date(1391, 12, 30));
        assert_eq!(date(1396, 8, 6).minus_years(1).unwrap(), date(1395, 8, 6));
        assert_eq!(date(1396, 8, 6).plus_years(0).unwrap(), date(1396, 8, 6));
        assert_eq!(date(1396, 8, 6).plus_years(i64::MAX), Err(DateError::Overflow));
    }

    #[test]
    fn test_plus_unit() {
        let d = date(1396, 8, 6);
        assert_eq!(d.plus(3, Unit::Days).unwrap(), date(1396, 8, 9));
        assert_eq!(d.plus(2, Unit::Weeks).unwrap(), date(1396, 8, 20));
        assert_eq!(d.plus(2, Unit::Months).unwrap(), date(1396, 10, 6));
        assert_eq!(d.plus(1, Unit::Years).unwrap(), date(1397, 8, 6));
        assert_eq!(d.plus(1, Unit::Decades).unwrap(), date(1406, 8, 6));
        assert_eq!(d.plus(1, Unit::Centuries).unwrap(), date(1496, 8, 6));
        assert!(d.plus(1, Unit::Millennia).is_err());
        assert_eq!(d.minus(1, Unit::Centuries).unwrap(), date(1296, 8, 6));
        assert_eq!(d.minus(3, Unit::Days).unwrap(), date(1396, 8, 3));
        assert_eq!(d.plus(1, Unit::Hours), Err(DateError::UnsupportedUnit(Unit::Hours)));
        assert_eq!(d.plus(1, Unit::Eras), Err(DateError::UnsupportedUnit(Unit::Eras)));
        assert_eq!(d.minus(i64::MIN, Unit::Days), Err(DateError::Overflow));
    }

    #[test]
    fn test_until_period_cases() {
        struct TestCase {
            start:       (i32, u8, u8),
            end:         (i32, u8, u8),
            expected:    (i64, i64, i64),
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (1396, 6, 15),
                end:         (1396, 8, 14),
                expected:    (0, 1, 29),
                description: "day borrow from a 31-day month",
            },
            TestCase {
                start:       (1396, 8, 14),
                end:         (1396, 6, 15),
                expected:    (0, -1, -30),
                description: "backwards with day borrow",
            },
            TestCase {
                start:       (1396, 8, 6),
                end:         (1397, 10, 9),
                expected:    (1, 2, 3),
                description: "no borrow needed",
            },
            TestCase {
                start:       (1396, 8, 6),
                end:         (1396, 8, 6),
                expected:    (0, 0, 0),
                description: "same day",
            },
            TestCase {
                start:       (1396, 11, 30),
                end:         (1396, 12, 29),
                expected:    (0, 0, 29),
                description: "end of month into a short Esfand",
            },
            TestCase {
                start:       (1390, 1, 1),
                end:         (1396, 1, 1),
                expected:    (6, 0, 0),
                description: "whole years",
            },
            TestCase {
                start:       (1396, 1, 1),
                end:         (1390, 1, 1),
                expected:    (-6, 0, 0),
                description: "whole years backwards",
            },
            TestCase {
                start:       (1396, 5, 20),
                end:         (1394, 2, 25),
                expected:    (-2, -2, -26),
                description: "all components negative",
            },
        ];

        for case in &cases {
            let (sy, sm, sd) = case.start;
            let (ey, em, ed) = case.end;
            let period = date(sy, sm, sd).until(&date(ey, em, ed));
            assert_eq!(
                (period.years(), period.months(), period.days()),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_until_unit() {
        let start = date(1396, 6, 15);
        let end = date(1396, 8, 14);
        assert_eq!(start.until_unit(&end, Unit::Days).unwrap(), 60);
        assert_eq!(start.until_unit(&end, Unit::Weeks).unwrap(), 8);
        assert_eq!(start.until_unit(&end, Unit::Months).unwrap(), 1);
        assert_eq!(end.until_unit(&start, Unit::Months).unwrap(), -1);
        assert_eq!(end.until_unit(&start, Unit::Days).unwrap(), -60);
        assert_eq!(end.until_unit(&start, Unit::Weeks).unwrap(), -8);
        assert_eq!(start.until_unit(&end, Unit::Years).unwrap(), 0);
        assert_eq!(start.until_unit(&end, Unit::Eras).unwrap(), 0);
        assert_eq!(start.until_unit(&end, Unit::Nanos), Err(DateError::UnsupportedUnit(Unit::Nanos)));
        assert_eq!(start.until_unit(&end, Unit::Forever), Err(DateError::UnsupportedUnit(Unit::Forever)));
    }

    #[test]
    fn test_until_gregorian_end() {
        let start = date(1396, 6, 15);
        // 1396/08/14
        let end = GregorianDate::new(2017, 11, 5).unwrap();
        assert_eq!(start.until_unit(&end, Unit::Days).unwrap(), 60);
        assert_eq!(start.until_unit(&end, Unit::Months).unwrap(), 1);
        assert_eq!(start.until_temporal(&end).unwrap(), Period::new(0, 1, 29));

        let too_late = GregorianDate::new(2700, 1, 1).unwrap();
        assert!(start.until_unit(&too_late, Unit::Days).is_err());
        assert!(start.until_temporal(&too_late).is_err());
    }

    #[test]
    fn test_until_unit_long_spans() {
        let start = date(396, 8, 6);
        let end = date(1396, 8, 6);
        assert_eq!(start.until_unit(&end, Unit::Years).unwrap(), 1000);
        assert_eq!(start.until_unit(&end, Unit::Decades).unwrap(), 100);
        assert_eq!(start.until_unit(&end, Unit::Centuries).unwrap(), 10);
        assert_eq!(start.until_unit(&end, Unit::Millennia).unwrap(), 1);
        assert_eq!(start.until_unit(&end.minus_days(1).unwrap(), Unit::Millennia).unwrap(), 0);
    }

    #[test]
    fn test_plus_twelve_months_is_one_year() {
        for d in [date(1396, 8, 6), date(1, 1, 1), date(1395, 12, 29), date(1998, 6, 31)] {
            let later = d.plus_months(12).unwrap();
            assert_eq!(d.until_unit(&later, Unit::Years).unwrap(), 1, "{d}");
            assert_eq!(later.until_unit(&d, Unit::Years).unwrap(), -1, "{d}");
        }
    }

    #[test]
    fn test_ordering() {
        assert!(date(1396, 8, 6) < date(1396, 8, 7));
        assert!(date(1396, 8, 31 - 1) < date(1396, 9, 1));
        assert!(date(1395, 12, 30) < date(1396, 1, 1));
        assert_eq!(date(1396, 8, 6), date(1396, 8, 6));
        let mut dates = vec![date(1400, 1, 1), date(1396, 8, 6), date(1396, 1, 31)];
        dates.sort();
        assert_eq!(dates, vec![date(1396, 1, 31), date(1396, 8, 6), date(1400, 1, 1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1396, 8, 6).to_string(), "1396/08/06");
        assert_eq!(date(1, 1, 1).to_string(), "0001/01/01");
        assert_eq!(date(474, 12, 30).to_string(), "0474/12/30");
    }

    #[test]
    fn test_parse() {
        assert_eq!("1396/08/06".parse::<PersianDate>().unwrap(), date(1396, 8, 6));
        assert_eq!("1396-8-6".parse::<PersianDate>().unwrap(), date(1396, 8, 6));
        assert_eq!(" 1396 / 08 / 06 ".parse::<PersianDate>().unwrap(), date(1396, 8, 6));
        assert_eq!(
            "".parse::<PersianDate>(),
            Err(DateError::Parse(ParseError::EmptyInput))
        );
        assert_eq!(
            "1396/08-06".parse::<PersianDate>(),
            Err(DateError::Parse(ParseError::MixedSeparators))
        );
        assert!(matches!(
            "1396/08".parse::<PersianDate>(),
            Err(DateError::Parse(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            "1396/XX/06".parse::<PersianDate>(),
            Err(DateError::Parse(ParseError::InvalidFormat(_)))
        ));
        assert_eq!(
            "1388/12/30".parse::<PersianDate>(),
            Err(DateError::NotLeapYear { year: 1388 })
        );
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(1396, 8, 6);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""1396/08/06""#);
        let parsed: PersianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
        assert!(serde_json::from_str::<PersianDate>(r#""1396/13/01""#).is_err());
    }

    #[test]
    fn test_temporal_impl() {
        let d = date(1396, 8, 6);
        let temporal: &dyn Temporal = &d;
        assert_eq!(temporal.get(Field::EpochDay).unwrap(), d.to_epoch_day());
        assert!(temporal.is_supported(Field::Era));
        assert!(!temporal.is_supported(Field::HourOfDay));
    }
}
