//! Calendar-wide rules of the Solar Hijri calendar.

use crate::consts::{DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, FARVARDIN, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::date::raw_julian_day;
use crate::{DateError, Field, PersianDate, PersianEra, PersianMonth, ValueRange};

/// Read access to the numeric fields of a date-like value.
///
/// This is the seam through which dates of other calendars are converted:
/// [`PersianChronology::date_from`] reads [`Field::EpochDay`], which every
/// calendar defines the same way.
pub trait Temporal {
    /// Returns true if [`get`](Self::get) can answer for `field`.
    fn is_supported(&self, field: Field) -> bool;

    /// Returns the value of `field`.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedField` if the field is not supported.
    fn get(&self, field: Field) -> Result<i64, DateError>;
}

/// The Persian calendar system (also known as the Jalali or Solar Hijri
/// calendar).
///
/// Common years have 365 days and leap years 366; see [`PersianMonth`] for the
/// month lengths. The chronology is stateless: use the shared [`CHRONOLOGY`]
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PersianChronology;

/// The shared chronology instance.
pub static CHRONOLOGY: PersianChronology = PersianChronology;

const ERAS: [PersianEra; 1] = [PersianEra::Ahs];

impl PersianChronology {
    /// Identifier of the chronology.
    pub const fn id(&self) -> &'static str {
        "Persian"
    }

    /// Calendar type as used by CLDR locale data.
    pub const fn calendar_type(&self) -> &'static str {
        "persian"
    }

    /// Range of valid values for `field` in this calendar.
    pub const fn range(&self, field: Field) -> ValueRange {
        match field {
            Field::DayOfMonth => ValueRange::of_variable_max(1, 29, 31),
            Field::DayOfYear => {
                ValueRange::of_variable_max(1, DAYS_IN_COMMON_YEAR as i64, DAYS_IN_LEAP_YEAR as i64)
            }
            Field::AlignedWeekOfMonth => ValueRange::of(1, 5),
            Field::Year | Field::YearOfEra => ValueRange::of(MIN_YEAR as i64, MAX_YEAR as i64),
            Field::Era => ValueRange::of(1, 1),
            _ => field.default_range(),
        }
    }

    /// Checks `value` against this calendar's range for `field`.
    ///
    /// # Errors
    /// Returns `DateError::ValueOutOfRange` if the value is out of range.
    pub fn check_valid_value(&self, value: i64, field: Field) -> Result<i64, DateError> {
        self.range(field).check_valid_value(value, field)
    }

    /// Checks `value` like [`check_valid_value`](Self::check_valid_value) and
    /// narrows it to `i32`.
    ///
    /// # Errors
    /// Returns `DateError::ValueOutOfRange` if the value is out of range.
    pub fn check_valid_int_value(&self, value: i64, field: Field) -> Result<i32, DateError> {
        self.range(field).check_valid_int_value(value, field)
    }

    /// Checks that `day_of_year` exists in `year`: 1 to 365, or 366 in a leap
    /// year.
    ///
    /// # Errors
    /// Returns `DateError::ValueOutOfRange` for an unsupported year or a day
    /// past the end of the year.
    pub fn check_day_of_year(&self, year: i32, day_of_year: u16) -> Result<(), DateError> {
        self.check_valid_value(i64::from(year), Field::Year)?;
        let days_in_year = if self.is_leap_year(year) {
            DAYS_IN_LEAP_YEAR
        } else {
            DAYS_IN_COMMON_YEAR
        };
        ValueRange::of(1, i64::from(days_in_year)).check_valid_value(i64::from(day_of_year), Field::DayOfYear)?;
        Ok(())
    }

    /// Returns true if `year` has 366 days, i.e. the Julian-day span from its
    /// first day to the first day of the next year exceeds 365.
    pub fn is_leap_year(&self, year: i32) -> bool {
        is_leap_year(i64::from(year))
    }

    /// Combines an era and a year-of-era into a proleptic year.
    ///
    /// The only era starts at year 1, so the two coincide. Passing an era of
    /// another calendar is rejected by the type system.
    pub const fn proleptic_year(&self, _era: PersianEra, year_of_era: i32) -> i32 {
        year_of_era
    }

    /// Returns the era with numeric value `value`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidEra` unless `value` is 1.
    pub const fn era_of(&self, value: i64) -> Result<PersianEra, DateError> {
        PersianEra::of(value)
    }

    /// All eras of the calendar.
    pub fn eras(&self) -> &'static [PersianEra] {
        &ERAS
    }

    /// Creates a date from year, month and day-of-month.
    ///
    /// # Errors
    /// Returns `DateError` if the fields do not form a valid date.
    pub fn date(&self, year: i32, month: u8, day: u8) -> Result<PersianDate, DateError> {
        PersianDate::of(year, month, day)
    }

    /// Creates a date from year and day-of-year.
    ///
    /// # Errors
    /// Returns `DateError::ValueOutOfRange` if the year is unsupported or the
    /// day does not exist in that year.
    pub fn date_year_day(&self, year: i32, day_of_year: u16) -> Result<PersianDate, DateError> {
        self.check_day_of_year(year, day_of_year)?;
        PersianDate::of(year, FARVARDIN, MIN_DAY)?.plus_days(i64::from(day_of_year) - 1)
    }

    /// Creates a date from a count of days since 1970-01-01 (Gregorian).
    ///
    /// # Errors
    /// Returns `DateError` if the result falls outside the supported years.
    pub fn date_epoch_day(&self, epoch_day: i64) -> Result<PersianDate, DateError> {
        PersianDate::of_epoch_day(epoch_day)
    }

    /// Converts any date-like value, typically one of another calendar,
    /// through its epoch day.
    ///
    /// # Errors
    /// Returns `DateError` if `temporal` has no epoch day or the result falls
    /// outside the supported years.
    pub fn date_from<T: Temporal + ?Sized>(&self, temporal: &T) -> Result<PersianDate, DateError> {
        PersianDate::of_epoch_day(temporal.get(Field::EpochDay)?)
    }
}

pub(crate) fn is_leap_year(year: i64) -> bool {
    raw_julian_day(year + 1, PersianMonth::Farvardin, 1) - raw_julian_day(year, PersianMonth::Farvardin, 1)
        > i64::from(DAYS_IN_COMMON_YEAR)
}
