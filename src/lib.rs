//! Solar Hijri (Persian / Jalali) calendar dates.
//!
//! [`PersianDate`] is an immutable year/month/day value validated against the
//! rules held by [`PersianChronology`]. Dates convert exactly to and from
//! Julian day numbers and Unix epoch days using the 2820-year grand cycle
//! arithmetic, support month and year arithmetic that clamps to the last
//! valid day of the month, and compute ISO-style calendar differences.
//!
//! ```
//! use jalali_date::{PersianDate, PersianMonth, Unit};
//!
//! let date = PersianDate::of(1396, 8, 6)?;
//! assert_eq!(date.month(), PersianMonth::Aban);
//! assert_eq!(date.to_julian_day(), 2_458_054);
//! assert_eq!(date.to_string(), "1396/08/06");
//!
//! let end = PersianDate::of(1397, 10, 9)?;
//! let period = date.until(&end);
//! assert_eq!((period.years(), period.months(), period.days()), (1, 2, 3));
//! assert_eq!(date.until_unit(&end, Unit::Months)?, 14);
//! # Ok::<(), jalali_date::DateError>(())
//! ```

mod chronology;
mod clock;
mod consts;
mod date;
mod era;
mod field;
mod gregorian;
mod month;
mod period;
mod prelude;
mod range;

pub use chronology::{CHRONOLOGY, PersianChronology, Temporal};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use date::{PersianDate, julian_day};
pub use era::PersianEra;
pub use field::{Field, Unit, Weekday};
pub use gregorian::GregorianDate;
pub use month::PersianMonth;
pub use period::Period;
pub use range::ValueRange;

use crate::prelude::*;

/// Errors raised while building, querying or parsing dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A numeric field lies outside its calendar-defined bounds.
    #[error("Invalid value for {field} (valid values {range}): {value}")]
    ValueOutOfRange {
        field: Field,
        value: i64,
        range: ValueRange,
    },

    /// The year, month and day are each in range but name no real day.
    #[error("Invalid date {month} {day} in year {year}")]
    InvalidDate { year: i32, month: PersianMonth, day: u8 },

    /// Esfand 30 requested in a common year.
    #[error("Invalid date Esfand 30, as {year} is not a leap year")]
    NotLeapYear { year: i32 },

    /// A Gregorian year, month and day that name no real day.
    #[error("Invalid Gregorian date {year:04}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: u8, day: u8 },

    /// Range bounds that are not ordered smallest to largest.
    #[error("Invalid range bounds {min_smallest}/{min_largest} - {max_smallest}/{max_largest}")]
    InvalidRangeBounds {
        min_smallest: i64,
        min_largest:  i64,
        max_smallest: i64,
        max_largest:  i64,
    },

    /// The era value is not one this calendar defines.
    #[error("Invalid era: {0}")]
    InvalidEra(i64),

    /// The field is not defined for dates of this calendar.
    #[error("Unsupported field: {0}")]
    UnsupportedField(Field),

    /// The unit is not defined for dates of this calendar.
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(Unit),

    /// Inverse conversion requested for a zero or negative Julian day.
    #[error("Julian day is not positive: {0}")]
    NonPositiveJulianDay(i64),

    /// An intermediate value does not fit in its integer type.
    #[error("Arithmetic overflow in date calculation")]
    Overflow,

    /// Error parsing date text.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised while splitting date text into numeric components.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Mixed separators ({} and {})", DATE_SEPARATOR, ALT_DATE_SEPARATOR)]
    MixedSeparators,
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
