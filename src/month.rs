//! Months of the Solar Hijri year.

use crate::consts::{
    DAYS_BEFORE_MEHR, ESFAND, ESFAND_DAYS_COMMON, ESFAND_DAYS_LEAP, LONG_MONTH_DAYS,
    MONTHS_PER_YEAR, SHORT_MONTH_DAYS,
};
use crate::{DateError, Field, prelude::*};
use serde::{Deserialize, Serialize};

/// A month-of-year, such as Mehr.
///
/// Each month has a fixed position from 1 (Farvardin) to 12 (Esfand). The
/// first six months have 31 days, the next five have 30, and Esfand has 29
/// days in a common year and 30 in a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PersianMonth {
    #[display(fmt = "Farvardin")]
    Farvardin = 1,
    #[display(fmt = "Ordibehesht")]
    Ordibehesht,
    #[display(fmt = "Khordad")]
    Khordad,
    #[display(fmt = "Tir")]
    Tir,
    #[display(fmt = "Mordad")]
    Mordad,
    #[display(fmt = "Shahrivar")]
    Shahrivar,
    #[display(fmt = "Mehr")]
    Mehr,
    #[display(fmt = "Aban")]
    Aban,
    #[display(fmt = "Azar")]
    Azar,
    #[display(fmt = "Dey")]
    Dey,
    #[display(fmt = "Bahman")]
    Bahman,
    #[display(fmt = "Esfand")]
    Esfand,
}

impl PersianMonth {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Farvardin,
        Self::Ordibehesht,
        Self::Khordad,
        Self::Tir,
        Self::Mordad,
        Self::Shahrivar,
        Self::Mehr,
        Self::Aban,
        Self::Azar,
        Self::Dey,
        Self::Bahman,
        Self::Esfand,
    ];

    /// Returns the month at `position`, 1 being Farvardin.
    ///
    /// # Errors
    /// Returns `DateError::ValueOutOfRange` unless `position` is in `1..=12`.
    pub fn of(position: u8) -> Result<Self, DateError> {
        Field::MonthOfYear
            .default_range()
            .check_valid_value(i64::from(position), Field::MonthOfYear)?;
        Ok(Self::ALL[usize::from(position - 1)])
    }

    /// Position of the month in the year, from 1 to 12.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Name of the month in Persian script.
    pub const fn persian_name(self) -> &'static str {
        match self {
            Self::Farvardin => "فروردین",
            Self::Ordibehesht => "اردیبهشت",
            Self::Khordad => "خرداد",
            Self::Tir => "تیر",
            Self::Mordad => "مرداد",
            Self::Shahrivar => "شهریور",
            Self::Mehr => "مهر",
            Self::Aban => "آبان",
            Self::Azar => "آذر",
            Self::Dey => "دی",
            Self::Bahman => "بهمن",
            Self::Esfand => "اسفند",
        }
    }

    /// Length of the month in days, given whether the year is a leap year.
    pub const fn length(self, leap_year: bool) -> u8 {
        match self.value() {
            1..=6 => LONG_MONTH_DAYS,
            7..=11 => SHORT_MONTH_DAYS,
            _ if leap_year => ESFAND_DAYS_LEAP,
            _ => ESFAND_DAYS_COMMON,
        }
    }

    /// Length of the month in a leap year.
    pub const fn max_length(self) -> u8 {
        self.length(true)
    }

    /// Length of the month in a common year.
    pub const fn min_length(self) -> u8 {
        self.length(false)
    }

    /// Days elapsed from the first of the year to the first of this month.
    pub const fn days_to_first_of_month(self) -> u16 {
        let position = self.value() as u16;
        if position <= 6 {
            LONG_MONTH_DAYS as u16 * (position - 1)
        } else {
            DAYS_BEFORE_MEHR + SHORT_MONTH_DAYS as u16 * (position - 7)
        }
    }

    /// Returns the month `months` after this one, wrapping from Esfand to
    /// Farvardin. Negative amounts move backwards.
    pub const fn plus(self, months: i64) -> Self {
        let offset = months.rem_euclid(MONTHS_PER_YEAR as i64);
        let index = (self.value() as i64 - 1 + offset) % MONTHS_PER_YEAR as i64;
        Self::ALL[index as usize]
    }

    /// Returns the month `months` before this one, wrapping from Farvardin to
    /// Esfand. Negative amounts move forwards.
    pub const fn minus(self, months: i64) -> Self {
        // -(i64::MIN) overflows
        self.plus(-(months % MONTHS_PER_YEAR as i64))
    }

    /// Returns true for Esfand, the only month whose length depends on the year.
    pub const fn is_variable_length(self) -> bool {
        self.value() == ESFAND
    }
}

impl TryFrom<u8> for PersianMonth {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<PersianMonth> for u8 {
    fn from(month: PersianMonth) -> Self {
        month.value()
    }
}
