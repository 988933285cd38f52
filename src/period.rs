use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::MONTHS_PER_YEAR;

/// A date-based amount of time in years, months and days, such as
/// "1 year, 2 months and 3 days".
///
/// Produced by [`PersianDate::until`](crate::PersianDate::until). The
/// components are not normalized against each other, and every component
/// of a computed period carries the same sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Period {
    years:  i64,
    months: i64,
    days:   i64,
}

impl Period {
    /// A period of zero length.
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(years: i64, months: i64, days: i64) -> Self {
        Self { years, months, days }
    }

    /// Returns the years component
    #[inline]
    pub const fn years(&self) -> i64 {
        self.years
    }

    /// Returns the months component
    #[inline]
    pub const fn months(&self) -> i64 {
        self.months
    }

    /// Returns the days component
    #[inline]
    pub const fn days(&self) -> i64 {
        self.days
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns true if any component is negative.
    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Years and months combined into a month count; days are ignored.
    pub const fn to_total_months(&self) -> i64 {
        self.years * MONTHS_PER_YEAR as i64 + self.months
    }
}

impl fmt::Display for Period {
    /// Formats as ISO-8601, for example `P1Y2M3D`; zero is `P0D`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}
