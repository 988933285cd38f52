use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DateError, Field};

/// The range of valid values for a date field.
///
/// A range has an outer pair of bounds (`min_smallest..=max_largest`) that
/// every value must fall within, plus inner bounds describing how the limits
/// vary: day-of-month, for instance, always starts at 1 but ends anywhere
/// between 29 and 31 depending on the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct ValueRange {
    min_smallest: i64,
    min_largest:  i64,
    max_smallest: i64,
    max_largest:  i64,
}

impl ValueRange {
    /// Creates a fixed range where the minimum and maximum never vary.
    pub const fn of(min: i64, max: i64) -> Self {
        Self::of_full(min, min, max, max)
    }

    /// Creates a range with a fixed minimum and a maximum that varies between
    /// `max_smallest` and `max_largest`.
    pub const fn of_variable_max(min: i64, max_smallest: i64, max_largest: i64) -> Self {
        Self::of_full(min, min, max_smallest, max_largest)
    }

    /// Creates a range where both the minimum and the maximum vary.
    pub const fn of_full(min_smallest: i64, min_largest: i64, max_smallest: i64, max_largest: i64) -> Self {
        debug_assert!(min_smallest <= min_largest);
        debug_assert!(max_smallest <= max_largest);
        debug_assert!(min_largest <= max_largest);
        Self {
            min_smallest,
            min_largest,
            max_smallest,
            max_largest,
        }
    }

    /// Creates a range like [`of_full`](Self::of_full), checking that the
    /// bounds are ordered.
    ///
    /// # Errors
    /// Returns `DateError::InvalidRangeBounds` unless
    /// `min_smallest <= min_largest <= max_largest` and
    /// `max_smallest <= max_largest`.
    pub const fn try_of_full(
        min_smallest: i64,
        min_largest: i64,
        max_smallest: i64,
        max_largest: i64,
    ) -> Result<Self, DateError> {
        if min_smallest > min_largest || max_smallest > max_largest || min_largest > max_largest {
            return Err(DateError::InvalidRangeBounds {
                min_smallest,
                min_largest,
                max_smallest,
                max_largest,
            });
        }
        Ok(Self::of_full(min_smallest, min_largest, max_smallest, max_largest))
    }

    /// Returns the smallest possible minimum
    pub const fn min_smallest(&self) -> i64 {
        self.min_smallest
    }

    /// Returns the largest possible minimum
    pub const fn min_largest(&self) -> i64 {
        self.min_largest
    }

    /// Returns the smallest possible maximum
    pub const fn max_smallest(&self) -> i64 {
        self.max_smallest
    }

    /// Returns the largest possible maximum
    pub const fn max_largest(&self) -> i64 {
        self.max_largest
    }

    /// Returns true if neither bound varies
    pub const fn is_fixed(&self) -> bool {
        self.min_smallest == self.min_largest && self.max_smallest == self.max_largest
    }

    /// Checks if `value` lies within the outer bounds
    pub const fn is_valid_value(&self, value: i64) -> bool {
        self.min_smallest <= value && value <= self.max_largest
    }

    /// Validates `value` for `field` against the outer bounds.
    ///
    /// # Errors
    /// Returns `DateError::ValueOutOfRange` if `value` is outside the range.
    pub fn check_valid_value(&self, value: i64, field: Field) -> Result<i64, DateError> {
        if self.is_valid_value(value) {
            Ok(value)
        } else {
            Err(DateError::ValueOutOfRange {
                field,
                value,
                range: *self,
            })
        }
    }

    /// Validates `value` like [`check_valid_value`](Self::check_valid_value)
    /// and narrows it to `i32`.
    ///
    /// # Errors
    /// Returns `DateError::ValueOutOfRange` if `value` is outside the range or
    /// does not fit in an `i32`.
    pub fn check_valid_int_value(&self, value: i64, field: Field) -> Result<i32, DateError> {
        let checked = self.check_valid_value(value, field)?;
        i32::try_from(checked).map_err(|_| DateError::ValueOutOfRange {
            field,
            value,
            range: *self,
        })
    }
}

/// Unchecked wire form of [`ValueRange`].
#[derive(Deserialize)]
struct RangeBounds {
    min_smallest: i64,
    min_largest:  i64,
    max_smallest: i64,
    max_largest:  i64,
}

impl TryFrom<RangeBounds> for ValueRange {
    type Error = DateError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        Self::try_of_full(
            bounds.min_smallest,
            bounds.min_largest,
            bounds.max_smallest,
            bounds.max_largest,
        )
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.min_smallest)?;
        if self.min_smallest != self.min_largest {
            write!(f, "/{}", self.min_largest)?;
        }
        write!(f, " - {}", self.max_smallest)?;
        if self.max_smallest != self.max_largest {
            write!(f, "/{}", self.max_largest)?;
        }
        Ok(())
    }
}
