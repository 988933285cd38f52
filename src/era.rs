use crate::{DateError, Field, prelude::*, range::ValueRange};
use serde::{Deserialize, Serialize};

/// An era in the Solar Hijri calendar.
///
/// The calendar has a single era, Anno Hegirae Solar, covering every
/// proleptic year greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum PersianEra {
    #[display(fmt = "AHS")]
    Ahs = 1,
}

impl PersianEra {
    /// Returns the era with numeric value `value`; only `1` exists.
    ///
    /// # Errors
    /// Returns `DateError::InvalidEra` for any other value.
    pub const fn of(value: i64) -> Result<Self, DateError> {
        if value == Self::Ahs.value() {
            Ok(Self::Ahs)
        } else {
            Err(DateError::InvalidEra(value))
        }
    }

    /// Numeric value of the era.
    #[inline]
    pub const fn value(self) -> i64 {
        self as i64
    }

    /// Range of valid values for `field` as seen from this era.
    pub const fn range(self, field: Field) -> ValueRange {
        match field {
            Field::Era => ValueRange::of(1, 1),
            _ => field.default_range(),
        }
    }
}

impl TryFrom<i64> for PersianEra {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<PersianEra> for i64 {
    fn from(era: PersianEra) -> Self {
        era.value()
    }
}
