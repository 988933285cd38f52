//! Sources of "today" for [`PersianDate::now`](crate::PersianDate::now).

use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

/// A source of the current day.
///
/// Implementations report days since 1970-01-01 in whatever zone they
/// consider local; the calendar itself has no notion of time zones.
pub trait Clock {
    /// Days since 1970-01-01.
    fn epoch_day(&self) -> i64;
}

/// The system clock, read in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_wrap)]
    fn epoch_day(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => (elapsed.as_secs() / SECONDS_PER_DAY) as i64,
            // before 1970: round towards the earlier day
            Err(err) => {
                let before = err.duration();
                let days = before.as_secs().div_ceil(SECONDS_PER_DAY) as i64;
                if before.subsec_nanos() > 0 && before.as_secs() % SECONDS_PER_DAY == 0 {
                    -days - 1
                } else {
                    -days
                }
            }
        }
    }
}

/// A clock stuck on one epoch day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn epoch_day(&self) -> i64 {
        self.0
    }
}
