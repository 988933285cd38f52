/// Minimum supported year (inclusive)
pub const MIN_YEAR: i32 = 1;
/// Maximum supported year (inclusive)
pub const MAX_YEAR: i32 = 1999;

/// Month number for Farvardin, the first month of the year
pub const FARVARDIN: u8 = 1;
/// Month number for Esfand, the last month of the year
pub const ESFAND: u8 = 12;
/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in each of the first six months
pub const LONG_MONTH_DAYS: u8 = 31;
/// Days in months seven through eleven
pub const SHORT_MONTH_DAYS: u8 = 30;
/// Days in Esfand for common years
pub const ESFAND_DAYS_COMMON: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;
/// Days from the first of the year to the first of Mehr
pub const DAYS_BEFORE_MEHR: u16 = 186;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;
/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Offset between the calendar's Julian day count and Unix epoch days
/// (`julian_day = epoch_day + JULIAN_DAY_TO_1970`)
pub const JULIAN_DAY_TO_1970: i64 = 2_440_587;
/// Astronomical Julian day number of 1970-01-01 (Gregorian)
pub const ASTRONOMICAL_JDN_1970: i64 = 2_440_588;

/// Years in a grand cycle, after which the leap pattern repeats
pub(crate) const GRAND_CYCLE_YEARS: i64 = 2820;
/// Days in a grand cycle
pub(crate) const GRAND_CYCLE_DAYS: i64 = 1_029_983;
/// Year the cycle arithmetic is anchored on
pub(crate) const CYCLE_BASE_YEAR: i64 = 474;
/// Julian day of 0475/01/01, the origin of the inverse conversion
pub(crate) const CYCLE_ORIGIN_JULIAN_DAY: i64 = 2_121_445;
/// Julian day of 0001/01/01 minus one
pub(crate) const PERSIAN_EPOCH_JULIAN_DAY: i64 = 1_948_319;
/// First Julian day of the year-474 correction window
pub(crate) const YEAR_474_FIRST_JULIAN_DAY: i64 = 2_121_079;
/// Last Julian day of the year-474 correction window
pub(crate) const YEAR_474_LAST_JULIAN_DAY: i64 = 2_121_444;

/// Canonical separator between year, month and day
pub const DATE_SEPARATOR: char = '/';
/// Alternative separator accepted when parsing
pub const ALT_DATE_SEPARATOR: char = '-';
/// Separator used for Gregorian ISO dates
pub const GREGORIAN_SEPARATOR: char = '-';

/// Earliest Gregorian year accepted by `GregorianDate`
pub const GREGORIAN_MIN_YEAR: i32 = 1;
/// Latest Gregorian year accepted by `GregorianDate`
pub const GREGORIAN_MAX_YEAR: i32 = 9999;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for Gregorian leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month for common years (index 0 unused)
#[rustfmt::skip]
pub(crate) const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,
    31, 28, 31, 30, 31, 30,
    31, 31, 30, 31, 30, 31,
];

/// Years in the basic Gregorian leap cycle
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
