//! ISO-8601 dates and times: calendar, ordinal, and week dates, times of
//! day with fixed UTC offsets, and dates with times.

pub(crate) mod math;
pub(crate) mod date;
pub(crate) mod time;
pub(crate) mod offset;
pub(crate) mod datetime;
pub(crate) mod convert;
pub(crate) mod compare;

pub use self::math::{Year, Month, Weekday, MAX_YEAR, MIN_YEAR};
pub use self::math::{is_leap_year, days_in_year, days_in_month, days_to_month, day_of_year, day_of_week};
pub use self::math::{week_of_year, weeks_in_year, century_of_year, year_of_century, days_from_civil, civil_from_days};
pub use self::date::{CalendarDate, CalendarDatePrecision, OrdinalDate, WeekDate, WeekDatePrecision};
pub use self::time::{Time, TimePrecision};
pub use self::offset::UtcOffset;
pub use self::datetime::{CalendarDateTime, OrdinalDateTime, WeekDateTime};
pub use self::compare::{compare, DatePiece, Granularity};
