//! Dates with times of day.

use std::cmp::Ordering;
use std::fmt;

use crate::cal::date::{CalendarDate, CalendarDatePrecision, OrdinalDate, WeekDate, WeekDatePrecision};
use crate::cal::time::{Time, TimePrecision};
use crate::error::Error;
use crate::span::TimeSpan;


/// A calendar date defined to the day, with a time of day.
#[derive(Clone, Copy)]
pub struct CalendarDateTime {
    date: CalendarDate,
    time: Time,
}

impl CalendarDateTime {

    /// Creates a new date-time. The date must be defined to the day.
    pub fn new(date: CalendarDate, time: Time) -> Result<Self, Error> {
        if date.precision() == CalendarDatePrecision::Day {
            Ok(Self { date, time })
        }
        else {
            Err(Error::range(format!("a date-time needs a date defined to the day, not a {:?}-precision one", date.precision())))
        }
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    /// The span since 1970-01-01T00:00Z. Local times count as UTC.
    pub(crate) fn instant(&self) -> TimeSpan {
        TimeSpan::of_days(self.date.days_since_epoch()) + self.time.span_since_utc_midnight()
    }
}


/// An ordinal date with a time of day.
#[derive(Clone, Copy)]
pub struct OrdinalDateTime {
    date: OrdinalDate,
    time: Time,
}

impl OrdinalDateTime {

    /// Creates a new date-time. Ordinal dates are always defined to the
    /// day, so this can’t fail.
    pub fn new(date: OrdinalDate, time: Time) -> Self {
        Self { date, time }
    }

    pub fn date(&self) -> OrdinalDate {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub(crate) fn instant(&self) -> TimeSpan {
        TimeSpan::of_days(self.date.days_since_epoch()) + self.time.span_since_utc_midnight()
    }
}


/// A week date defined to the day, with a time of day.
#[derive(Clone, Copy)]
pub struct WeekDateTime {
    date: WeekDate,
    time: Time,
}

impl WeekDateTime {

    /// Creates a new date-time. The date must be defined to the day.
    pub fn new(date: WeekDate, time: Time) -> Result<Self, Error> {
        if date.precision() == WeekDatePrecision::Day {
            Ok(Self { date, time })
        }
        else {
            Err(Error::range(format!("a date-time needs a week date defined to the day, not a {:?}-precision one", date.precision())))
        }
    }

    pub fn date(&self) -> WeekDate {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub(crate) fn instant(&self) -> TimeSpan {
        TimeSpan::of_days(self.date.days_since_epoch()) + self.time.span_since_utc_midnight()
    }
}


// Date-times are ordered by the instant they refer to, so 12:00 in UTC
// is the same as 13:00 an hour ahead of it. Ties go to the coarser time,
// then to local time over a time with an offset.
macro_rules! instant_ordering {
    ($($t:ident),*) => {
        $(
            impl $t {
                fn ordering_key(&self) -> (TimeSpan, TimePrecision, bool) {
                    (self.instant(), self.time.precision(), self.time.utc_offset().is_some())
                }
            }

            impl PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    self.ordering_key() == other.ordering_key()
                }
            }

            impl Eq for $t {}

            impl PartialOrd for $t {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl Ord for $t {
                fn cmp(&self, other: &Self) -> Ordering {
                    self.ordering_key().cmp(&other.ordering_key())
                }
            }

            impl fmt::Debug for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}({})", stringify!($t), self)
                }
            }
        )*
    }
}

instant_ordering!(CalendarDateTime, OrdinalDateTime, WeekDateTime);
