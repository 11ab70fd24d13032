//! Any date, time, or date-time.

use crate::cal::{CalendarDate, OrdinalDate, WeekDate, Time};
use crate::cal::{CalendarDateTime, OrdinalDateTime, WeekDateTime};


/// A **time point** is any one of the seven kinds of value that name a
/// point or a stretch of the timeline: a date of any kind, a time of
/// day, or a date of any kind with a time.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum TimePoint {
    CalendarDate(CalendarDate),
    OrdinalDate(OrdinalDate),
    WeekDate(WeekDate),
    Time(Time),
    CalendarDateTime(CalendarDateTime),
    OrdinalDateTime(OrdinalDateTime),
    WeekDateTime(WeekDateTime),
}

impl TimePoint {

    /// The name of this kind of time point, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            TimePoint::CalendarDate(_)      => "calendar date",
            TimePoint::OrdinalDate(_)       => "ordinal date",
            TimePoint::WeekDate(_)          => "week date",
            TimePoint::Time(_)              => "time",
            TimePoint::CalendarDateTime(_)  => "calendar date-time",
            TimePoint::OrdinalDateTime(_)   => "ordinal date-time",
            TimePoint::WeekDateTime(_)      => "week date-time",
        }
    }
}

impl From<CalendarDate> for TimePoint {
    fn from(p: CalendarDate) -> Self { TimePoint::CalendarDate(p) }
}

impl From<OrdinalDate> for TimePoint {
    fn from(p: OrdinalDate) -> Self { TimePoint::OrdinalDate(p) }
}

impl From<WeekDate> for TimePoint {
    fn from(p: WeekDate) -> Self { TimePoint::WeekDate(p) }
}

impl From<Time> for TimePoint {
    fn from(p: Time) -> Self { TimePoint::Time(p) }
}

impl From<CalendarDateTime> for TimePoint {
    fn from(p: CalendarDateTime) -> Self { TimePoint::CalendarDateTime(p) }
}

impl From<OrdinalDateTime> for TimePoint {
    fn from(p: OrdinalDateTime) -> Self { TimePoint::OrdinalDateTime(p) }
}

impl From<WeekDateTime> for TimePoint {
    fn from(p: WeekDateTime) -> Self { TimePoint::WeekDateTime(p) }
}
