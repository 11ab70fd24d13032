//! Times of day.

use std::fmt;

use crate::cal::offset::UtcOffset;
use crate::error::Error;
use crate::span::TimeSpan;
use crate::util::{snap, RangeExt};


/// How much of a time of day is defined.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum TimePrecision {
    Hour,
    Minute,
    Second,
}


/// A **time** is a time of day, defined down to the hour, minute, or
/// second, optionally at a fixed offset from UTC.
///
/// The last defined component may have a fractional part, which stands in
/// for the components that were left off: `Time::from_hour(14.5)` is half
/// past two, at hour precision. Every component before it is a whole
/// number.
///
/// A time without an offset is in local time, whatever that happens to
/// be. A time with a zero offset is in UTC.
#[derive(PartialEq, Clone, Copy)]
pub struct Time {
    hour: f64,
    minute: f64,
    second: f64,
    utc_offset: Option<UtcOffset>,
    precision: TimePrecision,
}

impl Time {

    /// Returns the time at midnight, at second precision.
    pub fn midnight() -> Self {
        Self { hour: 0.0, minute: 0.0, second: 0.0, utc_offset: None, precision: TimePrecision::Second }
    }

    /// Creates a time defined only to the hour, which may be fractional.
    pub fn from_hour(hour: f64) -> Result<Self, Error> {
        Self::new(hour, 0.0, 0.0, TimePrecision::Hour)
    }

    /// Creates a time defined to the minute. The hour has to be a whole
    /// number, but the minute may be fractional.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hm(hour: f64, minute: f64) -> Result<Self, Error> {
        Self::new(hour, minute, 0.0, TimePrecision::Minute)
    }

    /// Creates a time defined to the second. The hour and minute have to
    /// be whole numbers, but the second may be fractional.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms(hour: f64, minute: f64, second: f64) -> Result<Self, Error> {
        Self::new(hour, minute, second, TimePrecision::Second)
    }

    fn new(hour: f64, minute: f64, second: f64, precision: TimePrecision) -> Result<Self, Error> {
        let within_day = hour.is_within(0.0 .. 24.0)
                      && minute.is_within(0.0 .. 60.0)
                      && second.is_within(0.0 .. 60.0);

        // 24:00:00 is the end of the day, and nothing can come after it
        let end_of_day = hour == 24.0 && minute == 0.0 && second == 0.0;

        if !within_day && !end_of_day {
            return Err(Error::range(format!("time of {}:{}:{}", hour, minute, second)));
        }

        let whole_components: &[f64] = match precision {
            TimePrecision::Hour    => &[][..],
            TimePrecision::Minute  => &[hour][..],
            TimePrecision::Second  => &[hour, minute][..],
        };

        if whole_components.iter().any(|c| c.fract() != 0.0) {
            return Err(Error::range("only the last component of a time may be fractional"));
        }

        Ok(Self { hour, minute, second, utc_offset: None, precision })
    }

    /// Builds a time at the given precision from a number of seconds
    /// since midnight, putting any leftover fraction into the last
    /// component.
    pub(crate) fn from_seconds(seconds: f64, precision: TimePrecision, utc_offset: Option<UtcOffset>) -> Result<Self, Error> {
        let seconds = snap(seconds);
        let hour = (seconds / 3600.0).floor();
        let minute = ((seconds - hour * 3600.0) / 60.0).floor();

        let time = match precision {
            TimePrecision::Hour    => Self::from_hour(snap(seconds / 3600.0)),
            TimePrecision::Minute  => Self::hm(hour, snap((seconds - hour * 3600.0) / 60.0)),
            TimePrecision::Second  => Self::hms(hour, minute, snap(seconds - hour * 3600.0 - minute * 60.0)),
        }?;

        Ok(time.with_utc_offset(utc_offset))
    }

    /// Returns a copy of this time at the given offset, or in local time
    /// for `None`. The components stay the same.
    pub fn with_utc_offset(self, utc_offset: impl Into<Option<UtcOffset>>) -> Self {
        Self { utc_offset: utc_offset.into(), ..self }
    }

    pub fn hour(&self) -> f64 {
        self.hour
    }

    /// The minute of the hour, if this time is defined to the minute.
    pub fn minute(&self) -> Option<f64> {
        if self.precision >= TimePrecision::Minute { Some(self.minute) } else { None }
    }

    /// The second of the minute, if this time is defined to the second.
    pub fn second(&self) -> Option<f64> {
        if self.precision == TimePrecision::Second { Some(self.second) } else { None }
    }

    pub fn utc_offset(&self) -> Option<UtcOffset> {
        self.utc_offset
    }

    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    /// The number of seconds since midnight, in local time.
    pub fn seconds_since_midnight(&self) -> f64 {
        self.hour * 3600.0 + self.minute * 60.0 + self.second
    }

    /// The span since midnight, shifted back to UTC by the offset.
    pub(crate) fn span_since_utc_midnight(&self) -> TimeSpan {
        let nanoseconds = (self.seconds_since_midnight() * 1e9).round() as i64;
        let offset = self.utc_offset.map_or(0, UtcOffset::to_seconds);
        TimeSpan::of_nanos(-offset, nanoseconds)
    }
}

impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time({})", self)
    }
}
