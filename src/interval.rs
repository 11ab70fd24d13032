//! Stretches of the timeline between two points.

use std::fmt;

use crate::calc;
use crate::duration::{DesignatedDuration, Duration};
use crate::error::Error;
use crate::point::TimePoint;


/// A **time interval** is written in one of three ways: as its start and
/// end, as its start and how long it lasts, or as how long it lasts and
/// its end. Any of them can be converted to the others by doing the
/// arithmetic that fills in the missing piece.
#[derive(PartialEq, Clone, Copy)]
pub enum TimeInterval {
    StartEnd { start: TimePoint, end: TimePoint },
    StartDuration { start: TimePoint, duration: Duration },
    DurationEnd { duration: Duration, end: TimePoint },
}

impl TimeInterval {

    /// The point this interval starts at, working it out from the end and
    /// the duration if need be.
    pub fn start(&self) -> Result<TimePoint, Error> {
        match self {
            TimeInterval::StartEnd { start, .. }       => Ok(*start),
            TimeInterval::StartDuration { start, .. }  => Ok(*start),
            TimeInterval::DurationEnd { duration, end } => calc::subtract(end, duration),
        }
    }

    /// The point this interval ends at, working it out from the start and
    /// the duration if need be.
    pub fn end(&self) -> Result<TimePoint, Error> {
        match self {
            TimeInterval::StartEnd { end, .. }            => Ok(*end),
            TimeInterval::StartDuration { start, duration } => calc::add(start, duration),
            TimeInterval::DurationEnd { end, .. }         => Ok(*end),
        }
    }

    /// How long this interval lasts. An interval given by its two ends
    /// lasts for the exact span between them, in days and smaller
    /// components.
    pub fn duration(&self) -> Result<Duration, Error> {
        match self {
            TimeInterval::StartEnd { start, end } => {
                let span = calc::difference(end, start)?;
                Ok(DesignatedDuration::from_span(span)?.into())
            }
            TimeInterval::StartDuration { duration, .. }  => Ok(*duration),
            TimeInterval::DurationEnd { duration, .. }    => Ok(*duration),
        }
    }

    /// Converts this interval to the start-and-end form.
    pub fn to_start_end(&self) -> Result<Self, Error> {
        Ok(TimeInterval::StartEnd { start: self.start()?, end: self.end()? })
    }

    /// Converts this interval to the start-and-duration form.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::TimeInterval;
    ///
    /// let interval: TimeInterval = "2007-03-01T13:00:00Z/2008-05-11T15:30:00Z".parse().unwrap();
    /// let converted = interval.to_start_duration().unwrap();
    /// assert_eq!(converted.to_string(), "2007-03-01T13:00:00Z/P437DT2H30M");
    /// ```
    pub fn to_start_duration(&self) -> Result<Self, Error> {
        Ok(TimeInterval::StartDuration { start: self.start()?, duration: self.duration()? })
    }

    /// Converts this interval to the duration-and-end form.
    pub fn to_duration_end(&self) -> Result<Self, Error> {
        Ok(TimeInterval::DurationEnd { duration: self.duration()?, end: self.end()? })
    }
}

impl fmt::Debug for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeInterval({})", self)
    }
}
