use std::str::FromStr;

use crate::duration::Duration;
use crate::error::Error;
use crate::interval::TimeInterval;
use crate::parse::Cursor;
use crate::point::TimePoint;


impl TimeInterval {

    /// Reads an interval: two parts split by a `/`, either of which can be
    /// a duration, but not both.
    ///
    /// The start and the end each get their own year length, as they
    /// are written independently.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::TimeInterval;
    ///
    /// let interval = TimeInterval::parse("P1Y/2001-06-01", 4, 4).unwrap();
    /// assert_eq!(interval.start().unwrap().to_string(), "2000-06-01");
    /// ```
    pub fn parse(input: &str, start_year_length: usize, end_year_length: usize) -> Result<Self, Error> {
        let (first, second) = match input.split_once('/') {
            Some(halves)  => halves,
            None          => return Err(Cursor::new(input).error("expected a ‘/’ between the two halves of an interval")),
        };

        if second.contains('/') {
            return Err(Cursor::new(input).error("an interval has only two halves"));
        }

        if first.starts_with('P') {
            let duration = Duration::parse(first, start_year_length)?;
            let end = TimePoint::parse(second, end_year_length)?;
            Ok(TimeInterval::DurationEnd { duration, end })
        }
        else if second.contains('P') {
            let start = TimePoint::parse(first, start_year_length)?;
            let duration = Duration::parse(second, end_year_length)?;
            Ok(TimeInterval::StartDuration { start, duration })
        }
        else {
            let start = TimePoint::parse(first, start_year_length)?;
            let end = TimePoint::parse(second, end_year_length)?;
            Ok(TimeInterval::StartEnd { start, end })
        }
    }
}

impl FromStr for TimeInterval {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, 4, 4)
    }
}
