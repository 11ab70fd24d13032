//! Exact lengths of elapsed time.

use std::fmt;
use std::ops::{Add, Sub, Mul, Neg};

use num_traits::ToPrimitive;

use crate::error::Error;
use crate::util::split_cycles;


const NANOS_PER_SECOND: i64 = 1_000_000_000;
const SECONDS_PER_DAY: i64 = 86_400;


/// A **time span** is an exact, signed length of elapsed time, with
/// nanosecond precision.
///
/// This is what subtracting one time point from another gives: unlike a
/// duration, it has no calendar components, so a span of a day is always
/// exactly 86,400 seconds long.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Hash)]
pub struct TimeSpan {
    seconds: i64,

    /// Always within `0 .. 1_000_000_000`, even for negative spans, so
    /// comparing the two fields in order compares the spans.
    nanoseconds: i32,
}

impl TimeSpan {

    /// Create a new zero-length span.
    pub fn zero() -> Self {
        Self { seconds: 0, nanoseconds: 0 }
    }

    /// Create a new span that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Create a new span that’s the given number of whole days long.
    pub fn of_days(days: i64) -> Self {
        Self::of(days * SECONDS_PER_DAY)
    }

    /// Create a new span that’s the given number of seconds and
    /// nanoseconds long. Nanoseconds outside of a single second are
    /// carried into the seconds.
    pub fn of_nanos(seconds: i64, nanoseconds: i64) -> Self {
        let (carry, nanoseconds) = split_cycles(nanoseconds, NANOS_PER_SECOND);
        Self { seconds: seconds + carry, nanoseconds: nanoseconds as i32 }
    }

    /// Create a new span from a possibly-fractional number of seconds,
    /// rounded to the nearest nanosecond.
    pub fn of_fractional_seconds(seconds: f64) -> Result<Self, Error> {
        let whole = seconds.floor();
        let nanoseconds = ((seconds - whole) * NANOS_PER_SECOND as f64).round();

        match (whole.to_i64(), nanoseconds.to_i64()) {
            (Some(s), Some(n))  => Ok(Self::of_nanos(s, n)),
            _                   => Err(Error::range(format!("{} seconds does not fit in a time span", seconds))),
        }
    }

    /// Return the seconds and nanoseconds portions of the span as a
    /// 2-element tuple. The nanoseconds are never negative.
    pub fn lengths(&self) -> (i64, i32) {
        (self.seconds, self.nanoseconds)
    }

    /// The number of whole days in this span, rounding towards negative
    /// infinity.
    pub fn whole_days(&self) -> i64 {
        split_cycles(self.seconds, SECONDS_PER_DAY).0
    }

    /// The length of this span in seconds, as a float.
    pub fn as_seconds_f64(&self) -> f64 {
        self.seconds as f64 + self.nanoseconds as f64 / NANOS_PER_SECOND as f64
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }
}

impl Add<TimeSpan> for TimeSpan {
    type Output = TimeSpan;

    fn add(self, rhs: TimeSpan) -> TimeSpan {
        let ns = self.nanoseconds as i64 + rhs.nanoseconds as i64;
        TimeSpan::of_nanos(self.seconds + rhs.seconds, ns)
    }
}

impl Sub<TimeSpan> for TimeSpan {
    type Output = TimeSpan;

    fn sub(self, rhs: TimeSpan) -> TimeSpan {
        let ns = self.nanoseconds as i64 - rhs.nanoseconds as i64;
        TimeSpan::of_nanos(self.seconds - rhs.seconds, ns)
    }
}

impl Neg for TimeSpan {
    type Output = TimeSpan;

    fn neg(self) -> TimeSpan {
        TimeSpan::of_nanos(-self.seconds, -(self.nanoseconds as i64))
    }
}

impl Mul<i64> for TimeSpan {
    type Output = TimeSpan;

    fn mul(self, amount: i64) -> TimeSpan {
        let ns = self.nanoseconds as i64 * amount;
        TimeSpan::of_nanos(self.seconds * amount, ns)
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanoseconds == 0 {
            write!(f, "{}s", self.seconds)
        }
        else {
            write!(f, "{}s", self.as_seconds_f64())
        }
    }
}
