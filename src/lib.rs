#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for ISO-8601 dates, times, durations, and intervals.
//!
//! Values keep the *precision* they were written with: a date can be a
//! whole century, a year, a month, or a day, and a time can stop at the
//! hour, the minute, or the second, with a fraction on the last
//! component. Arithmetic respects this, so adding a month to a month
//! gives a month, and adding days to a year gives a day.
//!
//! # Examples
//!
//! ```
//! use isodate::{calc, Duration, TimePoint};
//!
//! let date: TimePoint = "2000-01-31".parse().unwrap();
//! let month: Duration = "P1M".parse().unwrap();
//! assert_eq!(calc::add(&date, &month).unwrap().to_string(), "2000-03-02");
//!
//! let time: TimePoint = "T14,5".parse().unwrap();
//! let minutes: Duration = "PT20M".parse().unwrap();
//! assert_eq!(calc::add(&time, &minutes).unwrap().to_string(), "T14:50");
//! ```

#[macro_use]
mod logging;

mod error;
mod util;

pub mod cal;
pub mod calc;
pub mod fmt;

mod duration;
mod interval;
mod parse;
mod point;
mod span;

pub use crate::duration::{Duration, DesignatedDuration, CalendarDateDuration, OrdinalDateDuration, TimeDuration};
pub use crate::duration::{CalendarDateTimeDuration, OrdinalDateTimeDuration};
pub use crate::error::Error;
pub use crate::fmt::{DecimalSeparator, FormatInfo, IsoFormat};
pub use crate::interval::TimeInterval;
pub use crate::point::TimePoint;
pub use crate::span::TimeSpan;
