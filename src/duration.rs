//! Nominal lengths of time, made of calendar components.
//!
//! Unlike a `TimeSpan`, a duration such as “one month” has no fixed
//! length: how many days it adds depends on the date it gets added to.

use std::fmt;

use crate::cal::{CalendarDatePrecision, TimePrecision, MAX_YEAR};
use crate::error::Error;
use crate::span::TimeSpan;
use crate::util::RangeExt;


/// A duration written with a letter after each component, such as
/// `P1Y2M10DT2H30M`.
///
/// Any of the six components may be left out, but at least one has to be
/// present. None of them can be negative, and only the last one present
/// may have a fractional part.
#[derive(PartialEq, Clone, Copy)]
pub struct DesignatedDuration {
    years: Option<f64>,
    months: Option<f64>,
    days: Option<f64>,
    hours: Option<f64>,
    minutes: Option<f64>,
    seconds: Option<f64>,
}

impl DesignatedDuration {

    /// Creates a duration from its six optional components.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::DesignatedDuration;
    ///
    /// assert!(DesignatedDuration::new(Some(1.0), None, None, Some(1.5), None, None).is_ok());
    /// assert!(DesignatedDuration::new(Some(1.5), None, None, Some(1.0), None, None).is_err());
    /// assert!(DesignatedDuration::new(None, None, None, None, None, None).is_err());
    /// ```
    pub fn new(years: Option<f64>, months: Option<f64>, days: Option<f64>,
               hours: Option<f64>, minutes: Option<f64>, seconds: Option<f64>) -> Result<Self, Error>
    {
        let duration = Self { years, months, days, hours, minutes, seconds };
        let present = duration.components().into_iter().flatten().collect::<Vec<_>>();

        if present.is_empty() {
            return Err(Error::range("a designated duration needs at least one component"));
        }

        if present.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(Error::range("the components of a duration cannot be negative"));
        }

        if present[.. present.len() - 1].iter().any(|c| c.fract() != 0.0) {
            return Err(Error::range("only the last component of a duration may be fractional"));
        }

        Ok(duration)
    }

    /// Creates a duration covering an exact span, in days, hours,
    /// minutes, and seconds. Components that come out as zero are left
    /// out, except that a zero span gives `PT0S`.
    pub fn from_span(span: TimeSpan) -> Result<Self, Error> {
        if span.is_negative() {
            return Err(Error::range(format!("a duration cannot be negative, but {} is", span)));
        }

        let (seconds, nanoseconds) = span.lengths();
        let nonzero = |n: i64| if n == 0 { None } else { Some(n as f64) };

        let days    = nonzero(seconds / 86_400);
        let hours   = nonzero(seconds / 3600 % 24);
        let minutes = nonzero(seconds / 60 % 60);
        let mut secs = nonzero(seconds % 60);

        if nanoseconds != 0 {
            secs = Some(secs.unwrap_or(0.0) + nanoseconds as f64 / 1e9);
        }

        if days.is_none() && hours.is_none() && minutes.is_none() && secs.is_none() {
            secs = Some(0.0);
        }

        Self::new(None, None, days, hours, minutes, secs)
    }

    pub fn years(&self) -> Option<f64> { self.years }
    pub fn months(&self) -> Option<f64> { self.months }
    pub fn days(&self) -> Option<f64> { self.days }
    pub fn hours(&self) -> Option<f64> { self.hours }
    pub fn minutes(&self) -> Option<f64> { self.minutes }
    pub fn seconds(&self) -> Option<f64> { self.seconds }

    /// All six components, from years down to seconds.
    pub(crate) fn components(&self) -> [Option<f64>; 6] {
        [self.years, self.months, self.days, self.hours, self.minutes, self.seconds]
    }

    pub fn has_date_components(&self) -> bool {
        self.years.is_some() || self.months.is_some() || self.days.is_some()
    }

    pub fn has_time_components(&self) -> bool {
        self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some()
    }
}

impl fmt::Debug for DesignatedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DesignatedDuration({})", self)
    }
}


/// A duration in years, months, and days, written in the alternative
/// format as `P0002-10-15`. It can also be a number of centuries, `P02`.
///
/// Each component stays below the point where it would carry into the
/// next one, so there are at most 12 months and 30 days.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct CalendarDateDuration {
    centuries: i64,
    years: i64,
    months: u8,
    days: u8,
    precision: CalendarDatePrecision,
    is_expanded: bool,
}

impl CalendarDateDuration {

    pub fn from_centuries(centuries: i64) -> Result<Self, Error> {
        let years = centuries.checked_mul(100)
                             .ok_or_else(|| Error::range(format!("{} centuries", centuries)))?;

        Ok(Self { centuries, precision: CalendarDatePrecision::Century, ..Self::from_years(years)? })
    }

    pub fn from_years(years: i64) -> Result<Self, Error> {
        if !years.is_within(0 .. MAX_YEAR + 1) {
            return Err(Error::range(format!("a duration of {} years", years)));
        }

        Ok(Self {
            centuries: years / 100, years, months: 0, days: 0,
            precision: CalendarDatePrecision::Year,
            is_expanded: years > 9999,
        })
    }

    pub fn from_years_months(years: i64, months: u8) -> Result<Self, Error> {
        if months > 12 {
            return Err(Error::range(format!("a duration of {} months should carry into the years", months)));
        }

        Ok(Self { months, precision: CalendarDatePrecision::Month, ..Self::from_years(years)? })
    }

    /// Creates a duration in years, months, and days.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn new(years: i64, months: u8, days: u8) -> Result<Self, Error> {
        if days > 30 {
            return Err(Error::range(format!("a duration of {} days should carry into the months", days)));
        }

        Ok(Self { days, precision: CalendarDatePrecision::Day, ..Self::from_years_months(years, months)? })
    }

    /// Returns a copy of this duration that gets written in the expanded
    /// form, with a sign, if `expanded` is true.
    pub fn with_expanded(self, expanded: bool) -> Self {
        Self { is_expanded: expanded || self.years > 9999, ..self }
    }

    pub fn centuries(&self) -> Option<i64> {
        if self.precision == CalendarDatePrecision::Century { Some(self.centuries) } else { None }
    }

    pub fn years(&self) -> Option<i64> {
        if self.precision >= CalendarDatePrecision::Year { Some(self.years) } else { None }
    }

    pub fn months(&self) -> Option<u8> {
        if self.precision >= CalendarDatePrecision::Month { Some(self.months) } else { None }
    }

    pub fn days(&self) -> Option<u8> {
        if self.precision == CalendarDatePrecision::Day { Some(self.days) } else { None }
    }

    pub fn precision(&self) -> CalendarDatePrecision {
        self.precision
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// The total number of years, including those in whole centuries.
    pub(crate) fn total_years(&self) -> i64 {
        self.years
    }
}

impl fmt::Debug for CalendarDateDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDateDuration({})", self)
    }
}


/// A duration in years and days, written in the alternative format as
/// `P0002-045`. There can be up to 999 days.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct OrdinalDateDuration {
    years: i64,
    days: u16,
    is_expanded: bool,
}

impl OrdinalDateDuration {

    pub fn new(years: i64, days: u16) -> Result<Self, Error> {
        if !years.is_within(0 .. MAX_YEAR + 1) {
            Err(Error::range(format!("a duration of {} years", years)))
        }
        else if days > 999 {
            Err(Error::range(format!("an ordinal duration can have up to 999 days, not {}", days)))
        }
        else {
            Ok(Self { years, days, is_expanded: years > 9999 })
        }
    }

    pub fn with_expanded(self, expanded: bool) -> Self {
        Self { is_expanded: expanded || self.years > 9999, ..self }
    }

    pub fn years(&self) -> i64 {
        self.years
    }

    pub fn days(&self) -> u16 {
        self.days
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// Converts this duration to years, months, and days, taking every
    /// month to be 30 days long. Twelve months or more carry into the
    /// years.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::{CalendarDateDuration, OrdinalDateDuration};
    ///
    /// let ordinal = OrdinalDateDuration::new(1, 400).unwrap();
    /// let calendar = CalendarDateDuration::new(2, 1, 10).unwrap();
    /// assert_eq!(ordinal.to_calendar_date_duration(), Ok(calendar));
    /// ```
    pub fn to_calendar_date_duration(&self) -> Result<CalendarDateDuration, Error> {
        let months = self.days / 30;
        let days = self.days % 30;

        let years = self.years + (months / 12) as i64;
        let months = months % 12;

        Ok(CalendarDateDuration::new(years, months as u8, days as u8)?.with_expanded(self.is_expanded))
    }
}

impl fmt::Debug for OrdinalDateDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrdinalDateDuration({})", self)
    }
}


/// A duration in hours, minutes, and seconds, written in the alternative
/// format as `PT02:30:00`.
///
/// Only the last component present may have a fractional part.
#[derive(PartialEq, Clone, Copy)]
pub struct TimeDuration {
    hours: f64,
    minutes: f64,
    seconds: f64,
    precision: TimePrecision,
}

impl TimeDuration {

    pub fn from_hours(hours: f64) -> Result<Self, Error> {
        Self::new(hours, 0.0, 0.0, TimePrecision::Hour)
    }

    pub fn hm(hours: f64, minutes: f64) -> Result<Self, Error> {
        Self::new(hours, minutes, 0.0, TimePrecision::Minute)
    }

    pub fn hms(hours: f64, minutes: f64, seconds: f64) -> Result<Self, Error> {
        Self::new(hours, minutes, seconds, TimePrecision::Second)
    }

    fn new(hours: f64, minutes: f64, seconds: f64, precision: TimePrecision) -> Result<Self, Error> {
        if !(0.0 ..= 24.0).contains(&hours)
        || !(0.0 ..= 60.0).contains(&minutes)
        || !(0.0 ..= 60.0).contains(&seconds)
        {
            return Err(Error::range(format!("a time duration of {}:{}:{}", hours, minutes, seconds)));
        }

        let whole_components: &[f64] = match precision {
            TimePrecision::Hour    => &[],
            TimePrecision::Minute  => &[hours],
            TimePrecision::Second  => &[hours, minutes],
        };

        if whole_components.iter().any(|c| c.fract() != 0.0) {
            return Err(Error::range("only the last component of a duration may be fractional"));
        }

        Ok(Self { hours, minutes, seconds, precision })
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn minutes(&self) -> Option<f64> {
        if self.precision >= TimePrecision::Minute { Some(self.minutes) } else { None }
    }

    pub fn seconds(&self) -> Option<f64> {
        if self.precision == TimePrecision::Second { Some(self.seconds) } else { None }
    }

    pub fn precision(&self) -> TimePrecision {
        self.precision
    }
}

impl fmt::Debug for TimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeDuration({})", self)
    }
}


/// A calendar date duration defined to the day, followed by a time
/// duration, written as `P0002-10-15T10:30:00`.
#[derive(PartialEq, Clone, Copy)]
pub struct CalendarDateTimeDuration {
    date: CalendarDateDuration,
    time: TimeDuration,
}

impl CalendarDateTimeDuration {

    pub fn new(date: CalendarDateDuration, time: TimeDuration) -> Result<Self, Error> {
        if date.precision() == CalendarDatePrecision::Day {
            Ok(Self { date, time })
        }
        else {
            Err(Error::range(format!("a date-time duration needs a date duration defined to the day, not a {:?}-precision one", date.precision())))
        }
    }

    pub fn date(&self) -> CalendarDateDuration {
        self.date
    }

    pub fn time(&self) -> TimeDuration {
        self.time
    }
}

impl fmt::Debug for CalendarDateTimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDateTimeDuration({})", self)
    }
}


/// An ordinal date duration followed by a time duration, written as
/// `P0002-045T10:30:00`.
#[derive(PartialEq, Clone, Copy)]
pub struct OrdinalDateTimeDuration {
    date: OrdinalDateDuration,
    time: TimeDuration,
}

impl OrdinalDateTimeDuration {

    pub fn new(date: OrdinalDateDuration, time: TimeDuration) -> Self {
        Self { date, time }
    }

    pub fn date(&self) -> OrdinalDateDuration {
        self.date
    }

    pub fn time(&self) -> TimeDuration {
        self.time
    }

    /// Converts the date part to years, months, and days, with 30-day
    /// months. The time part stays the same.
    pub fn to_calendar_date_time_duration(&self) -> Result<CalendarDateTimeDuration, Error> {
        CalendarDateTimeDuration::new(self.date.to_calendar_date_duration()?, self.time)
    }
}

impl fmt::Debug for OrdinalDateTimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrdinalDateTimeDuration({})", self)
    }
}


/// Any one of the six kinds of duration.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Duration {
    CalendarDate(CalendarDateDuration),
    OrdinalDate(OrdinalDateDuration),
    CalendarDateTime(CalendarDateTimeDuration),
    OrdinalDateTime(OrdinalDateTimeDuration),
    Time(TimeDuration),
    Designated(DesignatedDuration),
}

impl Duration {

    /// The name of this kind of duration, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Duration::CalendarDate(_)      => "calendar date duration",
            Duration::OrdinalDate(_)       => "ordinal date duration",
            Duration::CalendarDateTime(_)  => "calendar date-time duration",
            Duration::OrdinalDateTime(_)   => "ordinal date-time duration",
            Duration::Time(_)              => "time duration",
            Duration::Designated(_)        => "designated duration",
        }
    }
}

impl From<CalendarDateDuration> for Duration {
    fn from(d: CalendarDateDuration) -> Self { Duration::CalendarDate(d) }
}

impl From<OrdinalDateDuration> for Duration {
    fn from(d: OrdinalDateDuration) -> Self { Duration::OrdinalDate(d) }
}

impl From<CalendarDateTimeDuration> for Duration {
    fn from(d: CalendarDateTimeDuration) -> Self { Duration::CalendarDateTime(d) }
}

impl From<OrdinalDateTimeDuration> for Duration {
    fn from(d: OrdinalDateTimeDuration) -> Self { Duration::OrdinalDateTime(d) }
}

impl From<TimeDuration> for Duration {
    fn from(d: TimeDuration) -> Self { Duration::Time(d) }
}

impl From<DesignatedDuration> for Duration {
    fn from(d: DesignatedDuration) -> Self { Duration::Designated(d) }
}


#[cfg(test)]
mod test {
    use super::*;

    mod designated {
        use super::*;

        #[test]
        fn fraction_on_last() {
            assert!(DesignatedDuration::new(None, None, None, Some(1.0), Some(30.5), None).is_ok());
            assert!(DesignatedDuration::new(None, None, None, Some(1.5), Some(30.0), None).is_err());
        }

        #[test]
        fn negative() {
            assert!(DesignatedDuration::new(Some(-1.0), None, None, None, None, None).unwrap_err().is_out_of_range());
        }

        #[test]
        fn from_span() {
            let span = TimeSpan::of_days(2) + TimeSpan::of(3600 + 1);
            let duration = DesignatedDuration::from_span(span).unwrap();
            assert_eq!(duration.components(), [None, None, Some(2.0), Some(1.0), None, Some(1.0)]);
        }

        #[test]
        fn from_zero_span() {
            let duration = DesignatedDuration::from_span(TimeSpan::zero()).unwrap();
            assert_eq!(duration.seconds(), Some(0.0));
            assert!(DesignatedDuration::from_span(TimeSpan::of(-1)).is_err());
        }

        #[test]
        fn from_fractional_span() {
            let duration = DesignatedDuration::from_span(TimeSpan::of_nanos(61, 500_000_000)).unwrap();
            assert_eq!(duration.minutes(), Some(1.0));
            assert_eq!(duration.seconds(), Some(1.5));
        }
    }

    mod calendar {
        use super::*;

        #[test]
        fn carry_points() {
            assert!(CalendarDateDuration::new(1, 12, 30).is_ok());
            assert!(CalendarDateDuration::new(1, 13, 0).is_err());
            assert!(CalendarDateDuration::new(1, 0, 31).is_err());
        }

        #[test]
        fn centuries() {
            let duration = CalendarDateDuration::from_centuries(3).unwrap();
            assert_eq!(duration.centuries(), Some(3));
            assert_eq!(duration.years(), None);
            assert_eq!(duration.total_years(), 300);
        }
    }

    mod ordinal {
        use super::*;

        #[test]
        fn day_limit() {
            assert!(OrdinalDateDuration::new(0, 999).is_ok());
            assert!(OrdinalDateDuration::new(0, 1000).is_err());
        }

        #[test]
        fn to_calendar() {
            let duration = OrdinalDateDuration::new(0, 45).unwrap().to_calendar_date_duration().unwrap();
            assert_eq!((duration.years(), duration.months(), duration.days()), (Some(0), Some(1), Some(15)));
        }

        #[test]
        fn date_time_to_calendar() {
            let time = TimeDuration::hm(1.0, 30.0).unwrap();
            let duration = OrdinalDateTimeDuration::new(OrdinalDateDuration::new(0, 999).unwrap(), time);
            let converted = duration.to_calendar_date_time_duration().unwrap();
            assert_eq!(converted.date(), CalendarDateDuration::new(2, 9, 9).unwrap());
            assert_eq!(converted.time(), time);
        }
    }

    mod time {
        use super::*;

        #[test]
        fn limits() {
            assert!(TimeDuration::hms(24.0, 60.0, 60.0).is_ok());
            assert!(TimeDuration::from_hours(25.0).is_err());
            assert!(TimeDuration::hm(1.5, 0.0).is_err());
        }
    }
}
