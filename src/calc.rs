//! Adding durations to time points, subtracting them, and measuring the
//! span between two points.
//!
//! Every operation works on calendar dates internally: ordinal and week
//! dates are converted to calendar dates first, and the result gets
//! converted back to the kind of point that was passed in.
//!
//! Adding a duration happens in three steps. First, its components are
//! folded together from years down to seconds, with the fraction of each
//! one carried into the next: a year is 12 months, a month is 30 days, a
//! day is 24 hours, and hours and minutes are 60 of the next unit. Then
//! the precision of the result is worked out: it is the finest of the
//! point’s own precision and every unit the duration supplied or carried
//! a fraction into. Finally, the components are added to the point and
//! normalized from seconds upwards, with days that overflow or underflow
//! their month rolling into the neighbouring months.

use std::cmp;

use crate::cal::{CalendarDate, CalendarDatePrecision, CalendarDateTime, Time, TimePrecision, WeekDatePrecision};
use crate::cal::{century_of_year, civil_from_days, days_from_civil, DatePiece, Month, MAX_YEAR};
use crate::cal::date::check_year;
use crate::duration::Duration;
use crate::error::Error;
use crate::point::TimePoint;
use crate::span::TimeSpan;
use crate::util::{snap, split_cycles, whole};


/// Adds a duration to a time point.
///
/// ### Examples
///
/// ```
/// use isodate::{calc, CalendarDateDuration, TimePoint};
/// use isodate::cal::CalendarDate;
///
/// let date = TimePoint::from(CalendarDate::ymd(2000, 1, 31).unwrap());
/// let month = CalendarDateDuration::from_years_months(0, 1).unwrap();
///
/// let result = calc::add(&date, &month.into()).unwrap();
/// assert_eq!(result, CalendarDate::ymd(2000, 3, 2).unwrap().into());
/// ```
pub fn add(point: &TimePoint, duration: &Duration) -> Result<TimePoint, Error> {
    apply(point, duration, 1.0)
}

/// Subtracts a duration from a time point.
pub fn subtract(point: &TimePoint, duration: &Duration) -> Result<TimePoint, Error> {
    apply(point, duration, -1.0)
}

fn apply(point: &TimePoint, duration: &Duration, sign: f64) -> Result<TimePoint, Error> {
    trace!("Applying {:?} (sign {}) to {:?}", duration, sign, point);

    let for_dates = matches!(duration, Duration::CalendarDate(_) | Duration::OrdinalDate(_) | Duration::Designated(_));
    let for_times = matches!(duration, Duration::Time(_) | Duration::Designated(_));

    let result: TimePoint = match point {
        TimePoint::CalendarDate(date) if for_dates => {
            shift_date(date, duration, sign)?.into()
        }
        TimePoint::OrdinalDate(date) if for_dates => {
            shift_date(&date.to_calendar_date()?, duration, sign)?.to_ordinal_date()?.into()
        }
        TimePoint::WeekDate(date) if for_dates => {
            shift_date(&date.to_calendar_date()?, duration, sign)?.to_week_date(WeekDatePrecision::Day)?.into()
        }
        TimePoint::Time(time) if for_times => {
            shift_time(time, duration, sign)?.into()
        }
        TimePoint::CalendarDateTime(date_time) => {
            shift_date_time(date_time, duration, sign)?.into()
        }
        TimePoint::OrdinalDateTime(date_time) => {
            shift_date_time(&date_time.to_calendar_date_time()?, duration, sign)?.to_ordinal_date_time()?.into()
        }
        TimePoint::WeekDateTime(date_time) => {
            shift_date_time(&date_time.to_calendar_date_time()?, duration, sign)?.to_week_date_time()?.into()
        }
        _ => {
            let verb = if sign > 0.0 { "added to" } else { "subtracted from" };
            return Err(Error::unsupported(format!("a {} cannot be {} a {}", duration.kind(), verb, point.kind())));
        }
    };

    Ok(result)
}


/// Returns the exact span of time from `earlier` to `later`, which is
/// negative if `later` is actually the earlier of the two.
///
/// Dates have to be defined to the day, and count as midnight in UTC
/// when measured against a date-time. Times of day can be measured
/// against other times of day, or against the time part of a date-time.
/// Offsets from UTC are taken into account.
///
/// ### Examples
///
/// ```
/// use isodate::{calc, TimePoint, TimeSpan};
/// use isodate::cal::CalendarDate;
///
/// let later = TimePoint::from(CalendarDate::ymd(2000, 1, 1).unwrap());
/// let earlier = TimePoint::from(CalendarDate::ymd(1600, 1, 1).unwrap());
/// assert_eq!(calc::difference(&later, &earlier), Ok(TimeSpan::of_days(146_097)));
/// ```
pub fn difference(later: &TimePoint, earlier: &TimePoint) -> Result<TimeSpan, Error> {
    let unsupported = || Error::unsupported(format!("a {} cannot be subtracted from a {}", earlier.kind(), later.kind()));

    match (moment(later).ok_or_else(unsupported)?, moment(earlier).ok_or_else(unsupported)?) {
        (Moment::Day(a),        Moment::Day(b))        => Ok(TimeSpan::of_days(a - b)),
        (Moment::Instant(a, _), Moment::Instant(b, _)) => Ok(a - b),
        (Moment::Instant(a, _), Moment::Day(b))        => Ok(a - TimeSpan::of_days(b)),
        (Moment::Day(a),        Moment::Instant(b, _)) => Ok(TimeSpan::of_days(a) - b),
        (Moment::Instant(_, a), Moment::TimeOfDay(b))  => Ok(a - b),
        (Moment::TimeOfDay(a),  Moment::Instant(_, b)) => Ok(a - b),
        (Moment::TimeOfDay(a),  Moment::TimeOfDay(b))  => Ok(a - b),
        _                                              => Err(unsupported()),
    }
}

/// Where a time point sits, for measuring differences.
enum Moment {

    /// A whole day, counted from 1970-01-01.
    Day(i64),

    /// An instant, counted from 1970-01-01T00:00Z, and its time of day
    /// counted from midnight UTC.
    Instant(TimeSpan, TimeSpan),

    /// A time of day with no date, counted from midnight UTC.
    TimeOfDay(TimeSpan),
}

fn moment(point: &TimePoint) -> Option<Moment> {
    match point {
        TimePoint::CalendarDate(d) if d.precision() == CalendarDatePrecision::Day  => Some(Moment::Day(d.first_day())),
        TimePoint::WeekDate(d)     if d.precision() == WeekDatePrecision::Day      => Some(Moment::Day(d.first_day())),
        TimePoint::OrdinalDate(d)         => Some(Moment::Day(d.first_day())),
        TimePoint::Time(t)                => Some(Moment::TimeOfDay(t.span_since_utc_midnight())),
        TimePoint::CalendarDateTime(dt)   => Some(Moment::Instant(dt.instant(), dt.time().span_since_utc_midnight())),
        TimePoint::OrdinalDateTime(dt)    => Some(Moment::Instant(dt.instant(), dt.time().span_since_utc_midnight())),
        TimePoint::WeekDateTime(dt)       => Some(Moment::Instant(dt.instant(), dt.time().span_since_utc_midnight())),
        _                                 => None,
    }
}


/// The units of a point, from coarsest to finest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
enum Level {
    Century,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl From<CalendarDatePrecision> for Level {
    fn from(precision: CalendarDatePrecision) -> Self {
        match precision {
            CalendarDatePrecision::Century  => Level::Century,
            CalendarDatePrecision::Year     => Level::Year,
            CalendarDatePrecision::Month    => Level::Month,
            CalendarDatePrecision::Day      => Level::Day,
        }
    }
}

impl From<TimePrecision> for Level {
    fn from(precision: TimePrecision) -> Self {
        match precision {
            TimePrecision::Hour    => Level::Hour,
            TimePrecision::Minute  => Level::Minute,
            TimePrecision::Second  => Level::Second,
        }
    }
}


/// The six components of a duration, years first, and whether the years
/// are whole centuries.
struct Delta {
    components: [Option<f64>; 6],
    in_centuries: bool,
}

impl Delta {
    fn of(duration: &Duration) -> Result<Self, Error> {
        let (date, time) = match duration {
            Duration::CalendarDate(d)      => (Some(*d), None),
            Duration::OrdinalDate(d)       => (Some(d.to_calendar_date_duration()?), None),
            Duration::CalendarDateTime(d)  => (Some(d.date()), Some(d.time())),
            Duration::OrdinalDateTime(d)   => {
                let d = d.to_calendar_date_time_duration()?;
                (Some(d.date()), Some(d.time()))
            }
            Duration::Time(t)              => (None, Some(*t)),
            Duration::Designated(d)        => {
                return Ok(Self { components: d.components(), in_centuries: false });
            }
        };

        let mut components = [None; 6];

        if let Some(date) = date {
            components[0] = Some(date.total_years() as f64);
            components[1] = date.months().map(f64::from);
            components[2] = date.days().map(f64::from);
        }

        if let Some(time) = time {
            components[3] = Some(time.hours());
            components[4] = time.minutes();
            components[5] = time.seconds();
        }

        let in_centuries = date.map_or(false, |d| d.precision() == CalendarDatePrecision::Century);
        Ok(Self { components, in_centuries })
    }
}


/// A point broken down into fields, with the ones its precision leaves
/// undefined anchored at the start of the period it covers.
#[derive(Debug, Clone, Copy)]
struct Fields {
    year: i64,
    month: u8,
    day: u8,

    /// Seconds since midnight, in local time.
    seconds: f64,

    level: Level,
}

impl Fields {
    fn of_date(date: &CalendarDate) -> Self {
        let (year, month, day) = date.anchored_fields();
        Self { year, month, day, seconds: 0.0, level: date.precision().into() }
    }

    fn of_time(time: &Time) -> Self {
        Self { year: 0, month: 1, day: 1, seconds: time.seconds_since_midnight(), level: time.precision().into() }
    }

    fn of_date_time(date_time: &CalendarDateTime) -> Self {
        let time = date_time.time();
        Self { seconds: time.seconds_since_midnight(), level: time.precision().into(), ..Self::of_date(&date_time.date()) }
    }

    fn to_date(self, expanded: bool) -> Result<CalendarDate, Error> {
        let date = match self.level {
            Level::Century  => CalendarDate::from_century(century_of_year(self.year)),
            Level::Year     => CalendarDate::from_year(self.year),
            Level::Month    => CalendarDate::from_year_month(self.year, self.month),
            _               => CalendarDate::ymd(self.year, self.month, self.day),
        }?;

        Ok(date.with_expanded(expanded))
    }

    fn to_time(self, like: &Time) -> Result<Time, Error> {
        let precision = match self.level {
            Level::Second  => TimePrecision::Second,
            Level::Minute  => TimePrecision::Minute,
            _              => TimePrecision::Hour,
        };

        Time::from_seconds(self.seconds, precision, like.utc_offset())
    }
}


fn shift_date(date: &CalendarDate, duration: &Duration, sign: f64) -> Result<CalendarDate, Error> {
    let fields = shift(Fields::of_date(date), Parts::Date, &Delta::of(duration)?, sign)?;
    fields.to_date(date.is_expanded())
}

fn shift_time(time: &Time, duration: &Duration, sign: f64) -> Result<Time, Error> {
    let fields = shift(Fields::of_time(time), Parts::Time, &Delta::of(duration)?, sign)?;
    fields.to_time(time)
}

fn shift_date_time(date_time: &CalendarDateTime, duration: &Duration, sign: f64) -> Result<CalendarDateTime, Error> {
    let fields = shift(Fields::of_date_time(date_time), Parts::DateTime, &Delta::of(duration)?, sign)?;
    let date = CalendarDate::ymd(fields.year, fields.month, fields.day)?.with_expanded(date_time.date().is_expanded());
    CalendarDateTime::new(date, fields.to_time(&date_time.time())?)
}


/// Which parts of a point a duration gets applied to.
#[derive(PartialEq, Debug, Clone, Copy)]
enum Parts {
    Date,
    Time,
    DateTime,
}

/// Folds components into each other from years down to seconds,
/// keeping track of the finest unit that gets touched.
struct Fold {
    level: Level,
    carry: f64,
}

impl Fold {

    /// Adds a component to whatever was carried into its unit, and
    /// returns the whole part of the sum. The fraction gets carried into
    /// the next unit down, which is `factor` times smaller.
    fn step(&mut self, value: Option<f64>, unit: Level, factor: f64) -> f64 {
        if value.is_some() || self.carry != 0.0 {
            self.level = cmp::max(self.level, unit);
        }

        let total = snap(value.unwrap_or(0.0) + self.carry);
        let whole = total.trunc();
        self.carry = (total - whole) * factor;
        whole
    }
}

/// The most days a shift can move a date by before the result would be
/// out of range anyway.
const DAY_LIMIT: i64 = (MAX_YEAR + 1) * 366;

fn shift(fields: Fields, parts: Parts, delta: &Delta, sign: f64) -> Result<Fields, Error> {
    let [years, months, days, hours, minutes, seconds] = delta.components.map(|c| c.map(|v| v * sign));

    if parts == Parts::Date && (hours.is_some() || minutes.is_some() || seconds.is_some()) {
        return Err(Error::unsupported("the hours, minutes, or seconds of a duration cannot be applied to a date without a time"));
    }

    if parts == Parts::Time && (years.is_some() || months.is_some() || days.is_some()) {
        return Err(Error::unsupported("the years, months, or days of a duration cannot be applied to a time without a date"));
    }

    let year_unit = if delta.in_centuries { Level::Century } else { Level::Year };

    let mut fold = Fold { level: fields.level, carry: 0.0 };
    let years   = fold.step(years,   year_unit,     12.0);
    let months  = fold.step(months,  Level::Month,  30.0);
    let days    = fold.step(days,    Level::Day,    24.0);
    let hours   = fold.step(hours,   Level::Hour,   60.0);
    let minutes = fold.step(minutes, Level::Minute, 60.0);

    if seconds.is_some() || fold.carry != 0.0 {
        fold.level = cmp::max(fold.level, Level::Second);
    }
    let seconds = seconds.unwrap_or(0.0) + fold.carry;
    let level = fold.level;

    if parts == Parts::Date && level > Level::Day {
        return Err(Error::unsupported("a fractional day cannot be applied to a date without a time"));
    }

    trace!("Folded to {}y {}m {}d {}h {}min {}s at {:?}", years, months, days, hours, minutes, seconds, level);

    // Seconds carry into days, and nowhere else
    let total_seconds = snap(fields.seconds + hours * 3600.0 + minutes * 60.0 + seconds);
    let day_carry = (total_seconds / 86_400.0).floor();
    let seconds = total_seconds - day_carry * 86_400.0;

    if parts == Parts::Time {
        if day_carry != 0.0 {
            return Err(Error::range("the result falls outside of the day"));
        }

        return Ok(Fields { seconds, level, ..fields });
    }

    // Months carry into years
    let month_index = checked_add(fields.month as i64 - 1, whole(months, "months")?)?;
    let (year_carry, month_index) = split_cycles(month_index, 12);
    let year = checked_add(fields.year, whole(years, "years")?)?;
    let year = check_year(checked_add(year, year_carry)?)?;
    let month = (month_index + 1) as u8;

    if level < Level::Day {
        return Ok(Fields { year, month, day: 1, seconds, level });
    }

    // Days that fall outside of the month roll into the neighbouring
    // months. Counting from the first of the month is the closed form of
    // carrying or borrowing one month length at a time.
    let days = checked_add(whole(days, "days")?, whole(day_carry, "days")?)?;
    let offset = checked_add(fields.day as i64 - 1, days)?;
    if offset.abs() > DAY_LIMIT {
        return Err(Error::range(format!("a shift of {} days", days)));
    }

    let (year, month, day) = civil_from_days(days_from_civil(year, Month::from_one(month)?, 1) + offset);
    Ok(Fields { year: check_year(year)?, month, day, seconds, level })
}

fn checked_add(a: i64, b: i64) -> Result<i64, Error> {
    a.checked_add(b).ok_or_else(|| Error::range(format!("{} + {} overflows", a, b)))
}
