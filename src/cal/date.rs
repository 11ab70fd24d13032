//! Calendar, ordinal, and week dates.

use std::fmt;

use crate::cal::math::{self, Month, Weekday, MAX_YEAR, MIN_YEAR};
use crate::error::Error;
use crate::util::RangeExt;


/// How much of a calendar date is defined, from only the century down to
/// the day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum CalendarDatePrecision {
    Century,
    Year,
    Month,
    Day,
}

/// How much of a week date is defined.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum WeekDatePrecision {
    Year,
    Week,
    Day,
}


/// Checks that a year is one this library can do arithmetic on.
pub(crate) fn check_year(year: i64) -> Result<i64, Error> {
    if year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
        Ok(year)
    }
    else {
        Err(Error::range(format!("the year {} is too far from the present", year)))
    }
}

/// Whether a year needs the expanded, signed representation.
fn needs_expansion(year: i64) -> bool {
    !year.is_within(0 .. 10_000)
}


/// A **calendar date** is a year, month, and day, defined to some
/// precision.
///
/// A date with a coarser precision than `Day` covers the whole century,
/// year, or month, and its finer fields are not defined: their
/// accessors return `None`.
///
/// Years outside of 0 to 9999 can only be written in the *expanded*
/// form, with a sign and extra digits, so dates with those years are
/// always expanded. Dates with other years can be switched to the
/// expanded form with `with_expanded`. The flag only affects how the
/// date gets written: two dates that differ only in it are equal.
#[derive(Clone, Copy)]
pub struct CalendarDate {
    century: i64,
    year: i64,
    month: Month,
    day: u8,
    precision: CalendarDatePrecision,
    is_expanded: bool,
}

impl CalendarDate {

    /// Creates a date covering a whole century. Century 20 is the years
    /// 2000 to 2099.
    pub fn from_century(century: i64) -> Result<Self, Error> {
        let year = century.checked_mul(100)
                          .ok_or_else(|| Error::range(format!("century {}", century)))
                          .and_then(check_year)?;

        Ok(Self {
            century, year, month: Month::January, day: 1,
            precision: CalendarDatePrecision::Century,
            is_expanded: needs_expansion(year),
        })
    }

    /// Creates a date covering a whole year.
    pub fn from_year(year: i64) -> Result<Self, Error> {
        let year = check_year(year)?;

        Ok(Self {
            century: math::century_of_year(year), year, month: Month::January, day: 1,
            precision: CalendarDatePrecision::Year,
            is_expanded: needs_expansion(year),
        })
    }

    /// Creates a date covering a whole month, with January as month 1.
    pub fn from_year_month(year: i64, month: u8) -> Result<Self, Error> {
        let month = Month::from_one(month)?;

        Ok(Self {
            month,
            precision: CalendarDatePrecision::Month,
            ..Self::from_year(year)?
        })
    }

    /// Creates a date defined to the day.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::cal::CalendarDate;
    ///
    /// assert!(CalendarDate::ymd(2000, 2, 29).is_ok());
    /// assert!(CalendarDate::ymd(2001, 2, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: u8, day: u8) -> Result<Self, Error> {
        let base = Self::from_year_month(year, month)?;

        if day.is_within(1 .. math::days_in_month(year, base.month) + 1) {
            Ok(Self { day, precision: CalendarDatePrecision::Day, ..base })
        }
        else {
            Err(Error::range(format!("{:?} {} has no day {}", base.month, year, day)))
        }
    }

    /// Returns a copy of this date that gets written in the expanded
    /// form if `expanded` is true. Dates whose years need the expanded
    /// form keep it regardless.
    pub fn with_expanded(self, expanded: bool) -> Self {
        Self { is_expanded: expanded || needs_expansion(self.year), ..self }
    }

    /// Returns a copy of this date at a coarser precision, dropping the
    /// fields it no longer defines.
    ///
    /// Asking for a finer precision than the date has fails, as the
    /// missing fields would have to be made up.
    pub fn truncate(self, precision: CalendarDatePrecision) -> Result<Self, Error> {
        use self::CalendarDatePrecision::*;

        if precision > self.precision {
            return Err(Error::conversion(format!("a {:?}-precision date cannot be extended to {:?} precision", self.precision, precision)));
        }

        let truncated = match precision {
            Century  => Self::from_century(self.century),
            Year     => Self::from_year(self.year),
            Month    => Self::from_year_month(self.year, self.month as u8),
            Day      => Ok(self),
        }?;

        Ok(truncated.with_expanded(self.is_expanded))
    }

    /// The century, which is always defined.
    pub fn century(&self) -> i64 {
        self.century
    }

    /// The year, in absolute terms, if this date is defined to the year.
    pub fn year(&self) -> Option<i64> {
        if self.precision >= CalendarDatePrecision::Year { Some(self.year) } else { None }
    }

    /// The month of the year, if this date is defined to the month.
    pub fn month(&self) -> Option<Month> {
        if self.precision >= CalendarDatePrecision::Month { Some(self.month) } else { None }
    }

    /// The day of the month, from 1 to 31, if this date is defined to
    /// the day.
    pub fn day(&self) -> Option<u8> {
        if self.precision == CalendarDatePrecision::Day { Some(self.day) } else { None }
    }

    pub fn precision(&self) -> CalendarDatePrecision {
        self.precision
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// The day of the year, from 1 to 366, if this date is defined to the
    /// day.
    pub fn day_of_year(&self) -> Option<u16> {
        let month = self.day_month()?;
        Some(math::day_of_year(self.year, month, self.day))
    }

    /// The day of the week, if this date is defined to the day.
    pub fn day_of_week(&self) -> Option<Weekday> {
        let month = self.day_month()?;
        Some(math::day_of_week(self.year, month, self.day))
    }

    /// The ISO week of its week-numbering year that this date falls
    /// into, if it is defined to the day.
    pub fn week_of_year(&self) -> Option<u8> {
        let month = self.day_month()?;
        Some(math::week_of_year(self.year, month, self.day).1)
    }

    fn day_month(&self) -> Option<Month> {
        if self.precision == CalendarDatePrecision::Day { self.month() } else { None }
    }

    /// The year, month, and day fields, with the undefined ones anchored
    /// at the start of the period this date covers.
    pub(crate) fn anchored_fields(&self) -> (i64, u8, u8) {
        (self.year, self.month as u8, self.day)
    }

    /// The number of days between 1970-01-01 and the first day this
    /// date covers.
    pub(crate) fn days_since_epoch(&self) -> i64 {
        math::days_from_civil(self.year, self.month, self.day)
    }

    /// Creates a day-precision date from the number of days since
    /// 1970-01-01.
    pub(crate) fn from_days_since_epoch(days: i64) -> Result<Self, Error> {
        let (year, month, day) = math::civil_from_days(days);
        Self::ymd(year, month, day)
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({})", self)
    }
}


/// An **ordinal date** is a year and a day within that year, from 1 to
/// 365 (or 366 in leap years). It is always defined to the day.
#[derive(Clone, Copy)]
pub struct OrdinalDate {
    year: i64,
    day_of_year: u16,
    is_expanded: bool,
}

impl OrdinalDate {

    /// Creates an ordinal date from a year and a day of the year.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn new(year: i64, day_of_year: u16) -> Result<Self, Error> {
        let year = check_year(year)?;

        if day_of_year.is_within(1 .. math::days_in_year(year) + 1) {
            Ok(Self { year, day_of_year, is_expanded: needs_expansion(year) })
        }
        else {
            Err(Error::range(format!("the year {} has no day {}", year, day_of_year)))
        }
    }

    /// Returns a copy of this date that gets written in the expanded
    /// form if `expanded` is true.
    pub fn with_expanded(self, expanded: bool) -> Self {
        Self { is_expanded: expanded || needs_expansion(self.year), ..self }
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    pub(crate) fn days_since_epoch(&self) -> i64 {
        math::days_from_civil(self.year, Month::January, 1) + self.day_of_year as i64 - 1
    }
}

impl fmt::Debug for OrdinalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrdinalDate({})", self)
    }
}


/// A **week date** is an ISO week-numbering year, a week within that
/// year, and a day within that week, with Monday as day 1.
///
/// The week-numbering year starts on the Monday of the week containing
/// the 4th of January, so it can start in the last days of the previous
/// calendar year, or the first days of the current one.
#[derive(Clone, Copy)]
pub struct WeekDate {
    year: i64,
    week: u8,
    day: u8,
    precision: WeekDatePrecision,
    is_expanded: bool,
}

impl WeekDate {

    /// Creates a week date covering a whole week-numbering year.
    pub fn from_year(year: i64) -> Result<Self, Error> {
        let year = check_year(year)?;

        Ok(Self {
            year, week: 1, day: 1,
            precision: WeekDatePrecision::Year,
            is_expanded: needs_expansion(year),
        })
    }

    /// Creates a week date covering a whole week.
    pub fn from_year_week(year: i64, week: u8) -> Result<Self, Error> {
        let base = Self::from_year(year)?;

        if week.is_within(1 .. math::weeks_in_year(year) + 1) {
            Ok(Self { week, precision: WeekDatePrecision::Week, ..base })
        }
        else {
            Err(Error::range(format!("the week-numbering year {} has no week {}", year, week)))
        }
    }

    /// Creates a week date defined to the day, with Monday as day 1 and
    /// Sunday as day 7.
    pub fn ywd(year: i64, week: u8, day: u8) -> Result<Self, Error> {
        let base = Self::from_year_week(year, week)?;
        let _ = Weekday::from_one(day)?;
        Ok(Self { day, precision: WeekDatePrecision::Day, ..base })
    }

    /// Returns a copy of this date that gets written in the expanded
    /// form if `expanded` is true.
    pub fn with_expanded(self, expanded: bool) -> Self {
        Self { is_expanded: expanded || needs_expansion(self.year), ..self }
    }

    /// Returns a copy of this date at a coarser precision.
    pub fn truncate(self, precision: WeekDatePrecision) -> Result<Self, Error> {
        if precision > self.precision {
            return Err(Error::conversion(format!("a {:?}-precision week date cannot be extended to {:?} precision", self.precision, precision)));
        }

        let truncated = match precision {
            WeekDatePrecision::Year  => Self::from_year(self.year),
            WeekDatePrecision::Week  => Self::from_year_week(self.year, self.week),
            WeekDatePrecision::Day   => Ok(self),
        }?;

        Ok(truncated.with_expanded(self.is_expanded))
    }

    /// The ISO week-numbering year.
    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn week(&self) -> Option<u8> {
        if self.precision >= WeekDatePrecision::Week { Some(self.week) } else { None }
    }

    /// The day of the week, from Monday as 1 to Sunday as 7.
    pub fn day(&self) -> Option<u8> {
        if self.precision == WeekDatePrecision::Day { Some(self.day) } else { None }
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.day().and_then(|d| Weekday::from_one(d).ok())
    }

    pub fn precision(&self) -> WeekDatePrecision {
        self.precision
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// The number of days between 1970-01-01 and the first day this
    /// date covers, with the undefined week and day anchored at week 1
    /// and Monday.
    pub(crate) fn days_since_epoch(&self) -> i64 {
        let yearday = math::week_date_to_yearday(self.year, self.week, self.day);
        math::days_from_civil(self.year, Month::January, 1) + yearday - 1
    }
}

impl fmt::Debug for WeekDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeekDate({})", self)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    mod calendar {
        use super::*;

        #[test]
        fn leap_day() {
            assert!(CalendarDate::ymd(2000, 2, 29).is_ok());
            assert!(CalendarDate::ymd(2001, 2, 29).unwrap_err().is_out_of_range());
        }

        #[test]
        fn bad_month() {
            assert!(CalendarDate::ymd(2021, 13, 1).is_err());
            assert!(CalendarDate::from_year_month(2021, 0).is_err());
        }

        #[test]
        fn undefined_fields() {
            let date = CalendarDate::from_year(1985).unwrap();
            assert_eq!(date.year(), Some(1985));
            assert_eq!(date.month(), None);
            assert_eq!(date.day(), None);
            assert_eq!(date.day_of_week(), None);
            assert_eq!(date.century(), 19);
        }

        #[test]
        fn century() {
            let date = CalendarDate::from_century(-1).unwrap();
            assert_eq!(date.year(), None);
            assert!(date.is_expanded());
            assert!(CalendarDate::from_century(i64::MAX).is_err());
        }

        #[test]
        fn expansion() {
            assert!(CalendarDate::from_year(10_000).unwrap().is_expanded());
            assert!(CalendarDate::from_year(-1).unwrap().is_expanded());
            assert!(!CalendarDate::from_year(9999).unwrap().is_expanded());
            assert!(CalendarDate::from_year(2000).unwrap().with_expanded(true).is_expanded());
            assert!(CalendarDate::from_year(-5).unwrap().with_expanded(false).is_expanded());
        }

        #[test]
        fn truncation() {
            let date = CalendarDate::ymd(1985, 4, 12).unwrap();
            let month = date.truncate(CalendarDatePrecision::Month).unwrap();
            assert_eq!(month.precision(), CalendarDatePrecision::Month);
            assert_eq!(month.day(), None);
            assert!(month.truncate(CalendarDatePrecision::Day).unwrap_err().is_conversion());
        }

        #[test]
        fn derived_fields() {
            let date = CalendarDate::ymd(2015, 9, 11).unwrap();
            assert_eq!(date.day_of_year(), Some(254));
            assert_eq!(date.day_of_week(), Some(Weekday::Friday));
            assert_eq!(date.week_of_year(), Some(37));
        }

        #[test]
        fn far_away() {
            assert!(CalendarDate::from_year(MAX_YEAR).is_ok());
            assert!(CalendarDate::from_year(MAX_YEAR + 1).is_err());
        }
    }

    mod ordinal {
        use super::*;

        #[test]
        fn leap_year() {
            assert!(OrdinalDate::new(2000, 366).is_ok());
            assert!(OrdinalDate::new(2001, 366).is_err());
            assert!(OrdinalDate::new(2001, 0).is_err());
        }
    }

    mod week {
        use super::*;

        #[test]
        fn long_years() {
            assert!(WeekDate::from_year_week(2004, 53).is_ok());
            assert!(WeekDate::from_year_week(2005, 53).is_err());
        }

        #[test]
        fn weekdays() {
            assert_eq!(WeekDate::ywd(2009, 1, 7).unwrap().weekday(), Some(Weekday::Sunday));
            assert!(WeekDate::ywd(2009, 1, 0).is_err());
            assert!(WeekDate::ywd(2009, 1, 8).is_err());
        }

        #[test]
        fn first_day() {
            // Week 1 of 2009 starts on Monday the 29th of December, 2008.
            let date = WeekDate::from_year(2009).unwrap();
            assert_eq!(date.days_since_epoch(), math::days_from_civil(2008, Month::December, 29));
        }
    }
}
