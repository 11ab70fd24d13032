//! Conversions between calendar, ordinal, and week dates.
//!
//! Only dates defined to the day can be converted without losing or
//! inventing information, so converting any other date fails.

use crate::cal::date::{CalendarDate, CalendarDatePrecision, OrdinalDate, WeekDate, WeekDatePrecision};
use crate::cal::datetime::{CalendarDateTime, OrdinalDateTime, WeekDateTime};
use crate::cal::math;
use crate::error::Error;


impl CalendarDate {

    /// Converts this date to an ordinal date.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::cal::CalendarDate;
    ///
    /// let date = CalendarDate::ymd(1985, 4, 12).unwrap();
    /// assert_eq!(date.to_ordinal_date().unwrap().day_of_year(), 102);
    /// ```
    pub fn to_ordinal_date(&self) -> Result<OrdinalDate, Error> {
        self.require_day("an ordinal date")?;
        OrdinalDate::from_days_since_epoch(self.days_since_epoch())
            .map(|d| d.with_expanded(self.is_expanded()))
    }

    /// Converts this date to a week date at the given precision. Asking
    /// for week or year precision drops the day or week of the result.
    pub fn to_week_date(&self, precision: WeekDatePrecision) -> Result<WeekDate, Error> {
        self.require_day("a week date")?;
        WeekDate::from_days_since_epoch(self.days_since_epoch())?
            .with_expanded(self.is_expanded())
            .truncate(precision)
    }

    fn require_day(&self, target: &str) -> Result<(), Error> {
        if self.precision() == CalendarDatePrecision::Day {
            Ok(())
        }
        else {
            Err(Error::conversion(format!("a {:?}-precision calendar date cannot be converted to {}", self.precision(), target)))
        }
    }
}

impl OrdinalDate {

    pub fn to_calendar_date(&self) -> Result<CalendarDate, Error> {
        CalendarDate::from_days_since_epoch(self.days_since_epoch())
            .map(|d| d.with_expanded(self.is_expanded()))
    }

    pub fn to_week_date(&self) -> Result<WeekDate, Error> {
        WeekDate::from_days_since_epoch(self.days_since_epoch())
            .map(|d| d.with_expanded(self.is_expanded()))
    }

    pub(crate) fn from_days_since_epoch(days: i64) -> Result<Self, Error> {
        let (year, month, day) = math::civil_from_days(days);
        let month = math::Month::from_one(month)?;
        Self::new(year, math::day_of_year(year, month, day))
    }
}

impl WeekDate {

    pub fn to_calendar_date(&self) -> Result<CalendarDate, Error> {
        self.require_day("a calendar date")?;
        CalendarDate::from_days_since_epoch(self.days_since_epoch())
            .map(|d| d.with_expanded(self.is_expanded()))
    }

    /// Converts this date to an ordinal date.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::cal::WeekDate;
    ///
    /// let date = WeekDate::ywd(2009, 1, 1).unwrap();
    /// let ordinal = date.to_ordinal_date().unwrap();
    /// assert_eq!((ordinal.year(), ordinal.day_of_year()), (2008, 364));
    ///
    /// let year = WeekDate::from_year(2009).unwrap();
    /// assert!(year.to_ordinal_date().unwrap_err().is_conversion());
    /// ```
    pub fn to_ordinal_date(&self) -> Result<OrdinalDate, Error> {
        self.require_day("an ordinal date")?;
        OrdinalDate::from_days_since_epoch(self.days_since_epoch())
            .map(|d| d.with_expanded(self.is_expanded()))
    }

    pub(crate) fn from_days_since_epoch(days: i64) -> Result<Self, Error> {
        let (year, month, day) = math::civil_from_days(days);
        let month = math::Month::from_one(month)?;
        let (week_year, week) = math::week_of_year(year, month, day);
        let weekday = math::day_of_week(year, month, day).days_from_monday_as_one();
        Self::ywd(week_year, week, weekday)
    }

    fn require_day(&self, target: &str) -> Result<(), Error> {
        if self.precision() == WeekDatePrecision::Day {
            Ok(())
        }
        else {
            Err(Error::conversion(format!("a {:?}-precision week date cannot be converted to {}", self.precision(), target)))
        }
    }
}


impl CalendarDateTime {

    pub fn to_ordinal_date_time(&self) -> Result<OrdinalDateTime, Error> {
        Ok(OrdinalDateTime::new(self.date().to_ordinal_date()?, self.time()))
    }

    pub fn to_week_date_time(&self) -> Result<WeekDateTime, Error> {
        WeekDateTime::new(self.date().to_week_date(WeekDatePrecision::Day)?, self.time())
    }
}

impl OrdinalDateTime {

    pub fn to_calendar_date_time(&self) -> Result<CalendarDateTime, Error> {
        CalendarDateTime::new(self.date().to_calendar_date()?, self.time())
    }

    pub fn to_week_date_time(&self) -> Result<WeekDateTime, Error> {
        WeekDateTime::new(self.date().to_week_date()?, self.time())
    }
}

impl WeekDateTime {

    pub fn to_calendar_date_time(&self) -> Result<CalendarDateTime, Error> {
        CalendarDateTime::new(self.date().to_calendar_date()?, self.time())
    }

    pub fn to_ordinal_date_time(&self) -> Result<OrdinalDateTime, Error> {
        Ok(OrdinalDateTime::new(self.date().to_ordinal_date()?, self.time()))
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::Time;

    #[test]
    fn calendar_to_ordinal() {
        let date = CalendarDate::ymd(2000, 12, 31).unwrap();
        assert_eq!(date.to_ordinal_date().unwrap().day_of_year(), 366);
    }

    #[test]
    fn calendar_to_week() {
        let date = CalendarDate::ymd(2008, 12, 29).unwrap();
        let week = date.to_week_date(WeekDatePrecision::Day).unwrap();
        assert_eq!((week.year(), week.week(), week.day()), (2009, Some(1), Some(1)));
    }

    #[test]
    fn calendar_to_week_truncated() {
        let date = CalendarDate::ymd(2010, 1, 3).unwrap();
        let week = date.to_week_date(WeekDatePrecision::Week).unwrap();
        assert_eq!((week.year(), week.week(), week.day()), (2009, Some(53), None));
    }

    #[test]
    fn reduced_precision_fails() {
        let date = CalendarDate::from_year_month(2000, 1).unwrap();
        assert!(date.to_ordinal_date().unwrap_err().is_conversion());
        assert!(date.to_week_date(WeekDatePrecision::Year).unwrap_err().is_conversion());

        let week = WeekDate::from_year_week(2000, 10).unwrap();
        assert!(week.to_calendar_date().unwrap_err().is_conversion());
    }

    #[test]
    fn week_to_calendar() {
        let date = WeekDate::ywd(2004, 53, 7).unwrap().to_calendar_date().unwrap();
        assert_eq!(date, CalendarDate::ymd(2005, 1, 2).unwrap());
    }

    #[test]
    fn ordinal_round_trip() {
        for day in 1 ..= 366 {
            let ordinal = OrdinalDate::new(2004, day).unwrap();
            let back = ordinal.to_week_date().unwrap().to_ordinal_date().unwrap();
            assert_eq!(back, ordinal);
        }
    }

    #[test]
    fn expanded_survives() {
        let date = CalendarDate::ymd(2000, 3, 1).unwrap().with_expanded(true);
        assert!(date.to_ordinal_date().unwrap().is_expanded());
    }

    #[test]
    fn date_times() {
        let date = CalendarDate::ymd(2000, 1, 1).unwrap();
        let date_time = CalendarDateTime::new(date, Time::from_hour(12.0).unwrap()).unwrap();
        let week = date_time.to_week_date_time().unwrap();
        assert_eq!(week.date().week(), Some(52));
        assert_eq!(week.to_calendar_date_time().unwrap(), date_time);
    }
}
