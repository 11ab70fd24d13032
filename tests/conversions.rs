use isodate::cal::{CalendarDate, OrdinalDate, WeekDate, WeekDatePrecision};
use isodate::cal::{CalendarDateTime, Time, UtcOffset};


mod calendar_to_ordinal {
    use super::*;

    #[test]
    fn spring() {
        let date = CalendarDate::ymd(1985, 4, 12).unwrap();
        assert_eq!(date.to_ordinal_date(), OrdinalDate::new(1985, 102));
    }

    #[test]
    fn leap_year_end() {
        let date = CalendarDate::ymd(2000, 12, 31).unwrap();
        assert_eq!(date.to_ordinal_date(), OrdinalDate::new(2000, 366));
    }

    #[test]
    fn needs_a_day() {
        let date = CalendarDate::from_year_month(1985, 4).unwrap();
        assert!(date.to_ordinal_date().unwrap_err().is_conversion());
    }

    #[test]
    fn keeps_expansion() {
        let date = CalendarDate::ymd(1985, 4, 12).unwrap().with_expanded(true);
        assert!(date.to_ordinal_date().unwrap().is_expanded());
    }
}

mod calendar_to_week {
    use super::*;

    #[test]
    fn spring() {
        let date = CalendarDate::ymd(1985, 4, 12).unwrap();
        assert_eq!(date.to_week_date(WeekDatePrecision::Day), WeekDate::ywd(1985, 15, 5));
    }

    #[test]
    fn into_next_year() {
        let date = CalendarDate::ymd(2008, 12, 29).unwrap();
        assert_eq!(date.to_week_date(WeekDatePrecision::Day), WeekDate::ywd(2009, 1, 1));
    }

    #[test]
    fn into_previous_year() {
        let date = CalendarDate::ymd(2010, 1, 3).unwrap();
        assert_eq!(date.to_week_date(WeekDatePrecision::Day), WeekDate::ywd(2009, 53, 7));
    }

    #[test]
    fn to_the_week() {
        let date = CalendarDate::ymd(1985, 4, 12).unwrap();
        let week = date.to_week_date(WeekDatePrecision::Week).unwrap();
        assert_eq!(week.week(), Some(15));
        assert_eq!(week.day(), None);
    }

    #[test]
    fn needs_a_day() {
        let date = CalendarDate::from_year(1985).unwrap();
        assert!(date.to_week_date(WeekDatePrecision::Year).unwrap_err().is_conversion());
    }
}

mod back_again {
    use super::*;

    #[test]
    fn week_to_calendar() {
        let date = WeekDate::ywd(2009, 53, 7).unwrap();
        assert_eq!(date.to_calendar_date(), CalendarDate::ymd(2010, 1, 3));
    }

    #[test]
    fn week_to_ordinal() {
        let date = WeekDate::ywd(2009, 1, 1).unwrap();
        assert_eq!(date.to_ordinal_date(), OrdinalDate::new(2008, 364));
    }

    #[test]
    fn week_needs_a_day() {
        let date = WeekDate::from_year_week(2009, 1).unwrap();
        assert!(date.to_calendar_date().unwrap_err().is_conversion());
    }

    #[test]
    fn ordinal_to_calendar() {
        let date = OrdinalDate::new(2000, 60).unwrap();
        assert_eq!(date.to_calendar_date(), CalendarDate::ymd(2000, 2, 29));
    }

    #[test]
    fn ordinal_to_week() {
        let date = OrdinalDate::new(1985, 102).unwrap();
        assert_eq!(date.to_week_date(), WeekDate::ywd(1985, 15, 5));
    }

    #[test]
    fn before_year_zero() {
        let date = CalendarDate::ymd(-1, 3, 1).unwrap();
        let ordinal = date.to_ordinal_date().unwrap();
        assert_eq!(ordinal.day_of_year(), 60);
        assert_eq!(ordinal.to_calendar_date(), Ok(date));
    }
}

mod date_times {
    use super::*;

    #[test]
    fn keeps_the_time() {
        let time = Time::hms(10.0, 15.0, 30.0).unwrap().with_utc_offset(UtcOffset::utc());
        let date_time = CalendarDateTime::new(CalendarDate::ymd(1985, 4, 12).unwrap(), time).unwrap();

        let ordinal = date_time.to_ordinal_date_time().unwrap();
        assert_eq!(ordinal.date(), OrdinalDate::new(1985, 102).unwrap());
        assert_eq!(ordinal.time(), time);

        let week = date_time.to_week_date_time().unwrap();
        assert_eq!(week.date(), WeekDate::ywd(1985, 15, 5).unwrap());
        assert_eq!(week.to_calendar_date_time(), Ok(date_time));
    }
}
