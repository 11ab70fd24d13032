use isodate::cal::{CalendarDate, CalendarDateTime, OrdinalDate, Time, UtcOffset, WeekDate};
use isodate::{DecimalSeparator, DesignatedDuration, FormatInfo, IsoFormat, TimeDuration};


mod dates {
    use super::*;

    #[test]
    fn recently() {
        let date = CalendarDate::ymd(1600, 2, 28).unwrap();
        assert_eq!(date.to_string(), "1600-02-28");
    }

    #[test]
    fn just_then() {
        let date = CalendarDate::ymd(-753, 12, 1).unwrap();
        assert_eq!(date.to_string(), "-0753-12-01");
    }

    #[test]
    fn far_far_future() {
        let date = CalendarDate::ymd(10601, 1, 31).unwrap();
        assert_eq!(date.to_string(), "+10601-01-31");
    }

    #[test]
    fn longer_years() {
        let date = CalendarDate::ymd(10601, 1, 31).unwrap();
        let info = FormatInfo::default().with_year_length(8);
        assert_eq!(date.iso(&info).to_string(), "+00010601-01-31");
    }

    #[test]
    fn basic_ordinal() {
        let date = OrdinalDate::new(-1, 1).unwrap();
        let info = FormatInfo::default().with_component_separators(false);
        assert_eq!(date.iso(&info).to_string(), "-0001001");
    }

    #[test]
    fn week_year() {
        let date = WeekDate::from_year(2009).unwrap();
        assert_eq!(date.to_string(), "2009");
    }
}

mod times {
    use super::*;

    #[test]
    fn midnight() {
        assert_eq!(Time::midnight().to_string(), "T00:00:00");
    }

    #[test]
    fn end_of_day() {
        assert_eq!(Time::hms(24.0, 0.0, 0.0).unwrap().to_string(), "T24:00:00");
    }

    #[test]
    fn period() {
        let time = Time::hm(10.0, 15.25).unwrap();
        let info = FormatInfo::default().with_decimal_separator(DecimalSeparator::Period);
        assert_eq!(time.iso(&info).to_string(), "T10:15.25");
    }

    #[test]
    fn fraction_padding() {
        let time = Time::hms(10.0, 15.0, 30.0).unwrap();
        let info = FormatInfo::default().with_fraction_length(Some(3));
        assert_eq!(time.iso(&info).to_string(), "T10:15:30,000");
    }

    #[test]
    fn no_designator() {
        let time = Time::hm(10.0, 15.0).unwrap();
        let info = FormatInfo::default().with_time_designator(false);
        assert_eq!(time.iso(&info).to_string(), "10:15");
    }

    #[test]
    fn half_hour_offset() {
        let offset = UtcOffset::of_hours_and_minutes(0, -30).unwrap();
        let time = Time::hm(10.0, 15.0).unwrap().with_utc_offset(offset);
        assert_eq!(time.to_string(), "T10:15-00:30");
    }
}

mod date_times {
    use super::*;

    #[test]
    fn extended() {
        let date = CalendarDate::ymd(1985, 4, 12).unwrap();
        let time = Time::hms(10.0, 15.0, 30.0).unwrap().with_utc_offset(UtcOffset::utc());
        let date_time = CalendarDateTime::new(date, time).unwrap();
        assert_eq!(date_time.to_string(), "1985-04-12T10:15:30Z");
    }

    #[test]
    fn basic() {
        let date = CalendarDate::ymd(1985, 4, 12).unwrap();
        let time = Time::hms(10.0, 15.0, 30.0).unwrap().with_utc_offset(UtcOffset::of_hours(-4).unwrap());
        let date_time = CalendarDateTime::new(date, time).unwrap();
        let info = FormatInfo::default().with_component_separators(false);
        assert_eq!(date_time.iso(&info).to_string(), "19850412T101530-04");
    }
}

mod durations {
    use super::*;

    #[test]
    fn only_time() {
        let duration = DesignatedDuration::new(None, None, None, Some(36.0), None, None).unwrap();
        assert_eq!(duration.to_string(), "PT36H");
    }

    #[test]
    fn only_date() {
        let duration = DesignatedDuration::new(None, None, Some(3.0), None, None, None).unwrap();
        assert_eq!(duration.to_string(), "P3D");
    }

    #[test]
    fn cut_fraction() {
        let duration = DesignatedDuration::new(None, None, None, None, None, Some(1.23456)).unwrap();
        let info = FormatInfo::default().with_fraction_length(Some(2));
        assert_eq!(duration.iso(&info).to_string(), "PT1,23S");
    }

    #[test]
    fn basic_time() {
        let duration = TimeDuration::hms(1.0, 2.0, 3.0).unwrap();
        let info = FormatInfo::default().with_component_separators(false);
        assert_eq!(duration.iso(&info).to_string(), "PT010203");
    }
}
