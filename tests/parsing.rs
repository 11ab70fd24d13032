use isodate::cal::{CalendarDate, CalendarDatePrecision, OrdinalDate, WeekDate, WeekDatePrecision};
use isodate::cal::{CalendarDateTime, Time, TimePrecision, UtcOffset, WeekDateTime};
use isodate::{Duration, TimeInterval, TimePoint};


mod dates {
    use super::*;

    #[test]
    fn century() {
        let date: CalendarDate = "19".parse().unwrap();
        assert_eq!(date.precision(), CalendarDatePrecision::Century);
        assert_eq!(date.century(), 19);
    }

    #[test]
    fn year() {
        let date: CalendarDate = "1985".parse().unwrap();
        assert_eq!(date.year(), Some(1985));
        assert_eq!(date.month(), None);
    }

    #[test]
    fn extended_and_basic() {
        let extended: CalendarDate = "1985-04-12".parse().unwrap();
        let basic: CalendarDate = "19850412".parse().unwrap();
        assert_eq!(extended, basic);
        assert_eq!(extended, CalendarDate::ymd(1985, 4, 12).unwrap());
    }

    #[test]
    fn expanded() {
        let date = CalendarDate::parse("-002000-02-29", 6).unwrap();
        assert_eq!(date.year(), Some(-2000));
        assert!(date.is_expanded());
    }

    #[test]
    fn expanded_needs_the_year_length() {
        assert!(CalendarDate::parse("+1985-04-12", 6).is_err());
        assert!(CalendarDate::parse("+001985-04-12", 6).is_ok());
    }

    #[test]
    fn ordinal() {
        assert_eq!("1985-102".parse::<OrdinalDate>(), OrdinalDate::new(1985, 102));
        assert_eq!("1985102".parse::<OrdinalDate>(), OrdinalDate::new(1985, 102));
    }

    #[test]
    fn week() {
        assert_eq!("1985-W15-5".parse::<WeekDate>(), WeekDate::ywd(1985, 15, 5));
        assert_eq!("1985W155".parse::<WeekDate>(), WeekDate::ywd(1985, 15, 5));

        let week: WeekDate = "1985-W15".parse().unwrap();
        assert_eq!(week.precision(), WeekDatePrecision::Week);
    }

    #[test]
    fn invalid_days() {
        let error = "2001-02-29".parse::<CalendarDate>().unwrap_err();
        assert!(error.is_parse());
        assert_eq!(error.invalid_input(), Some("2001-02-29"));

        assert!("2001-13".parse::<CalendarDate>().unwrap_err().is_parse());
        assert!("2001-000".parse::<OrdinalDate>().unwrap_err().is_parse());
        assert!("2001-W00".parse::<WeekDate>().unwrap_err().is_parse());
    }

    #[test]
    fn garbage() {
        for input in ["", "-", "198", "1985-", "1985-04-", "1985--04", "1985-04-12x", "١٩٨٥"] {
            let error = input.parse::<CalendarDate>().unwrap_err();
            assert!(error.is_parse(), "{:?} should not parse", input);
        }
    }
}

mod times {
    use super::*;

    #[test]
    fn precisions() {
        assert_eq!("T10".parse::<Time>().unwrap().precision(), TimePrecision::Hour);
        assert_eq!("T10:15".parse::<Time>().unwrap().precision(), TimePrecision::Minute);
        assert_eq!("T101530".parse::<Time>().unwrap().precision(), TimePrecision::Second);
    }

    #[test]
    fn decimal_separators() {
        assert_eq!("T10:15:30,5".parse::<Time>(), "T10:15:30.5".parse::<Time>());
    }

    #[test]
    fn offsets() {
        let time: Time = "T10:15+05:30".parse().unwrap();
        assert_eq!(time.utc_offset(), Some(UtcOffset::of_hours_and_minutes(5, 30).unwrap()));

        let time: Time = "T10:15".parse().unwrap();
        assert_eq!(time.utc_offset(), None);
    }

    #[test]
    fn out_of_range() {
        assert!("T10:60".parse::<Time>().unwrap_err().is_parse());
        assert!("T10:15+25".parse::<Time>().unwrap_err().is_parse());
    }

    #[test]
    fn fraction_in_the_middle() {
        assert!("T10,5:15".parse::<Time>().is_err());
    }
}

mod date_times {
    use super::*;

    #[test]
    fn calendar() {
        let date_time: CalendarDateTime = "1985-04-12T10:15:30Z".parse().unwrap();
        assert_eq!(date_time.date(), CalendarDate::ymd(1985, 4, 12).unwrap());
        assert_eq!(date_time.time().second(), Some(30.0));
    }

    #[test]
    fn week() {
        let date_time: WeekDateTime = "1985W155T1015".parse().unwrap();
        assert_eq!(date_time.date(), WeekDate::ywd(1985, 15, 5).unwrap());
    }

    #[test]
    fn needs_the_designator() {
        assert!("1985-04-12 10:15".parse::<CalendarDateTime>().is_err());
    }
}

mod points {
    use super::*;

    #[test]
    fn kinds() {
        let kinds = [
            ("1985-04-12",        "calendar date"),
            ("1985-102",          "ordinal date"),
            ("1985-W15-5",        "week date"),
            ("T10:15",            "time"),
            ("10:15",             "time"),
            ("1985-04-12T10:15",  "calendar date-time"),
            ("1985-102T10:15",    "ordinal date-time"),
            ("1985-W15-5T10:15",  "week date-time"),
        ];

        for (input, kind) in kinds.iter() {
            assert_eq!(input.parse::<TimePoint>().unwrap().kind(), *kind, "{}", input);
        }
    }
}

mod durations {
    use super::*;

    #[test]
    fn kinds() {
        let kinds = [
            ("P1Y2M10DT2H30M",        "designated duration"),
            ("PT36H",                 "designated duration"),
            ("P0002-10-15",           "calendar date duration"),
            ("P02",                   "calendar date duration"),
            ("P0002-045",             "ordinal date duration"),
            ("PT02:30",               "time duration"),
            ("P0002-10-15T02:30",     "calendar date-time duration"),
            ("P0002045T0230",         "ordinal date-time duration"),
        ];

        for (input, kind) in kinds.iter() {
            assert_eq!(input.parse::<Duration>().unwrap().kind(), *kind, "{}", input);
        }
    }

    #[test]
    fn garbage() {
        for input in ["", "P", "1Y", "PT", "P1Y2", "P-1Y", "P1.Y", "PYM"] {
            assert!(input.parse::<Duration>().unwrap_err().is_parse(), "{:?} should not parse", input);
        }
    }
}

mod intervals {
    use super::*;

    #[test]
    fn forms() {
        assert!(matches!("2000-01-01/2000-02-01".parse::<TimeInterval>(), Ok(TimeInterval::StartEnd { .. })));
        assert!(matches!("2000-01-01/P1M".parse::<TimeInterval>(), Ok(TimeInterval::StartDuration { .. })));
        assert!(matches!("P1M/2000-02-01".parse::<TimeInterval>(), Ok(TimeInterval::DurationEnd { .. })));
    }

    #[test]
    fn no_slash() {
        assert!("2000-01-01".parse::<TimeInterval>().unwrap_err().is_parse());
    }
}
