use isodate::TimeInterval;


fn interval(input: &str) -> TimeInterval {
    input.parse().unwrap_or_else(|e| panic!("{:?} should parse: {}", input, e))
}


mod ends {
    use super::*;

    #[test]
    fn end_from_start() {
        let i = interval("2007-03-01T13:00:00Z/P1Y2M10DT2H30M");
        assert_eq!(i.end().unwrap().to_string(), "2008-05-11T15:30:00Z");
    }

    #[test]
    fn start_from_end() {
        let i = interval("P1Y2M10DT2H30M/2008-05-11T15:30:00Z");
        assert_eq!(i.start().unwrap().to_string(), "2007-03-01T13:00:00Z");
    }

    #[test]
    fn alternative_duration() {
        let i = interval("2007-03-01/P0001-02-10");
        assert_eq!(i.end().unwrap().to_string(), "2008-05-11");
    }

    #[test]
    fn stays_a_year() {
        let i = interval("2000/P1Y");
        assert_eq!(i.end().unwrap().to_string(), "2001");
    }

    #[test]
    fn given_ends_are_kept() {
        let i = interval("1985-04-12/1985-06-25");
        assert_eq!(i.start().unwrap().to_string(), "1985-04-12");
        assert_eq!(i.end().unwrap().to_string(), "1985-06-25");
    }
}


mod durations {
    use super::*;

    #[test]
    fn days_between_dates() {
        let i = interval("2000-01-01/2000-03-01");
        assert_eq!(i.duration().unwrap().to_string(), "P60D");
    }

    #[test]
    fn same_day() {
        let i = interval("2000-01-01/2000-01-01");
        assert_eq!(i.duration().unwrap().to_string(), "PT0S");
    }

    #[test]
    fn across_offsets() {
        let i = interval("2000-01-01T12:00:00+02:00/2000-01-01T12:00:00Z");
        assert_eq!(i.duration().unwrap().to_string(), "PT2H");
    }

    #[test]
    fn given_duration_is_kept() {
        let i = interval("P1M/2000-03-01");
        assert_eq!(i.duration().unwrap().to_string(), "P1M");
    }

    #[test]
    fn end_before_start() {
        let i = interval("2000-03-01/2000-01-01");
        assert!(i.duration().unwrap_err().is_out_of_range());
    }
}


mod conversions {
    use super::*;

    #[test]
    fn to_start_end() {
        let i = interval("2007-03-01T13:00:00Z/P1Y2M10DT2H30M").to_start_end().unwrap();
        assert_eq!(i.to_string(), "2007-03-01T13:00:00Z/2008-05-11T15:30:00Z");
    }

    #[test]
    fn to_duration_end() {
        let i = interval("2000-01-01/2000-01-31").to_duration_end().unwrap();
        assert_eq!(i.to_string(), "P30D/2000-01-31");
    }

    #[test]
    fn to_start_duration() {
        let i = interval("P30D/2000-01-31").to_start_duration().unwrap();
        assert_eq!(i.to_string(), "2000-01-01/P30D");
    }

    #[test]
    fn there_and_back() {
        let i = interval("1999-12-31T23:00:00Z/2000-01-01T01:30:00Z");
        assert_eq!(i.to_start_duration().and_then(|i| i.to_start_end()), Ok(i));
    }
}


mod rejections {
    use super::*;

    #[test]
    fn two_durations() {
        assert!("P1Y/P2Y".parse::<TimeInterval>().unwrap_err().is_parse());
    }

    #[test]
    fn one_half() {
        assert!("2000-01-01".parse::<TimeInterval>().unwrap_err().is_parse());
    }

    #[test]
    fn three_halves() {
        assert!("2000/2001/2002".parse::<TimeInterval>().unwrap_err().is_parse());
    }

    #[test]
    fn bad_end() {
        assert!("2000-01-01/2000-13-01".parse::<TimeInterval>().is_err());
    }
}
