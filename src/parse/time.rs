use std::str::FromStr;

use crate::cal::{Time, TimePrecision, UtcOffset};
use crate::cal::{CalendarDateTime, OrdinalDateTime, WeekDateTime};
use crate::error::Error;
use crate::parse::Cursor;
use crate::parse::date::{scan_date, DateFields, DateGrammar};
use crate::parse::date::{fields_to_calendar_date, fields_to_ordinal_date, fields_to_week_date};
use crate::point::TimePoint;


/// Reads the hours, minutes, and seconds of a time or a time duration,
/// with colons between them or without, and a fraction after the last.
///
/// Returns the precision and the three components, with the fraction
/// added to the last one present and zeroes after it.
pub(crate) fn scan_clock(cursor: &mut Cursor<'_>) -> Result<(TimePrecision, [f64; 3]), Error> {
    let mut components = vec![ cursor.fixed_digits(2, "the hours")? ];
    let extended = cursor.peek() == Some(':');

    while components.len() < 3 {
        let present = if extended { cursor.eat(':') } else { cursor.peek_digit() };
        if !present {
            break;
        }

        let what = if components.len() == 1 { "the minutes" } else { "the seconds" };
        components.push(cursor.fixed_digits(2, what)?);
    }

    if extended && components.len() == 1 {
        return Err(cursor.error("expected the minutes after a colon"));
    }

    let fraction = cursor.fraction()?;
    let mut values = [0.0; 3];

    for (index, digits) in components.iter().enumerate() {
        values[index] = if index + 1 == components.len() {
            cursor.to_decimal(digits, fraction)?
        }
        else {
            cursor.to_integer(digits)? as f64
        };
    }

    let precision = match components.len() {
        1 => TimePrecision::Hour,
        2 => TimePrecision::Minute,
        _ => TimePrecision::Second,
    };

    Ok((precision, values))
}

/// Reads a UTC offset, if there is one: `Z`, or a sign and an hour with
/// an optional minute.
fn scan_offset(cursor: &mut Cursor<'_>) -> Result<Option<UtcOffset>, Error> {
    if cursor.eat('Z') {
        return Ok(Some(UtcOffset::utc()));
    }

    let sign = match cursor.eat_any(&['+', '-']) {
        Some('-')  => -1,
        Some(_)    => 1,
        None       => return Ok(None),
    };

    let hours = cursor.fixed_digits(2, "the offset hours")?;
    let hours = cursor.to_integer(hours)? as i8;

    let minutes = if cursor.eat(':') || cursor.peek_digit() {
        let minutes = cursor.fixed_digits(2, "the offset minutes")?;
        cursor.to_integer(minutes)? as i8
    }
    else {
        0
    };

    UtcOffset::of_hours_and_minutes(sign * hours, sign * minutes)
        .map(Some)
        .map_err(|e| cursor.invalid(e))
}

/// Reads a time after its designator, if any, up to the end of the input.
fn scan_time(cursor: &mut Cursor<'_>) -> Result<Time, Error> {
    let (precision, [hour, minute, second]) = scan_clock(cursor)?;
    let offset = scan_offset(cursor)?;
    cursor.finish()?;

    let time = match precision {
        TimePrecision::Hour    => Time::from_hour(hour),
        TimePrecision::Minute  => Time::hm(hour, minute),
        TimePrecision::Second  => Time::hms(hour, minute, second),
    };

    time.map(|t| t.with_utc_offset(offset)).map_err(|e| cursor.invalid(e))
}


impl Time {

    /// Reads a time of day, with or without its `T`, and with an
    /// optional UTC offset.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::cal::{Time, UtcOffset};
    ///
    /// let time = Time::parse("T14:30,5+01").unwrap();
    /// let offset = UtcOffset::of_hours(1).unwrap();
    /// assert_eq!(time, Time::hm(14.0, 30.5).unwrap().with_utc_offset(offset));
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        let _ = cursor.eat('T');
        scan_time(&mut cursor)
    }
}

impl UtcOffset {

    /// Reads an offset on its own, such as `Z`, `+01`, or `-05:30`.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        let offset = scan_offset(&mut cursor)?;
        cursor.finish()?;
        offset.ok_or_else(|| cursor.error("expected a UTC offset"))
    }
}


/// Reads a date, a `T`, and a time.
fn scan_date_time(cursor: &mut Cursor<'_>, year_length: usize) -> Result<(DateFields, bool, Time), Error> {
    let (fields, signed) = scan_date(cursor, year_length, DateGrammar::Point)?;
    cursor.expect('T')?;
    let time = scan_time(cursor)?;
    Ok((fields, signed, time))
}

impl CalendarDateTime {

    /// Reads a calendar date defined to the day, followed by a time.
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        let (fields, signed, time) = scan_date_time(&mut cursor, year_length)?;
        let date = fields_to_calendar_date(&cursor, fields, signed)?;
        Self::new(date, time).map_err(|e| cursor.invalid(e))
    }
}

impl OrdinalDateTime {

    /// Reads an ordinal date followed by a time.
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        let (fields, signed, time) = scan_date_time(&mut cursor, year_length)?;
        let date = fields_to_ordinal_date(&cursor, fields, signed)?;
        Ok(Self::new(date, time))
    }
}

impl WeekDateTime {

    /// Reads a week date defined to the day, followed by a time.
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        let (fields, signed, time) = scan_date_time(&mut cursor, year_length)?;
        let date = fields_to_week_date(&cursor, fields, signed)?;
        Self::new(date, time).map_err(|e| cursor.invalid(e))
    }
}


impl TimePoint {

    /// Reads any kind of time point, working out which kind it is from
    /// its shape.
    ///
    /// A time on its own has to start with its `T`, or be in the extended
    /// form: `1230` is the year 1230, but `T1230` and `12:30` are both
    /// half past twelve.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::TimePoint;
    ///
    /// assert_eq!(TimePoint::parse("1985-W15-5", 4).unwrap().kind(), "week date");
    /// assert_eq!(TimePoint::parse("1985102T10", 4).unwrap().kind(), "ordinal date-time");
    /// assert_eq!(TimePoint::parse("12:30", 4).unwrap().kind(), "time");
    /// ```
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let stands_alone = input.starts_with('T') || (input.contains(':') && !input.contains('T'));
        if stands_alone {
            return Time::parse(input).map(TimePoint::Time);
        }

        let mut cursor = Cursor::new(input);
        let (fields, signed) = scan_date(&mut cursor, year_length, DateGrammar::Point)?;

        if cursor.eat('T') {
            let time = scan_time(&mut cursor)?;

            let point = match fields {
                DateFields::Calendar(..) => {
                    let date = fields_to_calendar_date(&cursor, fields, signed)?;
                    CalendarDateTime::new(date, time).map(TimePoint::CalendarDateTime)
                }
                DateFields::Ordinal(..) => {
                    let date = fields_to_ordinal_date(&cursor, fields, signed)?;
                    Ok(TimePoint::OrdinalDateTime(OrdinalDateTime::new(date, time)))
                }
                DateFields::Week(..) => {
                    let date = fields_to_week_date(&cursor, fields, signed)?;
                    WeekDateTime::new(date, time).map(TimePoint::WeekDateTime)
                }
                _ => return Err(cursor.error("a date-time needs a date defined to the day")),
            };

            return point.map_err(|e| cursor.invalid(e));
        }

        cursor.finish()?;

        match fields {
            DateFields::Ordinal(..)                         => fields_to_ordinal_date(&cursor, fields, signed).map(TimePoint::OrdinalDate),
            DateFields::YearWeek(..) | DateFields::Week(..) => fields_to_week_date(&cursor, fields, signed).map(TimePoint::WeekDate),
            _                                               => fields_to_calendar_date(&cursor, fields, signed).map(TimePoint::CalendarDate),
        }
    }
}


macro_rules! from_str_with_year_length {
    ($($t:ty),*) => {
        $(
            impl FromStr for $t {
                type Err = Error;

                fn from_str(input: &str) -> Result<Self, Self::Err> {
                    Self::parse(input, 4)
                }
            }
        )*
    };
}

from_str_with_year_length!(CalendarDateTime, OrdinalDateTime, WeekDateTime, TimePoint);

impl FromStr for Time {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl FromStr for UtcOffset {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::{CalendarDate, OrdinalDate};

    #[test]
    fn extended() {
        assert_eq!(Time::parse("T23:20:50"), Time::hms(23.0, 20.0, 50.0));
        assert_eq!(Time::parse("23:20"), Time::hm(23.0, 20.0));
    }

    #[test]
    fn basic() {
        assert_eq!(Time::parse("T232050"), Time::hms(23.0, 20.0, 50.0));
        assert_eq!(Time::parse("2320"), Time::hm(23.0, 20.0));
        assert_eq!(Time::parse("T23"), Time::from_hour(23.0));
    }

    #[test]
    fn fractions() {
        assert_eq!(Time::parse("T14,5"), Time::from_hour(14.5));
        assert_eq!(Time::parse("T23:20:50.25"), Time::hms(23.0, 20.0, 50.25));
    }

    #[test]
    fn mixed_forms() {
        assert!(Time::parse("T23:2050").is_err());
        assert!(Time::parse("T2320:50").is_err());
        assert!(Time::parse("T23:").is_err());
    }

    #[test]
    fn offsets() {
        let time = Time::parse("T12:00-05:30").unwrap();
        assert_eq!(time.utc_offset(), Some(UtcOffset::of_hours_and_minutes(-5, -30).unwrap()));

        let time = Time::parse("T1200Z").unwrap();
        assert_eq!(time.utc_offset(), Some(UtcOffset::utc()));

        assert_eq!("+0530".parse::<UtcOffset>(), UtcOffset::of_hours_and_minutes(5, 30));
        assert!(UtcOffset::parse("+24").is_err());
        assert!(UtcOffset::parse("").is_err());
    }

    #[test]
    fn end_of_day() {
        assert!(Time::parse("T24:00").is_ok());
        assert!(Time::parse("T24:01").unwrap_err().is_parse());
        assert!(Time::parse("T25").is_err());
    }

    #[test]
    fn date_times() {
        let date_time = CalendarDateTime::parse("1985-04-12T10:15:30Z", 4).unwrap();
        assert_eq!(date_time.date(), CalendarDate::ymd(1985, 4, 12).unwrap());
        assert_eq!(date_time.time().utc_offset(), Some(UtcOffset::utc()));

        let date_time: OrdinalDateTime = "1985102T1015".parse().unwrap();
        assert_eq!(date_time.date(), OrdinalDate::new(1985, 102).unwrap());
    }

    #[test]
    fn date_time_needs_a_day() {
        assert!(CalendarDateTime::parse("1985-04T10", 4).unwrap_err().is_parse());
        assert!(TimePoint::parse("1985T10", 4).unwrap_err().is_parse());
    }

    #[test]
    fn points() {
        assert_eq!(TimePoint::parse("19", 4).unwrap().kind(), "calendar date");
        assert_eq!(TimePoint::parse("1985-04", 4).unwrap().kind(), "calendar date");
        assert_eq!(TimePoint::parse("1985-102", 4).unwrap().kind(), "ordinal date");
        assert_eq!(TimePoint::parse("1985-W15", 4).unwrap().kind(), "week date");
        assert_eq!(TimePoint::parse("T10", 4).unwrap().kind(), "time");
        assert_eq!(TimePoint::parse("1985-04-12T10", 4).unwrap().kind(), "calendar date-time");
        assert_eq!(TimePoint::parse("1985-W15-5T10", 4).unwrap().kind(), "week date-time");
    }
}
