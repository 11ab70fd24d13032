use std::str::FromStr;

use crate::cal::TimePrecision;
use crate::duration::{DesignatedDuration, CalendarDateDuration, OrdinalDateDuration, TimeDuration};
use crate::duration::{CalendarDateTimeDuration, OrdinalDateTimeDuration, Duration};
use crate::error::Error;
use crate::parse::Cursor;
use crate::parse::date::{scan_date, DateFields, DateGrammar};
use crate::parse::time::scan_clock;


/// The letters that can follow the components of a designated duration,
/// and which slot each one fills.
const DATE_DESIGNATORS: [(char, usize); 3] = [('Y', 0), ('M', 1), ('D', 2)];
const TIME_DESIGNATORS: [(char, usize); 3] = [('H', 3), ('M', 4), ('S', 5)];

/// Reads numbers followed by designators, in the order the designators
/// come in, into the slots they name. Returns how many were read.
fn scan_designated(cursor: &mut Cursor<'_>, designators: &[(char, usize)], values: &mut [Option<f64>; 6]) -> Result<usize, Error> {
    let mut next = 0;
    let mut count = 0;

    while cursor.peek_digit() {
        let value = cursor.decimal("a duration component")?;
        let letter = cursor.next_char();

        let position = designators[next ..].iter().position(|(d, _)| Some(*d) == letter);
        match position {
            Some(offset) => {
                let (_, slot) = designators[next + offset];
                values[slot] = Some(value);
                next += offset + 1;
                count += 1;
            }
            None => return Err(cursor.error("expected a designator, in order")),
        }
    }

    Ok(count)
}

fn time_duration(cursor: &Cursor<'_>, clock: (TimePrecision, [f64; 3])) -> Result<TimeDuration, Error> {
    let (precision, [hours, minutes, seconds]) = clock;

    let duration = match precision {
        TimePrecision::Hour    => TimeDuration::from_hours(hours),
        TimePrecision::Minute  => TimeDuration::hm(hours, minutes),
        TimePrecision::Second  => TimeDuration::hms(hours, minutes, seconds),
    };

    duration.map_err(|e| cursor.invalid(e))
}

fn fields_to_calendar_duration(cursor: &Cursor<'_>, fields: DateFields, signed: bool) -> Result<CalendarDateDuration, Error> {
    let duration = match fields {
        DateFields::Century(c)         => CalendarDateDuration::from_centuries(c),
        DateFields::Year(y)            => CalendarDateDuration::from_years(y),
        DateFields::YearMonth(y, m)    => CalendarDateDuration::from_years_months(y, m),
        DateFields::Calendar(y, m, d)  => CalendarDateDuration::new(y, m, d),
        _                              => return Err(cursor.error("expected a calendar date duration")),
    };

    duration.map(|d| d.with_expanded(signed)).map_err(|e| cursor.invalid(e))
}

fn fields_to_ordinal_duration(cursor: &Cursor<'_>, fields: DateFields, signed: bool) -> Result<OrdinalDateDuration, Error> {
    match fields {
        DateFields::Ordinal(y, d)  => OrdinalDateDuration::new(y, d).map(|d| d.with_expanded(signed)).map_err(|e| cursor.invalid(e)),
        _                          => Err(cursor.error("expected an ordinal date duration")),
    }
}

/// Reads a duration in the alternative format, after its `P`: a date
/// part, a time part after a `T`, or both.
fn scan_alternative(cursor: &mut Cursor<'_>, year_length: usize) -> Result<(Option<(DateFields, bool)>, Option<(TimePrecision, [f64; 3])>), Error> {
    let date = if cursor.peek() == Some('T') { None } else { Some(scan_date(cursor, year_length, DateGrammar::Duration)?) };
    let time = if cursor.eat('T') { Some(scan_clock(cursor)?) } else { None };
    cursor.finish()?;
    Ok((date, time))
}


impl DesignatedDuration {

    /// Reads a duration with designators, such as `P1Y2M10DT2H30M` or
    /// `PT0,5S`. The components have to come in order.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        cursor.expect('P')?;

        let mut values = [None; 6];
        let _ = scan_designated(&mut cursor, &DATE_DESIGNATORS, &mut values)?;

        if cursor.eat('T') && scan_designated(&mut cursor, &TIME_DESIGNATORS, &mut values)? == 0 {
            return Err(cursor.error("expected a time component after the ‘T’"));
        }

        cursor.finish()?;

        let [years, months, days, hours, minutes, seconds] = values;
        Self::new(years, months, days, hours, minutes, seconds).map_err(|e| cursor.invalid(e))
    }
}

impl CalendarDateDuration {

    /// Reads a duration such as `P0002-10-15`, `P00021015`, `P0002`, or
    /// `P02`. More than four digits of years need a `+` sign and the
    /// agreed year length.
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        cursor.expect('P')?;

        match scan_alternative(&mut cursor, year_length)? {
            (Some((fields, signed)), None)  => fields_to_calendar_duration(&cursor, fields, signed),
            _                               => Err(cursor.error("expected a calendar date duration")),
        }
    }
}

impl OrdinalDateDuration {

    /// Reads a duration such as `P0002-045` or `P0002045`.
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        cursor.expect('P')?;

        match scan_alternative(&mut cursor, year_length)? {
            (Some((fields, signed)), None)  => fields_to_ordinal_duration(&cursor, fields, signed),
            _                               => Err(cursor.error("expected an ordinal date duration")),
        }
    }
}

impl TimeDuration {

    /// Reads a duration such as `PT02:30:00` or `PT0230`.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        cursor.expect('P')?;
        cursor.expect('T')?;
        let clock = scan_clock(&mut cursor)?;
        cursor.finish()?;
        time_duration(&cursor, clock)
    }
}

impl CalendarDateTimeDuration {

    /// Reads a duration such as `P0001-02-03T04:05:06`.
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        cursor.expect('P')?;

        match scan_alternative(&mut cursor, year_length)? {
            (Some((fields, signed)), Some(clock)) => {
                let date = fields_to_calendar_duration(&cursor, fields, signed)?;
                let time = time_duration(&cursor, clock)?;
                Self::new(date, time).map_err(|e| cursor.invalid(e))
            }
            _ => Err(cursor.error("expected a calendar date-time duration")),
        }
    }
}

impl OrdinalDateTimeDuration {

    /// Reads a duration such as `P0001-045T04:05`.
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        cursor.expect('P')?;

        match scan_alternative(&mut cursor, year_length)? {
            (Some((fields, signed)), Some(clock)) => {
                let date = fields_to_ordinal_duration(&cursor, fields, signed)?;
                let time = time_duration(&cursor, clock)?;
                Ok(Self::new(date, time))
            }
            _ => Err(cursor.error("expected an ordinal date-time duration")),
        }
    }
}

impl Duration {

    /// Reads any kind of duration, working out which kind it is from its
    /// shape: any designator letter makes it a designated duration, and
    /// otherwise it’s in the alternative format.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::Duration;
    ///
    /// assert_eq!(Duration::parse("P1Y2M", 4).unwrap().kind(), "designated duration");
    /// assert_eq!(Duration::parse("P0001-02", 4).unwrap().kind(), "calendar date duration");
    /// assert_eq!(Duration::parse("PT10:00", 4).unwrap().kind(), "time duration");
    /// ```
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let designated = input.chars().skip(1).any(|c| "YMWDHS".contains(c));
        if designated {
            return DesignatedDuration::parse(input).map(Duration::Designated);
        }

        let mut cursor = Cursor::new(input);
        cursor.expect('P')?;

        match scan_alternative(&mut cursor, year_length)? {
            (None, Some(clock)) => {
                time_duration(&cursor, clock).map(Duration::Time)
            }
            (Some((fields @ DateFields::Ordinal(..), signed)), None) => {
                fields_to_ordinal_duration(&cursor, fields, signed).map(Duration::OrdinalDate)
            }
            (Some((fields, signed)), None) => {
                fields_to_calendar_duration(&cursor, fields, signed).map(Duration::CalendarDate)
            }
            (Some((fields @ DateFields::Ordinal(..), signed)), Some(clock)) => {
                let date = fields_to_ordinal_duration(&cursor, fields, signed)?;
                let time = time_duration(&cursor, clock)?;
                Ok(Duration::OrdinalDateTime(OrdinalDateTimeDuration::new(date, time)))
            }
            (Some((fields, signed)), Some(clock)) => {
                let date = fields_to_calendar_duration(&cursor, fields, signed)?;
                let time = time_duration(&cursor, clock)?;
                CalendarDateTimeDuration::new(date, time).map(Duration::CalendarDateTime).map_err(|e| cursor.invalid(e))
            }
            (None, None) => {
                Err(cursor.error("expected a duration"))
            }
        }
    }
}


impl FromStr for DesignatedDuration {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl FromStr for TimeDuration {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl FromStr for CalendarDateDuration {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, 4)
    }
}

impl FromStr for OrdinalDateDuration {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, 4)
    }
}

impl FromStr for CalendarDateTimeDuration {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, 4)
    }
}

impl FromStr for OrdinalDateTimeDuration {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, 4)
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, 4)
    }
}
