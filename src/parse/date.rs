use std::str::FromStr;

use crate::cal::{CalendarDate, OrdinalDate, WeekDate};
use crate::error::Error;
use crate::parse::Cursor;


/// The fields of a date, as read from the input, before they have been
/// checked.
#[derive(PartialEq, Debug, Clone, Copy)]
pub(crate) enum DateFields {
    Century(i64),
    Year(i64),
    YearMonth(i64, u8),
    Calendar(i64, u8, u8),
    Ordinal(i64, u16),
    YearWeek(i64, u8),
    Week(i64, u8, u8),
}

/// Which signs are allowed in front of a year, and whether week dates
/// are. Dates can go either side of year zero, but durations can’t.
#[derive(PartialEq, Debug, Clone, Copy)]
pub(crate) enum DateGrammar {
    Point,
    Duration,
}

impl DateGrammar {
    fn signs(self) -> &'static [char] {
        match self {
            DateGrammar::Point     => &['+', '-'],
            DateGrammar::Duration  => &['+'],
        }
    }
}

/// Reads the date part of a value, in any of its forms.
///
/// Unsigned years have exactly four digits. Signed years have at least
/// `year_length` in the extended form, where a hyphen marks their end,
/// and exactly `year_length` in the basic form, where the number of
/// digits is all there is to tell the forms apart.
///
/// Returns the fields, and whether the year was signed.
pub(crate) fn scan_date(cursor: &mut Cursor<'_>, year_length: usize, grammar: DateGrammar) -> Result<(DateFields, bool), Error> {
    let sign = cursor.eat_any(grammar.signs());
    let run = cursor.digits();

    if run.is_empty() {
        return Err(cursor.error("expected a year"));
    }

    let fields = if cursor.eat('-') {
        let year = year(cursor, run, sign, year_length)?;

        if grammar == DateGrammar::Point && cursor.eat('W') {
            let digits = cursor.fixed_digits(2, "a week")?;
            let week = small(cursor, digits)?;

            if cursor.eat('-') {
                let digits = cursor.fixed_digits(1, "a weekday")?;
                DateFields::Week(year, week, small(cursor, digits)?)
            }
            else {
                DateFields::YearWeek(year, week)
            }
        }
        else {
            let rest = cursor.digits();
            match rest.len() {
                3 => DateFields::Ordinal(year, cursor.to_integer(rest)? as u16),
                2 => {
                    let month = small(cursor, rest)?;
                    if cursor.eat('-') {
                        let digits = cursor.fixed_digits(2, "a day")?;
                        DateFields::Calendar(year, month, small(cursor, digits)?)
                    }
                    else {
                        DateFields::YearMonth(year, month)
                    }
                }
                _ => return Err(cursor.error("expected a month or a day of the year")),
            }
        }
    }
    else if grammar == DateGrammar::Point && cursor.eat('W') {
        let year = year(cursor, run, sign, year_length)?;
        let rest = cursor.digits();
        match rest.len() {
            2 => DateFields::YearWeek(year, small(cursor, rest)?),
            3 => DateFields::Week(year, small(cursor, &rest[.. 2])?, small(cursor, &rest[2 ..])?),
            _ => return Err(cursor.error("expected a week, and maybe a weekday")),
        }
    }
    else {
        let width = if sign.is_some() { year_length } else { 4 };
        let (head, tail) = if run.len() > width { run.split_at(width) } else { (run, "") };

        match (run.len(), tail.len()) {
            (n, _) if n + 2 == width => {
                let century = cursor.to_integer(run)?;
                DateFields::Century(if sign == Some('-') { -century } else { century })
            }
            (_, 4) => {
                let year = year(cursor, head, sign, year_length)?;
                DateFields::Calendar(year, small(cursor, &tail[.. 2])?, small(cursor, &tail[2 ..])?)
            }
            (_, 3) => {
                let year = year(cursor, head, sign, year_length)?;
                DateFields::Ordinal(year, cursor.to_integer(tail)? as u16)
            }
            (n, _) if n == width => {
                DateFields::Year(year(cursor, run, sign, year_length)?)
            }
            (n, _) if sign.is_some() => {
                return Err(cursor.error(format!("a signed date of {} digits does not fit a year length of {}", n, year_length)));
            }
            _ => return Err(cursor.error(format!("a date of {} digits", run.len()))),
        }
    };

    Ok((fields, sign.is_some()))
}

fn year(cursor: &Cursor<'_>, digits: &str, sign: Option<char>, year_length: usize) -> Result<i64, Error> {
    let length_ok = if sign.is_some() { digits.len() >= year_length } else { digits.len() == 4 };
    if !length_ok {
        return Err(cursor.error(format!("a year of {} digits", digits.len())));
    }

    let year = cursor.to_integer(digits)?;
    Ok(if sign == Some('-') { -year } else { year })
}

/// Months, days, weeks, and weekdays are never more than two digits.
fn small(cursor: &Cursor<'_>, digits: &str) -> Result<u8, Error> {
    Ok(cursor.to_integer(digits)? as u8)
}


impl CalendarDate {

    /// Reads a calendar date in any of its forms, from a century such as
    /// `19` down to a day such as `1985-04-12` or `19850412`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::cal::CalendarDate;
    ///
    /// let date = CalendarDate::parse("+012345-04", 6).unwrap();
    /// assert_eq!(date, CalendarDate::from_year_month(12345, 4).unwrap());
    /// assert!(CalendarDate::parse("1985-02-30", 4).unwrap_err().is_parse());
    /// ```
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        let (fields, signed) = scan_date(&mut cursor, year_length, DateGrammar::Point)?;
        cursor.finish()?;
        fields_to_calendar_date(&cursor, fields, signed)
    }
}

impl OrdinalDate {

    /// Reads an ordinal date, such as `1985-102` or `1985102`.
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        let (fields, signed) = scan_date(&mut cursor, year_length, DateGrammar::Point)?;
        cursor.finish()?;
        fields_to_ordinal_date(&cursor, fields, signed)
    }
}

impl WeekDate {

    /// Reads a week date, such as `1985-W15-5`, `1985W155`, or `1985-W15`.
    pub fn parse(input: &str, year_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(input);
        let (fields, signed) = scan_date(&mut cursor, year_length, DateGrammar::Point)?;
        cursor.finish()?;
        fields_to_week_date(&cursor, fields, signed)
    }
}

pub(crate) fn fields_to_calendar_date(cursor: &Cursor<'_>, fields: DateFields, signed: bool) -> Result<CalendarDate, Error> {
    let date = match fields {
        DateFields::Century(c)            => CalendarDate::from_century(c),
        DateFields::Year(y)               => CalendarDate::from_year(y),
        DateFields::YearMonth(y, m)       => CalendarDate::from_year_month(y, m),
        DateFields::Calendar(y, m, d)     => CalendarDate::ymd(y, m, d),
        _                                 => return Err(cursor.error("expected a calendar date")),
    };

    date.map(|d| d.with_expanded(signed)).map_err(|e| cursor.invalid(e))
}

pub(crate) fn fields_to_ordinal_date(cursor: &Cursor<'_>, fields: DateFields, signed: bool) -> Result<OrdinalDate, Error> {
    match fields {
        DateFields::Ordinal(y, d)  => OrdinalDate::new(y, d).map(|d| d.with_expanded(signed)).map_err(|e| cursor.invalid(e)),
        _                          => Err(cursor.error("expected an ordinal date")),
    }
}

pub(crate) fn fields_to_week_date(cursor: &Cursor<'_>, fields: DateFields, signed: bool) -> Result<WeekDate, Error> {
    let date = match fields {
        DateFields::Year(y)         => WeekDate::from_year(y),
        DateFields::YearWeek(y, w)  => WeekDate::from_year_week(y, w),
        DateFields::Week(y, w, d)   => WeekDate::ywd(y, w, d),
        _                           => return Err(cursor.error("expected a week date")),
    };

    date.map(|d| d.with_expanded(signed)).map_err(|e| cursor.invalid(e))
}


impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, 4)
    }
}

impl FromStr for OrdinalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, 4)
    }
}

impl FromStr for WeekDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, 4)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::CalendarDatePrecision;

    fn scan(input: &str, year_length: usize) -> Result<(DateFields, bool), Error> {
        let mut cursor = Cursor::new(input);
        let result = scan_date(&mut cursor, year_length, DateGrammar::Point)?;
        cursor.finish()?;
        Ok(result)
    }

    #[test]
    fn forms() {
        assert_eq!(scan("19", 4),          Ok((DateFields::Century(19), false)));
        assert_eq!(scan("1985", 4),        Ok((DateFields::Year(1985), false)));
        assert_eq!(scan("1985-04", 4),     Ok((DateFields::YearMonth(1985, 4), false)));
        assert_eq!(scan("1985-04-12", 4),  Ok((DateFields::Calendar(1985, 4, 12), false)));
        assert_eq!(scan("19850412", 4),    Ok((DateFields::Calendar(1985, 4, 12), false)));
        assert_eq!(scan("1985-102", 4),    Ok((DateFields::Ordinal(1985, 102), false)));
        assert_eq!(scan("1985102", 4),     Ok((DateFields::Ordinal(1985, 102), false)));
        assert_eq!(scan("1985-W15", 4),    Ok((DateFields::YearWeek(1985, 15), false)));
        assert_eq!(scan("1985W15", 4),     Ok((DateFields::YearWeek(1985, 15), false)));
        assert_eq!(scan("1985-W15-5", 4),  Ok((DateFields::Week(1985, 15, 5), false)));
        assert_eq!(scan("1985W155", 4),    Ok((DateFields::Week(1985, 15, 5), false)));
    }

    #[test]
    fn expanded_forms() {
        assert_eq!(scan("+0019", 6),            Ok((DateFields::Century(19), true)));
        assert_eq!(scan("-001985", 6),          Ok((DateFields::Year(-1985), true)));
        assert_eq!(scan("+001985-04-12", 6),    Ok((DateFields::Calendar(1985, 4, 12), true)));
        assert_eq!(scan("+0019850412", 6),      Ok((DateFields::Calendar(1985, 4, 12), true)));
        assert_eq!(scan("+001985102", 6),       Ok((DateFields::Ordinal(1985, 102), true)));
        assert_eq!(scan("+123456789-01-01", 4), Ok((DateFields::Calendar(123_456_789, 1, 1), true)));
    }

    #[test]
    fn wrong_year_lengths() {
        assert!(scan("198", 4).is_err());
        assert!(scan("01985-04", 4).is_err());
        assert!(scan("+1985-04", 6).is_err());
        assert!(scan("+12345", 4).is_err());
        assert!(scan("+1234560412", 4).is_err());
    }

    #[test]
    fn garbage() {
        assert!(scan("", 4).is_err());
        assert!(scan("1985-4", 4).is_err());
        assert!(scan("1985-04-1", 4).is_err());
        assert!(scan("1985-Wx", 4).is_err());
        assert!(scan("nope", 4).is_err());
    }

    #[test]
    fn invalid_values() {
        let error = CalendarDate::parse("2001-02-29", 4).unwrap_err();
        assert!(error.is_parse());
        assert_eq!(error.invalid_input(), Some("2001-02-29"));

        assert!(OrdinalDate::parse("2001-366", 4).is_err());
        assert!(WeekDate::parse("2005-W53", 4).is_err());
        assert!(WeekDate::parse("2004-W53-8", 4).is_err());
    }

    #[test]
    fn wrong_kind() {
        assert!(CalendarDate::parse("1985-102", 4).is_err());
        assert!(OrdinalDate::parse("1985-04-12", 4).is_err());
        assert!(WeekDate::parse("1985-04-12", 4).is_err());
    }

    #[test]
    fn expanded_flag() {
        let date: CalendarDate = "+1985-04-12".parse().unwrap();
        assert!(date.is_expanded());
        assert_eq!(date.precision(), CalendarDatePrecision::Day);

        let date: CalendarDate = "1985".parse().unwrap();
        assert!(!date.is_expanded());
    }
}
