//! Leap years, month lengths, day counts, weekdays, and week numbers.
//!
//! Everything in here is a pure function of plain numbers. The value types
//! in the rest of `cal` are built on top of these, and only call them with
//! components they have already validated.

use std::cmp;
use std::ops::Deref;

use crate::error::Error;
use crate::util::split_cycles;

use self::Month::*;
use self::Weekday::*;


/// The largest year any date can have. Beyond this, a span of seconds
/// between two dates would no longer fit in 64 bits.
pub const MAX_YEAR: i64 = 99_999_999_999;

/// The smallest year any date can have.
pub const MIN_YEAR: i64 = -MAX_YEAR;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::cal::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// Returns the number of days in this year: 366 in leap years, and
    /// 365 otherwise.
    pub fn day_count(self) -> u16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year,
    ///    counting from the year 2000;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        // This calculation is the reverse of `civil_from_days`.
        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        // Standard leap-year calculations, performed on the remainder
        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// Returns whether the given year is a leap year in the proleptic
/// Gregorian calendar: divisible by four, except for centuries that
/// aren’t divisible by four hundred.
pub fn is_leap_year(year: i64) -> bool {
    Year(year).is_leap_year()
}

/// Returns the number of days in the given year.
pub fn days_in_year(year: i64) -> u16 {
    Year(year).day_count()
}

/// Returns the number of days in the given month of the given year.
pub fn days_in_month(year: i64, month: Month) -> u8 {
    month.days_in_month(is_leap_year(year))
}

/// Returns the number of days in the year that have elapsed before the
/// given month starts.
pub fn days_to_month(year: i64, month: Month) -> u16 {
    if is_leap_year(year) { DAYS_TO_MONTH_366[month as usize] }
                     else { DAYS_TO_MONTH_365[month as usize] }
}

/// Returns the day of the year, from 1 to 366, of the given date.
pub fn day_of_year(year: i64, month: Month, day: u8) -> u16 {
    days_to_month(year, month) + day as u16
}

/// Returns the day of the week that the given date falls on.
///
/// ### Examples
///
/// ```
/// use isodate::cal::{day_of_week, Month, Weekday};
///
/// assert_eq!(day_of_week(2000, Month::January, 1), Weekday::Saturday);
/// assert_eq!(day_of_week(-1, Month::December, 31), Weekday::Friday);
/// ```
pub fn day_of_week(year: i64, month: Month, day: u8) -> Weekday {
    days_to_weekday(days_from_civil(year, month, day))
}

/// Returns the ISO week of the week-numbering year that the given date
/// falls into, from 1 to 53.
///
/// Dates early in January can belong to the last week of the previous
/// year, and dates late in December to the first week of the next one,
/// so the week-numbering year is returned alongside the week.
///
/// ### Examples
///
/// ```
/// use isodate::cal::{week_of_year, Month};
///
/// assert_eq!(week_of_year(2009, Month::December, 31), (2009, 53));
/// assert_eq!(week_of_year(2010, Month::January, 3), (2009, 53));
/// assert_eq!(week_of_year(2008, Month::December, 29), (2009, 1));
/// ```
pub fn week_of_year(year: i64, month: Month, day: u8) -> (i64, u8) {
    let week = raw_week_of_year(year, month, day);

    if week < 1 {
        (year - 1, weeks_in_year(year - 1))
    }
    else if week > weeks_in_year(year) as i64 {
        (year + 1, 1)
    }
    else {
        (year, week as u8)
    }
}

/// Returns the number of ISO weeks in the given week-numbering year:
/// 53 when the year has a long last week, and 52 otherwise. The 28th of
/// December always falls in the last week.
pub fn weeks_in_year(year: i64) -> u8 {
    raw_week_of_year(year, December, 28) as u8
}

/// The ordinal week formula, which gives 0 for days that belong to the
/// previous year and can give 53 for days that belong to the next one.
fn raw_week_of_year(year: i64, month: Month, day: u8) -> i64 {
    let yearday = day_of_year(year, month, day) as i64;
    let weekday = day_of_week(year, month, day).days_from_monday_as_one() as i64;
    (yearday - weekday + 10) / 7
}

/// Returns the day of the year that the given ISO week date falls on,
/// relative to the start of the week-numbering year’s calendar year. The
/// result can be zero or negative for days in the previous calendar year,
/// or exceed the year length for days in the next one.
pub(crate) fn week_date_to_yearday(year: i64, week: u8, weekday: u8) -> i64 {
    let jan_4 = day_of_week(year, January, 4).days_from_monday_as_one() as i64;
    7 * week as i64 + weekday as i64 - (jan_4 + 3)
}

/// Returns the century of the year: 20 for 2000 to 2099, and -1 for the
/// century of years -100 to -1.
pub fn century_of_year(year: i64) -> i64 {
    year.div_euclid(100)
}

/// Returns the number of years into the century, from 0 to 99.
pub fn year_of_century(year: i64) -> i64 {
    year.rem_euclid(100)
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// By having the reference point immediately after a possible leap-year
/// day, the maths needed to turn a day count back into a month and a day
/// comes out a *lot* simpler. The Gregorian calendar operates on a 400-year
/// cycle, so the combination of having it on a year that’s a multiple of
/// 400, and having the leap day at the very end of one of these cycles,
/// reduces the calculations to simple division.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.

/// Number of days between **1st January, 1970** and **1st January, 2000**.
const DAYS_TO_2000: i64 = 30 * 365 + 7;

/// This rather strange triangle is an array of the number of days elapsed
/// at the end of each month, starting at the beginning of March (the first
/// month after the EPOCH above), going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March

/// Days elapsed before each month starts, indexed from 1, in common and
/// leap years.
const DAYS_TO_MONTH_365: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
const DAYS_TO_MONTH_366: [u16; 13] = [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];


/// Calculates the number of days that have elapsed since the 1st January,
/// 1970, for a year, month, and day of that month.
///
/// This is a closed form: years are counted with the leap-year
/// corrections for 4-, 100-, and 400-year boundaries, so a span of any
/// length costs the same as a span of a day.
pub fn days_from_civil(year: i64, month: Month, day: u8) -> i64 {
    let (leap_days_elapsed, _) = Year(year).leap_year_calculations();

    // Work out the number of days from the start of 2000 to the start of
    // this year, which is a multiple of the number of years...
    (year - 2000) * 365

        // plus the days between 1970 and 2000, plus one for 2000 itself
        // being a leap year that `leap_days_elapsed` doesn’t count...
        + DAYS_TO_2000 + 1

        // plus the number of leap years that have elapsed between now
        // and the start of 2000...
        + leap_days_elapsed

        // plus the number of days in all the months leading up to the
        // current month, including this year’s leap day...
        + days_to_month(year, month) as i64

        // plus the number of days in the month so far! (Days are
        // 1-indexed, so we make them 0-indexed here)
        + (day as i64 - 1)
}

/// Computes the year, month, and day given the number of days that have
/// passed since the 1st January, 1970.
pub fn civil_from_days(days: i64) -> (i64, u8, u8) {

    // The Gregorian calendar works in 400-year cycles, which repeat
    // themselves ever after.
    //
    // This calculation works by finding the number of 400-year,
    // 100-year, and 4-year cycles, then constantly subtracting the
    // number of leftover days.
    let (num_400y_cycles, mut remainder) = split_cycles(days - EPOCH_DIFFERENCE, DAYS_IN_400Y);

    // The last day of a 400-year cycle is the leap day that makes it one
    // day longer than four centuries, so it stays in the fourth century.
    let num_100y_cycles = cmp::min(remainder / DAYS_IN_100Y, 3);
    remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

    let num_4y_cycles = remainder / DAYS_IN_4Y;
    remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

    let mut years = cmp::min(remainder / 365, 3);
    remainder -= years * 365;  // remainder is now days left in this year

    // Turn all those cycles into an actual number of years.
    years +=   4 * num_4y_cycles
           + 100 * num_100y_cycles
           + 400 * num_400y_cycles;

    // Work out the month and number of days into the month by scanning
    // the time triangle, finding the month that has the correct number
    // of days elapsed at the end of it.
    // (it’s “11 - index” below because the triangle goes backwards)
    let result = TIME_TRIANGLE.iter()
                              .enumerate()
                              .find(|&(_, days)| *days <= remainder);

    let (mut month, month_days) = match result {
        Some((index, days)) => (11 - index as i64, remainder - *days),
        None => (0, remainder),  // No month found? Then it’s March.
    };

    // Need to add 2 to the month in order to compensate for the EPOCH
    // being in March.
    month += 2;

    if month >= 12 {
        years += 1;   // wrap around for January and February
        month -= 12;
    }

    (years + 2000, (month + 1) as u8, (month_days + 1) as u8)
}

/// Computes the weekday, given the number of days that have passed
/// since the 1st January, 1970.
pub(crate) fn days_to_weekday(days: i64) -> Weekday {
    // The 1st of January, 1970 was a Thursday, so add 4 to the number of days.
    let weekday = (days + 4).rem_euclid(7);
    Weekday::from_zero(weekday as u8).unwrap_or(Sunday)
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as u8` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> u8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use isodate::cal::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: u8) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::range(format!("the month must be a value from 1 to 12, not {}", month))),
        })
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0, which is the numbering `as u8` gives. ISO-8601 week
// dates number their days from Monday as 1 to Sunday as 7 instead, which
// is what `days_from_monday_as_one` and `from_one` are for.
//
// Weekdays get no Ord instance because there’s no real standard as to
// whether Sunday should come before Monday, or the other way around.

impl Weekday {

    /// Returns the ISO-8601 number of this day: Monday is 1, and Sunday
    /// is 7.
    pub fn days_from_monday_as_one(self) -> u8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use isodate::cal::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: u8) -> Result<Self, Error> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::range(format!("the weekday must be a value from 0 to 6, not {}", weekday))),
        })
    }

    /// Return the weekday based on its ISO-8601 number, with Monday as
    /// Day 1 and Sunday as Day 7.
    pub fn from_one(weekday: u8) -> Result<Self, Error> {
        Ok(match weekday {
            7 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::range(format!("the weekday must be a value from 1 to 7, not {}", weekday))),
        })
    }
}
