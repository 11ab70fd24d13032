//! Ordering dates of different kinds and precisions.

use std::cmp::Ordering;

use crate::cal::date::{CalendarDate, CalendarDatePrecision, OrdinalDate, WeekDate, WeekDatePrecision};


/// How much time a date covers, from a whole century down to a single
/// day. Coarser granularities sort first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Granularity {
    Century,
    Year,
    Month,
    Week,
    Day,
}


/// The **date piece** trait is used for values that cover a span of
/// whole days, which is all that’s needed to order them against each
/// other.
pub trait DatePiece {

    /// The number of days between 1970-01-01 and the first day this
    /// value covers.
    fn first_day(&self) -> i64;

    /// How much time this value covers.
    fn granularity(&self) -> Granularity;
}

impl DatePiece for CalendarDate {
    fn first_day(&self) -> i64 {
        self.days_since_epoch()
    }

    fn granularity(&self) -> Granularity {
        match self.precision() {
            CalendarDatePrecision::Century  => Granularity::Century,
            CalendarDatePrecision::Year     => Granularity::Year,
            CalendarDatePrecision::Month    => Granularity::Month,
            CalendarDatePrecision::Day      => Granularity::Day,
        }
    }
}

impl DatePiece for OrdinalDate {
    fn first_day(&self) -> i64 {
        self.days_since_epoch()
    }

    fn granularity(&self) -> Granularity {
        Granularity::Day
    }
}

impl DatePiece for WeekDate {
    fn first_day(&self) -> i64 {
        self.days_since_epoch()
    }

    fn granularity(&self) -> Granularity {
        match self.precision() {
            WeekDatePrecision::Year  => Granularity::Year,
            WeekDatePrecision::Week  => Granularity::Week,
            WeekDatePrecision::Day   => Granularity::Day,
        }
    }
}


/// Orders any two dates: first by the first day each one covers, then
/// with the coarser one first.
///
/// This is a total order, so the year 2000 comes before January 2000,
/// which comes before the 1st of January, 2000, which is the same as
/// the first day of 2000 as an ordinal date.
///
/// ### Examples
///
/// ```
/// use std::cmp::Ordering;
/// use isodate::cal::{compare, CalendarDate, OrdinalDate};
///
/// let year = CalendarDate::from_year(2000).unwrap();
/// let day = OrdinalDate::new(2000, 1).unwrap();
/// assert_eq!(compare(&year, &day), Ordering::Less);
/// ```
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where A: DatePiece + ?Sized,
      B: DatePiece + ?Sized,
{
    a.first_day().cmp(&b.first_day())
        .then_with(|| a.granularity().cmp(&b.granularity()))
}


// Equality goes through `compare`, so dates that only differ in whether
// they get written expanded are equal.
macro_rules! compared_ordering {
    ($($t:ident),*) => {
        $(
            impl PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    compare(self, other) == Ordering::Equal
                }
            }

            impl Eq for $t {}

            impl PartialOrd for $t {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl Ord for $t {
                fn cmp(&self, other: &Self) -> Ordering {
                    compare(self, other)
                }
            }
        )*
    }
}

compared_ordering!(CalendarDate, OrdinalDate, WeekDate);
