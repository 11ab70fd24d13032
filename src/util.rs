//! Misc stuff.

use std::ops::Range;

use num_traits::{PrimInt, Signed, ToPrimitive};

use crate::error::Error;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

// Define RangeExt on *anything* that can be compared, though it’s only
// really ever used for numeric ranges...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        *self >= range.start && *self < range.end
    }
}


/// Split a number of periods into a number of whole cycles, and the number
/// of periods left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values. It gets used for 400-year cycles, days,
/// months in a year, and seconds in a minute alike.
pub(crate) fn split_cycles<N>(number_of_periods: N, cycle_length: N) -> (N, N)
where N: PrimInt + Signed
{
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder.is_negative() {
        remainder = remainder + cycle_length;
        cycles    = cycles - N::one();
    }

    (cycles, remainder)
}


/// Converts a float that is known to hold a whole number into an integer,
/// failing instead of saturating when it doesn’t fit.
pub(crate) fn whole(value: f64, what: &str) -> Result<i64, Error> {
    value.trunc()
         .to_i64()
         .ok_or_else(|| Error::range(format!("{} of {} does not fit in a 64-bit integer", what, value)))
}


/// Whether a float has a fractional part worth keeping.
///
/// Arithmetic on fractions of hours and minutes picks up rounding noise,
/// so anything within a nanosecond of a whole number counts as whole.
pub(crate) fn is_fractional(value: f64) -> bool {
    let fraction = value - value.round();
    fraction.abs() > 1e-9
}

/// Snaps values within a nanosecond of a whole number onto it.
pub(crate) fn snap(value: f64) -> f64 {
    if is_fractional(value) { value } else { value.round() }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_positive() {
        assert_eq!(split_cycles(13_i64, 12), (1, 1));
    }

    #[test]
    fn split_negative() {
        assert_eq!(split_cycles(-1_i64, 12), (-1, 11));
        assert_eq!(split_cycles(-12_i64, 12), (-1, 0));
        assert_eq!(split_cycles(-13_i64, 12), (-2, 11));
    }

    #[test]
    fn whole_numbers() {
        assert_eq!(whole(12.75, "hour"), Ok(12));
        assert!(whole(f64::NAN, "hour").is_err());
        assert!(whole(1e30, "year").is_err());
    }

    #[test]
    fn fractions() {
        assert!(is_fractional(0.5));
        assert!(!is_fractional(3.0));
        assert!(!is_fractional(2.999_999_999_999));
        assert_eq!(snap(29.999_999_999_99), 30.0);
    }
}
