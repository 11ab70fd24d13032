//! Fixed offsets from UTC.

use std::fmt;

use crate::error::Error;
use crate::util::RangeExt;


/// A fixed offset from UTC, in hours and minutes.
///
/// Both parts always have the same sign, so an offset of half an hour
/// behind UTC is `(0, -30)`, and five and a half hours behind it is
/// `(-5, -30)`.
#[derive(PartialEq, Eq, Copy, Clone, Hash)]
pub struct UtcOffset {
    hours: i8,
    minutes: i8,
}

impl UtcOffset {

    /// The offset of UTC itself, written `Z`.
    pub fn utc() -> Self {
        Self { hours: 0, minutes: 0 }
    }

    /// An offset of a whole number of hours.
    pub fn of_hours(hours: i8) -> Result<Self, Error> {
        Self::of_hours_and_minutes(hours, 0)
    }

    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::range(format!("offset hours ({}) and minutes ({}) have different signs", hours, minutes)))
        }
        else if !hours.is_within(-23 .. 24) || !minutes.is_within(-59 .. 60) {
            Err(Error::range(format!("offset of {} hours and {} minutes", hours, minutes)))
        }
        else {
            Ok(Self { hours, minutes })
        }
    }

    pub fn hours(self) -> i8 {
        self.hours
    }

    pub fn minutes(self) -> i8 {
        self.minutes
    }

    pub fn is_utc(self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    pub fn is_negative(self) -> bool {
        self.hours.is_negative() || self.minutes.is_negative()
    }

    /// The number of seconds that local time is ahead of UTC.
    pub fn to_seconds(self) -> i64 {
        self.hours as i64 * 3600 + self.minutes as i64 * 60
    }
}

impl fmt::Debug for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UtcOffset({})", self)
    }
}


#[cfg(test)]
mod test {
    use super::UtcOffset;

    #[test]
    fn fixed_hm() {
        assert!(UtcOffset::of_hours_and_minutes(5, 30).is_ok());
    }

    #[test]
    fn fixed_hm_negative() {
        assert!(UtcOffset::of_hours_and_minutes(-3, -45).is_ok());
    }

    #[test]
    fn fixed_hm_err() {
        assert!(UtcOffset::of_hours_and_minutes(8, 60).is_err());
        assert!(UtcOffset::of_hours(24).is_err());
    }

    #[test]
    fn fixed_hm_signs() {
        assert!(UtcOffset::of_hours_and_minutes(-4, 30).unwrap_err().is_out_of_range());
    }

    #[test]
    fn fixed_hm_signs_zero() {
        assert!(UtcOffset::of_hours_and_minutes(4, 0).is_ok());
        assert!(UtcOffset::of_hours_and_minutes(0, -30).unwrap().is_negative());
    }

    #[test]
    fn seconds() {
        assert_eq!(UtcOffset::of_hours_and_minutes(-5, -30).unwrap().to_seconds(), -19_800);
    }

    #[test]
    fn debug_zulu() {
        let debugged = format!("{:?}", UtcOffset::utc());
        assert_eq!(debugged, "UtcOffset(Z)");
    }

    #[test]
    fn debug_offset() {
        let offset = UtcOffset::of_hours_and_minutes(-5, -30).unwrap();
        let debugged = format!("{:?}", offset);
        assert_eq!(debugged, "UtcOffset(-05:30)");
    }
}
