//! Writing values out as ISO-8601 text.
//!
//! Every value can be written under a `FormatInfo`, which picks between
//! the basic and extended forms, decides how fractions and offsets get
//! written, and sets how many digits expanded years take up. The
//! `Display` implementations all use the default options.

use std::fmt;

mod iso;


/// The character written between the whole and fractional parts of the
/// last component of a value.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum DecimalSeparator {
    Comma,
    Period,
}

impl DecimalSeparator {
    pub fn as_char(self) -> char {
        match self {
            DecimalSeparator::Comma   => ',',
            DecimalSeparator::Period  => '.',
        }
    }
}


/// Options for writing values as text.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct FormatInfo {

    /// The separator before a fractional part. ISO-8601 prefers a comma.
    pub decimal_separator: DecimalSeparator,

    /// How many digits to write after the separator. `None` writes as
    /// many as it takes to read the same value back, and `Some(n)` cuts
    /// the fraction short or pads it with zeroes to exactly `n` digits.
    /// `Some(0)` leaves fractions off entirely.
    pub fraction_length: Option<usize>,

    /// Whether to write every year in the expanded form, with a sign,
    /// even when the value doesn’t ask for it.
    pub is_expanded: bool,

    /// Whether to use the extended form, with hyphens between the
    /// components of dates and colons between those of times, instead
    /// of the basic form without them.
    pub use_component_separators: bool,

    /// Whether to write a `T` before a time that stands on its own.
    /// Times after a date always get one.
    pub use_time_designator: bool,

    /// Whether to write the UTC offset of a time that has one.
    pub use_utc_offset: bool,

    /// How many digits an expanded year takes up, at the least. This has
    /// to match the year length used when reading the text back.
    pub year_length: usize,
}

impl Default for FormatInfo {
    fn default() -> Self {
        Self {
            decimal_separator: DecimalSeparator::Comma,
            fraction_length: None,
            is_expanded: false,
            use_component_separators: true,
            use_time_designator: true,
            use_utc_offset: true,
            year_length: 4,
        }
    }
}

impl FormatInfo {
    pub fn with_decimal_separator(self, decimal_separator: DecimalSeparator) -> Self {
        Self { decimal_separator, ..self }
    }

    pub fn with_fraction_length(self, fraction_length: Option<usize>) -> Self {
        Self { fraction_length, ..self }
    }

    pub fn with_expanded(self, is_expanded: bool) -> Self {
        Self { is_expanded, ..self }
    }

    pub fn with_component_separators(self, use_component_separators: bool) -> Self {
        Self { use_component_separators, ..self }
    }

    pub fn with_time_designator(self, use_time_designator: bool) -> Self {
        Self { use_time_designator, ..self }
    }

    pub fn with_utc_offset(self, use_utc_offset: bool) -> Self {
        Self { use_utc_offset, ..self }
    }

    pub fn with_year_length(self, year_length: usize) -> Self {
        Self { year_length, ..self }
    }
}


/// Values that can be written out as ISO-8601 text.
pub trait IsoFormat {

    /// Writes this value to the given writer, under the given options.
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result;

    /// Returns a wrapper that displays this value under the given
    /// options.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isodate::cal::CalendarDate;
    /// use isodate::fmt::{FormatInfo, IsoFormat};
    ///
    /// let date = CalendarDate::ymd(1985, 4, 12).unwrap();
    /// let basic = FormatInfo::default().with_component_separators(false);
    /// assert_eq!(date.iso(&basic).to_string(), "19850412");
    /// ```
    fn iso<'a>(&'a self, info: &'a FormatInfo) -> Iso<'a, Self> where Self: Sized {
        Iso { value: self, info }
    }
}

/// A value paired with the options to display it under.
#[derive(Debug, Clone, Copy)]
pub struct Iso<'a, T> {
    value: &'a T,
    info: &'a FormatInfo,
}

impl<'a, T: IsoFormat> fmt::Display for Iso<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.write_iso(f, self.info)
    }
}
