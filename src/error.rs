//! The one error type shared by every operation in this crate.

use thiserror::Error as ThisError;


/// An error that can occur when constructing, parsing, converting, or
/// doing arithmetic with ISO-8601 values.
///
/// There are four kinds, matching the four ways an operation can go
/// wrong:
///
/// - a component is outside its valid domain (`OutOfRange`);
/// - text does not match any grammar (`Parse`);
/// - a conversion would lose information (`Conversion`);
/// - an arithmetic combination has no defined rule (`Unsupported`).
///
/// None of them are ever recovered from inside the crate.
#[derive(PartialEq, Eq, Debug, Clone, ThisError)]
pub enum Error {

    /// A component value is outside of its valid range, such as a month
    /// of 13, a 29th of February in a common year, or a time that falls
    /// outside of its day.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// The input did not match the expected grammar, or matched it but
    /// encoded an invalid value.
    #[error("parse error: {message} (in {input:?})")]
    Parse {
        message: String,
        input: String,
    },

    /// A value was converted to another representation without being
    /// precise enough for the conversion to be lossless.
    #[error("conversion error: {0}")]
    Conversion(String),

    /// An arithmetic operation was attempted on a combination of operands
    /// that has no defined rule.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl Error {
    pub(crate) fn range(message: impl Into<String>) -> Self {
        Error::OutOfRange(message.into())
    }

    pub(crate) fn parse(message: impl Into<String>, input: &str) -> Self {
        Error::Parse { message: message.into(), input: input.to_owned() }
    }

    pub(crate) fn conversion(message: impl Into<String>) -> Self {
        Error::Conversion(message.into())
    }

    pub(crate) fn unsupported(message: impl Into<String>) -> Self {
        Error::Unsupported(message.into())
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, Error::Conversion(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }

    /// The offending piece of input, for parse errors.
    pub fn invalid_input(&self) -> Option<&str> {
        match self {
            Error::Parse { input, .. } => Some(input),
            _                          => None,
        }
    }
}


#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display_parse() {
        let error = Error::parse("expected a month", "2021-13");
        assert_eq!(error.to_string(), "parse error: expected a month (in \"2021-13\")");
        assert_eq!(error.invalid_input(), Some("2021-13"));
    }

    #[test]
    fn predicates() {
        assert!(Error::range("month").is_out_of_range());
        assert!(Error::conversion("week").is_conversion());
        assert!(Error::unsupported("hours").is_unsupported());
        assert!(!Error::unsupported("hours").is_parse());
        assert_eq!(Error::range("month").invalid_input(), None);
    }
}
