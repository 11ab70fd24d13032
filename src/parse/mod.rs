//! Reading ISO-8601 text.
//!
//! Each value type has a `parse` function that reads exactly one value
//! from a whole string, and a `FromStr` implementation that does the same
//! with four-digit years. Expanded years have to be agreed on in advance:
//! the *year length* says how many digits a signed year has, at the least.
//!
//! Anything that doesn’t match a grammar, or matches one but holds an
//! invalid value, such as a 30th of February, is a parse error carrying
//! the offending part of the input.

mod date;
mod duration;
mod interval;
mod time;

use crate::error::Error;


/// A position in a string being parsed.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Everything that hasn’t been read yet.
    pub(crate) fn remaining(&self) -> &'a str {
        &self.input[self.position ..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub(crate) fn peek_digit(&self) -> bool {
        self.peek().map_or(false, |c| c.is_ascii_digit())
    }

    /// Reads the next character, whatever it is.
    pub(crate) fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Reads the next character if it’s the given one.
    pub(crate) fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.position += c.len_utf8();
            true
        }
        else {
            false
        }
    }

    /// Reads the next character if it’s any of the given ones.
    pub(crate) fn eat_any(&mut self, cs: &[char]) -> Option<char> {
        let c = self.peek().filter(|c| cs.contains(c))?;
        self.position += c.len_utf8();
        Some(c)
    }

    pub(crate) fn expect(&mut self, c: char) -> Result<(), Error> {
        if self.eat(c) { Ok(()) } else { Err(self.error(format!("expected ‘{}’", c))) }
    }

    /// Reads a run of digits, which may be empty.
    pub(crate) fn digits(&mut self) -> &'a str {
        let rest = self.remaining();
        let length = rest.bytes().take_while(u8::is_ascii_digit).count();
        self.position += length;
        &rest[.. length]
    }

    /// Reads exactly `count` digits, and fails if there are fewer.
    pub(crate) fn fixed_digits(&mut self, count: usize, what: &str) -> Result<&'a str, Error> {
        let rest = self.remaining();

        if rest.len() >= count && rest.as_bytes()[.. count].iter().all(u8::is_ascii_digit) {
            self.position += count;
            Ok(&rest[.. count])
        }
        else {
            Err(self.error(format!("expected {} digits for {}", count, what)))
        }
    }

    /// Reads a decimal separator and the digits after it, if there is
    /// one. A separator with no digits after it is an error.
    pub(crate) fn fraction(&mut self) -> Result<Option<&'a str>, Error> {
        if self.eat_any(&[',', '.']).is_none() {
            return Ok(None);
        }

        let digits = self.digits();
        if digits.is_empty() {
            Err(self.error("expected digits after the decimal separator"))
        }
        else {
            Ok(Some(digits))
        }
    }

    /// Reads a number that may have a fractional part.
    pub(crate) fn decimal(&mut self, what: &str) -> Result<f64, Error> {
        let whole = self.digits();
        if whole.is_empty() {
            return Err(self.error(format!("expected a number for {}", what)));
        }

        let fraction = self.fraction()?;
        self.to_decimal(whole, fraction)
    }

    pub(crate) fn to_integer(&self, digits: &str) -> Result<i64, Error> {
        digits.parse().map_err(|_| self.error(format!("{} is too big a number", digits)))
    }

    pub(crate) fn to_decimal(&self, whole: &str, fraction: Option<&str>) -> Result<f64, Error> {
        let text = format!("{}.{}", whole, fraction.unwrap_or("0"));
        text.parse().map_err(|_| self.error(format!("{} is not a number", text)))
    }

    /// Fails unless the whole input has been read.
    pub(crate) fn finish(&self) -> Result<(), Error> {
        if self.remaining().is_empty() { Ok(()) } else { Err(self.error("unexpected trailing characters")) }
    }

    /// A parse error at the current position.
    pub(crate) fn error(&self, message: impl Into<String>) -> Error {
        let message = message.into();
        let offending = if self.remaining().is_empty() { self.input } else { self.remaining() };

        debug!("Rejecting {:?} at {}: {}", self.input, self.position, message);
        Error::parse(message, offending)
    }

    /// Turns the error from constructing a value that was read correctly,
    /// but holds something invalid, into a parse error for the whole
    /// input.
    pub(crate) fn invalid(&self, error: Error) -> Error {
        debug!("Rejecting {:?}: {}", self.input, error);
        Error::parse(error.to_string(), self.input)
    }
}
