use std::fmt;

use pad::{PadStr, Alignment};

use crate::cal::{CalendarDate, CalendarDatePrecision, OrdinalDate, WeekDate, WeekDatePrecision};
use crate::cal::{Time, TimePrecision, UtcOffset, CalendarDateTime, OrdinalDateTime, WeekDateTime};
use crate::duration::{DesignatedDuration, CalendarDateDuration, OrdinalDateDuration, TimeDuration};
use crate::duration::{CalendarDateTimeDuration, OrdinalDateTimeDuration, Duration};
use crate::fmt::{FormatInfo, IsoFormat};
use crate::interval::TimeInterval;
use crate::point::TimePoint;


fn zero_padded(number: u64, width: usize) -> String {
    number.to_string().pad(width, '0', Alignment::Right, false)
}

fn separator(w: &mut dyn fmt::Write, c: char, info: &FormatInfo) -> fmt::Result {
    if info.use_component_separators { w.write_char(c) } else { Ok(()) }
}

fn write_signed(w: &mut dyn fmt::Write, number: i64, width: usize) -> fmt::Result {
    w.write_char(if number < 0 { '-' } else { '+' })?;
    w.write_str(&zero_padded(number.unsigned_abs(), width))
}

/// Years are four digits, or signed and at least `year_length` digits
/// when expanded.
fn write_year(w: &mut dyn fmt::Write, year: i64, expanded: bool, info: &FormatInfo) -> fmt::Result {
    if expanded || info.is_expanded {
        write_signed(w, year, info.year_length)
    }
    else {
        w.write_str(&zero_padded(year.unsigned_abs(), 4))
    }
}

/// Centuries are two digits shorter than years.
fn write_century(w: &mut dyn fmt::Write, century: i64, expanded: bool, info: &FormatInfo) -> fmt::Result {
    if expanded || info.is_expanded {
        write_signed(w, century, info.year_length.saturating_sub(2))
    }
    else {
        w.write_str(&zero_padded(century.unsigned_abs(), 2))
    }
}

/// Writes a non-negative number with its whole part padded to `width`
/// digits, and its fractional part (if any) cut or padded to the
/// fraction length.
fn write_decimal(w: &mut dyn fmt::Write, value: f64, width: usize, info: &FormatInfo) -> fmt::Result {
    // adding zero turns a negative zero into a positive one
    let text = (value + 0.0).to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    w.write_str(&whole.pad(width, '0', Alignment::Right, false))?;

    let fraction = match info.fraction_length {
        Some(length)  => fraction.pad(length, '0', Alignment::Left, true),
        None          => fraction.to_owned(),
    };

    if !fraction.is_empty() {
        w.write_char(info.decimal_separator.as_char())?;
        w.write_str(&fraction)?;
    }

    Ok(())
}


impl IsoFormat for CalendarDate {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        let (year, month, day) = self.anchored_fields();

        match self.precision() {
            CalendarDatePrecision::Century => {
                write_century(w, self.century(), self.is_expanded(), info)
            }
            CalendarDatePrecision::Year => {
                write_year(w, year, self.is_expanded(), info)
            }
            CalendarDatePrecision::Month => {
                // YYYYMM would be mistaken for a century and a year, so the
                // hyphen stays even in the basic form
                write_year(w, year, self.is_expanded(), info)?;
                w.write_char('-')?;
                w.write_str(&zero_padded(month.into(), 2))
            }
            CalendarDatePrecision::Day => {
                write_year(w, year, self.is_expanded(), info)?;
                separator(w, '-', info)?;
                w.write_str(&zero_padded(month.into(), 2))?;
                separator(w, '-', info)?;
                w.write_str(&zero_padded(day.into(), 2))
            }
        }
    }
}

impl IsoFormat for OrdinalDate {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        write_year(w, self.year(), self.is_expanded(), info)?;
        separator(w, '-', info)?;
        w.write_str(&zero_padded(self.day_of_year().into(), 3))
    }
}

impl IsoFormat for WeekDate {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        write_year(w, self.year(), self.is_expanded(), info)?;

        if let Some(week) = self.week() {
            separator(w, '-', info)?;
            w.write_char('W')?;
            w.write_str(&zero_padded(week.into(), 2))?;
        }

        if let (WeekDatePrecision::Day, Some(day)) = (self.precision(), self.day()) {
            separator(w, '-', info)?;
            w.write_str(&day.to_string())?;
        }

        Ok(())
    }
}

impl IsoFormat for UtcOffset {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        if self.is_utc() {
            return w.write_char('Z');
        }

        w.write_char(if self.is_negative() { '-' } else { '+' })?;
        w.write_str(&zero_padded(self.hours().unsigned_abs().into(), 2))?;

        if self.minutes() != 0 {
            separator(w, ':', info)?;
            w.write_str(&zero_padded(self.minutes().unsigned_abs().into(), 2))?;
        }

        Ok(())
    }
}

fn write_time(time: &Time, w: &mut dyn fmt::Write, info: &FormatInfo, designator: bool) -> fmt::Result {
    if designator {
        w.write_char('T')?;
    }

    let minute = time.minute().unwrap_or(0.0);
    let second = time.second().unwrap_or(0.0);

    match time.precision() {
        TimePrecision::Hour => {
            write_decimal(w, time.hour(), 2, info)?;
        }
        TimePrecision::Minute => {
            w.write_str(&zero_padded(time.hour() as u64, 2))?;
            separator(w, ':', info)?;
            write_decimal(w, minute, 2, info)?;
        }
        TimePrecision::Second => {
            w.write_str(&zero_padded(time.hour() as u64, 2))?;
            separator(w, ':', info)?;
            w.write_str(&zero_padded(minute as u64, 2))?;
            separator(w, ':', info)?;
            write_decimal(w, second, 2, info)?;
        }
    }

    match time.utc_offset() {
        Some(offset) if info.use_utc_offset  => offset.write_iso(w, info),
        _                                    => Ok(()),
    }
}

impl IsoFormat for Time {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        write_time(self, w, info, info.use_time_designator)
    }
}

macro_rules! date_time_format {
    ($($t:ty),*) => {
        $(
            impl IsoFormat for $t {
                fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
                    self.date().write_iso(w, info)?;
                    write_time(&self.time(), w, info, true)
                }
            }
        )*
    };
}

date_time_format!(CalendarDateTime, OrdinalDateTime, WeekDateTime);


impl IsoFormat for DesignatedDuration {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        w.write_char('P')?;

        let date_parts = [(self.years(), 'Y'), (self.months(), 'M'), (self.days(), 'D')];
        for (value, designator) in date_parts.iter() {
            if let Some(value) = value {
                write_decimal(w, *value, 0, info)?;
                w.write_char(*designator)?;
            }
        }

        if self.has_time_components() {
            w.write_char('T')?;

            let time_parts = [(self.hours(), 'H'), (self.minutes(), 'M'), (self.seconds(), 'S')];
            for (value, designator) in time_parts.iter() {
                if let Some(value) = value {
                    write_decimal(w, *value, 0, info)?;
                    w.write_char(*designator)?;
                }
            }
        }

        Ok(())
    }
}

impl IsoFormat for CalendarDateDuration {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        w.write_char('P')?;

        let years = self.total_years();
        let months = u64::from(self.months().unwrap_or(0));
        let days = u64::from(self.days().unwrap_or(0));

        match self.precision() {
            CalendarDatePrecision::Century => {
                write_century(w, self.centuries().unwrap_or(years / 100), self.is_expanded(), info)
            }
            CalendarDatePrecision::Year => {
                write_year(w, years, self.is_expanded(), info)
            }
            CalendarDatePrecision::Month => {
                write_year(w, years, self.is_expanded(), info)?;
                w.write_char('-')?;
                w.write_str(&zero_padded(months, 2))
            }
            CalendarDatePrecision::Day => {
                write_year(w, years, self.is_expanded(), info)?;
                separator(w, '-', info)?;
                w.write_str(&zero_padded(months, 2))?;
                separator(w, '-', info)?;
                w.write_str(&zero_padded(days, 2))
            }
        }
    }
}

impl IsoFormat for OrdinalDateDuration {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        w.write_char('P')?;
        write_year(w, self.years(), self.is_expanded(), info)?;
        separator(w, '-', info)?;
        w.write_str(&zero_padded(self.days().into(), 3))
    }
}

/// Writes the part of a duration after the `T`, including the `T`.
fn write_time_duration(duration: &TimeDuration, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
    w.write_char('T')?;

    let minutes = duration.minutes().unwrap_or(0.0);
    let seconds = duration.seconds().unwrap_or(0.0);

    match duration.precision() {
        TimePrecision::Hour => {
            write_decimal(w, duration.hours(), 2, info)
        }
        TimePrecision::Minute => {
            w.write_str(&zero_padded(duration.hours() as u64, 2))?;
            separator(w, ':', info)?;
            write_decimal(w, minutes, 2, info)
        }
        TimePrecision::Second => {
            w.write_str(&zero_padded(duration.hours() as u64, 2))?;
            separator(w, ':', info)?;
            w.write_str(&zero_padded(minutes as u64, 2))?;
            separator(w, ':', info)?;
            write_decimal(w, seconds, 2, info)
        }
    }
}

impl IsoFormat for TimeDuration {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        w.write_char('P')?;
        write_time_duration(self, w, info)
    }
}

impl IsoFormat for CalendarDateTimeDuration {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        self.date().write_iso(w, info)?;
        write_time_duration(&self.time(), w, info)
    }
}

impl IsoFormat for OrdinalDateTimeDuration {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        self.date().write_iso(w, info)?;
        write_time_duration(&self.time(), w, info)
    }
}

impl IsoFormat for Duration {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        match self {
            Duration::CalendarDate(d)      => d.write_iso(w, info),
            Duration::OrdinalDate(d)       => d.write_iso(w, info),
            Duration::CalendarDateTime(d)  => d.write_iso(w, info),
            Duration::OrdinalDateTime(d)   => d.write_iso(w, info),
            Duration::Time(d)              => d.write_iso(w, info),
            Duration::Designated(d)        => d.write_iso(w, info),
        }
    }
}


impl IsoFormat for TimePoint {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        match self {
            TimePoint::CalendarDate(p)      => p.write_iso(w, info),
            TimePoint::OrdinalDate(p)       => p.write_iso(w, info),
            TimePoint::WeekDate(p)          => p.write_iso(w, info),
            TimePoint::Time(p)              => p.write_iso(w, info),
            TimePoint::CalendarDateTime(p)  => p.write_iso(w, info),
            TimePoint::OrdinalDateTime(p)   => p.write_iso(w, info),
            TimePoint::WeekDateTime(p)      => p.write_iso(w, info),
        }
    }
}

impl IsoFormat for TimeInterval {
    fn write_iso(&self, w: &mut dyn fmt::Write, info: &FormatInfo) -> fmt::Result {
        match self {
            TimeInterval::StartEnd { start, end } => {
                start.write_iso(w, info)?;
                w.write_char('/')?;
                end.write_iso(w, info)
            }
            TimeInterval::StartDuration { start, duration } => {
                start.write_iso(w, info)?;
                w.write_char('/')?;
                duration.write_iso(w, info)
            }
            TimeInterval::DurationEnd { duration, end } => {
                duration.write_iso(w, info)?;
                w.write_char('/')?;
                end.write_iso(w, info)
            }
        }
    }
}


macro_rules! default_display {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.write_iso(f, &FormatInfo::default())
                }
            }
        )*
    };
}

default_display!(CalendarDate, OrdinalDate, WeekDate, UtcOffset, Time);
default_display!(CalendarDateTime, OrdinalDateTime, WeekDateTime, TimePoint);
default_display!(DesignatedDuration, CalendarDateDuration, OrdinalDateDuration, TimeDuration);
default_display!(CalendarDateTimeDuration, OrdinalDateTimeDuration, Duration, TimeInterval);
