// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Date-Time value type parser as defined in RFC 5545 Section 3.3.5.

use std::fmt;

use chumsky::extra::{self, ParserExtra};
use chumsky::input::{Input, Stream};
use chumsky::label::LabelError;
use chumsky::prelude::*;
use jiff::civil;

use crate::value::ValueExpected;

/// Date-Time value defined in RFC 5545 Section 3.3.5.
///
/// The date component is a validated [`jiff::civil::Date`]; the time of day
/// is kept as raw fields so that a leap second (`60`) survives a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeValue {
    /// Calendar date component.
    pub date: civil::Date,

    /// Hour component, 0-23.
    pub hour: u8,

    /// Minute component, 0-59.
    pub minute: u8,

    /// Second component, 0-60 (60 for leap second).
    pub second: u8,

    /// Whether the time is in UTC (indicated by a trailing 'Z').
    pub utc: bool,
}

impl DateTimeValue {
    /// Civil date-time, with a leap second contracted to 59.
    #[expect(clippy::cast_possible_wrap)]
    #[must_use]
    pub fn civil(&self) -> civil::DateTime {
        self.date.at(
            self.hour as i8,
            self.minute as i8,
            self.second.min(59) as i8,
            0,
        )
    }

    /// Parse from the canonical `YYYYMMDDTHHMMSS[Z]` form.
    ///
    /// Returns `None` when `src` is not exactly one date-time value.
    #[must_use]
    pub fn parse(src: &str) -> Option<Self> {
        let stream = Stream::from_iter(src.chars());
        let parsed: Result<Self, Vec<Rich<'_, char>>> = value_date_time::<'_, _, extra::Err<_>>()
            .then_ignore(end())
            .parse(stream)
            .into_result();
        parsed.ok()
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}T{:02}{:02}{:02}",
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.hour,
            self.minute,
            self.second
        )?;
        if self.utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date-time  = date "T" time ;As specified in the DATE and TIME
///
/// date-value = date-fullyear date-month date-mday
/// time       = time-hour time-minute time-second [time-utc]
/// ```
pub fn value_date_time<'src, I, E>() -> impl Parser<'src, I, DateTimeValue, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let date = fixed_digits(4)
        .then(fixed_digits(2))
        .then(fixed_digits(2))
        .try_map(|((year, month), day), span| {
            let err = || E::Error::expected_found([ValueExpected::Date], None, span);
            let year = i16::try_from(year).map_err(|_| err())?;
            let month = i8::try_from(month).map_err(|_| err())?;
            let day = i8::try_from(day).map_err(|_| err())?;
            civil::Date::new(year, month, day).map_err(|_| err())
        });

    let time = fixed_digits(2)
        .then(fixed_digits(2))
        .then(fixed_digits(2))
        .try_map(|((hour, minute), second), span| {
            if hour > 23 || minute > 59 || second > 60 {
                return Err(E::Error::expected_found([ValueExpected::Time], None, span));
            }
            let err = || E::Error::expected_found([ValueExpected::Time], None, span);
            let hour = u8::try_from(hour).map_err(|_| err())?;
            let minute = u8::try_from(minute).map_err(|_| err())?;
            let second = u8::try_from(second).map_err(|_| err())?;
            Ok((hour, minute, second))
        });

    date.then_ignore(just('T'))
        .then(time)
        .then(just('Z').or_not())
        .map(|((date, (hour, minute, second)), utc)| DateTimeValue {
            date,
            hour,
            minute,
            second,
            utc: utc.is_some(),
        })
}

/// Parse exactly `n` decimal digits into a `u32` with `lexical`.
fn fixed_digits<'src, I, E>(n: usize) -> impl Parser<'src, I, u32, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    select! { c @ '0'..='9' => c }
        .repeated()
        .exactly(n)
        .collect::<String>()
        .try_map(|digits: String, span| {
            lexical::parse::<u32, _>(digits.as_str())
                .map_err(|_| E::Error::expected_found([ValueExpected::U32], None, span))
        })
}
