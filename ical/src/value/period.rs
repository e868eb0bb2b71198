// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Period value type parser as defined in RFC 5545 Section 3.3.9.

use std::fmt;

use chumsky::extra::{self, ParserExtra};
use chumsky::input::{Input, Stream};
use chumsky::label::LabelError;
use chumsky::prelude::*;

use crate::value::ValueExpected;
use crate::value::datetime::{DateTimeValue, value_date_time};
use crate::value::duration::{DurationValue, value_duration};

/// Period of time value defined in RFC 5545 Section 3.3.9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    /// Start of the period.
    pub start: DateTimeValue,

    /// How the period ends.
    pub end: PeriodEnd,
}

/// The end of a [`Period`]: an explicit instant or a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodEnd {
    /// Explicit end date-time (`date-time "/" date-time`).
    Until(DateTimeValue),

    /// Positive duration from the start (`date-time "/" dur-value`).
    Lasting(DurationValue),
}

impl Period {
    /// A period with an explicit end instant.
    #[must_use]
    pub const fn explicit(start: DateTimeValue, end: DateTimeValue) -> Self {
        Self {
            start,
            end: PeriodEnd::Until(end),
        }
    }

    /// A period lasting a duration from its start.
    #[must_use]
    pub const fn lasting(start: DateTimeValue, duration: DurationValue) -> Self {
        Self {
            start,
            end: PeriodEnd::Lasting(duration),
        }
    }

    /// Parse from the `period` form.
    ///
    /// Returns `None` when `src` is not exactly one period value.
    #[must_use]
    pub fn parse(src: &str) -> Option<Self> {
        let stream = Stream::from_iter(src.chars());
        let parsed: Result<Self, Vec<Rich<'_, char>>> = value_period::<'_, _, extra::Err<_>>()
            .then_ignore(end())
            .parse(stream)
            .into_result();
        parsed.ok()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.end {
            PeriodEnd::Until(end) => write!(f, "{}/{}", self.start, end),
            PeriodEnd::Lasting(duration) => write!(f, "{}/{}", self.start, duration),
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// period     = period-explicit / period-start
///
/// period-explicit = date-time "/" date-time
/// ; [ISO.8601.2004] complete representation basic format for a
/// ; period of time consisting of a start and end.  The start MUST
/// ; be before the end.
///
/// period-start = date-time "/" dur-value
/// ; [ISO.8601.2004] complete representation basic format for a
/// ; period of time consisting of a start and positive duration
/// ; of time.
/// ```
pub fn value_period<'src, I, E>() -> impl Parser<'src, I, Period, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    // period-explicit: both date-times must agree on UTC vs floating
    let until = value_date_time().map(PeriodEnd::Until);
    let lasting = value_duration().map(PeriodEnd::Lasting);

    value_date_time()
        .then_ignore(just('/'))
        .then(choice((until, lasting)))
        .try_map(|(start, end), span| match end {
            PeriodEnd::Until(until) if start.utc != until.utc => Err(E::Error::expected_found(
                [ValueExpected::MismatchedTimezone],
                None,
                span,
            )),
            end => Ok(Period { start, end }),
        })
}
