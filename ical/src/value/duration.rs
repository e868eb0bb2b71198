// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Duration value type parser as defined in RFC 5545 Section 3.3.6.

use std::fmt;

use chumsky::extra::{self, ParserExtra};
use chumsky::input::{Input, Stream};
use chumsky::label::LabelError;
use chumsky::prelude::*;

use crate::value::ValueExpected;

/// Duration value defined in RFC 5545 Section 3.3.6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationValue {
    /// Whether the duration is positive.
    pub positive: bool,

    /// The magnitude of the duration.
    pub kind: DurationKind,
}

/// The two magnitude forms a duration can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationKind {
    /// Whole weeks (`P2W`).
    Weeks(u32),

    /// Days plus a time of day (`P15DT5H0M20S`).
    Time {
        /// Day component
        days: u32,
        /// Hour component
        hours: u32,
        /// Minute component
        minutes: u32,
        /// Second component
        seconds: u32,
    },
}

impl DurationValue {
    /// A positive duration of whole weeks.
    #[must_use]
    pub const fn weeks(weeks: u32) -> Self {
        Self {
            positive: true,
            kind: DurationKind::Weeks(weeks),
        }
    }

    /// A positive day/time duration.
    #[must_use]
    pub const fn time(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            positive: true,
            kind: DurationKind::Time {
                days,
                hours,
                minutes,
                seconds,
            },
        }
    }

    /// Parse from the `dur-value` form.
    ///
    /// Returns `None` when `src` is not exactly one duration value.
    #[must_use]
    pub fn parse(src: &str) -> Option<Self> {
        let stream = Stream::from_iter(src.chars());
        let parsed: Result<Self, Vec<Rich<'_, char>>> = value_duration::<'_, _, extra::Err<_>>()
            .then_ignore(end())
            .parse(stream)
            .into_result();
        parsed.ok()
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.positive {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        match self.kind {
            DurationKind::Weeks(weeks) => write!(f, "{weeks}W"),
            DurationKind::Time {
                days,
                hours,
                minutes,
                seconds,
            } => {
                if days > 0 {
                    write!(f, "{days}D")?;
                }
                if hours > 0 || minutes > 0 || seconds > 0 {
                    write!(f, "T")?;
                    if hours > 0 {
                        write!(f, "{hours}H")?;
                    }
                    if minutes > 0 {
                        write!(f, "{minutes}M")?;
                    }
                    if seconds > 0 {
                        write!(f, "{seconds}S")?;
                    }
                } else if days == 0 {
                    // Zero duration still needs a designator.
                    write!(f, "T0S")?;
                }
                Ok(())
            }
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// dur-value  = (["+"] / "-") "P" (dur-date / dur-time / dur-week)
///
/// dur-date   = dur-day [dur-time]
/// dur-time   = "T" (dur-hour / dur-minute / dur-second)
/// dur-week   = 1*DIGIT "W"
/// dur-hour   = 1*DIGIT "H" [dur-minute]
/// dur-minute = 1*DIGIT "M" [dur-second]
/// dur-second = 1*DIGIT "S"
/// dur-day    = 1*DIGIT "D"
/// ```
pub fn value_duration<'src, I, E>() -> impl Parser<'src, I, DurationValue, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    // case-sensitive designators
    let int = select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(10) // u32 max is 10 digits: 4_294_967_295
        .collect::<String>()
        .try_map(|digits: String, span| {
            lexical::parse::<u32, _>(digits.as_str())
                .map_err(|_| E::Error::expected_found([ValueExpected::U32], None, span))
        });

    let week = int.then_ignore(just('W')).map(DurationKind::Weeks);

    let second_val = int.then_ignore(just('S'));
    let minute_val = int.then_ignore(just('M'));
    let hour_val = int.then_ignore(just('H'));

    // dur-second = 1*DIGIT "S"
    let second_only = second_val.map(|s| (0, 0, s));

    // dur-minute = 1*DIGIT "M" [dur-second]
    let minute_chain = minute_val
        .then(second_val.or_not())
        .map(|(m, s)| (0, m, s.unwrap_or(0)));

    // dur-hour = 1*DIGIT "H" [dur-minute]
    let hour_chain = hour_val
        .then(minute_val.then(second_val.or_not()).or_not())
        .map(|(h, tail)| match tail {
            Some((m, s)) => (h, m, s.unwrap_or(0)),
            None => (h, 0, 0),
        });

    // dur-time = "T" (dur-hour / dur-minute / dur-second)
    let time = just('T').ignore_then(choice((hour_chain, minute_chain, second_only)));

    // dur-date = dur-day [dur-time]
    let date = int
        .then_ignore(just('D'))
        .then(time.or_not())
        .map(|(days, tail)| {
            let (hours, minutes, seconds) = tail.unwrap_or((0, 0, 0));
            DurationKind::Time {
                days,
                hours,
                minutes,
                seconds,
            }
        });

    let time_only = time.map(|(hours, minutes, seconds)| DurationKind::Time {
        days: 0,
        hours,
        minutes,
        seconds,
    });

    let sign = select! { c @ ('+' | '-') => c }
        .or_not()
        .map(|sign| !matches!(sign, Some('-')));

    sign.then_ignore(just('P'))
        .then(choice((date, time_only, week)))
        .map(|(positive, kind)| DurationValue { positive, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_duration() {
        #[rustfmt::skip]
        let success_cases = [
            // examples from RFC 5545 Section 3.3.6
            ("P15DT5H0M20S", DurationValue { positive: true,  kind: DurationKind::Time { days: 15, hours: 5, minutes: 0, seconds: 20 } }),
            ("P2W",          DurationValue::weeks(2)),
            // extra tests
            ("+P3W",         DurationValue::weeks(3)),
            ("-P1W",         DurationValue { positive: false, kind: DurationKind::Weeks(1) }),
            ("P7D",          DurationValue::time(7, 0, 0, 0)),
            ("PT1H30M",      DurationValue::time(0, 1, 30, 0)),
            ("PT15M",        DurationValue::time(0, 0, 15, 0)),
            ("PT30S",        DurationValue::time(0, 0, 0, 30)),
            ("-PT10H11M12S", DurationValue { positive: false, kind: DurationKind::Time { days: 0, hours: 10, minutes: 11, seconds: 12 } }),
        ];
        for (src, expected) in success_cases {
            assert_eq!(DurationValue::parse(src).unwrap(), expected, "Failed to parse: {src}");
        }

        let fail_cases = [
            "P",         // missing duration value
            "PT",        // missing time value
            "P3X",       // invalid designator
            "P-3W",      // invalid negative sign position
            "P3DT4H5M6", // missing 'S' designator
            "3W",        // missing 'P' designator
            "PT1H30",    // missing 'M' designator
            "P2W3D",     // weeks cannot combine with days
            "",          // empty string
        ];
        for src in fail_cases {
            assert!(DurationValue::parse(src).is_none(), "Parse {src} should fail");
        }
    }

    #[test]
    fn renders_canonical_form() {
        let cases = [
            "P15DT5H20S", // zero minutes are elided
            "P2W",
            "-P1W",
            "P7D",
            "PT1H30M",
            "PT0S",
            "-PT15M",
        ];
        for src in cases {
            let value = DurationValue::parse(src).unwrap();
            assert_eq!(value.to_string(), src, "Failed for {src}");
        }
    }
}
