// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Wire value types as defined in RFC 5545 Section 3.3.
//!
//! Each type carries a chumsky parser for its grammar and a `Display`
//! implementation rendering the canonical text form, so values round-trip
//! through the same module that defines them.

mod datetime;
mod duration;
mod period;

use std::borrow::Cow;

use chumsky::error::RichPattern;

pub use datetime::{DateTimeValue, value_date_time};
pub use duration::{DurationKind, DurationValue, value_duration};
pub use period::{Period, PeriodEnd, value_period};

/// Failure reasons when a specific value type was expected but not found.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueExpected {
    /// A calendar date was expected
    Date,
    /// A time of day was expected
    Time,
    /// A 32-bit unsigned integer value was expected
    U32,
    /// Period date-times must have consistent timezone (both UTC or both floating)
    MismatchedTimezone,
}

impl From<ValueExpected> for RichPattern<'_, char> {
    fn from(expected: ValueExpected) -> Self {
        match expected {
            ValueExpected::Date => Self::Label(Cow::Borrowed("invalid date")),
            ValueExpected::Time => Self::Label(Cow::Borrowed("invalid time of day")),
            ValueExpected::U32 => Self::Label(Cow::Borrowed("u32 out of range")),
            ValueExpected::MismatchedTimezone => Self::Label(Cow::Borrowed(
                "period date-times must have consistent timezone",
            )),
        }
    }
}
