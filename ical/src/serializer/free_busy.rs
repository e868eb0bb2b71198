// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Specialized serializer mapping [`FreeBusyEntry`] status to the FBTYPE
//! parameter.
//!
//! Decorates [`PeriodSerializer`]: the inner serializer handles the period
//! value text, this layer handles the full `FREEBUSY` content line and the
//! status/parameter translation. `Busy` is the absence state: encoding it
//! removes any FBTYPE parameter, and a missing FBTYPE decodes as `Busy`.

use std::any::{Any, TypeId};

use crate::free_busy::FreeBusyEntry;
use crate::grammar;
use crate::keyword::{
    KW_FBTYPE, KW_FBTYPE_BUSY, KW_FBTYPE_BUSY_TENTATIVE, KW_FBTYPE_BUSY_UNAVAILABLE,
    KW_FBTYPE_FREE, KW_FREEBUSY,
};
use crate::serializer::{PeriodSerializer, Serializer};
use crate::token::FreeBusyStatus;
use crate::value::Period;

/// Serializes `FREEBUSY` content lines with their FBTYPE classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeBusyEntrySerializer {
    inner: PeriodSerializer,
}

impl FreeBusyEntrySerializer {
    /// Create a free/busy entry serializer over a period serializer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: PeriodSerializer::new(),
        }
    }
}

impl Serializer for FreeBusyEntrySerializer {
    fn target_type(&self) -> TypeId {
        TypeId::of::<FreeBusyEntry>()
    }

    fn serialize_to_string(&self, obj: &dyn Any) -> Option<String> {
        let Some(entry) = obj.downcast_ref::<FreeBusyEntry>() else {
            // Not our target: fall through to the inner serializer.
            return self.inner.serialize_to_string(obj);
        };

        // Encode on a staging copy so the caller's entry is never mutated.
        let mut staged = entry.deep_copy();
        let status = staged.status().clone();
        match status {
            FreeBusyStatus::Busy => staged.params_mut().remove(KW_FBTYPE),
            FreeBusyStatus::Free => staged.params_mut().set(KW_FBTYPE, KW_FBTYPE_FREE),
            FreeBusyStatus::BusyTentative => {
                staged.params_mut().set(KW_FBTYPE, KW_FBTYPE_BUSY_TENTATIVE);
            }
            FreeBusyStatus::BusyUnavailable => {
                staged
                    .params_mut()
                    .set(KW_FBTYPE, KW_FBTYPE_BUSY_UNAVAILABLE);
            }
            FreeBusyStatus::Other(raw) => staged.params_mut().set(KW_FBTYPE, raw),
        }

        let value = self.inner.serialize_to_string(staged.period())?;
        Some(grammar::render_line(KW_FREEBUSY, staged.params(), &value))
    }

    fn deserialize(&self, text: &str) -> Option<Box<dyn Any>> {
        let line = match grammar::parse_line(text.trim_end()) {
            Ok(line) => line,
            Err(error) => {
                tracing::debug!(%error, "FREEBUSY line failed to parse");
                return None;
            }
        };

        let period = *self.inner.deserialize(&line.value)?.downcast::<Period>().ok()?;

        let token = line.params.get(KW_FBTYPE).map(str::to_ascii_uppercase);
        let mut entry = FreeBusyEntry::with_params(period, line.params);
        if let Some(token) = token {
            match token.as_str() {
                KW_FBTYPE_FREE => entry.set_status(FreeBusyStatus::Free),
                KW_FBTYPE_BUSY => entry.set_status(FreeBusyStatus::Busy),
                KW_FBTYPE_BUSY_UNAVAILABLE => {
                    entry.set_status(FreeBusyStatus::BusyUnavailable);
                }
                KW_FBTYPE_BUSY_TENTATIVE => entry.set_status(FreeBusyStatus::BusyTentative),
                // Unrecognized token: status stays at its default.
                _ => tracing::debug!(%token, "unrecognized FBTYPE token ignored"),
            }
        }

        Some(Box::new(entry))
    }
}
