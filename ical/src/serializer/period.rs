// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Value serializer for [`Period`].

use std::any::{Any, TypeId};

use crate::serializer::Serializer;
use crate::value::Period;

/// Serializes a bare period value (`start/end` or `start/duration`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodSerializer;

impl PeriodSerializer {
    /// Create a period serializer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Serializer for PeriodSerializer {
    fn target_type(&self) -> TypeId {
        TypeId::of::<Period>()
    }

    fn serialize_to_string(&self, obj: &dyn Any) -> Option<String> {
        let period = obj.downcast_ref::<Period>()?;
        Some(period.to_string())
    }

    fn deserialize(&self, text: &str) -> Option<Box<dyn Any>> {
        let period = Period::parse(text.trim())?;
        Some(Box::new(period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_period_text() {
        let serializer = PeriodSerializer::new();
        let src = "20230101T090000Z/20230101T100000Z";

        let boxed = serializer.deserialize(src).unwrap();
        let period = boxed.downcast_ref::<Period>().unwrap();
        assert_eq!(serializer.serialize_to_string(period), Some(src.to_owned()));
    }

    #[test]
    fn malformed_text_yields_absence() {
        let serializer = PeriodSerializer::new();
        assert!(serializer.deserialize("not a period").is_none());
        assert!(serializer.serialize_to_string(&"not a period").is_none());
    }
}
