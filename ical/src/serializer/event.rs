// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Specialized serializer resolving the DTEND/DURATION conflict for events.
//!
//! The wire format forbids an event carrying both an end instant and a
//! duration, while a decoded [`Event`] may legitimately hold both (e.g. right
//! after a copy, before trimming). Exclusivity is therefore enforced exactly
//! once, here at the serialization boundary: the event is copied, the copy
//! loses its `DURATION`, and the caller's object is never mutated.

use std::any::{Any, TypeId};

use crate::component::Component;
use crate::event::Event;
use crate::keyword::{KW_DTEND, KW_DURATION};
use crate::serializer::{ComponentSerializer, Serializer};

/// Serializes `VEVENT` components, keeping DTEND over DURATION on the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventSerializer {
    inner: ComponentSerializer,
}

impl EventSerializer {
    /// Create an event serializer over a base component serializer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: ComponentSerializer::new(),
        }
    }
}

impl Serializer for EventSerializer {
    fn target_type(&self) -> TypeId {
        TypeId::of::<Event>()
    }

    fn serialize_to_string(&self, obj: &dyn Any) -> Option<String> {
        let event = obj.downcast_ref::<Event>()?;

        if event.component().contains_property(KW_DURATION)
            && event.component().contains_property(KW_DTEND)
        {
            let mut trimmed = event.deep_copy();
            trimmed.component_mut().remove_property(KW_DURATION);
            self.inner.serialize_to_string(trimmed.component())
        } else {
            self.inner.serialize_to_string(event.component())
        }
    }

    fn deserialize(&self, text: &str) -> Option<Box<dyn Any>> {
        let component = self.inner.deserialize(text)?.downcast::<Component>().ok()?;
        let event = Event::from_component(*component)?;
        Some(Box::new(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{DateTimeValue, DurationValue};

    fn conflicted_event() -> Event {
        let mut event = Event::new();
        event.set_uid("12345@example.com");
        event.set_dt_start(DateTimeValue::parse("20250110T140000Z").unwrap());
        event.set_dt_end(DateTimeValue::parse("20250110T150000Z").unwrap());
        event.set_duration(DurationValue::time(0, 2, 0, 0));
        event
    }

    #[test]
    fn conflicting_event_keeps_dtend_on_the_wire() {
        let serializer = EventSerializer::new();
        let event = conflicted_event();

        let text = serializer.serialize_to_string(&event).unwrap();
        assert!(text.contains("DTEND:20250110T150000Z\r\n"));
        assert!(!text.contains("DURATION"));
    }

    #[test]
    fn the_original_event_is_not_mutated() {
        let serializer = EventSerializer::new();
        let event = conflicted_event();

        serializer.serialize_to_string(&event).unwrap();
        assert!(event.component().contains_property(KW_DTEND));
        assert!(event.component().contains_property(KW_DURATION));
    }

    #[test]
    fn unconflicted_events_pass_through_unchanged() {
        let serializer = EventSerializer::new();

        let mut event = Event::new();
        event.set_uid("12345@example.com");
        event.set_duration(DurationValue::time(0, 2, 0, 0));

        let text = serializer.serialize_to_string(&event).unwrap();
        assert!(text.contains("DURATION:PT2H\r\n"));
    }

    #[test]
    fn non_event_objects_yield_absence() {
        let serializer = EventSerializer::new();
        assert!(serializer.serialize_to_string(&42_u32).is_none());
    }

    #[test]
    fn deserialize_requires_a_vevent() {
        let serializer = EventSerializer::new();

        let src = "BEGIN:VEVENT\r\nUID:a@example.com\r\nEND:VEVENT\r\n";
        let boxed = serializer.deserialize(src).unwrap();
        let event = boxed.downcast_ref::<Event>().unwrap();
        assert_eq!(event.uid(), Some("a@example.com"));

        let src = "BEGIN:VTODO\r\nUID:a@example.com\r\nEND:VTODO\r\n";
        assert!(serializer.deserialize(src).is_none());
    }
}
