// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Event component (RFC 5545 Section 3.6.1) with typed property accessors.
//!
//! [`Event`] wraps a `VEVENT` [`Component`]. Typed accessors decode property
//! values per read (a malformed value reads as `None`) and write through to
//! the property list immediately. The component may hold both a `DTEND` and a
//! `DURATION` at the same time; the serializer resolves that conflict at
//! encode time.

use crate::attendee::Attendee;
use crate::component::Component;
use crate::keyword::{
    KW_ATTENDEE, KW_DTEND, KW_DTSTART, KW_DURATION, KW_ORGANIZER, KW_SUMMARY, KW_UID, KW_VEVENT,
};
use crate::organizer::Organizer;
use crate::value::{DateTimeValue, DurationValue};

/// A scheduled calendar event.
#[derive(Debug, Clone)]
pub struct Event {
    component: Component,
}

impl Event {
    /// Create an empty event.
    #[must_use]
    pub fn new() -> Self {
        Self {
            component: Component::new(KW_VEVENT),
        }
    }

    /// Wrap a parsed component; `None` unless it is a `VEVENT`.
    #[must_use]
    pub fn from_component(component: Component) -> Option<Self> {
        component
            .name()
            .eq_ignore_ascii_case(KW_VEVENT)
            .then_some(Self { component })
    }

    /// The underlying component.
    #[must_use]
    pub fn component(&self) -> &Component {
        &self.component
    }

    /// Mutable access to the underlying component.
    pub fn component_mut(&mut self) -> &mut Component {
        &mut self.component
    }

    /// Unwrap into the underlying component.
    #[must_use]
    pub fn into_component(self) -> Component {
        self.component
    }

    /// UID property value.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.component.property(KW_UID).map(|p| p.value())
    }

    /// Set the UID property.
    pub fn set_uid(&mut self, uid: &str) {
        self.component.set_property(KW_UID, uid);
    }

    /// SUMMARY property value.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.component.property(KW_SUMMARY).map(|p| p.value())
    }

    /// Set the SUMMARY property.
    pub fn set_summary(&mut self, summary: &str) {
        self.component.set_property(KW_SUMMARY, summary);
    }

    /// DTSTART as a typed value; `None` when absent or malformed.
    #[must_use]
    pub fn dt_start(&self) -> Option<DateTimeValue> {
        self.date_time_property(KW_DTSTART)
    }

    /// Set the DTSTART property.
    pub fn set_dt_start(&mut self, start: DateTimeValue) {
        self.component.set_property(KW_DTSTART, start.to_string());
    }

    /// DTEND as a typed value; `None` when absent or malformed.
    #[must_use]
    pub fn dt_end(&self) -> Option<DateTimeValue> {
        self.date_time_property(KW_DTEND)
    }

    /// Set the DTEND property.
    ///
    /// Does not remove an existing DURATION; the serializer enforces the
    /// wire-format exclusivity of the two.
    pub fn set_dt_end(&mut self, end: DateTimeValue) {
        self.component.set_property(KW_DTEND, end.to_string());
    }

    /// DURATION as a typed value; `None` when absent or malformed.
    #[must_use]
    pub fn duration(&self) -> Option<DurationValue> {
        let property = self.component.property(KW_DURATION)?;
        let parsed = DurationValue::parse(property.value());
        if parsed.is_none() {
            tracing::debug!(value = property.value(), "malformed DURATION ignored");
        }
        parsed
    }

    /// Set the DURATION property.
    ///
    /// Does not remove an existing DTEND; the serializer enforces the
    /// wire-format exclusivity of the two.
    pub fn set_duration(&mut self, duration: DurationValue) {
        self.component
            .set_property(KW_DURATION, duration.to_string());
    }

    /// All attendees, decoded from the `ATTENDEE` properties.
    #[must_use]
    pub fn attendees(&self) -> Vec<Attendee> {
        self.component
            .properties_named(KW_ATTENDEE)
            .map(Attendee::from_property)
            .collect()
    }

    /// Append an attendee as a new `ATTENDEE` property.
    pub fn add_attendee(&mut self, attendee: &Attendee) {
        self.component.push_property(attendee.to_property());
    }

    /// The organizer, decoded from the `ORGANIZER` property.
    #[must_use]
    pub fn organizer(&self) -> Option<Organizer> {
        self.component
            .property(KW_ORGANIZER)
            .map(Organizer::from_property)
    }

    /// Set the organizer, replacing any existing `ORGANIZER` property.
    pub fn set_organizer(&mut self, organizer: &Organizer) {
        self.component.remove_property(KW_ORGANIZER);
        self.component.push_property(organizer.to_property());
    }

    /// Deep copy: the result shares no mutable state with `self`.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Self {
            component: self.component.clone(),
        }
    }

    fn date_time_property(&self, name: &str) -> Option<DateTimeValue> {
        let property = self.component.property(name)?;
        let parsed = DateTimeValue::parse(property.value());
        if parsed.is_none() {
            tracing::debug!(
                property = name,
                value = property.value(),
                "malformed date-time ignored"
            );
        }
        parsed
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}
