// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Encode/decode between object state and calendar TEXT.
//!
//! [`Serializer`] is the generic contract: a serializer claims one target
//! type, renders it to TEXT and rebuilds it from TEXT, delegating the actual
//! line grammar to the [`grammar`](crate::grammar) collaborator. Specialized
//! serializers are decorators that hold a base serializer and adjust object
//! state before or after the delegated call; none of them reimplements the
//! base contract.
//!
//! Failure never escalates here: a wrong input type or unparsable TEXT yields
//! absence (or a fallback delegation), exactly once, with no retries.

mod event;
mod free_busy;
mod period;

use std::any::{Any, TypeId};

use crate::component::Component;
use crate::grammar;

pub use event::EventSerializer;
pub use free_busy::FreeBusyEntrySerializer;
pub use period::PeriodSerializer;

/// Generic encode/decode contract between one object type and TEXT.
pub trait Serializer {
    /// The concrete type this serializer claims.
    fn target_type(&self) -> TypeId;

    /// Render `obj` as TEXT; `None` when `obj` is not the target type
    /// (decorators may instead fall back to their inner serializer).
    fn serialize_to_string(&self, obj: &dyn Any) -> Option<String>;

    /// Parse TEXT into a new object; `None` on structural failure from the
    /// grammar collaborator or when the result is not the target type.
    fn deserialize(&self, text: &str) -> Option<Box<dyn Any>>;
}

/// Base serializer for raw [`Component`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentSerializer;

impl ComponentSerializer {
    /// Create a base component serializer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Serializer for ComponentSerializer {
    fn target_type(&self) -> TypeId {
        TypeId::of::<Component>()
    }

    fn serialize_to_string(&self, obj: &dyn Any) -> Option<String> {
        let component = obj.downcast_ref::<Component>()?;
        Some(grammar::render_component(component))
    }

    fn deserialize(&self, text: &str) -> Option<Box<dyn Any>> {
        match grammar::parse_component(text) {
            Ok(component) => Some(Box::new(component)),
            Err(error) => {
                tracing::debug!(%error, "component text failed to parse");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_serializer_round_trips_components() {
        let src = "BEGIN:VEVENT\r\nUID:a@example.com\r\nEND:VEVENT\r\n";
        let serializer = ComponentSerializer::new();

        let boxed = serializer.deserialize(src).unwrap();
        let component = boxed.downcast_ref::<Component>().unwrap();
        assert_eq!(component.name(), "VEVENT");

        assert_eq!(serializer.serialize_to_string(component), Some(src.to_owned()));
    }

    #[test]
    fn wrong_input_type_yields_absence() {
        let serializer = ComponentSerializer::new();
        assert!(serializer.serialize_to_string(&42_u32).is_none());
    }

    #[test]
    fn collaborator_failure_propagates_as_absence() {
        let serializer = ComponentSerializer::new();
        assert!(serializer.deserialize("SUMMARY only, no component\r\n").is_none());
        assert!(serializer.deserialize("").is_none());
    }
}
