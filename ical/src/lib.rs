// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed iCalendar values and components over write-through parameter
//! storage.
//!
//! The crate is built around three layers:
//!
//! - a [`Parameters`] store per value object: ordered, case-insensitive,
//!   possibly multi-valued raw text attributes;
//! - typed value objects ([`Attendee`], [`Organizer`], [`FreeBusyEntry`],
//!   [`Event`]) whose accessors decode from the store lazily on first read
//!   and write mutations back through immediately, so the raw representation
//!   and the typed view never drift apart and untouched data survives a
//!   round trip;
//! - [`serializer`]s translating objects to and from calendar TEXT,
//!   resolving wire-format rules (FBTYPE token mapping, DTEND/DURATION
//!   exclusivity) at the boundary instead of inside the objects.
//!
//! Everything is synchronous and single-threaded; share instances across
//! threads only behind external synchronization.
//!
//! # Example
//!
//! ```
//! use kalends_ical::{Attendee, ParticipationStatus};
//!
//! let mut attendee = Attendee::try_from("mailto:jsmith@example.com")?;
//! attendee.set_common_name(Some("John Smith"));
//! attendee.set_participation_status(ParticipationStatus::Accepted);
//! attendee.set_rsvp(true);
//!
//! assert_eq!(attendee.params().get("PARTSTAT"), Some("ACCEPTED"));
//! assert_eq!(attendee.params().get("RSVP"), Some("TRUE"));
//! # Ok::<(), kalends_ical::UriError>(())
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else, clippy::match_bool)]

mod attendee;
mod cached;
mod component;
mod event;
mod free_busy;
pub mod grammar;
pub mod keyword;
mod organizer;
mod params;
pub mod serializer;
mod token;
mod uri;
pub mod value;

pub use crate::attendee::Attendee;
pub use crate::component::{Component, Property};
pub use crate::event::Event;
pub use crate::free_busy::FreeBusyEntry;
pub use crate::grammar::{ContentLine, GrammarError};
pub use crate::organizer::Organizer;
pub use crate::params::Parameters;
pub use crate::serializer::{
    ComponentSerializer, EventSerializer, FreeBusyEntrySerializer, PeriodSerializer, Serializer,
};
pub use crate::token::{
    CalendarUserType, FreeBusyStatus, ParticipationRole, ParticipationStatus,
};
pub use crate::uri::{Uri, UriError};
pub use crate::value::{DateTimeValue, DurationKind, DurationValue, Period, PeriodEnd};
