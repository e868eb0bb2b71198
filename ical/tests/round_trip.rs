// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Round-trip tests over representative wire fragments.
//!
//! These exercise the public API end to end: TEXT through the grammar into
//! typed objects, typed mutations back into raw parameters, and TEXT out
//! again.

use kalends_ical::{
    Attendee, Event, EventSerializer, FreeBusyEntry, FreeBusyEntrySerializer, FreeBusyStatus,
    ParticipationRole, ParticipationStatus, Property, Serializer, grammar,
};

#[test]
fn attendee_line_round_trips_with_all_fields() {
    let src = "ATTENDEE;CN=John Smith;ROLE=REQ-PARTICIPANT;RSVP=TRUE:mailto:jsmith@example.com";

    let line = grammar::parse_line(src).unwrap();
    let attendee = Attendee::from_property(&Property::new(line.name, line.params, line.value));

    assert_eq!(
        attendee.address().unwrap().as_str(),
        "mailto:jsmith@example.com"
    );
    assert_eq!(attendee.common_name(), Some("John Smith"));
    assert_eq!(attendee.role(), &ParticipationRole::ReqParticipant);
    assert!(attendee.rsvp());

    let property = attendee.to_property();
    let rendered = grammar::render_line(property.name(), property.params(), property.value());
    assert_eq!(rendered, format!("{src}\r\n"));
}

#[test]
fn attendee_line_round_trips_without_optional_parameters() {
    let src = "ATTENDEE:mailto:anon@example.com";

    let line = grammar::parse_line(src).unwrap();
    let attendee = Attendee::from_property(&Property::new(line.name, line.params, line.value));

    // Optional fields read as their documented defaults...
    assert_eq!(attendee.common_name(), None);
    assert_eq!(attendee.role(), &ParticipationRole::ReqParticipant);
    assert_eq!(
        attendee.participation_status(),
        &ParticipationStatus::NeedsAction
    );
    assert!(!attendee.rsvp());
    assert!(attendee.members().is_empty());

    // ...and reading them must not invent parameters on the way out.
    let property = attendee.to_property();
    let rendered = grammar::render_line(property.name(), property.params(), property.value());
    assert_eq!(rendered, format!("{src}\r\n"));
}

#[test]
fn free_busy_round_trips_all_four_states() {
    let serializer = FreeBusyEntrySerializer::new();
    let cases = [
        ("FREEBUSY:20230101T090000Z/20230101T100000Z", FreeBusyStatus::Busy),
        (
            "FREEBUSY;FBTYPE=FREE:20230101T090000Z/20230101T100000Z",
            FreeBusyStatus::Free,
        ),
        (
            "FREEBUSY;FBTYPE=BUSY-TENTATIVE:20230101T090000Z/20230101T100000Z",
            FreeBusyStatus::BusyTentative,
        ),
        (
            "FREEBUSY;FBTYPE=BUSY-UNAVAILABLE:20230101T090000Z/20230101T100000Z",
            FreeBusyStatus::BusyUnavailable,
        ),
    ];

    for (src, status) in cases {
        let boxed = serializer.deserialize(src).unwrap();
        let entry = boxed.downcast_ref::<FreeBusyEntry>().unwrap();
        assert_eq!(entry.status(), &status, "decode failed for {src}");
        assert_eq!(
            entry.period().to_string(),
            "20230101T090000Z/20230101T100000Z"
        );

        let rendered = serializer.serialize_to_string(entry).unwrap();
        assert_eq!(rendered, format!("{src}\r\n"), "encode failed for {src}");
    }
}

#[test]
fn free_busy_busy_state_normalizes_an_explicit_fbtype_away() {
    let serializer = FreeBusyEntrySerializer::new();
    let boxed = serializer
        .deserialize("FREEBUSY;FBTYPE=BUSY:20230101T090000Z/20230101T100000Z")
        .unwrap();
    let entry = boxed.downcast_ref::<FreeBusyEntry>().unwrap();
    assert_eq!(entry.status(), &FreeBusyStatus::Busy);

    // Busy maps to absence of the parameter on the way out.
    let rendered = serializer.serialize_to_string(entry).unwrap();
    assert_eq!(rendered, "FREEBUSY:20230101T090000Z/20230101T100000Z\r\n");
}

#[test]
fn garbage_status_token_leaves_the_default_in_place() {
    let serializer = FreeBusyEntrySerializer::new();
    let boxed = serializer
        .deserialize("FREEBUSY;FBTYPE=GARBAGE:20230101T090000Z/20230101T100000Z")
        .unwrap();
    let entry = boxed.downcast_ref::<FreeBusyEntry>().unwrap();
    assert_eq!(entry.status(), &FreeBusyStatus::Busy);
}

#[test]
fn unparsable_rsvp_reads_false() {
    let line = grammar::parse_line("ATTENDEE;RSVP=notabool:mailto:a@example.com").unwrap();
    let attendee = Attendee::from_property(&Property::new(line.name, line.params, line.value));
    assert!(!attendee.rsvp());
}

#[test]
fn malformed_identity_string_is_rejected_up_front() {
    assert!(Attendee::try_from("not a uri").is_err());
}

#[test]
fn event_with_both_dtend_and_duration_serializes_only_dtend() {
    let src = "BEGIN:VEVENT\r\n\
UID:12345@example.com\r\n\
DTSTART:20250110T140000Z\r\n\
DTEND:20250110T150000Z\r\n\
DURATION:PT2H\r\n\
END:VEVENT\r\n";

    let serializer = EventSerializer::new();
    let boxed = serializer.deserialize(src).unwrap();
    let event = boxed.downcast_ref::<Event>().unwrap();

    // The decoded object is allowed to carry both.
    assert!(event.dt_end().is_some());
    assert!(event.duration().is_some());

    let text = serializer.serialize_to_string(event).unwrap();
    assert!(text.contains("DTEND:20250110T150000Z\r\n"));
    assert!(!text.contains("DURATION"));

    // Exclusivity is enforced at the boundary only; the object keeps both.
    assert!(event.dt_end().is_some());
    assert!(event.duration().is_some());
}

#[test]
fn event_round_trips_attendees_through_text() {
    let mut event = Event::new();
    event.set_uid("67890@example.com");

    let mut attendee = Attendee::try_from("mailto:jsmith@example.com").unwrap();
    attendee.set_common_name(Some("John Smith"));
    attendee.set_role(ParticipationRole::Chair);
    attendee.set_delegated_from(vec!["mailto:old-chair@example.com".into()]);
    event.add_attendee(&attendee);

    let serializer = EventSerializer::new();
    let text = serializer.serialize_to_string(&event).unwrap();

    let boxed = serializer.deserialize(&text).unwrap();
    let reparsed = boxed.downcast_ref::<Event>().unwrap();
    let attendees = reparsed.attendees();
    assert_eq!(attendees.len(), 1);
    assert_eq!(attendees[0].common_name(), Some("John Smith"));
    assert_eq!(attendees[0].role(), &ParticipationRole::Chair);
    assert_eq!(
        attendees[0].delegated_from(),
        ["mailto:old-chair@example.com"]
    );
}

#[test]
fn deep_copy_keeps_round_trip_equivalence_but_not_identity() {
    let line = grammar::parse_line(
        "ATTENDEE;CN=John Smith;DELEGATED-TO=\"mailto:dt@example.com\":mailto:jsmith@example.com",
    )
    .unwrap();
    let original = Attendee::from_property(&Property::new(line.name, line.params, line.value));
    let mut copy = original.deep_copy();

    // Same observable state...
    assert_eq!(copy.common_name(), original.common_name());
    assert_eq!(copy.delegated_to(), original.delegated_to());

    // ...but mutating one never shows through the other.
    copy.set_delegated_to(vec![
        "mailto:dt@example.com".into(),
        "mailto:second@example.com".into(),
    ]);
    assert_eq!(original.delegated_to(), ["mailto:dt@example.com"]);
}
