// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Normalized token enums for enumerated parameter values.
//!
//! Raw parameter text is converted to these enums at the store boundary so
//! that the rest of the crate never compares raw strings ad hoc. Tokens match
//! case-insensitively; text outside the RFC 5545 vocabulary is preserved
//! verbatim in an `Other` variant so untouched data survives a round trip.

use std::fmt;

use crate::keyword::{
    KW_CUTYPE, KW_CUTYPE_GROUP, KW_CUTYPE_INDIVIDUAL, KW_CUTYPE_RESOURCE, KW_CUTYPE_ROOM,
    KW_CUTYPE_UNKNOWN, KW_FBTYPE, KW_FBTYPE_BUSY, KW_FBTYPE_BUSY_TENTATIVE,
    KW_FBTYPE_BUSY_UNAVAILABLE, KW_FBTYPE_FREE, KW_PARTSTAT, KW_PARTSTAT_ACCEPTED,
    KW_PARTSTAT_DECLINED, KW_PARTSTAT_DELEGATED, KW_PARTSTAT_NEEDS_ACTION, KW_PARTSTAT_TENTATIVE,
    KW_ROLE, KW_ROLE_CHAIR, KW_ROLE_NON_PARTICIPANT, KW_ROLE_OPT_PARTICIPANT,
    KW_ROLE_REQ_PARTICIPANT,
};

/// A value convertible to and from a raw parameter token.
///
/// Implemented by the macro below; the codec layer uses it to decode, encode
/// and compare token-typed fields without knowing the concrete enum.
pub(crate) trait TokenValue: Default {
    /// Convert raw parameter text, matching case-insensitively.
    fn from_raw(raw: &str) -> Self;

    /// Canonical keyword, or the preserved raw text for unknown tokens.
    fn as_str(&self) -> &str;
}

/// Macro to define a token enum bound to one parameter name.
///
/// Generates the enum with an `Other(String)` catch-all, case-insensitive
/// conversion from raw text, `Display` rendering the canonical keyword, and
/// the [`TokenValue`] plumbing used by the typed accessor layer.
macro_rules! define_token_enum {
    (
        $(#[$meta:meta])*
        enum $Name:ident($param_kw:ident) {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident => $kw:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                $Variant,
            )*
            /// Token outside the RFC 5545 vocabulary, raw text preserved
            Other(String),
        }

        impl $Name {
            /// Name of the parameter this token family belongs to.
            pub const PARAMETER: &'static str = $param_kw;

            /// Canonical keyword, or the preserved raw text for `Other`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        Self::$Variant => $kw,
                    )*
                    Self::Other(raw) => raw,
                }
            }

            /// Case-insensitive token equality; `Other` compares its raw text.
            #[must_use]
            pub fn matches(&self, other: &Self) -> bool {
                self.as_str().eq_ignore_ascii_case(other.as_str())
            }
        }

        impl From<&str> for $Name {
            fn from(raw: &str) -> Self {
                $(
                    if raw.eq_ignore_ascii_case($kw) {
                        return Self::$Variant;
                    }
                )*
                Self::Other(raw.to_owned())
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.as_str().fmt(f)
            }
        }

        impl TokenValue for $Name {
            fn from_raw(raw: &str) -> Self {
                Self::from(raw)
            }

            fn as_str(&self) -> &str {
                Self::as_str(self)
            }
        }
    };
}

define_token_enum! {
    /// CUTYPE: the type of calendar user an attendee address refers to.
    enum CalendarUserType(KW_CUTYPE) {
        /// An individual
        #[default]
        Individual => KW_CUTYPE_INDIVIDUAL,
        /// A group of individuals
        Group      => KW_CUTYPE_GROUP,
        /// A physical resource
        Resource   => KW_CUTYPE_RESOURCE,
        /// A room resource
        Room       => KW_CUTYPE_ROOM,
        /// Otherwise not known
        Unknown    => KW_CUTYPE_UNKNOWN,
    }
}

define_token_enum! {
    /// ROLE: the intended participation role of an attendee.
    enum ParticipationRole(KW_ROLE) {
        /// Chair of the calendar entity
        Chair          => KW_ROLE_CHAIR,
        /// Participation is required
        #[default]
        ReqParticipant => KW_ROLE_REQ_PARTICIPANT,
        /// Participation is optional
        OptParticipant => KW_ROLE_OPT_PARTICIPANT,
        /// Listed for information purposes only
        NonParticipant => KW_ROLE_NON_PARTICIPANT,
    }
}

define_token_enum! {
    /// PARTSTAT: the participation status of an attendee.
    enum ParticipationStatus(KW_PARTSTAT) {
        /// No reply yet
        #[default]
        NeedsAction => KW_PARTSTAT_NEEDS_ACTION,
        /// Accepted the invitation
        Accepted    => KW_PARTSTAT_ACCEPTED,
        /// Declined the invitation
        Declined    => KW_PARTSTAT_DECLINED,
        /// Tentatively accepted
        Tentative   => KW_PARTSTAT_TENTATIVE,
        /// Delegated to another user
        Delegated   => KW_PARTSTAT_DELEGATED,
    }
}

define_token_enum! {
    /// FBTYPE: the free or busy classification of a time interval.
    ///
    /// `Busy` is the absence state: an interval without an FBTYPE parameter
    /// is busy, and encoding a busy interval removes the parameter.
    enum FreeBusyStatus(KW_FBTYPE) {
        /// The interval is free for scheduling
        Free            => KW_FBTYPE_FREE,
        /// The interval is blocked by scheduled events
        #[default]
        Busy            => KW_FBTYPE_BUSY,
        /// The interval is busy and cannot be scheduled at all
        BusyUnavailable => KW_FBTYPE_BUSY_UNAVAILABLE,
        /// The interval is blocked by tentatively scheduled events
        BusyTentative   => KW_FBTYPE_BUSY_TENTATIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_match_case_insensitively() {
        assert_eq!(
            ParticipationRole::from("chair"),
            ParticipationRole::Chair
        );
        assert_eq!(
            ParticipationRole::from("Req-Participant"),
            ParticipationRole::ReqParticipant
        );
        assert_eq!(
            FreeBusyStatus::from("busy-tentative"),
            FreeBusyStatus::BusyTentative
        );
        assert_eq!(
            CalendarUserType::from("ROOM"),
            CalendarUserType::Room
        );
    }

    #[test]
    fn unknown_tokens_preserve_raw_text() {
        let token = ParticipationStatus::from("X-AWAITING-APPROVAL");
        assert_eq!(token, ParticipationStatus::Other("X-AWAITING-APPROVAL".into()));
        assert_eq!(token.to_string(), "X-AWAITING-APPROVAL");
    }

    #[test]
    fn display_renders_canonical_keywords() {
        assert_eq!(ParticipationRole::OptParticipant.to_string(), "OPT-PARTICIPANT");
        assert_eq!(FreeBusyStatus::BusyUnavailable.to_string(), "BUSY-UNAVAILABLE");
        assert_eq!(ParticipationStatus::NeedsAction.to_string(), "NEEDS-ACTION");
    }

    #[test]
    fn matches_compares_tokens_not_spelling() {
        let a = FreeBusyStatus::from("Busy");
        let b = FreeBusyStatus::Busy;
        assert!(a.matches(&b));

        let x = ParticipationRole::Other("x-observer".into());
        let y = ParticipationRole::Other("X-OBSERVER".into());
        assert!(x.matches(&y));
        assert_ne!(x, y);
    }

    #[test]
    fn defaults_are_the_rfc_defaults() {
        assert_eq!(CalendarUserType::default(), CalendarUserType::Individual);
        assert_eq!(ParticipationRole::default(), ParticipationRole::ReqParticipant);
        assert_eq!(ParticipationStatus::default(), ParticipationStatus::NeedsAction);
        assert_eq!(FreeBusyStatus::default(), FreeBusyStatus::Busy);
    }
}
