// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Attendee value type (RFC 5545 Section 3.8.4.1).
//!
//! Every field except the calendar user address is backed by one parameter of
//! the attendee's own store through a [`CachedParam`] adapter: reads decode
//! lazily, writes go through to the store immediately. Instances are meant to
//! be owned and mutated by a single caller at a time.

use crate::cached::{BoolCodec, CachedParam, ListCodec, TextCodec, TokenCodec, UriCodec};
use crate::component::Property;
use crate::keyword::{
    KW_ATTENDEE, KW_CN, KW_CUTYPE, KW_DELEGATED_FROM, KW_DELEGATED_TO, KW_DIR, KW_MEMBER,
    KW_PARTSTAT, KW_ROLE, KW_RSVP, KW_SENT_BY,
};
use crate::params::Parameters;
use crate::token::{CalendarUserType, ParticipationRole, ParticipationStatus};
use crate::uri::{Uri, UriError};

/// A calendar user attending a calendar entity.
#[derive(Debug)]
pub struct Attendee {
    /// Calendar user address, held directly rather than in the store.
    address: Option<Uri>,

    params: Parameters,

    sent_by: CachedParam<UriCodec>,
    common_name: CachedParam<TextCodec>,
    directory: CachedParam<UriCodec>,
    user_type: CachedParam<TokenCodec<CalendarUserType>>,
    members: CachedParam<ListCodec>,
    role: CachedParam<TokenCodec<ParticipationRole>>,
    participation_status: CachedParam<TokenCodec<ParticipationStatus>>,
    rsvp: CachedParam<BoolCodec>,
    delegated_to: CachedParam<ListCodec>,
    delegated_from: CachedParam<ListCodec>,
}

impl Attendee {
    fn with_parts(address: Option<Uri>, params: Parameters) -> Self {
        Self {
            address,
            params,
            sent_by: CachedParam::new(KW_SENT_BY),
            common_name: CachedParam::new(KW_CN),
            directory: CachedParam::new(KW_DIR),
            user_type: CachedParam::new(KW_CUTYPE),
            members: CachedParam::new(KW_MEMBER),
            role: CachedParam::new(KW_ROLE),
            participation_status: CachedParam::new(KW_PARTSTAT),
            rsvp: CachedParam::new(KW_RSVP),
            delegated_to: CachedParam::new(KW_DELEGATED_TO),
            delegated_from: CachedParam::new(KW_DELEGATED_FROM),
        }
    }

    /// Create an attendee for a calendar user address.
    #[must_use]
    pub fn new(address: Uri) -> Self {
        Self::with_parts(Some(address), Parameters::new())
    }

    /// Rebuild an attendee from an `ATTENDEE` property.
    ///
    /// The property's parameters are adopted wholesale, including ones this
    /// type does not model; the address decodes leniently (a malformed
    /// address reads as no address, never an error).
    #[must_use]
    pub fn from_property(property: &Property) -> Self {
        Self::with_parts(
            Uri::parse_lenient(property.value()),
            property.params().clone(),
        )
    }

    /// Render this attendee as an `ATTENDEE` property.
    ///
    /// Parameters the type does not model are carried along untouched.
    #[must_use]
    pub fn to_property(&self) -> Property {
        Property::new(
            KW_ATTENDEE,
            self.params.clone(),
            self.address.as_ref().map(Uri::as_str).unwrap_or_default(),
        )
    }

    /// Calendar user address, typically a `mailto:` URI.
    #[must_use]
    pub fn address(&self) -> Option<&Uri> {
        self.address.as_ref()
    }

    /// Replace the calendar user address.
    pub fn set_address(&mut self, address: Uri) {
        self.address = Some(address);
    }

    /// SENT-BY: who is acting on behalf of this attendee.
    #[must_use]
    pub fn sent_by(&self) -> Option<&Uri> {
        self.sent_by.get(&self.params).as_ref()
    }

    /// Set SENT-BY.
    pub fn set_sent_by(&mut self, sent_by: Uri) {
        self.sent_by.set(&mut self.params, Some(sent_by));
    }

    /// CN: the common or displayable name of the calendar user.
    #[must_use]
    pub fn common_name(&self) -> Option<&str> {
        self.common_name.get(&self.params).as_deref()
    }

    /// Set or clear CN.
    pub fn set_common_name(&mut self, common_name: Option<&str>) {
        self.common_name
            .set(&mut self.params, common_name.map(str::to_owned));
    }

    /// DIR: directory entry associated with the calendar user.
    #[must_use]
    pub fn directory(&self) -> Option<&Uri> {
        self.directory.get(&self.params).as_ref()
    }

    /// Set DIR.
    pub fn set_directory(&mut self, directory: Uri) {
        self.directory.set(&mut self.params, Some(directory));
    }

    /// CUTYPE: the type of calendar user.
    #[must_use]
    pub fn user_type(&self) -> &CalendarUserType {
        self.user_type.get(&self.params)
    }

    /// Set CUTYPE.
    pub fn set_user_type(&mut self, user_type: CalendarUserType) {
        self.user_type.set(&mut self.params, user_type);
    }

    /// MEMBER: the groups the user belongs to.
    #[must_use]
    pub fn members(&self) -> &[String] {
        self.members.get(&self.params)
    }

    /// Replace the MEMBER list.
    pub fn set_members(&mut self, members: Vec<String>) {
        self.members.set(&mut self.params, members);
    }

    /// ROLE: the intended participation role.
    #[must_use]
    pub fn role(&self) -> &ParticipationRole {
        self.role.get(&self.params)
    }

    /// Set ROLE.
    pub fn set_role(&mut self, role: ParticipationRole) {
        self.role.set(&mut self.params, role);
    }

    /// PARTSTAT: the participation status.
    #[must_use]
    pub fn participation_status(&self) -> &ParticipationStatus {
        self.participation_status.get(&self.params)
    }

    /// Set PARTSTAT.
    pub fn set_participation_status(&mut self, status: ParticipationStatus) {
        self.participation_status.set(&mut self.params, status);
    }

    /// RSVP: whether a reply is requested.
    #[must_use]
    pub fn rsvp(&self) -> bool {
        *self.rsvp.get(&self.params)
    }

    /// Set RSVP.
    pub fn set_rsvp(&mut self, rsvp: bool) {
        self.rsvp.set(&mut self.params, rsvp);
    }

    /// DELEGATED-TO: the calendar users the request was delegated to.
    #[must_use]
    pub fn delegated_to(&self) -> &[String] {
        self.delegated_to.get(&self.params)
    }

    /// Replace the DELEGATED-TO list.
    pub fn set_delegated_to(&mut self, delegates: Vec<String>) {
        self.delegated_to.set(&mut self.params, delegates);
    }

    /// DELEGATED-FROM: the calendar users the request was delegated from.
    #[must_use]
    pub fn delegated_from(&self) -> &[String] {
        self.delegated_from.get(&self.params)
    }

    /// Replace the DELEGATED-FROM list.
    pub fn set_delegated_from(&mut self, delegators: Vec<String>) {
        self.delegated_from.set(&mut self.params, delegators);
    }

    /// The raw parameter store backing this attendee.
    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Deep copy: the result shares no mutable state with `self`.
    ///
    /// The raw store is copied first so unmodeled parameters survive, then
    /// every adapter-backed field is re-assigned through its setter with an
    /// owned value.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        let mut copy = Self::with_parts(self.address.clone(), self.params.clone());

        copy.set_common_name(self.common_name());
        copy.set_user_type(self.user_type().clone());
        copy.set_role(self.role().clone());
        copy.set_participation_status(self.participation_status().clone());
        copy.set_rsvp(self.rsvp());
        if let Some(sent_by) = self.sent_by() {
            copy.set_sent_by(sent_by.clone());
        }
        if let Some(directory) = self.directory() {
            copy.set_directory(directory.clone());
        }
        copy.set_members(self.members().to_vec());
        copy.set_delegated_to(self.delegated_to().to_vec());
        copy.set_delegated_from(self.delegated_from().to_vec());

        copy
    }
}

impl TryFrom<&str> for Attendee {
    type Error = UriError;

    /// Build an attendee from a raw address string.
    ///
    /// The string must be a well-formed absolute URI; anything else is a
    /// caller contract violation and no instance is produced.
    fn try_from(address: &str) -> Result<Self, Self::Error> {
        Uri::parse(address).map(Self::new)
    }
}
