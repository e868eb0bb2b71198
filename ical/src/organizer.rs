// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Organizer value type (RFC 5545 Section 3.8.4.3).
//!
//! Same store-backed shape as [`Attendee`](crate::Attendee), with the smaller
//! parameter surface an organizer carries.

use crate::cached::{CachedParam, TextCodec, UriCodec};
use crate::component::Property;
use crate::keyword::{KW_CN, KW_DIR, KW_ORGANIZER, KW_SENT_BY};
use crate::params::Parameters;
use crate::uri::{Uri, UriError};

/// The calendar user organizing a calendar entity.
#[derive(Debug)]
pub struct Organizer {
    address: Option<Uri>,

    params: Parameters,

    common_name: CachedParam<TextCodec>,
    directory: CachedParam<UriCodec>,
    sent_by: CachedParam<UriCodec>,
}

impl Organizer {
    fn with_parts(address: Option<Uri>, params: Parameters) -> Self {
        Self {
            address,
            params,
            common_name: CachedParam::new(KW_CN),
            directory: CachedParam::new(KW_DIR),
            sent_by: CachedParam::new(KW_SENT_BY),
        }
    }

    /// Create an organizer for a calendar user address.
    #[must_use]
    pub fn new(address: Uri) -> Self {
        Self::with_parts(Some(address), Parameters::new())
    }

    /// Rebuild an organizer from an `ORGANIZER` property.
    #[must_use]
    pub fn from_property(property: &Property) -> Self {
        Self::with_parts(
            Uri::parse_lenient(property.value()),
            property.params().clone(),
        )
    }

    /// Render this organizer as an `ORGANIZER` property.
    #[must_use]
    pub fn to_property(&self) -> Property {
        Property::new(
            KW_ORGANIZER,
            self.params.clone(),
            self.address.as_ref().map(Uri::as_str).unwrap_or_default(),
        )
    }

    /// Calendar user address of the organizer.
    #[must_use]
    pub fn address(&self) -> Option<&Uri> {
        self.address.as_ref()
    }

    /// Replace the calendar user address.
    pub fn set_address(&mut self, address: Uri) {
        self.address = Some(address);
    }

    /// CN: the common or displayable name of the organizer.
    #[must_use]
    pub fn common_name(&self) -> Option<&str> {
        self.common_name.get(&self.params).as_deref()
    }

    /// Set or clear CN.
    pub fn set_common_name(&mut self, common_name: Option<&str>) {
        self.common_name
            .set(&mut self.params, common_name.map(str::to_owned));
    }

    /// DIR: directory entry associated with the organizer.
    #[must_use]
    pub fn directory(&self) -> Option<&Uri> {
        self.directory.get(&self.params).as_ref()
    }

    /// Set DIR.
    pub fn set_directory(&mut self, directory: Uri) {
        self.directory.set(&mut self.params, Some(directory));
    }

    /// SENT-BY: who is acting on behalf of the organizer.
    #[must_use]
    pub fn sent_by(&self) -> Option<&Uri> {
        self.sent_by.get(&self.params).as_ref()
    }

    /// Set SENT-BY.
    pub fn set_sent_by(&mut self, sent_by: Uri) {
        self.sent_by.set(&mut self.params, Some(sent_by));
    }

    /// The raw parameter store backing this organizer.
    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Deep copy: the result shares no mutable state with `self`.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        let mut copy = Self::with_parts(self.address.clone(), self.params.clone());
        copy.set_common_name(self.common_name());
        if let Some(directory) = self.directory() {
            copy.set_directory(directory.clone());
        }
        if let Some(sent_by) = self.sent_by() {
            copy.set_sent_by(sent_by.clone());
        }
        copy
    }
}

impl TryFrom<&str> for Organizer {
    type Error = UriError;

    /// Build an organizer from a raw address string; the string must be a
    /// well-formed absolute URI.
    fn try_from(address: &str) -> Result<Self, Self::Error> {
        Uri::parse(address).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_property() {
        let mut organizer = Organizer::try_from("mailto:boss@example.com").unwrap();
        organizer.set_common_name(Some("The Boss"));
        organizer.set_sent_by(Uri::parse("mailto:assistant@example.com").unwrap());

        let rebuilt = Organizer::from_property(&organizer.to_property());
        assert_eq!(rebuilt.address().unwrap().as_str(), "mailto:boss@example.com");
        assert_eq!(rebuilt.common_name(), Some("The Boss"));
        assert_eq!(
            rebuilt.sent_by().unwrap().as_str(),
            "mailto:assistant@example.com"
        );
    }

    #[test]
    fn malformed_address_is_a_contract_violation() {
        assert!(Organizer::try_from("not a uri").is_err());
    }

    #[test]
    fn deep_copy_is_independent() {
        let original = Organizer::try_from("mailto:boss@example.com").unwrap();
        let mut copy = original.deep_copy();
        copy.set_common_name(Some("Renamed"));
        assert_eq!(original.common_name(), None);
    }
}
