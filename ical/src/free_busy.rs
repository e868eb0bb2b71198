// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Free/busy interval value type (RFC 5545 Section 3.8.2.6).
//!
//! A [`FreeBusyEntry`] is a period with a free/busy classification and its
//! own parameter store. The status is a plain typed field: the mapping to and
//! from the FBTYPE parameter is the serializer's job (see
//! [`FreeBusyEntrySerializer`](crate::serializer::FreeBusyEntrySerializer)),
//! so a decoded entry can disagree with its raw FBTYPE text until it is
//! encoded again.

use crate::params::Parameters;
use crate::token::FreeBusyStatus;
use crate::value::Period;

/// One free/busy time interval.
#[derive(Debug, Clone)]
pub struct FreeBusyEntry {
    period: Period,
    status: FreeBusyStatus,
    params: Parameters,
}

impl FreeBusyEntry {
    /// A busy interval (the default classification).
    #[must_use]
    pub fn new(period: Period) -> Self {
        Self::with_params(period, Parameters::new())
    }

    /// An interval adopting an existing parameter store.
    #[must_use]
    pub fn with_params(period: Period, params: Parameters) -> Self {
        Self {
            period,
            status: FreeBusyStatus::default(),
            params,
        }
    }

    /// The time interval.
    #[must_use]
    pub fn period(&self) -> &Period {
        &self.period
    }

    /// Replace the time interval.
    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    /// The free/busy classification.
    #[must_use]
    pub fn status(&self) -> &FreeBusyStatus {
        &self.status
    }

    /// Replace the free/busy classification.
    pub fn set_status(&mut self, status: FreeBusyStatus) {
        self.status = status;
    }

    /// The raw parameter store backing this entry.
    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Mutable access to the parameter store, for the serializer layer.
    pub(crate) fn params_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    /// Deep copy: the result shares no mutable state with `self`.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Self {
            period: self.period,
            status: self.status.clone(),
            params: self.params.clone(),
        }
    }
}
