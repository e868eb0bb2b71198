// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Lazy decode-cache/write-through binding between typed fields and raw
//! parameters.
//!
//! Every typed field of a value object is one [`CachedParam`] wrapping one
//! parameter name. Reads decode from the store on first access and cache the
//! result; writes compare against the current value first and, when they are
//! not equal, replace the cache and re-encode into the store in the same call.
//! Once a field has cached a value the store slot for its name must only be
//! changed through that field (single writer through the adapter).
//!
//! The cache is a [`OnceCell`]: decode/encode here is synchronous and
//! single-threaded, instances are not meant to be shared across threads.

use std::cell::OnceCell;
use std::fmt;
use std::marker::PhantomData;

use crate::params::Parameters;
use crate::token::TokenValue;
use crate::uri::Uri;

/// Decode/encode/equality rules binding one typed field to its parameter.
pub(crate) trait ParamCodec {
    /// The typed value the field exposes.
    type Decoded;

    /// Decode the current store contents for `name`. Malformed or absent raw
    /// text yields the type's documented default, never an error.
    fn decode(params: &Parameters, name: &str) -> Self::Decoded;

    /// Encode a typed value for write-through.
    fn encode(value: &Self::Decoded) -> Encoded;

    /// Whether writing `incoming` over `current` would change anything.
    fn same(current: &Self::Decoded, incoming: &Self::Decoded) -> bool;
}

/// The store operation a codec's encoding maps to.
pub(crate) enum Encoded {
    /// Replace the slot with a single value
    One(String),
    /// Replace the slot with an ordered sequence of values
    Many(Vec<String>),
    /// Remove the slot ("clear" semantics)
    Clear,
}

/// One typed field: a parameter name plus the cache of its decoded value.
pub(crate) struct CachedParam<C: ParamCodec> {
    name: &'static str,
    cache: OnceCell<C::Decoded>,
}

impl<C: ParamCodec> CachedParam<C> {
    /// Bind a field to `name` with an empty cache.
    pub(crate) const fn new(name: &'static str) -> Self {
        Self {
            name,
            cache: OnceCell::new(),
        }
    }

    /// The cached value, decoding from the store on first access.
    pub(crate) fn get(&self, params: &Parameters) -> &C::Decoded {
        self.cache.get_or_init(|| C::decode(params, self.name))
    }

    /// Write a typed value through to the store.
    ///
    /// A no-op when the codec judges `value` equal to the current decoded
    /// value (including setting an unset field to its default); otherwise the
    /// cache is replaced and the encoding is written to the store
    /// synchronously.
    pub(crate) fn set(&mut self, params: &mut Parameters, value: C::Decoded) {
        if C::same(self.get(params), &value) {
            return;
        }
        match C::encode(&value) {
            Encoded::One(raw) => params.set(self.name, raw),
            Encoded::Many(raws) => params.set_many(self.name, raws),
            Encoded::Clear => params.remove(self.name),
        }
        self.cache = OnceCell::from(value);
    }
}

impl<C: ParamCodec> fmt::Debug for CachedParam<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedParam")
            .field("name", &self.name)
            .field("cached", &self.cache.get().is_some())
            .finish()
    }
}

/// Free-text parameters (CN and friends).
///
/// Case-insensitive equality gates the write; clearing removes the parameter.
pub(crate) struct TextCodec;

impl ParamCodec for TextCodec {
    type Decoded = Option<String>;

    fn decode(params: &Parameters, name: &str) -> Self::Decoded {
        params.get(name).map(str::to_owned)
    }

    fn encode(value: &Self::Decoded) -> Encoded {
        match value {
            Some(text) => Encoded::One(text.clone()),
            None => Encoded::Clear,
        }
    }

    fn same(current: &Self::Decoded, incoming: &Self::Decoded) -> bool {
        match (current, incoming) {
            (None, None) => true,
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
}

/// URI-valued parameters (SENT-BY, DIR).
///
/// Decoding is lenient: raw text that is not a URI reference yields `None`.
/// Writing `None` is a no-op, a URI field is never cleared through its setter.
pub(crate) struct UriCodec;

impl ParamCodec for UriCodec {
    type Decoded = Option<Uri>;

    fn decode(params: &Parameters, name: &str) -> Self::Decoded {
        let raw = params.get(name)?;
        let parsed = Uri::parse_lenient(raw);
        if parsed.is_none() {
            tracing::debug!(parameter = name, value = raw, "unparsable URI ignored");
        }
        parsed
    }

    fn encode(value: &Self::Decoded) -> Encoded {
        match value {
            Some(uri) => Encoded::One(uri.as_str().to_owned()),
            None => Encoded::Clear,
        }
    }

    fn same(current: &Self::Decoded, incoming: &Self::Decoded) -> bool {
        match (current, incoming) {
            // Writing "no value" never clears a URI field.
            (_, None) => true,
            (Some(a), Some(b)) => a.as_str().eq_ignore_ascii_case(b.as_str()),
            (None, Some(_)) => false,
        }
    }
}

/// Boolean parameters (RSVP).
///
/// Permissive decode: anything other than `TRUE` (any casing), including an
/// absent parameter, reads as `false`. Encodes uppercase tokens.
pub(crate) struct BoolCodec;

impl ParamCodec for BoolCodec {
    type Decoded = bool;

    fn decode(params: &Parameters, name: &str) -> Self::Decoded {
        match params.get(name) {
            Some(raw) if raw.eq_ignore_ascii_case(crate::keyword::KW_RSVP_TRUE) => true,
            Some(raw) if raw.eq_ignore_ascii_case(crate::keyword::KW_RSVP_FALSE) => false,
            Some(raw) => {
                tracing::debug!(parameter = name, value = raw, "unparsable boolean reads false");
                false
            }
            None => false,
        }
    }

    fn encode(value: &Self::Decoded) -> Encoded {
        Encoded::One(
            if *value {
                crate::keyword::KW_RSVP_TRUE
            } else {
                crate::keyword::KW_RSVP_FALSE
            }
            .to_owned(),
        )
    }

    fn same(current: &Self::Decoded, incoming: &Self::Decoded) -> bool {
        current == incoming
    }
}

/// Multi-valued parameters (MEMBER, DELEGATED-TO, DELEGATED-FROM).
///
/// Decodes all values once into the canonical owned sequence; reassigning the
/// whole sequence replaces cache and store. Reads hand out detached-snapshot
/// views, never live store state.
pub(crate) struct ListCodec;

impl ParamCodec for ListCodec {
    type Decoded = Vec<String>;

    fn decode(params: &Parameters, name: &str) -> Self::Decoded {
        params.get_many(name).to_vec()
    }

    fn encode(value: &Self::Decoded) -> Encoded {
        Encoded::Many(value.clone())
    }

    fn same(current: &Self::Decoded, incoming: &Self::Decoded) -> bool {
        current == incoming
    }
}

/// Enumerated-token parameters (CUTYPE, ROLE, PARTSTAT).
///
/// Absent or unrecognized raw text decodes to the token's default variant or
/// preserved `Other`; equality is the token family's case-insensitive match.
pub(crate) struct TokenCodec<T>(PhantomData<T>);

impl<T: TokenValue> ParamCodec for TokenCodec<T> {
    type Decoded = T;

    fn decode(params: &Parameters, name: &str) -> Self::Decoded {
        params.get(name).map(T::from_raw).unwrap_or_default()
    }

    fn encode(value: &Self::Decoded) -> Encoded {
        Encoded::One(value.as_str().to_owned())
    }

    fn same(current: &Self::Decoded, incoming: &Self::Decoded) -> bool {
        current.as_str().eq_ignore_ascii_case(incoming.as_str())
    }
}
