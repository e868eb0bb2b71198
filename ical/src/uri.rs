// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Raw-preserving URI values for calendar user addresses and references.
//!
//! iCalendar carries URIs as opaque text; normalizing them on the way through
//! would break write-back of untouched data, so [`Uri`] keeps the exact source
//! text and only validates it. Absolute parsing is a caller contract (a
//! malformed address is an error), lenient parsing is for decode paths where
//! failure must degrade to "no value".

use std::fmt;

/// A URI kept as its original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    raw: String,
}

/// Failure to build a [`Uri`] from caller-supplied text.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UriError {
    /// The text is not a well-formed absolute URI.
    #[error("not a well-formed absolute URI: {uri:?}")]
    NotAbsolute {
        /// The offending text
        uri: String,
        /// Parser diagnostics
        #[source]
        source: url::ParseError,
    },
}

impl Uri {
    /// Parse an absolute URI.
    ///
    /// # Errors
    ///
    /// Returns [`UriError::NotAbsolute`] when `raw` is not a well-formed
    /// absolute URI (no scheme, or malformed for its scheme).
    pub fn parse(raw: &str) -> Result<Self, UriError> {
        match url::Url::parse(raw) {
            Ok(_) => Ok(Self {
                raw: raw.to_owned(),
            }),
            Err(source) => Err(UriError::NotAbsolute {
                uri: raw.to_owned(),
                source,
            }),
        }
    }

    /// Parse a relative-or-absolute URI reference, leniently.
    ///
    /// Returns `None` for text that cannot be a URI reference (empty, or
    /// containing whitespace, quotes or control characters). Never an error;
    /// callers must not assume a value comes back.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed
                .chars()
                .any(|c| c.is_whitespace() || c.is_control() || c == '"')
        {
            return None;
        }
        Some(Self {
            raw: trimmed.to_owned(),
        })
    }

    /// The original text of the URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_absolute_uris() {
        let success_cases = [
            "mailto:jsmith@example.com",
            "https://example.com/directory?id=42",
            "ldap://example.com:6666/o=ABC%20Industries,c=US",
        ];
        for src in success_cases {
            let uri = Uri::parse(src).unwrap();
            assert_eq!(uri.as_str(), src, "raw text must be preserved for {src}");
        }
    }

    #[test]
    fn rejects_non_absolute_uris() {
        let fail_cases = ["not a uri", "", "/relative/path", "example.com/no-scheme"];
        for src in fail_cases {
            assert!(Uri::parse(src).is_err(), "Parse {src:?} should fail");
        }
    }

    #[test]
    fn lenient_parse_accepts_relative_references() {
        assert!(Uri::parse_lenient("mailto:a@example.com").is_some());
        assert!(Uri::parse_lenient("/users/jsmith").is_some());
        assert!(Uri::parse_lenient("  mailto:a@example.com  ").is_some());
    }

    #[test]
    fn lenient_parse_yields_no_value_on_failure() {
        assert!(Uri::parse_lenient("").is_none());
        assert!(Uri::parse_lenient("   ").is_none());
        assert!(Uri::parse_lenient("not a uri").is_none());
        assert!(Uri::parse_lenient("a\"b").is_none());
    }
}
