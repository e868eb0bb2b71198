// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Tokenizer/grammar collaborator: content-line TEXT to object state and back.
//!
//! ```text
//! Source Text → Lexer → Token Stream → Scanner → Content Lines → Components
//! ```
//!
//! Per RFC 5545, a content line has the format:
//! ```text
//! contentline = name *(";" param) ":" value CRLF
//! ```
//!
//! The scanner is a linear pass over the token stream; a structurally invalid
//! stream yields a [`GrammarError`], never a panic. The serializer layer maps
//! those errors to absence. Line folding/unfolding is out of scope: input is
//! expected unfolded, output is never folded.

mod lexer;

use std::iter::Peekable;

use logos::Logos;

pub use lexer::Token;

use crate::component::{Component, Property};
use crate::keyword::{KW_BEGIN, KW_END};
use crate::params::Parameters;

/// One scanned content line: name, parameter store and raw value text.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property name (case preserved)
    pub name: String,

    /// Parameters; a repeated parameter name accumulates values in order
    pub params: Parameters,

    /// Raw property value text, verbatim
    pub value: String,
}

/// Structural failures while scanning content lines or assembling components.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GrammarError {
    /// Text the lexer cannot tokenize (e.g. a stray control character).
    #[error("unrecognizable text at byte {at}")]
    Lexical {
        /// Byte offset of the offending text
        at: usize,
    },

    /// A content line without a leading name word.
    #[error("content line does not start with a name")]
    MissingName,

    /// A content line without a `:` separating name/parameters from value.
    #[error("missing ':' in content line")]
    MissingColon,

    /// A parameter without a `=` after its name.
    #[error("missing '=' after parameter name {name:?}")]
    MissingEquals {
        /// The parameter name
        name: String,
    },

    /// An `END` line naming a different component than the open `BEGIN`.
    #[error("unbalanced component: expected END:{expected}, found END:{found}")]
    Unbalanced {
        /// Name of the component awaiting its END line
        expected: String,
        /// Name the END line carried
        found: String,
    },

    /// Input ended while a component was still open.
    #[error("unterminated component {name}")]
    Unterminated {
        /// Name of the still-open component
        name: String,
    },

    /// A property line outside any `BEGIN`/`END` block.
    #[error("property {name:?} outside any component")]
    PropertyOutsideComponent {
        /// The property name
        name: String,
    },

    /// No component in the input at all.
    #[error("input contains no component")]
    Empty,
}

/// Parse a single content line (no trailing newline required).
///
/// # Errors
///
/// Returns a [`GrammarError`] when the line is structurally invalid.
pub fn parse_line(src: &str) -> Result<ContentLine, GrammarError> {
    let tokens = tokenize(src)?;
    let mut iter = tokens.into_iter().peekable();
    scan_line(&mut iter)
}

/// Parse TEXT into all top-level components it contains.
///
/// # Errors
///
/// Returns a [`GrammarError`] when a line is structurally invalid or the
/// `BEGIN`/`END` nesting does not balance.
pub fn parse_components(src: &str) -> Result<Vec<Component>, GrammarError> {
    let tokens = tokenize(src)?;
    let mut iter = tokens.into_iter().peekable();

    let mut lines = Vec::new();
    while let Some(token) = iter.peek() {
        if matches!(token, Token::Newline) {
            // Tolerate blank lines between content lines.
            iter.next();
            continue;
        }
        lines.push(scan_line(&mut iter)?);
    }

    build_tree(lines)
}

/// Parse TEXT into its first top-level component.
///
/// # Errors
///
/// Returns a [`GrammarError`] when the input is invalid or holds no component.
pub fn parse_component(src: &str) -> Result<Component, GrammarError> {
    parse_components(src)?
        .into_iter()
        .next()
        .ok_or(GrammarError::Empty)
}

/// Render one content line as canonical TEXT, terminated by CRLF.
///
/// Parameter values containing `:`, `;` or `,` are quoted.
#[must_use]
pub fn render_line(name: &str, params: &Parameters, value: &str) -> String {
    let mut out = String::new();
    out.push_str(name);
    for (param_name, values) in params.iter() {
        out.push(';');
        out.push_str(param_name);
        out.push('=');
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            if needs_quoting(v) {
                out.push('"');
                out.push_str(v);
                out.push('"');
            } else {
                out.push_str(v);
            }
        }
    }
    out.push(':');
    out.push_str(value);
    out.push_str("\r\n");
    out
}

/// Render a component and everything nested in it as canonical TEXT.
#[must_use]
pub fn render_component(component: &Component) -> String {
    let mut out = String::new();
    write_component(&mut out, component);
    out
}

fn write_component(out: &mut String, component: &Component) {
    out.push_str(KW_BEGIN);
    out.push(':');
    out.push_str(component.name());
    out.push_str("\r\n");
    for property in component.properties() {
        out.push_str(&render_line(
            property.name(),
            property.params(),
            property.value(),
        ));
    }
    for child in component.components() {
        write_component(out, child);
    }
    out.push_str(KW_END);
    out.push(':');
    out.push_str(component.name());
    out.push_str("\r\n");
}

fn needs_quoting(value: &str) -> bool {
    value.contains([':', ';', ','])
}

fn tokenize(src: &str) -> Result<Vec<Token<'_>>, GrammarError> {
    let mut tokens = Vec::new();
    for (token, span) in Token::lexer(src).spanned() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => return Err(GrammarError::Lexical { at: span.start }),
        }
    }
    Ok(tokens)
}

/// Scan one content line off the token stream, consuming its newline.
fn scan_line<'src>(
    tokens: &mut Peekable<impl Iterator<Item = Token<'src>>>,
) -> Result<ContentLine, GrammarError> {
    let name = match tokens.next() {
        Some(Token::Word(word)) => word.to_owned(),
        _ => return Err(GrammarError::MissingName),
    };

    let mut params = Parameters::new();
    loop {
        match tokens.next() {
            Some(Token::Semicolon) => scan_parameter(tokens, &mut params)?,
            Some(Token::Colon) => break,
            _ => return Err(GrammarError::MissingColon),
        }
    }

    let mut value = String::new();
    while let Some(token) = tokens.next() {
        if matches!(token, Token::Newline) {
            break;
        }
        value.push_str(token.text());
    }

    Ok(ContentLine {
        name,
        params,
        value,
    })
}

/// Scan `name "=" value *("," value)` after a semicolon.
fn scan_parameter<'src>(
    tokens: &mut Peekable<impl Iterator<Item = Token<'src>>>,
    params: &mut Parameters,
) -> Result<(), GrammarError> {
    let name = match tokens.next() {
        Some(Token::Word(word)) => word.to_owned(),
        _ => return Err(GrammarError::MissingName),
    };
    match tokens.next() {
        Some(Token::Equals) => {}
        _ => return Err(GrammarError::MissingEquals { name }),
    }

    let mut current = String::new();
    loop {
        let Some(token) = tokens.peek().copied() else {
            break;
        };
        match token {
            Token::Semicolon | Token::Colon | Token::Newline => break,
            Token::Comma => {
                tokens.next();
                params.append(&name, std::mem::take(&mut current));
            }
            Token::Quoted(quoted) => {
                tokens.next();
                current.push_str(unquote(quoted));
            }
            other => {
                tokens.next();
                current.push_str(other.text());
            }
        }
    }
    params.append(&name, current);
    Ok(())
}

fn unquote(quoted: &str) -> &str {
    quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(quoted)
}

/// Assemble scanned lines into a component tree via a BEGIN/END stack.
fn build_tree(lines: Vec<ContentLine>) -> Result<Vec<Component>, GrammarError> {
    let mut roots = Vec::new();
    let mut stack: Vec<Component> = Vec::new();

    for line in lines {
        if line.name.eq_ignore_ascii_case(KW_BEGIN) {
            stack.push(Component::new(line.value.trim().to_ascii_uppercase()));
        } else if line.name.eq_ignore_ascii_case(KW_END) {
            let found = line.value.trim();
            let Some(done) = stack.pop() else {
                return Err(GrammarError::Unbalanced {
                    expected: String::new(),
                    found: found.to_owned(),
                });
            };
            if !done.name().eq_ignore_ascii_case(found) {
                return Err(GrammarError::Unbalanced {
                    expected: done.name().to_owned(),
                    found: found.to_owned(),
                });
            }
            match stack.last_mut() {
                Some(parent) => parent.push_component(done),
                None => roots.push(done),
            }
        } else {
            match stack.last_mut() {
                Some(current) => {
                    current.push_property(Property::new(line.name, line.params, line.value));
                }
                None => {
                    return Err(GrammarError::PropertyOutsideComponent { name: line.name });
                }
            }
        }
    }

    if let Some(open) = stack.pop() {
        return Err(GrammarError::Unterminated {
            name: open.name().to_owned(),
        });
    }
    if roots.is_empty() {
        return Err(GrammarError::Empty);
    }
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::{KW_CN, KW_MEMBER, KW_ROLE, KW_RSVP};

    #[test]
    fn parses_a_bare_property_line() {
        let line = parse_line("SUMMARY:Board meeting, room 2").unwrap();
        assert_eq!(line.name, "SUMMARY");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "Board meeting, room 2");
    }

    #[test]
    fn parses_parameters_with_spaces_and_case() {
        let line =
            parse_line("ATTENDEE;CN=John Smith;ROLE=REQ-PARTICIPANT;RSVP=TRUE:mailto:jsmith@example.com")
                .unwrap();
        assert_eq!(line.name, "ATTENDEE");
        assert_eq!(line.params.get(KW_CN), Some("John Smith"));
        assert_eq!(line.params.get(KW_ROLE), Some("REQ-PARTICIPANT"));
        assert_eq!(line.params.get(KW_RSVP), Some("TRUE"));
        assert_eq!(line.value, "mailto:jsmith@example.com");
    }

    #[test]
    fn comma_separates_parameter_values() {
        let line = parse_line(
            "ATTENDEE;MEMBER=\"mailto:dev@example.com\",\"mailto:ops@example.com\":mailto:a@example.com",
        )
        .unwrap();
        assert_eq!(
            line.params.get_many(KW_MEMBER),
            ["mailto:dev@example.com", "mailto:ops@example.com"]
        );
    }

    #[test]
    fn quoted_values_may_contain_structural_characters() {
        let line = parse_line("ORGANIZER;CN=\"Smith, John\":mailto:jsmith@example.com").unwrap();
        assert_eq!(line.params.get(KW_CN), Some("Smith, John"));
    }

    #[test]
    fn repeated_parameter_names_accumulate() {
        let line = parse_line("X;TAG=a;TAG=b:v").unwrap();
        assert_eq!(line.params.get_many("TAG"), ["a", "b"]);
    }

    #[test]
    fn structural_failures_are_errors() {
        assert!(matches!(
            parse_line("SUMMARY no colon here"),
            Err(GrammarError::MissingColon)
        ));
        assert!(matches!(
            parse_line(":value"),
            Err(GrammarError::MissingName)
        ));
        assert!(matches!(
            parse_line("A;NAME:v"),
            Err(GrammarError::MissingEquals { .. })
        ));
    }

    #[test]
    fn renders_lines_with_quoting() {
        let mut params = Parameters::new();
        params.set(KW_CN, "Smith, John");
        params.set(KW_ROLE, "CHAIR");
        let text = render_line("ATTENDEE", &params, "mailto:jsmith@example.com");
        assert_eq!(
            text,
            "ATTENDEE;CN=\"Smith, John\";ROLE=CHAIR:mailto:jsmith@example.com\r\n"
        );
    }

    #[test]
    fn line_render_round_trips() {
        let src = "ATTENDEE;CN=\"Smith, John\";ROLE=CHAIR:mailto:jsmith@example.com\r\n";
        let line = parse_line(src).unwrap();
        assert_eq!(render_line(&line.name, &line.params, &line.value), src);
    }

    #[test]
    fn parses_nested_components() {
        let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:12345@example.com\r\n\
SUMMARY:Test Event\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
        let calendar = parse_component(src).unwrap();
        assert_eq!(calendar.name(), "VCALENDAR");
        assert_eq!(calendar.properties().len(), 1);
        assert_eq!(calendar.components().len(), 1);

        let event = &calendar.components()[0];
        assert_eq!(event.name(), "VEVENT");
        assert_eq!(
            event.property("uid").map(Property::value),
            Some("12345@example.com")
        );
    }

    #[test]
    fn unbalanced_blocks_are_errors() {
        let src = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nEND:VCALENDAR\r\nEND:VEVENT\r\n";
        assert!(matches!(
            parse_component(src),
            Err(GrammarError::Unbalanced { .. })
        ));

        let src = "BEGIN:VEVENT\r\nSUMMARY:open\r\n";
        assert!(matches!(
            parse_component(src),
            Err(GrammarError::Unterminated { .. })
        ));

        assert!(matches!(parse_components(""), Err(GrammarError::Empty)));
    }

    #[test]
    fn component_render_round_trips() {
        let src = "BEGIN:VEVENT\r\n\
UID:12345@example.com\r\n\
DTSTART:20250110T140000Z\r\n\
SUMMARY:Quarterly review\r\n\
END:VEVENT\r\n";
        let event = parse_component(src).unwrap();
        assert_eq!(render_component(&event), src);
    }
}
