// SPDX-FileCopyrightText: 2026 Kalends maintainers <dev@kalends.org>
//
// SPDX-License-Identifier: Apache-2.0

//! Token lexer for iCalendar content-line text.

use logos::Logos;

/// One lexical token of a content line.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Logos)]
pub enum Token<'src> {
    /// Run of text free of structural characters.
    ///
    /// The scanner decides later whether a word is a name, a parameter value
    /// or part of a property value.
    #[regex(r#"[^;:,\r\n\t ="]+"#)]
    Word(&'src str),

    /// Semicolon (;), separates parameters
    #[token(";")]
    Semicolon,

    /// Colon (:), separates the name/parameter part from the value
    #[token(":")]
    Colon,

    /// Equal sign (=), separates a parameter name from its values
    #[token("=")]
    Equals,

    /// Comma (,), separates multiple parameter values
    #[token(",")]
    Comma,

    /// Line terminator; bare LF is tolerated on input, output is always CRLF
    #[regex(r"\r?\n")]
    Newline,

    /// Space ( )
    #[token(" ")]
    Space,

    /// Tab (\t)
    #[token("\t")]
    Tab,

    /// Quoted string including the surrounding quotes; no escapes per RFC 5545
    #[regex(r#""[^"\r\n]*""#)]
    Quoted(&'src str),
}

impl<'src> Token<'src> {
    /// The source text a token stands for, used to reassemble value text.
    #[must_use]
    pub fn text(self) -> &'src str {
        match self {
            Token::Word(s) | Token::Quoted(s) => s,
            Token::Semicolon => ";",
            Token::Colon => ":",
            Token::Equals => "=",
            Token::Comma => ",",
            Token::Newline => "\r\n",
            Token::Space => " ",
            Token::Tab => "\t",
        }
    }
}
