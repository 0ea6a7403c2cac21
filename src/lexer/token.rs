/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical tokens of the mapping expression language
 *            produced by the lexer and consumed by the parser.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * GitHub:    https://github.com/samwilcox/mapping-dsl
 *
 * License:
 * This file is part of the MAPPING-DSL project.
 *
 * MAPPING-DSL is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::span::Span;
use std::fmt;

/// Represents the **category of a lexical token** in a mapping expression.
///
/// # Pipeline Role
/// ```text
/// Expression → Lexer → TokenKind → Parser → AST → Classifier → Mapping
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of identifier characters.
    ///
    /// Covers qualified names (`java.util.List`), source formats (`uuid`,
    /// `date-time`), parameter names and bare parameter values (`10`,
    /// `true`). The lexer does not validate the dots; the parser decides
    /// what shape the run must have at each position.
    Ident,

    /// `<`
    LAngle,

    /// `>`
    RAngle,

    /// `(`
    LParen,

    /// `)`
    RParen,

    /// `,`
    Comma,

    /// `=>`
    Arrow,

    /// `@`
    At,

    /// `=`
    Equals,

    /// A quoted literal.
    ///
    /// The lexeme keeps the delimiters and escape sequences verbatim:
    /// `"a\"b"` lexes to the seven characters `"a\"b"`.
    String,

    /// End-of-input marker.
    ///
    /// Always appended as the **final token**, so the parser can look ahead
    /// without bounds checks.
    Eof,
}

impl TokenKind {
    /// Short description used in "expected …, found …" messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Ident => "a name",
            TokenKind::LAngle => "`<`",
            TokenKind::RAngle => "`>`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Arrow => "`=>`",
            TokenKind::At => "`@`",
            TokenKind::Equals => "`=`",
            TokenKind::String => "a quoted string",
            TokenKind::Eof => "end of input",
        }
    }
}

/// Represents a **single lexical token** produced by the lexer.
///
/// # Example Tokens
/// ```text
/// java.util.UUID  →  { kind: Ident,  lexeme: "java.util.UUID", span: 0..14 }
/// =>              →  { kind: Arrow,  lexeme: "=>",             span: 15..17 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Character position of the token inside the expression.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**: only its lexeme, or
    /// "end of input" for the `EOF` marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            _ => write!(f, "{}", self.lexeme),
        }
    }
}
