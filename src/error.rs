/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   Structured errors returned by the tokenizer and the parser.
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

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::span::Span;

/// Result alias used by every fallible operation of the crate.
pub type Result<T> = std::result::Result<T, MappingError>;

/// The category of a failed parse.
///
/// Every variant is terminal for the expression being parsed; nothing is
/// retried or recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Character outside the alphabet, or an unterminated string literal.
    Lex,

    /// A qualified name, format or parameter name with invalid syntax
    /// (`a..b`, `.Foo`, `Foo.`, `1abc`).
    MalformedName,

    /// Grammar violation at a parser decision point.
    UnexpectedToken,

    /// `Foo<>`
    EmptyGenericArgs,

    /// Same annotation parameter name given twice.
    DuplicateParameter,

    /// Tokens left over after a complete expression.
    TrailingInput,

    /// Generic argument lists nested deeper than the configured bound.
    NestingTooDeep,
}

impl ErrorKind {
    /// Stable error code (M0001, M0002, …)
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Lex => "M0001",
            ErrorKind::MalformedName => "M0002",
            ErrorKind::UnexpectedToken => "M0003",
            ErrorKind::EmptyGenericArgs => "M0004",
            ErrorKind::DuplicateParameter => "M0005",
            ErrorKind::TrailingInput => "M0006",
            ErrorKind::NestingTooDeep => "M0007",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Lex => "LexError",
            ErrorKind::MalformedName => "MalformedNameError",
            ErrorKind::UnexpectedToken => "UnexpectedTokenError",
            ErrorKind::EmptyGenericArgs => "EmptyGenericArgsError",
            ErrorKind::DuplicateParameter => "DuplicateParameterError",
            ErrorKind::TrailingInput => "TrailingInputError",
            ErrorKind::NestingTooDeep => "NestingTooDeepError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failed mapping expression.
///
/// Carries everything a collaborator needs to report the failure: the
/// original expression, where in it the problem was found and what kind of
/// problem it is. Rendering is left to the caller (see
/// [`DiagnosticPrinter`](crate::diagnostics::DiagnosticPrinter)).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}[{code}]: {message} (at offset {offset} in `{expression}`)", code = .kind.code(), offset = .span.offset)]
pub struct MappingError {
    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// The expression that failed to parse, verbatim.
    pub expression: String,

    /// Primary location inside `expression`
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl MappingError {
    /// Generic constructor
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        expression: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            expression: expression.into(),
            span,
            help: None,
        }
    }

    pub fn lex(message: impl Into<String>, expression: &str, span: Span) -> Self {
        Self::new(ErrorKind::Lex, message, expression, span)
    }

    pub fn malformed_name(message: impl Into<String>, expression: &str, span: Span) -> Self {
        Self::new(ErrorKind::MalformedName, message, expression, span)
    }

    pub fn unexpected_token(message: impl Into<String>, expression: &str, span: Span) -> Self {
        Self::new(ErrorKind::UnexpectedToken, message, expression, span)
    }

    pub fn empty_generic_args(expression: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::EmptyGenericArgs,
            "generic argument list is empty",
            expression,
            span,
        )
        .with_help("remove the `<>` or name at least one type argument")
    }

    pub fn duplicate_parameter(name: &str, expression: &str, span: Span) -> Self {
        let message = if name.is_empty() {
            "annotation value given more than once".to_string()
        } else {
            format!("annotation parameter `{}` given more than once", name)
        };

        Self::new(ErrorKind::DuplicateParameter, message, expression, span)
    }

    pub fn trailing_input(found: &str, expression: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::TrailingInput,
            format!("unexpected `{}` after a complete mapping", found),
            expression,
            span,
        )
    }

    pub fn nesting_too_deep(limit: usize, expression: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::NestingTooDeep,
            format!("generic arguments nested deeper than {} levels", limit),
            expression,
            span,
        )
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Character offset of the offending input.
    pub fn offset(&self) -> usize {
        self.span.offset
    }
}
