/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * GitHub:   https://github.com/samwilcox/mapping-dsl
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

use crate::error::{MappingError, Result};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl<'a> Parser<'a> {
    /// Checks if the current token has the given kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Matches a token kind and consumes it.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required token or fails with `UnexpectedToken`.
    ///
    /// # Parameters
    /// - `kind`: The token kind the grammar requires here
    /// - `what`: How the expected input is named in the error message
    ///   (e.g. ``"`)` after the format"``)
    pub fn consume(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.expected(what))
        }
    }

    /// Builds the `UnexpectedToken` error for the current token.
    pub fn expected(&self, what: &str) -> MappingError {
        let token = self.peek();
        let found = match token.kind {
            TokenKind::Eof => token.kind.describe().to_string(),
            _ => format!("`{}`", token.lexeme),
        };

        MappingError::unexpected_token(
            format!("expected {}, found {}", what, found),
            self.expression,
            token.span,
        )
    }

    /// Advances one token forward and returns the consumed token.
    ///
    /// The cursor never moves past `Eof`; advancing at the end returns the
    /// `Eof` token again.
    pub fn advance(&mut self) -> Token {
        let t = self.tokens[self.current].clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        t
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the token after the current one (`Eof` when there is none).
    pub fn peek_next(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.current + 1).min(last)]
    }

    /// Returns true if the parser is at EOF.
    pub fn is_at_end(&self) -> bool {
        self.tokens[self.current].kind == TokenKind::Eof
    }
}
