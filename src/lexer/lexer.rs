/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Turns a raw mapping expression into a token stream.
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

use crate::error::{MappingError, Result};
use crate::lexer::alphabet::{is_blank, is_ident_char, is_quote};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

pub struct Lexer<'src> {
    source: &'src str,
    chars: Vec<char>,
    current: usize,
    pub tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over one mapping expression.
    ///
    /// # Parameters
    /// - `source`: The raw expression, e.g. `string(uuid) => java.util.UUID`.
    ///
    /// # Returns
    /// A lexer with the cursor at offset `0` and an empty token buffer.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            current: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the expression.
    ///
    /// # Behavior
    /// - Skips whitespace between tokens
    /// - Emits structured `Token` values with character spans
    /// - Guarantees a terminating `TokenKind::Eof` marker
    ///
    /// # Errors
    /// A `Lex` error at the first character outside the alphabet or at the
    /// opening quote of an unterminated string literal. Scanning stops at
    /// the first error.
    pub fn scan_tokens(&mut self) -> Result<()> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, "", Span::point(self.current)));

        Ok(())
    }

    /// Scans and emits a single token.
    ///
    /// Structural characters are single-character tokens except `=`, which
    /// becomes `=>` when followed by `>`.
    fn scan_token(&mut self) -> Result<()> {
        let start = self.current;
        let ch = self.advance();

        match ch {
            c if is_blank(c) => {}

            '<' => self.push(TokenKind::LAngle, start),
            '>' => self.push(TokenKind::RAngle, start),
            '(' => self.push(TokenKind::LParen, start),
            ')' => self.push(TokenKind::RParen, start),
            ',' => self.push(TokenKind::Comma, start),
            '@' => self.push(TokenKind::At, start),

            '=' => {
                if self.match_char('>') {
                    self.push(TokenKind::Arrow, start);
                } else {
                    self.push(TokenKind::Equals, start);
                }
            }

            c if is_quote(c) => self.string_with_delimiter(c, start)?,

            c if is_ident_char(c) => self.identifier(start),

            other => {
                return Err(MappingError::lex(
                    format!("unexpected character `{}`", other),
                    self.source,
                    Span::new(start, 1),
                ));
            }
        }

        Ok(())
    }

    /// Scans a quoted literal opened by `delimiter`.
    ///
    /// A backslash escapes the character after it, so `\"` and `\\` never
    /// close the literal. The lexeme keeps quotes and escapes verbatim.
    ///
    /// # Errors
    /// `Lex` if the input ends before the closing delimiter.
    fn string_with_delimiter(&mut self, delimiter: char, start: usize) -> Result<()> {
        loop {
            if self.is_at_end() {
                return Err(MappingError::lex(
                    "unterminated string literal",
                    self.source,
                    Span::new(start, self.current - start),
                )
                .with_help(format!("close the literal with {}", delimiter)));
            }

            match self.advance() {
                '\\' => {
                    if !self.is_at_end() {
                        self.advance();
                    }
                }
                c if c == delimiter => break,
                _ => {}
            }
        }

        self.push(TokenKind::String, start);
        Ok(())
    }

    /// Scans an identifier run (see [`is_ident_char`]).
    fn identifier(&mut self, start: usize) {
        while is_ident_char(self.peek()) {
            self.advance();
        }

        self.push(TokenKind::Ident, start);
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        let lexeme: String = self.chars[start..self.current].iter().collect();

        self.tokens
            .push(Token::new(kind, lexeme, Span::new(start, self.current - start)));
    }

    /// Conditionally consumes the next character.
    ///
    /// # Returns
    /// - `true` if the next character matched and was consumed
    /// - `false` otherwise
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Advances the cursor by one character.
    ///
    /// Caller must ensure the end has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Returns the current character without consuming it, or `'\0'` at
    /// the end of input.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
