/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the `Parser` structure and the `parse()` driver that
 * turns the token stream of one mapping expression into a `MappingExpr`.
 *
 * The grammar itself is split across:
 * - `expressions.rs`  → the mapping grammar
 * - `helpers.rs`      → token matching, consumption and navigation
 * - `names.rs`        → validation of name-shaped tokens
 *
 * --------------------------------------------------------------------------
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

use crate::ast::MappingExpr;
use crate::config::ParserConfig;
use crate::error::{MappingError, Result};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// The recursive-descent parser for one mapping expression.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
/// - The expression text, so every error can quote it
///
/// The grammar is LL(1) at every decision point except the annotation
/// parameter, which peeks one token further to tell `name = value` from a
/// positional value. There is no backtracking.
pub struct Parser<'a> {
    /// Complete list of tokens, terminated by `Eof`.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub current: usize,

    pub(crate) expression: &'a str,
    pub(crate) config: &'a ParserConfig,
}

/// Parses a token stream into a mapping AST.
///
/// # Parameters
/// - `tokens`: The stream produced by [`tokenize`](crate::lexer::tokenize)
/// - `expression`: The source text the tokens came from
/// - `config`: Parser limits and switches
///
/// # Pipeline
/// ```text
/// Expression → Lexer → Tokens → Parser → MappingExpr → Classifier → Mapping
/// ```
pub fn parse(mut tokens: Vec<Token>, expression: &str, config: &ParserConfig) -> Result<MappingExpr> {
    if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
        let end = expression.chars().count();
        tokens.push(Token::new(TokenKind::Eof, "", Span::point(end)));
    }

    let mut parser = Parser {
        tokens,
        current: 0,
        expression,
        config,
    };
    parser.parse()
}

impl<'a> Parser<'a> {
    /// Parses one complete expression and requires the input to end there.
    ///
    /// # Errors
    /// Any grammar error from [`mapping`](Parser::mapping), or
    /// `TrailingInput` naming the first unconsumed token.
    pub fn parse(&mut self) -> Result<MappingExpr> {
        let expr = self.mapping()?;

        if !self.is_at_end() {
            let token = self.peek();
            return Err(MappingError::trailing_input(
                &token.lexeme,
                self.expression,
                token.span,
            ));
        }

        Ok(expr)
    }
}
