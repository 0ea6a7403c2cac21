/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
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

/// Character classes (identifier run, quotes, blanks).
pub mod alphabet;

/// The `Lexer` scanning state machine.
pub mod lexer;

/// `Token` and `TokenKind`.
pub mod token;

use crate::error::Result;
use lexer::Lexer;
use token::Token;

/// Tokenizes one mapping expression.
///
/// The returned stream always ends with a `TokenKind::Eof` token whose span
/// points just past the last character.
///
/// # Example
/// ```text
/// tokenize("Foo @ io.Ann(max=10)")
///   → Ident(Foo) At Ident(io.Ann) LParen Ident(max) Equals Ident(10) RParen Eof
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens()?;

    tracing::trace!(tokens = lexer.tokens.len(), "tokenized mapping expression");

    Ok(lexer.tokens)
}
