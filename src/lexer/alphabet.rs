/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:      alphabet.rs
 * Purpose:   Character classes of the mapping expression language.
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

/// Determines whether a character may appear inside an identifier run.
///
/// The run is deliberately wider than a qualified name: `-` is needed for
/// formats such as `date-time` and negative bare values, and `{` / `}` for
/// the `{package-name}` placeholder. Whether a run is a *valid* name is
/// decided by the parser, which reports `MalformedName` instead of a
/// lexical error.
///
/// # Examples
/// ```text
/// java.util.List    -> identifier run
/// date-time         -> identifier run
/// {package-name}    -> identifier run
/// <  >  ,           -> structural, not identifier
/// ```
pub fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '$' | '-' | '{' | '}')
}

/// Quote characters that open a string literal.
pub fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'')
}

/// Whitespace between tokens. Only significant inside string literals.
///
/// ASCII only: a non-breaking space or other Unicode blank outside a
/// literal is a lexical error.
pub fn is_blank(ch: char) -> bool {
    ch.is_ascii_whitespace()
}
