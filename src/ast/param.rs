/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:     param.rs
 * Purpose:  AST node for one annotation parameter
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

use crate::span::Span;

/// Represents **one parameter** of an annotation clause.
///
/// ```text
/// io.Ann(max = 10, pattern = "a,b")
///        ^^^^^^^^  ^^^^^^^^^^^^^^^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name, `None` for the single positional value form
    /// `io.Ann(42)`.
    pub name: Option<String>,

    pub value: ParamValue,

    /// Span of the name, or of the value when unnamed.
    pub span: Span,
}

/// Literal text of a parameter value, exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// `10`, `true`, `value`
    Bare(String),

    /// `"a, b"` including its quotes and escapes
    Quoted(String),
}

impl ParamValue {
    pub fn text(&self) -> &str {
        match self {
            ParamValue::Bare(text) | ParamValue::Quoted(text) => text,
        }
    }
}
