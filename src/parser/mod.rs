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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens, …)` entry point
/// - Rejects trailing input
pub mod parser;

/// Mapping grammar:
/// - source type and format
/// - `=>` target type with (nested) generic arguments
/// - `@` annotation with its parameter list
pub mod expressions;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - required-token consumption
pub mod helpers;

/// Shape rules for qualified names, formats and parameter names.
pub mod names;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::parse;
