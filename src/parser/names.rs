/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:      names.rs
 * Purpose:   Shape rules for the identifier runs produced by the lexer.
 *
 * The lexer hands over any run of identifier characters. Which runs are
 * acceptable depends on where they appear:
 *
 *   qualified name   java.util.List, {package-name}.Foo
 *   format           uuid, date-time, int64
 *   parameter name   max, value, $ref
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

use std::sync::OnceLock;

use regex::Regex;

/// Placeholder segment replaced by the generator's target package.
pub const PACKAGE_PLACEHOLDER: &str = "{package-name}";

fn segment_regex() -> &'static Regex {
    static SEGMENT: OnceLock<Regex> = OnceLock::new();
    SEGMENT.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z_$][A-Za-z0-9_$]*|\{package-name\})$")
            .expect("segment pattern is valid")
    })
}

fn format_regex() -> &'static Regex {
    static FORMAT: OnceLock<Regex> = OnceLock::new();
    FORMAT.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_$][A-Za-z0-9_$.\-]*$").expect("format pattern is valid")
    })
}

fn parameter_regex() -> &'static Regex {
    static PARAMETER: OnceLock<Regex> = OnceLock::new();
    PARAMETER.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("parameter pattern is valid")
    })
}

/// Checks a dotted type name.
///
/// # Returns
/// - `Ok(())` when every segment is an identifier or the package placeholder
/// - `Err(reason)` naming the first problem found
pub fn check_qualified_name(text: &str) -> Result<(), String> {
    if text.starts_with('.') {
        return Err(format!("type name `{}` starts with a dot", text));
    }
    if text.ends_with('.') {
        return Err(format!("type name `{}` ends with a dot", text));
    }
    if text.contains("..") {
        return Err(format!("type name `{}` contains consecutive dots", text));
    }

    match text.split('.').find(|segment| !segment_regex().is_match(segment)) {
        Some(segment) => Err(format!(
            "`{}` is not a valid segment of type name `{}`",
            segment, text
        )),
        None => Ok(()),
    }
}

pub fn is_format(text: &str) -> bool {
    format_regex().is_match(text)
}

pub fn is_parameter_name(text: &str) -> bool {
    parameter_regex().is_match(text)
}
