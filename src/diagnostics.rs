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

use crate::error::MappingError;

/// Renders compiler-style diagnostics for failed mapping expressions.
///
/// The core only returns [`MappingError`] values; this printer is a
/// convenience for the configuration loader that decides to show them.
///
/// # Output Example
/// ```text
/// error[M0005]: annotation parameter `name` given more than once
///   --> mapping.yaml:1:25
///    |
///  1 | Foo @ io.foo.Ann(name=1,name=2)
///    |                         ^^^^
/// ```
pub struct DiagnosticPrinter {
    /// Where the expression came from (file name, config key, …).
    ///
    /// Used only for display purposes.
    origin: String,
}

impl DiagnosticPrinter {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    /// Formats an error into a multi-line diagnostic.
    pub fn render(&self, error: &MappingError) -> String {
        let (line, column) = line_and_column(&error.expression, error.span.offset);
        let src_line = error.expression.lines().nth(line - 1).unwrap_or("");

        let underline = format!("{}{}", " ".repeat(column), "^".repeat(error.span.len.max(1)));

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n   |\n{:>3} | {}\n   | {}\n",
            error.kind.code(),
            error.message,
            self.origin,
            line,
            column + 1,
            line,
            src_line,
            underline
        );

        if let Some(help) = &error.help {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &MappingError) {
        eprint!("{}", self.render(error));
    }
}

/// 1-based line and 0-based column of a character offset.
fn line_and_column(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 0;

    for ch in text.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }

    (line, column)
}
