/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:     expr.rs
 * Purpose:  AST nodes for one mapping expression
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

use std::fmt;

use crate::ast::Param;
use crate::span::Span;

/// A validated dotted name such as `java.util.List` or `{package-name}.Foo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub text: String,
}

/// `string(uuid)` → name `string`, format `uuid`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceType {
    pub name: QualifiedName,
    pub format: Option<Format>,
}

/// Format suffix of a source type, without the parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub text: String,

    /// Span of the opening `(`.
    pub open: Span,
}

/// `java.util.Map<java.lang.String, my.Bar>`
///
/// Arguments are themselves target types, so nested generics keep their
/// structure until the classifier flattens them to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetType {
    pub name: QualifiedName,
    pub arguments: Vec<TargetType>,
}

impl fmt::Display for TargetType {
    /// Canonical text: `name` or `name<arg,arg>`, without blanks, the way
    /// generated sources spell nested generics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.text)?;

        if !self.arguments.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }

        Ok(())
    }
}

/// What follows the source type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// `=> target`
    Map { target: TargetType },

    /// `@ annotation(params)`
    Annotate {
        annotation: QualifiedName,
        params: Vec<Param>,
    },
}

/// Root node: `source_type ( map_clause | annotate_clause )`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingExpr {
    pub source: SourceType,
    pub clause: Clause,
}
