/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * Parses the mapping expressions a user writes to override how an API code
 * generator maps description-level types onto emitted types:
 *
 *   string(uuid) => java.util.UUID            TYPE
 *   Foo => java.util.List<my.pkg.Foo>         MAP
 *   Foo @ io.foo.Ann(name = value, max = 10)  ANNOTATE
 *
 * Expression → lexer → tokens → parser → AST → classifier → Mapping
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

pub mod ast;
pub mod classifier;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod mapping;
pub mod parser;
pub mod scope;
pub mod span;

pub use config::{ConfigError, ParserConfig};
pub use diagnostics::DiagnosticPrinter;
pub use error::{ErrorKind, MappingError, Result};
pub use mapping::{
    needs_quoting, quote_if_needed, AnnotateMapping, Annotation, AnnotationParameter,
    AnnotationParameters, Kind, MapMapping, Mapping, SourceType, TypeMapping,
};
pub use scope::{Scope, ScopedMapping};
pub use span::Span;

/// Parses mapping expressions with a fixed configuration.
///
/// Holds no state between calls: every expression is parsed on its own, so
/// one parser can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct MappingParser {
    config: ParserConfig,
}

impl MappingParser {
    /// Validates `config` before accepting it, so a configuration built in
    /// code obeys the same rules as one loaded with
    /// [`ParserConfig::from_json`].
    pub fn new(config: ParserConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses and classifies one expression.
    ///
    /// When the configuration names a package, `{package-name}`
    /// placeholders are resolved before the mapping is returned.
    pub fn parse(&self, expression: &str) -> Result<Mapping> {
        let tokens = lexer::tokenize(expression)?;
        let expr = parser::parse(tokens, expression, &self.config)?;
        let mapping = classifier::classify(expr);

        match &self.config.package_name {
            Some(package) => {
                tracing::debug!(package = %package, "resolving package placeholder");
                Ok(mapping.resolve_package(package))
            }
            None => Ok(mapping),
        }
    }

    /// Parses one expression and attaches the caller's scope untouched.
    pub fn parse_scoped(&self, expression: &str, scope: Scope) -> Result<ScopedMapping> {
        let mapping = self.parse(expression)?;
        Ok(ScopedMapping { scope, mapping })
    }

    /// Parses a batch of expressions independently.
    ///
    /// One result per input, in input order. A failing expression does not
    /// affect the others; whether it aborts the run is the caller's call.
    pub fn parse_many<'e, I>(&self, expressions: I) -> Vec<Result<Mapping>>
    where
        I: IntoIterator<Item = &'e str>,
    {
        expressions.into_iter().map(|e| self.parse(e)).collect()
    }
}

/// Parses one expression with the default configuration.
pub fn parse_mapping(expression: &str) -> Result<Mapping> {
    MappingParser::default().parse(expression)
}

/// Parses one expression with the default configuration and tags it with
/// `scope`.
pub fn parse_scoped(expression: &str, scope: Scope) -> Result<ScopedMapping> {
    MappingParser::default().parse_scoped(expression, scope)
}
