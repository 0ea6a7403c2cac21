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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire mapping grammar**:
 *
 *   mapping         → source_type ( map_clause | annotate_clause )
 *   source_type     → NAME ( "(" FORMAT ")" )?
 *   map_clause      → "=>" target_type
 *   annotate_clause → "@" NAME ( "(" param_list ")" )?
 *   target_type     → NAME ( "<" target_type ( "," target_type )* ">" )?
 *   param_list      → param ( "," param )*
 *   param           → NAME "=" value | value
 *   value           → STRING | IDENT
 *
 * The token after the source type (`=>` or `@`) selects the clause.
 * Every rule fails at the first violation.
 *
 * ==========================================================================
 */

use crate::ast::{Clause, Format, MappingExpr, Param, ParamValue, QualifiedName, SourceType, TargetType};
use crate::error::{MappingError, Result};
use crate::lexer::token::TokenKind;
use crate::parser::names::{check_qualified_name, is_format, is_parameter_name};
use crate::parser::parser::Parser;
use crate::span::Span;

impl<'a> Parser<'a> {
    /// mapping → source_type ( map_clause | annotate_clause )
    pub fn mapping(&mut self) -> Result<MappingExpr> {
        let source = self.source_type()?;

        let clause = match self.peek().kind {
            TokenKind::Arrow => {
                self.advance();
                Clause::Map {
                    target: self.target_type(0)?,
                }
            }

            TokenKind::At => {
                if let Some(format) = &source.format {
                    return Err(MappingError::unexpected_token(
                        "a source format is only allowed on `=>` mappings",
                        self.expression,
                        format.open,
                    )
                    .with_help("drop the `(format)` suffix from the annotated type"));
                }

                self.advance();
                self.annotate_clause()?
            }

            _ => return Err(self.expected("`=>` or `@`")),
        };

        Ok(MappingExpr { source, clause })
    }

    /// source_type → NAME ( "(" FORMAT ")" )?
    fn source_type(&mut self) -> Result<SourceType> {
        let name = self.qualified_name("a source type")?;

        let format = if self.check(TokenKind::LParen) {
            let open = self.advance().span;
            let token = self.consume(TokenKind::Ident, "a format")?;

            if !is_format(&token.lexeme) {
                return Err(MappingError::malformed_name(
                    format!("`{}` is not a valid format", token.lexeme),
                    self.expression,
                    token.span,
                ));
            }

            self.consume(TokenKind::RParen, "`)` after the format")?;

            Some(Format {
                text: token.lexeme,
                open,
            })
        } else {
            None
        };

        Ok(SourceType { name, format })
    }

    /// target_type → NAME ( "<" target_type ( "," target_type )* ">" )?
    ///
    /// `depth` is the number of generic argument lists enclosing this type.
    fn target_type(&mut self, depth: usize) -> Result<TargetType> {
        let name = self.qualified_name("a target type")?;
        let mut arguments = Vec::new();

        if self.check(TokenKind::LAngle) {
            let open = self.advance().span;
            let level = depth + 1;

            if level > self.config.max_nesting_depth {
                return Err(MappingError::nesting_too_deep(
                    self.config.max_nesting_depth,
                    self.expression,
                    open,
                ));
            }

            if self.check(TokenKind::RAngle) {
                let close = self.peek().span;
                return Err(MappingError::empty_generic_args(
                    self.expression,
                    Span::new(open.offset, close.end() - open.offset),
                ));
            }

            loop {
                arguments.push(self.target_type(level)?);

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }

            self.consume(TokenKind::RAngle, "`,` or `>` in the generic argument list")?;
        }

        Ok(TargetType { name, arguments })
    }

    /// annotate_clause → "@" NAME ( "(" param_list ")" )?
    ///
    /// The `@` has already been consumed.
    fn annotate_clause(&mut self) -> Result<Clause> {
        let annotation = self.qualified_name("an annotation type")?;
        let mut params = Vec::new();

        if self.match_kind(TokenKind::LParen) {
            params = self.param_list()?;
            self.consume(TokenKind::RParen, "`,` or `)` after the annotation parameters")?;
        }

        Ok(Clause::Annotate { annotation, params })
    }

    /// param_list → param ( "," param )*
    ///
    /// Keeps the parameters in source order and rejects repeated names.
    fn param_list(&mut self) -> Result<Vec<Param>> {
        let mut params: Vec<Param> = Vec::new();

        loop {
            let param = self.param(params.is_empty())?;

            if params.iter().any(|p| p.name == param.name) {
                let name = param.name.as_deref().unwrap_or("");
                return Err(MappingError::duplicate_parameter(
                    name,
                    self.expression,
                    param.span,
                ));
            }

            params.push(param);

            if !self.match_kind(TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }

    /// param → NAME "=" value | value
    ///
    /// The positional form is only accepted as the sole parameter.
    fn param(&mut self, first: bool) -> Result<Param> {
        if self.check(TokenKind::Ident) && self.peek_next().kind == TokenKind::Equals {
            let token = self.advance();

            if !is_parameter_name(&token.lexeme) {
                return Err(MappingError::malformed_name(
                    format!("`{}` is not a valid parameter name", token.lexeme),
                    self.expression,
                    token.span,
                ));
            }

            self.advance();
            let value = self.value()?;

            return Ok(Param {
                name: Some(token.lexeme),
                value,
                span: token.span,
            });
        }

        let span = self.peek().span;
        let value = self.value()?;

        let alone = first && self.check(TokenKind::RParen);
        if !alone || !self.config.allow_unnamed_parameter {
            return Err(MappingError::unexpected_token(
                format!("expected `name = value`, found `{}`", value.text()),
                self.expression,
                span,
            )
            .with_help("a value without a name is only allowed as the single parameter"));
        }

        Ok(Param {
            name: None,
            value,
            span,
        })
    }

    /// value → STRING | IDENT
    fn value(&mut self) -> Result<ParamValue> {
        match self.peek().kind {
            TokenKind::String => Ok(ParamValue::Quoted(self.advance().lexeme)),
            TokenKind::Ident => Ok(ParamValue::Bare(self.advance().lexeme)),
            _ => Err(self.expected("a parameter value")),
        }
    }

    /// Consumes an identifier run and checks it is a well-formed dotted name.
    fn qualified_name(&mut self, what: &str) -> Result<QualifiedName> {
        let token = self.consume(TokenKind::Ident, what)?;

        if let Err(reason) = check_qualified_name(&token.lexeme) {
            return Err(MappingError::malformed_name(reason, self.expression, token.span));
        }

        Ok(QualifiedName { text: token.lexeme })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Clause, ParamValue};
    use crate::config::ParserConfig;
    use crate::error::ErrorKind;
    use crate::lexer::tokenize;
    use crate::parser::parse;
    use crate::span::Span;

    fn parse_str(source: &str) -> crate::error::Result<crate::ast::MappingExpr> {
        parse(tokenize(source)?, source, &ParserConfig::default())
    }

    #[test]
    fn map_clause_with_nested_generics() {
        let expr = parse_str("Foo => java.util.Map<String, java.util.List<my.Foo>>").unwrap();
        match expr.clause {
            Clause::Map { target } => {
                assert_eq!(target.name.text, "java.util.Map");
                assert_eq!(target.arguments.len(), 2);
                assert_eq!(target.arguments[1].to_string(), "java.util.List<my.Foo>");
            }
            other => panic!("unexpected clause {:?}", other),
        }
    }

    #[test]
    fn positional_value_is_unnamed() {
        let expr = parse_str(r#"Foo @ io.Ann("42")"#).unwrap();
        match expr.clause {
            Clause::Annotate { params, .. } => {
                assert_eq!(params.len(), 1);
                assert_eq!(params[0].name, None);
                assert_eq!(params[0].value, ParamValue::Quoted("\"42\"".into()));
            }
            other => panic!("unexpected clause {:?}", other),
        }
    }

    #[test]
    fn positional_value_mixed_with_named_is_rejected() {
        let err = parse_str("Foo @ io.Ann(42, max=1)").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 13);

        let err = parse_str("Foo @ io.Ann(max=1, 42)").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 20);
    }

    #[test]
    fn positional_value_can_be_disabled() {
        let config = ParserConfig {
            allow_unnamed_parameter: false,
            ..ParserConfig::default()
        };
        let source = "Foo @ io.Ann(42)";
        let err = parse(tokenize(source).unwrap(), source, &config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    }

    #[test]
    fn format_before_annotation_is_rejected_at_the_paren() {
        let err = parse_str("string(uuid) @ io.Ann").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 6);
    }

    #[test]
    fn missing_clause() {
        let err = parse_str("Foo").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.message, "expected `=>` or `@`, found end of input");
        assert_eq!(err.offset(), 3);
    }

    #[test]
    fn missing_closing_paren_after_parameters() {
        let err = parse_str("Foo @ io.Ann(a=1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.offset(), 16);
    }

    #[test]
    fn empty_parameter_list_is_rejected() {
        let err = parse_str("Foo @ io.Ann()").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
    }

    #[test]
    fn nesting_limit() {
        let config = ParserConfig {
            max_nesting_depth: 2,
            ..ParserConfig::default()
        };

        let ok = "F => A<B<C>>";
        assert!(parse(tokenize(ok).unwrap(), ok, &config).is_ok());

        let deep = "F => A<B<C<D>>>";
        let err = parse(tokenize(deep).unwrap(), deep, &config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NestingTooDeep);
        assert_eq!(err.offset(), 10);
    }

    #[test]
    fn empty_generic_span_covers_both_angles() {
        let err = parse_str("Bar => Foo<>").unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyGenericArgs);
        assert_eq!(err.span, Span::new(10, 2));
    }

    #[test]
    fn malformed_parameter_name() {
        let err = parse_str("Foo @ io.Ann(a.b=1)").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedName);
    }
}
