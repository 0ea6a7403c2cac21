/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:      classifier.rs
 * Purpose:   Turns a parsed expression into its `Mapping` and decides the
 *            mapping kind.
 *
 *   "@" clause                          → ANNOTATE
 *   "=>" clause with generic arguments  → MAP
 *   "=>" clause without                 → TYPE
 *
 * All validation has happened in the parser, so classification cannot fail.
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

use crate::ast::{Clause, MappingExpr, Param};
use crate::mapping::{Annotation, AnnotationParameter, AnnotationParameters, Mapping, SourceType};

/// Builds the `Mapping` for a validated expression.
pub fn classify(expr: MappingExpr) -> Mapping {
    let MappingExpr { source, clause } = expr;

    let mapping = match clause {
        Clause::Annotate { annotation, params } => Mapping::new_annotate(
            source.name.text,
            Annotation::new(annotation.text, parameters(params)),
        ),

        Clause::Map { target } => {
            let source = SourceType::new(source.name.text, source.format.map(|f| f.text));

            if target.arguments.is_empty() {
                Mapping::new_type(source, target.name.text)
            } else {
                let generics = target.arguments.iter().map(ToString::to_string).collect();
                Mapping::new_map(source, target.name.text, generics)
            }
        }
    };

    tracing::debug!(
        kind = %mapping.kind(),
        source = mapping.source_type(),
        "classified mapping expression"
    );

    mapping
}

fn parameters(params: Vec<Param>) -> AnnotationParameters {
    AnnotationParameters::from_unique(
        params
            .into_iter()
            .map(|p| AnnotationParameter::new(p.name.unwrap_or_default(), p.value.text().to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::lexer::tokenize;
    use crate::mapping::Kind;
    use crate::parser::parse;

    fn classify_str(source: &str) -> Mapping {
        let expr = parse(tokenize(source).unwrap(), source, &ParserConfig::default()).unwrap();
        classify(expr)
    }

    #[test]
    fn kind_follows_clause_and_generics() {
        assert_eq!(classify_str("a => b").kind(), Kind::Type);
        assert_eq!(classify_str("a => b<c>").kind(), Kind::Map);
        assert_eq!(classify_str("a @ b").kind(), Kind::Annotate);
    }

    #[test]
    fn nested_generic_arguments_become_text() {
        let mapping = classify_str("Foo => java.util.Map<java.lang.String,java.util.List<my.Foo>>");
        assert_eq!(
            mapping.target_generic_types(),
            ["java.lang.String".to_string(), "java.util.List<my.Foo>".to_string()]
        );
    }

    #[test]
    fn nested_arguments_are_written_without_blanks() {
        let mapping = classify_str("Foo => java.util.Map<my.Key, java.util.Map<my.A,  my.B>>");
        assert_eq!(
            mapping.target_generic_types(),
            ["my.Key".to_string(), "java.util.Map<my.A,my.B>".to_string()]
        );
    }

    #[test]
    fn positional_parameter_has_empty_name() {
        let mapping = classify_str("Foo @ io.Ann(42)");
        let parameters = mapping.annotation().unwrap().parameters();
        assert_eq!(parameters.get(""), Some("42"));
        assert!(parameters.as_slice()[0].is_positional());
    }
}
