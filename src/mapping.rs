/*
 * ==========================================================================
 * MAPPING-DSL - Type mapping expressions for API code generators
 * ==========================================================================
 *
 * File:      mapping.rs
 * Purpose:   The immutable result of parsing one mapping expression.
 *
 * A mapping is one of three shapes:
 *
 *   TYPE      string(uuid) => java.util.UUID
 *   MAP       Foo => java.util.List<my.pkg.Foo>
 *   ANNOTATE  Foo @ io.foo.Ann(name = value, max = 10)
 *
 * Each shape only carries the fields that are meaningful for it, so an
 * annotation on a TYPE mapping or a MAP mapping without generic arguments
 * cannot be constructed.
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

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::parser::names::PACKAGE_PLACEHOLDER;

/// Three-way classification of a parsed mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Type,
    Map,
    Annotate,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Type => "TYPE",
            Kind::Map => "MAP",
            Kind::Annotate => "ANNOTATE",
        })
    }
}

/// The description-level type being overridden, with its optional format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceType {
    name: String,
    format: Option<String>,
}

impl SourceType {
    pub(crate) fn new(name: String, format: Option<String>) -> Self {
        Self { name, format }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.format {
            Some(format) => write!(f, "{}({})", self.name, format),
            None => f.write_str(&self.name),
        }
    }
}

/// One `name = value` pair of an annotation.
///
/// `value` is the literal text from the expression. Quoted values keep
/// their quotes and escape sequences (`"a, b"` is stored as the six
/// characters `"a, b"`) so they can be pasted into generated source as is.
/// The positional form `io.Ann(42)` has an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnnotationParameter {
    name: String,
    value: String,
}

impl AnnotationParameter {
    pub(crate) fn new(name: String, value: String) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// True for the single unnamed value form.
    pub fn is_positional(&self) -> bool {
        self.name.is_empty()
    }

    pub fn is_quoted(&self) -> bool {
        let mut chars = self.value.chars();
        match (chars.next(), chars.next_back()) {
            (Some(open), Some(close)) => open == close && matches!(open, '"' | '\''),
            _ => false,
        }
    }

    /// The value with quotes removed and escapes resolved.
    ///
    /// Bare values are returned unchanged.
    pub fn unquoted(&self) -> String {
        if !self.is_quoted() {
            return self.value.clone();
        }

        let inner = &self.value[1..self.value.len() - 1];
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();

        while let Some(ch) = chars.next() {
            if ch == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else {
                out.push(ch);
            }
        }

        out
    }
}

impl fmt::Display for AnnotationParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_positional() {
            f.write_str(&self.value)
        } else {
            write!(f, "{}={}", self.name, self.value)
        }
    }
}

/// Annotation parameters in the order they were written.
///
/// Order decides how the parameters are rendered in generated code, so this
/// is an association list rather than a hash map. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct AnnotationParameters(Vec<AnnotationParameter>);

impl AnnotationParameters {
    /// Builds the list; the parser guarantees the names are unique.
    pub(crate) fn from_unique(parameters: Vec<AnnotationParameter>) -> Self {
        Self(parameters)
    }

    /// Looks up a value by parameter name (`""` for the positional value).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotationParameter> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[AnnotationParameter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnnotationParameters {
    type Item = &'a AnnotationParameter;
    type IntoIter = std::slice::Iter<'a, AnnotationParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An annotation to attach to emitted declarations of the source type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    type_name: String,
    parameters: AnnotationParameters,
}

impl Annotation {
    pub(crate) fn new(type_name: String, parameters: AnnotationParameters) -> Self {
        Self {
            type_name,
            parameters,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn parameters(&self) -> &AnnotationParameters {
        &self.parameters
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)?;

        if !self.parameters.is_empty() {
            f.write_str("(")?;
            for (i, parameter) in self.parameters.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", parameter)?;
            }
            f.write_str(")")?;
        }

        Ok(())
    }
}

/// `source => target`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeMapping {
    source: SourceType,
    target_type: String,
}

impl TypeMapping {
    pub fn source(&self) -> &SourceType {
        &self.source
    }

    pub fn target_type(&self) -> &str {
        &self.target_type
    }
}

/// `source => target<A, B>`, with at least one generic argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MapMapping {
    source: SourceType,
    target_type: String,
    target_generic_types: Vec<String>,
}

impl MapMapping {
    pub fn source(&self) -> &SourceType {
        &self.source
    }

    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    /// Generic arguments in source order. Nested arguments are kept as
    /// their canonical text, e.g. `java.util.List<my.Foo>`.
    pub fn target_generic_types(&self) -> &[String] {
        &self.target_generic_types
    }
}

/// `source @ annotation(params)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnnotateMapping {
    source_type: String,
    annotation: Annotation,
}

impl AnnotateMapping {
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }
}

/// The result of parsing one mapping expression.
///
/// Built once by the classifier and never mutated afterwards. Equality is
/// by value. The flat accessors (`target_type`, `annotation_type`, …)
/// return `None` or an empty slice for fields the kind does not have.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mapping {
    Type(TypeMapping),
    Map(MapMapping),
    Annotate(AnnotateMapping),
}

impl Mapping {
    pub(crate) fn new_type(source: SourceType, target_type: String) -> Self {
        Mapping::Type(TypeMapping {
            source,
            target_type,
        })
    }

    /// Caller guarantees `target_generic_types` is non-empty.
    pub(crate) fn new_map(
        source: SourceType,
        target_type: String,
        target_generic_types: Vec<String>,
    ) -> Self {
        debug_assert!(!target_generic_types.is_empty());
        Mapping::Map(MapMapping {
            source,
            target_type,
            target_generic_types,
        })
    }

    pub(crate) fn new_annotate(source_type: String, annotation: Annotation) -> Self {
        Mapping::Annotate(AnnotateMapping {
            source_type,
            annotation,
        })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Mapping::Type(_) => Kind::Type,
            Mapping::Map(_) => Kind::Map,
            Mapping::Annotate(_) => Kind::Annotate,
        }
    }

    pub fn source_type(&self) -> &str {
        match self {
            Mapping::Type(m) => m.source.name(),
            Mapping::Map(m) => m.source.name(),
            Mapping::Annotate(m) => &m.source_type,
        }
    }

    pub fn source_format(&self) -> Option<&str> {
        match self {
            Mapping::Type(m) => m.source.format(),
            Mapping::Map(m) => m.source.format(),
            Mapping::Annotate(_) => None,
        }
    }

    pub fn target_type(&self) -> Option<&str> {
        match self {
            Mapping::Type(m) => Some(&m.target_type),
            Mapping::Map(m) => Some(&m.target_type),
            Mapping::Annotate(_) => None,
        }
    }

    pub fn target_generic_types(&self) -> &[String] {
        match self {
            Mapping::Map(m) => &m.target_generic_types,
            _ => &[],
        }
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        match self {
            Mapping::Annotate(m) => Some(&m.annotation),
            _ => None,
        }
    }

    pub fn annotation_type(&self) -> Option<&str> {
        self.annotation().map(Annotation::type_name)
    }

    pub fn annotation_parameters(&self) -> &[AnnotationParameter] {
        match self {
            Mapping::Annotate(m) => m.annotation.parameters.as_slice(),
            _ => &[],
        }
    }

    /// Returns a copy with every `{package-name}` placeholder in the target
    /// type, its generic arguments and the annotation type replaced by
    /// `package`.
    pub fn resolve_package(&self, package: &str) -> Mapping {
        let resolve = |text: &str| text.replace(PACKAGE_PLACEHOLDER, package);

        match self {
            Mapping::Type(m) => Mapping::Type(TypeMapping {
                source: m.source.clone(),
                target_type: resolve(&m.target_type),
            }),
            Mapping::Map(m) => Mapping::Map(MapMapping {
                source: m.source.clone(),
                target_type: resolve(&m.target_type),
                target_generic_types: m.target_generic_types.iter().map(|t| resolve(t)).collect(),
            }),
            Mapping::Annotate(m) => Mapping::Annotate(AnnotateMapping {
                source_type: m.source_type.clone(),
                annotation: Annotation {
                    type_name: resolve(&m.annotation.type_name),
                    parameters: m.annotation.parameters.clone(),
                },
            }),
        }
    }
}

impl fmt::Display for Mapping {
    /// Canonical expression text. Parsing it yields an equal `Mapping`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapping::Type(m) => write!(f, "{} => {}", m.source, m.target_type),
            Mapping::Map(m) => write!(
                f,
                "{} => {}<{}>",
                m.source,
                m.target_type,
                m.target_generic_types.join(", ")
            ),
            Mapping::Annotate(m) => write!(f, "{} @ {}", m.source_type, m.annotation),
        }
    }
}

fn bare_value_regex() -> &'static Regex {
    static BARE: OnceLock<Regex> = OnceLock::new();
    BARE.get_or_init(|| Regex::new(r"^[A-Za-z0-9._$\-{}]+$").expect("bare value pattern is valid"))
}

/// Whether a parameter value has to be written as a quoted literal.
///
/// A value may be written bare only when it is non-empty and consists of
/// identifier characters (letters, digits, `.`, `_`, `$`, `-`, `{`, `}`).
/// Anything else, in particular a comma, a parenthesis or whitespace,
/// requires quotes.
pub fn needs_quoting(value: &str) -> bool {
    !bare_value_regex().is_match(value)
}

/// Writes `value` the way it has to appear in an expression: bare when the
/// quoting rule allows it, otherwise double-quoted with `\` and `"` escaped.
pub fn quote_if_needed(value: &str) -> String {
    if !needs_quoting(value) {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> AnnotationParameters {
        AnnotationParameters::from_unique(
            pairs
                .iter()
                .map(|(n, v)| AnnotationParameter::new(n.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn type_mapping_has_no_annotation_fields() {
        let mapping = Mapping::new_type(
            SourceType::new("string".into(), Some("uuid".into())),
            "java.util.UUID".into(),
        );

        assert_eq!(mapping.kind(), Kind::Type);
        assert_eq!(mapping.source_format(), Some("uuid"));
        assert!(mapping.target_generic_types().is_empty());
        assert_eq!(mapping.annotation_type(), None);
        assert!(mapping.annotation_parameters().is_empty());
        assert_eq!(mapping.to_string(), "string(uuid) => java.util.UUID");
    }

    #[test]
    fn annotate_mapping_renders_parameters_in_order() {
        let mapping = Mapping::new_annotate(
            "Foo".into(),
            Annotation::new("io.foo.Ann".into(), params(&[("name", "value"), ("max", "10")])),
        );

        assert_eq!(mapping.target_type(), None);
        assert_eq!(mapping.to_string(), "Foo @ io.foo.Ann(name=value, max=10)");
        let names: Vec<_> = mapping.annotation().unwrap().parameters().names().collect();
        assert_eq!(names, vec!["name", "max"]);
    }

    #[test]
    fn unquoted_resolves_escapes() {
        let p = AnnotationParameter::new("pattern".into(), r#"".*\\.\\\\""#.into());
        assert!(p.is_quoted());
        assert_eq!(p.unquoted(), r".*\.\\");

        let bare = AnnotationParameter::new("max".into(), "10".into());
        assert!(!bare.is_quoted());
        assert_eq!(bare.unquoted(), "10");
    }

    #[test]
    fn single_quote_character_is_not_a_quoted_value() {
        let p = AnnotationParameter::new("x".into(), "\"".into());
        assert!(!p.is_quoted());
    }

    #[test]
    fn quoting_rule() {
        for bare in ["10", "true", "value", "-1", "1.5", "a.b"] {
            assert!(!needs_quoting(bare), "{bare} may be bare");
        }
        for quoted in ["a,b", "f(x)", "two words", "", "a=b", "List<X>", "x\"y", "a#b", "c:\\"] {
            assert!(needs_quoting(quoted), "{quoted:?} must be quoted");
        }

        assert_eq!(quote_if_needed("10"), "10");
        assert_eq!(quote_if_needed(r#"say "hi""#), r#""say \"hi\"""#);
    }

    #[test]
    fn resolve_package_touches_targets_only() {
        let mapping = Mapping::new_map(
            SourceType::new("Foo".into(), None),
            "{package-name}.Wrapper".into(),
            vec!["{package-name}.Foo".into()],
        );

        let resolved = mapping.resolve_package("io.gen");
        assert_eq!(resolved.target_type(), Some("io.gen.Wrapper"));
        assert_eq!(resolved.target_generic_types(), ["io.gen.Foo".to_string()]);
        assert_eq!(mapping.target_type(), Some("{package-name}.Wrapper"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let mapping = Mapping::new_type(SourceType::new("string".into(), None), "java.lang.String".into());
        let json = serde_json::to_value(&mapping).unwrap();
        assert_eq!(json["kind"], "TYPE");
        assert_eq!(json["target_type"], "java.lang.String");
        assert_eq!(json["source"]["name"], "string");
    }
}
