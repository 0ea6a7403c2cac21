use mapping_dsl::{parse_mapping, parse_scoped, Kind, MappingParser, ParserConfig, Scope};

#[test]
fn test_plain_type_mapping() {
    let mapping = parse_mapping("string => java.lang.String").unwrap();

    assert_eq!(mapping.kind(), Kind::Type);
    assert_eq!(mapping.source_type(), "string");
    assert_eq!(mapping.source_format(), None);
    assert_eq!(mapping.target_type(), Some("java.lang.String"));
    assert!(mapping.target_generic_types().is_empty());
    assert_eq!(mapping.annotation_type(), None);
}

#[test]
fn test_type_mapping_with_format() {
    let mapping = parse_mapping("string(uuid) => java.util.UUID").unwrap();

    assert_eq!(mapping.kind(), Kind::Type);
    assert_eq!(mapping.source_format(), Some("uuid"));
    assert_eq!(mapping.target_type(), Some("java.util.UUID"));
}

#[test]
fn test_format_with_dash() {
    let mapping = parse_mapping("string(date-time) => java.time.OffsetDateTime").unwrap();
    assert_eq!(mapping.source_format(), Some("date-time"));
}

#[test]
fn test_map_with_one_generic_argument() {
    let mapping = parse_mapping("Foo => java.util.List<my.pkg.Foo>").unwrap();

    assert_eq!(mapping.kind(), Kind::Map);
    assert_eq!(mapping.target_type(), Some("java.util.List"));
    assert_eq!(mapping.target_generic_types(), ["my.pkg.Foo".to_string()]);
}

#[test]
fn test_map_with_two_generic_arguments() {
    let mapping = parse_mapping("Bar => java.util.Map<java.lang.String,my.pkg.Bar>").unwrap();

    assert_eq!(mapping.kind(), Kind::Map);
    assert_eq!(mapping.target_type(), Some("java.util.Map"));
    assert_eq!(
        mapping.target_generic_types(),
        ["java.lang.String".to_string(), "my.pkg.Bar".to_string()]
    );
}

#[test]
fn test_whitespace_inside_generics_is_ignored() {
    let a = parse_mapping("SourceType => io.oap.TargetType <java.lang.String, java.lang.Integer>").unwrap();
    let b = parse_mapping("SourceType=>io.oap.TargetType<java.lang.String,java.lang.Integer>").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_annotate_without_parameters() {
    let mapping = parse_mapping("Foo @ io.foo.Ann").unwrap();

    assert_eq!(mapping.kind(), Kind::Annotate);
    assert_eq!(mapping.source_type(), "Foo");
    assert_eq!(mapping.target_type(), None);
    assert_eq!(mapping.annotation_type(), Some("io.foo.Ann"));
    assert!(mapping.annotation_parameters().is_empty());
}

#[test]
fn test_annotate_with_ordered_parameters() {
    let mapping = parse_mapping("Foo @ io.foo.Ann(name=value,max=10)").unwrap();

    assert_eq!(mapping.kind(), Kind::Annotate);
    assert_eq!(mapping.annotation_type(), Some("io.foo.Ann"));

    let pairs: Vec<_> = mapping
        .annotation_parameters()
        .iter()
        .map(|p| (p.name(), p.value()))
        .collect();
    assert_eq!(pairs, vec![("name", "value"), ("max", "10")]);
}

#[test]
fn test_parameter_order_is_source_order_not_sorted() {
    let mapping = parse_mapping("Foo @ io.Ann(z=1, a=2, m=3)").unwrap();
    let names: Vec<_> = mapping.annotation_parameters().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

#[test]
fn test_annotate_with_escaped_literal() {
    let mapping = parse_mapping(r#"Foo @ io.foo.Ann(pattern=".*\\.\\\\")"#).unwrap();

    let parameter = &mapping.annotation_parameters()[0];
    assert_eq!(parameter.name(), "pattern");
    assert_eq!(parameter.value(), r#"".*\\.\\\\""#);
    assert!(parameter.is_quoted());
    assert_eq!(parameter.unquoted(), r".*\.\\");
}

#[test]
fn test_quoted_values_keep_spaces_and_commas() {
    let mapping = parse_mapping(r#"Foo @ io.Ann(a = 42, bb = "foo, (bar)")"#).unwrap();
    let parameters = mapping.annotation().unwrap().parameters();

    assert_eq!(parameters.get("a"), Some("42"));
    assert_eq!(parameters.get("bb"), Some(r#""foo, (bar)""#));
}

#[test]
fn test_positional_annotation_value() {
    let mapping = parse_mapping("Foo @ io.oap.Annotation(42)").unwrap();
    let parameters = mapping.annotation().unwrap().parameters();

    assert_eq!(parameters.len(), 1);
    assert_eq!(parameters.get(""), Some("42"));
}

#[test]
fn test_package_placeholder_is_resolved_from_config() {
    let parser = MappingParser::new(ParserConfig::default().with_package_name("io.generated")).unwrap();
    let mapping = parser
        .parse("Foo => io.openapiprocessor.Foo<{package-name}.Bar>")
        .unwrap();

    assert_eq!(mapping.target_generic_types(), ["io.generated.Bar".to_string()]);
}

#[test]
fn test_package_placeholder_kept_without_config() {
    let mapping = parse_mapping("Foo => {package-name}.Foo").unwrap();
    assert_eq!(mapping.target_type(), Some("{package-name}.Foo"));
}

#[test]
fn test_scope_is_passed_through() {
    let scope = Scope::PathMethod {
        path: "/foo".to_string(),
        method: "get".to_string(),
    };
    let scoped = parse_scoped("Foo => io.Foo", scope.clone()).unwrap();

    assert_eq!(scoped.scope, scope);
    assert_eq!(scoped.mapping, parse_mapping("Foo => io.Foo").unwrap());
}

#[test]
fn test_parse_many_keeps_input_order() {
    let parser = MappingParser::default();
    let results = parser.parse_many(["a => b", "broken", "c @ d"]);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().kind(), Kind::Type);
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().kind(), Kind::Annotate);
}

#[test]
fn test_canonical_rendering() {
    let cases = [
        ("string => java.lang.String", "string => java.lang.String"),
        ("string(uuid)=>java.util.UUID", "string(uuid) => java.util.UUID"),
        ("Bar => java.util.Map<java.lang.String,my.pkg.Bar>", "Bar => java.util.Map<java.lang.String, my.pkg.Bar>"),
        ("Foo@io.foo.Ann( name = value , max = 10 )", "Foo @ io.foo.Ann(name=value, max=10)"),
        ("Foo @ io.Ann('x')", "Foo @ io.Ann('x')"),
    ];

    for (input, canonical) in cases {
        assert_eq!(parse_mapping(input).unwrap().to_string(), canonical, "{input}");
    }
}

#[test]
fn test_mapping_serializes_to_json() {
    let mapping = parse_mapping("Foo @ io.foo.Ann(name=value,max=10)").unwrap();
    let json = serde_json::to_value(&mapping).unwrap();

    assert_eq!(json["kind"], "ANNOTATE");
    assert_eq!(json["annotation"]["type"], "io.foo.Ann");
    assert_eq!(json["annotation"]["parameters"][0]["name"], "name");
    assert_eq!(json["annotation"]["parameters"][1]["value"], "10");
}

#[test]
fn test_parser_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MappingParser>();

    let parser = &MappingParser::default();
    let expressions = ["a => b", "Foo => java.util.List<my.Foo>", "c @ d(x=1)"];

    let kinds: Vec<Kind> = std::thread::scope(|s| {
        let handles: Vec<_> = expressions
            .iter()
            .map(|e| s.spawn(move || parser.parse(e).unwrap().kind()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(kinds, vec![Kind::Type, Kind::Map, Kind::Annotate]);
}
