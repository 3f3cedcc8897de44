use number_scale::{
    prefixes, Error, FormatOptions, FormattedResult, ParseInput, PrefixTable, RoundMode,
    ScaleRegistry,
};

fn format(registry: &ScaleRegistry, num: f64, options: &FormatOptions) -> String {
    registry.format(num, options).unwrap().to_string()
}

#[test]
fn test_si_magnitudes() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new();

    assert_eq!(format(&registry, 1.0, &options), "1");
    assert_eq!(format(&registry, 999.0, &options), "999");
    assert_eq!(format(&registry, 1_000.0, &options), "1 k");
    assert_eq!(format(&registry, 2_500_000.0, &options), "2.50 M");
    assert_eq!(format(&registry, 7e9, &options), "7 G");
    assert_eq!(format(&registry, 3e24, &options), "3 Y");
    assert_eq!(format(&registry, 3e27, &options), "3000 Y");
}

#[test]
fn test_si_with_unit_suffix() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_unit("Hz");

    assert_eq!(format(&registry, 2_400_000_000.0, &options), "2.40 GHz");
    assert_eq!(format(&registry, 50.0, &options), "50 Hz");
    assert_eq!(format(&registry, 0.0, &options), "0 Hz");
}

#[test]
fn test_time_scale() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_scale("time");

    assert_eq!(format(&registry, 30.0, &options), "30 s");
    assert_eq!(format(&registry, 120.0, &options), "2 m");
    assert_eq!(format(&registry, 5_400.0, &options), "1.50 h");
    assert_eq!(format(&registry, 172_800.0, &options), "2 d");
}

#[test]
fn test_ieee1541_uses_decimal_steps() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_scale("IEEE1541").with_unit("B");

    assert_eq!(format(&registry, 1_000.0, &options), "1 KiB");
    assert_eq!(format(&registry, 1_024.0, &options), "1.03 KiB");
    assert_eq!(format(&registry, 5e9, &options), "5 GiB");
    assert_eq!(format(&registry, 512.0, &options), "512 B");

    let alias = options.with_scale("IEEE-1541");
    assert_eq!(format(&registry, 5e9, &alias), "5 GiB");
}

#[test]
fn test_round_mode_down_at_boundary() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_round_mode(RoundMode::Down);

    assert_eq!(format(&registry, 999_999.0, &options), "999.99 k");
    assert_eq!(
        format(&registry, 999_999.0, &FormatOptions::new()),
        "1000 k"
    );
}

#[test]
fn test_recursive_decomposition() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_scale("time").with_recursive(3);

    let result = registry.format(90_061.0, &options).unwrap();
    assert_eq!(result.fragments(), ["1 d", "1 h", "1 m", "1 s"]);
    assert_eq!(registry.parse(&result, &options).unwrap(), 90_061.0);
}

#[test]
fn test_recursive_exact_value_is_single() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_scale("time").with_recursive(3);

    let result = registry.format(3_600.0, &options).unwrap();
    assert_eq!(result, FormattedResult::Single("1 h".to_string()));
}

#[test]
fn test_recursive_budget_limits_fragments() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_scale("time").with_recursive(1);

    // The last fragment carries the rest of the value with the usual precision.
    let result = registry.format(3_661.0, &options).unwrap();
    assert_eq!(result.fragments(), ["1 h", "1.02 m"]);
}

#[test]
fn test_recursive_si_with_unit() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_unit("B").with_recursive(1);

    let result = registry.format(1_500_000.0, &options).unwrap();
    assert_eq!(result.fragments(), ["1 MB", "500 kB"]);
    assert_eq!(result.to_string(), "1 MB 500 kB");
}

#[test]
fn test_parse_sequences() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_scale("time");

    let fragments = vec!["2 h".to_string(), "30 m".to_string()];
    assert_eq!(registry.parse(&fragments, &options).unwrap(), 9_000.0);
    assert_eq!(
        registry.parse(&["1 d", "12 h"][..], &options).unwrap(),
        129_600.0
    );
    assert_eq!(
        registry
            .parse(ParseInput::Fragments(Vec::new()), &options)
            .unwrap(),
        0.0
    );
}

#[test]
fn test_parse_sequence_with_bad_fragment_is_nan() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_scale("time");

    let value = registry.parse(&["1 h", "soon"][..], &options).unwrap();
    assert!(value.is_nan());
}

#[test]
fn test_define_custom_scale() {
    let mut registry = ScaleRegistry::new();
    registry
        .define_scale("custom", prefixes! { "" => 1.0, "X" => 10.0 }, 1.0)
        .unwrap();

    let options = FormatOptions::new().with_scale("custom").with_precision(1);
    assert_eq!(format(&registry, 25.0, &options), "2.5 X");
    assert_eq!(registry.parse("2.5 X", &options).unwrap(), 25.0);
    assert!(registry.names().any(|name| name == "custom"));
}

#[test]
fn test_custom_scale_from_json() {
    let table: PrefixTable =
        serde_json::from_str(r#"{"B": 1, "KB": 1024, "MB": 1048576}"#).unwrap();

    let mut registry = ScaleRegistry::empty();
    registry.define_scale("binary", table, 1.0).unwrap();

    let options = FormatOptions::new().with_scale("binary");
    assert_eq!(format(&registry, 1_536.0, &options), "1.50 KB");
    assert_eq!(format(&registry, 0.0, &options), "0B");
    assert_eq!(registry.parse("3 MB", &options).unwrap(), 3_145_728.0);
}

#[test]
fn test_options_from_json() {
    let registry = ScaleRegistry::new();
    let options: FormatOptions =
        serde_json::from_str(r#"{"scale": "time", "recursive": 1, "precision": 0}"#).unwrap();

    // 2.5 m rounds up to 3 m, so the remainder is negative.
    let result = registry.format(150.0, &options).unwrap();
    assert_eq!(result.fragments(), ["3 m", "-30 s"]);
    assert_eq!(registry.parse(&result, &options).unwrap(), 150.0);
}

#[test]
fn test_unknown_scale_errors() {
    let registry = ScaleRegistry::new();
    let options = FormatOptions::new().with_scale("parsecs");

    match registry.format(1.0, &options) {
        Err(Error::UnknownScale(name)) => assert_eq!(name, "parsecs"),
        other => panic!("Expected unknown scale, got {other:?}"),
    }
    assert!(registry.parse("1", &options).is_err());
}

#[test]
fn test_invalid_definitions_are_rejected() {
    let mut registry = ScaleRegistry::new();

    assert_eq!(
        registry.define_scale("none", prefixes! {}, 1.0),
        Err(Error::empty_scale("none"))
    );
    assert!(matches!(
        registry.define_scale("neg", prefixes! { "" => 1.0, "bad" => -5.0 }, 1.0),
        Err(Error::InvalidFactor { .. })
    ));
    assert!(!registry.contains("none"));
    assert!(!registry.contains("neg"));
}
