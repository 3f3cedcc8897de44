//! Property-based tests for the format/parse round-trip.
//!
//! Formatting loses at most one step of the last kept decimal in the chosen
//! unit, and parsing the output must land within that distance of the input.

use number_scale::{FormatOptions, RoundMode, Scale, ScaleRegistry};
use proptest::prelude::*;

fn tolerance(scale: &Scale, num: f64, precision: i32) -> f64 {
    let factor = scale.locate(num.abs()).factor;
    factor / 10f64.powi(precision) * (1.0 + 1e-9) + num.abs() * 1e-9
}

fn scale_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("SI"), Just("time"), Just("IEEE1541")]
}

fn round_mode() -> impl Strategy<Value = RoundMode> {
    prop_oneof![
        Just(RoundMode::Up),
        Just(RoundMode::Down),
        Just(RoundMode::HalfUp),
    ]
}

fn magnitude() -> impl Strategy<Value = f64> {
    (1e-3f64..1e12, any::<bool>()).prop_map(|(m, negative)| if negative { -m } else { m })
}

proptest! {
    #[test]
    fn prop_round_trip(
        num in magnitude(),
        name in scale_name(),
        precision in 0i32..5,
        mode in round_mode(),
    ) {
        let registry = ScaleRegistry::new();
        let scale = registry.get(name).unwrap();
        let options = FormatOptions::new()
            .with_scale(name)
            .with_precision(precision)
            .with_round_mode(mode);

        let text = scale.format(num, &options);
        prop_assert!(text.is_single());

        let back = scale.parse_input(&(&text).into());
        prop_assert!(
            (back - num).abs() <= tolerance(scale, num, precision),
            "{} -> {} -> {}", num, text, back
        );
    }

    #[test]
    fn prop_recursive_round_trip(
        num in magnitude(),
        name in scale_name(),
        recursive in 1u32..4,
    ) {
        let registry = ScaleRegistry::new();
        let scale = registry.get(name).unwrap();
        let options = FormatOptions::new()
            .with_scale(name)
            .with_recursive(recursive);

        let fragments = scale.format(num, &options);
        prop_assert!(fragments.fragments().len() <= recursive as usize + 1);

        // Decomposition truncates at the smallest unit, which bounds the loss
        // by that unit's factor.
        let back = scale.parse_input(&(&fragments).into());
        let bound = tolerance(scale, num, 2).max(scale.smallest().factor);
        prop_assert!(
            (back - num).abs() <= bound,
            "{} -> {:?} -> {}", num, fragments, back
        );
    }

    #[test]
    fn prop_sign_is_preserved(num in magnitude(), name in scale_name()) {
        let registry = ScaleRegistry::new();
        let options = FormatOptions::new().with_scale(name);

        let text = registry.format(num, &options).unwrap().to_string();
        prop_assert_eq!(text.starts_with('-'), num < 0.0, "{}", text);
    }

    #[test]
    fn prop_unparseable_text_is_nan(text in "[a-zA-Z ]{0,16}") {
        let registry = ScaleRegistry::new();
        let value = registry.parse(text.as_str(), &FormatOptions::new()).unwrap();
        prop_assert!(value.is_nan());
    }

    #[test]
    fn prop_integer_text_parses_exactly(n in -1_000_000i64..1_000_000) {
        let registry = ScaleRegistry::new();
        let options = FormatOptions::new().with_scale("time");
        let value = registry.parse(format!("{n} s").as_str(), &options).unwrap();
        prop_assert_eq!(value, n as f64);
    }
}
