//! Formatting and parsing numbers with the built-in scales.
//!
//! Run with: cargo run --example simple

use number_scale::{format, parse, FormatOptions, RoundMode};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    // Metric prefixes
    let options = FormatOptions::new();
    for num in [0.000_42, 12.0, 1_500.0, 123_456_789.0, -7.5e12] {
        println!("{:>16} -> {}", num, format(num, &options)?);
    }

    // Units and byte prefixes
    let bytes = FormatOptions::new().with_scale("IEEE1541").with_unit("B");
    println!("\n{}", format(5_368_709_120.0, &bytes)?);

    // Rounding modes
    println!("\nRounding 1234 with precision 1:");
    for mode in [
        RoundMode::Up,
        RoundMode::Down,
        RoundMode::Even,
        RoundMode::Odd,
        RoundMode::HalfUp,
    ] {
        let options = FormatOptions::new().with_precision(1).with_round_mode(mode);
        println!("  {:<8} {}", mode, format(1_234.0, &options)?);
    }

    // Parsing back
    let value = parse("2.40 GHz", &FormatOptions::new().with_unit("Hz"))?;
    println!("\n\"2.40 GHz\" parses to {}", value);

    let value = parse("many", &options)?;
    println!("\"many\" parses to {}", value);

    Ok(())
}
