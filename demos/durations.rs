//! Decomposing durations into several time units.
//!
//! Run with: cargo run --example durations

use chrono::Duration;
use number_scale::{FormatOptions, ScaleRegistry};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let registry = ScaleRegistry::new();
    let uptime = Duration::seconds(273_661) + Duration::milliseconds(250);

    // One fragment per extra level of recursion
    for recursive in 0..=4 {
        let options = FormatOptions::new().with_recursive(recursive);
        let text = registry.format_duration(uptime, &options)?;
        println!("recursive {}: {}", recursive, text);
    }

    // Fragments serialize as a JSON array
    let options = FormatOptions::new().with_recursive(3);
    let text = registry.format_duration(uptime, &options)?;
    println!("\nAs JSON: {}", serde_json::to_string(&text)?);

    // And parse back into a Duration
    match registry.parse_duration(&text)? {
        Some(duration) => println!("Parsed back: {} ms", duration.num_milliseconds()),
        None => println!("Could not parse {}", text),
    }

    Ok(())
}
