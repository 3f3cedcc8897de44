//! Defining your own scale from code or from JSON.
//!
//! Run with: cargo run --example custom_scale

use number_scale::{define_scale, format, parse, prefixes, scale_names, FormatOptions, PrefixTable};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    // From the prefixes! macro
    define_scale(
        "length",
        prefixes! { "mm" => 1e-3, "cm" => 1e-2, "m" => 1.0, "km" => 1e3 },
        1.0,
    )?;

    let options = FormatOptions::new().with_scale("length");
    println!("{}", format(0.35, &options)?);
    println!("{}", format(42_195.0, &options.clone().with_recursive(1))?);

    // From a JSON table
    let table: PrefixTable = serde_json::from_str(r#"{"": 1, "dz": 12, "gr": 144}"#)?;
    define_scale("dozens", table, 1.0)?;

    let options: FormatOptions =
        serde_json::from_str(r#"{"scale": "dozens", "precision": 0, "roundMode": "down"}"#)?;
    println!("{}", format(150.0, &options)?);
    println!("\"3 gr\" is {}", parse("3 gr", &options)?);

    println!("\nRegistered scales: {}", scale_names().join(", "));

    Ok(())
}
