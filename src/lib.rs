//! # number_scale
//!
//! Render numbers as human-readable, unit-scaled text and parse them back.
//!
//! ```text
//! 123456789        -> "123.46 M"
//! 1500 bytes       -> "1.50 KiB"
//! 3661 seconds     -> ["1 h", "1 m", "1 s"]
//! ```
//!
//! ## Key Features
//!
//! - **Multiple scales**: metric prefixes (`SI`), time units (`time`) and byte
//!   prefixes (`IEEE1541`), plus any scale you define
//! - **Rounding control**: precision and one of five rounding modes
//! - **Recursive decomposition**: split a value into several fragments of
//!   decreasing units
//! - **Round-trips**: every formatted fragment parses back to its value
//!
//! ## Quick Start
//!
//! ```rust
//! use number_scale::{format, parse, FormatOptions};
//!
//! let options = FormatOptions::new();
//! let text = format(123_456_789.0, &options).unwrap();
//! assert_eq!(text.to_string(), "123.46 M");
//!
//! let value = parse(&text, &options).unwrap();
//! assert_eq!(value, 123_460_000.0);
//! ```
//!
//! ### Units and Scales
//!
//! ```rust
//! use number_scale::{format, FormatOptions};
//!
//! let options = FormatOptions::new().with_scale("IEEE1541").with_unit("B");
//! assert_eq!(format(1_500.0, &options).unwrap().to_string(), "1.50 KiB");
//!
//! let options = FormatOptions::new().with_scale("time").with_recursive(2);
//! let parts = format(3_661.0, &options).unwrap();
//! assert_eq!(parts.fragments(), ["1 h", "1 m", "1 s"]);
//! ```
//!
//! ### Isolated Registries
//!
//! The free functions share one process-wide [`ScaleRegistry`]. Build your own
//! registry when scales should not leak between callers:
//!
//! ```rust
//! use number_scale::{prefixes, FormatOptions, ScaleRegistry};
//!
//! let mut registry = ScaleRegistry::new();
//! registry
//!     .define_scale("length", prefixes! { "mm" => 1e-3, "m" => 1.0, "km" => 1e3 }, 1.0)
//!     .unwrap();
//!
//! let options = FormatOptions::new().with_scale("length");
//! assert_eq!(registry.format(1_250.0, &options).unwrap().to_string(), "1.25 km");
//! ```
//!
//! ## Rounding
//!
//! The scaled value is rounded with [`RoundMode`]: `Up` (the default) and `Down`
//! round away from and toward zero. `Even` and `Odd` truncate and then bump the
//! result by one when its parity is wrong, without looking at the fraction.
//! Any other mode name means standard round-half-up.
//!
//! ## Errors
//!
//! Only unknown scale keys and invalid scale definitions are errors. Zero and
//! `NaN` format as `"0"` plus the base unit; unparseable text parses to `NaN`.

pub mod builtin;
pub mod duration;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod parse;
pub mod registry;
pub mod round;
pub mod scale;

pub use error::{Error, Result};
pub use format::{FormattedResult, MAX_PRECISION, MAX_RECURSION};
pub use map::PrefixTable;
pub use options::{FormatOptions, RoundMode};
pub use parse::ParseInput;
pub use registry::ScaleRegistry;
pub use round::round;
pub use scale::{Scale, UnitEntry};

/// Format `num` with the process-wide registry.
///
/// # Examples
///
/// ```rust
/// use number_scale::{format, FormatOptions};
///
/// let text = format(-2_500_000.0, &FormatOptions::new()).unwrap();
/// assert_eq!(text.to_string(), "-2.50 M");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnknownScale`] if `options.scale` is not registered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format(num: f64, options: &FormatOptions) -> Result<FormattedResult> {
    registry::global().read().format(num, options)
}

/// Parse formatted text with the process-wide registry.
///
/// Sequences of fragments are summed. Text that does not parse yields `NaN`.
///
/// # Examples
///
/// ```rust
/// use number_scale::{parse, FormatOptions};
///
/// let options = FormatOptions::new().with_scale("IEEE-1541");
/// assert_eq!(parse("3 Mi", &options).unwrap(), 3e6);
/// assert!(parse("three", &options).unwrap().is_nan());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnknownScale`] if `options.scale` is not registered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse<'a>(value: impl Into<ParseInput<'a>>, options: &FormatOptions) -> Result<f64> {
    registry::global().read().parse(value, options)
}

/// Define or replace a scale in the process-wide registry.
///
/// # Examples
///
/// ```rust
/// use number_scale::{define_scale, format, prefixes, scale_names, FormatOptions};
///
/// define_scale("dozens", prefixes! { "" => 1.0, "dz" => 12.0 }, 1.0).unwrap();
///
/// let options = FormatOptions::new().with_scale("dozens").with_precision(0);
/// assert_eq!(format(36.0, &options).unwrap().to_string(), "3 dz");
/// assert!(scale_names().contains(&"dozens".to_string()));
/// ```
///
/// # Errors
///
/// Returns an error if the table is empty or holds a factor that is not finite
/// and positive.
pub fn define_scale<I, K>(name: impl Into<String>, prefixes: I, base_unit_value: f64) -> Result<()>
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    registry::global()
        .write()
        .define_scale(name, prefixes, base_unit_value)
}

/// Keys currently registered in the process-wide registry, in registration order.
#[must_use]
pub fn scale_names() -> Vec<String> {
    registry::global()
        .read()
        .names()
        .map(str::to_string)
        .collect()
}
