//! Configuration options for formatting and parsing.
//!
//! This module provides the types that control how a number is rendered:
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`RoundMode`]: Rounding policy applied to the scaled value
//!
//! Options deserialize with every field optional, so a partial options object
//! is completed from the defaults.
//!
//! ## Examples
//!
//! ```rust
//! use number_scale::{FormatOptions, RoundMode, ScaleRegistry};
//!
//! let registry = ScaleRegistry::new();
//!
//! let options = FormatOptions::new().with_precision(1).with_unit("B");
//! assert_eq!(registry.format(1_250.0, &options).unwrap().to_string(), "1.3 kB");
//!
//! let options = options.with_round_mode(RoundMode::Down);
//! assert_eq!(registry.format(1_250.0, &options).unwrap().to_string(), "1.2 kB");
//! ```

use crate::format::MAX_PRECISION;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Rounding policy for the scaled magnitude.
///
/// - **Up**: Ceiling of the magnitude, away from zero (default)
/// - **Down**: Floor of the magnitude, toward zero
/// - **Even**: Truncate, then bump an odd result to the next even integer
/// - **Odd**: Truncate, then bump an even result to the next odd integer
/// - **HalfUp**: Standard round-half-up; any unrecognised mode name maps here
///
/// `Even` and `Odd` never look at the fractional part: `4.9` becomes `4` under
/// `Even` and `5.0` becomes `6`.
///
/// # Examples
///
/// ```rust
/// use number_scale::RoundMode;
///
/// assert_eq!("even".parse::<RoundMode>().unwrap(), RoundMode::Even);
/// assert_eq!("banker".parse::<RoundMode>().unwrap(), RoundMode::HalfUp);
/// assert_eq!(RoundMode::Up.as_str(), "up");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundMode {
    Even,
    Odd,
    #[default]
    Up,
    Down,
    #[serde(rename = "half-up", other)]
    HalfUp,
}

impl RoundMode {
    /// Returns the canonical name of this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RoundMode::Even => "even",
            RoundMode::Odd => "odd",
            RoundMode::Up => "up",
            RoundMode::Down => "down",
            RoundMode::HalfUp => "half-up",
        }
    }
}

impl fmt::Display for RoundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoundMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "even" => RoundMode::Even,
            "odd" => RoundMode::Odd,
            "up" => RoundMode::Up,
            "down" => RoundMode::Down,
            _ => RoundMode::HalfUp,
        })
    }
}

/// Configuration options for formatting numbers on a scale.
///
/// Parsing only consults [`scale`](FormatOptions::scale).
///
/// # Examples
///
/// ```rust
/// use number_scale::{FormatOptions, RoundMode};
///
/// // Defaults: two decimals, round up, SI scale, no unit, no decomposition
/// let options = FormatOptions::new();
/// assert_eq!(options.precision, 2);
/// assert_eq!(options.round_mode, RoundMode::Up);
/// assert_eq!(options.scale, "SI");
///
/// // Decompose a duration into up to three fragments
/// let options = FormatOptions::new().with_scale("time").with_recursive(2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Decimal places shown in a non-recursive fragment. Negative values count as 0.
    pub precision: i32,
    pub round_mode: RoundMode,
    /// Registry key of the scale to use.
    pub scale: String,
    /// Suffix appended after the unit prefix.
    pub unit: String,
    /// Number of additional fragments the value may be decomposed into.
    pub recursive: u32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            precision: 2,
            round_mode: RoundMode::default(),
            scale: "SI".to_string(),
            unit: String::new(),
            recursive: 0,
        }
    }
}

impl FormatOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of decimal places.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use number_scale::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_precision(-3);
    /// assert_eq!(options.effective_precision(), 0);
    /// ```
    #[must_use]
    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the rounding policy.
    #[must_use]
    pub fn with_round_mode(mut self, round_mode: RoundMode) -> Self {
        self.round_mode = round_mode;
        self
    }

    /// Selects the scale by registry key.
    #[must_use]
    pub fn with_scale(mut self, scale: impl Into<String>) -> Self {
        self.scale = scale.into();
        self
    }

    /// Sets the unit suffix, e.g. `"B"` to render `"1.5 kB"`.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the recursive decomposition depth.
    #[must_use]
    pub fn with_recursive(mut self, recursive: u32) -> Self {
        self.recursive = recursive;
        self
    }

    /// Precision clamped to `0..=MAX_PRECISION`.
    #[must_use]
    pub fn effective_precision(&self) -> u32 {
        self.precision.max(0).unsigned_abs().min(MAX_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.precision, 2);
        assert_eq!(options.round_mode, RoundMode::Up);
        assert_eq!(options.scale, "SI");
        assert_eq!(options.unit, "");
        assert_eq!(options.recursive, 0);
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let options: FormatOptions =
            serde_json::from_str(r#"{"precision": 1, "roundMode": "down"}"#).unwrap();
        assert_eq!(options.precision, 1);
        assert_eq!(options.round_mode, RoundMode::Down);
        assert_eq!(options.scale, "SI");
        assert_eq!(options.recursive, 0);
    }

    #[test]
    fn test_unknown_round_mode_is_half_up() {
        let options: FormatOptions = serde_json::from_str(r#"{"roundMode": "nearest"}"#).unwrap();
        assert_eq!(options.round_mode, RoundMode::HalfUp);
        assert_eq!("".parse::<RoundMode>().unwrap(), RoundMode::HalfUp);
    }

    #[test]
    fn test_round_mode_names() {
        for mode in [
            RoundMode::Even,
            RoundMode::Odd,
            RoundMode::Up,
            RoundMode::Down,
            RoundMode::HalfUp,
        ] {
            assert_eq!(mode.as_str().parse::<RoundMode>().unwrap(), mode);
            assert_eq!(
                serde_json::to_string(&mode).unwrap(),
                format!("\"{}\"", mode)
            );
        }
    }

    #[test]
    fn test_effective_precision() {
        assert_eq!(FormatOptions::new().with_precision(4).effective_precision(), 4);
        assert_eq!(FormatOptions::new().with_precision(-1).effective_precision(), 0);
        assert_eq!(
            FormatOptions::new().with_precision(i32::MAX).effective_precision(),
            MAX_PRECISION
        );
    }
}
