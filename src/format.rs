//! Formatting numbers on a scale.
//!
//! [`Scale::format`] renders a number with the unit whose factor best fits its
//! magnitude. With [`FormatOptions::recursive`] set, the value is decomposed
//! into several fragments of decreasing units, the way a duration is split into
//! hours, minutes and seconds.
//!
//! ## Examples
//!
//! ```rust
//! use number_scale::{FormatOptions, FormattedResult, ScaleRegistry};
//!
//! let registry = ScaleRegistry::new();
//!
//! let result = registry.format(123_456_789.0, &FormatOptions::new()).unwrap();
//! assert_eq!(result, FormattedResult::Single("123.46 M".to_string()));
//!
//! let options = FormatOptions::new().with_scale("time").with_recursive(2);
//! let result = registry.format(3_661.0, &options).unwrap();
//! assert_eq!(result.fragments(), ["1 h", "1 m", "1 s"]);
//! ```

use crate::{round, FormatOptions, Scale, UnitEntry};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{trace, warn};

/// Upper bound on [`FormatOptions::recursive`].
pub const MAX_RECURSION: u32 = 32;

/// Upper bound on [`FormatOptions::precision`]. Larger values overflow the
/// rounding modifier.
pub const MAX_PRECISION: u32 = 100;

/// The output of a format call.
///
/// A single string unless recursive decomposition left a remainder, in which
/// case the fragments are ordered from the largest unit to the smallest.
/// Serializes as a string or an array of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormattedResult {
    Single(String),
    Fragments(Vec<String>),
}

impl FormattedResult {
    /// All fragments, a single-element slice for [`FormattedResult::Single`].
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        match self {
            FormattedResult::Single(text) => std::slice::from_ref(text),
            FormattedResult::Fragments(fragments) => fragments,
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            FormattedResult::Single(text) => vec![text],
            FormattedResult::Fragments(fragments) => fragments,
        }
    }

    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            FormattedResult::Single(text) => Some(text),
            FormattedResult::Fragments(_) => None,
        }
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, FormattedResult::Single(_))
    }
}

/// Joins fragments with a single space.
impl fmt::Display for FormattedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragments().join(" "))
    }
}

impl From<FormattedResult> for Vec<String> {
    fn from(result: FormattedResult) -> Self {
        result.into_vec()
    }
}

impl Scale {
    /// Formats `num` on this scale. [`FormatOptions::scale`] is ignored.
    ///
    /// Zero and `NaN` short-circuit to `"0"` followed by the base unit and the
    /// unit suffix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use number_scale::{FormatOptions, ScaleRegistry};
    ///
    /// let registry = ScaleRegistry::new();
    /// let time = registry.get("time").unwrap();
    ///
    /// assert_eq!(time.format(0.0, &FormatOptions::new()).to_string(), "0s");
    /// assert_eq!(time.format(-90.0, &FormatOptions::new()).to_string(), "-1.50 m");
    /// ```
    #[must_use]
    pub fn format(&self, num: f64, options: &FormatOptions) -> FormattedResult {
        let mut depth = options.recursive;
        if depth > MAX_RECURSION {
            warn!(
                requested = depth,
                max = MAX_RECURSION,
                "clamping recursive decomposition depth"
            );
            depth = MAX_RECURSION;
        }

        let mut fragments = Vec::new();
        self.format_fragments(num, options, depth, &mut fragments);

        if fragments.len() == 1 {
            FormattedResult::Single(fragments.remove(0))
        } else {
            FormattedResult::Fragments(fragments)
        }
    }

    fn format_fragments(
        &self,
        num: f64,
        options: &FormatOptions,
        depth: u32,
        fragments: &mut Vec<String>,
    ) {
        if num == 0.0 || num.is_nan() {
            fragments.push(self.zero(&options.unit));
            return;
        }

        let negative = num < 0.0;
        let magnitude = num.abs();

        let unit = self.locate(magnitude);
        let precision = options.effective_precision();
        let modifier = 10f64.powi(precision as i32);
        let value = round(
            options.round_mode,
            negative,
            magnitude * modifier / unit.factor,
        ) / modifier;

        let (mut text, remainder) = if depth > 0 {
            let whole = value.trunc();
            (format!("{whole}"), magnitude - whole * unit.factor)
        } else {
            (format_precision(value, precision), 0.0)
        };

        if negative && text != "0" {
            text.insert(0, '-');
        }

        let fragment = join_unit(text, unit, &options.unit);
        trace!(num, unit = %unit.name, fragment = %fragment, depth, "formatted fragment");
        fragments.push(fragment);

        // An infinite input leaves a NaN remainder, which ends the decomposition.
        if remainder != 0.0 && remainder.is_finite() && !std::ptr::eq(unit, self.smallest()) {
            let remainder = if negative { -remainder } else { remainder };
            self.format_fragments(remainder, options, depth - 1, fragments);
        }
    }

    fn zero(&self, unit: &str) -> String {
        if unit.is_empty() {
            format!("0{}", self.base())
        } else {
            format!("0{} {unit}", self.base())
        }
    }
}

/// Renders `value` with exactly `precision` decimals when it has a fraction.
fn format_precision(value: f64, precision: u32) -> String {
    if value.fract() != 0.0 && precision > 0 {
        format!("{value:.prec$}", prec = precision as usize)
    } else {
        format!("{value}")
    }
}

fn join_unit(text: String, unit: &UnitEntry, suffix: &str) -> String {
    let label = format!("{}{suffix}", unit.name);
    if label.is_empty() {
        text
    } else {
        format!("{text} {label}")
    }
}
