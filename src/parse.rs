//! Parsing formatted text back into numbers.
//!
//! Parsing is the inverse of formatting: a single fragment yields its value, a
//! sequence of fragments yields the sum of their values. Text that does not
//! start with a decimal literal parses to `NaN`.
//!
//! ## Examples
//!
//! ```rust
//! use number_scale::{FormatOptions, ScaleRegistry};
//!
//! let registry = ScaleRegistry::new();
//! let options = FormatOptions::new().with_scale("time");
//!
//! assert_eq!(registry.parse("1.5 m", &options).unwrap(), 90.0);
//! assert_eq!(registry.parse(&["1 h", "30 m"][..], &options).unwrap(), 5_400.0);
//! assert!(registry.parse("soon", &options).unwrap().is_nan());
//! ```

use crate::{FormattedResult, Scale};

/// Text accepted by the parser: one fragment or an ordered sequence of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseInput<'a> {
    Single(&'a str),
    Fragments(Vec<&'a str>),
}

impl<'a> From<&'a str> for ParseInput<'a> {
    fn from(text: &'a str) -> Self {
        ParseInput::Single(text)
    }
}

impl<'a> From<&'a String> for ParseInput<'a> {
    fn from(text: &'a String) -> Self {
        ParseInput::Single(text)
    }
}

impl<'a, 'b: 'a> From<&'a [&'b str]> for ParseInput<'a> {
    fn from(fragments: &'a [&'b str]) -> Self {
        ParseInput::Fragments(fragments.to_vec())
    }
}

impl<'a> From<&'a [String]> for ParseInput<'a> {
    fn from(fragments: &'a [String]) -> Self {
        ParseInput::Fragments(fragments.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for ParseInput<'a> {
    fn from(fragments: &'a Vec<String>) -> Self {
        fragments.as_slice().into()
    }
}

impl<'a> From<&'a FormattedResult> for ParseInput<'a> {
    fn from(result: &'a FormattedResult) -> Self {
        match result {
            FormattedResult::Single(text) => ParseInput::Single(text),
            FormattedResult::Fragments(fragments) => fragments.into(),
        }
    }
}

impl Scale {
    /// Parses one formatted fragment on this scale.
    ///
    /// A missing unit means the base unit. Returns `NaN` when the text does not
    /// match the scale's pattern or names no known unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use number_scale::ScaleRegistry;
    ///
    /// let registry = ScaleRegistry::new();
    /// let si = registry.get("SI").unwrap();
    ///
    /// assert_eq!(si.parse("2.5 k"), 2_500.0);
    /// assert_eq!(si.parse("-3 M"), -3e6);
    /// assert_eq!(si.parse("42"), 42.0);
    /// assert!(si.parse("k").is_nan());
    /// ```
    #[must_use]
    pub fn parse(&self, text: &str) -> f64 {
        let Some(captures) = self.pattern().captures(text) else {
            return f64::NAN;
        };

        let Ok(number) = captures[1].parse::<f64>() else {
            return f64::NAN;
        };

        let unit = captures
            .get(2)
            .map(|unit| unit.as_str())
            .filter(|unit| !unit.is_empty())
            .unwrap_or(self.base());

        let factor = self
            .factor(unit)
            .or_else(|| self.prefixes().get_ignore_case(unit));

        match factor {
            Some(factor) => number * factor,
            None => f64::NAN,
        }
    }

    /// Parses one fragment or sums a sequence of fragments.
    ///
    /// An empty sequence sums to `0`.
    #[must_use]
    pub fn parse_input(&self, input: &ParseInput<'_>) -> f64 {
        match input {
            ParseInput::Single(text) => self.parse(text),
            ParseInput::Fragments(fragments) => fragments
                .iter()
                .map(|fragment| self.parse(fragment))
                .sum(),
        }
    }
}
