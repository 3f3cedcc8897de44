//! Scales: immutable tables of unit prefixes.
//!
//! A [`Scale`] is built once from a [`PrefixTable`] and a pivot value and never
//! changes afterwards. Building it derives:
//!
//! - the unit list sorted ascending by factor, used to locate the unit for a magnitude
//! - the name to factor lookup used when parsing
//! - the compiled parsing pattern
//! - the base unit, the unit whose factor is closest to the pivot
//!
//! ## Examples
//!
//! ```rust
//! use number_scale::{prefixes, Scale};
//!
//! let scale = Scale::build("distance", &prefixes! { "mm" => 1e-3, "m" => 1.0, "km" => 1e3 }, 1.0).unwrap();
//!
//! assert_eq!(scale.base(), "m");
//! assert_eq!(scale.locate(2_500.0).name, "km");
//! assert_eq!(scale.locate(0.0001).name, "mm");
//! ```

use crate::error::{Error, Result};
use crate::PrefixTable;
use regex::{Regex, RegexBuilder};

/// One unit of a scale, e.g. `k` with factor `1000`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitEntry {
    pub name: String,
    pub factor: f64,
}

impl UnitEntry {
    pub fn new(name: impl Into<String>, factor: f64) -> Self {
        UnitEntry {
            name: name.into(),
            factor,
        }
    }
}

/// An immutable unit scale.
///
/// Safe to share between threads once built; see
/// [`ScaleRegistry`](crate::ScaleRegistry) for how scales are named and looked up.
#[derive(Debug, Clone)]
pub struct Scale {
    units: Vec<UnitEntry>,
    map: PrefixTable,
    pattern: Regex,
    base: String,
}

impl Scale {
    /// Builds a scale from its prefix table.
    ///
    /// `base_unit_value` is the pivot: the unit whose factor is numerically
    /// closest to it becomes the base unit, the first one winning ties.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyScale`] when `prefixes` is empty and
    /// [`Error::InvalidFactor`] when a factor is not finite and positive.
    /// `name` is only used in error messages.
    pub fn build(name: &str, prefixes: &PrefixTable, base_unit_value: f64) -> Result<Self> {
        if prefixes.is_empty() {
            return Err(Error::empty_scale(name));
        }

        let mut units = Vec::with_capacity(prefixes.len());
        let mut alternatives = Vec::with_capacity(prefixes.len());
        let mut base: Option<(&str, f64)> = None;

        for (unit, &factor) in prefixes {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(Error::invalid_factor(name, unit, factor));
            }

            units.push(UnitEntry::new(unit.as_str(), factor));
            alternatives.push(regex::escape(unit));

            let distance = (base_unit_value - factor).abs();
            if base.map_or(true, |(_, best)| distance < (base_unit_value - best).abs()) {
                base = Some((unit.as_str(), factor));
            }
        }

        units.sort_by(|a, b| a.factor.total_cmp(&b.factor));

        // Longest names first so that "ms" is tried before "m".
        alternatives.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        Ok(Scale {
            units,
            map: prefixes.clone(),
            pattern: compile_pattern(&alternatives)?,
            base: base.map(|(unit, _)| unit.to_string()).unwrap_or_default(),
        })
    }

    /// Units sorted ascending by factor.
    #[must_use]
    pub fn units(&self) -> &[UnitEntry] {
        &self.units
    }

    /// The unit name to factor lookup, in definition order.
    #[must_use]
    pub fn prefixes(&self) -> &PrefixTable {
        &self.map
    }

    #[must_use]
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.map.get(unit)
    }

    /// The base unit name.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The compiled parsing pattern.
    ///
    /// Captures the signed decimal literal in group 1 and, when present, the
    /// unit name in group 2. Anything after the unit is ignored.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The unit with the smallest factor.
    #[must_use]
    pub fn smallest(&self) -> &UnitEntry {
        &self.units[0]
    }

    /// Finds the unit with the greatest factor not exceeding `magnitude`.
    ///
    /// Magnitudes below every factor resolve to the smallest unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use number_scale::ScaleRegistry;
    ///
    /// let registry = ScaleRegistry::new();
    /// let si = registry.get("SI").unwrap();
    ///
    /// assert_eq!(si.locate(500.0).name, "");
    /// assert_eq!(si.locate(1_500.0).name, "k");
    /// ```
    #[must_use]
    pub fn locate(&self, magnitude: f64) -> &UnitEntry {
        let index = self
            .units
            .partition_point(|unit| unit.factor <= magnitude)
            .saturating_sub(1);
        &self.units[index]
    }
}

fn compile_pattern(alternatives: &[String]) -> Result<Regex> {
    let names: Vec<&str> = alternatives
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .collect();

    // An empty unit name never needs to be matched: a missing unit means the base unit.
    let unit = if names.is_empty() {
        String::new()
    } else {
        format!("({})?", names.join("|"))
    };

    let pattern = format!(r"^\s*(-?[0-9]+(?:\.[0-9]+)?)\s*{unit}.*$");
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}
