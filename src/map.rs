//! Ordered prefix tables.
//!
//! This module provides [`PrefixTable`], a wrapper around [`IndexMap`] mapping unit
//! names to their multiplicative factor. It is the raw input from which a
//! [`Scale`](crate::Scale) is built.
//!
//! ## Why IndexMap?
//!
//! Definition order matters when building a scale: the base unit is the first unit
//! whose factor is closest to the pivot, so ties are broken by insertion order.
//! Re-inserting a name overwrites its factor but keeps its original position.
//!
//! ## Examples
//!
//! ```rust
//! use number_scale::PrefixTable;
//!
//! let mut table = PrefixTable::new();
//! table.insert("", 1.0);
//! table.insert("k", 1e3);
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("k"), Some(1e3));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered map of unit names to factors.
///
/// Serializes as a plain object, e.g. `{"": 1, "k": 1000}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixTable(IndexMap<String, f64>);

impl PrefixTable {
    /// Creates an empty `PrefixTable`.
    #[must_use]
    pub fn new() -> Self {
        PrefixTable(IndexMap::new())
    }

    /// Inserts a unit, returning the factor it replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use number_scale::PrefixTable;
    ///
    /// let mut table = PrefixTable::new();
    /// assert!(table.insert("k", 1e3).is_none());
    /// assert_eq!(table.insert("k", 1024.0), Some(1e3));
    /// ```
    pub fn insert(&mut self, name: impl Into<String>, factor: f64) -> Option<f64> {
        self.0.insert(name.into(), factor)
    }

    /// Returns the factor of the named unit.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Returns the first unit whose name equals `name` ignoring ASCII case.
    #[must_use]
    pub fn get_ignore_case(&self, name: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, factor)| *factor)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the unit names, in insertion order.
    pub fn names(&self) -> indexmap::map::Keys<'_, String, f64> {
        self.0.keys()
    }

    /// Returns an iterator over `(name, factor)` pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, f64> {
        self.0.iter()
    }
}

impl<K: Into<String>> From<&[(K, f64)]> for PrefixTable
where
    K: Clone,
{
    fn from(pairs: &[(K, f64)]) -> Self {
        pairs
            .iter()
            .map(|(name, factor)| (name.clone().into(), *factor))
            .collect()
    }
}

impl IntoIterator for PrefixTable {
    type Item = (String, f64);
    type IntoIter = indexmap::map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PrefixTable {
    type Item = (&'a String, &'a f64);
    type IntoIter = indexmap::map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PrefixTable {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        let mut table = PrefixTable::new();
        for (name, factor) in iter {
            table.insert(name, factor);
        }
        table
    }
}
