//! Named scales.
//!
//! A [`ScaleRegistry`] maps scale keys to built [`Scale`]s. [`ScaleRegistry::new`]
//! seeds it with the built-in scales:
//!
//! | Key | Units | Base |
//! |-----|-------|------|
//! | `SI` | `y` (1e-24) through `Y` (1e24) in steps of 1000 | `""` |
//! | `time` | `ns`, `ms`, `s`, `m`, `h`, `d` | `s` |
//! | `IEEE1541` | `""`, `Ki` (1e3) through `Yi` (1e24) in steps of 1000 | `""` |
//! | `IEEE-1541` | alias of `IEEE1541` | |
//!
//! Registries are plain values, so tests can build isolated ones. The crate also
//! keeps one process-wide registry behind a lock for the free functions
//! [`format`](crate::format), [`parse`](crate::parse) and
//! [`define_scale`](crate::define_scale).
//!
//! ## Examples
//!
//! ```rust
//! use number_scale::{prefixes, FormatOptions, ScaleRegistry};
//!
//! let mut registry = ScaleRegistry::new();
//! registry
//!     .define_scale("custom", prefixes! { "" => 1.0, "X" => 10.0 }, 1.0)
//!     .unwrap();
//!
//! let options = FormatOptions::new().with_scale("custom").with_precision(1);
//! assert_eq!(registry.format(25.0, &options).unwrap().to_string(), "2.5 X");
//! ```

use crate::builtin;
use crate::error::{Error, Result};
use crate::{FormatOptions, FormattedResult, ParseInput, PrefixTable, Scale};
use indexmap::IndexMap;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// A mapping from scale keys to scales.
///
/// Aliases share the same [`Scale`] instance.
#[derive(Debug, Clone)]
pub struct ScaleRegistry {
    scales: IndexMap<String, Arc<Scale>>,
}

impl ScaleRegistry {
    /// Creates a registry holding the built-in scales.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.install_builtins();
        registry
    }

    /// Creates a registry without any scale.
    #[must_use]
    pub fn empty() -> Self {
        ScaleRegistry {
            scales: IndexMap::new(),
        }
    }

    fn install_builtins(&mut self) {
        let tables = [
            (builtin::SI, builtin::SI_PREFIXES, builtin::SI_PIVOT),
            (builtin::TIME, builtin::TIME_UNITS, builtin::TIME_PIVOT),
            (
                builtin::IEEE1541,
                builtin::IEEE1541_PREFIXES,
                builtin::IEEE1541_PIVOT,
            ),
        ];

        for (name, prefixes, pivot) in tables {
            let scale = Scale::build(name, &prefixes.into(), pivot)
                .unwrap_or_else(|err| unreachable!("built-in scale {name} is invalid: {err}"));
            self.insert(name, scale);
        }

        if let Some(bytes) = self.scales.get(builtin::IEEE1541).cloned() {
            self.scales.insert(builtin::IEEE1541_ALIAS.to_string(), bytes);
        }
    }

    /// Builds a scale and installs it under `name`, replacing any scale of that name.
    ///
    /// Later entries in `prefixes` overwrite earlier entries with the same name.
    ///
    /// # Errors
    ///
    /// Returns an error when the table is empty or holds a factor that is not
    /// finite and positive. The registry is left unchanged in that case.
    pub fn define_scale<I, K>(
        &mut self,
        name: impl Into<String>,
        prefixes: I,
        base_unit_value: f64,
    ) -> Result<()>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let name = name.into();
        let table: PrefixTable = prefixes.into_iter().collect();
        let scale = Scale::build(&name, &table, base_unit_value)?;

        debug!(
            scale = %name,
            units = scale.units().len(),
            base = %scale.base(),
            "defined scale"
        );

        self.insert(name, scale);
        Ok(())
    }

    /// Installs an already built scale under `name`.
    pub fn insert(&mut self, name: impl Into<String>, scale: impl Into<Arc<Scale>>) {
        self.scales.insert(name.into(), scale.into());
    }

    /// Registers `alias` as another key for the scale currently named `target`.
    ///
    /// Redefining `target` later does not update the alias.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScale`] when `target` is not registered.
    pub fn alias(&mut self, alias: impl Into<String>, target: &str) -> Result<()> {
        let scale = self.get_shared(target)?;
        let alias = alias.into();
        debug!(alias = %alias, scale = %target, "aliased scale");
        self.scales.insert(alias, scale);
        Ok(())
    }

    /// Looks up a scale by key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScale`] when `name` is not registered.
    pub fn get(&self, name: &str) -> Result<&Scale> {
        self.scales
            .get(name)
            .map(Arc::as_ref)
            .ok_or_else(|| Error::unknown_scale(name))
    }

    /// Looks up a scale by key, returning a shared handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScale`] when `name` is not registered.
    pub fn get_shared(&self, name: &str) -> Result<Arc<Scale>> {
        self.scales
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown_scale(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.scales.contains_key(name)
    }

    /// Registered keys, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Formats `num` on the scale named by `options.scale`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScale`] when the scale is not registered.
    pub fn format(&self, num: f64, options: &FormatOptions) -> Result<FormattedResult> {
        Ok(self.get(&options.scale)?.format(num, options))
    }

    /// Parses formatted text on the scale named by `options.scale`.
    ///
    /// Sequences are summed. Unparseable text yields `Ok(NaN)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScale`] when the scale is not registered.
    pub fn parse<'a>(
        &self,
        value: impl Into<ParseInput<'a>>,
        options: &FormatOptions,
    ) -> Result<f64> {
        let scale = self.get(&options.scale)?;
        Ok(scale.parse_input(&value.into()))
    }
}

impl Default for ScaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref GLOBAL: RwLock<ScaleRegistry> = RwLock::new(ScaleRegistry::new());
}

/// The process-wide registry used by the crate's free functions.
///
/// Seeded with the built-in scales on first access. Readers hold a shared lock,
/// [`define_scale`](crate::define_scale) takes the exclusive one.
pub fn global() -> &'static RwLock<ScaleRegistry> {
    &GLOBAL
}
