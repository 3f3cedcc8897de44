//! Error types for scale definition, formatting and parsing.
//!
//! Most operations in this crate cannot fail. The exceptions are:
//!
//! - **Unknown scales**: formatting or parsing against a key the registry does not hold
//! - **Invalid definitions**: defining a scale with no units or with a unit factor that
//!   is not a finite positive number
//!
//! Text that does not look like a formatted number is *not* an error: parsing returns
//! `NaN` and callers are expected to check for it.
//!
//! ## Examples
//!
//! ```rust
//! use number_scale::{Error, FormatOptions, ScaleRegistry};
//!
//! let registry = ScaleRegistry::new();
//! let result = registry.format(42.0, &FormatOptions::new().with_scale("furlongs"));
//!
//! assert!(matches!(result, Err(Error::UnknownScale(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the scale engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The requested scale key is not registered
    #[error("Unknown scale: {0:?}")]
    UnknownScale(String),

    /// A scale was defined without any units
    #[error("Scale {0:?} must define at least one unit")]
    EmptyScale(String),

    /// A unit factor is zero, negative or not finite
    #[error("Invalid factor {factor} for unit {unit:?} in scale {scale:?}: factors must be finite and positive")]
    InvalidFactor {
        scale: String,
        unit: String,
        factor: f64,
    },

    /// The parsing pattern for a scale could not be compiled
    #[error("Pattern error: {0}")]
    Pattern(String),
}

impl Error {
    /// Creates an unknown scale error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use number_scale::Error;
    ///
    /// let err = Error::unknown_scale("furlongs");
    /// assert!(err.to_string().contains("furlongs"));
    /// ```
    pub fn unknown_scale(name: &str) -> Self {
        Error::UnknownScale(name.to_string())
    }

    /// Creates an error for a scale defined without units.
    pub fn empty_scale(name: &str) -> Self {
        Error::EmptyScale(name.to_string())
    }

    /// Creates an error for a unit whose factor cannot be used for scaling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use number_scale::Error;
    ///
    /// let err = Error::invalid_factor("custom", "X", -1.0);
    /// assert!(err.to_string().contains("finite and positive"));
    /// ```
    pub fn invalid_factor(scale: &str, unit: &str, factor: f64) -> Self {
        Error::InvalidFactor {
            scale: scale.to_string(),
            unit: unit.to_string(),
            factor,
        }
    }

    /// Creates a pattern compilation error.
    pub fn pattern<T: fmt::Display>(msg: T) -> Self {
        Error::Pattern(msg.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::pattern(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
