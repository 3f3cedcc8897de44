//! Durations on the `time` scale.
//!
//! Helpers converting between [`chrono::Duration`] and text on the built-in
//! `time` scale, e.g. `"1 h"`, `"1 m"`, `"30 s"`.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::Duration;
//! use number_scale::{FormatOptions, ScaleRegistry};
//!
//! let registry = ScaleRegistry::new();
//! let options = FormatOptions::new().with_recursive(2);
//!
//! let text = registry.format_duration(Duration::seconds(3_690), &options).unwrap();
//! assert_eq!(text.to_string(), "1 h 1 m 30 s");
//!
//! let back = registry.parse_duration(&text).unwrap();
//! assert_eq!(back, Some(Duration::seconds(3_690)));
//! ```

use crate::builtin::TIME;
use crate::error::Result;
use crate::{FormatOptions, FormattedResult, ParseInput, ScaleRegistry};
use chrono::Duration;

const NANOS_PER_SECOND: f64 = 1e9;

impl ScaleRegistry {
    /// Formats `duration` in seconds on the `time` scale.
    ///
    /// `options.scale` is ignored; the other options apply as usual.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScale`](crate::Error::UnknownScale) when the
    /// registry holds no `time` scale.
    pub fn format_duration(
        &self,
        duration: Duration,
        options: &FormatOptions,
    ) -> Result<FormattedResult> {
        let scale = self.get(TIME)?;
        Ok(scale.format(seconds(duration), options))
    }

    /// Parses text on the `time` scale into a [`Duration`].
    ///
    /// Returns `Ok(None)` when the text does not parse or the value does not fit
    /// a `Duration`. Sub-nanosecond parts are rounded to the nearest nanosecond.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScale`](crate::Error::UnknownScale) when the
    /// registry holds no `time` scale.
    pub fn parse_duration<'a>(&self, value: impl Into<ParseInput<'a>>) -> Result<Option<Duration>> {
        let scale = self.get(TIME)?;
        let seconds = scale.parse_input(&value.into());
        Ok(from_seconds(seconds))
    }
}

fn seconds(duration: Duration) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_SECOND,
        None => duration.num_milliseconds() as f64 / 1e3,
    }
}

fn from_seconds(seconds: f64) -> Option<Duration> {
    let nanos = (seconds * NANOS_PER_SECOND).round();
    if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(Duration::nanoseconds(nanos as i64))
}
