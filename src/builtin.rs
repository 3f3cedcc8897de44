//! Built-in prefix tables.
//!
//! Each table is listed in definition order together with the pivot used to pick
//! its base unit.

/// Registry key of the metric prefix scale.
pub const SI: &str = "SI";
/// Registry key of the time unit scale.
pub const TIME: &str = "time";
/// Registry key of the byte scale.
pub const IEEE1541: &str = "IEEE1541";
/// Alternate registry key for [`IEEE1541`].
pub const IEEE1541_ALIAS: &str = "IEEE-1541";

/// Metric prefixes from yocto to yotta. The unnamed unit is the base.
pub const SI_PREFIXES: &[(&str, f64)] = &[
    ("y", 1e-24),
    ("z", 1e-21),
    ("a", 1e-18),
    ("f", 1e-15),
    ("p", 1e-12),
    ("n", 1e-9),
    ("µ", 1e-6),
    ("m", 1e-3),
    ("", 1.0),
    ("k", 1e3),
    ("M", 1e6),
    ("G", 1e9),
    ("T", 1e12),
    ("P", 1e15),
    ("E", 1e18),
    ("Z", 1e21),
    ("Y", 1e24),
];

pub const SI_PIVOT: f64 = 1.0;

/// Time units expressed in seconds.
pub const TIME_UNITS: &[(&str, f64)] = &[
    ("ns", 1e-9),
    ("ms", 1e-3),
    ("s", 1.0),
    ("m", 60.0),
    ("h", 3_600.0),
    ("d", 86_400.0),
];

pub const TIME_PIVOT: f64 = 1.0;

/// Byte prefixes. Despite the binary names every step is a factor of 1000.
pub const IEEE1541_PREFIXES: &[(&str, f64)] = &[
    ("", 1.0),
    ("Ki", 1e3),
    ("Mi", 1e6),
    ("Gi", 1e9),
    ("Ti", 1e12),
    ("Pi", 1e15),
    ("Ei", 1e18),
    ("Zi", 1e21),
    ("Yi", 1e24),
];

pub const IEEE1541_PIVOT: f64 = 0.0;
