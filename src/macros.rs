/// Builds a [`PrefixTable`](crate::PrefixTable) from `name => factor` pairs.
///
/// Entries keep their written order; a repeated name overwrites the earlier factor.
///
/// # Examples
///
/// ```rust
/// use number_scale::prefixes;
///
/// let table = prefixes! {
///     "" => 1.0,
///     "k" => 1e3,
///     "M" => 1e6,
/// };
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get("M"), Some(1e6));
///
/// let empty = prefixes! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! prefixes {
    // Handle empty table
    {} => {
        $crate::PrefixTable::new()
    };

    // Handle non-empty table
    { $($name:expr => $factor:expr),+ $(,)? } => {{
        let mut table = $crate::PrefixTable::new();
        $(
            table.insert($name, ($factor) as f64);
        )+
        table
    }};
}
