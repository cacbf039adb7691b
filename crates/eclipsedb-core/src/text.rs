// crates/eclipsedb-core/src/text.rs

/// Convert a string into a folded key suitable for table lookups.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Québec` -> `Quebec`)
/// 2) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use eclipsedb_core::text::fold_key;
///
/// assert_eq!(fold_key("Québec"), "quebec");
/// assert_eq!(fold_key("TEXAS"), "texas");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Normalize a user-supplied token before table access: trim, collapse runs
/// of whitespace to a single space, then fold.
pub fn normalize_token(value: &str) -> String {
    fold_key(&value.split_whitespace().collect::<Vec<_>>().join(" "))
}
