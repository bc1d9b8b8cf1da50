//! Utilities
//!
//! Small helpers shared by the importer and the emitters.

/// Turn a feature name into an identifier by joining its whitespace separated
/// words with underscores, `"petal width (cm)"` becomes `"petal_width_(cm)"`.
pub fn sanitize_identifier(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Index of the largest value, the first one wins on ties.
/// Returns `None` for an empty slice.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let (first, rest) = values.split_first()?;
    let mut best_idx = 0;
    let mut best = *first;
    for (i, v) in rest.iter().enumerate() {
        if *v > best {
            best = *v;
            best_idx = i + 1;
        }
    }
    Some(best_idx)
}

/// Shortest decimal text that round-trips to `value`.
/// Integral values keep a trailing `.0` so that they still read as floats.
/// Very large and very small magnitudes are written out positionally, never
/// in exponent form, `1e-5` becomes `0.00001` and `1e16` becomes
/// `10000000000000000.0`. Non finite values print as `inf`, `-inf` and `NaN`.
pub fn format_threshold(value: f64) -> String {
    let s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        s + ".0"
    } else {
        s
    }
}
