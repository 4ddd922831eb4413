/// Rendered in place of a time that is not a finite number.
pub const DNF_TIME: &str = "DNF";

/// Coerces an exported time value to seconds.
///
/// Surrounding whitespace is ignored. Empty text, garbage, `NaN` and infinities
/// all yield `None`: such a record cannot be ranked.
pub fn parse_seconds(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
}

/// Formats elapsed seconds as total minutes and zero-padded seconds (`"61:05"`).
///
/// The fractional part is truncated, not rounded. Minutes are not wrapped
/// into hours.
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return DNF_TIME.to_string();
    }
    let total = seconds.trunc() as i64;
    format!("{}:{:02}", total.div_euclid(60), total.rem_euclid(60))
}

/// Formats a raw time value, falling back to `"DNF"` when it is not numeric.
pub fn format_race_time(raw: &str) -> String {
    parse_seconds(raw)
        .map(format_seconds)
        .unwrap_or_else(|| DNF_TIME.to_string())
}
