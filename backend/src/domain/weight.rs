//! Weight display formatting.
//!
//! Weights are stored exactly as the user entered them; these helpers only
//! shape the value for display and never feed back into storage.

/// Round a weight to at most two fractional digits, half away from zero.
///
/// Returns a number rather than a string so callers can keep computing with
/// the rounded value.
pub fn formatted_to_two_decimals(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}

/// Render a weight for display.
///
/// Integral results drop the fractional part entirely ("85", not "85.0");
/// everything else keeps the minimal number of digits after rounding.
pub fn formatted_to_string(weight: f64) -> String {
    let rounded = formatted_to_two_decimals(weight);
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
