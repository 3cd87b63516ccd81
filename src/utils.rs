//! Assorted helpers.

/// Render a result with the crate-wide output precision of 12 fractional
/// digits, matching the single line the binary prints.
#[inline]
pub fn format_area(value: f64) -> String {
    format!("{value:.12}")
}
