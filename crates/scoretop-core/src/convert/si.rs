//! SI-style magnitude formatting.

/// Magnitude prefixes by powers of 1000. Index 0 is the empty prefix.
pub const PREFIXES: [&str; 9] = ["", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Shown when a value exceeds the largest prefix in the table.
const OVERFLOW: &str = "?";

/// Keeps the logarithm finite at exactly zero.
const EPSILON: f64 = 1e-10;

const CM_PER_BLOCK: f64 = 100.0;

/// Formats a value scaled by powers of 1000 with a magnitude prefix:
/// `12345678 -> "12.3M"`, `0 -> "0.0"`.
pub fn format_si(value: f64) -> String {
    let magnitude = (value + EPSILON).log(1000.0).floor().max(0.0) as usize;
    if magnitude >= PREFIXES.len() {
        let scaled = value / 1000f64.powi(PREFIXES.len() as i32);
        return format!("{:.1}{}", scaled, OVERFLOW);
    }
    let scaled = value / 1000f64.powi(magnitude as i32);
    format!("{:.1}{}", scaled, PREFIXES[magnitude])
}

/// Converts a centimeter-scaled raw value to blocks, then si-formats it.
pub fn blocks(raw: i64) -> String {
    format_si(raw as f64 / CM_PER_BLOCK)
}
