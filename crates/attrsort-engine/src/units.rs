//! Unit conversion table and measurement extraction
//!
//! Measurement tokens look like "10 cm" or "2.5inches": a numeric literal,
//! optional whitespace, then a recognized length unit. The unit word is
//! matched at the front of the remainder only, so trailing characters after
//! it are tolerated ("10 cmXYZ" still counts). Comparison keys are expressed
//! in centimeters.

/// Multiplicative factor per unit, expressing the unit in centimeters.
///
/// Entry order doubles as the prefix-match order; synonyms map to the same
/// factor as their canonical unit, so a shorter entry shadowing a longer one
/// ("m" before "meters") never changes the resulting key.
const UNIT_FACTORS: &[(&str, f64)] = &[
    ("cm", 1.0),
    ("inches", 2.54),
    ("inch", 2.54),
    ("m", 100.0),
    ("meters", 100.0),
    ("km", 100_000.0),
    ("kms", 100_000.0),
];

/// Look up the centimeter factor for a unit name (already lower-cased)
pub fn unit_factor(unit: &str) -> Option<f64> {
    UNIT_FACTORS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
}

/// Extract the leading measurement from a lower-cased token and return its
/// centimeter-equivalent comparison key
///
/// Returns `None` when the token does not start with a numeric literal
/// followed by a recognized unit. Callers sorting already-classified tokens
/// substitute a maximal fallback key instead of failing.
pub fn leading_measurement(lowered: &str) -> Option<f64> {
    let (value, rest) = scan_numeric_literal(lowered)?;
    let rest = rest.trim_start();
    let (_, factor) = UNIT_FACTORS
        .iter()
        .find(|(name, _)| rest.starts_with(name))?;
    Some(value * factor)
}

/// Scan an unsigned numeric literal (digits, optional `.digits`) anchored at
/// the start of `s`, returning its value and the unconsumed remainder
pub(crate) fn scan_numeric_literal(s: &str) -> Option<(f64, &str)> {
    let bytes = s.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == 0 {
        return None;
    }
    // Fractional part only counts if at least one digit follows the dot
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if frac > end + 1 {
            end = frac;
        }
    }
    let value = s[..end].parse::<f64>().ok()?;
    Some((value, &s[end..]))
}
