//! Token classifier
//!
//! An ordered predicate chain assigns each trimmed token to at most one
//! category. First match wins, and the order matters: apparel codes would
//! otherwise classify as words, and bare numbers must not be mistaken for
//! measurements (the sizes rule requires a unit suffix).

use crate::{apparel, units};
use attrsort_core::Category;

/// Classify one trimmed token
///
/// Returns `None` for tokens matching no category; such tokens are excluded
/// from all results rather than reported as errors.
pub fn classify(token: &str) -> Option<Category> {
    let lowered = token.trim().to_lowercase();

    if apparel::is_apparel_size(&lowered) {
        return Some(Category::Shirts);
    }
    if units::leading_measurement(&lowered).is_some() {
        return Some(Category::Sizes);
    }
    if is_numeric_literal(&lowered) {
        return Some(Category::Number);
    }
    if is_alphabetic(&lowered) {
        if lowered.chars().count() == 1 {
            return Some(Category::Alphabet);
        }
        return Some(Category::Words);
    }
    None
}

/// Whether the entire token is an unsigned numeric literal (digits with an
/// optional fractional part, no sign, no exponent)
fn is_numeric_literal(s: &str) -> bool {
    match units::scan_numeric_literal(s) {
        Some((_, rest)) => rest.is_empty(),
        None => false,
    }
}

/// Whether the token is non-empty and entirely alphabetic
fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apparel_sizes_classify_as_shirts() {
        for token in ["XS", "s", "M", "l", "XL", "xxl", "XXXL"] {
            assert_eq!(classify(token), Some(Category::Shirts), "token {token:?}");
        }
    }

    #[test]
    fn measurements_classify_as_sizes() {
        for token in ["10 cm", "2 inches", "1.5m", "1 km", "3 kms", "4 meters"] {
            assert_eq!(classify(token), Some(Category::Sizes), "token {token:?}");
        }
    }

    #[test]
    fn bare_numbers_never_classify_as_sizes() {
        assert_eq!(classify("5"), Some(Category::Number));
        assert_eq!(classify("3.14"), Some(Category::Number));
        assert_eq!(classify("10"), Some(Category::Number));
    }

    #[test]
    fn apparel_codes_take_precedence_over_words() {
        // "m" is both a letter and a unit name; shirts rule wins
        assert_eq!(classify("m"), Some(Category::Shirts));
        assert_eq!(classify("XL"), Some(Category::Shirts));
    }

    #[test]
    fn single_letters_and_words() {
        assert_eq!(classify("a"), Some(Category::Alphabet));
        assert_eq!(classify("Z"), Some(Category::Alphabet));
        assert_eq!(classify("red"), Some(Category::Words));
        assert_eq!(classify("Hello"), Some(Category::Words));
    }

    #[test]
    fn unclassifiable_tokens_are_dropped() {
        assert_eq!(classify("r2d2"), None);
        assert_eq!(classify("-5"), None);
        assert_eq!(classify("3.14.15"), None);
        assert_eq!(classify(".5"), None);
        assert_eq!(classify("!!"), None);
    }

    #[test]
    fn trailing_garbage_after_unit_still_classifies() {
        assert_eq!(classify("10 cmXYZ"), Some(Category::Sizes));
    }

    #[test]
    fn classification_is_idempotent() {
        for token in ["XL", "10 cm", "5", "a", "red", "???"] {
            assert_eq!(classify(token), classify(token));
        }
    }
}
