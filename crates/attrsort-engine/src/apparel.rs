//! Apparel letter-size ordinals
//!
//! Fixed ranking of garment sizes from XS up to XXXL. Only the relative
//! order of the ordinals matters; no code relies on the gaps between them.

/// Ordinal per apparel size, strictly increasing with garment size
const APPAREL_ORDER: &[(&str, u8)] = &[
    ("xs", 1),
    ("s", 2),
    ("m", 3),
    ("l", 4),
    ("xl", 5),
    ("xxl", 6),
    ("xxxl", 7),
];

/// Look up the ordinal for a lower-cased apparel size token
///
/// Returns `None` for tokens outside the table; comparators substitute
/// `u8::MAX` so such tokens sort to the end of the ascending order.
pub fn rank(lowered: &str) -> Option<u8> {
    APPAREL_ORDER
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, ordinal)| *ordinal)
}

/// Whether a lower-cased token is an apparel size key
pub fn is_apparel_size(lowered: &str) -> bool {
    rank(lowered).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_garment_progression() {
        let sizes = ["xs", "s", "m", "l", "xl", "xxl", "xxxl"];
        let ranks: Vec<u8> = sizes.iter().map(|s| rank(s).unwrap()).collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unknown_tokens_have_no_rank() {
        assert_eq!(rank("xxxxl"), None);
        assert_eq!(rank("small"), None);
        assert_eq!(rank(""), None);
    }
}
