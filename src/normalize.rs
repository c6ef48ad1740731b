//! Input normalization and related string utilities.
//!
//! Parsing always starts from the normalized form produced here: periods
//! stripped, whitespace runs collapsed, uppercased. The normalized string
//! is what [`crate::ParsedAddress`] retains as `original` and what the
//! content fingerprint is computed over.

use crate::tables;
use sha2::{Digest, Sha256};

/// Normalize a raw address string: strip periods, collapse whitespace runs
/// to single spaces, trim, and uppercase. Commas are kept, since the
/// tokenizer treats them as delimiters.
pub(crate) fn normalize(input: &str) -> String {
    input
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Split on commas and spaces into an ordered token sequence, discarding
/// empty tokens produced by delimiter runs.
pub(crate) fn tokenize(input: &str) -> Vec<&str> {
    input
        .split([',', ' '])
        .filter(|token| !token.is_empty())
        .collect()
}

/// Remove every unit keyword (apt, ste, suite, unit, #) from a
/// space-delimited address string, leaving the unit values in place, and
/// rejoin the remaining tokens with single spaces.
///
/// # Examples
///
/// ```rust
/// assert_eq!(usaddress_rs::scrub_unit("123 Main St Apt 4"), "123 Main St 4");
/// assert_eq!(usaddress_rs::scrub_unit("55 Oak Ave Suite 210 Unit B"), "55 Oak Ave 210 B");
/// ```
pub fn scrub_unit(address: &str) -> String {
    let mut words: Vec<&str> = address.split_whitespace().collect();

    // Drop keywords one at a time, leftmost first, until none remain.
    while let Some(position) = words
        .iter()
        .position(|word| tables::unit_term(word).is_some())
    {
        words.remove(position);
    }

    words.join(" ")
}

/// Lowercase hex SHA-256 of the normalized input, stable across
/// whitespace, period, and case variations of the same address.
pub(crate) fn fingerprint(normalized: &str) -> String {
    let digest = Sha256::digest(normalized.as_bytes());

    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize("123 N Center St. Lehi,  UT 84043"),
            "123 N CENTER ST LEHI, UT 84043"
        );
        assert_eq!(normalize("  p.o. box 12  "), "PO BOX 12");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("2505 NE 135TH ST, SEATTLE, WA 98125"),
            vec!["2505", "NE", "135TH", "ST", "SEATTLE", "WA", "98125"]
        );
        assert_eq!(tokenize(",, ,"), Vec::<&str>::new());
    }

    #[test]
    fn test_scrub_unit() {
        assert_eq!(scrub_unit("123 Main St Apt 4"), "123 Main St 4");
        assert_eq!(scrub_unit("123 Main St"), "123 Main St");
        // Repeats until no keyword remains, case-insensitively.
        assert_eq!(scrub_unit("9 Elm Ct UNIT 2 suite 3"), "9 Elm Ct 2 3");
        assert_eq!(scrub_unit("77 Birch Ln # 5"), "77 Birch Ln 5");
    }

    #[test]
    fn test_fingerprint_is_stable_across_formatting() {
        let a = fingerprint(&normalize("123 N Center St. Lehi, UT 84043"));
        let b = fingerprint(&normalize("123  n center st lehi, ut 84043"));

        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, fingerprint(&normalize("124 N Center St Lehi, UT 84043")));
    }
}
