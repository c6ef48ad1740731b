//! Token classifiers.
//!
//! Pure predicate functions over single tokens (or, for [`is_po_box`] and
//! [`is_apartment`], over a whole address string). Each is independently
//! usable; the classification engine in [`crate::parser`] combines them
//! under a fixed priority order.

use crate::normalize::tokenize;
use crate::tables;

// Zip codes are bounded as zero-padded 5-digit strings, so an ordinary
// string comparison against these works. See `is_zipcode`.
const SMALLEST_ZIP_CODE: &str = "01001";
const LARGEST_ZIP_CODE: &str = "99950";

/// Whether the trimmed token parses as a whole number.
pub(crate) fn is_integer(token: &str) -> bool {
    token.trim().parse::<i64>().is_ok()
}

/// Whether the token is a valid 5-digit zip code, with any trailing "+4"
/// extension ("-XXXX") stripped first.
///
/// The bounds check is a *string* comparison against "01001"/"99950". For
/// fixed-width zero-padded 5-digit strings this is equivalent to a numeric
/// comparison, and the length check guarantees fixed width here.
///
/// # Examples
///
/// ```rust
/// assert!(usaddress_rs::is_zipcode("84043"));
/// assert!(usaddress_rs::is_zipcode("84043-1234"));
/// assert!(!usaddress_rs::is_zipcode("00999"));
/// assert!(!usaddress_rs::is_zipcode("800"));
/// ```
pub fn is_zipcode(token: &str) -> bool {
    let token = token.split('-').next().unwrap_or(token);

    is_integer(token)
        && token.len() == 5
        && token >= SMALLEST_ZIP_CODE
        && token <= LARGEST_ZIP_CODE
}

/// Whether the token matches a state's full name or two-letter code,
/// case-insensitively.
///
/// # Examples
///
/// ```rust
/// assert!(usaddress_rs::is_state("UT"));
/// assert!(usaddress_rs::is_state("Utah"));
/// assert!(!usaddress_rs::is_state("XX"));
/// ```
pub fn is_state(token: &str) -> bool {
    let lower = token.trim().to_lowercase();

    tables::STATE_BY_NAME.contains_key(lower.as_str())
        || tables::STATE_CODES.contains(lower.as_str())
}

/// The two-letter uppercase abbreviation for a state name or code, or
/// `None` if the token is not a recognized state.
///
/// # Examples
///
/// ```rust
/// assert_eq!(usaddress_rs::state_abbreviation("Utah"), Some("UT".to_string()));
/// assert_eq!(usaddress_rs::state_abbreviation("wa"), Some("WA".to_string()));
/// assert_eq!(usaddress_rs::state_abbreviation("Gotham"), None);
/// ```
pub fn state_abbreviation(token: &str) -> Option<String> {
    let lower = token.trim().to_lowercase();

    if let Some(code) = tables::STATE_BY_NAME.get(lower.as_str()) {
        return Some(code.to_uppercase());
    }
    if tables::STATE_CODES.contains(lower.as_str()) {
        return Some(lower.to_uppercase());
    }

    None
}

/// Whether the token case-insensitively matches a known street-type
/// abbreviation (e.g. "St", "AVE", "blvd").
pub fn is_street_type(token: &str) -> bool {
    tables::STREET_TYPE_BY_ABBREVIATION.contains_key(token.trim().to_lowercase().as_str())
}

/// The canonical title-cased abbreviation for a full street-type word, or
/// the input unchanged if unrecognized.
///
/// # Examples
///
/// ```rust
/// assert_eq!(usaddress_rs::street_type_abbreviation("Circle"), "Cir");
/// assert_eq!(usaddress_rs::street_type_abbreviation("Unknownville"), "Unknownville");
/// ```
pub fn street_type_abbreviation(full: &str) -> String {
    match tables::STREET_TYPE_BY_NAME.get(full.trim().to_lowercase().as_str()) {
        Some(abbr) => title_case(abbr),
        None => full.to_string(),
    }
}

/// The full lowercase street-type word for an abbreviation, or `None` if
/// the abbreviation is unrecognized.
///
/// # Examples
///
/// ```rust
/// assert_eq!(usaddress_rs::street_type_expansion("blvd"), Some("boulevard"));
/// assert_eq!(usaddress_rs::street_type_expansion("zzz"), None);
/// ```
pub fn street_type_expansion(abbr: &str) -> Option<&'static str> {
    tables::STREET_TYPE_BY_ABBREVIATION
        .get(abbr.trim().to_lowercase().as_str())
        .copied()
}

/// Whether the token is a street direction (N, NE, E, SE, S, SW, W, NW),
/// case-insensitively.
pub fn is_street_direction(token: &str) -> bool {
    let upper = token.trim().to_uppercase();

    tables::DIRECTIONS.contains(&upper.as_str())
}

/// Whether the token starts a unit designation in the middle of a street
/// line: APT, UNIT, or the literal "#".
///
/// Narrower than [`is_apartment`], which scans a whole address for any of
/// the unit keywords (including STE/SUITE).
pub(crate) fn is_apartment_keyword(token: &str) -> bool {
    matches!(token.trim().to_uppercase().as_str(), "APT" | "UNIT" | "#")
}

/// Whether an address string is a PO Box: after removing spaces and
/// periods, the uppercased input contains "POBOX" anywhere.
///
/// # Examples
///
/// ```rust
/// assert!(usaddress_rs::is_po_box("PO BOX 123"));
/// assert!(usaddress_rs::is_po_box("p.o. box 44"));
/// assert!(!usaddress_rs::is_po_box("123 Post Office Ln"));
/// ```
pub fn is_po_box(address: &str) -> bool {
    address
        .replace([' ', '.'], "")
        .to_uppercase()
        .contains("POBOX")
}

/// Whether any whitespace/comma-delimited token of the address is a
/// recognized unit keyword (apt, ste, suite, unit, #).
///
/// # Examples
///
/// ```rust
/// assert!(usaddress_rs::is_apartment("123 Main St Apt 4"));
/// assert!(usaddress_rs::is_apartment("123 Main St Suite 4"));
/// assert!(!usaddress_rs::is_apartment("123 Main St"));
/// ```
pub fn is_apartment(address: &str) -> bool {
    tokenize(address)
        .iter()
        .any(|token| tables::unit_term(token).is_some())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
