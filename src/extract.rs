//! Best-effort extraction of an address embedded in free text.

use crate::parser::parse;

/// Minimum number of words for a candidate window to be worth parsing.
const MIN_ADDRESS_WORDS: usize = 2;

/// Find the best-guess address substring inside a longer block of text.
///
/// Slides a window over the whitespace-split words of the input — every
/// start offset, longest window first — and parses each candidate with the
/// full classification engine. The first window whose parse produces both
/// a house number and a street type is returned verbatim (original casing,
/// single-spaced). Returns `None` when no window qualifies.
///
/// Quadratic in word count, which is fine for the short text blocks this
/// is meant for.
///
/// # Examples
///
/// ```rust
/// let text = "You can find us at 742 Evergreen Ter Springfield, OR 97477";
///
/// assert_eq!(
///     usaddress_rs::extract(text),
///     Some("742 Evergreen Ter Springfield, OR 97477".to_string())
/// );
/// assert_eq!(usaddress_rs::extract("no address here at all"), None);
/// ```
pub fn extract(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();

    for start in 0..words.len() {
        for end in (start + MIN_ADDRESS_WORDS + 1..=words.len()).rev() {
            let candidate = words[start..end].join(" ");
            let parsed = parse(&candidate);

            if parsed.street_type.is_some() && parsed.house_number.is_some() {
                return Some(candidate);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_trailing_address() {
        let found = extract("You can find us at 742 Evergreen Ter Springfield, OR 97477");

        assert_eq!(
            found.as_deref(),
            Some("742 Evergreen Ter Springfield, OR 97477")
        );
    }

    #[test]
    fn test_extract_bare_address() {
        assert_eq!(extract("500 Main St").as_deref(), Some("500 Main St"));
    }

    #[test]
    fn test_extract_requires_house_number_and_street_type() {
        // A street type without a leading number never qualifies.
        assert_eq!(extract("meet me on Center St downtown"), None);
        assert_eq!(extract("no address here at all"), None);
    }

    #[test]
    fn test_extract_too_few_words() {
        assert_eq!(extract("500 Main"), None);
        assert_eq!(extract(""), None);
    }

    #[test]
    fn test_extract_normalizes_repeated_spaces() {
        assert_eq!(
            extract("ship to   500  Main St please").as_deref(),
            Some("500 Main St please")
        );
    }
}
