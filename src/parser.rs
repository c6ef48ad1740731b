//! Address parsing functionality.
//!
//! The classification engine is a single left-to-right pass over the
//! whitespace/comma-delimited tokens of the normalized input. Each token
//! is tested against an ordered list of guarded transition rules and is
//! claimed by the first rule that matches. The order of the rules is load
//! bearing: many tokens satisfy more than one predicate (a two-letter word
//! can be both a state and a direction), and the relative order below is
//! what disambiguates them.

use crate::classify::{
    is_apartment_keyword, is_integer, is_po_box, is_state, is_street_direction, is_street_type,
    is_zipcode, state_abbreviation,
};
use crate::error::{Error, Result};
use crate::normalize::{fingerprint, normalize, tokenize};

/// Parse an address string, best-effort.
///
/// Never fails: fields that cannot be recognized are left as `None`, and
/// blank input yields an all-empty [`ParsedAddress`]. Use
/// [`AddressParser::parse`] to distinguish blank input.
///
/// # Examples
///
/// ```rust
/// let addr = usaddress_rs::parse("123 N Center St Lehi, UT 84043");
///
/// assert_eq!(addr.house_number.as_deref(), Some("123"));
/// assert_eq!(addr.street_direction.as_deref(), Some("N"));
/// assert_eq!(addr.street_name.as_deref(), Some("CENTER"));
/// assert_eq!(addr.street_type.as_deref(), Some("ST"));
/// assert_eq!(addr.city.as_deref(), Some("LEHI"));
/// assert_eq!(addr.state.as_deref(), Some("UT"));
/// assert_eq!(addr.postal_code.as_deref(), Some("84043"));
/// ```
pub fn parse(address: &str) -> ParsedAddress {
    AddressParser::new().parse(address).unwrap_or_default()
}

/// Structured representation of a parsed U.S. address.
///
/// Produced by a single parse pass and never mutated afterwards. `None`
/// means "not found"; the parser never invents values.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedAddress {
    /// Normalized input: periods stripped, whitespace collapsed, uppercased.
    /// Retained for the content fingerprint and fallback rendering.
    pub original: String,
    /// Street number, or box number for PO Box addresses (e.g. "123").
    pub house_number: Option<String>,
    /// Direction prefix/suffix on the street (N, NE, E, SE, S, SW, W, NW).
    pub street_direction: Option<String>,
    /// Core (possibly multi-word) street name, or "PO BOX" for box addresses.
    pub street_name: Option<String>,
    /// Street-type abbreviation (e.g. "ST", "AVE"). Never set for PO Boxes.
    pub street_type: Option<String>,
    /// Apartment/suite/unit identifier (e.g. "4", "2B").
    pub unit: Option<String>,
    /// City name, possibly multi-word (e.g. "SPANISH FORK").
    pub city: Option<String>,
    /// Two-letter uppercase state abbreviation.
    pub state: Option<String>,
    /// 5-digit zip code, any "+4" extension discarded.
    pub postal_code: Option<String>,
    /// Opaque pass-through latitude; never computed by this crate.
    pub latitude: Option<f64>,
    /// Opaque pass-through longitude; never computed by this crate.
    pub longitude: Option<f64>,
}

impl ParsedAddress {
    /// Check whether the parse recognized no components at all.
    pub fn is_empty(&self) -> bool {
        self.house_number.is_none()
            && self.street_direction.is_none()
            && self.street_name.is_none()
            && self.street_type.is_none()
            && self.unit.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
    }

    /// Get all non-empty components as a map.
    pub fn components(&self) -> std::collections::HashMap<String, String> {
        let mut map = std::collections::HashMap::new();

        macro_rules! add_component {
            ($field:expr, $name:expr) => {
                if let Some(ref value) = $field {
                    map.insert($name.to_string(), value.clone());
                }
            };
        }

        add_component!(self.house_number, "house_number");
        add_component!(self.street_direction, "street_direction");
        add_component!(self.street_name, "street_name");
        add_component!(self.street_type, "street_type");
        add_component!(self.unit, "unit");
        add_component!(self.city, "city");
        add_component!(self.state, "state");
        add_component!(self.postal_code, "postal_code");

        map
    }

    /// Content fingerprint of the normalized input: lowercase hex SHA-256.
    ///
    /// Stable across whitespace, period, and case variations of the same
    /// address, so it is usable as a deduplication/lookup key by external
    /// storage layers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let a = usaddress_rs::parse("123 N Center St. Lehi, UT 84043");
    /// let b = usaddress_rs::parse("123  n center st lehi, ut 84043");
    ///
    /// assert_eq!(a.fingerprint(), b.fingerprint());
    /// ```
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.original)
    }
}

impl std::str::FromStr for ParsedAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AddressParser::new().parse(s)
    }
}

/// Address parser.
///
/// Stateless; a single instance may be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use usaddress_rs::AddressParser;
///
/// let parser = AddressParser::new();
/// let parsed = parser.parse("137 N 800 E Spanish Fork, UT 84660")?;
///
/// assert_eq!(parsed.street_name.as_deref(), Some("800 E"));
/// assert_eq!(parsed.postal_code.as_deref(), Some("84660"));
/// # Ok::<(), usaddress_rs::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressParser;

impl AddressParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse an address string into structured components.
    ///
    /// Malformed addresses are not errors: unrecognized fields remain
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if the input is blank after trimming.
    pub fn parse(&self, address: &str) -> Result<ParsedAddress> {
        if address.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let original = normalize(address);
        let tokens = tokenize(&original);
        let mut acc = Accumulator::default();

        let rules: &[Rule] = if is_po_box(address) {
            acc.street_name.push_str("PO BOX");
            PO_BOX_RULES
        } else {
            GENERAL_RULES
        };
        run_rules(rules, &tokens, &mut acc);

        Ok(acc.finish(original))
    }

    /// Parse multiple addresses in batch.
    pub fn parse_batch(&self, addresses: &[&str]) -> Vec<Result<ParsedAddress>> {
        addresses.iter().map(|addr| self.parse(addr)).collect()
    }

    /// Parse multiple addresses in parallel using multiple threads.
    ///
    /// Results are returned in the same order as the input. The parser is
    /// stateless, so no per-thread setup is needed.
    #[cfg(feature = "parallel")]
    pub fn parse_batch_parallel(&self, addresses: &[&str]) -> Vec<Result<ParsedAddress>> {
        use rayon::prelude::*;

        addresses.par_iter().map(|addr| self.parse(addr)).collect()
    }

    /// Parse multiple addresses in parallel, keeping only successful results.
    #[cfg(feature = "parallel")]
    pub fn parse_batch_parallel_ok(&self, addresses: &[&str]) -> Vec<ParsedAddress> {
        self.parse_batch_parallel(addresses)
            .into_iter()
            .filter_map(|result| result.ok())
            .collect()
    }
}

/// Mutable state threaded through the token scan. Single-valued fields are
/// assigned at most once (each rule guards on emptiness); `street_name` and
/// `city_words` accumulate.
#[derive(Debug, Default)]
struct Accumulator {
    house_number: String,
    street_direction: String,
    // Accumulates words with trailing spaces; trimmed in `finish`.
    street_name: String,
    street_type: String,
    unit: String,
    state: String,
    postal_code: String,
    city_words: Vec<String>,
}

impl Accumulator {
    fn finish(self, original: String) -> ParsedAddress {
        fn non_empty(value: String) -> Option<String> {
            (!value.is_empty()).then_some(value)
        }

        ParsedAddress {
            original,
            house_number: non_empty(self.house_number),
            street_direction: non_empty(self.street_direction),
            street_name: non_empty(self.street_name.trim_end().to_string()),
            street_type: non_empty(self.street_type),
            unit: non_empty(self.unit),
            city: non_empty(self.city_words.join(" ")),
            state: non_empty(self.state),
            postal_code: non_empty(self.postal_code),
            latitude: None,
            longitude: None,
        }
    }
}

/// The token under consideration, with its position and lookahead.
#[derive(Debug)]
struct Cursor<'a> {
    index: usize,
    token: &'a str,
    next: Option<&'a str>,
}

/// What a rule did with the token.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// The rule claimed the token; stop testing further rules.
    Consumed,
    /// The rule claimed the token *and* its successor (unit keyword +
    /// unit value); advance the scan past both.
    ConsumedWithNext,
    /// Not this rule's token; try the next rule.
    Pass,
}

type Rule = fn(&mut Accumulator, &Cursor<'_>) -> Outcome;

/// Priority-ordered rules for the general (non-PO-Box) branch. First match
/// wins; changing the order changes the parse.
const GENERAL_RULES: &[Rule] = &[
    rule_house_number,
    rule_street_direction,
    rule_street_type,
    rule_unit,
    rule_state,
    rule_postal_code,
    rule_street_name,
    rule_city_word,
];

/// Priority-ordered rules for the PO-Box branch.
const PO_BOX_RULES: &[Rule] = &[
    rule_po_box_marker,
    rule_po_box_number,
    rule_po_box_state,
    rule_postal_code,
    rule_po_box_city_word,
];

fn run_rules(rules: &[Rule], tokens: &[&str], acc: &mut Accumulator) {
    let mut index = 0;

    while index < tokens.len() {
        let cursor = Cursor {
            index,
            token: tokens[index],
            next: tokens.get(index + 1).copied(),
        };

        for rule in rules {
            match rule(acc, &cursor) {
                Outcome::Consumed => break,
                Outcome::ConsumedWithNext => {
                    index += 1;
                    break;
                }
                // A token no rule claims is silently dropped.
                Outcome::Pass => {}
            }
        }

        index += 1;
    }
}

/// Position 0 is always the house-number slot: an integer-like first token
/// becomes the house number, anything else there is dropped. Either way no
/// later rule sees the first token.
fn rule_house_number(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if cursor.index != 0 {
        return Outcome::Pass;
    }
    if is_integer(cursor.token) {
        acc.house_number = cursor.token.to_string();
    }

    Outcome::Consumed
}

fn rule_street_direction(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if !acc.street_direction.is_empty() || !is_street_direction(cursor.token) {
        return Outcome::Pass;
    }
    acc.street_direction = cursor.token.to_string();

    Outcome::Consumed
}

/// The street type must be seen before any city word: once the scan has
/// drifted into the city portion, a type-looking token belongs to the city
/// name ("Sandy", "Gardens", ...).
fn rule_street_type(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if !acc.street_type.is_empty()
        || !acc.city_words.is_empty()
        || !acc.unit.is_empty()
        || !is_street_type(cursor.token)
    {
        return Outcome::Pass;
    }
    acc.street_type = cursor.token.to_string();

    Outcome::Consumed
}

/// A unit keyword (APT, UNIT, #) claims the *following* token as the unit
/// value. A trailing keyword with nothing after it is dropped.
fn rule_unit(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if !acc.unit.is_empty() || !is_apartment_keyword(cursor.token) {
        return Outcome::Pass;
    }
    match cursor.next {
        Some(value) => {
            acc.unit = value.to_string();
            Outcome::ConsumedWithNext
        }
        None => Outcome::Consumed,
    }
}

fn rule_state(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if !acc.state.is_empty() {
        return Outcome::Pass;
    }
    match state_abbreviation(cursor.token) {
        Some(abbreviation) => {
            acc.state = abbreviation;
            Outcome::Consumed
        }
        None => Outcome::Pass,
    }
}

/// A zip is only accepted once the state is known. This deliberately
/// rejects 5-digit numerics earlier in the string, which are usually
/// numbered street names ("800 E"), not postal codes.
fn rule_postal_code(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if acc.state.is_empty() || !acc.postal_code.is_empty() || !is_zipcode(cursor.token) {
        return Outcome::Pass;
    }
    acc.postal_code = cursor
        .token
        .split('-')
        .next()
        .unwrap_or(cursor.token)
        .to_string();

    Outcome::Consumed
}

/// Street-name words accumulate only in the window between the direction
/// (or second position) and the street type / unit / city. A trailing
/// direction already folded into the name closes the window, so a name
/// like "800 E" does not keep swallowing city words.
fn rule_street_name(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if acc.street_direction.is_empty() && cursor.index != 1 {
        return Outcome::Pass;
    }
    if !acc.street_type.is_empty() || !acc.unit.is_empty() || !acc.city_words.is_empty() {
        return Outcome::Pass;
    }
    let last_word = acc
        .street_name
        .trim_end()
        .rsplit(' ')
        .next()
        .unwrap_or("");
    if is_street_direction(last_word) {
        return Outcome::Pass;
    }
    acc.street_name.push_str(cursor.token);
    acc.street_name.push(' ');

    Outcome::Consumed
}

/// Fallback: anything at least two characters long before the state is
/// known is a city word.
fn rule_city_word(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if !acc.state.is_empty() || cursor.token.len() < 2 {
        return Outcome::Pass;
    }
    acc.city_words.push(cursor.token.to_string());

    Outcome::Consumed
}

/// The literal "PO" and "BOX" markers carry no field content.
fn rule_po_box_marker(_acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if cursor.token == "PO" || cursor.token == "BOX" {
        Outcome::Consumed
    } else {
        Outcome::Pass
    }
}

/// The first integer-like token is the box number, wherever it appears.
fn rule_po_box_number(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if !acc.house_number.is_empty() || !is_integer(cursor.token) {
        return Outcome::Pass;
    }
    acc.house_number = cursor.token.to_string();

    Outcome::Consumed
}

/// In the PO-Box branch the state must be a strict two-letter code; full
/// names stay available to the city accumulator ("WEST CHESTER").
fn rule_po_box_state(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if !acc.state.is_empty() || cursor.token.len() != 2 || !is_state(cursor.token) {
        return Outcome::Pass;
    }
    acc.state = cursor.token.to_uppercase();

    Outcome::Consumed
}

/// City words accumulate only before the state is assigned.
fn rule_po_box_city_word(acc: &mut Accumulator, cursor: &Cursor<'_>) -> Outcome {
    if !acc.state.is_empty() || cursor.token.len() < 2 {
        return Outcome::Pass;
    }
    acc.city_words.push(cursor.token.to_string());

    Outcome::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor<'a>(index: usize, token: &'a str, next: Option<&'a str>) -> Cursor<'a> {
        Cursor { index, token, next }
    }

    #[test]
    fn test_rule_house_number_only_at_position_zero() {
        let mut acc = Accumulator::default();
        assert_eq!(
            rule_house_number(&mut acc, &cursor(0, "123", None)),
            Outcome::Consumed
        );
        assert_eq!(acc.house_number, "123");

        let mut acc = Accumulator::default();
        assert_eq!(
            rule_house_number(&mut acc, &cursor(3, "123", None)),
            Outcome::Pass
        );
        assert_eq!(acc.house_number, "");
    }

    #[test]
    fn test_rule_house_number_consumes_non_numeric_first_token() {
        let mut acc = Accumulator::default();
        assert_eq!(
            rule_house_number(&mut acc, &cursor(0, "MAIN", None)),
            Outcome::Consumed
        );
        assert_eq!(acc.house_number, "");
    }

    #[test]
    fn test_rule_street_direction_assigned_once() {
        let mut acc = Accumulator::default();
        assert_eq!(
            rule_street_direction(&mut acc, &cursor(1, "N", None)),
            Outcome::Consumed
        );
        assert_eq!(acc.street_direction, "N");
        assert_eq!(
            rule_street_direction(&mut acc, &cursor(2, "SE", None)),
            Outcome::Pass
        );
        assert_eq!(acc.street_direction, "N");
    }

    #[test]
    fn test_rule_street_type_blocked_by_city_and_unit() {
        let mut acc = Accumulator::default();
        assert_eq!(
            rule_street_type(&mut acc, &cursor(2, "ST", None)),
            Outcome::Consumed
        );
        assert_eq!(acc.street_type, "ST");

        let mut acc = Accumulator::default();
        acc.city_words.push("LEHI".to_string());
        assert_eq!(
            rule_street_type(&mut acc, &cursor(4, "ST", None)),
            Outcome::Pass
        );

        let mut acc = Accumulator::default();
        acc.unit = "4".to_string();
        assert_eq!(
            rule_street_type(&mut acc, &cursor(4, "ST", None)),
            Outcome::Pass
        );
    }

    #[test]
    fn test_rule_unit_takes_following_token() {
        let mut acc = Accumulator::default();
        assert_eq!(
            rule_unit(&mut acc, &cursor(3, "APT", Some("4"))),
            Outcome::ConsumedWithNext
        );
        assert_eq!(acc.unit, "4");

        // Trailing keyword with no value is dropped.
        let mut acc = Accumulator::default();
        assert_eq!(rule_unit(&mut acc, &cursor(3, "APT", None)), Outcome::Consumed);
        assert_eq!(acc.unit, "");
    }

    #[test]
    fn test_rule_state_normalizes_and_assigns_once() {
        let mut acc = Accumulator::default();
        assert_eq!(
            rule_state(&mut acc, &cursor(4, "UTAH", None)),
            Outcome::Consumed
        );
        assert_eq!(acc.state, "UT");
        assert_eq!(rule_state(&mut acc, &cursor(5, "ID", None)), Outcome::Pass);
        assert_eq!(acc.state, "UT");
    }

    #[test]
    fn test_rule_postal_code_requires_state() {
        let mut acc = Accumulator::default();
        assert_eq!(
            rule_postal_code(&mut acc, &cursor(2, "84043", None)),
            Outcome::Pass
        );

        acc.state = "UT".to_string();
        assert_eq!(
            rule_postal_code(&mut acc, &cursor(5, "84043-1234", None)),
            Outcome::Consumed
        );
        assert_eq!(acc.postal_code, "84043");
    }

    #[test]
    fn test_rule_street_name_window() {
        // Second token always qualifies.
        let mut acc = Accumulator::default();
        assert_eq!(
            rule_street_name(&mut acc, &cursor(1, "MAIN", None)),
            Outcome::Consumed
        );
        assert_eq!(acc.street_name, "MAIN ");

        // Later tokens need the direction to be set.
        let mut acc = Accumulator::default();
        assert_eq!(
            rule_street_name(&mut acc, &cursor(2, "MAIN", None)),
            Outcome::Pass
        );
        acc.street_direction = "N".to_string();
        assert_eq!(
            rule_street_name(&mut acc, &cursor(2, "800", None)),
            Outcome::Consumed
        );
    }

    #[test]
    fn test_rule_street_name_closed_by_trailing_direction() {
        let mut acc = Accumulator::default();
        acc.street_direction = "N".to_string();
        acc.street_name = "800 E ".to_string();
        assert_eq!(
            rule_street_name(&mut acc, &cursor(4, "SPANISH", None)),
            Outcome::Pass
        );
    }

    #[test]
    fn test_rule_city_word() {
        let mut acc = Accumulator::default();
        assert_eq!(
            rule_city_word(&mut acc, &cursor(4, "LEHI", None)),
            Outcome::Consumed
        );
        // Single characters are dropped.
        assert_eq!(rule_city_word(&mut acc, &cursor(5, "X", None)), Outcome::Pass);
        // Nothing joins the city once the state is set.
        acc.state = "UT".to_string();
        assert_eq!(
            rule_city_word(&mut acc, &cursor(6, "SANDY", None)),
            Outcome::Pass
        );
        assert_eq!(acc.city_words, vec!["LEHI".to_string()]);
    }

    #[test]
    fn test_parse_simple_address() {
        let addr = parse("123 N Center St Lehi, UT 84043");

        assert_eq!(addr.original, "123 N CENTER ST LEHI, UT 84043");
        assert_eq!(addr.house_number.as_deref(), Some("123"));
        assert_eq!(addr.street_direction.as_deref(), Some("N"));
        assert_eq!(addr.street_name.as_deref(), Some("CENTER"));
        assert_eq!(addr.street_type.as_deref(), Some("ST"));
        assert_eq!(addr.unit, None);
        assert_eq!(addr.city.as_deref(), Some("LEHI"));
        assert_eq!(addr.state.as_deref(), Some("UT"));
        assert_eq!(addr.postal_code.as_deref(), Some("84043"));
    }

    #[test]
    fn test_parse_strips_periods() {
        let with = parse("123 N Center St. Lehi, UT 84043");
        let without = parse("123 N Center St Lehi, UT 84043");

        assert_eq!(with, without);
    }

    #[test]
    fn test_parse_numeric_street_name() {
        let addr = parse("137 N 800 E Spanish Fork, UT 84660");

        assert_eq!(addr.house_number.as_deref(), Some("137"));
        assert_eq!(addr.street_direction.as_deref(), Some("N"));
        // "800" is a street name, not a postal code: the state is not yet
        // known when it is seen.
        assert_eq!(addr.street_name.as_deref(), Some("800 E"));
        assert_eq!(addr.street_type, None);
        assert_eq!(addr.city.as_deref(), Some("SPANISH FORK"));
        assert_eq!(addr.state.as_deref(), Some("UT"));
        assert_eq!(addr.postal_code.as_deref(), Some("84660"));
    }

    #[test]
    fn test_parse_washington_address() {
        let addr = parse("2505 NE 135th St, Seattle, WA 98125");

        assert_eq!(addr.original, "2505 NE 135TH ST, SEATTLE, WA 98125");
        assert_eq!(addr.house_number.as_deref(), Some("2505"));
        assert_eq!(addr.street_direction.as_deref(), Some("NE"));
        assert_eq!(addr.street_name.as_deref(), Some("135TH"));
        assert_eq!(addr.street_type.as_deref(), Some("ST"));
        assert_eq!(addr.city.as_deref(), Some("SEATTLE"));
        assert_eq!(addr.state.as_deref(), Some("WA"));
        assert_eq!(addr.postal_code.as_deref(), Some("98125"));
    }

    #[test]
    fn test_parse_po_box() {
        let addr = parse("PO BOX 523029 West Chester, PA 18630");

        assert_eq!(addr.house_number.as_deref(), Some("523029"));
        assert_eq!(addr.street_direction, None);
        assert_eq!(addr.street_name.as_deref(), Some("PO BOX"));
        assert_eq!(addr.street_type, None);
        assert_eq!(addr.city.as_deref(), Some("WEST CHESTER"));
        assert_eq!(addr.state.as_deref(), Some("PA"));
        assert_eq!(addr.postal_code.as_deref(), Some("18630"));
    }

    #[test]
    fn test_parse_po_box_with_periods() {
        let addr = parse("P.O. Box 44 Lehi, UT 84043");

        assert_eq!(addr.street_name.as_deref(), Some("PO BOX"));
        assert_eq!(addr.house_number.as_deref(), Some("44"));
        assert_eq!(addr.city.as_deref(), Some("LEHI"));
        assert_eq!(addr.state.as_deref(), Some("UT"));
        assert_eq!(addr.postal_code.as_deref(), Some("84043"));
    }

    #[test]
    fn test_parse_unit() {
        let addr = parse("123 Main St Apt 4 Lehi, UT 84043");

        assert_eq!(addr.house_number.as_deref(), Some("123"));
        assert_eq!(addr.street_name.as_deref(), Some("MAIN"));
        assert_eq!(addr.street_type.as_deref(), Some("ST"));
        assert_eq!(addr.unit.as_deref(), Some("4"));
        assert_eq!(addr.city.as_deref(), Some("LEHI"));
    }

    #[test]
    fn test_parse_zip_requires_state_first() {
        // A zip-shaped token before any state token is dropped.
        let addr = parse("123 Main St Lehi 84043");

        assert_eq!(addr.postal_code, None);
        assert_eq!(addr.state, None);
    }

    #[test]
    fn test_parse_garbage_yields_empty_fields() {
        let addr = parse("???");

        assert!(addr.is_empty());
    }

    #[test]
    fn test_parser_rejects_blank_input() {
        let parser = AddressParser::new();

        assert!(matches!(parser.parse("   "), Err(Error::EmptyInput)));
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_from_str() {
        let addr: ParsedAddress = "123 N Center St Lehi, UT 84043".parse().unwrap();

        assert_eq!(addr.house_number.as_deref(), Some("123"));
    }

    #[test]
    fn test_components_map() {
        let addr = parse("123 N Center St Lehi, UT 84043");
        let components = addr.components();

        assert_eq!(components.get("house_number"), Some(&"123".to_string()));
        assert_eq!(components.get("city"), Some(&"LEHI".to_string()));
        assert_eq!(components.get("unit"), None);
    }

    #[test]
    fn test_parse_batch() {
        let parser = AddressParser::new();
        let results = parser.parse_batch(&["123 Main St Lehi, UT 84043", ""]);

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
