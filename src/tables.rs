//! Static reference tables for U.S. address vocabulary.
//!
//! All tables are initialized once on first use and never mutated, so the
//! classifiers and the parser can be called concurrently without locking.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Full lowercase state name -> two-letter lowercase code, all 50 states
/// (no territories).
pub(crate) const STATES: &[(&str, &str)] = &[
    ("alabama", "al"),
    ("alaska", "ak"),
    ("arizona", "az"),
    ("arkansas", "ar"),
    ("california", "ca"),
    ("colorado", "co"),
    ("connecticut", "ct"),
    ("delaware", "de"),
    ("florida", "fl"),
    ("georgia", "ga"),
    ("hawaii", "hi"),
    ("idaho", "id"),
    ("illinois", "il"),
    ("indiana", "in"),
    ("iowa", "ia"),
    ("kansas", "ks"),
    ("kentucky", "ky"),
    ("louisiana", "la"),
    ("maine", "me"),
    ("maryland", "md"),
    ("massachusetts", "ma"),
    ("michigan", "mi"),
    ("minnesota", "mn"),
    ("mississippi", "ms"),
    ("missouri", "mo"),
    ("montana", "mt"),
    ("nebraska", "ne"),
    ("nevada", "nv"),
    ("new hampshire", "nh"),
    ("new jersey", "nj"),
    ("new mexico", "nm"),
    ("new york", "ny"),
    ("north carolina", "nc"),
    ("north dakota", "nd"),
    ("ohio", "oh"),
    ("oklahoma", "ok"),
    ("oregon", "or"),
    ("pennsylvania", "pa"),
    ("rhode island", "ri"),
    ("south carolina", "sc"),
    ("south dakota", "sd"),
    ("tennessee", "tn"),
    ("texas", "tx"),
    ("utah", "ut"),
    ("vermont", "vt"),
    ("virginia", "va"),
    ("washington", "wa"),
    ("west virginia", "wv"),
    ("wisconsin", "wi"),
    ("wyoming", "wy"),
];

/// USPS street-suffix vocabulary: full lowercase name -> lowercase
/// abbreviation. Some suffixes are their own abbreviation (e.g. "way").
pub(crate) const STREET_TYPES: &[(&str, &str)] = &[
    ("alley", "aly"),
    ("annex", "anx"),
    ("arcade", "arc"),
    ("avenue", "ave"),
    ("bayou", "byu"),
    ("beach", "bch"),
    ("bend", "bnd"),
    ("bluff", "blf"),
    ("bottom", "btm"),
    ("boulevard", "blvd"),
    ("branch", "br"),
    ("bridge", "brg"),
    ("brook", "brk"),
    ("burg", "bg"),
    ("bypass", "byp"),
    ("camp", "cp"),
    ("canyon", "cyn"),
    ("cape", "cpe"),
    ("causeway", "cswy"),
    ("center", "ctr"),
    ("circle", "cir"),
    ("cliff", "clf"),
    ("club", "clb"),
    ("common", "cmn"),
    ("corner", "cor"),
    ("course", "crse"),
    ("court", "ct"),
    ("courts", "cts"),
    ("cove", "cv"),
    ("creek", "crk"),
    ("crescent", "cres"),
    ("crest", "crst"),
    ("crossing", "xing"),
    ("crossroad", "xrd"),
    ("curve", "curv"),
    ("dale", "dl"),
    ("dam", "dm"),
    ("divide", "dv"),
    ("drive", "dr"),
    ("estate", "est"),
    ("expressway", "expy"),
    ("extension", "ext"),
    ("falls", "fls"),
    ("ferry", "fry"),
    ("field", "fld"),
    ("fields", "flds"),
    ("flat", "flt"),
    ("ford", "frd"),
    ("forest", "frst"),
    ("forge", "frg"),
    ("fork", "frk"),
    ("fort", "ft"),
    ("freeway", "fwy"),
    ("garden", "gdn"),
    ("gateway", "gtwy"),
    ("glen", "gln"),
    ("green", "grn"),
    ("grove", "grv"),
    ("harbor", "hbr"),
    ("haven", "hvn"),
    ("heights", "hts"),
    ("highway", "hwy"),
    ("hill", "hl"),
    ("hills", "hls"),
    ("hollow", "holw"),
    ("inlet", "inlt"),
    ("island", "is"),
    ("junction", "jct"),
    ("key", "ky"),
    ("knoll", "knl"),
    ("lake", "lk"),
    ("landing", "lndg"),
    ("lane", "ln"),
    ("light", "lgt"),
    ("lock", "lck"),
    ("lodge", "ldg"),
    ("loop", "loop"),
    ("mall", "mall"),
    ("manor", "mnr"),
    ("meadow", "mdw"),
    ("meadows", "mdws"),
    ("mill", "ml"),
    ("mills", "mls"),
    ("mission", "msn"),
    ("motorway", "mtwy"),
    ("mount", "mt"),
    ("mountain", "mtn"),
    ("neck", "nck"),
    ("orchard", "orch"),
    ("overpass", "opas"),
    ("park", "park"),
    ("parkway", "pkwy"),
    ("pass", "pass"),
    ("passage", "psge"),
    ("path", "path"),
    ("pike", "pike"),
    ("pine", "pne"),
    ("pines", "pnes"),
    ("place", "pl"),
    ("plain", "pln"),
    ("plains", "plns"),
    ("plaza", "plz"),
    ("point", "pt"),
    ("port", "prt"),
    ("prairie", "pr"),
    ("radial", "radl"),
    ("ramp", "ramp"),
    ("ranch", "rnch"),
    ("rapids", "rpds"),
    ("rest", "rst"),
    ("ridge", "rdg"),
    ("river", "riv"),
    ("road", "rd"),
    ("route", "rte"),
    ("row", "row"),
    ("run", "run"),
    ("shoal", "shl"),
    ("shore", "shr"),
    ("shores", "shrs"),
    ("skyway", "skwy"),
    ("spring", "spg"),
    ("springs", "spgs"),
    ("spur", "spur"),
    ("square", "sq"),
    ("station", "sta"),
    ("stream", "strm"),
    ("street", "st"),
    ("summit", "smt"),
    ("terrace", "ter"),
    ("throughway", "trwy"),
    ("trace", "trce"),
    ("track", "trak"),
    ("trail", "trl"),
    ("tunnel", "tunl"),
    ("turnpike", "tpke"),
    ("underpass", "upas"),
    ("union", "un"),
    ("valley", "vly"),
    ("viaduct", "via"),
    ("view", "vw"),
    ("village", "vlg"),
    ("vista", "vis"),
    ("walk", "walk"),
    ("way", "way"),
    ("well", "wl"),
    ("wells", "wls"),
];

/// Street directions, abbreviation-only (no full-word variants).
pub(crate) const DIRECTIONS: &[&str] = &["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// A unit/apartment keyword with its canonical abbreviation and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitTerm {
    /// Canonical abbreviation (e.g. "Apt").
    pub abbreviation: &'static str,
    /// Human-readable label (e.g. "Apartment").
    pub label: &'static str,
}

/// Lowercase unit keyword -> term metadata.
pub(crate) const UNIT_TERMS: &[(&str, UnitTerm)] = &[
    (
        "apt",
        UnitTerm {
            abbreviation: "Apt",
            label: "Apartment",
        },
    ),
    (
        "ste",
        UnitTerm {
            abbreviation: "Ste",
            label: "Suite",
        },
    ),
    (
        "suite",
        UnitTerm {
            abbreviation: "Suite",
            label: "Suite",
        },
    ),
    (
        "unit",
        UnitTerm {
            abbreviation: "Unit",
            label: "Unit",
        },
    ),
    (
        "#",
        UnitTerm {
            abbreviation: "#",
            label: "Number",
        },
    ),
];

// Precomputed maps/sets for O(1) membership checks.

pub(crate) static STATE_BY_NAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STATES.iter().copied().collect());

pub(crate) static STATE_CODES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STATES.iter().map(|&(_, code)| code).collect());

pub(crate) static STREET_TYPE_BY_NAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STREET_TYPES.iter().copied().collect());

pub(crate) static STREET_TYPE_BY_ABBREVIATION: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STREET_TYPES.iter().map(|&(full, abbr)| (abbr, full)).collect());

pub(crate) static UNIT_TERM_BY_KEYWORD: Lazy<HashMap<&'static str, UnitTerm>> =
    Lazy::new(|| UNIT_TERMS.iter().copied().collect());

/// Look up the term metadata for a unit keyword (case-insensitive).
pub fn unit_term(keyword: &str) -> Option<UnitTerm> {
    UNIT_TERM_BY_KEYWORD
        .get(keyword.trim().to_lowercase().as_str())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifty_states() {
        assert_eq!(STATES.len(), 50);
        assert_eq!(STATE_BY_NAME.get("utah"), Some(&"ut"));
        assert!(STATE_CODES.contains("wa"));
        assert!(!STATE_CODES.contains("pr"));
    }

    #[test]
    fn test_street_type_tables_are_bidirectional() {
        assert_eq!(STREET_TYPE_BY_NAME.get("boulevard"), Some(&"blvd"));
        assert_eq!(STREET_TYPE_BY_ABBREVIATION.get("blvd"), Some(&"boulevard"));

        for &(full, abbr) in STREET_TYPES {
            assert_eq!(STREET_TYPE_BY_NAME.get(full), Some(&abbr));
            assert!(STREET_TYPE_BY_ABBREVIATION.contains_key(abbr));
        }
    }

    #[test]
    fn test_unit_term_lookup() {
        let apt = unit_term("APT").unwrap();
        assert_eq!(apt.abbreviation, "Apt");
        assert_eq!(apt.label, "Apartment");
        assert_eq!(unit_term("#").unwrap().label, "Number");
        assert!(unit_term("floor").is_none());
    }
}
