//! Call-number classification.
//!
//! Maps a raw call-number string plus a scheme hint to a canonical
//! [`CallNumberType`]. The hint is advisory: LC-hinted strings that fail the
//! LC grammar but parse as Dewey are reclassified to Dewey and vice versa,
//! while strings that fail every grammar degrade to `Other`. Classification
//! is total; no input is an error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::item::{
    Item, ELECTRONIC_CALLNUM_PREFIX, SKIPPED_CALLNUMS, TEMP_CALLNUM_PREFIX,
};
use crate::scheme::{CallNumberType, Classification};

lazy_static! {
    /// Class letters, class number, optional decimal, rest.
    static ref LC_CLASS: Regex =
        Regex::new(r"(?i)^([A-Z]{1,3}) ?(\d+)(?:\.(\d+))?(.*)$").expect("static regex");

    /// One cutter: optional space, optional period, a single letter, digits,
    /// optional trailing letters. Two-letter "cutters" are invalid.
    static ref LC_CUTTER: Regex =
        Regex::new(r"(?i)^ ?\.? ?([A-Z])(\d+)([A-Z]*)").expect("static regex");

    /// Dewey: up to three class digits, optional decimal, one cutter
    /// (optional period, letter, digits, optional trailing letters), rest.
    static ref DEWEY: Regex =
        Regex::new(r"(?i)^(\d{1,3})(?:\.(\d+))? ?\.?([A-Z])(\d+)([A-Z]*)(.*)$")
            .expect("static regex");

    /// SuDoc: agency letters, series digits, optional subseries, a colon
    /// section with content after it.
    static ref SUDOC: Regex =
        Regex::new(r"(?i)^[A-Z]{1,4} ?\d+(?:[./\- ][A-Z0-9./\- ]*)?:\S").expect("static regex");
}

/// LC class letters may not start with these; they are unassigned in the LC
/// outline and show up only in local accession-style numbers.
const LC_UNUSED_FIRST_LETTERS: [char; 5] = ['I', 'O', 'W', 'X', 'Y'];

/// One parsed cutter group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cutter {
    pub letter: char,
    pub digits: String,
    pub tail: String,
}

/// Parsed LC call number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LcCallNumber {
    pub letters: String,
    pub class_digits: String,
    pub class_decimal: String,
    pub cutters: Vec<Cutter>,
    /// Everything after the last cutter: dates, volume designators.
    pub suffix: String,
}

/// Parsed Dewey call number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeweyCallNumber {
    pub class_digits: String,
    pub class_decimal: String,
    pub cutter: Cutter,
    pub suffix: String,
}

/// Parse a normalized string as an LC call number.
pub(crate) fn parse_lc(callnum: &str) -> Option<LcCallNumber> {
    let caps = LC_CLASS.captures(callnum)?;
    let letters = caps.get(1)?.as_str().to_uppercase();
    let first = letters.chars().next()?;
    if LC_UNUSED_FIRST_LETTERS.contains(&first) {
        return None;
    }
    let class_digits = caps.get(2)?.as_str().to_string();
    let class_decimal = caps.get(3).map_or(String::new(), |m| m.as_str().to_string());

    let mut rest = caps.get(4).map_or("", |m| m.as_str());
    let mut cutters = Vec::new();
    while let Some(c) = LC_CUTTER.captures(rest) {
        let whole = c.get(0).expect("match");
        cutters.push(Cutter {
            letter: c
                .get(1)
                .expect("cutter letter")
                .as_str()
                .to_uppercase()
                .chars()
                .next()
                .expect("single letter"),
            digits: c.get(2).expect("cutter digits").as_str().to_string(),
            tail: c.get(3).map_or(String::new(), |m| m.as_str().to_uppercase()),
        });
        rest = &rest[whole.end()..];
    }

    // A period here would begin a malformed cutter, not a volume suffix.
    if rest.trim_start().starts_with('.') {
        return None;
    }

    Some(LcCallNumber {
        letters,
        class_digits,
        class_decimal,
        cutters,
        suffix: rest.to_string(),
    })
}

/// Parse a normalized string as a Dewey call number.
pub(crate) fn parse_dewey(callnum: &str) -> Option<DeweyCallNumber> {
    let caps = DEWEY.captures(callnum)?;
    Some(DeweyCallNumber {
        class_digits: caps.get(1)?.as_str().to_string(),
        class_decimal: caps.get(2).map_or(String::new(), |m| m.as_str().to_string()),
        cutter: Cutter {
            letter: caps
                .get(3)?
                .as_str()
                .to_uppercase()
                .chars()
                .next()
                .expect("single letter"),
            digits: caps.get(4)?.as_str().to_string(),
            tail: caps.get(5).map_or(String::new(), |m| m.as_str().to_uppercase()),
        },
        suffix: caps.get(6).map_or(String::new(), |m| m.as_str().to_string()),
    })
}

/// True when the string parses under the LC grammar.
#[must_use]
pub fn is_valid_lc(callnum: &str) -> bool {
    parse_lc(callnum).is_some()
}

/// True when the string parses under the Dewey grammar.
#[must_use]
pub fn is_valid_dewey(callnum: &str) -> bool {
    parse_dewey(callnum).is_some()
}

/// True when the string parses under the SuDoc grammar.
#[must_use]
pub fn is_valid_sudoc(callnum: &str) -> bool {
    SUDOC.is_match(callnum)
}

/// Classify a raw call number under a scheme hint.
///
/// `raw` may be unnormalized; leading/trailing and interior whitespace runs
/// are collapsed before matching. Absent, empty, and punctuation-only
/// strings classify as [`Classification::Missing`]; skip-list entries and
/// ignore-marker prefixes classify as [`Classification::Ignored`].
#[must_use]
pub fn classify(raw: Option<&str>, scheme_hint: &str) -> Classification {
    let normalized = match raw {
        Some(r) => r.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    };
    if normalized.is_empty() || !normalized.chars().any(char::is_alphanumeric) {
        return Classification::Missing;
    }

    let upper = normalized.to_uppercase();
    if SKIPPED_CALLNUMS.contains(&upper.as_str())
        || upper.starts_with(ELECTRONIC_CALLNUM_PREFIX)
        || upper.starts_with(TEMP_CALLNUM_PREFIX)
    {
        return Classification::Ignored;
    }

    let scheme = match scheme_hint.to_uppercase().as_str() {
        "LC" | "LCPER" => {
            if is_valid_lc(&normalized) {
                CallNumberType::Lc
            } else if is_valid_dewey(&normalized) {
                CallNumberType::Dewey
            } else {
                CallNumberType::Other
            }
        }
        "DEWEY" | "DEWEYPER" => {
            if is_valid_dewey(&normalized) {
                CallNumberType::Dewey
            } else if is_valid_lc(&normalized) {
                CallNumberType::Lc
            } else {
                CallNumberType::Other
            }
        }
        "SUDOC" => {
            if is_valid_sudoc(&normalized) {
                CallNumberType::Sudoc
            } else {
                CallNumberType::Other
            }
        }
        // ALPHANUM, ASIS, THESIS, XX, and anything unrecognized.
        _ => CallNumberType::Alphanum,
    };
    Classification::Scheme(scheme)
}

/// Classify one item's call number.
#[must_use]
pub fn classify_item(item: &Item) -> Classification {
    if item.has_bad_lane_lc_callnum() {
        // Lane LC numbers that fail the grammar are treated like skipped
        // call numbers: present on the item but not browsable.
        return Classification::Ignored;
    }
    classify(item.raw_callnum.as_deref(), &item.scheme_hint)
}
