//! Call-number lopping.
//!
//! Lopping truncates volume/part/copy/date designators from a call number so
//! that multiple physical pieces of one title collapse to a single browsable
//! entry. LC and Dewey numbers are lopped by grammar; SuDoc, alphanumeric,
//! and unrecognized numbers have no reliable grammar and are lopped to the
//! longest common prefix of their location bucket instead.
//!
//! Lopping is idempotent: an already-lopped value passes through unchanged.

use lazy_static::lazy_static;
use regex::Regex;

use crate::classifier::{parse_dewey, parse_lc};
use crate::scheme::CallNumberType;

/// Marker appended when serial lopping removed trailing tokens.
pub const LOPPED_MARKER: &str = " ...";

/// Shortest usable longest-common-prefix; anything shorter is noise.
const MIN_COMMON_PREFIX: usize = 4;

lazy_static! {
    /// Volume/part/copy designators that start a loppable suffix.
    static ref VOL_TOKEN: Regex = Regex::new(
        r"(?i)\b(?:V|VOL|VOLS|NO|NOS|PT|PTS|PART|SER|NS|BD|SUPPL?|COPY|DISC|INDEX|GRADE)\.? ?\d"
    )
    .expect("static regex");

    /// A four-digit year (1500-2099), loppable only for serials. Both
    /// boundaries required so a longer digit run never matches mid-number.
    static ref YEAR_TOKEN: Regex =
        Regex::new(r"\b(?:1[5-9]\d{2}|20\d{2})\b").expect("static regex");
}

/// Lop one LC or Dewey call number by grammar.
///
/// For other schemes, and for strings that fail their grammar, the input is
/// returned unchanged; prefix-based lopping for those lives in
/// [`longest_common_prefix_lop`]. When `is_serial` is true, trailing year
/// designators are lopped as well and [`LOPPED_MARKER`] is appended whenever
/// anything was removed.
#[must_use]
pub fn lop_call_number(raw: &str, scheme: CallNumberType, is_serial: bool) -> String {
    if raw.ends_with(LOPPED_MARKER) {
        return raw.to_string();
    }

    let suffix = match scheme {
        CallNumberType::Lc => parse_lc(raw).map(|lc| lc.suffix),
        CallNumberType::Dewey => parse_dewey(raw).map(|d| d.suffix),
        _ => None,
    };
    let Some(suffix) = suffix else {
        return raw.to_string();
    };

    let core_len = raw.len() - suffix.len();
    let mut cut = VOL_TOKEN.find(&suffix).map(|m| m.start());
    if is_serial {
        if let Some(y) = YEAR_TOKEN.find(&suffix) {
            cut = Some(cut.map_or(y.start(), |c| c.min(y.start())));
        }
    }

    match cut {
        Some(offset) => {
            let lopped = raw[..core_len + offset].trim_end_matches([' ', '.', ',', ':', ';', '/']);
            if lopped.is_empty() || lopped.len() == raw.len() {
                raw.to_string()
            } else if is_serial {
                format!("{lopped}{LOPPED_MARKER}")
            } else {
                lopped.to_string()
            }
        }
        None => raw.to_string(),
    }
}

/// Longest common prefix of a bucket of call numbers, compared
/// case-insensitively, trimmed back to the last full alphanumeric run.
///
/// Returns `None` when the bucket has fewer than two members or the usable
/// prefix is shorter than four characters; callers leave such buckets
/// unlopped.
#[must_use]
pub fn longest_common_prefix_lop(callnums: &[&str]) -> Option<String> {
    if callnums.len() < 2 {
        return None;
    }
    let first = callnums[0];
    let mut len = first.len();
    for other in &callnums[1..] {
        len = len.min(common_prefix_len(first, other));
    }
    let lopped = first[..len].trim_end_matches(|c: char| !c.is_alphanumeric());
    if lopped.len() < MIN_COMMON_PREFIX {
        None
    } else {
        Some(lopped.to_string())
    }
}

/// Byte length of the case-insensitive common prefix of two ASCII-ish
/// strings.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x.eq_ignore_ascii_case(y))
        .count()
}
