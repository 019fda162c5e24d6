//! Ordering of full call numbers within one lopped group.
//!
//! When lopping collapses several volumes of a title to one browse entry,
//! the pieces still need a stable order in the record view: `V.2` before
//! `V.10`, `1975` before `1977`. The volume sort key is the group's shelfkey
//! with the lopped-away suffix re-appended in digit-padded form, so that
//! byte-lexical order equals natural volume/part/date order.

use crate::lopper::LOPPED_MARKER;
use crate::shelfkey::pad_digit_runs;

/// Build the sort key ordering `full` within its lopped group.
///
/// `lopped` is the group's lopped base (continuation marker allowed) and
/// `shelfkey` the forward shelfkey built from it. Items whose call number
/// carries no suffix beyond the lopped base return the shelfkey unchanged.
#[must_use]
pub fn volume_sort_key(full: &str, lopped: &str, shelfkey: &str) -> String {
    let base = lopped.strip_suffix(LOPPED_MARKER).unwrap_or(lopped).trim_end();
    let suffix = match full.strip_prefix(base) {
        Some(rest) => rest.trim(),
        None => return shelfkey.to_string(),
    };
    if suffix.is_empty() {
        return shelfkey.to_string();
    }
    format!("{shelfkey} {}", pad_digit_runs(&suffix.to_lowercase()))
}
