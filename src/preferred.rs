//! Preferred-item selection.
//!
//! When a record view needs a single representative item (one barcode whose
//! call number stands for the whole record), the selector picks it in four
//! narrowing stages: preferred library first, then best classification
//! scheme, then the lopped group holding the most items, then the shortest
//! lopped value. Every stage breaks remaining ties by first-encountered
//! order, so selection is deterministic for a fixed item order.

use indexmap::IndexMap;

use crate::item::{Item, PREFERRED_LIBRARY};
use crate::scheme::CallNumberType;

/// One item offered to the selector, with its classified scheme and its
/// lopped call number as computed by record-level lopping.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// The holdings item.
    pub item: &'a Item,
    /// Canonical scheme the item's call number classified to.
    pub scheme: CallNumberType,
    /// The item's lopped call number (continuation marker allowed).
    pub lopped: String,
}

/// Pick the preferred barcode among a record's candidates.
///
/// Candidates with ignored or absent call numbers, unreliable Lane LC
/// numbers, or an empty library code never qualify. Returns `None` when no
/// candidate qualifies.
#[must_use]
pub fn preferred_barcode(candidates: &[Candidate<'_>]) -> Option<String> {
    let qualifying: Vec<&Candidate<'_>> = candidates
        .iter()
        .filter(|c| {
            !c.item.library_code.is_empty()
                && c.item.normalized_callnum().is_some()
                && !c.item.has_ignored_callnum()
                && !c.item.has_bad_lane_lc_callnum()
        })
        .collect();
    if qualifying.is_empty() {
        return None;
    }

    // Preferred library, else the alphabetically first library present.
    let library = if qualifying
        .iter()
        .any(|c| c.item.library_code == PREFERRED_LIBRARY)
    {
        PREFERRED_LIBRARY.to_string()
    } else {
        qualifying
            .iter()
            .map(|c| c.item.library_code.clone())
            .min()?
    };
    let in_library: Vec<&Candidate<'_>> = qualifying
        .into_iter()
        .filter(|c| c.item.library_code == library)
        .collect();

    // Best scheme by fixed priority.
    let best_priority = in_library.iter().map(|c| c.scheme.priority()).min()?;
    let in_scheme = in_library
        .into_iter()
        .filter(|c| c.scheme.priority() == best_priority);

    // Group by lopped call number, preserving encounter order.
    let mut groups: IndexMap<&str, Vec<&Candidate<'_>>> = IndexMap::new();
    for c in in_scheme {
        groups.entry(c.lopped.as_str()).or_default().push(c);
    }

    // Most-populated group, then shortest lopped value, then first seen.
    let winner = groups.values().enumerate().min_by_key(|(idx, group)| {
        let lopped_len = group.first().map_or(0, |c| c.lopped.len());
        (std::cmp::Reverse(group.len()), lopped_len, *idx)
    })?;
    winner.1.first().map(|c| c.item.barcode.clone())
}
