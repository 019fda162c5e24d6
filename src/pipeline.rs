//! Record-level orchestration.
//!
//! [`process_record`] takes one bibliographic record's items and produces
//! everything the index needs: per-item lopped call numbers and browse keys,
//! the record's deduplicated facet paths, and the preferred barcode. Lopping
//! is record-scoped because the longest-common-prefix rule and the
//! ellipsis-collision rule both depend on sibling items.
//!
//! [`process_records`] fans a batch out over a rayon thread pool; records
//! are independent, so the batch parallelizes trivially.

use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classifier::classify_item;
use crate::facet::{facet_paths_for_item, FacetPath};
use crate::item::Item;
use crate::lopper::{lop_call_number, longest_common_prefix_lop, LOPPED_MARKER};
use crate::preferred::{preferred_barcode, Candidate};
use crate::scheme::CallNumberType;
use crate::shelfkey::{reverse_shelfkey, shelfkey};
use crate::tables::ClassificationTables;
use crate::volume_sort::volume_sort_key;

/// One record's worth of input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordInput {
    /// The record's holdings items, in holdings order.
    pub items: Vec<Item>,
    /// True when the record describes a serial; serial lopping also removes
    /// trailing year designators.
    pub is_serial: bool,
    /// True when the record carries a government-document number field.
    pub has_gov_doc_number: bool,
}

/// Index-ready output for one item.
///
/// Items whose call numbers are ignored, absent, or unreliable carry `None`
/// in every derived field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIndexEntry {
    /// Item barcode.
    pub barcode: String,
    /// Raw library code.
    pub library_code: String,
    /// Permanent shelving location code.
    pub home_location: String,
    /// Current location code, empty when at home.
    pub current_location: String,
    /// Free-text public note.
    pub public_note: Option<String>,
    /// Normalized full call number.
    pub full_callnum: Option<String>,
    /// Canonical scheme the call number classified to.
    pub scheme: Option<CallNumberType>,
    /// Lopped call number, possibly ending in the continuation marker.
    pub lopped_callnum: Option<String>,
    /// Forward shelf-browse key built from the lopped call number.
    pub shelfkey: Option<String>,
    /// Reverse shelf-browse key, terminated and padded to the browse width.
    pub reverse_shelfkey: Option<String>,
    /// Key ordering this item within its lopped group.
    pub volume_sort: Option<String>,
}

/// Index-ready output for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOutput {
    /// One entry per input item, in input order.
    pub items: Vec<ItemIndexEntry>,
    /// Deduplicated facet paths contributed by all items, in first-seen
    /// order.
    pub facet_paths: Vec<FacetPath>,
    /// Barcode of the record's preferred item, when one qualifies.
    pub preferred_barcode: Option<String>,
}

/// A browsable item's working state during record processing.
struct Browsable {
    /// Index into the record's item list.
    item_idx: usize,
    scheme: CallNumberType,
    /// `library:home_location:scheme` lopping bucket.
    bucket: String,
    full: String,
    lopped: String,
}

/// Compute lopped call numbers for every browsable item in the record.
///
/// Single-item records, and single-item `library:location:scheme` buckets,
/// stay unlopped. Multi-item LC/Dewey buckets lop each member by grammar;
/// other schemes share the bucket's longest common prefix. In both cases,
/// when one item's lopped value collides with another item's full call
/// number, the full call number gets the continuation marker so the two
/// stay distinguishable.
fn lop_record_items(browsable: &mut [Browsable], is_serial: bool) {
    if browsable.len() < 2 {
        return;
    }

    let mut buckets: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (idx, b) in browsable.iter().enumerate() {
        buckets.entry(b.bucket.clone()).or_default().push(idx);
    }

    for indices in buckets.values() {
        if indices.len() < 2 {
            continue;
        }
        let scheme = browsable[indices[0]].scheme;
        let mut lopped_values: IndexSet<String> = IndexSet::new();

        if scheme == CallNumberType::Lc || scheme == CallNumberType::Dewey {
            for &idx in indices {
                let lopped = lop_call_number(&browsable[idx].full, scheme, is_serial);
                if lopped != browsable[idx].full {
                    let base = lopped.strip_suffix(LOPPED_MARKER).unwrap_or(&lopped);
                    lopped_values.insert(base.trim_end().to_string());
                    browsable[idx].lopped = lopped;
                }
            }
        } else {
            let fulls: Vec<&str> = indices
                .iter()
                .map(|&idx| browsable[idx].full.as_str())
                .collect();
            if let Some(prefix) = longest_common_prefix_lop(&fulls) {
                lopped_values.insert(prefix.clone());
                for &idx in indices {
                    browsable[idx].lopped = prefix.clone();
                }
            }
        }

        // An item whose full call number equals another's lopped value gets
        // the marker so the shelf list shows it as the collapsed group.
        for &idx in indices {
            if lopped_values.contains(&browsable[idx].full) {
                browsable[idx].lopped = format!("{}{LOPPED_MARKER}", browsable[idx].full);
            }
        }
    }
}

/// Process one record into index-ready output.
#[must_use]
pub fn process_record(input: &RecordInput, tables: &ClassificationTables) -> RecordOutput {
    let mut browsable: Vec<Browsable> = Vec::with_capacity(input.items.len());
    for (item_idx, item) in input.items.iter().enumerate() {
        let classification = classify_item(item);
        if let (Some(scheme), Some(full)) = (classification.scheme(), item.normalized_callnum()) {
            browsable.push(Browsable {
                item_idx,
                scheme,
                bucket: format!(
                    "{}:{}:{}",
                    item.library_code,
                    item.home_location,
                    scheme.prefix()
                ),
                lopped: full.clone(),
                full,
            });
        }
    }
    lop_record_items(&mut browsable, input.is_serial);

    let mut entries: Vec<ItemIndexEntry> = input
        .items
        .iter()
        .map(|item| ItemIndexEntry {
            barcode: item.barcode.clone(),
            library_code: item.library_code.clone(),
            home_location: item.home_location.clone(),
            current_location: item.current_location.clone(),
            public_note: item.public_note.clone(),
            full_callnum: None,
            scheme: None,
            lopped_callnum: None,
            shelfkey: None,
            reverse_shelfkey: None,
            volume_sort: None,
        })
        .collect();

    for b in &browsable {
        let forward = shelfkey(&b.lopped, b.scheme);
        let entry = &mut entries[b.item_idx];
        entry.full_callnum = Some(b.full.clone());
        entry.scheme = Some(b.scheme);
        entry.lopped_callnum = Some(b.lopped.clone());
        entry.reverse_shelfkey = Some(reverse_shelfkey(&forward));
        entry.volume_sort = Some(volume_sort_key(&b.full, &b.lopped, &forward));
        entry.shelfkey = Some(forward);
    }

    let mut facet_paths: IndexSet<FacetPath> = IndexSet::new();
    for item in &input.items {
        facet_paths.extend(facet_paths_for_item(item, tables, input.has_gov_doc_number));
    }

    let candidates: Vec<Candidate<'_>> = browsable
        .iter()
        .map(|b| Candidate {
            item: &input.items[b.item_idx],
            scheme: b.scheme,
            lopped: b.lopped.clone(),
        })
        .collect();
    let preferred = preferred_barcode(&candidates);

    RecordOutput {
        items: entries,
        facet_paths: facet_paths.into_iter().collect(),
        preferred_barcode: preferred,
    }
}

/// Process a batch of records in parallel.
#[must_use]
pub fn process_records(
    inputs: &[RecordInput],
    tables: &ClassificationTables,
) -> Vec<RecordOutput> {
    inputs
        .par_iter()
        .map(|input| process_record(input, tables))
        .collect()
}
