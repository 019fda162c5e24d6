//! Hierarchical classification facet paths.
//!
//! A facet path is an ordered list of display segments, serialized with `|`
//! between segments for hierarchical-facet consumers: e.g.
//! `LC Classification|Q - Science|QE - Geology`. LC paths always carry two
//! levels below the scheme segment; single-letter classes repeat the
//! top-level segment so the hierarchy stays uniform. Government-document
//! paths are additive: an item can contribute both a classification path and
//! a gov-doc path.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::{classify_item, parse_dewey, parse_lc};
use crate::item::Item;
use crate::scheme::{CallNumberType, Classification};
use crate::tables::{
    ClassificationTables, DEWEY_TOP_FACET, GOV_DOC_TOP_FACET, LC_TOP_FACET,
};

/// One hierarchical facet path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetPath(Vec<String>);

impl FacetPath {
    /// Build a path from its segments.
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        FacetPath(segments)
    }

    /// The path's segments, top level first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for FacetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("|"))
    }
}

/// LC path for a normalized, loppable call number, or `None` when the
/// string fails the LC grammar.
#[must_use]
pub fn lc_facet_path(callnum: &str, tables: &ClassificationTables) -> Option<FacetPath> {
    let lc = parse_lc(callnum)?;
    let first = lc.letters.chars().next()?;
    let top_label = tables.lc_top_label(first)?;
    let top = format!("{first} - {top_label}");

    let sub = match tables.lc_subclass_label(&lc.letters) {
        Some(label) => format!("{} - {label}", lc.letters),
        // single-letter classes repeat the top level; unmapped multi-letter
        // classes surface the raw code
        None if lc.letters.len() == 1 => top.clone(),
        None => lc.letters.clone(),
    };

    Some(FacetPath(vec![LC_TOP_FACET.to_string(), top, sub]))
}

/// Dewey path for a normalized call number, or `None` when the string fails
/// the Dewey grammar. The class is zero-padded to three digits before the
/// hundreds/tens prefixes are taken.
#[must_use]
pub fn dewey_facet_path(callnum: &str, tables: &ClassificationTables) -> Option<FacetPath> {
    let dewey = parse_dewey(callnum)?;
    let padded = format!("{:0>3}", dewey.class_digits);
    let hundreds = format!("{}00", &padded[..1]);
    let tens = format!("{}0", &padded[..2]);

    // unmapped prefixes degrade to the raw zero-padded code, like LC
    let hundreds_seg = match tables.dewey_hundreds_label(&hundreds) {
        Some(label) => format!("{hundreds}s - {label}"),
        None => format!("{hundreds}s"),
    };
    let tens_seg = match tables.dewey_tens_label(&tens) {
        Some(label) => format!("{tens}s - {label}"),
        None => format!("{tens}s"),
    };
    Some(FacetPath(vec![
        DEWEY_TOP_FACET.to_string(),
        hundreds_seg,
        tens_seg,
    ]))
}

/// Gov-doc path for a shelving location, resolving the jurisdiction through
/// the tables (unknown locations get the `Other` jurisdiction).
#[must_use]
pub fn gov_doc_facet_path(location: &str, tables: &ClassificationTables) -> FacetPath {
    FacetPath(vec![
        GOV_DOC_TOP_FACET.to_string(),
        tables.jurisdiction_label(location).to_string(),
    ])
}

/// All facet paths one item contributes.
///
/// Missing/lost items contribute nothing. The classification path comes from
/// the item's classified scheme (only LC and Dewey have classification
/// hierarchies); the gov-doc path is added when the item's scheme hint is
/// SuDoc, its call number classifies as SuDoc, its home location is a
/// gov-doc location, or the owning record carries a gov-doc number
/// (`record_has_gov_doc_number`).
#[must_use]
pub fn facet_paths_for_item(
    item: &Item,
    tables: &ClassificationTables,
    record_has_gov_doc_number: bool,
) -> Vec<FacetPath> {
    if item.is_missing_or_lost(&tables.missing_locations) {
        return Vec::new();
    }

    let classification = classify_item(item);
    let normalized = item.normalized_callnum();
    let mut paths = Vec::new();

    if let (Classification::Scheme(scheme), Some(callnum)) = (classification, normalized) {
        let class_path = match scheme {
            CallNumberType::Lc => lc_facet_path(&callnum, tables),
            CallNumberType::Dewey => dewey_facet_path(&callnum, tables),
            _ => None,
        };
        paths.extend(class_path);
    }

    let is_sudoc = item.scheme_hint.eq_ignore_ascii_case("SUDOC")
        || classification == Classification::Scheme(CallNumberType::Sudoc);
    let gov_doc = is_sudoc
        || tables.is_gov_doc_location(&item.home_location)
        || record_has_gov_doc_number;
    if gov_doc && classification.is_browsable() {
        paths.push(gov_doc_facet_path(&item.home_location, tables));
    }

    paths
}
