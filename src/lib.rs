#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Shelfkey: Call-Number Classification & Shelf-Key Engine
//!
//! A Rust library that turns the raw call numbers attached to a library
//! catalog record into everything a faceted search index needs: canonical
//! scheme classification, lopped (volume-collapsed) call numbers, sortable
//! forward and reverse shelf-browse keys, hierarchical classification facet
//! paths, and a preferred representative item per record.
//!
//! ## Quick Start
//!
//! ### Processing a Record
//!
//! ```ignore
//! use shelfkey::{process_record, tables, Item, RecordInput};
//!
//! let input = RecordInput {
//!     items: vec![
//!         Item::new("36105...", Some("QE538.8 .N36 V.1".into()), "LC", "GREEN")
//!             .with_home_location("STACKS"),
//!         Item::new("36106...", Some("QE538.8 .N36 V.2".into()), "LC", "GREEN")
//!             .with_home_location("STACKS"),
//!     ],
//!     is_serial: false,
//!     has_gov_doc_number: false,
//! };
//!
//! let output = process_record(&input, tables::default_tables());
//! for path in &output.facet_paths {
//!     println!("{path}"); // LC Classification|Q - Science|QE - Geology
//! }
//! ```
//!
//! ### Classifying a Single Call Number
//!
//! ```ignore
//! use shelfkey::{classify, CallNumberType, Classification};
//!
//! let outcome = classify(Some("550.6 .U58P NO.1707"), "DEWEY");
//! assert_eq!(outcome, Classification::Scheme(CallNumberType::Dewey));
//! ```
//!
//! ### Building Browse Keys
//!
//! ```ignore
//! use shelfkey::{shelfkey, reverse_shelfkey, CallNumberType};
//!
//! let forward = shelfkey("QE538.8 .N36", CallNumberType::Lc);
//! let backward = reverse_shelfkey(&forward);
//! // forward keys sort in shelf order; backward keys sort in reverse
//! ```
//!
//! ## Modules
//!
//! - [`scheme`] — Canonical call-number schemes and classification outcomes
//! - [`item`] — The holdings item value object
//! - [`classifier`] — Call-number grammars and scheme classification
//! - [`lopper`] — Volume/part/date suffix truncation
//! - [`shelfkey`] — Forward and reverse shelf-browse keys
//! - [`volume_sort`] — Ordering within a lopped group
//! - [`tables`] — LC/Dewey/gov-doc lookup tables
//! - [`facet`] — Hierarchical classification facet paths
//! - [`preferred`] — Preferred-item (barcode) selection
//! - [`pipeline`] — Record-level orchestration and batch processing
//! - [`error`] — Error types and result type

pub mod classifier;
pub mod error;
pub mod facet;
pub mod item;
pub mod lopper;
pub mod pipeline;
pub mod preferred;
pub mod scheme;
pub mod shelfkey;
pub mod tables;
pub mod volume_sort;

pub use classifier::{classify, classify_item, is_valid_dewey, is_valid_lc, is_valid_sudoc};
pub use error::{Result, ShelfkeyError};
pub use facet::{dewey_facet_path, facet_paths_for_item, gov_doc_facet_path, lc_facet_path, FacetPath};
pub use item::{Item, PREFERRED_LIBRARY};
pub use lopper::{lop_call_number, longest_common_prefix_lop, LOPPED_MARKER};
pub use pipeline::{process_record, process_records, ItemIndexEntry, RecordInput, RecordOutput};
pub use preferred::{preferred_barcode, Candidate};
pub use scheme::{CallNumberType, Classification};
pub use shelfkey::{reverse_shelfkey, shelfkey};
pub use tables::ClassificationTables;
pub use volume_sort::volume_sort_key;
