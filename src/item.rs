//! Holdings item value object.
//!
//! An [`Item`] is one physical or electronic piece attached to a
//! bibliographic record: a barcode, a raw call-number string with a scheme
//! hint, and library/location codes. Items are immutable once constructed;
//! the engine only reads them.

use serde::{Deserialize, Serialize};

/// Prefix marking an electronic ("online") call number.
pub const ELECTRONIC_CALLNUM_PREFIX: &str = "INTERNET RESOURCE";

/// Prefix marking a temporary in-process call number.
pub const TEMP_CALLNUM_PREFIX: &str = "XX(";

/// Call numbers that carry no browsable value and are skipped outright.
pub const SKIPPED_CALLNUMS: [&str; 2] = ["NO CALL NUMBER", "IN PROCESS"];

/// Library code whose items get first preference in barcode selection.
pub const PREFERRED_LIBRARY: &str = "GREEN";

/// Library code with known-unreliable LC call numbers.
const LANE_LIBRARY: &str = "LANE-MED";

/// One holdings item of a bibliographic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item barcode.
    pub barcode: String,
    /// Raw call-number string as transcribed in the holdings record.
    pub raw_callnum: Option<String>,
    /// Raw scheme hint (`LC`, `LCPER`, `DEWEY`, `SUDOC`, `ALPHANUM`, ...),
    /// case-insensitive, open set.
    pub scheme_hint: String,
    /// Raw library code.
    pub library_code: String,
    /// Permanent shelving location code.
    pub home_location: String,
    /// Current location code, empty when the item is at its home location.
    pub current_location: String,
    /// Free-text public note.
    pub public_note: Option<String>,
}

impl Item {
    /// Create an item with empty locations and no note.
    #[must_use]
    pub fn new(
        barcode: impl Into<String>,
        raw_callnum: Option<String>,
        scheme_hint: impl Into<String>,
        library_code: impl Into<String>,
    ) -> Self {
        Item {
            barcode: barcode.into(),
            raw_callnum,
            scheme_hint: scheme_hint.into(),
            library_code: library_code.into(),
            home_location: String::new(),
            current_location: String::new(),
            public_note: None,
        }
    }

    /// Set the home location code.
    #[must_use]
    pub fn with_home_location(mut self, loc: impl Into<String>) -> Self {
        self.home_location = loc.into();
        self
    }

    /// Set the current location code.
    #[must_use]
    pub fn with_current_location(mut self, loc: impl Into<String>) -> Self {
        self.current_location = loc.into();
        self
    }

    /// Set the public note.
    #[must_use]
    pub fn with_public_note(mut self, note: impl Into<String>) -> Self {
        self.public_note = Some(note.into());
        self
    }

    /// The raw call number trimmed and with interior whitespace collapsed,
    /// or `None` when absent or empty after trimming.
    #[must_use]
    pub fn normalized_callnum(&self) -> Option<String> {
        let raw = self.raw_callnum.as_deref()?;
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            None
        } else {
            Some(collapsed)
        }
    }

    /// True when the call number is on the skip list or starts with the
    /// electronic or temporary call-number marker.
    #[must_use]
    pub fn has_ignored_callnum(&self) -> bool {
        match self.normalized_callnum() {
            Some(c) => {
                let upper = c.to_uppercase();
                SKIPPED_CALLNUMS.contains(&upper.as_str())
                    || upper.starts_with(ELECTRONIC_CALLNUM_PREFIX)
                    || upper.starts_with(TEMP_CALLNUM_PREFIX)
            }
            None => false,
        }
    }

    /// True when the item comes from the Lane medical library with an
    /// LC scheme hint that does not validate as LC. Lane's LC-labelled
    /// numbers are known to be unreliable; such items are excluded from
    /// facet, shelflist, and preferred-item output.
    #[must_use]
    pub fn has_bad_lane_lc_callnum(&self) -> bool {
        if self.library_code != LANE_LIBRARY {
            return false;
        }
        let hint = self.scheme_hint.to_uppercase();
        if hint != "LC" && hint != "LCPER" {
            return false;
        }
        match self.normalized_callnum() {
            Some(c) => !crate::classifier::is_valid_lc(&c),
            None => false,
        }
    }

    /// True when either location code is in the missing/lost set.
    #[must_use]
    pub fn is_missing_or_lost(&self, missing_locations: &indexmap::IndexSet<String>) -> bool {
        missing_locations.contains(&self.home_location)
            || missing_locations.contains(&self.current_location)
    }
}
