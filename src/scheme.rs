//! Call-number scheme types.
//!
//! [`CallNumberType`] is the closed set of canonical classification schemes
//! an item's call number can resolve to. [`Classification`] is the outcome of
//! classifying one raw string: either a scheme, or one of two sentinel values
//! for call numbers that carry no browsable value.

use serde::{Deserialize, Serialize};

/// Canonical call-number scheme.
///
/// `Other` is the fallback for strings that fail every supported grammar
/// (thesis numbers, accession placeholders, malformed values). It still gets
/// a best-effort shelfkey; it just never wins scheme-priority contests when a
/// recognized scheme is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallNumberType {
    /// Library of Congress classification.
    Lc,
    /// Dewey Decimal classification.
    Dewey,
    /// U.S. Superintendent of Documents classification.
    Sudoc,
    /// Accession-style or otherwise non-standard alphanumeric identifiers.
    Alphanum,
    /// Anything that fails all supported grammars.
    Other,
}

impl CallNumberType {
    /// Display label for the scheme, matching the raw scheme codes used in
    /// holdings records.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CallNumberType::Lc => "LC",
            CallNumberType::Dewey => "DEWEY",
            CallNumberType::Sudoc => "SUDOC",
            CallNumberType::Alphanum => "ALPHANUM",
            CallNumberType::Other => "OTHER",
        }
    }

    /// Short prefix used in grouping keys, one distinct letter per scheme.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            CallNumberType::Lc => "L",
            CallNumberType::Dewey => "D",
            CallNumberType::Sudoc => "S",
            CallNumberType::Alphanum => "A",
            CallNumberType::Other => "O",
        }
    }

    /// Rank used by the preferred-item selector; lower is better.
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            CallNumberType::Lc => 0,
            CallNumberType::Dewey => 1,
            CallNumberType::Sudoc => 2,
            CallNumberType::Alphanum => 3,
            CallNumberType::Other => 4,
        }
    }
}

impl std::fmt::Display for CallNumberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying one raw call-number string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// The string resolved to a canonical scheme.
    Scheme(CallNumberType),
    /// The string is on the skip list or starts with an ignore marker
    /// (electronic or temporary call number). Excluded from facet, shelflist,
    /// and preferred-item output.
    Ignored,
    /// The string was absent, empty, or normalized to empty. Produces no
    /// downstream value at all.
    Missing,
}

impl Classification {
    /// The canonical scheme, if the string resolved to one.
    #[must_use]
    pub fn scheme(self) -> Option<CallNumberType> {
        match self {
            Classification::Scheme(t) => Some(t),
            _ => None,
        }
    }

    /// True when the string resolved to a scheme (including `Other`).
    #[must_use]
    pub fn is_browsable(self) -> bool {
        matches!(self, Classification::Scheme(_))
    }
}
