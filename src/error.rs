//! Error types for shelfkey operations.
//!
//! Classification, lopping, and key generation never fail: malformed call
//! numbers degrade to sentinel values per the data-quality rules. Errors are
//! confined to lookup-table loading, which happens once at process start.

use thiserror::Error;

/// Error type for lookup-table loading and validation.
#[derive(Error, Debug)]
pub enum ShelfkeyError {
    /// A properties line had no `=` separator.
    #[error("malformed table line {line}: expected `KEY = value`, got {text:?}")]
    MalformedTableLine {
        /// 1-based line number within the supplied text.
        line: usize,
        /// The offending line content.
        text: String,
    },

    /// A properties line had an empty key before the `=` separator.
    #[error("empty table key at line {line}")]
    EmptyTableKey {
        /// 1-based line number within the supplied text.
        line: usize,
    },
}

/// Convenience type alias for [`std::result::Result`] with [`ShelfkeyError`].
pub type Result<T> = std::result::Result<T, ShelfkeyError>;
