//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors surfaced by the review core.
///
/// Read failures never appear here: unreadable or malformed persisted data
/// is replaced by the documented default for that record. Only write
/// failures and boundary validation reach the caller, and none of them are
/// fatal to the process.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The persistence layer rejected a write. The in-memory result of the
    /// operation is still valid but should be treated as unsaved.
    #[error("storage error: {0}")]
    Storage(String),

    /// An update would leave no level selected.
    #[error("at least one level must stay selected")]
    EmptyLevelSelection,

    /// The catalog has no entries to choose from.
    #[error("catalog contains no items")]
    EmptyCatalog,
}
