//! Error types for the design-instant search.

use thiserror::Error;

/// Errors from search configuration.
///
/// A search that cannot bracket its root is not an error; it returns an
/// approximate result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Configuration parameter out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
