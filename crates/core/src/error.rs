//! Caller-facing error model.

use thiserror::Error;

/// Result type returned by the caller-facing search wrapper.
pub type CriteriaResult<T> = Result<T, CriteriaError>;

/// Request-level failure.
///
/// Only the search wrapper produces these. The normalizer and the pipeline
/// never fail: bad filter input degrades to "no match" instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    /// The caller supplied no records to search.
    #[error("No data provided")]
    EmptyData,

    /// The caller supplied no parameter mapping at all.
    #[error("No parameters provided")]
    EmptyParameters,
}

impl CriteriaError {
    /// Stable machine-readable code, used by the HTTP layer.
    pub fn code(&self) -> &'static str {
        match self {
            CriteriaError::EmptyData => "empty_data",
            CriteriaError::EmptyParameters => "empty_parameters",
        }
    }
}
