/// Error types for the statistics engine
use thiserror::Error;

use crate::summary::NoTrendReason;

/// Coarse classification of a [`StatsError`].
///
/// None of these are retryable: callers substitute a safe default
/// (for instance "no trend available") and keep rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    UndefinedTrend,
}

/// Main error type for series generation, windowing and summaries
#[derive(Error, Debug)]
pub enum StatsError {
    /// Window size outside {3, 6, 12}
    #[error("Invalid window: {0} months (expected 3, 6 or 12)")]
    InvalidWindow(usize),

    /// Window token that is not a number
    #[error("Invalid window token: {0:?}")]
    InvalidWindowToken(String),

    /// Reference date could not be parsed or is out of range
    #[error("Invalid reference date {input:?}: {reason}")]
    InvalidReferenceDate { input: String, reason: String },

    /// Records do not form a well-ordered 12 month series
    #[error("Malformed series: {0}")]
    MalformedSeries(String),

    /// Summary requested over no records
    #[error("Cannot summarize an empty window")]
    EmptyWindow,

    /// Revenue total does not fit in 64 bits
    #[error("Revenue total overflows")]
    RevenueOverflow,

    /// Trend computation has no defined value
    #[error("Trend is undefined: {0}")]
    UndefinedTrend(NoTrendReason),

    /// Embedded calibration table failed to parse
    #[error("Failed to parse calibration table: {0}")]
    Calibration(#[from] csv::Error),
}

impl StatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::UndefinedTrend(_) => ErrorKind::UndefinedTrend,
            _ => ErrorKind::InvalidInput,
        }
    }
}

/// Type alias for Results using StatsError
pub type Result<T> = std::result::Result<T, StatsError>;
