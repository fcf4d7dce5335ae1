/// Error types for dashboard view state
use pmd_properties::PropertyError;
use pmd_stats::StatsError;
use thiserror::Error;

/// Main error type for dashboard views
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Properties(#[from] PropertyError),

    /// Theme value not in the catalogue
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Color mode other than light, dark or system
    #[error("Unknown color mode: {0}")]
    UnknownColorMode(String),

    /// Profile form failed validation
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Submit with no editor dialog open
    #[error("No property editor is open")]
    EditorClosed,

    /// Payload could not be serialized
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
