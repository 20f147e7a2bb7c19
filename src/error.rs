//! Error types and handling
//!
//! Runtime degradations (denied geolocation, a description map that fails to
//! parse, an amenity tag over the cap) are handled where they occur and never
//! travel as errors. [`AppError`] covers the genuinely fatal edges: malformed
//! bundled fixtures, invalid configuration, and export I/O.

use thiserror::Error;

/// Errors that can occur while assembling or driving the map screen
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    Configuration(String),

    /// A bundled facility dataset is unusable
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// The geolocation collaborator could not produce a position
    #[error("Geolocation error: {0}")]
    Geolocation(String),

    /// Writing the annotated-facility export failed
    #[error("Export error: {0}")]
    Export(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a dataset error
    pub fn dataset_error(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Create a geolocation error
    pub fn geolocation_error(msg: impl Into<String>) -> Self {
        Self::Geolocation(msg.into())
    }

    /// Create an export error
    pub fn export_error(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "Configuration",
            AppError::Dataset(_) => "Dataset",
            AppError::Geolocation(_) => "Geolocation",
            AppError::Export(_) => "Export",
            AppError::Io(_) => "IO",
            AppError::Serialization(_) => "Serialization",
        }
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
