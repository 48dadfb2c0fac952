//! Error types for the hr-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the backend crates' errors for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Source error: {0}")]
    Source(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Zone not configured: {0}")]
    ZoneNotFound(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hr-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<hr_config::ConfigError> for AppError {
    fn from(err: hr_config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<hr_source::SourceError> for AppError {
    fn from(err: hr_source::SourceError) -> Self {
        AppError::Source(err.to_string())
    }
}

impl From<hr_analysis::AnalysisError> for AppError {
    fn from(err: hr_analysis::AnalysisError) -> Self {
        AppError::Analysis(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Report(err.to_string())
    }
}
