use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Acquisition Error: {0}")]
    Acquisition(#[from] AcquisitionError),
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("A new round is already being acquired.")]
    AcquisitionInProgress,
}

// Scene acquisition failures, both recoverable by letting the player retry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcquisitionError {
    #[error("No acceptable scene found after {attempts} attempts, try different settings")]
    NoValidSceneFound { attempts: u32 },
    #[error("Failed to fetch scene: {0}")]
    FetchFailed(String),
}
