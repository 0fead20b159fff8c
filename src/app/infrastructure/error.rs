use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A control the preview depends on was not found when binding widgets.
    #[error("Missing control: {0}")]
    MissingControl(String),

    #[error("Unknown subfamily: {0}")]
    UnknownSubfamily(String),

    #[error("Unknown feature tag: {0}")]
    UnknownFeature(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
