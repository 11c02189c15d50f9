use thiserror::Error;

/// Application-level errors (CLI layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ManifestError(#[from] recurrence_manifest::error::ManifestError),

    #[error(transparent)]
    CoreError(#[from] recurrence_core::error::CoreError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
