use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no source image has been prepared")]
    MissingSource,
    #[error("line-selection engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("target line count must be positive")]
    InvalidTarget,
    #[error("generation already running")]
    AlreadyRunning,
}

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("gallery is full (max {capacity})")]
    Full { capacity: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored gallery is not valid JSON")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[error("storage unavailable: {0}")]
pub struct StorageError(pub String);
