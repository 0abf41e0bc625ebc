use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Failed to acquire a 2D drawing context: {0}")]
    CanvasUnavailable(String),

    #[error("Invalid picker style: {0}")]
    InvalidStyle(String),

    #[error("Color picker is already attached")]
    AlreadyAttached,

    #[error("Failed to mount color picker: {0}")]
    Mount(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;
