use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontdeskError {
    #[error("Not in a frontdesk project. Run 'frontdesk init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .frontdesk/ to reinitialize.")]
    AlreadyInitialized,

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FrontdeskError>;
