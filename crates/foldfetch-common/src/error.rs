use thiserror::Error;

#[derive(Debug, Error)]
pub enum FoldError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Metadata(String),

    #[error("{0}")]
    Dssp(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FoldError {
    /// Wraps any metadata probe failure, keeping the cause's description.
    pub fn metadata(cause: impl std::fmt::Display) -> Self {
        FoldError::Metadata(format!("Failed to obtain UNIPROT data. {}", cause))
    }

    /// Wraps any DSSP invocation failure, keeping the cause's description.
    pub fn dssp(cause: impl std::fmt::Display) -> Self {
        FoldError::Dssp(format!("Could not calculate secondary structure! {}", cause))
    }
}

pub type Result<T> = std::result::Result<T, FoldError>;
