use thiserror::Error;

/// Failures while turning a user-supplied file into preview text.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Please upload a valid text file (.txt)")]
    UnsupportedType,
    #[error("Error reading file.")]
    Read(#[source] std::io::Error),
}

/// Failures of the upload action, from local validation to the wire.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file selected")]
    NothingToUpload,
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("Invalid response from server: {0}")]
    Body(#[from] serde_json::Error),
    #[error("{0}")]
    Server(String),
    #[error("Upload failed with status {0}")]
    Status(u16),
}
