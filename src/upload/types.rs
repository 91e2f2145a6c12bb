use crate::error::{IngestError, UploadError};
use serde::{Deserialize, Serialize};

/// Wire format of the upload request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPayload {
    pub content: String,
    pub file_name: String,
}

/// Whatever the server sends back. Both fields are optional: a success body
/// may omit `fileName`, an error body may omit `error`, and an empty body
/// deserializes as neither.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Completion of a background file read.
#[derive(Debug)]
pub struct IngestEvent {
    pub generation: u64,
    pub file_name: String,
    pub result: Result<String, IngestError>,
}

/// Completion of a background upload. The success value is the filename to
/// report back to the user.
#[derive(Debug)]
pub struct UploadEvent {
    pub generation: u64,
    pub result: Result<String, UploadError>,
}
