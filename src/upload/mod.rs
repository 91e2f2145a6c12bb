mod client;
mod types;

pub use client::UploadClient;
pub use types::{IngestEvent, UploadEvent, UploadPayload};
