use crate::error::IngestError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A user-supplied file as the widget sees it: a display name, a declared
/// type, and a way to read the contents as text. Keeps the widget independent
/// of where the file came from (picker, native drop, byte-backed drop).
pub trait FileSource: Send {
    fn name(&self) -> &str;
    fn mime(&self) -> &str;
    fn read_text(&self) -> Result<String, IngestError>;
}

/// A file on disk, from the picker or a native drag-and-drop.
pub struct PathSource {
    path: PathBuf,
    name: String,
    mime: String,
}

impl PathSource {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = mime_for_path(&path).to_string();
        Self { path, name, mime }
    }
}

impl FileSource for PathSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime(&self) -> &str {
        &self.mime
    }

    fn read_text(&self) -> Result<String, IngestError> {
        fs::read_to_string(&self.path).map_err(IngestError::Read)
    }
}

/// A file already held in memory: drops that arrive as bytes rather than
/// paths. Also serves as the test double.
pub struct BufferSource {
    name: String,
    mime: String,
    bytes: Vec<u8>,
}

impl BufferSource {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

impl FileSource for BufferSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime(&self) -> &str {
        &self.mime
    }

    fn read_text(&self) -> Result<String, IngestError> {
        String::from_utf8(self.bytes.clone())
            .map_err(|e| IngestError::Read(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Declared type of a file we only know by name. Desktop drops carry no MIME
/// information, so the extension stands in for the browser's declared type.
pub fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("txt") | Some("text") => "text/plain",
        Some("md") => "text/markdown",
        Some("html") => "text/html",
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
