mod source;

pub use source::{mime_for_path, BufferSource, FileSource, PathSource};

use crate::error::IngestError;

/// The only declared type the drop zone accepts.
pub const PLAIN_TEXT_MIME: &str = "text/plain";

/// Gate on the declared type only; contents are never sniffed.
pub fn validate(source: &dyn FileSource) -> Result<(), IngestError> {
    if source.mime() == PLAIN_TEXT_MIME {
        Ok(())
    } else {
        Err(IngestError::UnsupportedType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn plain_text_passes_validation() {
        let source = BufferSource::new("notes.txt", PLAIN_TEXT_MIME, b"hello".to_vec());
        assert!(validate(&source).is_ok());
    }

    #[rstest]
    #[case("application/pdf")]
    #[case("image/png")]
    #[case("text/html")]
    #[case("")]
    fn other_declared_types_are_rejected(#[case] mime: &str) {
        let source = BufferSource::new("notes.txt", mime, b"hello".to_vec());
        assert!(matches!(
            validate(&source),
            Err(IngestError::UnsupportedType)
        ));
    }
}
