use crate::error::FnolError;
use crate::extraction::{DocumentReader, FieldSource};

/// Reads plain UTF-8 text as an unstructured field source.
pub struct PlainTextReader;

impl DocumentReader for PlainTextReader {
    fn read(&self, bytes: &[u8]) -> Result<FieldSource, FnolError> {
        if bytes.is_empty() {
            return Err(FnolError::EmptyDocument);
        }
        let text = std::str::from_utf8(bytes)
            .map_err(|e| FnolError::Decode(format!("text is not valid UTF-8: {}", e)))?;
        Ok(FieldSource::Unstructured(text.replace("\r\n", "\n")))
    }

    fn backend_name(&self) -> &str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_text_and_normalizes_line_endings() {
        let source = PlainTextReader.read(b"Policy Number: P-1\r\nVIN: X").unwrap();
        assert_eq!(
            source,
            FieldSource::Unstructured("Policy Number: P-1\nVIN: X".into())
        );
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        assert!(matches!(
            PlainTextReader.read(&[0xff, 0xfe, 0x00]),
            Err(FnolError::Decode(_))
        ));
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(matches!(
            PlainTextReader.read(&[]),
            Err(FnolError::EmptyDocument)
        ));
    }
}
