use crate::error::FnolError;
use crate::extraction::{DocumentReader, FieldSource};
use std::io::Write;
use std::process::Command;

/// PDF reader using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so that "Label: value" pairs stay on one line.
/// The result is always an unstructured source; form field values are
/// expected to arrive pre-decoded through the JSON reader.
pub struct PdftotextReader;

impl PdftotextReader {
    pub fn new() -> Self {
        PdftotextReader
    }
}

impl Default for PdftotextReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for PdftotextReader {
    fn read(&self, bytes: &[u8]) -> Result<FieldSource, FnolError> {
        if bytes.is_empty() {
            return Err(FnolError::EmptyDocument);
        }

        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| FnolError::Decode(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| FnolError::Decode(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FnolError::PdftotextNotFound
                } else {
                    FnolError::Decode(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(FnolError::PdftotextFailed { code, stderr });
        }

        let text = page_text(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(chars = text.len(), "pdftotext extracted text");
        Ok(FieldSource::Unstructured(text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Join pages (pdftotext separates them with form feeds) and drop the
/// trailing whitespace that `-layout` pads lines with.
fn page_text(raw: &str) -> String {
    raw.split('\x0c')
        .flat_map(|page| page.lines())
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
