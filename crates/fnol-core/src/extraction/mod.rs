pub mod form_json;
pub mod pdftotext;
pub mod text;

use crate::error::FnolError;
use std::collections::BTreeMap;
use std::path::Path;

/// Form field values keyed by their exact label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.0.insert(label.into(), value.into());
    }

    /// Value for `label`, or `""` when the label is absent.
    pub fn get(&self, label: &str) -> &str {
        self.0.get(label).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormFields(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Decoded document content. Exactly one shape is active per document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSource {
    /// Labeled values from a fillable form.
    Structured(FormFields),
    /// Raw text with no guaranteed layout.
    Unstructured(String),
}

impl FieldSource {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldSource::Structured(_) => "structured",
            FieldSource::Unstructured(_) => "unstructured",
        }
    }
}

/// Trait for document decoding backends.
pub trait DocumentReader: Send + Sync {
    /// Decode document bytes into a field source.
    fn read(&self, bytes: &[u8]) -> Result<FieldSource, FnolError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Pick a reader from the file extension.
pub fn reader_for_path(path: &Path) -> Result<Box<dyn DocumentReader>, FnolError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => Ok(Box::new(pdftotext::PdftotextReader::new())),
        "txt" => Ok(Box::new(text::PlainTextReader)),
        "json" => Ok(Box::new(form_json::FormJsonReader)),
        _ => Err(FnolError::UnsupportedFormat(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        )),
    }
}
