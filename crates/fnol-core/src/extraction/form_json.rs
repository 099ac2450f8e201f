use crate::error::FnolError;
use crate::extraction::{DocumentReader, FieldSource, FormFields};
use serde_json::Value;

/// Reads pre-decoded form fields from a JSON object of `label -> value`.
///
/// Strings are trimmed and blank values dropped. Booleans map to the
/// checkbox export values "Yes" / "Off"; numbers keep their literal text.
pub struct FormJsonReader;

impl DocumentReader for FormJsonReader {
    fn read(&self, bytes: &[u8]) -> Result<FieldSource, FnolError> {
        if bytes.is_empty() {
            return Err(FnolError::EmptyDocument);
        }
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| FnolError::Decode(format!("form JSON is malformed: {}", e)))?;
        let Value::Object(map) = value else {
            return Err(FnolError::Decode(
                "form JSON must be an object of field label to value".into(),
            ));
        };

        let mut fields = FormFields::new();
        for (label, value) in map {
            let text = match value {
                Value::String(s) => s.trim().to_string(),
                Value::Bool(true) => "Yes".to_string(),
                Value::Bool(false) => "Off".to_string(),
                Value::Number(n) => n.to_string(),
                Value::Null => continue,
                other => {
                    return Err(FnolError::Decode(format!(
                        "form field '{}' has unsupported value {}",
                        label, other
                    )))
                }
            };
            if !text.is_empty() {
                tracing::trace!(field = %label, value = %text, "form field");
                fields.insert(label, text);
            }
        }

        tracing::debug!(count = fields.len(), "decoded form fields");
        Ok(FieldSource::Structured(fields))
    }

    fn backend_name(&self) -> &str {
        "form-json"
    }
}
