use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Malformed resume document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Malformed resume document: top level must be a JSON object")]
    NotAnObject,
}

/// A parsed résumé. Always wraps a JSON object; unknown fields are kept so
/// the full view can echo the file back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument(Value);

impl ResumeDocument {
    /// Parses raw file bytes. Invalid UTF-8 is reported as malformed JSON.
    pub fn parse(raw: impl AsRef<[u8]>) -> Result<Self, ResumeError> {
        Self::from_value(serde_json::from_slice(raw.as_ref())?)
    }

    pub fn from_value(value: Value) -> Result<Self, ResumeError> {
        if value.is_object() {
            Ok(Self(value))
        } else {
            Err(ResumeError::NotAnObject)
        }
    }

    /// Top-level field, with JSON `null` treated as absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Field of the `basics` object, with JSON `null` treated as absent.
    pub fn basics_field(&self, key: &str) -> Option<&Value> {
        self.field("basics")
            .and_then(|basics| basics.get(key))
            .filter(|v| !v.is_null())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
