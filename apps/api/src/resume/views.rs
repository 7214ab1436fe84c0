use serde::Serialize;
use serde_json::{json, Value};

use super::ResumeDocument;

pub const NOT_FOUND_MESSAGE: &str = "resume.json not found";

/// The document as-is, or the in-body not-found sentinel.
pub fn full(doc: Option<ResumeDocument>) -> Value {
    match doc {
        Some(doc) => doc.into_value(),
        None => json!({ "error": NOT_FOUND_MESSAGE }),
    }
}

/// The five sections served by `/resume.min`, in this order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrimmedResume {
    pub basics: Value,
    pub work: Value,
    pub skills: Value,
    pub certificates: Value,
    pub education: Value,
}

/// Projects the document onto its five core sections. Absent (or null)
/// sections become `{}` for `basics` and `[]` for the rest.
pub fn trimmed(doc: Option<&ResumeDocument>) -> TrimmedResume {
    let section = |key: &str, empty: Value| {
        doc.and_then(|d| d.field(key)).cloned().unwrap_or(empty)
    };

    TrimmedResume {
        basics: section("basics", json!({})),
        work: section("work", json!([])),
        skills: section("skills", json!([])),
        certificates: section("certificates", json!([])),
        education: section("education", json!([])),
    }
}
