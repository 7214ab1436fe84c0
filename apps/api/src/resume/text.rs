//! Plain-text rendering for `/resume.txt`.
//!
//! Layout: contact block, then SUMMARY, SKILLS and EXPERIENCE sections, each
//! preceded by a blank line. Empty parts are dropped rather than rendered as
//! blank separators, and the whole text ends with exactly one newline.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{ResumeDocument, ResumeError};

const MAX_HIGHLIGHTS: usize = 5;
const PRESENT: &str = "Present";

// ────────────────────────────────────────────────────────────────────────────
// Typed view over the parts of the document the text layout needs.
// Absent and null fields both fall back to empty values.
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct ResumeView {
    #[serde(default, deserialize_with = "null_as_default")]
    basics: Basics,
    #[serde(default, deserialize_with = "null_as_default")]
    skills: Vec<Skill>,
    #[serde(default, deserialize_with = "null_as_default")]
    work: Vec<Work>,
}

#[derive(Debug, Default, Deserialize)]
struct Basics {
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    location: Location,
}

#[derive(Debug, Default, Deserialize)]
struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    region: String,
}

#[derive(Debug, Default, Deserialize)]
struct Skill {
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    keywords: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Work {
    #[serde(default, deserialize_with = "null_as_default")]
    position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    end_date: String,
    /// Any JSON value; strings print bare, everything else as JSON.
    #[serde(default, deserialize_with = "null_as_default")]
    highlights: Vec<Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders the plain-text résumé. A missing document renders as an empty one.
/// Fails only when a field has the wrong JSON type (e.g. `skills` is a string).
pub fn plain_text(doc: Option<&ResumeDocument>) -> Result<String, ResumeError> {
    let view = match doc {
        Some(doc) => ResumeView::deserialize(doc.as_value())?,
        None => ResumeView::default(),
    };
    Ok(render(&view))
}

fn render(view: &ResumeView) -> String {
    let mut lines: Vec<String> = Vec::new();
    let basics = &view.basics;

    let header = join_non_empty(&[basics.name.as_str(), basics.label.as_str()], " | ");
    if !header.is_empty() {
        lines.push(header);
    }
    if !basics.email.is_empty() {
        lines.push(basics.email.clone());
    }
    let location = join_non_empty(
        &[basics.location.city.as_str(), basics.location.region.as_str()],
        ", ",
    );
    if !location.is_empty() {
        lines.push(location);
    }

    lines.push(String::new());
    lines.push("SUMMARY".to_string());
    lines.push(basics.summary.clone());

    lines.push(String::new());
    lines.push("SKILLS".to_string());
    for skill in &view.skills {
        if skill.name.is_empty() {
            continue;
        }
        let keywords = skill.keywords.join(", ");
        if keywords.is_empty() {
            lines.push(format!("- {}", skill.name));
        } else {
            lines.push(format!("- {}: {}", skill.name, keywords));
        }
    }

    lines.push(String::new());
    lines.push("EXPERIENCE".to_string());
    for work in &view.work {
        let end = if work.end_date.is_empty() {
            PRESENT
        } else {
            work.end_date.as_str()
        };

        let header = join_non_empty(&[work.position.as_str(), work.name.as_str()], " | ");
        let dates = join_non_empty(&[work.start_date.as_str(), end], " - ");
        for line in [header.trim(), dates.trim()] {
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }
        for highlight in work.highlights.iter().take(MAX_HIGHLIGHTS) {
            match highlight {
                Value::String(text) => lines.push(format!("  - {text}")),
                other => lines.push(format!("  - {other}")),
            }
        }
        lines.push(String::new());
    }

    let mut text = lines.join("\n").trim().to_string();
    text.push('\n');
    text
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
