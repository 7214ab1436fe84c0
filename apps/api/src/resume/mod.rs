//! Résumé document loading and the three output views served over HTTP.
//!
//! The document is re-read from disk on every request and never cached, so
//! edits to the file are visible immediately.

pub mod document;
pub mod loader;
pub mod text;
pub mod views;

pub use document::{ResumeDocument, ResumeError};
pub use loader::load_resume;
pub use text::plain_text;
pub use views::{full, trimmed, TrimmedResume};
