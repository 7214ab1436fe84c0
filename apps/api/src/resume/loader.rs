use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use super::{ResumeDocument, ResumeError};

/// Reads and parses the résumé file.
///
/// A missing or unreadable file is `Ok(None)`: callers serve a degraded
/// response instead of failing. A file that can be read but is not valid
/// UTF-8 JSON is `ResumeError::Malformed`.
///
/// The top level must be a JSON object. Any other JSON value (an array, a
/// bare string) is `ResumeError::NotAnObject` on every endpoint, `/resume`
/// included, since none of the views can be built from it.
pub async fn load_resume(path: &Path) -> Result<Option<ResumeDocument>, ResumeError> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Resume document not found at {}", path.display());
            return Ok(None);
        }
        Err(e) => {
            warn!("Failed to read resume document {}: {e}", path.display());
            return Ok(None);
        }
    };

    ResumeDocument::parse(raw).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load_resume(&dir.path().join("resume.json")).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_reads_file_fresh_each_call() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.json");

        std::fs::write(&path, r#"{"basics":{"name":"First"}}"#).unwrap();
        let first = load_resume(&path).await.unwrap().unwrap();
        assert_eq!(first.basics_field("name").unwrap(), "First");

        std::fs::write(&path, r#"{"basics":{"name":"Second"}}"#).unwrap();
        let second = load_resume(&path).await.unwrap().unwrap();
        assert_eq!(second.basics_field("name").unwrap(), "Second");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_malformed_not_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, b"{\"basics\":{\"name\":\"\xff\xfe\"}}").unwrap();

        assert!(matches!(
            load_resume(&path).await,
            Err(ResumeError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_array_top_level_is_not_an_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            load_resume(&path).await,
            Err(ResumeError::NotAnObject)
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_resume(&path).await.is_err());
    }
}
