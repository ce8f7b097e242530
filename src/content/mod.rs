//! Content records read from the static content source.
//!
//! A record is the metadata of one published piece of content. Records are
//! produced elsewhere (e.g. by contentlayer at build time) and are read-only
//! here: loading parses and validates, nothing more.
//!
//! # Formats
//!
//! | Extension | Parser       |
//! |-----------|--------------|
//! | `.json`   | `serde_json` |
//! | `.toml`   | `toml`       |

mod collect;

pub use collect::collect_records;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while reading content records.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid JSON in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("invalid TOML in `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("unsupported content format `{0}` (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid content record `{0}`: {1}")]
    Validation(PathBuf, String),
}

// ============================================================================
// ContentRecord
// ============================================================================

/// Metadata of a single piece of content.
///
/// Unknown fields are ignored: content sources attach their own bookkeeping
/// (`_id`, `body`, ...) which is of no interest here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Publish date, `YYYY-MM-DD` or RFC 3339. Kept verbatim.
    pub date: String,

    /// Overrides the site's primary author when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Path relative to the site root, e.g. `posts/hello-world`.
    pub slug: String,

    #[serde(default)]
    pub draft: bool,
}

impl ContentRecord {
    /// Load a record from a `.json` or `.toml` file and validate it.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let format = path.extension().and_then(|ext| ext.to_str());
        let record: Self = match format {
            Some("json") => {
                let content = read(path)?;
                serde_json::from_str(&content)
                    .map_err(|err| ContentError::Json(path.to_path_buf(), err))?
            }
            Some("toml") => {
                let content = read(path)?;
                toml::from_str(&content)
                    .map_err(|err| ContentError::Toml(path.to_path_buf(), err))?
            }
            _ => return Err(ContentError::UnsupportedFormat(path.to_path_buf())),
        };

        record
            .validate()
            .map_err(|msg| ContentError::Validation(path.to_path_buf(), msg))?;
        Ok(record)
    }

    /// Check required fields and the date format.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".into());
        }
        if self.slug.trim_matches('/').is_empty() {
            return Err("slug must not be empty".into());
        }
        if self.published_at().is_none() {
            return Err(format!(
                "date `{}` is neither YYYY-MM-DD nor RFC 3339",
                self.date
            ));
        }
        Ok(())
    }

    /// Publish date as a UTC timestamp (midnight for plain dates), used for ordering.
    pub fn published_at(&self) -> Option<i64> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(dt.timestamp());
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().timestamp())
    }

    /// Author name if set and non-blank.
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// Summary if set and non-blank.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Tags if present and non-empty.
    pub fn non_empty_tags(&self) -> Option<&[String]> {
        self.tags.as_deref().filter(|tags| !tags.is_empty())
    }
}

fn read(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> ContentRecord {
        ContentRecord {
            title: "Hello".into(),
            summary: Some("First post".into()),
            date: date.into(),
            author: None,
            tags: None,
            slug: "posts/hello".into(),
            draft: false,
        }
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.json");
        fs::write(
            &path,
            r#"{
                "_id": "posts/hello.mdx",
                "title": "Hello",
                "summary": "First post",
                "date": "2024-01-15",
                "tags": ["go", "systems"],
                "slug": "posts/hello"
            }"#,
        )
        .unwrap();

        let record = ContentRecord::from_path(&path).unwrap();
        assert_eq!(record.title, "Hello");
        assert_eq!(record.tags, Some(vec!["go".to_string(), "systems".to_string()]));
        assert_eq!(record.author, None);
        assert!(!record.draft);
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.toml");
        fs::write(
            &path,
            r#"
            title = "Hello"
            date = "2024-01-15T08:30:00Z"
            author = "Guest"
            slug = "posts/hello"
            draft = true
            "#,
        )
        .unwrap();

        let record = ContentRecord::from_path(&path).unwrap();
        assert_eq!(record.summary, None);
        assert_eq!(record.author.as_deref(), Some("Guest"));
        assert!(record.draft);
    }

    #[test]
    fn test_unsupported_format() {
        let result = ContentRecord::from_path(Path::new("post.md"));
        assert!(matches!(result, Err(ContentError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ContentRecord::from_path(Path::new("/nonexistent/post.json"));
        assert!(matches!(result, Err(ContentError::Io(..))));
    }

    #[test]
    fn test_invalid_json_keeps_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"title\": ").unwrap();

        let err = ContentRecord::from_path(&path).unwrap_err();
        assert!(matches!(err, ContentError::Json(..)));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad-date.json");
        fs::write(
            &path,
            r#"{"title": "T", "date": "15/01/2024", "slug": "posts/t"}"#,
        )
        .unwrap();

        let err = ContentRecord::from_path(&path).unwrap_err();
        assert!(matches!(err, ContentError::Validation(..)));
        assert!(err.to_string().contains("15/01/2024"));
    }

    #[test]
    fn test_validate_required_fields() {
        let mut r = record("2024-01-15");
        assert!(r.validate().is_ok());

        r.title = " ".into();
        assert!(r.validate().unwrap_err().contains("title"));

        let mut r = record("2024-01-15");
        r.slug = "/".into();
        assert!(r.validate().unwrap_err().contains("slug"));
    }

    #[test]
    fn test_published_at() {
        assert_eq!(record("1970-01-02").published_at(), Some(86_400));
        assert_eq!(record("1970-01-01T00:01:00Z").published_at(), Some(60));
        assert_eq!(record("1970-01-01T08:00:00+08:00").published_at(), Some(0));
        assert_eq!(record("2024-02-30").published_at(), None);
        assert_eq!(record("yesterday").published_at(), None);
    }

    #[test]
    fn test_author_name_blank_is_none() {
        let mut r = record("2024-01-15");
        assert_eq!(r.author_name(), None);

        r.author = Some("  ".into());
        assert_eq!(r.author_name(), None);

        r.author = Some("Guest".into());
        assert_eq!(r.author_name(), Some("Guest"));
    }

    #[test]
    fn test_summary_text_blank_is_none() {
        let mut r = record("2024-01-15");
        assert_eq!(r.summary_text(), Some("First post"));

        r.summary = Some(" ".into());
        assert_eq!(r.summary_text(), None);

        r.summary = None;
        assert_eq!(r.summary_text(), None);
    }

    #[test]
    fn test_non_empty_tags() {
        let mut r = record("2024-01-15");
        assert!(r.non_empty_tags().is_none());

        r.tags = Some(vec![]);
        assert!(r.non_empty_tags().is_none());

        r.tags = Some(vec!["rust".into()]);
        assert_eq!(r.non_empty_tags(), Some(&["rust".to_string()][..]));
    }
}
