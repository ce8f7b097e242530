//! Collect content records from a directory tree.

use super::{ContentError, ContentRecord};
use crate::log;
use std::path::Path;
use walkdir::WalkDir;

/// Record file extensions, matched case-sensitively.
const RECORD_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Load every record under `dir`, newest first.
///
/// Drafts are skipped. Records with equal dates are ordered by slug so the
/// output is stable across file systems.
///
/// # Errors
///
/// Fails on the first unreadable or invalid record; the error names its path.
pub fn collect_records(dir: &Path) -> Result<Vec<ContentRecord>, ContentError> {
    let mut records = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            ContentError::Io(path, err.into())
        })?;
        let path = entry.path();

        let is_record = entry.file_type().is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| RECORD_EXTENSIONS.contains(&ext));
        if !is_record {
            continue;
        }

        let record = ContentRecord::from_path(path)?;
        if record.draft {
            log!("content"; "skip draft {}", record.slug);
            continue;
        }
        records.push(record);
    }

    records.sort_by(|a, b| {
        b.published_at()
            .cmp(&a.published_at())
            .then_with(|| a.slug.cmp(&b.slug))
    });

    Ok(records)
}
