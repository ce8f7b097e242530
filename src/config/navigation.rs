//! `[[navigation]]` entries shown in the site header.

use serde::{Deserialize, Serialize};

/// One header navigation link. Entries keep their declaration order.
///
/// # Example
/// ```toml
/// [[navigation]]
/// label = "Blogs"
/// path = "/posts"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    pub label: String,
    /// Site-relative path, starting with `/`.
    pub path: String,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Absolute URL of this entry under `base_url`.
    pub fn href(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}
