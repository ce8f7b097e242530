//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | `[base]`         | Site metadata (title, authors, url, logo)      |
//! | `[[navigation]]` | Header navigation links, in order              |
//! | `[footer]`       | Social links and ICP filing number             |
//! | `[extra]`        | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Brachistochrone"
//! description = "A place to share my thoughts and experiences."
//! url = "https://jasonlam.space"
//! logo = "/data/images/logo.jpg"
//!
//! [[base.authors]]
//! name = "Jason Lam"
//!
//! [[navigation]]
//! label = "Blogs"
//! path = "/posts"
//!
//! [[footer.social]]
//! platform = "github"
//! handle = "JasonLamv-t"
//! ```

mod base;
pub mod defaults;
mod error;
mod footer;
mod handle;
mod navigation;

pub use base::{Author, BaseConfig, Theme};
pub use error::ConfigError;
pub use footer::{FooterConfig, SocialLink, SocialPlatform};
pub use handle::ConfigProvider;
pub use navigation::NavEntry;

use educe::Educe;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path, sync::LazyLock};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Header navigation
    #[serde(default)]
    pub navigation: Vec<NavEntry>,

    /// Footer links
    #[serde(default)]
    pub footer: FooterConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Validate the fields every page depends on.
    ///
    /// A config that fails here must never reach the document builders.
    pub fn validate(&self) -> Result<(), ConfigError> {
        static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
        });

        let base = &self.base;

        if base.title.trim().is_empty() {
            return Err(invalid("[base.title] must not be empty"));
        }

        if base.url.is_empty() {
            return Err(invalid("[base.url] is required"));
        }
        if !base.url.starts_with("http://") && !base.url.starts_with("https://") {
            return Err(invalid("[base.url] must start with http:// or https://"));
        }
        if base.url.ends_with('/') {
            return Err(invalid("[base.url] must not end with `/`"));
        }

        if base.authors.is_empty() {
            return Err(invalid("[base.authors] must list at least one author"));
        }
        if let Some(index) = base.authors.iter().position(|a| a.name.trim().is_empty()) {
            return Err(invalid(format!("[base.authors][{index}].name must not be empty")));
        }

        for (index, entry) in self.navigation.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(invalid(format!("[navigation][{index}].label must not be empty")));
            }
            if !entry.path.starts_with('/') {
                return Err(invalid(format!(
                    "[navigation][{index}].path must start with `/`, got `{}`",
                    entry.path
                )));
            }
        }

        for (index, link) in self.footer.social.iter().enumerate() {
            if link.handle.trim().is_empty() {
                return Err(invalid(format!("[footer.social][{index}].handle must not be empty")));
            }
            if link.platform == SocialPlatform::Email && !RE_EMAIL.is_match(&link.handle) {
                return Err(invalid(format!(
                    "[footer.social][{index}] `{}` is not an email address",
                    link.handle
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation(message.into())
}

// ============================================================================
// Tests
// ============================================================================
