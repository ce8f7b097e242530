//! Process-wide, read-only config handle.
//!
//! The config is validated once when the provider is built and frozen behind
//! an `Arc`. Consumers receive the provider (or a `&SiteConfig` borrowed from
//! it) explicitly; there is no global and no way to replace the config later.
//!
//! ```text
//!  site.toml ──► SiteConfig::from_path ──► ConfigProvider::new (validate)
//!                                                │
//!                      ┌─────────────────────────┼──────────────────┐
//!                      ▼                         ▼                  ▼
//!              build_site_document    build_content_document    render_head
//! ```

use super::{ConfigError, SiteConfig};
use std::{path::Path, sync::Arc};

/// Immutable handle to the validated site config.
///
/// Cloning is cheap and every clone observes the same config.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    config: Arc<SiteConfig>,
}

impl ConfigProvider {
    /// Validate `config` and freeze it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a required field is missing.
    pub fn new(config: SiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Read, parse and validate the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::new(SiteConfig::from_path(path)?)
    }

    /// The site config.
    #[inline]
    pub fn get(&self) -> &SiteConfig {
        &self.config
    }
}
