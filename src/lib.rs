//! Site config and schema.org JSON-LD metadata for a personal blog.
//!
//! ```ignore
//! use blogmeta::{config::ConfigProvider, generator};
//!
//! let provider = ConfigProvider::load("site.toml".as_ref())?;
//! let site = generator::build_site_document(provider.get());
//! println!("{}", site.to_script()?);
//! ```

pub mod config;
pub mod content;
pub mod generator;
pub mod head;
pub mod utils;
