//! Machine-readable documents derived from the site config and content.

pub mod jsonld;

pub use jsonld::{JsonLd, build_content_document, build_site_document, page_url};
