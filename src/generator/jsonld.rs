//! schema.org JSON-LD generation.
//!
//! Builds the `WebSite` document for the site and a `BlogPosting` document
//! per content record. Builders are pure: the same inputs always serialize
//! to the same bytes, since field order follows declaration order.
//!
//! Optional fields that have no value are left out of the output instead of
//! being written as `null` or `""`.

use crate::{
    config::SiteConfig,
    content::ContentRecord,
    utils::xml::{self, XmlWriter},
};
use anyhow::Result;
use serde::Serialize;

/// `@context` of every document.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Separator between keywords.
const KEYWORD_SEPARATOR: &str = ", ";

// ============================================================================
// Public API
// ============================================================================

/// Build the `WebSite` document from the site config.
pub fn build_site_document(config: &SiteConfig) -> JsonLd {
    let base = &config.base;
    JsonLd::WebSite(WebSite {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        name: base.title.clone(),
        description: base.description.clone(),
        url: base.url.clone(),
    })
}

/// Build the `BlogPosting` document for `content`, published at `page_url`.
///
/// The author is the record's own author, else the first site author, else
/// omitted. The publisher is always the site itself.
pub fn build_content_document(
    config: &SiteConfig,
    content: &ContentRecord,
    page_url: &str,
) -> JsonLd {
    let base = &config.base;

    let author = content
        .author_name()
        .or_else(|| base.primary_author().map(|a| a.name.as_str()))
        .map(Person::new);

    let keywords = content
        .non_empty_tags()
        .map(|tags| tags.join(KEYWORD_SEPARATOR));

    JsonLd::BlogPosting(BlogPosting {
        context: SCHEMA_CONTEXT,
        kind: "BlogPosting",
        headline: content.title.clone(),
        description: content.summary_text().map(str::to_owned),
        date_published: content.date.clone(),
        url: page_url.to_owned(),
        author,
        publisher: Organization {
            kind: "Organization",
            name: base.title.clone(),
            logo: ImageObject {
                kind: "ImageObject",
                url: base.logo_url(),
            },
        },
        keywords,
    })
}

/// Absolute URL of a content page: site URL and slug joined by one `/`.
pub fn page_url(config: &SiteConfig, slug: &str) -> String {
    format!(
        "{}/{}",
        config.base.url.trim_end_matches('/'),
        slug.trim_start_matches('/')
    )
}

// ============================================================================
// Documents
// ============================================================================

/// A structured-data document ready for embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum JsonLd {
    WebSite(WebSite),
    BlogPosting(BlogPosting),
}

impl JsonLd {
    /// The document's `url` field.
    pub fn url(&self) -> &str {
        match self {
            Self::WebSite(doc) => &doc.url,
            Self::BlogPosting(doc) => &doc.url,
        }
    }

    /// Element id of the embedding `<script>`.
    pub const fn script_id(&self) -> &'static str {
        match self {
            Self::WebSite(_) => "website-jsonld",
            Self::BlogPosting(_) => "blogpost-jsonld",
        }
    }

    /// Compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON, for humans.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// `<script type="application/ld+json">` element holding the compact JSON.
    pub fn to_script(&self) -> Result<String> {
        let mut writer = xml::writer();
        self.write_script(&mut writer)?;
        xml::into_string(writer)
    }

    /// Write the `<script>` element into an existing markup writer.
    pub fn write_script(&self, writer: &mut XmlWriter) -> Result<()> {
        let json = escape_for_script(&self.to_json()?);
        xml::write_raw_script(
            writer,
            &[("id", self.script_id()), ("type", "application/ld+json")],
            &json,
        )
    }
}

/// schema.org `WebSite`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
}

/// schema.org `BlogPosting`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_published: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,
    pub publisher: Organization,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

impl Person {
    fn new(name: &str) -> Self {
        Self {
            kind: "Person",
            name: name.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape characters that could end a `<script>` element or open a comment.
///
/// The escapes are valid JSON string escapes, so the payload parses to the
/// same value.
fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
