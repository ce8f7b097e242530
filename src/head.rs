//! `<head>` metadata for every page.
//!
//! Emits the site-level tags of the root layout followed by the page's
//! JSON-LD document:
//!
//! ```html
//! <title>Brachistochrone</title>
//! <meta name="description" content="..."/>
//! <meta name="author" content="Jason Lam"/>
//! <link rel="author" href="https://jasonlam.space/about/JasonLamv-t"/>
//! <meta name="generator" content="blogmeta 0.1.0"/>
//! <link rel="canonical" href="https://jasonlam.space"/>
//! <script id="website-jsonld" type="application/ld+json">{...}</script>
//! ```

use crate::{
    config::{SiteConfig, defaults},
    generator::JsonLd,
    utils::xml::{self, write_empty_elem, write_text_element},
};
use anyhow::Result;

/// Render the head fragment for a page described by `document`.
///
/// The canonical link points at the document's `url`.
pub fn render_head(config: &SiteConfig, document: &JsonLd) -> Result<String> {
    let base = &config.base;
    let mut writer = xml::writer();

    if !base.title.is_empty() {
        write_text_element(&mut writer, "title", &base.title)?;
    }
    if !base.description.is_empty() {
        write_empty_elem(
            &mut writer,
            "meta",
            &[("name", "description"), ("content", &base.description)],
        )?;
    }
    for author in &base.authors {
        write_empty_elem(
            &mut writer,
            "meta",
            &[("name", "author"), ("content", &author.name)],
        )?;
        if let Some(href) = author.href(&base.url) {
            write_empty_elem(&mut writer, "link", &[("rel", "author"), ("href", &href)])?;
        }
    }
    write_empty_elem(
        &mut writer,
        "meta",
        &[("name", "generator"), ("content", &defaults::generator::name())],
    )?;
    if !document.url().is_empty() {
        write_empty_elem(
            &mut writer,
            "link",
            &[("rel", "canonical"), ("href", document.url())],
        )?;
    }

    document.write_script(&mut writer)?;
    xml::into_string(writer)
}

/// Value of the `<html lang>` attribute: the first configured language tag.
///
/// Falls back to the locale when no language is configured.
pub fn html_lang(config: &SiteConfig) -> &str {
    config
        .base
        .language
        .split(',')
        .map(str::trim)
        .find(|tag| !tag.is_empty())
        .unwrap_or(&config.base.locale)
}
