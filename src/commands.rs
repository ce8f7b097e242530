//! Subcommand implementations.
//!
//! Every command writes its result to `out` and logs progress to stderr.

use crate::cli::{Commands, OutputArgs};
use anyhow::{Context, Result};
use blogmeta::{
    config::{ConfigProvider, defaults},
    content::{ContentRecord, collect_records},
    generator::{JsonLd, build_content_document, build_site_document, page_url},
    head::{html_lang, render_head},
    log,
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Run `command` against an already validated config.
pub fn run(
    command: &Commands,
    provider: &ConfigProvider,
    root: &Path,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Check => check(provider),
        Commands::Site { output } => {
            let document = build_site_document(provider.get());
            write_document(out, &document, output)
        }
        Commands::Post { file, url, output } => {
            let document = post_document(provider, file, url.as_deref())?;
            write_document(out, &document, output)
        }
        Commands::Posts { content } => {
            let dir = root.join(
                content
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(defaults::cli::content_dir())),
            );
            posts(provider, &dir, out)
        }
        Commands::Head { file } => {
            let document = match file {
                Some(file) => post_document(provider, file, None)?,
                None => build_site_document(provider.get()),
            };
            writeln!(out, "{}", render_head(provider.get(), &document)?)?;
            Ok(())
        }
        Commands::Links => links(provider, out),
    }
}

fn check(provider: &ConfigProvider) -> Result<()> {
    let config = provider.get();
    log!("config"; "`{}` at {} ({})", config.base.title, config.base.url, html_lang(config));
    log!(
        "config";
        "{} author(s), {} navigation entries, {} social links",
        config.base.authors.len(),
        config.navigation.len(),
        config.footer.social.len()
    );
    Ok(())
}

fn post_document(provider: &ConfigProvider, file: &Path, url: Option<&str>) -> Result<JsonLd> {
    let record = ContentRecord::from_path(file)
        .with_context(|| format!("Failed to load content record `{}`", file.display()))?;
    let config = provider.get();
    let url = url.map_or_else(|| page_url(config, &record.slug), str::to_owned);
    Ok(build_content_document(config, &record, &url))
}

fn posts(provider: &ConfigProvider, dir: &Path, out: &mut impl Write) -> Result<()> {
    let config = provider.get();
    let records = collect_records(dir)
        .with_context(|| format!("Failed to collect content from `{}`", dir.display()))?;

    for record in &records {
        let document = build_content_document(config, record, &page_url(config, &record.slug));
        writeln!(out, "{}", document.to_script()?)?;
    }

    log!("content"; "{} record(s) from {}", records.len(), dir.display());
    Ok(())
}

fn links(provider: &ConfigProvider, out: &mut impl Write) -> Result<()> {
    let config = provider.get();
    for entry in &config.navigation {
        writeln!(out, "nav\t{}\t{}", entry.label, entry.href(&config.base.url))?;
    }
    for link in &config.footer.social {
        writeln!(out, "social\t{}\t{}", link.platform, link.href())?;
    }
    Ok(())
}

fn write_document(out: &mut impl Write, document: &JsonLd, output: &OutputArgs) -> Result<()> {
    let rendered = if output.script {
        document.to_script()?
    } else if output.pretty {
        document.to_json_pretty()?
    } else {
        document.to_json()?
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
