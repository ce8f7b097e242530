//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Site metadata and JSON-LD generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root (default: site.toml)
    #[arg(short = 'C', long, default_value = blogmeta::config::defaults::cli::config_file())]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Output options shared by document commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Wrap the document in a `<script type="application/ld+json">` element
    #[arg(short, long, conflicts_with = "pretty")]
    pub script: bool,

    /// Pretty-print the JSON
    #[arg(short, long)]
    pub pretty: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config file
    Check,

    /// Print the WebSite document
    Site {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the BlogPosting document of a content record
    Post {
        /// Record file (.json or .toml)
        file: PathBuf,

        /// Page URL (default: site url joined with the record slug)
        #[arg(short, long)]
        url: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print a BlogPosting script for every published record
    Posts {
        /// Content directory path, relative to root (default: content)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Print the `<head>` metadata fragment
    Head {
        /// Record file; omit for the site document
        file: Option<PathBuf>,
    },

    /// Print resolved navigation and social links
    Links,
}

impl Cli {
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("./"))
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_from(["blogmeta", "check"]);
        assert_eq!(cli.config_path(), PathBuf::from("./site.toml"));
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_root_and_config_override() {
        let cli = Cli::parse_from(["blogmeta", "--root", "/srv/blog", "-C", "blog.toml", "site"]);
        assert_eq!(cli.config_path(), PathBuf::from("/srv/blog/blog.toml"));
    }

    #[test]
    fn test_post_args() {
        let cli = Cli::parse_from([
            "blogmeta",
            "post",
            "content/hello.json",
            "--url",
            "https://example.com/hello",
            "--script",
        ]);
        match cli.command {
            Commands::Post { file, url, output } => {
                assert_eq!(file, PathBuf::from("content/hello.json"));
                assert_eq!(url.as_deref(), Some("https://example.com/hello"));
                assert!(output.script);
                assert!(!output.pretty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_script_conflicts_with_pretty() {
        let result = Cli::try_parse_from(["blogmeta", "site", "--script", "--pretty"]);
        assert!(result.is_err());
    }
}
