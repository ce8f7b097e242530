//! `[base]` section configuration.
//!
//! Contains basic site information like title, authors, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in site.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Brachistochrone"
/// description = "A personal blog"
/// url = "https://jasonlam.space"
/// logo = "/data/images/logo.jpg"
///
/// [[base.authors]]
/// name = "Jason Lam"
/// url = "/about/JasonLamv-t"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, also used as the publisher name in structured data.
    #[serde(default)]
    pub title: String,

    /// Site description for SEO meta tags.
    #[serde(default)]
    pub description: String,

    /// Site authors. The first one is the fallback author of posts.
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Locale used for date and number formatting (e.g. "zh-CN").
    #[serde(default = "defaults::base::locale")]
    #[educe(Default = defaults::base::locale())]
    pub locale: String,

    /// Comma-separated BCP 47 language tags (e.g. "zh-cn, en-us").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Preferred color scheme.
    #[serde(default = "defaults::base::theme")]
    #[educe(Default = defaults::base::theme())]
    pub theme: Theme,

    /// Canonical site URL without trailing slash.
    #[serde(default)]
    pub url: String,

    /// Logo path, appended verbatim to `url` for absolute links.
    #[serde(default = "defaults::base::logo")]
    #[educe(Default = defaults::base::logo())]
    pub logo: String,

    /// Banner text shown on the home page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,

    /// Repository hosting the site source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl BaseConfig {
    /// First configured author, if any.
    pub fn primary_author(&self) -> Option<&Author> {
        self.authors.first()
    }

    /// Absolute logo URL: `url` and `logo` concatenated as-is.
    pub fn logo_url(&self) -> String {
        format!("{}{}", self.url, self.logo)
    }
}

/// A site author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    pub name: String,

    /// Profile page, absolute or site-relative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// Absolute profile link; site-relative urls are joined onto `base_url`.
    pub fn href(&self, base_url: &str) -> Option<String> {
        let url = self.url.as_deref().filter(|u| !u.trim().is_empty())?;
        if url.starts_with('/') {
            Some(format!("{}{}", base_url.trim_end_matches('/'), url))
        } else {
            Some(url.to_owned())
        }
    }
}

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Brachistochrone"
            description = "Jason Lam's personal website"
            locale = "zh-CN"
            language = "zh-cn, en-us"
            theme = "dark"
            url = "https://jasonlam.space"
            logo = "/data/images/logo.jpg"
            banner = "Jason Lam's personal website"
            repo = "https://github.com/JasonLamv-t/jasonlamv-t.github.io"

            [[base.authors]]
            name = "Jason Lam"
            url = "/about/JasonLamv-t"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Brachistochrone");
        assert_eq!(config.base.description, "Jason Lam's personal website");
        assert_eq!(config.base.locale, "zh-CN");
        assert_eq!(config.base.language, "zh-cn, en-us");
        assert_eq!(config.base.theme, Theme::Dark);
        assert_eq!(config.base.url, "https://jasonlam.space");
        assert_eq!(config.base.logo, "/data/images/logo.jpg");
        assert_eq!(config.base.banner.as_deref(), Some("Jason Lam's personal website"));
        assert_eq!(
            config.base.authors,
            vec![Author {
                name: "Jason Lam".into(),
                url: Some("/about/JasonLamv-t".into()),
            }]
        );
    }

    #[test]
    fn test_base_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.description, "");
        assert_eq!(config.base.locale, "en-US");
        assert_eq!(config.base.language, "en-us");
        assert_eq!(config.base.theme, Theme::System);
        assert_eq!(config.base.url, "");
        assert_eq!(config.base.logo, "/logo.png");
        assert!(config.base.authors.is_empty());
        assert!(config.base.banner.is_none());
        assert!(config.base.repo.is_none());
    }

    #[test]
    fn test_theme_values() {
        for (raw, theme) in [
            ("light", Theme::Light),
            ("dark", Theme::Dark),
            ("system", Theme::System),
        ] {
            let config: SiteConfig =
                toml::from_str(&format!("[base]\ntitle = \"T\"\ntheme = \"{raw}\"")).unwrap();
            assert_eq!(config.base.theme, theme);
        }
    }

    #[test]
    fn test_theme_invalid_value() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [base]
            title = "T"
            theme = "sepia"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_unknown_author_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            [[base.authors]]
            name = "Alice"
            email = "alice@example.com"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_author_href() {
        let base = "https://jasonlam.space";
        assert_eq!(Author::new("Guest").href(base), None);

        let mut author = Author::new("Jason Lam");
        author.url = Some("/about/JasonLamv-t".into());
        assert_eq!(
            author.href(base).as_deref(),
            Some("https://jasonlam.space/about/JasonLamv-t")
        );

        author.url = Some("https://github.com/JasonLamv-t".into());
        assert_eq!(author.href(base).as_deref(), Some("https://github.com/JasonLamv-t"));

        author.url = Some(" ".into());
        assert_eq!(author.href(base), None);
    }

    #[test]
    fn test_logo_url_concatenation() {
        let mut base = BaseConfig::default();
        base.url = "https://jasonlam.space".into();
        base.logo = "/data/images/logo.jpg".into();

        assert_eq!(base.logo_url(), "https://jasonlam.space/data/images/logo.jpg");
    }

    #[test]
    fn test_primary_author() {
        let mut base = BaseConfig::default();
        assert!(base.primary_author().is_none());

        base.authors = vec![Author::new("Alice"), Author::new("Bob")];
        assert_eq!(base.primary_author().map(|a| a.name.as_str()), Some("Alice"));
    }

    #[test]
    fn test_base_config_unicode() {
        let config = r#"
            [base]
            title = "布拉奇斯托克龙 🚀"
            [[base.authors]]
            name = "René"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "布拉奇斯托克龙 🚀");
        assert_eq!(config.base.authors[0].name, "René");
    }
}
