//! `[footer]` section configuration.
//!
//! Holds the social links rendered in the site footer and the optional
//! ICP filing number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `[footer]` section in site.toml.
///
/// # Example
/// ```toml
/// [footer]
/// beian = "粤ICP备00000000号"
///
/// [[footer.social]]
/// platform = "github"
/// handle = "JasonLamv-t"
///
/// [[footer.social]]
/// platform = "email"
/// handle = "jasonlamv-t@hotmail.com"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterConfig {
    /// ICP filing number, required for sites hosted in mainland China.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beian: Option<String>,

    /// Social links in display order.
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

/// Supported social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Email,
    Github,
    Linkedin,
    Bilibili,
    Instagram,
    Weibo,
    Twitter,
    Mastodon,
    Rss,
}

impl SocialPlatform {
    /// Profile URL prefix for platforms addressable by handle.
    const fn profile_prefix(self) -> Option<&'static str> {
        match self {
            Self::Github => Some("https://github.com/"),
            Self::Linkedin => Some("https://www.linkedin.com/in/"),
            Self::Bilibili => Some("https://space.bilibili.com/"),
            Self::Instagram => Some("https://www.instagram.com/"),
            Self::Weibo => Some("https://weibo.com/"),
            Self::Twitter => Some("https://x.com/"),
            Self::Email | Self::Mastodon | Self::Rss => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Bilibili => "bilibili",
            Self::Instagram => "instagram",
            Self::Weibo => "weibo",
            Self::Twitter => "twitter",
            Self::Mastodon => "mastodon",
            Self::Rss => "rss",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A platform paired with a handle or a full URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub handle: String,
}

impl SocialLink {
    pub fn new(platform: SocialPlatform, handle: impl Into<String>) -> Self {
        Self {
            platform,
            handle: handle.into(),
        }
    }

    /// Whether the handle is already an absolute http(s) URL.
    pub fn is_url(&self) -> bool {
        self.handle.starts_with("https://") || self.handle.starts_with("http://")
    }

    /// Resolve the link target.
    ///
    /// | Platform  | Handle           | Href                                 |
    /// |-----------|------------------|--------------------------------------|
    /// | email     | `a@b.com`        | `mailto:a@b.com`                     |
    /// | github    | `JasonLamv-t`    | `https://github.com/JasonLamv-t`     |
    /// | any       | `https://...`    | unchanged                            |
    /// | mastodon  | `@me@host`       | unchanged                            |
    pub fn href(&self) -> String {
        if self.is_url() {
            return self.handle.clone();
        }
        match (self.platform, self.platform.profile_prefix()) {
            (SocialPlatform::Email, _) => format!("mailto:{}", self.handle),
            (_, Some(prefix)) => format!("{prefix}{}", urlencoding::encode(&self.handle)),
            (_, None) => self.handle.clone(),
        }
    }
}
