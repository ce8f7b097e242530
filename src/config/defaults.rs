//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    use super::super::Theme;

    pub fn locale() -> String {
        "en-US".into()
    }

    pub fn language() -> String {
        "en-us".into()
    }

    pub fn theme() -> Theme {
        Theme::System
    }

    pub fn logo() -> String {
        "/logo.png".into()
    }
}

// ============================================================================
// CLI Defaults
// ============================================================================

pub mod cli {
    pub fn config_file() -> &'static str {
        "site.toml"
    }

    pub fn content_dir() -> &'static str {
        "content"
    }
}

// ============================================================================
// Generator Defaults
// ============================================================================

pub mod generator {
    /// Value of `<meta name="generator">`.
    pub fn name() -> String {
        format!("blogmeta {}", env!("CARGO_PKG_VERSION"))
    }
}
