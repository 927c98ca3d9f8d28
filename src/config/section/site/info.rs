//! `[site.info]` configuration.
//!
//! Basic site information. The path component of `url` is the default base
//! path for every localized url.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Site description.
    pub description: String,

    /// Site URL, path used as base (e.g., "https://example.com/blog").
    pub url: Option<String>,
}

pub struct SiteInfoFields {
    pub title: FieldPath,
    pub url: FieldPath,
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        title: FieldPath::new("site.info.title"),
        url: FieldPath::new("site.info.url"),
    };

    /// Parsed `url`, if set and valid.
    pub fn parsed_url(&self) -> Option<url::Url> {
        self.url.as_deref().and_then(|u| url::Url::parse(u).ok())
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `url_required`, `url` must be set
    /// - `url` must be a valid URL with http(s) scheme and a host
    pub fn validate(&self, url_required: bool, diag: &mut ConfigDiagnostics) {
        if url_required && self.url.is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "absolute urls requested but no site url is configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
        }

        let Some(url_str) = &self.url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}
