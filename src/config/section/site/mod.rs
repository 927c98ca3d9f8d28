//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "My Blog"
//! description = "A personal blog"
//! author = "Alice"
//! url = "https://myblog.com/blog"
//! ```

mod info;

pub use info::SiteInfoConfig;

use serde::{Deserialize, Serialize};

/// Site section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, author, description, url).
    pub info: SiteInfoConfig,
}
