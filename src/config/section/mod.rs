//! Configuration section definitions.
//!
//! Each module corresponds to a section in `tola.toml`:
//!
//! | Module | TOML Section | Purpose                             |
//! |--------|--------------|-------------------------------------|
//! | `site` | `[site]`     | Site info (title, url)              |
//! | `i18n` | `[i18n]`     | Locales, base path, profiles        |

mod i18n;
pub mod site;

// Re-export section configs
pub use i18n::{I18nConfig, ProfileConfig};
pub use site::SiteSectionConfig;
