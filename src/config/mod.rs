//! Site configuration management for `tola.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── i18n       # [i18n]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section                  | Purpose                                   |
//! |--------------------------|-------------------------------------------|
//! | `[site.info]`            | Site metadata, url (default base path)    |
//! | `[i18n]`                 | Locales, default locale, base, messages   |
//! | `[i18n.profiles.<key>]`  | Language tag, direction, font, messages   |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{I18nConfig, ProfileConfig, SiteSectionConfig};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, i18n::BasePath, i18n::I18n, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing tola.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site configuration (info)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Locale settings
    #[serde(default)]
    pub i18n: I18nConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file.
    /// The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cwd, &cli.config)
            .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        config.apply_cli_options(cli);
        config.validate(cli.command.needs_site_url())?;
        Ok(config)
    }

    /// Read and parse a config file, setting `config_path` and `root`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let path = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf());
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.config_path = path;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global CLI overrides.
    fn apply_cli_options(&mut self, cli: &Cli) {
        if let Some(base) = &cli.base {
            self.i18n.base = Some(base.clone());
        }
    }

    // ========================================================================
    // i18n
    // ========================================================================

    /// Base path every public url lives under.
    ///
    /// `[i18n] base` (or `--base`), then the path of `[site.info] url`, else `/`.
    pub fn base_path(&self) -> BasePath {
        if let Some(base) = &self.i18n.base {
            return BasePath::new(base);
        }
        self.site
            .info
            .parsed_url()
            .map(|url| BasePath::from_url(&url))
            .unwrap_or_default()
    }

    /// Site url used for absolute links, if configured.
    pub fn site_url(&self) -> Option<url::Url> {
        self.site.info.parsed_url()
    }

    /// Build the immutable i18n instance from the `[i18n]` section.
    pub fn build_i18n(&self) -> Result<I18n> {
        self.i18n.build(&self.root, self.base_path())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self, url_required: bool) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.info.validate(url_required, &mut diag);
        self.i18n.validate(&self.root, &mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
