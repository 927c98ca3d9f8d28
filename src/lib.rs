//! Locale-qualified url paths for multi-locale tola sites.
//!
//! Every public url is `<base>/<locale>/<logical>`, where the default locale
//! has no segment. [`i18n::I18n`] converts between logical and public paths,
//! detects the locale of a url and resolves per-locale messages; the
//! generators build route manifests and sitemaps on top of it.
//!
//! ```text
//! src/
//! ├── i18n/       # Locale registry, paths, messages
//! ├── config/     # tola.toml: [site.info], [i18n]
//! ├── content     # Entries grouped by locale
//! ├── generator/  # Route manifest, sitemap
//! ├── cli/        # Command definitions and handlers
//! └── logger      # log! / debug!
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod generator;
pub mod i18n;
pub mod logger;
