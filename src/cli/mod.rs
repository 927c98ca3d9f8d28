//! Command-line interface module.

mod args;
pub mod check;
pub mod generate;
pub mod paths;

pub use args::{Cli, Commands, RoutesArgs, SitemapArgs};

use crate::config::SiteConfig;
use crate::i18n::I18n;
use anyhow::Result;
use std::io::{self, Write};

/// Run `cli.command`, writing results to stdout.
pub fn run(cli: &Cli, config: &SiteConfig, i18n: &I18n) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Localize { locale, path } => paths::localize(i18n, locale, path.as_deref(), &mut out),
        Commands::Delocalize { locale, path } => paths::delocalize(i18n, locale, path, &mut out),
        Commands::Extract { input } => paths::extract(i18n, input, &mut out),
        Commands::Translate {
            locale,
            key,
            substitutions,
        } => paths::translate(i18n, locale, key, substitutions, &mut out),
        Commands::Routes { args } => generate::routes(i18n, args, &mut out),
        Commands::Sitemap { args } => generate::sitemap(config, i18n, args, &mut out),
        Commands::Check => check::check(config, i18n, &mut out),
    }?;

    out.flush()?;
    Ok(())
}
