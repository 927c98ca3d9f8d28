//! tola-i18n: locale-qualified paths for multi-locale tola sites.

use anyhow::{Result, anyhow};
use clap::{ColorChoice, Parser};
use tola_i18n::{
    cli::{self, Cli},
    config::SiteConfig,
    debug, i18n, logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    debug!("config"; "loaded {}", config.config_path.display());

    let i18n = i18n::init(config.build_i18n()?)
        .map_err(|_| anyhow!("i18n initialized twice"))?;
    debug!("i18n"; "base `{}`, default `{}`", i18n.base(), i18n.default_locale());

    cli::run(&cli, &config, i18n)
}
