//! `routes` and `sitemap` commands.

use crate::cli::args::{RoutesArgs, SitemapArgs};
use crate::config::SiteConfig;
use crate::content::{Entry, load_entries};
use crate::generator::{routes::RouteManifest, sitemap::Sitemap};
use crate::i18n::I18n;
use crate::log;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Print the route manifest as JSON.
pub fn routes(i18n: &I18n, args: &RoutesArgs, out: &mut impl Write) -> Result<()> {
    let entries = read_entries(args.entries.as_deref())?;
    let manifest = RouteManifest::build(i18n, &entries, args.drafts);

    log!("routes"; "{} routes in {} locales", manifest.len(), manifest.locales.len());
    writeln!(out, "{}", manifest.to_json(args.pretty)?)?;
    Ok(())
}

/// Write the sitemap to `--output`, or print it.
pub fn sitemap(
    config: &SiteConfig,
    i18n: &I18n,
    args: &SitemapArgs,
    out: &mut impl Write,
) -> Result<()> {
    let site = config
        .site_url()
        .context("`site.info.url` is required to build absolute urls")?;
    let entries = read_entries(args.entries.as_deref())?;
    let sitemap = Sitemap::build(i18n, &site, &entries)?;

    match &args.output {
        Some(path) => sitemap.write(path),
        None => {
            write!(out, "{}", sitemap.into_xml())?;
            Ok(())
        }
    }
}

fn read_entries(path: Option<&Path>) -> Result<Vec<Entry>> {
    match path {
        Some(path) => load_entries(path),
        None => Ok(Vec::new()),
    }
}
