//! `check` command: validated config summary.

use crate::config::SiteConfig;
use crate::i18n::I18n;
use crate::log;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

/// Print base path and one row per locale.
///
/// Config validation already ran while loading, so reaching this point
/// means the config is valid.
pub fn check(config: &SiteConfig, i18n: &I18n, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} {}", "config:".dimmed(), config.config_path.display())?;
    writeln!(out, "{} {}", "base:".dimmed(), i18n.base())?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<8} {:<10} {:<4} {:<16} {}",
        "locale", "lang", "dir", "prefix", "messages"
    )?;

    for key in i18n.locales() {
        let profile = i18n.profile_of(key);
        let name = if i18n.registry().is_default(key) {
            format!("{key}*")
        } else {
            key.to_string()
        };
        writeln!(
            out,
            "{:<8} {:<10} {:<4} {:<16} {}",
            name,
            profile.lang_tag,
            profile.direction.as_str(),
            i18n.build_prefix(key),
            profile.messages.len()
        )?;
    }

    log!("check"; "{} locales, default `{}`", i18n.locales().len(), i18n.default_locale());
    Ok(())
}
