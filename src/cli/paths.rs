//! `localize`, `delocalize`, `extract` and `translate`: one value per call.

use crate::i18n::{I18n, LocaleKey};
use crate::debug;
use anyhow::Result;
use std::io::Write;

/// Print the public path of `path` (the locale root when `None`).
pub fn localize(i18n: &I18n, locale: &str, path: Option<&str>, out: &mut impl Write) -> Result<()> {
    let public = match path {
        Some(path) => i18n.localize(locale, path)?,
        None => i18n.localize_root(locale)?,
    };
    writeln!(out, "{public}")?;
    Ok(())
}

/// Print the logical path of a public path.
pub fn delocalize(i18n: &I18n, locale: &str, path: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", i18n.delocalize(locale, path)?)?;
    Ok(())
}

/// Print the locale `input` belongs to.
///
/// Paths without a locale segment are served in the default locale.
pub fn extract(i18n: &I18n, input: &str, out: &mut impl Write) -> Result<()> {
    let found = i18n.extract_locale(input);
    if found.is_none() {
        debug!("extract"; "no locale segment in `{}`, using default", input);
    }
    let locale = i18n.resolve_or_default(found.map(LocaleKey::as_str));
    writeln!(out, "{locale}")?;
    Ok(())
}

/// Print the message `key` of `locale` with `substitutions` applied.
pub fn translate(
    i18n: &I18n,
    locale: &str,
    key: &str,
    substitutions: &[(String, String)],
    out: &mut impl Write,
) -> Result<()> {
    let translator = i18n.translator_for(locale)?;
    let message = translator.translate_with(key, substitutions.iter().map(|(k, v)| (k, v)))?;
    writeln!(out, "{message}")?;
    Ok(())
}
