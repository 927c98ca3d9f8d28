//! Logical ⇄ public path conversion.
//!
//! - Logical path: locale independent, as used by content lookups (`/posts/1`)
//! - Public path: base and locale prefixed, as served (`/site/ja/posts/1`)
//!
//! Both directions go through [`I18n::build_prefix`], so for any non-root
//! logical path `p`: `delocalize(l, localize(l, p)) == p` up to the leading
//! separator.

use serde::Serialize;
use url::Url;

use super::prefix::strip_segments;
use super::{I18n, I18nError, LocaleKey, LocaleToken};

/// One locale variant of a logical path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate<'a> {
    pub locale: &'a LocaleKey,
    /// Value for `hreflang`.
    pub lang_tag: &'a str,
    pub path: String,
}

impl I18n {
    /// Public path of `logical` for `token`.
    ///
    /// Trailing separators follow the caller: `/posts/1/` stays a directory,
    /// `/posts/1` stays a leaf. The only exception is the bare root, which is
    /// always `/`. An empty logical path means the root.
    ///
    /// ```ignore
    /// i18n.localize("ar", "/posts/1")  // "/ar/posts/1"
    /// i18n.localize("ar", "/posts/1/") // "/ar/posts/1/"
    /// i18n.localize("en", "")          // "/"
    /// ```
    pub fn localize<'a>(
        &self,
        token: impl Into<LocaleToken<'a>>,
        logical: &str,
    ) -> Result<String, I18nError> {
        let key = self.resolve_locale(token)?;
        Ok(self.localize_key(key, logical))
    }

    /// Public root for `token` (logical path omitted).
    pub fn localize_root<'a>(&self, token: impl Into<LocaleToken<'a>>) -> Result<String, I18nError> {
        self.localize(token, "")
    }

    pub(crate) fn localize_key(&self, key: &LocaleKey, logical: &str) -> String {
        let prefix = self.build_prefix(key);
        let stem = prefix.trim_end_matches('/');
        let tail = logical.trim_start_matches('/');
        let composed = format!("{stem}/{tail}");

        if composed == "/" || logical.ends_with('/') {
            composed
        } else {
            composed.trim_end_matches('/').to_string()
        }
    }

    /// Logical path of `public` for `token`.
    ///
    /// Removes the prefix built for `token` and returns what follows, with no
    /// further normalization. Both `ja/posts/1` and `/ja/posts/1` are
    /// accepted. Stripping down to nothing yields `/`. A path that doesn't
    /// carry the prefix is returned as is.
    pub fn delocalize<'a>(
        &self,
        token: impl Into<LocaleToken<'a>>,
        public: &str,
    ) -> Result<String, I18nError> {
        let key = self.resolve_locale(token)?;
        let prefix = self.build_prefix(key);
        let public = format!("/{}", public.trim_start_matches('/'));

        Ok(match strip_segments(&public, &prefix) {
            Some("") => "/".to_string(),
            Some(rest) => rest.to_string(),
            None => {
                crate::debug!("i18n"; "`{}` is not under prefix `{}`", public, prefix);
                public
            }
        })
    }

    /// Public path of `logical` in every locale, in declaration order.
    pub fn alternates(&self, logical: &str) -> Vec<Alternate<'_>> {
        self.locales()
            .map(|key| Alternate {
                locale: key,
                lang_tag: &self.profile_of(key).lang_tag,
                path: self.localize_key(key, logical),
            })
            .collect()
    }

    /// Full url of `logical` for `token` on `site`.
    ///
    /// The base path is part of the localized path, so only the scheme and
    /// authority of `site` are used.
    pub fn absolute_url<'a>(
        &self,
        token: impl Into<LocaleToken<'a>>,
        logical: &str,
        site: &Url,
    ) -> Result<Url, I18nError> {
        let path = self.localize(token, logical)?;
        Ok(site.join(&path)?)
    }
}
