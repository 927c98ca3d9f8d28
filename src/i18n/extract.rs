//! Locale detection in paths and urls.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::sync::OnceLock;
use url::Url;

use super::{I18n, LocaleKey};

/// Authority relative and absolute inputs are resolved against.
///
/// Only the path of the result is used.
fn resolve_base() -> &'static Url {
    static BASE: OnceLock<Url> = OnceLock::new();
    BASE.get_or_init(|| Url::parse("http://localhost").expect("constant url is valid"))
}

/// Decoded form of a path, the form locale keys are compared in.
fn decode(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}

/// First segment after any leading separators: `//ar/posts` → `ar`.
fn first_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or_default()
}

impl I18n {
    /// Whether the first segment of `path` is a supported locale.
    ///
    /// The leading separator is optional: `ar/posts/1` and `/ar/posts/1`
    /// both count. The base path is not stripped. Percent-encoded segments
    /// are decoded first, as in [`I18n::extract_locale`].
    pub fn is_path_localized(&self, path: &str) -> bool {
        self.registry().contains(first_segment(&decode(path)))
    }

    /// Locale segment of a url or path, if there is a supported one.
    ///
    /// `None` means the path carries no locale segment and therefore belongs
    /// to the default locale; it is not an error.
    ///
    /// ```ignore
    /// i18n.extract_locale("https://example.com/ar/posts/1") // Some("ar")
    /// i18n.extract_locale("/ar/posts/2")                    // Some("ar")
    /// i18n.extract_locale("/posts/1")                       // None
    /// ```
    pub fn extract_locale(&self, url_or_path: &str) -> Option<&LocaleKey> {
        let resolved = resolve_base().join(url_or_path.trim()).ok()?;
        let path = decode(resolved.path());

        let rest = self.base().strip_from(&path)?;
        self.registry().get(first_segment(rest))
    }
}
