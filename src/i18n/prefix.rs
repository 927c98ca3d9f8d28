//! Base path and locale prefix composition.
//!
//! Every public path is `<base>/<locale>/<logical>`, with the locale segment
//! omitted for the default locale:
//!
//! ```text
//! base      locale    prefix
//! /         default   /
//! /         ja        /ja
//! /site     default   /site
//! /site     ja        /site/ja
//! ```

use percent_encoding::percent_decode_str;
use std::fmt;

/// Root path segment the whole site is served under.
///
/// Invariants:
/// - Starts with exactly one `/`
/// - No trailing `/`, except the root itself
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// Normalize a configured base (`""`, `"/"`, `"site"`, `"/site/"`, ...).
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self::root()
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Base path taken from the path component of a site url.
    ///
    /// `https://example.github.io/my-project/` → `/my-project`
    ///
    /// `Url` keeps its path percent-encoded; the base holds decoded text like
    /// every other path this crate composes.
    pub fn from_url(url: &url::Url) -> Self {
        Self::new(&percent_decode_str(url.path()).decode_utf8_lossy())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Base without its trailing separator, empty for root.
    #[inline]
    fn stem(&self) -> &str {
        if self.is_root() { "" } else { &self.0 }
    }

    /// Remove the base from the start of `path` on a segment boundary.
    ///
    /// `None` if `path` lies outside the base (`/sitemap` is not under `/site`).
    pub fn strip_from<'p>(&self, path: &'p str) -> Option<&'p str> {
        strip_segments(path, self.stem())
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compose base and locale segment. `None` is the default locale.
///
/// Single source of truth for prefixes: localizing and delocalizing both
/// route through here.
pub(crate) fn compose(base: &BasePath, segment: Option<&str>) -> String {
    let stem = base.stem();
    match segment {
        Some(segment) => format!("{stem}/{segment}"),
        None if stem.is_empty() => "/".to_string(),
        None => stem.to_string(),
    }
}

/// Strip `prefix` from `path` when it ends on a segment boundary.
///
/// A prefix of `/` or `""` strips nothing.
pub(crate) fn strip_segments<'p>(path: &'p str, prefix: &str) -> Option<&'p str> {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(prefix)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_normalization() {
        assert_eq!(BasePath::new("").as_str(), "/");
        assert_eq!(BasePath::new("/").as_str(), "/");
        assert_eq!(BasePath::new("//").as_str(), "/");
        assert_eq!(BasePath::new("site").as_str(), "/site");
        assert_eq!(BasePath::new("/site/").as_str(), "/site");
        assert_eq!(BasePath::new(" /a/b// ").as_str(), "/a/b");
        assert!(BasePath::new("/").is_root());
        assert!(!BasePath::new("/site").is_root());
    }

    #[test]
    fn test_base_from_url() {
        let url = url::Url::parse("https://example.github.io/my-project/").unwrap();
        assert_eq!(BasePath::from_url(&url).as_str(), "/my-project");

        let url = url::Url::parse("https://example.com").unwrap();
        assert!(BasePath::from_url(&url).is_root());
    }

    #[test]
    fn test_base_from_url_is_decoded() {
        let url = url::Url::parse("https://example.com/博客/").unwrap();
        assert_eq!(url.path(), "/%E5%8D%9A%E5%AE%A2/");
        assert_eq!(BasePath::from_url(&url).as_str(), "/博客");

        let url = url::Url::parse("https://example.com/my%20site/").unwrap();
        assert_eq!(BasePath::from_url(&url).as_str(), "/my site");
    }

    #[test]
    fn test_compose_root_base() {
        let base = BasePath::root();
        assert_eq!(compose(&base, None), "/");
        assert_eq!(compose(&base, Some("ja")), "/ja");
    }

    #[test]
    fn test_compose_sub_base() {
        let base = BasePath::new("/astro-paper-i18n");
        assert_eq!(compose(&base, None), "/astro-paper-i18n");
        assert_eq!(compose(&base, Some("ja")), "/astro-paper-i18n/ja");

        // trailing slash in config doesn't double up
        let base = BasePath::new("/site/");
        assert_eq!(compose(&base, Some("ja")), "/site/ja");
    }

    #[test]
    fn test_strip_segments() {
        assert_eq!(strip_segments("/ja/posts", "/ja"), Some("/posts"));
        assert_eq!(strip_segments("/ja", "/ja"), Some(""));
        assert_eq!(strip_segments("/japan", "/ja"), None);
        assert_eq!(strip_segments("/posts", "/"), Some("/posts"));
        assert_eq!(strip_segments("/posts", ""), Some("/posts"));
        assert_eq!(strip_segments("/posts", "/ja"), None);
    }

    #[test]
    fn test_base_strip_from() {
        let base = BasePath::new("/site");
        assert_eq!(base.strip_from("/site/ar/posts"), Some("/ar/posts"));
        assert_eq!(base.strip_from("/site"), Some(""));
        assert_eq!(base.strip_from("/sitemap"), None);
        assert_eq!(BasePath::root().strip_from("/ar"), Some("/ar"));
    }
}
