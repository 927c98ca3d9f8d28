//! Locale keys and the registry of supported locales.
//!
//! - [`LocaleToken`]: untrusted input (route parameter, CLI argument), may be absent
//! - [`LocaleKey`]: a token that passed validation, only handed out by the registry
//! - [`LocaleRegistry`]: ordered supported keys plus the default

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::error::RegistryError;

/// Validated locale identifier.
///
/// Invariants:
/// - Member of the registry that produced it
/// - Non-empty, a single path segment of `[A-Za-z0-9_-]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleKey(Arc<str>);

impl LocaleKey {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LocaleKey {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for LocaleKey {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for LocaleKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

/// Untrusted, possibly absent locale token.
///
/// Every public entry point takes `impl Into<LocaleToken>` so callers can pass
/// `"ar"`, `Some("ar")`, a `&LocaleKey`, or [`LocaleToken::NONE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleToken<'a>(Option<&'a str>);

impl<'a> LocaleToken<'a> {
    /// No token supplied.
    pub const NONE: LocaleToken<'static> = LocaleToken(None);

    #[inline]
    pub const fn as_str(&self) -> Option<&'a str> {
        self.0
    }
}

impl<'a> From<&'a str> for LocaleToken<'a> {
    fn from(s: &'a str) -> Self {
        Self(Some(s))
    }
}

impl<'a> From<&'a String> for LocaleToken<'a> {
    fn from(s: &'a String) -> Self {
        Self(Some(s.as_str()))
    }
}

impl<'a> From<Option<&'a str>> for LocaleToken<'a> {
    fn from(s: Option<&'a str>) -> Self {
        Self(s)
    }
}

impl<'a> From<&'a LocaleKey> for LocaleToken<'a> {
    fn from(key: &'a LocaleKey) -> Self {
        Self(Some(key.as_str()))
    }
}

/// Ordered set of supported locales with one designated default.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    /// Declaration order, used for default iteration.
    locales: Vec<LocaleKey>,
    /// Index into `locales`.
    default: usize,
}

impl LocaleRegistry {
    /// Build a registry, checking non-emptiness, key shape, uniqueness and
    /// default membership.
    pub fn new<I, S>(locales: I, default: &str) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut keys = Vec::new();

        for locale in locales {
            let locale = locale.as_ref();
            if !is_valid_key(locale) {
                return Err(RegistryError::InvalidKey(locale.to_string()));
            }
            if !seen.insert(locale.to_string()) {
                return Err(RegistryError::Duplicate(locale.to_string()));
            }
            keys.push(LocaleKey(Arc::from(locale)));
        }

        if keys.is_empty() {
            return Err(RegistryError::Empty);
        }

        let default = keys
            .iter()
            .position(|k| k.as_str() == default)
            .ok_or_else(|| RegistryError::DefaultNotSupported(default.to_string()))?;

        Ok(Self {
            locales: keys,
            default,
        })
    }

    /// Look up the registry's key for `token`.
    #[inline]
    pub fn get(&self, token: &str) -> Option<&LocaleKey> {
        self.locales.iter().find(|k| k.as_str() == token)
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    #[inline]
    pub fn default_locale(&self) -> &LocaleKey {
        &self.locales[self.default]
    }

    #[inline]
    pub fn is_default(&self, key: &LocaleKey) -> bool {
        key == self.default_locale()
    }

    /// Keys in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &LocaleKey> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// A locale key must fit in exactly one url path segment.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_default() {
        let registry = LocaleRegistry::new(["en", "ar", "zh"], "ar").unwrap();
        let keys: Vec<&str> = registry.iter().map(LocaleKey::as_str).collect();
        assert_eq!(keys, ["en", "ar", "zh"]);
        assert_eq!(registry.default_locale(), "ar");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registry_rejects_empty() {
        let locales: [&str; 0] = [];
        assert_eq!(
            LocaleRegistry::new(locales, "en").unwrap_err(),
            RegistryError::Empty
        );
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        assert_eq!(
            LocaleRegistry::new(["en", "ar", "en"], "en").unwrap_err(),
            RegistryError::Duplicate("en".into())
        );
    }

    #[test]
    fn test_registry_rejects_unknown_default() {
        assert_eq!(
            LocaleRegistry::new(["en", "ar"], "ja").unwrap_err(),
            RegistryError::DefaultNotSupported("ja".into())
        );
    }

    #[test]
    fn test_registry_rejects_invalid_keys() {
        for bad in ["", "en/us", "a b", "é"] {
            assert_eq!(
                LocaleRegistry::new(["en", bad], "en").unwrap_err(),
                RegistryError::InvalidKey(bad.into()),
                "accepted {bad:?}"
            );
        }
        assert!(LocaleRegistry::new(["zh-Hans", "pt_BR"], "pt_BR").is_ok());
    }

    #[test]
    fn test_get_returns_registry_key() {
        let registry = LocaleRegistry::new(["en", "ar"], "en").unwrap();
        assert_eq!(registry.get("ar").map(LocaleKey::as_str), Some("ar"));
        assert!(registry.get("AR").is_none());
        assert!(registry.get("").is_none());
        assert!(registry.is_default(registry.get("en").unwrap()));
        assert!(!registry.is_default(registry.get("ar").unwrap()));
    }

    #[test]
    fn test_token_conversions() {
        let owned = String::from("ar");
        let registry = LocaleRegistry::new(["en", "ar"], "en").unwrap();
        let key = registry.get("ar").unwrap();

        assert_eq!(LocaleToken::from("ar").as_str(), Some("ar"));
        assert_eq!(LocaleToken::from(&owned).as_str(), Some("ar"));
        assert_eq!(LocaleToken::from(Some("ar")).as_str(), Some("ar"));
        assert_eq!(LocaleToken::from(key).as_str(), Some("ar"));
        assert_eq!(LocaleToken::NONE.as_str(), None);
    }

    #[test]
    fn test_key_serializes_as_string() {
        let registry = LocaleRegistry::new(["en"], "en").unwrap();
        let json = serde_json::to_string(registry.default_locale()).unwrap();
        assert_eq!(json, r#""en""#);
    }
}
