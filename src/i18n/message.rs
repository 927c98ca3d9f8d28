//! Message tables and placeholder substitution.
//!
//! Templates use `{name}` placeholders:
//!
//! ```ignore
//! let t = i18n.translator_for("en")?;
//! t.translate_with("pageWithNo", [("no", 1)])?; // "Page 1"
//! ```

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::I18nError;
use super::locale::LocaleKey;

/// Message key → template string for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable(FxHashMap<String, String>);

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.0.insert(key.into(), template.into());
    }

    /// Add entries from `other` whose keys are not already present.
    pub fn fill_from(&mut self, other: MessageTable) {
        for (key, template) in other.0 {
            self.0.entry(key).or_insert(template);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Translator bound to one resolved locale.
///
/// Obtained from `I18n::translator_for`, which rejects unsupported locales
/// before a translator exists.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    locale: &'a LocaleKey,
    messages: &'a MessageTable,
}

impl<'a> Translator<'a> {
    pub(crate) const fn new(locale: &'a LocaleKey, messages: &'a MessageTable) -> Self {
        Self { locale, messages }
    }

    #[inline]
    pub const fn locale(&self) -> &'a LocaleKey {
        self.locale
    }

    /// Look up `key` with no substitutions.
    pub fn translate(&self, key: &str) -> Result<String, I18nError> {
        self.template(key).map(str::to_owned)
    }

    /// Look up `key` and substitute placeholders.
    ///
    /// Each `(name, value)` replaces the first `{name}` in the template.
    /// Placeholders without a matching name are left as they are.
    pub fn translate_with<I, K, V>(&self, key: &str, substitutions: I) -> Result<String, I18nError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        let mut message = self.template(key)?.to_owned();
        for (name, value) in substitutions {
            let placeholder = format!("{{{}}}", name.as_ref());
            if message.contains(&placeholder) {
                message = message.replacen(&placeholder, &value.to_string(), 1);
            }
        }
        Ok(message)
    }

    fn template(&self, key: &str) -> Result<&'a str, I18nError> {
        self.messages
            .get(key)
            .ok_or_else(|| I18nError::MissingMessageKey {
                locale: self.locale.to_string(),
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleRegistry;

    fn table() -> MessageTable {
        [
            ("home", "Home"),
            ("pageWithNo", "Page {no}"),
            ("tag.desc", "All the articles with the tag \"{name}\"."),
            ("footer.text", "Copyright © {year} | All rights reserved"),
            ("twice", "{x} and {x}"),
        ]
        .into_iter()
        .collect()
    }

    fn with_translator(f: impl FnOnce(Translator<'_>)) {
        let registry = LocaleRegistry::new(["en"], "en").unwrap();
        let messages = table();
        f(Translator::new(registry.default_locale(), &messages));
    }

    #[test]
    fn test_plain_lookup() {
        with_translator(|t| {
            assert_eq!(t.translate("home").unwrap(), "Home");
            assert_eq!(t.locale(), "en");
        });
    }

    #[test]
    fn test_substitution() {
        with_translator(|t| {
            assert_eq!(t.translate_with("pageWithNo", [("no", "1")]).unwrap(), "Page 1");
            assert_eq!(t.translate_with("pageWithNo", [("no", 2)]).unwrap(), "Page 2");
            assert_eq!(
                t.translate_with("footer.text", [("year", 2025)]).unwrap(),
                "Copyright © 2025 | All rights reserved"
            );
        });
    }

    #[test]
    fn test_unmatched_substitution_is_ignored() {
        with_translator(|t| {
            assert_eq!(t.translate_with("home", [("no", "1")]).unwrap(), "Home");
            assert_eq!(
                t.translate_with("pageWithNo", [("page", "1")]).unwrap(),
                "Page {no}"
            );
        });
    }

    #[test]
    fn test_unmatched_placeholder_kept_verbatim() {
        with_translator(|t| {
            assert_eq!(t.translate("pageWithNo").unwrap(), "Page {no}");
        });
    }

    #[test]
    fn test_only_first_occurrence_replaced() {
        with_translator(|t| {
            assert_eq!(t.translate_with("twice", [("x", "a")]).unwrap(), "a and {x}");
        });
    }

    #[test]
    fn test_missing_key() {
        with_translator(|t| {
            let err = t.translate("nope").unwrap_err();
            assert_eq!(
                err,
                I18nError::MissingMessageKey {
                    locale: "en".into(),
                    key: "nope".into()
                }
            );
            assert!(t.translate_with("nope", [("a", "b")]).is_err());
        });
    }

    #[test]
    fn test_fill_from_keeps_existing() {
        let mut messages = table();
        let extra: MessageTable = [("home", "Start"), ("about", "About")].into_iter().collect();
        messages.fill_from(extra);
        assert_eq!(messages.get("home"), Some("Home"));
        assert_eq!(messages.get("about"), Some("About"));
    }
}
