//! Locale-aware paths and messages.
//!
//! # Module Structure
//!
//! ```text
//! i18n/
//! ├── locale     # LocaleKey, LocaleToken, LocaleRegistry
//! ├── profile    # LocaleProfile, Direction
//! ├── message    # MessageTable, Translator
//! ├── prefix     # BasePath, prefix composition
//! ├── path       # localize / delocalize
//! ├── extract    # locale detection in paths and urls
//! └── error      # I18nError, RegistryError
//! ```
//!
//! [`I18n`] is built once from configuration and never mutated. It can be
//! passed around explicitly, or installed with [`init`] to back the free
//! functions at the bottom of this module.

mod error;
mod extract;
mod locale;
mod message;
mod path;
mod prefix;
mod profile;

pub use error::{I18nError, RegistryError};
pub(crate) use locale::is_valid_key;
pub use locale::{LocaleKey, LocaleRegistry, LocaleToken};
pub use message::{MessageTable, Translator};
pub use path::Alternate;
pub use prefix::BasePath;
pub use profile::{Direction, LocaleProfile};

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Immutable i18n configuration: registry, per-locale profiles, base path.
#[derive(Debug, Clone)]
pub struct I18n {
    registry: LocaleRegistry,
    /// Exactly one profile per registry key.
    profiles: FxHashMap<LocaleKey, LocaleProfile>,
    base: BasePath,
}

impl I18n {
    /// Assemble from a registry and profiles keyed by locale.
    ///
    /// Every registered locale needs a profile. Profiles for locales outside
    /// the registry are dropped.
    pub fn new(
        registry: LocaleRegistry,
        mut profiles: FxHashMap<String, LocaleProfile>,
        base: BasePath,
    ) -> Result<Self, RegistryError> {
        let mut by_key = FxHashMap::default();
        for key in registry.iter() {
            let profile = profiles
                .remove(key.as_str())
                .ok_or_else(|| RegistryError::MissingProfile(key.to_string()))?;
            by_key.insert(key.clone(), profile);
        }

        Ok(Self {
            registry,
            profiles: by_key,
            base,
        })
    }

    #[inline]
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    #[inline]
    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Supported locales in declaration order.
    pub fn locales(&self) -> impl ExactSizeIterator<Item = &LocaleKey> {
        self.registry.iter()
    }

    #[inline]
    pub fn default_locale(&self) -> &LocaleKey {
        self.registry.default_locale()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// True iff `token` is present and supported. Never fails.
    pub fn is_supported_locale<'a>(&self, token: impl Into<LocaleToken<'a>>) -> bool {
        token
            .into()
            .as_str()
            .is_some_and(|t| self.registry.contains(t))
    }

    /// Resolve `token` into the registry's key.
    ///
    /// Absent and unknown tokens both fail with `UnsupportedLocale`; only the
    /// payload tells them apart.
    pub fn resolve_locale<'a>(
        &self,
        token: impl Into<LocaleToken<'a>>,
    ) -> Result<&LocaleKey, I18nError> {
        let token = token.into().as_str();
        token
            .and_then(|t| self.registry.get(t))
            .ok_or_else(|| I18nError::unsupported(token))
    }

    /// Resolve `token`, falling back to the default locale.
    ///
    /// For route parameters where "absent" means "default".
    pub fn resolve_or_default<'a>(&self, token: impl Into<LocaleToken<'a>>) -> &LocaleKey {
        self.resolve_locale(token)
            .unwrap_or_else(|_| self.default_locale())
    }

    // ========================================================================
    // profiles and messages
    // ========================================================================

    /// Metadata for a supported locale.
    pub fn profile<'a>(
        &self,
        token: impl Into<LocaleToken<'a>>,
    ) -> Result<&LocaleProfile, I18nError> {
        let key = self.resolve_locale(token)?;
        Ok(self.profile_of(key))
    }

    /// Translator bound to `token`'s message table.
    ///
    /// Fails here, not on the first lookup, when the locale is unsupported.
    pub fn translator_for<'a>(
        &self,
        token: impl Into<LocaleToken<'a>>,
    ) -> Result<Translator<'_>, I18nError> {
        let key = self.resolve_locale(token)?;
        Ok(Translator::new(key, &self.profile_of(key).messages))
    }

    pub(crate) fn profile_of(&self, key: &LocaleKey) -> &LocaleProfile {
        // `new` guarantees a profile for every registry key
        &self.profiles[key]
    }

    // ========================================================================
    // prefixes
    // ========================================================================

    /// Path segment for `key`, `None` for the default locale.
    ///
    /// Matches the `[...locale]` parameter of statically generated routes.
    pub fn route_segment<'k>(&self, key: &'k LocaleKey) -> Option<&'k str> {
        (!self.registry.is_default(key)).then(|| key.as_str())
    }

    /// Base path plus locale segment (omitted for the default locale).
    pub fn build_prefix(&self, key: &LocaleKey) -> String {
        prefix::compose(&self.base, self.route_segment(key))
    }
}

// ============================================================================
// process-wide instance
// ============================================================================

static GLOBAL: OnceLock<I18n> = OnceLock::new();

/// Install the process-wide instance.
///
/// Succeeds once; later calls hand their value back unchanged.
pub fn init(i18n: I18n) -> Result<&'static I18n, I18n> {
    GLOBAL.set(i18n)?;
    Ok(global())
}

/// The process-wide instance.
///
/// # Panics
///
/// If called before [`init`]. Configuration is loaded at startup, so this is
/// a wiring bug rather than a runtime condition.
pub fn global() -> &'static I18n {
    GLOBAL
        .get()
        .expect("i18n::init must run before any locale lookup")
}

pub fn is_supported_locale<'a>(token: impl Into<LocaleToken<'a>>) -> bool {
    global().is_supported_locale(token)
}

pub fn resolve_locale<'a>(token: impl Into<LocaleToken<'a>>) -> Result<&'static LocaleKey, I18nError> {
    global().resolve_locale(token)
}

pub fn localize<'a>(token: impl Into<LocaleToken<'a>>, logical: &str) -> Result<String, I18nError> {
    global().localize(token, logical)
}

pub fn localize_root<'a>(token: impl Into<LocaleToken<'a>>) -> Result<String, I18nError> {
    global().localize_root(token)
}

pub fn delocalize<'a>(token: impl Into<LocaleToken<'a>>, public: &str) -> Result<String, I18nError> {
    global().delocalize(token, public)
}

pub fn is_path_localized(path: &str) -> bool {
    global().is_path_localized(path)
}

pub fn extract_locale(url_or_path: &str) -> Option<&'static LocaleKey> {
    global().extract_locale(url_or_path)
}

pub fn translator_for<'a>(
    token: impl Into<LocaleToken<'a>>,
) -> Result<Translator<'static>, I18nError> {
    global().translator_for(token)
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Build an instance where every locale gets a small english-ish table.
///
/// `ar` is right-to-left, every other locale left-to-right.
#[cfg(test)]
pub fn test_i18n(locales: &[&str], default: &str, base: &str) -> I18n {
    let registry = LocaleRegistry::new(locales.iter().copied(), default).unwrap();
    let profiles = locales
        .iter()
        .map(|&locale| {
            let messages: MessageTable = [
                ("home", format!("Home ({locale})")),
                ("pageWithNo", "Page {no}".to_string()),
                ("tag.desc", "All the articles with the tag \"{name}\".".to_string()),
            ]
            .into_iter()
            .collect();
            let profile = LocaleProfile {
                lang_tag: format!("{locale}-XX"),
                direction: if locale == "ar" {
                    Direction::Rtl
                } else {
                    Direction::Ltr
                },
                font: None,
                messages,
            };
            (locale.to_string(), profile)
        })
        .collect();
    I18n::new(registry, profiles, BasePath::new(base)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_ar() -> I18n {
        test_i18n(&["en", "ar"], "en", "/")
    }

    #[test]
    fn test_new_requires_profile_per_locale() {
        let registry = LocaleRegistry::new(["en", "ar"], "en").unwrap();
        let mut profiles = FxHashMap::default();
        profiles.insert("en".to_string(), LocaleProfile::default());
        profiles.insert("fr".to_string(), LocaleProfile::default());

        let err = I18n::new(registry, profiles, BasePath::root()).unwrap_err();
        assert_eq!(err, RegistryError::MissingProfile("ar".into()));
    }

    #[test]
    fn test_is_supported_locale_totality() {
        let i18n = en_ar();
        assert!(i18n.is_supported_locale("en"));
        assert!(i18n.is_supported_locale("ar"));
        assert!(!i18n.is_supported_locale(LocaleToken::NONE));
        assert!(!i18n.is_supported_locale(""));
        assert!(!i18n.is_supported_locale("xx"));
        assert!(!i18n.is_supported_locale("EN"));
    }

    #[test]
    fn test_resolve_locale_rejects_same_inputs() {
        let i18n = en_ar();
        assert_eq!(i18n.resolve_locale("ar").unwrap(), "ar");
        assert_eq!(
            i18n.resolve_locale("xx").unwrap_err(),
            I18nError::UnsupportedLocale(Some("xx".into()))
        );
        assert_eq!(
            i18n.resolve_locale("").unwrap_err(),
            I18nError::UnsupportedLocale(Some(String::new()))
        );
        assert_eq!(
            i18n.resolve_locale(LocaleToken::NONE).unwrap_err(),
            I18nError::UnsupportedLocale(None)
        );
    }

    #[test]
    fn test_resolve_or_default() {
        let i18n = en_ar();
        assert_eq!(i18n.resolve_or_default("ar"), "ar");
        assert_eq!(i18n.resolve_or_default(LocaleToken::NONE), "en");
        assert_eq!(i18n.resolve_or_default("xx"), "en");
    }

    #[test]
    fn test_profile_lookup() {
        let i18n = en_ar();
        let profile = i18n.profile("ar").unwrap();
        assert_eq!(profile.lang_tag, "ar-XX");
        assert!(profile.direction.is_rtl());

        assert!(matches!(
            i18n.profile("unsupported"),
            Err(I18nError::UnsupportedLocale(_))
        ));
        assert!(matches!(
            i18n.profile(LocaleToken::NONE),
            Err(I18nError::UnsupportedLocale(None))
        ));
    }

    #[test]
    fn test_translator_for_is_eager() {
        let i18n = en_ar();
        assert!(matches!(
            i18n.translator_for(LocaleToken::NONE),
            Err(I18nError::UnsupportedLocale(None))
        ));
        assert!(i18n.translator_for("xx").is_err());

        let t = i18n.translator_for("en").unwrap();
        assert_eq!(t.translate("home").unwrap(), "Home (en)");
        assert_eq!(t.translate_with("pageWithNo", [("no", "1")]).unwrap(), "Page 1");
    }

    #[test]
    fn test_translator_uses_locale_table() {
        let i18n = en_ar();
        let t = i18n.translator_for("ar").unwrap();
        assert_eq!(t.locale(), "ar");
        assert_eq!(t.translate("home").unwrap(), "Home (ar)");
    }

    #[test]
    fn test_route_segment() {
        let i18n = en_ar();
        let segments: Vec<_> = i18n.locales().map(|k| i18n.route_segment(k)).collect();
        assert_eq!(segments, [None, Some("ar")]);
    }

    #[test]
    fn test_build_prefix() {
        let i18n = test_i18n(&["es", "ja"], "es", "/");
        assert_eq!(i18n.build_prefix(i18n.resolve_locale("es").unwrap()), "/");
        assert_eq!(i18n.build_prefix(i18n.resolve_locale("ja").unwrap()), "/ja");

        let i18n = test_i18n(&["es", "ja"], "es", "/astro-paper-i18n");
        assert_eq!(
            i18n.build_prefix(i18n.resolve_locale("es").unwrap()),
            "/astro-paper-i18n"
        );
        assert_eq!(
            i18n.build_prefix(i18n.resolve_locale("ja").unwrap()),
            "/astro-paper-i18n/ja"
        );
    }

    #[test]
    fn test_reference_scenarios() {
        let i18n = en_ar();
        assert_eq!(i18n.localize("ar", "/posts/1").unwrap(), "/ar/posts/1");
        assert_eq!(i18n.localize("en", "/posts/1").unwrap(), "/posts/1");

        assert_eq!(
            i18n.extract_locale("https://example.com/ar/posts/1")
                .map(LocaleKey::as_str),
            Some("ar")
        );
        assert_eq!(i18n.extract_locale("/posts/1"), None);

        let astro = test_i18n(&["es", "ja"], "es", "/astro");
        assert_eq!(astro.localize("ja", "/posts/1").unwrap(), "/astro/ja/posts/1");
        assert_eq!(astro.delocalize("ja", "/astro/ja/posts/1").unwrap(), "/posts/1");

        assert!(i18n.is_path_localized("ar/posts/1"));
        assert!(!i18n.is_path_localized("posts/1"));

        assert_eq!(
            i18n.resolve_locale("xx").unwrap_err(),
            I18nError::UnsupportedLocale(Some("xx".into()))
        );

        let t = i18n.translator_for("en").unwrap();
        assert_eq!(t.translate_with("pageWithNo", [("no", "1")]).unwrap(), "Page 1");
    }

    #[test]
    fn test_global_free_functions() {
        // Only test in the crate that installs the global instance
        let _ = init(en_ar());
        assert!(GLOBAL.get().is_some());

        assert!(is_supported_locale("ar"));
        assert!(!is_supported_locale("xx"));
        assert_eq!(resolve_locale("ar").unwrap(), "ar");
        assert_eq!(
            resolve_locale("xx").unwrap_err(),
            I18nError::UnsupportedLocale(Some("xx".into()))
        );
        assert_eq!(localize("ar", "/posts/1").unwrap(), "/ar/posts/1");
        assert_eq!(localize("en", "/posts/1").unwrap(), "/posts/1");
        assert_eq!(localize_root("en").unwrap(), "/");
        assert_eq!(delocalize("ar", "/ar/posts/1").unwrap(), "/posts/1");
        assert!(is_path_localized("ar/posts/1"));
        assert!(!is_path_localized("posts/1"));
        assert_eq!(
            extract_locale("https://example.com/ar/posts/1").map(LocaleKey::as_str),
            Some("ar")
        );
        assert_eq!(extract_locale("/posts/1"), None);
        assert_eq!(
            translator_for("en")
                .unwrap()
                .translate_with("pageWithNo", [("no", "1")])
                .unwrap(),
            "Page 1"
        );

        // second init is refused
        assert!(init(test_i18n(&["fr"], "fr", "/")).is_err());
        assert!(is_supported_locale("en"));
    }
}
