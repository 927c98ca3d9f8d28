//! `[i18n]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default = "en"              # Locale served without a path segment
//! locales = ["en", "ar"]      # Declaration order is iteration order
//! base = "/blog"              # Optional, defaults to the path of site.info.url
//! messages = "i18n"           # Optional dir with <locale>.toml message files
//!
//! [i18n.profiles.en]
//! lang_tag = "en-US"
//! direction = "ltr"
//! font = "IBM Plex Mono"
//!
//! [i18n.profiles.en.messages]
//! home = "Home"
//! pageWithNo = "Page {no}"
//! "site.title" = "My Blog"
//!
//! [i18n.profiles.ar]
//! lang_tag = "ar-EG"
//! direction = "rtl"
//! ```
//!
//! Nested message tables are flattened with `.`, so `[..messages.site]
//! title = "x"` and `"site.title" = "x"` are the same key. Inline messages
//! win over entries from the messages directory.

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use crate::i18n::{BasePath, Direction, I18n, LocaleProfile, LocaleRegistry, MessageTable};
use anyhow::Result;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale whose pages carry no locale segment.
    pub default: String,

    /// Supported locales, in declaration order.
    pub locales: Vec<String>,

    /// Base path override. Takes precedence over `site.info.url`.
    pub base: Option<String>,

    /// Directory of `<locale>.toml` message files (relative to site root).
    pub messages: Option<PathBuf>,

    /// Per-locale metadata and messages.
    pub profiles: FxHashMap<String, ProfileConfig>,
}

/// `[i18n.profiles.<locale>]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// BCP 47 language tag, defaults to the locale key.
    pub lang_tag: Option<String>,

    /// Text direction: ltr | rtl.
    pub direction: Direction,

    /// Font family for this locale.
    pub font: Option<String>,

    /// Inline message templates.
    pub messages: toml::Table,
}

impl Default for I18nConfig {
    fn default() -> Self {
        let mut profiles = FxHashMap::default();
        profiles.insert("en".to_string(), ProfileConfig::default());
        Self {
            default: "en".into(),
            locales: vec!["en".into()],
            base: None,
            messages: None,
            profiles,
        }
    }
}

pub struct I18nFields {
    pub default: FieldPath,
    pub locales: FieldPath,
    pub base: FieldPath,
    pub messages: FieldPath,
    pub profiles: FieldPath,
}

impl I18nConfig {
    pub const FIELDS: I18nFields = I18nFields {
        default: FieldPath::new("i18n.default"),
        locales: FieldPath::new("i18n.locales"),
        base: FieldPath::new("i18n.base"),
        messages: FieldPath::new("i18n.messages"),
        profiles: FieldPath::new("i18n.profiles"),
    };

    /// Validate the locale table.
    ///
    /// # Checks
    /// - `locales` is non-empty, keys are single path segments, no duplicates
    /// - `default` is one of `locales`
    /// - every locale has exactly one profile, no profile for undeclared locales
    /// - inline messages are strings
    /// - `base` is a path, `messages` an existing directory
    ///
    /// Message files of undeclared locales are reported as warnings.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        self.validate_locales(diag);
        self.validate_profiles(diag);

        if let Some(base) = &self.base
            && base.contains(['?', '#', ':'])
        {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("`{base}` is not a url path"),
                "use a path like \"/blog\", or set site.info.url instead",
            );
        }

        if let Some(dir) = &self.messages {
            if root.join(dir).is_dir() {
                self.warn_undeclared_message_files(root, dir, diag);
            } else {
                diag.error(
                    Self::FIELDS.messages,
                    format!("directory `{}` not found", dir.display()),
                );
            }
        }
    }

    /// Files named after locales outside `locales` are never loaded.
    fn warn_undeclared_message_files(&self, root: &Path, dir: &Path, diag: &mut ConfigDiagnostics) {
        let Ok(read) = fs::read_dir(root.join(dir)) else {
            return;
        };

        let mut undeclared: Vec<String> = read
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| Some(path.file_stem()?.to_string_lossy().into_owned()))
            .filter(|stem| !self.locales.contains(stem))
            .collect();
        undeclared.sort_unstable();

        for stem in undeclared {
            diag.warn(
                Self::FIELDS.messages,
                format!(
                    "`{}` is not a declared locale, ignoring",
                    dir.join(format!("{stem}.toml")).display()
                ),
            );
        }
    }

    fn validate_locales(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.locales,
                "no locales declared",
                format!("e.g.: locales = [\"{}\"]", self.default),
            );
            return;
        }

        let mut seen = FxHashSet::default();
        for locale in &self.locales {
            if !crate::i18n::is_valid_key(locale) {
                diag.error_with_hint(
                    Self::FIELDS.locales,
                    format!("`{locale}` is not a valid locale key"),
                    "use a single path segment of letters, digits, `-` or `_`",
                );
            } else if !seen.insert(locale.as_str()) {
                diag.error(
                    Self::FIELDS.locales,
                    format!("`{locale}` declared more than once"),
                );
            }
        }

        if !self.locales.contains(&self.default) {
            diag.error_with_hint(
                Self::FIELDS.default,
                format!("default locale `{}` is not in {}", self.default, Self::FIELDS.locales),
                format!("add \"{}\" to {}", self.default, Self::FIELDS.locales),
            );
        }
    }

    fn validate_profiles(&self, diag: &mut ConfigDiagnostics) {
        for locale in &self.locales {
            if !self.profiles.contains_key(locale) {
                diag.error_with_hint(
                    Self::FIELDS.profiles,
                    format!("locale `{locale}` has no profile"),
                    format!("add an [i18n.profiles.{locale}] section"),
                );
            }
        }

        let mut undeclared: Vec<_> = self
            .profiles
            .keys()
            .filter(|name| !self.locales.contains(*name))
            .collect();
        undeclared.sort_unstable();
        for name in undeclared {
            diag.error_with_hint(
                Self::FIELDS.profiles,
                format!("profile `{name}` is not in {}", Self::FIELDS.locales),
                format!("declare it in {} or remove the profile", Self::FIELDS.locales),
            );
        }

        let mut names: Vec<_> = self.profiles.keys().collect();
        names.sort_unstable();
        for name in names {
            if let Err(key) = flatten_messages(&self.profiles[name].messages) {
                diag.error(
                    Self::FIELDS.profiles,
                    format!("message `{key}` of `{name}` must be a string"),
                );
            }
        }
    }

    /// Build the immutable i18n instance.
    pub fn build(&self, root: &Path, base: BasePath) -> Result<I18n> {
        let registry = LocaleRegistry::new(&self.locales, &self.default)?;
        let profiles = self.load_profiles(root)?;
        Ok(I18n::new(registry, profiles, base)?)
    }

    /// Profiles of declared locales with inline and file messages merged.
    fn load_profiles(&self, root: &Path) -> Result<FxHashMap<String, LocaleProfile>> {
        let mut profiles = FxHashMap::default();

        for locale in &self.locales {
            let Some(profile) = self.profiles.get(locale) else {
                continue;
            };

            let mut messages = flatten_messages(&profile.messages).map_err(|key| {
                anyhow::anyhow!("message `{key}` of `{locale}` must be a string")
            })?;

            if let Some(dir) = &self.messages {
                let path = root.join(dir).join(format!("{locale}.toml"));
                if path.is_file() {
                    messages.fill_from(load_message_file(&path)?);
                } else {
                    crate::debug!("i18n"; "no message file for `{}` at {}", locale, path.display());
                }
            }

            profiles.insert(
                locale.clone(),
                LocaleProfile {
                    lang_tag: profile.lang_tag.clone().unwrap_or_else(|| locale.clone()),
                    direction: profile.direction,
                    font: profile.font.clone(),
                    messages,
                },
            );
        }

        Ok(profiles)
    }
}

/// Read a `<locale>.toml` message file.
fn load_message_file(path: &Path) -> Result<MessageTable> {
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
    let table: toml::Table =
        toml::from_str(&content).map_err(|err| ConfigError::Messages(path.to_path_buf(), err))?;
    flatten_messages(&table).map_err(|key| {
        anyhow::anyhow!("message `{key}` in {} must be a string", path.display())
    })
}

/// Flatten nested tables into dotted keys.
///
/// Returns the offending key if a leaf isn't a string.
fn flatten_messages(table: &toml::Table) -> Result<MessageTable, String> {
    fn walk(prefix: &str, table: &toml::Table, out: &mut MessageTable) -> Result<(), String> {
        for (key, value) in table {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match value {
                toml::Value::String(template) => out.insert(path, template.clone()),
                toml::Value::Table(nested) => walk(&path, nested, out)?,
                _ => return Err(path),
            }
        }
        Ok(())
    }

    let mut out = MessageTable::new();
    walk("", table, &mut out)?;
    Ok(out)
}
