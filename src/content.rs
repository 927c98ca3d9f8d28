//! Localized content entries.
//!
//! Entries come from a content collection whose ids start with the locale
//! directory: `en/posts/hello-world`, `ar/hello-world`. The last id segment
//! is the slug, so the same post in every locale shares one logical path.

use crate::i18n::{I18n, LocaleKey};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One content entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// `<locale>/<...>/<slug>`
    pub id: String,

    #[serde(default)]
    pub draft: bool,

    /// Logical path override, defaults to `/posts/<slug>/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Entry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            draft: false,
            path: None,
        }
    }

    /// Locale directory: the first id segment.
    pub fn locale(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    /// Last id segment.
    pub fn slug(&self) -> &str {
        self.segments().next_back().unwrap_or_default()
    }

    /// Locale-free path this entry is published under.
    pub fn logical_path(&self) -> String {
        match &self.path {
            Some(path) => path.clone(),
            None => format!("/posts/{}/", self.slug()),
        }
    }

    fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.id.split('/').filter(|s| !s.is_empty())
    }
}

/// Which entries survive grouping.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter<'a> {
    /// Keep drafts.
    pub drafts: bool,

    /// Locales to keep, every locale when empty.
    pub allowed: Vec<&'a str>,
}

impl<'a> EntryFilter<'a> {
    /// Published entries of every supported locale.
    pub fn supported(i18n: &'a I18n, drafts: bool) -> Self {
        Self {
            drafts,
            allowed: i18n.locales().map(LocaleKey::as_str).collect(),
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        (self.drafts || !entry.draft)
            && (self.allowed.is_empty() || self.allowed.iter().any(|l| *l == entry.locale()))
    }
}

/// Entries of one locale directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleGroup<'e> {
    pub locale: String,
    pub entries: Vec<&'e Entry>,
}

/// Group entries by locale directory.
///
/// With allowed locales, every allowed locale gets a group (empty when it
/// has no entries), in the filter's order. Without, groups follow first
/// appearance.
pub fn group_by_locale<'e>(entries: &'e [Entry], filter: &EntryFilter<'_>) -> Vec<LocaleGroup<'e>> {
    let mut groups: Vec<LocaleGroup<'e>> = filter
        .allowed
        .iter()
        .map(|locale| LocaleGroup {
            locale: (*locale).to_string(),
            entries: Vec::new(),
        })
        .collect();

    for entry in entries.iter().filter(|e| filter.matches(e)) {
        let locale = entry.locale();
        match groups.iter_mut().find(|g| g.locale == locale) {
            Some(group) => group.entries.push(entry),
            None => groups.push(LocaleGroup {
                locale: locale.to_string(),
                entries: vec![entry],
            }),
        }
    }

    groups
}

/// Read a JSON array of entries from a file, or stdin for `-`.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read entries from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read entries from {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid entries in {}", path.display()))
}
