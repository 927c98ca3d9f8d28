//! Route manifest generation.
//!
//! Lists the public path of every page in every locale, the same set a
//! static build emits from `[...locale]` routes:
//!
//! ```json
//! [
//!   {
//!     "locale": "en",
//!     "lang_tag": "en-US",
//!     "direction": "ltr",
//!     "segment": null,
//!     "routes": [{ "logical": "/", "public": "/astro/" }]
//!   }
//! ]
//! ```

use crate::content::{Entry, EntryFilter, group_by_locale};
use crate::i18n::{Direction, I18n, LocaleKey};
use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

/// Routes of one locale.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleRoutes<'a> {
    pub locale: &'a LocaleKey,
    pub lang_tag: &'a str,
    pub direction: Direction,
    /// Static-route parameter, `None` for the default locale.
    pub segment: Option<&'a str>,
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub logical: String,
    pub public: String,
}

/// Every locale's routes, in declaration order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RouteManifest<'a> {
    pub locales: Vec<LocaleRoutes<'a>>,
}

impl<'a> RouteManifest<'a> {
    /// Build the manifest: each locale's root plus its own entries.
    ///
    /// Entries of unsupported locales are skipped.
    pub fn build(i18n: &'a I18n, entries: &[Entry], drafts: bool) -> Self {
        let groups = group_by_locale(entries, &EntryFilter::supported(i18n, drafts));
        let keys: Vec<_> = i18n.locales().collect();

        let locales = keys
            .into_par_iter()
            .zip(groups.par_iter())
            .map(|(key, group)| {
                let logical = logical_paths(&group.entries);
                let profile = i18n.profile_of(key);
                LocaleRoutes {
                    locale: key,
                    lang_tag: &profile.lang_tag,
                    direction: profile.direction,
                    segment: i18n.route_segment(key),
                    routes: logical
                        .into_iter()
                        .map(|logical| Route {
                            public: i18n.localize_key(key, &logical),
                            logical,
                        })
                        .collect(),
                }
            })
            .collect();

        Self { locales }
    }

    /// Total route count across locales.
    pub fn len(&self) -> usize {
        self.locales.iter().map(|l| l.routes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        Ok(if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        })
    }
}

/// Root first, then entry paths in order, without duplicates.
pub(crate) fn logical_paths(entries: &[&Entry]) -> Vec<String> {
    let mut paths = vec!["/".to_string()];
    for entry in entries {
        let path = entry.logical_path();
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}
